use std::fmt;
use std::str::FromStr;

/// Search strategy used by [`PathFinder`](crate::PathFinder).
///
/// Every mode shares the same best-first loop and differs only in how a
/// relaxed node is scored and how successors are generated:
///
/// | Mode | successors | `g` | `f` |
/// |---|---|---|---|
/// | `UniformCost` | 8 neighbours, unit cost | parent `g` + 1 | `g` |
/// | `Greedy` | 8 neighbours | `h` | `h` |
/// | `AStar` | 8 neighbours, unit cost | parent `g` + 1 | `g + h` |
/// | `JpsPlus` | precomputed jumps | parent `g` + jump cost | `g + h` |
///
/// `h` is the Manhattan distance to the goal. Diagonal steps cost the same
/// as straight ones except in `JpsPlus`, which charges √2 per diagonal cell.
/// `Greedy` overwrites `g` with `h` instead of accumulating cost, so it is
/// purely heuristic-driven and its paths are not shortest paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    UniformCost,
    Greedy,
    AStar,
    JpsPlus,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::UniformCost, Mode::Greedy, Mode::AStar, Mode::JpsPlus];

    pub const fn name(self) -> &'static str {
        match self {
            Mode::UniformCost => "uniform-cost",
            Mode::Greedy => "greedy",
            Mode::AStar => "a*",
            Mode::JpsPlus => "jps+",
        }
    }

    /// Whether this mode needs a [`ScanIndex`](crate::ScanIndex).
    #[inline]
    pub const fn uses_jumps(self) -> bool {
        matches!(self, Mode::JpsPlus)
    }

    /// `(g, f)` for the start node.
    pub(crate) fn start_scores(self, h: f64) -> (f64, f64) {
        match self {
            Mode::UniformCost => (0.0, 0.0),
            Mode::Greedy | Mode::AStar | Mode::JpsPlus => (0.0, h),
        }
    }

    /// `(g, f)` for a node reached from a parent with cost `parent_g` over
    /// an edge of cost `step`, with heuristic `h`.
    pub(crate) fn scores(self, parent_g: f64, step: f64, h: f64) -> (f64, f64) {
        match self {
            Mode::UniformCost => {
                let g = parent_g + step;
                (g, g)
            }
            Mode::Greedy => (h, h),
            Mode::AStar | Mode::JpsPlus => {
                let g = parent_g + step;
                (g, g + h)
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Mode`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search mode \u{201c}{}\u{201d} (expected uniform, greedy, astar or jps)",
            self.0
        )
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "uniform-cost" | "dijkstra" => Ok(Mode::UniformCost),
            "greedy" | "heuristic" | "best-first" => Ok(Mode::Greedy),
            "astar" | "a*" => Ok(Mode::AStar),
            "jps" | "jps+" | "jpsplus" => Ok(Mode::JpsPlus),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("Dijkstra".parse(), Ok(Mode::UniformCost));
        assert_eq!("best-first".parse(), Ok(Mode::Greedy));
        assert_eq!(" A* ".parse(), Ok(Mode::AStar));
        assert_eq!("JPS+".parse(), Ok(Mode::JpsPlus));
        assert!("bfs".parse::<Mode>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for m in Mode::ALL {
            assert_eq!(m.to_string().parse(), Ok(m));
        }
    }

    #[test]
    fn greedy_does_not_accumulate() {
        assert_eq!(Mode::Greedy.scores(10.0, 1.0, 3.0), (3.0, 3.0));
        assert_eq!(Mode::UniformCost.scores(10.0, 1.0, 3.0), (11.0, 11.0));
        assert_eq!(Mode::AStar.scores(10.0, 1.0, 3.0), (11.0, 14.0));
    }
}
