//! Shared pieces of the jumpgrid demos: random maps, command-line parsing
//! and terminal rendering of a found path.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use rand::{Rng, RngExt};

use jumpgrid_core::{Grid, MapSymbols, Point};
use jumpgrid_paths::{Mode, ParseModeError, Path};

/// Obstacle probability, in percent, for random maps.
pub const DEFAULT_OBSTACLE_PERCENT: u32 = 50;

// ---------------------------------------------------------------------------
// Random maps
// ---------------------------------------------------------------------------

/// A `width` x `height` grid where each cell is an obstacle with
/// probability `obstacle_percent` / 100.
pub fn random_grid(width: i32, height: i32, obstacle_percent: u32, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new(width, height);
    for p in grid.range() {
        if rng.random_range(0..100) < obstacle_percent {
            grid.set_obstacle(p, true);
        }
    }
    grid
}

/// A uniformly chosen open cell, or `None` if the grid has none.
pub fn random_open_cell(grid: &Grid, rng: &mut impl Rng) -> Option<Point> {
    let open = grid.open_count();
    if open == 0 {
        return None;
    }
    let n = rng.random_range(0..open);
    grid.nodes().filter(|node| !node.obstacle).nth(n).map(|node| node.pos)
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    File(PathBuf),
    Random {
        width: i32,
        height: i32,
        seed: Option<u64>,
    },
}

impl Default for MapSource {
    fn default() -> Self {
        MapSource::Random {
            width: 40,
            height: 20,
            seed: None,
        }
    }
}

/// Parsed `jps-demo` command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoArgs {
    pub source: MapSource,
    pub from: Option<Point>,
    pub to: Option<Point>,
    /// `None` runs every mode.
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    MissingValue(&'static str),
    BadPoint(String),
    BadSize(String),
    Mode(ParseModeError),
    Unexpected(String),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::MissingValue(flag) => write!(f, "{flag} needs a value"),
            ArgError::BadPoint(s) => write!(f, "expected X,Y, got \u{201c}{s}\u{201d}"),
            ArgError::BadSize(s) => write!(f, "expected WxH[:SEED], got \u{201c}{s}\u{201d}"),
            ArgError::Mode(e) => write!(f, "{e}"),
            ArgError::Unexpected(s) => write!(f, "unexpected argument \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for ArgError {}

pub const USAGE: &str = "usage: jps-demo [MAP_FILE | --random WxH[:SEED]] [--from X,Y] [--to X,Y] [--mode MODE]";

impl DemoArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ArgError> {
        let mut out = DemoArgs::default();
        let mut file_seen = false;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--random" => {
                    let v = args.next().ok_or(ArgError::MissingValue("--random"))?;
                    out.source = parse_size(&v)?;
                }
                "--from" => {
                    let v = args.next().ok_or(ArgError::MissingValue("--from"))?;
                    out.from = Some(parse_point(&v)?);
                }
                "--to" => {
                    let v = args.next().ok_or(ArgError::MissingValue("--to"))?;
                    out.to = Some(parse_point(&v)?);
                }
                "--mode" => {
                    let v = args.next().ok_or(ArgError::MissingValue("--mode"))?;
                    out.mode = Some(v.parse().map_err(ArgError::Mode)?);
                }
                s if s.starts_with("--") || file_seen => {
                    return Err(ArgError::Unexpected(arg));
                }
                _ => {
                    file_seen = true;
                    out.source = MapSource::File(PathBuf::from(arg));
                }
            }
        }
        Ok(out)
    }
}

fn parse_point(s: &str) -> Result<Point, ArgError> {
    let bad = || ArgError::BadPoint(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse().map_err(|_| bad())?;
    let y = y.trim().parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

fn parse_size(s: &str) -> Result<MapSource, ArgError> {
    let bad = || ArgError::BadSize(s.to_string());
    let (dims, seed) = match s.split_once(':') {
        Some((dims, seed)) => (dims, Some(seed.parse().map_err(|_| bad())?)),
        None => (s, None),
    };
    let (w, h) = dims.split_once(['x', 'X']).ok_or_else(bad)?;
    let width: i32 = w.parse().map_err(|_| bad())?;
    let height: i32 = h.parse().map_err(|_| bad())?;
    if width <= 0 || height <= 0 {
        return Err(bad());
    }
    Ok(MapSource::Random { width, height, seed })
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Print `grid` one text row per line, overlaying the walk of `path` and
/// marking `start` and `goal`.
pub fn render(
    out: &mut impl Write,
    grid: &Grid,
    path: Option<&Path>,
    start: Point,
    goal: Point,
) -> io::Result<()> {
    let symbols = MapSymbols::default();
    let walkable = symbols.walkable.chars().next().unwrap_or('.');
    let walk: HashSet<Point> = path.map(|p| p.steps().into_iter().collect()).unwrap_or_default();
    let waypoints: HashSet<Point> = path.map(|p| p.nodes().iter().copied().collect()).unwrap_or_default();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let (color, ch) = if p == start {
                (Color::Green, 'S')
            } else if p == goal {
                (Color::Red, 'G')
            } else if grid.is_obstacle(p) {
                (Color::DarkGrey, symbols.obstacle)
            } else if waypoints.contains(&p) {
                (Color::Yellow, '+')
            } else if walk.contains(&p) {
                (Color::Cyan, '*')
            } else {
                (Color::Reset, walkable)
            };
            queue!(out, SetForegroundColor(color), Print(ch))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn random_grid_is_seeded() {
        let a = random_grid(20, 10, 50, &mut SmallRng::seed_from_u64(7));
        let b = random_grid(20, 10, 50, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.width(), 20);
        assert_eq!(a.height(), 10);
    }

    #[test]
    fn obstacle_percent_extremes() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(random_grid(8, 8, 0, &mut rng).open_count(), 64);
        let full = random_grid(8, 8, 100, &mut rng);
        assert_eq!(full.open_count(), 0);
        assert_eq!(random_open_cell(&full, &mut rng), None);
    }

    #[test]
    fn random_open_cell_is_open() {
        let mut rng = SmallRng::seed_from_u64(3);
        let grid = random_grid(12, 12, 40, &mut rng);
        for _ in 0..20 {
            let p = random_open_cell(&grid, &mut rng).unwrap();
            assert!(grid.is_open(p));
        }
    }

    fn args(list: &[&str]) -> Result<DemoArgs, ArgError> {
        DemoArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parse_full_command_line() {
        let a = args(&["--random", "30x12:99", "--from", "1,2", "--to", "28, 10", "--mode", "jps"]).unwrap();
        assert_eq!(
            a.source,
            MapSource::Random {
                width: 30,
                height: 12,
                seed: Some(99)
            }
        );
        assert_eq!(a.from, Some(Point::new(1, 2)));
        assert_eq!(a.to, Some(Point::new(28, 10)));
        assert_eq!(a.mode, Some(Mode::JpsPlus));
    }

    #[test]
    fn parse_map_file_and_defaults() {
        let a = args(&["maps/cave.txt"]).unwrap();
        assert_eq!(a.source, MapSource::File(PathBuf::from("maps/cave.txt")));
        assert_eq!(a.mode, None);
        assert_eq!(args(&[]).unwrap(), DemoArgs::default());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(args(&["--from"]), Err(ArgError::MissingValue("--from")));
        assert!(matches!(args(&["--to", "3"]), Err(ArgError::BadPoint(_))));
        assert!(matches!(args(&["--random", "0x4"]), Err(ArgError::BadSize(_))));
        assert!(matches!(args(&["--mode", "bfs"]), Err(ArgError::Mode(_))));
        assert!(matches!(args(&["a.txt", "b.txt"]), Err(ArgError::Unexpected(_))));
        assert!(matches!(args(&["--verbose"]), Err(ArgError::Unexpected(_))));
    }

    #[test]
    fn render_marks_path() {
        let grid = Grid::parse("...\n.@.\n...").unwrap();
        let mut engine = jumpgrid_paths::Engine::new(grid.clone());
        let (s, g) = (Point::new(0, 0), Point::new(2, 2));
        let path = engine.find_path(s, g, Mode::AStar).unwrap();
        let mut buf = Vec::new();
        render(&mut buf, &grid, Some(&path), s, g).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('S'));
        assert!(text.contains('G'));
        assert!(text.contains('@'));
        assert_eq!(text.matches('\n').count(), 3);
    }
}
