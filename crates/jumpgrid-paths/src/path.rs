use jumpgrid_core::Point;

/// A path found by [`PathFinder`](crate::PathFinder).
///
/// `nodes` runs from start to goal inclusive. For the grid modes every
/// consecutive pair is adjacent; for JPS+ the nodes are the jump points
/// the search went through and may be several cells apart along a
/// straight or diagonal line. [`steps`](Self::steps) expands either kind
/// into a cell-by-cell walk.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<Point>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(nodes: Vec<Point>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Point> {
        self.nodes
    }

    /// The goal's final `g` under the mode that produced the path.
    ///
    /// Greedy search stores the heuristic in `g`, so its paths report 0.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.nodes.last().copied()
    }

    /// Expand the path into single-cell moves, diagonal first then straight
    /// within each segment.
    pub fn steps(&self) -> Vec<Point> {
        let Some(&first) = self.nodes.first() else {
            return Vec::new();
        };
        let mut result = vec![first];
        for window in self.nodes.windows(2) {
            let (mut c, b) = (window[0], window[1]);
            while c != b {
                c = c + (b - c).signum();
                result.push(c);
            }
        }
        result
    }

    /// Number of single-cell moves in [`steps`](Self::steps).
    pub fn step_count(&self) -> usize {
        self.steps().len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_expand_jumps() {
        let p = Path::new(
            vec![Point::new(0, 0), Point::new(3, 3), Point::new(3, 5)],
            0.0,
        );
        assert_eq!(
            p.steps(),
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 3),
                Point::new(3, 4),
                Point::new(3, 5),
            ]
        );
        assert_eq!(p.step_count(), 5);
    }

    #[test]
    fn steps_diagonal_then_straight() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(4, 2)], 0.0);
        assert_eq!(
            p.steps(),
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 2),
                Point::new(3, 2),
                Point::new(4, 2),
            ]
        );
    }

    #[test]
    fn single_node_path() {
        let p = Path::new(vec![Point::new(2, 2)], 0.0);
        assert_eq!(p.steps(), vec![Point::new(2, 2)]);
        assert_eq!(p.step_count(), 0);
        assert_eq!(p.start(), p.goal());
    }
}
