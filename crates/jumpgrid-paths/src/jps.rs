use jumpgrid_core::{Direction, Grid, Point};

use crate::PathFinder;
use crate::distance::{DIAGONAL_COST, manhattan};
use crate::prune::pruned_directions;
use crate::scan::ScanIndex;

impl PathFinder {
    /// JPS+ successors of node `ci`, pushed as `(index, edge cost)`.
    ///
    /// For each direction that survives pruning, in order of preference:
    ///
    /// 1. a cardinal direction pointing straight at the goal, when the goal
    ///    is within the recorded distance, jumps to the goal;
    /// 2. a diagonal direction whose ray meets the goal's row, column or
    ///    diagonals within the recorded distance stops at that cell;
    /// 3. a positive recorded distance jumps to the jump point it names.
    pub(crate) fn jump_successors(
        &mut self,
        grid: &Grid,
        scan: &ScanIndex,
        ci: usize,
        goal: Point,
        out: &mut Vec<(usize, f64)>,
    ) {
        let current = grid.point(ci);
        let parent = match self.nodes[ci].parent {
            usize::MAX => None,
            pi => Some(grid.point(pi)),
        };

        let mut dirs = std::mem::take(&mut self.dirs);
        pruned_directions(current, parent, scan.jump_point_idx(ci), &mut dirs);

        let goal_dir = Direction::between(current, goal);

        for &dir in dirs.iter() {
            let dist = scan.distance_idx(ci, dir);
            let reach = dist.abs();

            if dir.is_cardinal() && goal_dir == Some(dir) {
                let to_goal = manhattan(current, goal);
                if to_goal <= reach {
                    if let Some(gi) = grid.idx(goal) {
                        out.push((gi, f64::from(to_goal)));
                        continue;
                    }
                }
            }

            if dir.is_diagonal() {
                if let Some((p, k)) = self.cone.intersect(grid, current, dir, reach) {
                    if let Some(i) = grid.idx(p) {
                        out.push((i, DIAGONAL_COST * f64::from(k)));
                        continue;
                    }
                }
            }

            if dist > 0 {
                if let Some(i) = grid.idx(current + dir.offset() * dist) {
                    let cost = if dir.is_diagonal() {
                        DIAGONAL_COST * f64::from(dist)
                    } else {
                        f64::from(dist)
                    };
                    out.push((i, cost));
                }
            }
        }

        self.dirs = dirs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mode, PathFinder, ScanIndex};
    use jumpgrid_core::{Grid, Point};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn jps(grid: &Grid, from: Point, to: Point) -> Option<crate::Path> {
        let scan = ScanIndex::scan(grid);
        PathFinder::new().find_path(grid, Some(&scan), from, to, Mode::JpsPlus)
    }

    #[test]
    fn open_diagonal_costs_root_two() {
        let path = jps(&Grid::new(5, 5), p(0, 0), p(4, 4)).unwrap();
        assert_eq!(path.goal(), Some(p(4, 4)));
        assert!((path.cost() - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert_eq!(path.step_count(), 4);
    }

    #[test]
    fn straight_to_goal_in_one_jump() {
        let path = jps(&Grid::parse("......").unwrap(), p(0, 0), p(5, 0)).unwrap();
        assert_eq!(path.nodes(), &[p(0, 0), p(5, 0)]);
        assert_eq!(path.cost(), 5.0);
    }

    #[test]
    fn jumps_to_recorded_jump_point() {
        // East from (0, 1) the index names (2, 1); from there one diagonal
        // step meets the goal's row and a straight jump finishes.
        let grid = Grid::parse(".@...@\n.....@\n.....@").unwrap();
        let path = jps(&grid, p(0, 1), p(4, 0)).unwrap();
        assert_eq!(path.nodes(), &[p(0, 1), p(2, 1), p(3, 0), p(4, 0)]);
        assert!((path.cost() - (3.0 + std::f64::consts::SQRT_2)).abs() < 1e-9);
    }

    #[test]
    fn routes_around_a_wall() {
        let grid = Grid::parse(
            "\
.......
....@..
....@..
....@..
....@..
....@..
.......",
        )
        .unwrap();
        let path = jps(&grid, p(0, 3), p(6, 3)).unwrap();
        assert_eq!(path.nodes(), &[p(0, 3), p(3, 6), p(5, 6), p(6, 5), p(6, 3)]);
        assert!((path.cost() - (4.0 + 4.0 * std::f64::consts::SQRT_2)).abs() < 1e-9);
        assert!(path.steps().iter().all(|&q| grid.is_open(q)));
    }

    #[test]
    fn waypoints_are_straight_or_diagonal() {
        let grid = Grid::parse(
            "\
........
........
...@....
...@....
...@....
........",
        )
        .unwrap();
        let path = jps(&grid, p(0, 3), p(7, 3)).unwrap();
        for w in path.nodes().windows(2) {
            let d = w[1] - w[0];
            assert!(d.x == 0 || d.y == 0 || d.x.abs() == d.y.abs());
        }
        assert!(path.steps().iter().all(|&q| grid.is_open(q)));
    }
}
