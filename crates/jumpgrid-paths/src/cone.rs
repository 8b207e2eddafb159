use jumpgrid_core::{Direction, Grid, Point};

/// Open cells that share a row, column or diagonal with a goal.
///
/// Built by casting the eight rays out of the goal to the grid edge. Rays
/// pass over obstacles; only open cells are members. Membership is stored
/// as a generation mark per cell so that rebuilding for a new goal does not
/// clear the whole table.
#[derive(Debug, Clone, Default)]
pub struct GoalCone {
    width: i32,
    height: i32,
    marks: Vec<u32>,
    generation: u32,
    goal: Option<Point>,
}

impl GoalCone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the cone of `goal` on `grid`, replacing any previous goal.
    pub fn rebuild(&mut self, grid: &Grid, goal: Point) {
        if self.width != grid.width() || self.height != grid.height() {
            self.width = grid.width();
            self.height = grid.height();
            self.marks.clear();
            self.marks.resize(grid.len(), 0);
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.marks.fill(0);
            self.generation = 1;
        }
        let generation = self.generation;

        self.goal = None;
        let Some(gi) = grid.idx(goal) else {
            return;
        };
        self.goal = Some(goal);
        self.marks[gi] = generation;

        for dir in Direction::ALL {
            let mut p = goal + dir;
            while let Some(i) = grid.idx(p) {
                if !grid.is_obstacle_idx(i) {
                    self.marks[i] = generation;
                }
                p = p + dir;
            }
        }
    }

    /// The goal of the last [`rebuild`](Self::rebuild), if it was in bounds.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Whether `p` lies in the current cone.
    pub fn contains(&self, p: Point) -> bool {
        self.goal.is_some() && self.idx(p).is_some_and(|i| self.marks[i] == self.generation)
    }

    /// Walk from `from` along `dir` for at most `limit` steps and return the
    /// first cone cell reached together with the number of steps taken.
    ///
    /// The walk stops early at an obstacle or the grid edge.
    pub fn intersect(&self, grid: &Grid, from: Point, dir: Direction, limit: i32) -> Option<(Point, i32)> {
        self.goal?;
        let mut p = from;
        for k in 1..=limit {
            p = p + dir;
            let i = grid.idx(p)?;
            if grid.is_obstacle_idx(i) {
                return None;
            }
            if self.marks.get(i) == Some(&self.generation) {
                return Some((p, k));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rays_pass_over_obstacles() {
        let grid = Grid::parse(".....\n.....\n.@...\n.....\n.....").unwrap();
        let mut cone = GoalCone::new();
        cone.rebuild(&grid, Point::new(2, 2));
        assert!(cone.contains(Point::new(2, 2)));
        assert!(cone.contains(Point::new(0, 2)));
        assert!(!cone.contains(Point::new(1, 2)));
        assert!(cone.contains(Point::new(4, 4)));
        assert!(cone.contains(Point::new(0, 4)));
        assert!(!cone.contains(Point::new(1, 0)));
        assert!(!cone.contains(Point::new(-1, 2)));
    }

    #[test]
    fn rebuild_forgets_previous_goal() {
        let grid = Grid::new(5, 5);
        let mut cone = GoalCone::new();
        cone.rebuild(&grid, Point::new(0, 0));
        assert!(cone.contains(Point::new(3, 3)));
        cone.rebuild(&grid, Point::new(4, 0));
        assert!(!cone.contains(Point::new(3, 3)));
        assert!(cone.contains(Point::new(3, 1)));
        assert_eq!(cone.goal(), Some(Point::new(4, 0)));
    }

    #[test]
    fn intersect_finds_alignment() {
        let grid = Grid::new(8, 8);
        let mut cone = GoalCone::new();
        cone.rebuild(&grid, Point::new(6, 2));
        // Heading north-east from the origin, the ray lines up with the
        // goal's row at (2, 2).
        assert_eq!(
            cone.intersect(&grid, Point::new(0, 0), Direction::NorthEast, 7),
            Some((Point::new(2, 2), 2))
        );
        assert_eq!(cone.intersect(&grid, Point::new(0, 0), Direction::NorthEast, 1), None);
    }

    #[test]
    fn intersect_stops_at_obstacle() {
        let grid = Grid::parse("....\n.@..\n....\n....").unwrap();
        let mut cone = GoalCone::new();
        cone.rebuild(&grid, Point::new(3, 3));
        assert_eq!(cone.intersect(&grid, Point::new(0, 0), Direction::NorthEast, 3), None);
    }

    #[test]
    fn out_of_bounds_goal_is_empty() {
        let grid = Grid::new(3, 3);
        let mut cone = GoalCone::new();
        cone.rebuild(&grid, Point::new(5, 5));
        assert!(cone.goal().is_none());
        assert!(!cone.contains(Point::new(1, 1)));
    }
}
