//! Offline map scan for JPS+.
//!
//! [`ScanIndex::scan`] walks the grid three times:
//!
//! 1. **Primary jump points.** A cell `M` reached from an open neighbour `N`
//!    along cardinal `d` is a jump point for `d` when a cell beside `N`
//!    (perpendicular to `d`) is an obstacle while the matching cell beside
//!    `M` is open. That open cell is recorded as a forced neighbour.
//! 2. **Straight distances.** Every row and column is swept against each
//!    cardinal direction, counting cells since the last wall or jump point.
//! 3. **Diagonal distances.** Each diagonal is swept from its far corner so
//!    that a cell's diagonal predecessor is already known.
//!
//! A distance `k > 0` means the nearest jump point is `k` steps away. A
//! distance `-k` (`k >= 0`) means a wall stops travel after `k` steps.

use jumpgrid_core::{Direction, Grid, Point};

/// Jump-point data recorded for one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpPoint {
    /// Bit `i` set for cardinal direction `i` (see [`Direction::index`]).
    directions: u8,
    forced: Vec<Point>,
}

impl JumpPoint {
    fn add_direction(&mut self, dir: Direction) {
        self.directions |= 1 << dir.index();
    }

    fn add_forced_neighbor(&mut self, p: Point) {
        if !self.forced.contains(&p) {
            self.forced.push(p);
        }
    }

    /// Whether this cell is a primary jump point when entered along `dir`.
    #[inline]
    pub fn has_direction(&self, dir: Direction) -> bool {
        self.directions & (1 << dir.index()) != 0
    }

    /// Cardinal directions in which this cell is a primary jump point.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::CARDINALS
            .into_iter()
            .filter(|&d| self.has_direction(d))
    }

    /// Open cells exposed by the obstacles that made this a jump point.
    #[inline]
    pub fn forced_neighbors(&self) -> &[Point] {
        &self.forced
    }
}

/// Jump-point and distance tables for one grid, indexed by flat cell index.
///
/// The index is a snapshot: it says nothing about a grid whose obstacles
/// changed after the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanIndex {
    width: i32,
    height: i32,
    jump_points: Vec<Option<JumpPoint>>,
    distances: Vec<[i32; 8]>,
}

impl ScanIndex {
    /// Build the index for `grid`.
    pub fn scan(grid: &Grid) -> Self {
        let mut index = Self {
            width: grid.width(),
            height: grid.height(),
            jump_points: vec![None; grid.len()],
            distances: vec![[0; 8]; grid.len()],
        };
        index.scan_primary(grid);
        index.scan_straight(grid);
        index.scan_diagonal(grid);

        log::debug!(
            "scanned {}x{} grid: {} jump points, {} forced neighbours",
            index.width,
            index.height,
            index.jump_point_count(),
            index.forced_neighbor_count()
        );
        index
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether this index has the dimensions of `grid`.
    pub fn fits(&self, grid: &Grid) -> bool {
        self.width == grid.width() && self.height == grid.height()
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Jump-point data for `p`, if it is a primary jump point.
    pub fn jump_point(&self, p: Point) -> Option<&JumpPoint> {
        self.idx(p).and_then(|i| self.jump_points[i].as_ref())
    }

    /// Whether `p` is a primary jump point for `dir`.
    pub fn is_jump_point(&self, p: Point, dir: Direction) -> bool {
        self.jump_point(p).is_some_and(|jp| jp.has_direction(dir))
    }

    /// Signed jump distance from `p` along `dir`. Obstacles and
    /// out-of-bounds positions read as 0.
    pub fn distance(&self, p: Point, dir: Direction) -> i32 {
        self.idx(p).map_or(0, |i| self.distances[i][dir.index()])
    }

    #[inline]
    pub(crate) fn distance_idx(&self, idx: usize, dir: Direction) -> i32 {
        self.distances[idx][dir.index()]
    }

    #[inline]
    pub(crate) fn jump_point_idx(&self, idx: usize) -> Option<&JumpPoint> {
        self.jump_points[idx].as_ref()
    }

    /// Number of cells that are a primary jump point in some direction.
    pub fn jump_point_count(&self) -> usize {
        self.jump_points.iter().flatten().count()
    }

    /// Total number of recorded forced neighbours.
    pub fn forced_neighbor_count(&self) -> usize {
        self.jump_points
            .iter()
            .flatten()
            .map(|jp| jp.forced.len())
            .sum()
    }

    // -----------------------------------------------------------------------
    // Phase 1: primary jump points
    // -----------------------------------------------------------------------

    fn scan_primary(&mut self, grid: &Grid) {
        let mut forced = Vec::with_capacity(2);
        for p in grid.range() {
            if grid.is_obstacle(p) {
                continue;
            }
            for dir in Direction::CARDINALS {
                let m = p + dir;
                let Some(mi) = grid.idx(m) else {
                    continue;
                };
                if grid.is_obstacle_idx(mi) {
                    continue;
                }
                let Some(sides) = dir.perpendiculars() else {
                    continue;
                };

                forced.clear();
                for side in sides {
                    // The grid edge is not an obstacle here: only a real
                    // blocked cell beside `p` forces a turn.
                    let blocked = grid.node(p + side).is_some_and(|n| n.obstacle);
                    let exposed = m + side;
                    if blocked && grid.is_open(exposed) {
                        forced.push(exposed);
                    }
                }
                if forced.is_empty() {
                    continue;
                }

                let jp = self.jump_points[mi].get_or_insert_with(JumpPoint::default);
                jp.add_direction(dir);
                for &f in &forced {
                    jp.add_forced_neighbor(f);
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Phase 2: straight distances
    // -----------------------------------------------------------------------

    fn scan_straight(&mut self, grid: &Grid) {
        let (w, h) = (grid.width(), grid.height());
        for dir in Direction::CARDINALS {
            // Each line starts at the edge `dir` points to and is walked
            // backwards, so the counter measures travel along `dir`.
            let starts: Vec<Point> = match dir {
                Direction::West => (0..h).map(|y| Point::new(0, y)).collect(),
                Direction::East => (0..h).map(|y| Point::new(w - 1, y)).collect(),
                Direction::South => (0..w).map(|x| Point::new(x, 0)).collect(),
                _ => (0..w).map(|x| Point::new(x, h - 1)).collect(),
            };
            let back = dir.reverse();

            for start in starts {
                let mut count: i32 = -1;
                let mut jump_point_seen = false;
                let mut p = start;

                while let Some(i) = grid.idx(p) {
                    if grid.is_obstacle_idx(i) {
                        count = -1;
                        jump_point_seen = false;
                        self.distances[i][dir.index()] = 0;
                        p = p + back;
                        continue;
                    }

                    count += 1;
                    self.distances[i][dir.index()] = if jump_point_seen { count } else { -count };

                    if self.jump_points[i]
                        .as_ref()
                        .is_some_and(|jp| jp.has_direction(dir))
                    {
                        count = 0;
                        jump_point_seen = true;
                    }
                    p = p + back;
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Phase 3: diagonal distances
    // -----------------------------------------------------------------------

    fn scan_diagonal(&mut self, grid: &Grid) {
        let (w, h) = (grid.width(), grid.height());
        for dir in Direction::DIAGONALS {
            let (Some(horizontal), Some(vertical)) = (dir.horizontal(), dir.vertical()) else {
                continue;
            };
            let d = dir.offset();
            let start_y = if d.y > 0 { h - 1 } else { 0 };
            let start_x = if d.x > 0 { w - 1 } else { 0 };

            for row in 0..h {
                let y = if d.y > 0 { h - 1 - row } else { row };
                for col in 0..w {
                    let x = if d.x > 0 { w - 1 - col } else { col };
                    let p = Point::new(x, y);
                    let Some(i) = grid.idx(p) else {
                        continue;
                    };
                    if grid.is_obstacle_idx(i) {
                        continue;
                    }

                    let diag = p + dir;
                    let value = if y == start_y
                        || x == start_x
                        || grid.is_obstacle(p + vertical)
                        || grid.is_obstacle(p + horizontal)
                        || grid.is_obstacle(diag)
                    {
                        0
                    } else {
                        // `diag` is in bounds and open past the check above.
                        let di = grid.idx(diag).unwrap_or(i);
                        let prev = self.distances[di];
                        if prev[horizontal.index()] > 0 || prev[vertical.index()] > 0 {
                            1
                        } else {
                            let jump = prev[dir.index()];
                            if jump > 0 { jump + 1 } else { jump - 1 }
                        }
                    };
                    self.distances[i][dir.index()] = value;
                }
            }
        }
    }
}
