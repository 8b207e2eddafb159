use jumpgrid_core::Point;

/// Cost of one diagonal step in JPS+ cost accounting.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
