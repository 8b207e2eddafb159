//! Cell coordinates and grid-sized rectangles.
//!
//! `x` is the column and `y` the line of the map text, so `y = 0` is the
//! first line. [`Direction`](crate::Direction) calls `+y` north.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate, or an offset between two cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp each axis to `-1`, `0` or `1`.
    ///
    /// Applied to the offset between two cells this gives the single step
    /// that heads from one toward the other.
    #[inline]
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }
}

/// Text order: by line, then by column.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Scale an offset, e.g. a unit step by a jump length.
impl Mul<i32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, k: i32) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// The cells `0 <= x < width`, `0 <= y < height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub width: i32,
    pub height: i32,
}

impl Range {
    /// Negative sizes are treated as 0.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Every cell in text order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            width: self.width,
            next: 0,
            end: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Iterator over the cells of a [`Range`], driven by flat index.
#[derive(Clone, Debug)]
pub struct RangeIter {
    width: i32,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let w = self.width as usize;
        let p = Point::new((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let from = Point::new(2, 5);
        let to = Point::new(6, 1);
        assert_eq!(to - from, Point::new(4, -4));
        assert_eq!((to - from).signum(), Point::new(1, -1));
        assert_eq!(from + (to - from).signum() * 4, to);
        assert_eq!(Point::ZERO.signum(), Point::ZERO);
    }

    #[test]
    fn text_order() {
        let mut pts = vec![Point::new(1, 1), Point::new(3, 0), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(3, 0), Point::new(0, 1), Point::new(1, 1)]);
        assert_eq!(Point::new(-1, 4).to_string(), "(-1,4)");
    }

    #[test]
    fn range_membership() {
        let r = Range::new(3, 2);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 1)));
        assert!(!r.contains(Point::new(0, -1)));
        assert_eq!(r.to_string(), "3x2");
    }

    #[test]
    fn range_iterates_in_text_order() {
        let r = Range::new(3, 2);
        let mut it = r.iter();
        assert_eq!(it.len(), 6);
        assert_eq!(it.next(), Some(Point::new(0, 0)));
        let rest: Vec<Point> = it.collect();
        assert_eq!(rest[2], Point::new(0, 1));
        assert_eq!(rest.last(), Some(&Point::new(2, 1)));
    }

    #[test]
    fn degenerate_ranges() {
        assert!(Range::new(0, 4).is_empty());
        assert_eq!(Range::new(-2, 3), Range::new(0, 3));
        assert_eq!(Range::new(5, 0).iter().count(), 0);
    }
}
