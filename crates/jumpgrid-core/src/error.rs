use std::fmt;

use crate::geom::Point;

/// Errors that can occur when building or parsing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The map text contains no rows.
    Empty,
    /// A line's width differs from the first line's width.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character is neither the obstacle marker nor a walkable marker.
    InvalidSymbol { ch: char, pos: Point },
    /// Requested dimensions are not positive.
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "map: invalid symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InvalidSize { width, height } => {
                write!(f, "map: invalid size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for MapError {}
