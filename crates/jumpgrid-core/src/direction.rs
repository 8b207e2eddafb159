//! The eight unit directions of an 8-connected grid.

use std::fmt;

use crate::geom::Point;

/// One of the eight unit moves on the grid.
///
/// `North` is `+y` and `East` is `+x`. Cardinal directions move along one
/// axis, diagonal directions along both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// The four cardinal directions.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The four diagonal directions.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Cardinals first, then diagonals. [`index`](Self::index) is the
    /// position in this array.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Dense index in `0..8`, suitable for per-direction tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, 1),
            Direction::South => Point::new(0, -1),
            Direction::West => Point::new(-1, 0),
            Direction::East => Point::new(1, 0),
            Direction::NorthWest => Point::new(-1, 1),
            Direction::NorthEast => Point::new(1, 1),
            Direction::SouthWest => Point::new(-1, -1),
            Direction::SouthEast => Point::new(1, -1),
        }
    }

    /// The direction whose offset is `d`, if `d` is a non-zero unit vector.
    pub const fn from_offset(d: Point) -> Option<Direction> {
        match (d.x, d.y) {
            (0, 1) => Some(Direction::North),
            (0, -1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            (1, 0) => Some(Direction::East),
            (-1, 1) => Some(Direction::NorthWest),
            (1, 1) => Some(Direction::NorthEast),
            (-1, -1) => Some(Direction::SouthWest),
            (1, -1) => Some(Direction::SouthEast),
            _ => None,
        }
    }

    /// Unit direction from `from` toward `to`, each axis clamped to
    /// `{-1, 0, 1}`. `None` when the points coincide.
    #[inline]
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        Self::from_offset((to - from).signum())
    }

    #[inline]
    pub const fn is_cardinal(self) -> bool {
        (self as usize) < 4
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// East/West component of this direction, if any.
    pub const fn horizontal(self) -> Option<Direction> {
        let d = self.offset();
        if d.x > 0 {
            Some(Direction::East)
        } else if d.x < 0 {
            Some(Direction::West)
        } else {
            None
        }
    }

    /// North/South component of this direction, if any.
    pub const fn vertical(self) -> Option<Direction> {
        let d = self.offset();
        if d.y > 0 {
            Some(Direction::North)
        } else if d.y < 0 {
            Some(Direction::South)
        } else {
            None
        }
    }

    /// The two cardinal directions at right angles to a cardinal direction.
    ///
    /// Returns `None` for diagonals.
    pub const fn perpendiculars(self) -> Option<[Direction; 2]> {
        match self {
            Direction::North | Direction::South => Some([Direction::West, Direction::East]),
            Direction::West | Direction::East => Some([Direction::North, Direction::South]),
            _ => None,
        }
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    /// Short compass name ("N", "SE", ...).
    pub const fn short_name(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::West => "W",
            Direction::East => "E",
            Direction::NorthWest => "NW",
            Direction::NorthEast => "NE",
            Direction::SouthWest => "SW",
            Direction::SouthEast => "SE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl std::ops::Add<Direction> for Point {
    type Output = Point;
    #[inline]
    fn add(self, d: Direction) -> Point {
        self + d.offset()
    }
}
