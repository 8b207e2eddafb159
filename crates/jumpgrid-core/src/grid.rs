//! The obstacle [`Grid`] and its text format.
//!
//! A grid is a fixed-size rectangle of cells, each either open or an
//! obstacle. Cells are stored in a flat array addressed by `y * width + x`.
//! Text maps use one line per row: line `i` is `y = i`, character `j` is
//! `x = j`.

use std::str::FromStr;

use crate::error::MapError;
use crate::geom::{Point, Range};

/// Characters used by the map text format.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSymbols {
    /// Marker for obstacle cells.
    pub obstacle: char,
    /// Accepted markers for open cells. When empty, every character other
    /// than `obstacle` is read as open. The first character is the one
    /// written by [`Grid::to_text`].
    pub walkable: String,
}

impl Default for MapSymbols {
    fn default() -> Self {
        Self {
            obstacle: '@',
            walkable: ".".to_string(),
        }
    }
}

impl MapSymbols {
    /// Symbols that accept any non-obstacle character as open.
    pub fn lenient(obstacle: char) -> Self {
        Self {
            obstacle,
            walkable: String::new(),
        }
    }

    fn open_char(&self) -> char {
        self.walkable.chars().next().unwrap_or('.')
    }
}

/// Read-only view of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    pub pos: Point,
    pub obstacle: bool,
}

impl Node {
    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }
}

/// A rectangular grid of open and obstacle cells.
///
/// Dimensions are fixed at construction; obstacle flags may change at any
/// time. Out-of-bounds positions read as obstacles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    obstacles: Vec<bool>,
}

impl Grid {
    /// Create an all-open grid. Non-positive dimensions yield an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            obstacles: vec![false; (w as usize) * (h as usize)],
        }
    }

    /// Like [`new`](Self::new) but rejects non-positive dimensions.
    pub fn try_new(width: i32, height: i32) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidSize { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Parse map text using the default [`MapSymbols`].
    pub fn parse(text: &str) -> Result<Self, MapError> {
        Self::parse_with(text, &MapSymbols::default())
    }

    /// Parse map text. Every line must have the width of the first line.
    ///
    /// Trailing line breaks of the whole text are ignored, as is a `'\r'`
    /// at the end of each line.
    pub fn parse_with(text: &str, symbols: &MapSymbols) -> Result<Self, MapError> {
        let text = text.trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            return Err(MapError::Empty);
        }

        let mut width: Option<usize> = None;
        let mut obstacles = Vec::new();
        let mut height = 0usize;

        for (y, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut x = 0usize;
            for ch in line.chars() {
                let obstacle = if ch == symbols.obstacle {
                    true
                } else if symbols.walkable.is_empty() || symbols.walkable.contains(ch) {
                    false
                } else {
                    return Err(MapError::InvalidSymbol {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                obstacles.push(obstacle);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
            obstacles,
        })
    }

    /// Render the grid in the text format accepted by
    /// [`parse_with`](Self::parse_with).
    pub fn to_text(&self, symbols: &MapSymbols) -> String {
        let open = symbols.open_char();
        let mut s = String::with_capacity(self.obstacles.len() + self.height as usize);
        for y in 0..self.height {
            if y > 0 {
                s.push('\n');
            }
            for x in 0..self.width {
                s.push(if self.is_obstacle(Point::new(x, y)) {
                    symbols.obstacle
                } else {
                    open
                });
            }
        }
        s
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Whether `p` is an obstacle. Out-of-bounds positions count as obstacles.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) => self.obstacles[i],
            None => true,
        }
    }

    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        !self.is_obstacle(p)
    }

    /// Obstacle flag by flat index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`. Use [`is_obstacle`](Self::is_obstacle)
    /// for positions that may be out of bounds.
    #[inline]
    pub fn is_obstacle_idx(&self, idx: usize) -> bool {
        self.obstacles[idx]
    }

    /// Set the obstacle flag at `p`. Returns `false` (and does nothing) if
    /// `p` is out of bounds.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.obstacles[i] = obstacle;
                true
            }
            None => false,
        }
    }

    /// The node at `p`, or `None` if out of bounds.
    pub fn node(&self, p: Point) -> Option<Node> {
        self.idx(p).map(|i| Node {
            pos: p,
            obstacle: self.obstacles[i],
        })
    }

    /// Row-major iterator over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.range().iter().map(|p| Node {
            pos: p,
            obstacle: self.is_obstacle(p),
        })
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.obstacles.iter().filter(|&&o| !o).count()
    }
}

impl FromStr for Grid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    obstacles: Vec<bool>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            width: self.width,
            height: self.height,
            obstacles: self.obstacles.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        let expected = (repr.width.max(0) as usize) * (repr.height.max(0) as usize);
        if repr.width < 0 || repr.height < 0 || repr.obstacles.len() != expected {
            return Err(serde::de::Error::custom(format!(
                "grid: {} cells for size {}x{}",
                repr.obstacles.len(),
                repr.width,
                repr.height
            )));
        }
        Ok(Grid {
            width: repr.width,
            height: repr.height,
            obstacles: repr.obstacles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
.....
.@@..
.....";

    #[test]
    fn parse_size_and_obstacles() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 3);
        assert!(g.is_obstacle(Point::new(1, 1)));
        assert!(g.is_obstacle(Point::new(2, 1)));
        assert!(g.is_open(Point::new(3, 1)));
        assert_eq!(g.open_count(), 13);
    }

    #[test]
    fn out_of_bounds_is_obstacle_and_absent() {
        let g = Grid::parse(ROOM).unwrap();
        assert!(g.is_obstacle(Point::new(-1, 0)));
        assert!(g.is_obstacle(Point::new(5, 0)));
        assert_eq!(g.node(Point::new(0, 3)), None);
        assert_eq!(g.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn idx_point_round_trip() {
        let g = Grid::new(7, 4);
        for p in g.range() {
            let i = g.idx(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.idx(Point::new(2, 3)), Some(23));
    }

    #[test]
    fn ragged_text_is_rejected() {
        let err = Grid::parse("...\n..\n...").unwrap_err();
        assert_eq!(
            err,
            MapError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_symbol_is_rejected() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidSymbol {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn lenient_symbols_accept_anything_open() {
        let g = Grid::parse_with("#ab\nc#d", &MapSymbols::lenient('#')).unwrap();
        assert_eq!(g.open_count(), 4);
        assert!(g.is_obstacle(Point::new(1, 1)));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(Grid::parse(""), Err(MapError::Empty));
        assert_eq!(Grid::parse("\n\n"), Err(MapError::Empty));
    }

    #[test]
    fn crlf_and_trailing_newline() {
        let g = Grid::parse("..@\r\n...\r\n").unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert!(g.is_obstacle(Point::new(2, 0)));
    }

    #[test]
    fn to_text_round_trip() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.to_text(&MapSymbols::default()), ROOM);
    }

    #[test]
    fn set_obstacle_in_and_out_of_bounds() {
        let mut g = Grid::new(3, 3);
        assert!(g.set_obstacle(Point::new(1, 1), true));
        assert!(g.is_obstacle(Point::new(1, 1)));
        assert!(!g.set_obstacle(Point::new(3, 1), true));
        assert!(g.set_obstacle(Point::new(1, 1), false));
        assert_eq!(g.open_count(), 9);
    }

    #[test]
    #[should_panic]
    fn flat_index_past_the_end_panics() {
        let g = Grid::new(2, 2);
        assert!(!g.is_obstacle_idx(3));
        g.is_obstacle_idx(4);
    }

    #[test]
    fn try_new_rejects_bad_size() {
        assert_eq!(
            Grid::try_new(0, 4),
            Err(MapError::InvalidSize {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::try_new(2, 2).is_ok());
    }

    #[test]
    fn nodes_row_major() {
        let g = Grid::parse(".@\n..").unwrap();
        let nodes: Vec<Node> = g.nodes().collect();
        assert_eq!(nodes.len(), 4);
        assert!(nodes[1].obstacle);
        assert_eq!(nodes[2].pos, Point::new(0, 1));
        assert_eq!((nodes[3].x(), nodes[3].y()), (1, 1));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse(".@.\n@..").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_rejects_mismatched_cells() {
        let json = r#"{"width":2,"height":2,"obstacles":[false,true,false]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
