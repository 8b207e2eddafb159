//! The [`Engine`] facade: one grid, its scan index and a path finder.

use jumpgrid_core::{Grid, MapError, MapSymbols, Node, Point};

use crate::events::FrontierSink;
use crate::mode::Mode;
use crate::path::Path;
use crate::pathfinder::PathFinder;
use crate::scan::ScanIndex;

/// Owns a [`Grid`] and keeps its [`ScanIndex`] in step with it.
///
/// Any change to the grid through the engine drops the index. JPS+ queries
/// rebuild it on demand; [`scan`](Self::scan) rebuilds it eagerly.
pub struct Engine {
    grid: Grid,
    scan: Option<ScanIndex>,
    finder: PathFinder,
}

impl Engine {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            scan: None,
            finder: PathFinder::new(),
        }
    }

    /// Replace the grid with an all-open `width` x `height` grid.
    pub fn build_grid(&mut self, width: i32, height: i32) -> Result<(), MapError> {
        self.replace(Grid::try_new(width, height)?);
        Ok(())
    }

    /// Replace the grid with one parsed from map text.
    pub fn load_grid(&mut self, text: &str) -> Result<(), MapError> {
        self.load_grid_with(text, &MapSymbols::default())
    }

    pub fn load_grid_with(&mut self, text: &str, symbols: &MapSymbols) -> Result<(), MapError> {
        self.replace(Grid::parse_with(text, symbols)?);
        Ok(())
    }

    fn replace(&mut self, grid: Grid) {
        self.grid = grid;
        self.scan = None;
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, p: Point) -> Option<Node> {
        self.grid.node(p)
    }

    /// Set or clear an obstacle. Returns `false` if `p` is out of bounds;
    /// otherwise the scan index is invalidated.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> bool {
        if !self.grid.set_obstacle(p, obstacle) {
            return false;
        }
        self.scan = None;
        true
    }

    /// Whether the scan index reflects the current grid.
    #[inline]
    pub fn scan_valid(&self) -> bool {
        self.scan.is_some()
    }

    /// The current scan index, if valid.
    #[inline]
    pub fn scan_index(&self) -> Option<&ScanIndex> {
        self.scan.as_ref()
    }

    /// Rebuild the scan index for the current grid.
    pub fn scan(&mut self) -> &ScanIndex {
        self.scan.insert(ScanIndex::scan(&self.grid))
    }

    /// Find a path with the given mode. JPS+ scans first if needed.
    pub fn find_path(&mut self, start: Point, goal: Point, mode: Mode) -> Option<Path> {
        self.prepare(mode);
        self.finder
            .find_path(&self.grid, self.scan.as_ref(), start, goal, mode)
    }

    /// Like [`find_path`](Self::find_path), reporting frontier events to `sink`.
    pub fn find_path_with<S: FrontierSink + ?Sized>(
        &mut self,
        start: Point,
        goal: Point,
        mode: Mode,
        sink: &mut S,
    ) -> Option<Path> {
        self.prepare(mode);
        self.finder
            .find_path_with(&self.grid, self.scan.as_ref(), start, goal, mode, sink)
    }

    fn prepare(&mut self, mode: Mode) {
        if mode.uses_jumps() && self.scan.is_none() {
            log::debug!("{mode}: scan index is stale, rescanning");
            self.scan();
        }
    }

    /// Number of nodes expanded by the most recent search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.finder.last_expanded()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Grid::new(0, 0))
    }
}
