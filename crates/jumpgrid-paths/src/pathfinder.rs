use std::cmp::Ordering;
use std::collections::BinaryHeap;

use jumpgrid_core::{Direction, Grid, Point};

use crate::cone::GoalCone;
use crate::distance::manhattan;
use crate::events::{Discard, FrontierEvent, FrontierEventKind, FrontierSink};
use crate::mode::Mode;
use crate::path::Path;
use crate::scan::ScanIndex;

// ---------------------------------------------------------------------------
// Per-search node table
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered by `f` then by insertion order.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest inserted among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Best-first search over a [`Grid`] in any of the four [`Mode`]s.
///
/// `PathFinder` owns the per-search state table (`g`, `f`, parent) sized to
/// the grid, so the grid itself is never mutated by a search. The table is
/// invalidated lazily with a generation counter; repeated queries on the
/// same grid allocate nothing after the first.
#[derive(Default)]
pub struct PathFinder {
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    pub(crate) cone: GoalCone,
    seq: u64,
    expanded: usize,
    successors: Vec<(usize, f64)>,
    pub(crate) dirs: Vec<Direction>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes expanded by the most recent search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Find a path from `start` to `goal`.
    ///
    /// `scan` is required for [`Mode::JpsPlus`] and must have been built for
    /// a grid of the same size; the other modes ignore it.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        scan: Option<&ScanIndex>,
        start: Point,
        goal: Point,
        mode: Mode,
    ) -> Option<Path> {
        self.find_path_with(grid, scan, start, goal, mode, &mut Discard)
    }

    /// Like [`find_path`](Self::find_path), reporting every node that enters
    /// the frontier to `sink`.
    pub fn find_path_with<S: FrontierSink + ?Sized>(
        &mut self,
        grid: &Grid,
        scan: Option<&ScanIndex>,
        start: Point,
        goal: Point,
        mode: Mode,
        sink: &mut S,
    ) -> Option<Path> {
        self.expanded = 0;
        let start_idx = grid.idx(start)?;
        let goal_idx = grid.idx(goal)?;
        if grid.is_obstacle_idx(start_idx) || grid.is_obstacle_idx(goal_idx) {
            log::debug!("{mode}: start {start} or goal {goal} is an obstacle");
            return None;
        }

        let scan = if mode.uses_jumps() {
            match scan {
                Some(scan) if scan.fits(grid) => Some(scan),
                _ => {
                    log::warn!("{mode}: no scan index for a {}x{} grid", grid.width(), grid.height());
                    return None;
                }
            }
        } else {
            None
        };

        self.reset(grid.len());
        let cur_gen = self.generation;
        if scan.is_some() {
            self.cone.rebuild(grid, goal);
        }

        let h = |p: Point| f64::from(manhattan(p, goal));

        // Initialise the start node.
        let (g0, f0) = mode.start_scores(h(start));
        {
            let node = &mut self.nodes[start_idx];
            node.g = g0;
            node.f = f0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        self.seq = 0;
        open.push(NodeRef {
            idx: start_idx,
            f: f0,
            seq: self.seq,
        });
        sink.push(FrontierEvent {
            pos: start,
            g: g0,
            f: f0,
            kind: FrontierEventKind::Opened,
        });

        let mut successors = std::mem::take(&mut self.successors);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            {
                let node = &self.nodes[ci];
                if node.generation != cur_gen || !node.open || node.f.total_cmp(&current.f).is_ne() {
                    continue;
                }
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            self.expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_point = grid.point(ci);
            log::trace!(
                "{mode}: expand {current_point} g={current_g:.3} f={:.3}",
                current.f
            );

            successors.clear();
            match scan {
                Some(scan) => self.jump_successors(grid, scan, ci, goal, &mut successors),
                None => neighbor_successors(grid, current_point, &mut successors),
            }

            for &(ni, step) in successors.iter() {
                let np = grid.point(ni);
                let (g, f) = mode.scores(current_g, step, h(np));

                let n = &mut self.nodes[ni];
                let kind = if n.generation == cur_gen {
                    // Already reached this generation.
                    if g >= n.g {
                        continue;
                    }
                    FrontierEventKind::Improved
                } else {
                    n.generation = cur_gen;
                    FrontierEventKind::Opened
                };

                n.g = g;
                n.f = f;
                n.parent = ci;
                n.open = true;

                self.seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f,
                    seq: self.seq,
                });
                sink.push(FrontierEvent { pos: np, g, f, kind });
            }
        };

        self.successors = successors;

        if !found {
            log::debug!(
                "{mode}: no path from {start} to {goal} ({} expanded)",
                self.expanded
            );
            return None;
        }

        // Reconstruct path.
        let mut nodes = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            nodes.push(grid.point(ci));
            ci = self.nodes[ci].parent;
        }
        nodes.reverse();
        let cost = self.nodes[goal_idx].g;

        log::debug!(
            "{mode}: path from {start} to {goal}: {} nodes, cost {cost:.3}, {} expanded",
            nodes.len(),
            self.expanded
        );
        Some(Path::new(nodes, cost))
    }

    /// Size the node table for `len` cells and start a new generation.
    fn reset(&mut self, len: usize) {
        if self.nodes.len() != len {
            self.nodes.clear();
            self.nodes.resize(len, SearchNode::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old marks could collide with the new generation.
            self.nodes.fill(SearchNode::default());
            self.generation = 1;
        }
    }
}

/// Open 8-connected neighbours of `p`, each at unit cost.
fn neighbor_successors(grid: &Grid, p: Point, out: &mut Vec<(usize, f64)>) {
    for dir in Direction::ALL {
        if let Some(i) = grid.idx(p + dir) {
            if !grid.is_obstacle_idx(i) {
                out.push((i, 1.0));
            }
        }
    }
}
