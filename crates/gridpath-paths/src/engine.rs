use gridpath_core::{Bounds, Cell};

use crate::Path;
use crate::config::SearchConfig;

/// Cost of one orthogonal move.
pub const STEP_COST: i32 = 1;

/// g-score of a cell the current search has not reached.
pub(crate) const UNREACHED: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node arena for a single A* search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            parent: NO_PARENT,
        }
    }
}

/// Frontier entry pointing into the arena.
///
/// `g` is the score the node had when the entry was pushed; an entry whose
/// `g` is worse than the node's current score is stale. Ordered for a
/// max-heap so that the smallest `f` pops first, then the smallest `h`, then
/// the earliest push.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) g: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-call node storage, one [`Node`] per cell of the bounds.
pub(crate) struct SearchArena {
    pub(crate) bounds: Bounds,
    pub(crate) nodes: Vec<Node>,
}

impl SearchArena {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
        }
    }

    /// Walk predecessors back from `goal_idx` and return the route in
    /// walking order.
    pub(crate) fn reconstruct(&self, goal_idx: usize) -> Path {
        let mut cells: Vec<Cell> = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            cells.push(self.bounds.cell_at(ci));
            ci = self.nodes[ci].parent;
        }
        cells.reverse();
        Path::from(cells)
    }
}

// ---------------------------------------------------------------------------
// PathEngine
// ---------------------------------------------------------------------------

/// A* search engine.
///
/// The engine only carries its [`SearchConfig`]; maps are borrowed for the
/// duration of a [`search`](PathEngine::search) call and never retained.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathEngine {
    config: SearchConfig,
}

impl PathEngine {
    /// Engine with an unbounded search budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using the given settings.
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}
