use std::fmt;

use pathviz_core::{CellState, Grid, GridError, Pos, Redraw};

use crate::frontier::FrontierQueue;
use crate::heuristic::manhattan;
use crate::path::{self, Cancelled, ParentMap, Path};

/// Sentinel g/f score for cells the search has not reached.
pub const UNREACHED: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Outcome / errors
// ---------------------------------------------------------------------------

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached; the path has been drawn.
    PathFound(Path),
    /// The frontier emptied without reaching the goal.
    NoPathExists,
    /// The host returned `Break` from a redraw.
    Cancelled,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }
}

/// A search was started with invalid endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    OutOfBounds(GridError),
    /// Start and goal are the same cell.
    SameEndpoints(Pos),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(e) => write!(f, "search endpoint: {e}"),
            Self::SameEndpoints(p) => write!(f, "start and goal are both {p}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            Self::SameEndpoints(_) => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::OutOfBounds(e)
    }
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct Node {
    g: u32,
    f: u32,
    /// Frontier membership. While set, the cell has exactly one heap
    /// entry, keyed by the `f` it had when it was enqueued.
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            f: UNREACHED,
            open: false,
        }
    }
}

/// Scores, predecessors and frontier of one run. Built fresh per call and
/// dropped on return.
struct SearchState {
    nodes: Vec<Node>,
    parents: ParentMap,
    frontier: FrontierQueue,
}

impl SearchState {
    fn new(grid: &Grid) -> Self {
        Self {
            nodes: vec![Node::default(); grid.len()],
            parents: ParentMap::new(grid.size()),
            frontier: FrontierQueue::new(),
        }
    }

    /// Put a cell that is not in the frontier into it.
    fn enqueue(&mut self, idx: usize) {
        let order = self.frontier.next_order();
        let n = &mut self.nodes[idx];
        n.open = true;
        self.frontier.push(idx, n.f, order);
    }

    /// Next frontier cell. Entries are never superseded, so the cell on top
    /// of the heap is always a member.
    fn pop(&mut self) -> Option<usize> {
        let e = self.frontier.pop()?;
        let n = &mut self.nodes[e.idx];
        debug_assert!(n.open, "popped a cell that is not in the frontier");
        n.open = false;
        Some(e.idx)
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Find a shortest 4-directional path from `start` to `goal`, animating
/// the exploration through `redraw`.
///
/// Uses the adjacency cached in each cell, so the grid's adjacency must
/// have been refreshed after the last barrier change. Every step costs 1
/// and the frontier is ordered by `(f, insertion order)`, which makes the
/// sequence of frames fully determined by the grid and the endpoints.
/// A cell's queue key is fixed when it enters the frontier: finding a
/// cheaper route to a queued cell updates its score and parent only.
///
/// Per expansion the engine tags newly discovered cells `Frontier`,
/// issues exactly one redraw, then tags the expanded cell `Visited`.
/// `start` and `goal` keep their own tags throughout. On success the path
/// is drawn one cell per redraw, then one final redraw follows.
pub fn run<R>(
    grid: &mut Grid,
    start: Pos,
    goal: Pos,
    redraw: &mut R,
) -> Result<SearchOutcome, SearchError>
where
    R: Redraw + ?Sized,
{
    let size = grid.size();
    let start_idx = grid
        .index(start)
        .ok_or(GridError::OutOfBounds { pos: start, size })?;
    let goal_idx = grid
        .index(goal)
        .ok_or(GridError::OutOfBounds { pos: goal, size })?;
    if start_idx == goal_idx {
        return Err(SearchError::SameEndpoints(start));
    }

    log::debug!("search {start} -> {goal} on {size}x{size} grid");

    let mut st = SearchState::new(grid);
    st.nodes[start_idx].g = 0;
    st.nodes[start_idx].f = manhattan(start, goal);
    st.enqueue(start_idx);

    let mut expansions = 0usize;
    let mut nbuf: Vec<Pos> = Vec::with_capacity(4);

    while let Some(ci) = st.pop() {
        let current = grid.pos_at(ci);

        if ci == goal_idx {
            log::debug!("goal reached after {expansions} expansions");
            let found = match path::reconstruct(grid, &st.parents, goal, redraw) {
                Ok(found) => found,
                Err(Cancelled) => return Ok(SearchOutcome::Cancelled),
            };
            grid.set_state(start, CellState::Start)?;
            grid.set_state(goal, CellState::End)?;
            // Nothing is left to abandon, so a Break here changes nothing.
            let _ = redraw.redraw(grid);
            return Ok(SearchOutcome::PathFound(found));
        }

        expansions += 1;
        let current_g = st.nodes[ci].g;
        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(current)?.neighbors());

        for &np in &nbuf {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            let tentative_g = current_g + 1;
            if tentative_g >= st.nodes[ni].g {
                continue;
            }

            st.parents.insert(np, current);
            let n = &mut st.nodes[ni];
            n.g = tentative_g;
            n.f = tentative_g + manhattan(np, goal);

            // A queued cell keeps its entry and the key it was pushed with.
            if !n.open {
                st.enqueue(ni);
                if np != start && np != goal {
                    grid.set_state(np, CellState::Frontier)?;
                }
            }
        }

        log::trace!("expanded {current} (g = {current_g})");

        if redraw.redraw(grid).is_break() {
            log::debug!("search cancelled after {expansions} expansions");
            return Ok(SearchOutcome::Cancelled);
        }

        if ci != start_idx {
            grid.set_state(current, CellState::Visited)?;
        }
    }

    log::debug!("no path: frontier exhausted after {expansions} expansions");
    Ok(SearchOutcome::NoPathExists)
}
