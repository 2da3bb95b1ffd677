//! The [`Cell`] type and its single-tag [`CellState`].

use crate::geom::Pos;

/// What a cell currently is. Exactly one tag holds at a time; hosts map
/// each tag to a colour, the grid never stores one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Barrier,
    Start,
    End,
    /// Enqueued in the search frontier.
    Frontier,
    /// Expanded by the search.
    Visited,
    /// Part of the reconstructed shortest path.
    Path,
}

impl CellState {
    /// Every tag, in declaration order.
    pub const ALL: [CellState; 7] = [
        CellState::Open,
        CellState::Barrier,
        CellState::Start,
        CellState::End,
        CellState::Frontier,
        CellState::Visited,
        CellState::Path,
    ];

    /// Whether a search may step onto a cell in this state.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellState::Barrier)
    }

    /// `Start` or `End`.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    /// Tags written by a search run (`Frontier`, `Visited`, `Path`).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(
            self,
            CellState::Frontier | CellState::Visited | CellState::Path
        )
    }
}

/// A single grid cell: a fixed position, a state tag and a cached list of
/// passable neighbors.
///
/// The neighbor cache is a snapshot. It only changes when the owning
/// [`Grid`](crate::Grid) recomputes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    state: CellState,
    neighbors: Vec<Pos>,
}

impl Cell {
    pub(crate) fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Open,
            neighbors: Vec::new(),
        }
    }

    /// The cell's `(row, col)` identity.
    #[inline]
    pub fn position(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Passable neighbors as of the last adjacency refresh, in
    /// south, east, north, west order.
    #[inline]
    pub fn neighbors(&self) -> &[Pos] {
        &self.neighbors
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Pos>) {
        self.neighbors = neighbors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_open_without_neighbors() {
        let c = Cell::new(Pos::new(3, 4));
        assert_eq!(c.position(), Pos::new(3, 4));
        assert_eq!(c.state(), CellState::Open);
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn set_state_replaces_the_tag() {
        let mut c = Cell::new(Pos::new(0, 0));
        c.set_state(CellState::Barrier);
        assert_eq!(c.state(), CellState::Barrier);
        c.set_state(CellState::Visited);
        assert_eq!(c.state(), CellState::Visited);
    }

    #[test]
    fn only_barrier_blocks() {
        for s in CellState::ALL {
            assert_eq!(s.is_passable(), s != CellState::Barrier, "{s:?}");
        }
    }

    #[test]
    fn classification() {
        assert!(CellState::Start.is_endpoint());
        assert!(CellState::End.is_endpoint());
        assert!(!CellState::Path.is_endpoint());
        assert!(CellState::Frontier.is_search_mark());
        assert!(CellState::Visited.is_search_mark());
        assert!(CellState::Path.is_search_mark());
        assert!(!CellState::Open.is_search_mark());
        assert!(!CellState::Barrier.is_search_mark());
    }
}
