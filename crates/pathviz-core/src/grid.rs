//! The [`Grid`] type: a fixed `size × size` square of owned [`Cell`]s.

use std::fmt;

use crate::cell::{Cell, CellState};
use crate::geom::{Dir, Pos};

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors raised by grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, size)` on either axis.
    OutOfBounds { pos: Pos, size: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "cell {pos} is outside the {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A square grid of cells stored row-major.
///
/// The size is fixed at construction. Every cell is created `Open` with an
/// empty adjacency cache; call [`refresh_all_adjacency`](Grid::refresh_all_adjacency)
/// once the barriers are final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `size × size` grid of open cells.
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|i| Cell::new(Pos::new(i / size, i % size)))
            .collect();
        Self { size, cells }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Flat row-major index of `pos`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Inverse of [`index`](Grid::index). `index` must be `< len()`.
    #[inline]
    pub fn pos_at(&self, index: usize) -> Pos {
        self.cells[index].position()
    }

    #[inline]
    fn checked_index(&self, pos: Pos) -> Result<usize, GridError> {
        self.index(pos).ok_or(GridError::OutOfBounds {
            pos,
            size: self.size,
        })
    }

    pub fn cell_at(&self, pos: Pos) -> Result<&Cell, GridError> {
        let i = self.checked_index(pos)?;
        Ok(&self.cells[i])
    }

    pub fn cell_at_mut(&mut self, pos: Pos) -> Result<&mut Cell, GridError> {
        let i = self.checked_index(pos)?;
        Ok(&mut self.cells[i])
    }

    pub fn state(&self, pos: Pos) -> Result<CellState, GridError> {
        self.cell_at(pos).map(Cell::state)
    }

    pub fn set_state(&mut self, pos: Pos, state: CellState) -> Result<(), GridError> {
        self.cell_at_mut(pos)?.set_state(state);
        Ok(())
    }

    /// Passable cells one step away from `pos`, scanning south, east,
    /// north, west. Reads current states; does not touch any cache.
    pub fn passable_neighbors(&self, pos: Pos) -> Result<Vec<Pos>, GridError> {
        self.checked_index(pos)?;
        Ok(self.scan_neighbors(pos))
    }

    fn scan_neighbors(&self, pos: Pos) -> Vec<Pos> {
        Dir::ALL
            .iter()
            .filter_map(|&d| pos.step(d, self.size))
            .filter(|&n| self.cells[n.row * self.size + n.col].state().is_passable())
            .collect()
    }

    /// Overwrite the adjacency cache of the cell at `pos`.
    pub fn recompute_neighbors(&mut self, pos: Pos) -> Result<(), GridError> {
        let neighbors = self.passable_neighbors(pos)?;
        self.cell_at_mut(pos)?.set_neighbors(neighbors);
        Ok(())
    }

    /// Recompute the adjacency cache of every cell.
    ///
    /// The result is a snapshot: later barrier changes are not seen until
    /// the next refresh.
    pub fn refresh_all_adjacency(&mut self) {
        for i in 0..self.cells.len() {
            let neighbors = self.scan_neighbors(self.cells[i].position());
            self.cells[i].set_neighbors(neighbors);
        }
    }

    /// Reset every `Frontier`, `Visited` and `Path` cell to `Open`.
    pub fn clear_search_marks(&mut self) {
        for c in &mut self.cells {
            if c.state().is_search_mark() {
                c.set_state(CellState::Open);
            }
        }
    }

    /// Number of cells currently tagged `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Row-major snapshot of all cell states.
    pub fn states(&self) -> Vec<CellState> {
        self.cells.iter().map(Cell::state).collect()
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
