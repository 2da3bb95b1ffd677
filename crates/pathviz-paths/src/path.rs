//! Predecessor table and step-by-step path reconstruction.

use std::ops::ControlFlow;

use pathviz_core::{CellState, Grid, Pos, Redraw};

/// Per-cell predecessor on the best known path, indexed like the grid.
#[derive(Debug, Clone)]
pub struct ParentMap {
    size: usize,
    parents: Vec<Option<Pos>>,
}

impl ParentMap {
    /// An empty table for a `size × size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            parents: vec![None; size * size],
        }
    }

    #[inline]
    fn slot(&self, pos: Pos) -> Option<usize> {
        (pos.row < self.size && pos.col < self.size).then(|| pos.row * self.size + pos.col)
    }

    pub fn get(&self, pos: Pos) -> Option<Pos> {
        self.slot(pos).and_then(|i| self.parents[i])
    }

    /// Record `parent` as the predecessor of `pos`. Out-of-range positions
    /// are ignored.
    pub fn insert(&mut self, pos: Pos, parent: Pos) {
        if let Some(i) = self.slot(pos) {
            self.parents[i] = Some(parent);
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }
}

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Pos>,
}

impl Path {
    /// Cells from start to goal, both included.
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit steps (`len() - 1`).
    pub fn cost(&self) -> u32 {
        self.cells.len().saturating_sub(1) as u32
    }

    pub fn start(&self) -> Option<Pos> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Pos> {
        self.cells.last().copied()
    }
}

/// The host asked to stop while the path was being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Walk `parents` back from `goal`, tagging each predecessor `Path` and
/// requesting one redraw per step.
///
/// Issues exactly `path.len() - 1` redraws. The walk ends at the cell with
/// no recorded parent (the start), which keeps its `Start` tag. If the
/// host cancels, every recoloured cell gets its previous tag back and
/// nothing of the path stays visible.
pub fn reconstruct<R>(
    grid: &mut Grid,
    parents: &ParentMap,
    goal: Pos,
    redraw: &mut R,
) -> Result<Path, Cancelled>
where
    R: Redraw + ?Sized,
{
    let mut cells = vec![goal];
    let mut recoloured: Vec<(Pos, CellState)> = Vec::new();
    let mut current = goal;

    while let Some(prev) = parents.get(current) {
        current = prev;
        cells.push(current);

        if let Ok(cell) = grid.cell_at_mut(current) {
            if cell.state() != CellState::Start {
                recoloured.push((current, cell.state()));
                cell.set_state(CellState::Path);
            }
        }

        if let ControlFlow::Break(()) = redraw.redraw(grid) {
            for (pos, state) in recoloured {
                let _ = grid.set_state(pos, state);
            }
            log::debug!("path drawing cancelled after {} steps", cells.len() - 1);
            return Err(Cancelled);
        }
    }

    cells.reverse();
    Ok(Path { cells })
}
