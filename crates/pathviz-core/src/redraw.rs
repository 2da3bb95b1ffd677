//! The redraw capability a host hands to the search, and a [`Recorder`]
//! that captures every requested frame.

use std::ops::ControlFlow;

use crate::cell::CellState;
use crate::grid::Grid;

/// Repaint request issued by the search after every expansion and path
/// step.
///
/// The grid arrives as a shared borrow: implementations can read every
/// cell but never change one. Returning [`ControlFlow::Break`] asks the
/// caller to abandon its work as soon as possible.
pub trait Redraw {
    fn redraw(&mut self, grid: &Grid) -> ControlFlow<()>;
}

impl<F> Redraw for F
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    #[inline]
    fn redraw(&mut self, grid: &Grid) -> ControlFlow<()> {
        self(grid)
    }
}

/// A [`Redraw`] that keeps a row-major state snapshot of every frame.
///
/// Optionally cancels after a fixed number of frames, which makes abort
/// paths reproducible.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    frames: Vec<Vec<CellState>>,
    cancel_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that returns `Break` on the `n`-th frame (1-based).
    /// That frame is still recorded.
    pub fn cancelling_after(n: usize) -> Self {
        Self {
            frames: Vec::new(),
            cancel_after: Some(n),
        }
    }

    /// Recorded frames, oldest first.
    pub fn frames(&self) -> &[Vec<CellState>] {
        &self.frames
    }

    /// Number of redraw calls seen.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last(&self) -> Option<&[CellState]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Redraw for Recorder {
    fn redraw(&mut self, grid: &Grid) -> ControlFlow<()> {
        self.frames.push(grid.states());
        match self.cancel_after {
            Some(n) if self.frames.len() >= n => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Pos;

    #[test]
    fn closures_are_redraws() {
        let mut calls = 0;
        let mut r = |_: &Grid| {
            calls += 1;
            ControlFlow::Continue(())
        };
        let g = Grid::new(2);
        assert_eq!(r.redraw(&g), ControlFlow::Continue(()));
        assert_eq!(r.redraw(&g), ControlFlow::Continue(()));
        assert_eq!(calls, 2);
    }

    #[test]
    fn recorder_snapshots_states() {
        let mut g = Grid::new(2);
        let mut rec = Recorder::new();
        let _ = rec.redraw(&g);
        g.set_state(Pos::new(1, 1), CellState::Barrier).unwrap();
        let _ = rec.redraw(&g);
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.frames()[0], vec![CellState::Open; 4]);
        assert_eq!(rec.last().unwrap()[3], CellState::Barrier);
    }

    #[test]
    fn recorder_cancels_on_nth_frame() {
        let g = Grid::new(2);
        let mut rec = Recorder::cancelling_after(2);
        assert_eq!(rec.redraw(&g), ControlFlow::Continue(()));
        assert_eq!(rec.redraw(&g), ControlFlow::Break(()));
        assert_eq!(rec.len(), 2);
        rec.clear();
        assert!(rec.is_empty());
    }
}
