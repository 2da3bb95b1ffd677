//! **pathviz-core**: the grid model behind the pathfinding visualizer.
//!
//! A [`Grid`] owns a square of [`Cell`]s, each tagged with exactly one
//! [`CellState`]. Adjacency is cached per cell and refreshed explicitly,
//! so a search always runs against a fixed snapshot of the barriers.
//! Hosts observe progress through the [`Redraw`] capability.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod redraw;

pub use cell::{Cell, CellState};
pub use geom::{Dir, Pos};
pub use grid::{Grid, GridError};
pub use redraw::{Recorder, Redraw};
