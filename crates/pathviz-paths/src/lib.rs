//! Animated shortest-path search on a pathviz grid.
//!
//! - **A\*** with the Manhattan heuristic ([`run`]), tagging cells as it
//!   explores and asking the host for a redraw after every expansion
//! - **Path reconstruction** one cell per redraw ([`reconstruct`])
//! - **BFS** distance ([`bfs_distance`]), a state-free reference for tests
//!   and sanity checks
//!
//! # Ordering
//!
//! The frontier pops the lowest `f = g + h` first. Equal `f` values leave
//! in the order their cells first entered the frontier, so a given grid
//! and pair of endpoints always replays the same frames.

mod astar;
mod bfs;
mod frontier;
mod heuristic;
mod path;

pub use astar::{SearchError, SearchOutcome, UNREACHED, run};
pub use bfs::bfs_distance;
pub use frontier::{FrontierEntry, FrontierQueue};
pub use heuristic::manhattan;
pub use path::{Cancelled, ParentMap, Path, reconstruct};
