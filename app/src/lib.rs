//! Interactive terminal visualizer for step-by-step A* search.
//!
//! Left-click places the start, then the end, then walls; right-click
//! clears a cell. `Space` animates the search one expansion per frame,
//! `Esc` aborts it, `r` regenerates the grid and `q` quits.

pub mod app;
pub mod config;
pub mod controller;
pub mod host;
pub mod palette;

#[cfg(test)]
mod testing;

pub use app::App;
pub use config::Config;
pub use controller::{Command, CommandError, Controller};
pub use host::{Host, Interrupt};
pub use palette::Layout;
