//! **pathviz-render**: host-side presentation types for pathviz.
//!
//! Screen geometry, styled glyphs, a diffable [`Canvas`], input messages
//! and the [`Driver`] trait that concrete back-ends implement. Nothing here
//! knows about grids or searches.

pub mod canvas;
pub mod driver;
pub mod geom;
pub mod messages;
pub mod style;

pub use canvas::{Canvas, Frame, FrameCell, Glyph, compute_frame};
pub use driver::{Driver, DriverError};
pub use geom::{Point, Range};
pub use messages::*;
pub use style::{Color, Style};
