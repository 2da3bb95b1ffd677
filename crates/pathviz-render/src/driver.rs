//! The [`Driver`] seam between a host and a concrete screen.

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::canvas::Frame;
use crate::messages::Msg;

/// Boxed error returned by drivers.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Screen back-end.
pub trait Driver {
    /// Take over the screen.
    fn init(&mut self) -> Result<(), DriverError>;

    /// Wait at most `timeout` for input, then forward every pending event
    /// through `tx` and return. Never blocks past `timeout`: a search polls
    /// with a zero timeout between steps.
    fn poll_msgs(&mut self, timeout: Duration, tx: &Sender<Msg>) -> Result<(), DriverError>;

    /// Write a diff frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), DriverError>;

    /// Restore the screen. Called once, also after errors.
    fn close(&mut self);
}
