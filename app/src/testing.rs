use std::collections::VecDeque;
use std::sync::mpsc::Sender;
use std::time::Duration;

use pathviz_render::{Driver, DriverError, Frame, Msg};

/// A scripted [`Driver`] for tests.
///
/// Polls with a non-zero timeout are idle-loop polls and take the next
/// batch from `idle`; once that runs dry the driver asks to quit.
/// Zero-timeout polls come from a running search and take from
/// `during_search`, yielding nothing when it is empty.
#[derive(Default)]
pub struct MockDriver {
    pub idle: VecDeque<Vec<Msg>>,
    pub during_search: VecDeque<Vec<Msg>>,
    pub flushed: Vec<Frame>,
    pub inited: bool,
    pub closed: bool,
    fail_after: Option<usize>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every flush after `n` successful ones.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn idle(mut self, batch: Vec<Msg>) -> Self {
        self.idle.push_back(batch);
        self
    }
}

impl Driver for MockDriver {
    fn init(&mut self) -> Result<(), DriverError> {
        self.inited = true;
        Ok(())
    }

    fn poll_msgs(&mut self, timeout: Duration, tx: &Sender<Msg>) -> Result<(), DriverError> {
        let batch = if timeout.is_zero() {
            self.during_search.pop_front().unwrap_or_default()
        } else {
            self.idle.pop_front().unwrap_or_else(|| vec![Msg::Quit])
        };
        for msg in batch {
            tx.send(msg)?;
        }
        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), DriverError> {
        if self.fail_after.is_some_and(|n| self.flushed.len() >= n) {
            return Err("screen gone".into());
        }
        self.flushed.push(frame);
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
