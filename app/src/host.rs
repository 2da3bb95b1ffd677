//! The terminal side of a search: painting frames and watching for abort
//! keys between steps.

use std::ops::ControlFlow;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use pathviz_core::{Grid, Redraw};
use pathviz_render::{Canvas, Driver, DriverError, Key, Msg, Style, compute_frame};

use crate::palette::{self, Layout};

/// Why the host stopped a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// `Esc`: stop the search, keep the session.
    Abort,
    /// `q`, `Ctrl-C` or a close request: stop everything.
    Quit,
}

impl Interrupt {
    /// The interrupt `msg` requests, if any.
    pub fn of(msg: &Msg) -> Option<Self> {
        if matches!(msg, Msg::Quit) || msg.is_interrupt() {
            return Some(Self::Quit);
        }
        match msg {
            Msg::KeyDown {
                key: Key::Char('q'),
                ..
            } => Some(Self::Quit),
            Msg::KeyDown {
                key: Key::Escape, ..
            } => Some(Self::Abort),
            _ => None,
        }
    }

    fn merge(prev: Option<Self>, next: Self) -> Self {
        match (prev, next) {
            (Some(Self::Quit), _) | (_, Self::Quit) => Self::Quit,
            _ => Self::Abort,
        }
    }
}

/// Owns the driver and the two canvases used for frame diffing.
///
/// As a [`Redraw`] it repaints the grid, flushes the changed glyphs, drains
/// pending input and then waits `step_delay`. During a search every input
/// other than an [`Interrupt`] is dropped.
pub struct Host<D: Driver> {
    driver: D,
    layout: Layout,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
    /// What the terminal currently shows.
    screen: Canvas,
    canvas: Canvas,
    status: String,
    status_style: Style,
    step_delay: Duration,
    interrupt: Option<Interrupt>,
    error: Option<DriverError>,
}

impl<D: Driver> Host<D> {
    pub fn new(driver: D, layout: Layout, step_delay: Duration) -> Self {
        let (w, h) = layout.canvas_size();
        let (tx, rx) = mpsc::channel();
        Self {
            driver,
            layout,
            tx,
            rx,
            screen: Canvas::new(0, 0),
            canvas: Canvas::new(w, h),
            status: String::new(),
            status_style: palette::status_style(),
            step_delay,
            interrupt: None,
            error: None,
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_style = palette::status_style();
    }

    /// Like [`set_status`](Self::set_status), highlighted.
    pub fn set_alert(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_style = palette::alert_style();
    }

    pub fn init(&mut self) -> Result<(), DriverError> {
        self.driver.init()
    }

    /// Hand the screen back to the terminal.
    pub fn close(&mut self) {
        self.driver.close();
    }

    /// Forget what is on screen so the next frame repaints everything.
    pub fn invalidate(&mut self) {
        self.screen = Canvas::new(0, 0);
    }

    /// Paint `grid` and the status line, then flush what changed.
    pub fn present(&mut self, grid: &Grid) -> Result<(), DriverError> {
        palette::draw_grid(&mut self.canvas, grid, &self.layout);
        palette::draw_status(&mut self.canvas, &self.layout, &self.status, self.status_style);
        let frame = compute_frame(&self.screen, &self.canvas);
        if !frame.is_empty() {
            self.driver.flush(frame)?;
        }
        self.screen.clone_from(&self.canvas);
        Ok(())
    }

    /// Wait up to `timeout` for input and return everything pending.
    pub fn poll(&mut self, timeout: Duration) -> Result<Vec<Msg>, DriverError> {
        self.driver.poll_msgs(timeout, &self.tx)?;
        Ok(self.rx.try_iter().collect())
    }

    /// The interrupt that stopped the last search, if any.
    pub fn take_interrupt(&mut self) -> Option<Interrupt> {
        self.interrupt.take()
    }

    /// A driver failure that stopped the last search, if any.
    pub fn take_error(&mut self) -> Option<DriverError> {
        self.error.take()
    }

    fn step(&mut self, grid: &Grid) -> Result<(), DriverError> {
        self.present(grid)?;
        for msg in self.poll(Duration::ZERO)? {
            match Interrupt::of(&msg) {
                Some(i) => self.interrupt = Some(Interrupt::merge(self.interrupt, i)),
                None if matches!(msg, Msg::Screen { .. }) => self.invalidate(),
                None => log::trace!("dropped during search: {msg:?}"),
            }
        }
        Ok(())
    }
}

impl<D: Driver> Redraw for Host<D> {
    fn redraw(&mut self, grid: &Grid) -> ControlFlow<()> {
        if let Err(e) = self.step(grid) {
            log::error!("redraw failed: {e}");
            self.error = Some(e);
            return ControlFlow::Break(());
        }
        if let Some(i) = self.interrupt {
            log::debug!("search interrupted: {i:?}");
            return ControlFlow::Break(());
        }
        if !self.step_delay.is_zero() {
            std::thread::sleep(self.step_delay);
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockDriver;
    use pathviz_core::{CellState, Pos};
    use pathviz_render::{ModMask, MouseAction, Point};

    fn host(size: usize, driver: MockDriver) -> Host<MockDriver> {
        Host::new(driver, Layout::new(size, 2), Duration::ZERO)
    }

    #[test]
    fn first_present_paints_everything_then_only_diffs() {
        let mut h = host(4, MockDriver::new());
        let mut g = Grid::new(4);
        h.present(&g).unwrap();
        let (w, ht) = h.layout().canvas_size();
        assert_eq!(h.driver().flushed[0].cells.len(), (w * ht) as usize);

        g.set_state(Pos::new(2, 1), CellState::Barrier).unwrap();
        h.present(&g).unwrap();
        let diff = &h.driver().flushed[1];
        assert_eq!(diff.cells.len(), 2);
        assert!(diff.cells.iter().all(|c| c.pos.y == 2));

        // Nothing changed: nothing flushed.
        h.present(&g).unwrap();
        assert_eq!(h.driver().flushed.len(), 2);
    }

    #[test]
    fn invalidate_forces_full_repaint() {
        let mut h = host(3, MockDriver::new());
        let g = Grid::new(3);
        h.present(&g).unwrap();
        h.invalidate();
        h.present(&g).unwrap();
        assert_eq!(h.driver().flushed[0], h.driver().flushed[1]);
    }

    #[test]
    fn redraw_continues_without_input() {
        let mut h = host(3, MockDriver::new());
        let g = Grid::new(3);
        assert_eq!(h.redraw(&g), ControlFlow::Continue(()));
        assert_eq!(h.take_interrupt(), None);
    }

    #[test]
    fn escape_aborts_and_other_input_is_dropped() {
        let mut d = MockDriver::new();
        d.during_search.push_back(vec![
            Msg::mouse(MouseAction::Main, Point::new(0, 0)),
            Msg::key(Key::Space),
        ]);
        d.during_search.push_back(vec![Msg::key(Key::Escape)]);
        let mut h = host(3, d);
        let g = Grid::new(3);
        assert_eq!(h.redraw(&g), ControlFlow::Continue(()));
        assert_eq!(h.redraw(&g), ControlFlow::Break(()));
        assert_eq!(h.take_interrupt(), Some(Interrupt::Abort));
        assert!(h.poll(Duration::ZERO).unwrap().is_empty());
    }

    #[test]
    fn quit_wins_over_abort() {
        let mut d = MockDriver::new();
        d.during_search.push_back(vec![
            Msg::key(Key::Escape),
            Msg::key_mod(Key::Char('c'), ModMask::CTRL),
            Msg::key(Key::Escape),
        ]);
        let mut h = host(3, d);
        assert_eq!(h.redraw(&Grid::new(3)), ControlFlow::Break(()));
        assert_eq!(h.take_interrupt(), Some(Interrupt::Quit));
    }

    #[test]
    fn flush_failure_breaks_and_is_kept() {
        let mut h = host(3, MockDriver::new().failing_after(0));
        assert_eq!(h.redraw(&Grid::new(3)), ControlFlow::Break(()));
        let err = h.take_error().expect("error kept");
        assert_eq!(err.to_string(), "screen gone");
        assert!(h.take_error().is_none());
    }

    #[test]
    fn poll_returns_the_whole_batch_and_close_releases_the_driver() {
        let batch = vec![
            Msg::key(Key::Char('r')),
            Msg::mouse(MouseAction::Secondary, Point::new(2, 1)),
            Msg::key(Key::Space),
        ];
        let mut h = host(3, MockDriver::new().idle(batch.clone()));
        assert_eq!(h.poll(Duration::from_millis(10)).unwrap(), batch);
        assert!(h.poll(Duration::ZERO).unwrap().is_empty());
        h.close();
        assert!(h.driver().closed);
    }

    #[test]
    fn interrupt_classification() {
        assert_eq!(Interrupt::of(&Msg::Quit), Some(Interrupt::Quit));
        assert_eq!(Interrupt::of(&Msg::key(Key::Char('q'))), Some(Interrupt::Quit));
        assert_eq!(Interrupt::of(&Msg::key(Key::Escape)), Some(Interrupt::Abort));
        assert_eq!(Interrupt::of(&Msg::key(Key::Char('r'))), None);
    }
}
