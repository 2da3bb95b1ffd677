//! The interactive session: input loop, key bindings and status messages.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use pathviz_core::CellState;
use pathviz_paths::SearchOutcome;
use pathviz_render::{Driver, DriverError, Key, MouseAction, Msg};

use crate::config::Config;
use crate::controller::{Command, Controller};
use crate::host::{Host, Interrupt};
use crate::palette::Layout;

/// How long an idle poll waits for input.
const IDLE_POLL: Duration = Duration::from_millis(50);

pub const HELP: &str =
    "click: start/end/wall  right: clear  space: run  g: scatter  c: clear  r: reset  q: quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A visualizer session over one driver.
pub struct App<D: Driver> {
    controller: Controller,
    host: Host<D>,
    rng: StdRng,
    density: f64,
}

impl<D: Driver> App<D> {
    pub fn new(config: &Config, driver: D) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("scatter seed {seed}");
        let layout = Layout::new(config.grid_size(), config.cell_width);
        Self {
            controller: Controller::new(config.grid_size()),
            host: Host::new(driver, layout, config.step_delay()),
            rng: StdRng::seed_from_u64(seed),
            density: config.density,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn host(&self) -> &Host<D> {
        &self.host
    }

    /// Take over the screen and process input until the user quits.
    /// The screen is restored on every exit path.
    pub fn run(&mut self) -> Result<(), DriverError> {
        let res = self.host.init().and_then(|()| self.event_loop());
        self.host.close();
        res
    }

    fn event_loop(&mut self) -> Result<(), DriverError> {
        self.host.set_status(HELP);
        self.host.present(self.controller.grid())?;
        loop {
            let msgs = self.host.poll(IDLE_POLL)?;
            if msgs.is_empty() {
                continue;
            }
            for msg in msgs {
                if self.handle(msg)? == Flow::Quit {
                    log::info!("quit");
                    return Ok(());
                }
            }
            self.host.present(self.controller.grid())?;
        }
    }

    fn handle(&mut self, msg: Msg) -> Result<Flow, DriverError> {
        if Interrupt::of(&msg) == Some(Interrupt::Quit) {
            return Ok(Flow::Quit);
        }
        match msg {
            Msg::KeyDown { key, .. } => match key {
                Key::Space | Key::Enter => return self.run_search(),
                Key::Char('r') => {
                    self.apply(Command::Reset);
                    self.host.set_status("grid regenerated");
                }
                Key::Char('c') => {
                    self.apply(Command::ClearMarks);
                    self.host.set_status("search marks cleared");
                }
                Key::Char('g') => {
                    let n = self.controller.scatter_barriers(self.density, &mut self.rng);
                    self.host.set_status(format!("scattered {n} barriers"));
                }
                Key::Char('?') | Key::Char('h') => self.host.set_status(HELP),
                _ => {}
            },
            Msg::Mouse { action, pos, .. } => {
                let Some(cell) = self.host.layout().cell_at(pos) else {
                    return Ok(Flow::Continue);
                };
                match action {
                    MouseAction::Main | MouseAction::DragMain => self.apply(Command::Paint(cell)),
                    MouseAction::Secondary | MouseAction::DragSecondary => {
                        self.apply(Command::ClearCell(cell))
                    }
                    _ => {}
                }
            }
            Msg::Screen { .. } => self.host.invalidate(),
            Msg::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Apply an edit command; rejections go to the status line.
    fn apply(&mut self, cmd: Command) {
        if let Err(e) = self.controller.apply(cmd, &mut self.host) {
            log::info!("rejected {cmd:?}: {e}");
            self.host.set_alert(e.to_string());
        }
    }

    fn run_search(&mut self) -> Result<Flow, DriverError> {
        self.host.set_status("searching (esc: abort, q: quit)");
        let result = self.controller.apply(Command::Run, &mut self.host);

        if let Some(e) = self.host.take_error() {
            return Err(e);
        }
        if self.host.take_interrupt() == Some(Interrupt::Quit) {
            return Ok(Flow::Quit);
        }

        match result {
            Ok(Some(SearchOutcome::PathFound(path))) => {
                let explored = self.controller.grid().count(CellState::Visited) + path.len() - 2;
                self.host.set_status(format!(
                    "path found: {} steps, {} cells explored",
                    path.cost(),
                    explored
                ));
            }
            Ok(Some(SearchOutcome::NoPathExists)) => self.host.set_alert("no path exists"),
            Ok(Some(SearchOutcome::Cancelled)) => self.host.set_status("search aborted"),
            Ok(None) => {}
            Err(e) => {
                log::info!("run rejected: {e}");
                self.host.set_alert(e.to_string());
            }
        }
        Ok(Flow::Continue)
    }
}
