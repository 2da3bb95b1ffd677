//! Grid editing and run requests: the only path through which input
//! reaches the grid.
//!
//! The [`Controller`] keeps the endpoint bookkeeping next to the grid so the
//! two cannot drift apart: at most one `Start` and one `End` exist at any
//! time, and barrier edits never overwrite either of them.

use std::fmt;

use pathviz_core::{CellState, Grid, GridError, Pos, Redraw};
use pathviz_paths::{SearchError, SearchOutcome};
use rand::{Rng, RngExt};

// ---------------------------------------------------------------------------
// Command / errors
// ---------------------------------------------------------------------------

/// An edit or request coming from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlaceStart(Pos),
    PlaceEnd(Pos),
    ToggleBarrier(Pos),
    ClearCell(Pos),
    /// Left-button rule: start first, then end, then barriers.
    Paint(Pos),
    /// Remove the previous run's marks, keeping barriers and endpoints.
    ClearMarks,
    Run,
    /// Regenerate: a fresh open grid with no endpoints.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    OutOfBounds(GridError),
    /// The cell holds an endpoint the command may not overwrite.
    Protected { pos: Pos, state: CellState },
    /// A run was requested without both endpoints.
    MissingEndpoints {
        start: Option<Pos>,
        end: Option<Pos>,
    },
    Search(SearchError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(e) => write!(f, "{e}"),
            Self::Protected { pos, state } => {
                write!(f, "cell {pos} is the {state:?} cell; clear it first")
            }
            Self::MissingEndpoints { start, end } => match (start, end) {
                (None, None) => f.write_str("place a start and an end before running"),
                (None, Some(_)) => f.write_str("place a start before running"),
                _ => f.write_str("place an end before running"),
            },
            Self::Search(e) => write!(f, "search: {e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for CommandError {
    fn from(e: GridError) -> Self {
        Self::OutOfBounds(e)
    }
}

impl From<SearchError> for CommandError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    fn state(self) -> CellState {
        match self {
            Self::Start => CellState::Start,
            Self::End => CellState::End,
        }
    }
}

/// Owns the grid and its endpoints.
#[derive(Debug, Clone)]
pub struct Controller {
    grid: Grid,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Controller {
    /// A controller over a fresh, open `size × size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            start: None,
            end: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Whether both endpoints are placed.
    pub fn is_ready(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    fn slot(&mut self, which: Endpoint) -> &mut Option<Pos> {
        match which {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        }
    }

    /// Put `which` on `pos`, moving it if it already exists elsewhere.
    fn place_endpoint(&mut self, which: Endpoint, pos: Pos) -> Result<(), CommandError> {
        let state = self.grid.state(pos)?;
        if state.is_endpoint() && state != which.state() {
            return Err(CommandError::Protected { pos, state });
        }
        if let Some(old) = *self.slot(which) {
            if old == pos {
                return Ok(());
            }
            self.grid.set_state(old, CellState::Open)?;
            log::debug!("{which:?} moved from {old} to {pos}");
        }
        self.grid.set_state(pos, which.state())?;
        *self.slot(which) = Some(pos);
        Ok(())
    }

    pub fn place_start(&mut self, pos: Pos) -> Result<(), CommandError> {
        self.place_endpoint(Endpoint::Start, pos)
    }

    pub fn place_end(&mut self, pos: Pos) -> Result<(), CommandError> {
        self.place_endpoint(Endpoint::End, pos)
    }

    /// `Barrier` becomes `Open`; any other non-endpoint state becomes
    /// `Barrier`. Returns the new state.
    pub fn toggle_barrier(&mut self, pos: Pos) -> Result<CellState, CommandError> {
        let state = self.grid.state(pos)?;
        let next = match state {
            CellState::Start | CellState::End => {
                return Err(CommandError::Protected { pos, state });
            }
            CellState::Barrier => CellState::Open,
            _ => CellState::Barrier,
        };
        self.grid.set_state(pos, next)?;
        Ok(next)
    }

    /// Reset `pos` to `Open`, forgetting it as an endpoint if it was one.
    pub fn clear_cell(&mut self, pos: Pos) -> Result<(), CommandError> {
        self.grid.set_state(pos, CellState::Open)?;
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
        Ok(())
    }

    /// The left-button rule: the first click places the start, the next
    /// one the end, every later one a barrier. Endpoints are never painted
    /// over, so dragging across them is harmless.
    pub fn paint(&mut self, pos: Pos) -> Result<(), CommandError> {
        let state = self.grid.state(pos)?;
        if state.is_endpoint() {
            return Ok(());
        }
        if self.start.is_none() {
            self.place_start(pos)
        } else if self.end.is_none() {
            self.place_end(pos)
        } else {
            self.grid.set_state(pos, CellState::Barrier)?;
            Ok(())
        }
    }

    pub fn clear_search_marks(&mut self) {
        self.grid.clear_search_marks();
    }

    /// Run the search between the current endpoints.
    ///
    /// Marks left by an earlier run are cleared and adjacency is rebuilt
    /// first. Without both endpoints nothing changes and
    /// [`CommandError::MissingEndpoints`] is returned.
    pub fn request_run<R>(&mut self, redraw: &mut R) -> Result<SearchOutcome, CommandError>
    where
        R: Redraw + ?Sized,
    {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(CommandError::MissingEndpoints {
                start: self.start,
                end: self.end,
            });
        };

        self.grid.clear_search_marks();
        self.grid.refresh_all_adjacency();
        log::info!("run {start} -> {end}");

        let outcome = pathviz_paths::run(&mut self.grid, start, end, redraw)?;
        match &outcome {
            SearchOutcome::PathFound(path) => log::info!("path found, {} steps", path.cost()),
            SearchOutcome::NoPathExists => log::info!("no path exists"),
            SearchOutcome::Cancelled => log::info!("run cancelled"),
        }
        Ok(outcome)
    }

    /// Discard the grid for a fresh open one of the same size.
    pub fn request_reset(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.start = None;
        self.end = None;
        log::info!("grid regenerated");
    }

    /// Turn each `Open` cell into a barrier with probability `density`.
    /// Endpoints and search marks are left alone. Returns the number of
    /// barriers placed.
    pub fn scatter_barriers<R>(&mut self, density: f64, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let density = density.clamp(0.0, 1.0);
        let mut placed = 0;
        for i in 0..self.grid.len() {
            let pos = self.grid.pos_at(i);
            if self.grid.state(pos) != Ok(CellState::Open) {
                continue;
            }
            let r: f64 = rng.random();
            if r < density && self.grid.set_state(pos, CellState::Barrier).is_ok() {
                placed += 1;
            }
        }
        log::debug!("scattered {placed} barriers (density {density})");
        placed
    }

    /// Dispatch a [`Command`]. Only [`Command::Run`] yields an outcome.
    pub fn apply<R>(
        &mut self,
        cmd: Command,
        redraw: &mut R,
    ) -> Result<Option<SearchOutcome>, CommandError>
    where
        R: Redraw + ?Sized,
    {
        log::debug!("apply {cmd:?}");
        match cmd {
            Command::PlaceStart(p) => self.place_start(p)?,
            Command::PlaceEnd(p) => self.place_end(p)?,
            Command::ToggleBarrier(p) => {
                self.toggle_barrier(p)?;
            }
            Command::ClearCell(p) => self.clear_cell(p)?,
            Command::Paint(p) => self.paint(p)?,
            Command::ClearMarks => self.clear_search_marks(),
            Command::Run => return self.request_run(redraw).map(Some),
            Command::Reset => self.request_reset(),
        }
        Ok(None)
    }
}
