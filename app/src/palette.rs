//! Cell colours and the mapping between terminal and grid coordinates.

use pathviz_core::{CellState, Grid, Pos};
use pathviz_render::{Canvas, Color, Glyph, Point, Range, Style};

pub const WHITE: Color = Color::from_rgb(255, 255, 255);
pub const RED: Color = Color::from_rgb(255, 0, 0);
pub const GREEN: Color = Color::from_rgb(0, 255, 0);
pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
// Color(0) means "terminal default", so black is nudged off zero.
pub const BLACK: Color = Color::from_rgb(0, 0, 1);
pub const BLUE: Color = Color::from_rgb(0, 0, 255);
pub const PURPLE: Color = Color::from_rgb(128, 0, 128);

const STATUS_FG: Color = Color::from_rgb(220, 220, 220);
const STATUS_BG: Color = Color::from_rgb(30, 30, 50);

/// Shortest status line that still fits the key help.
pub const MIN_STATUS_WIDTH: i32 = 64;

pub fn color_of(state: CellState) -> Color {
    match state {
        CellState::Open => WHITE,
        CellState::Barrier => BLACK,
        CellState::Start => BLUE,
        CellState::End => PURPLE,
        CellState::Frontier => GREEN,
        CellState::Visited => RED,
        CellState::Path => YELLOW,
    }
}

pub fn glyph_of(state: CellState) -> Glyph {
    Glyph::new(' ', Style::default().with_bg(color_of(state)))
}

pub fn status_style() -> Style {
    Style::default().with_fg(STATUS_FG).with_bg(STATUS_BG)
}

pub fn alert_style() -> Style {
    status_style().bold()
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Where the grid and the status line sit on the terminal. Each grid cell
/// is `cell_width` columns wide and one row high; the status line is the
/// row right under the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    size: usize,
    cell_width: i32,
}

impl Layout {
    pub fn new(size: usize, cell_width: u16) -> Self {
        Self {
            size,
            cell_width: i32::from(cell_width.max(1)),
        }
    }

    pub fn grid_width(&self) -> i32 {
        self.size as i32 * self.cell_width
    }

    /// Canvas extent: the grid plus one status row.
    pub fn canvas_size(&self) -> (i32, i32) {
        (
            self.grid_width().max(MIN_STATUS_WIDTH),
            self.size as i32 + 1,
        )
    }

    pub fn status_row(&self) -> i32 {
        self.size as i32
    }

    /// The grid cell under a terminal position, if any.
    pub fn cell_at(&self, p: Point) -> Option<Pos> {
        if p.x < 0 || p.y < 0 || p.x >= self.grid_width() || p.y >= self.size as i32 {
            return None;
        }
        Some(Pos::new(p.y as usize, (p.x / self.cell_width) as usize))
    }

    /// Terminal area covered by a grid cell.
    pub fn cell_range(&self, pos: Pos) -> Range {
        let origin = Point::new(pos.col as i32 * self.cell_width, pos.row as i32);
        Range::sized(origin, self.cell_width, 1)
    }
}

/// Paint every grid cell into `canvas`.
pub fn draw_grid(canvas: &mut Canvas, grid: &Grid, layout: &Layout) {
    for cell in grid {
        canvas.fill_range(layout.cell_range(cell.position()), glyph_of(cell.state()));
    }
}

/// Replace the status row with `text`.
pub fn draw_status(canvas: &mut Canvas, layout: &Layout, text: &str, style: Style) {
    let row = layout.status_row();
    canvas.fill_range(
        Range::new(0, row, canvas.width(), row + 1),
        Glyph::new(' ', style),
    );
    canvas.print(Point::new(1, row), text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_its_own_colour() {
        let mut seen: Vec<Color> = CellState::ALL.iter().map(|&s| color_of(s)).collect();
        seen.sort_by_key(|c| c.0);
        seen.dedup();
        assert_eq!(seen.len(), CellState::ALL.len());
        assert!(!seen.contains(&Color::DEFAULT));
    }

    #[test]
    fn terminal_points_map_to_cells() {
        let l = Layout::new(10, 2);
        assert_eq!(l.cell_at(Point::new(0, 0)), Some(Pos::new(0, 0)));
        assert_eq!(l.cell_at(Point::new(5, 3)), Some(Pos::new(3, 2)));
        assert_eq!(l.cell_at(Point::new(19, 9)), Some(Pos::new(9, 9)));
        assert_eq!(l.cell_at(Point::new(20, 0)), None);
        assert_eq!(l.cell_at(Point::new(0, 10)), None);
        assert_eq!(l.cell_at(Point::new(-1, 0)), None);
    }

    #[test]
    fn cell_range_round_trips_through_cell_at() {
        let l = Layout::new(6, 3);
        let pos = Pos::new(4, 5);
        for p in l.cell_range(pos) {
            assert_eq!(l.cell_at(p), Some(pos));
        }
        assert_eq!(l.cell_range(pos).width(), 3);
    }

    #[test]
    fn canvas_fits_grid_and_status() {
        let l = Layout::new(50, 2);
        assert_eq!(l.canvas_size(), (100, 51));
        // Small grids still get a readable status line.
        assert_eq!(Layout::new(4, 2).canvas_size(), (MIN_STATUS_WIDTH, 5));
    }

    #[test]
    fn draw_grid_colours_cells() {
        let mut g = Grid::new(3);
        g.set_state(Pos::new(1, 2), CellState::Barrier).unwrap();
        let l = Layout::new(3, 2);
        let (w, h) = l.canvas_size();
        let mut canvas = Canvas::new(w, h);
        draw_grid(&mut canvas, &g, &l);
        assert_eq!(canvas.at(Point::new(4, 1)).style.bg, BLACK);
        assert_eq!(canvas.at(Point::new(5, 1)).style.bg, BLACK);
        assert_eq!(canvas.at(Point::new(3, 1)).style.bg, WHITE);
        // Past the grid nothing is painted.
        assert_eq!(canvas.at(Point::new(6, 1)), Glyph::default());
    }
}
