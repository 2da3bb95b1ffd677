//! The [`Canvas`] a host paints into, and frame diffing.
//!
//! Hosts keep two canvases: the one last sent to the screen and the one
//! being painted. [`compute_frame`] yields only the glyphs that changed, so
//! a search that recolours a handful of cells per step writes a handful of
//! terminal cells per step.

use crate::geom::{Point, Range};
use crate::style::Style;

/// A styled character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A fixed-size, row-major buffer of [`Glyph`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    /// A blank canvas. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.bounds()
            .contains(p)
            .then(|| (p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// The glyph at `p`, or a blank one outside the canvas.
    pub fn at(&self, p: Point) -> Glyph {
        self.index(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op outside the canvas.
    pub fn set(&mut self, p: Point, g: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = g;
        }
    }

    /// Set every glyph of `r` that lies on the canvas.
    pub fn fill_range(&mut self, r: Range, g: Glyph) {
        for p in r.intersect(self.bounds()) {
            self.set(p, g);
        }
    }

    /// Write `text` left to right from `p`, clipped at the right edge.
    /// Returns the number of glyphs written.
    pub fn print(&mut self, p: Point, text: &str, style: Style) -> usize {
        let mut n = 0;
        for (dx, ch) in text.chars().enumerate() {
            let q = p.shift(dx as i32, 0);
            if !self.bounds().contains(q) {
                break;
            }
            self.set(q, Glyph::new(ch, style));
            n += 1;
        }
        n
    }

    /// Row-major `(Point, Glyph)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Glyph)> + '_ {
        self.bounds().iter().zip(self.glyphs.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Frame / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between two canvases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// The glyphs to write to bring the screen up to date.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Difference between what is on screen (`prev`) and what should be
/// (`curr`).
///
/// Canvases of different sizes cannot be diffed; the result is then every
/// glyph of `curr`.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let full = prev.width != curr.width || prev.height != curr.height;
    let cells = curr
        .iter()
        .filter(|&(p, g)| full || prev.at(p) != g)
        .map(|(pos, glyph)| FrameCell { glyph, pos })
        .collect();
    Frame {
        cells,
        width: curr.width,
        height: curr.height,
    }
}
