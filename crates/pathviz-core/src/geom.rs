//! Grid coordinates: [`Pos`] and the four axis-aligned [`Dir`]ections.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell coordinate. Row grows down, column grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbor one step in `dir`, if it lies inside a `size × size`
    /// grid.
    ///
    /// `self` itself is assumed to be in bounds. Moving north from row 0 or
    /// west from column 0 yields `None` instead of wrapping.
    #[inline]
    pub fn step(self, dir: Dir, size: usize) -> Option<Pos> {
        let (row, col) = match dir {
            Dir::South => (self.row.checked_add(1)?, self.col),
            Dir::East => (self.row, self.col.checked_add(1)?),
            Dir::North => (self.row.checked_sub(1)?, self.col),
            Dir::West => (self.row, self.col.checked_sub(1)?),
        };
        (row < size && col < size).then_some(Pos { row, col })
    }

    /// Whether `self` and `other` are exactly one axis-aligned step apart.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Pos> for (usize, usize) {
    fn from(p: Pos) -> Self {
        (p.row, p.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four axis-aligned movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    South,
    East,
    North,
    West,
}

impl Dir {
    /// Neighbor scan order. Adjacency lists are always built in this order.
    pub const ALL: [Dir; 4] = [Dir::South, Dir::East, Dir::North, Dir::West];
}
