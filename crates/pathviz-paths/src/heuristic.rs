use pathviz_core::Pos;

/// Manhattan (L1) distance between two cells.
///
/// Admissible and consistent for unit-cost 4-directional movement.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}
