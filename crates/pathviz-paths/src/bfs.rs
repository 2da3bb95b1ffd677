use std::collections::VecDeque;

use pathviz_core::{Grid, Pos};

/// Unit-cost shortest distance from `from` to `to` by breadth-first
/// search, or `None` if `to` cannot be reached.
///
/// Follows the same cached adjacency as the A* engine and touches no cell
/// state, so it serves as an independent check of path lengths.
pub fn bfs_distance(grid: &Grid, from: Pos, to: Pos) -> Option<u32> {
    let src = grid.index(from)?;
    let dst = grid.index(to)?;
    if src == dst {
        return Some(0);
    }

    let mut dist: Vec<Option<u32>> = vec![None; grid.len()];
    dist[src] = Some(0);
    let mut queue = VecDeque::from([from]);

    while let Some(p) = queue.pop_front() {
        let Some(pi) = grid.index(p) else { continue };
        let d = dist[pi].unwrap_or(0);
        let Ok(cell) = grid.cell_at(p) else { continue };
        for &q in cell.neighbors() {
            let Some(qi) = grid.index(q) else { continue };
            if dist[qi].is_some() {
                continue;
            }
            if qi == dst {
                return Some(d + 1);
            }
            dist[qi] = Some(d + 1);
            queue.push_back(q);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::CellState;

    #[test]
    fn open_grid_is_manhattan() {
        let mut g = Grid::new(4);
        g.refresh_all_adjacency();
        assert_eq!(bfs_distance(&g, Pos::new(0, 0), Pos::new(3, 3)), Some(6));
        assert_eq!(bfs_distance(&g, Pos::new(2, 1), Pos::new(2, 1)), Some(0));
    }

    #[test]
    fn detours_and_dead_ends() {
        let mut g = Grid::new(3);
        g.set_state(Pos::new(0, 1), CellState::Barrier).unwrap();
        g.set_state(Pos::new(1, 1), CellState::Barrier).unwrap();
        g.refresh_all_adjacency();
        assert_eq!(bfs_distance(&g, Pos::new(0, 0), Pos::new(0, 2)), Some(6));

        g.set_state(Pos::new(2, 1), CellState::Barrier).unwrap();
        g.refresh_all_adjacency();
        assert_eq!(bfs_distance(&g, Pos::new(0, 0), Pos::new(0, 2)), None);
    }

    #[test]
    fn out_of_bounds_is_unreachable() {
        let mut g = Grid::new(2);
        g.refresh_all_adjacency();
        assert_eq!(bfs_distance(&g, Pos::new(0, 0), Pos::new(2, 0)), None);
    }
}
