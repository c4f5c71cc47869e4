use wayfind_core::{Grid, Pos};

use crate::error::PathError;
use crate::path::Path;
use crate::search::{Expansion, Search};
use crate::traits::Strategy;

/// Walks straight to the goal: first closes the row gap one step at a time,
/// then the column gap. Terrain cost is ignored entirely, so the path always
/// has `|Δrow| + |Δcol|` steps and is rarely the cheapest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direct;

impl Strategy for Direct {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn search(&self, grid: &Grid, start: Pos, goal: Pos) -> Result<Search, PathError> {
        grid.check(start)?;
        if !grid.contains(goal) {
            log::debug!("direct: {goal} is outside the grid");
            return Ok(Search {
                path: None,
                expansions: Vec::new(),
            });
        }

        let mut cells = vec![start];
        let mut cur = start;
        loop {
            if cur.row != goal.row {
                cur.row += (goal.row - cur.row).signum();
            } else if cur.col != goal.col {
                cur.col += (goal.col - cur.col).signum();
            } else {
                break;
            }
            cells.push(cur);
        }

        let mut expansions = Vec::with_capacity(cells.len());
        let mut g = 0;
        for (depth, &pos) in cells.iter().enumerate() {
            let parent = depth.checked_sub(1).map(|d| cells[d]);
            if let Some(p) = parent {
                g += i64::from(grid[p].cost());
            }
            expansions.push(Expansion {
                pos,
                parent,
                g,
                key: 0.0,
                depth: depth as u32,
            });
        }

        log::debug!("direct: {} steps from {start} to {goal}", cells.len() - 1);
        Ok(Search {
            path: Some(Path::from_vec(cells)),
            expansions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::manhattan;
    use wayfind_core::{CostTable, Terrain};

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn rows_first_then_columns() {
        let g = Grid::filled(3, 3, Terrain::Road, &CostTable::default());
        let path = Direct.find_path(&g, p(0, 0), p(2, 2)).unwrap().unwrap();
        assert_eq!(
            path.cells(),
            &[p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]
        );
    }

    #[test]
    fn walks_up_and_left() {
        let g = Grid::filled(4, 4, Terrain::Grass, &CostTable::default());
        let path = Direct.find_path(&g, p(3, 3), p(1, 2)).unwrap().unwrap();
        assert_eq!(path.cells(), &[p(3, 3), p(2, 3), p(1, 3), p(1, 2)]);
    }

    #[test]
    fn ignores_terrain() {
        let g = Grid::parse("rrr\nsss\nrrr", &CostTable::default()).unwrap();
        let path = Direct.find_path(&g, p(0, 0), p(2, 0)).unwrap().unwrap();
        assert_eq!(path.cells(), &[p(0, 0), p(1, 0), p(2, 0)]);
        assert_eq!(path.cost(&g), Ok(1002));
    }

    #[test]
    fn step_count_is_manhattan() {
        let g = Grid::filled(6, 9, Terrain::Mud, &CostTable::default());
        for &(a, b) in &[(p(0, 0), p(5, 8)), (p(5, 0), p(0, 8)), (p(2, 2), p(2, 2))] {
            let path = Direct.find_path(&g, a, b).unwrap().unwrap();
            assert_eq!(path.steps() as i32, manhattan(a, b));
            assert_eq!(path.start(), a);
            assert_eq!(path.goal(), b);
        }
    }

    #[test]
    fn goal_outside_grid_is_unreachable() {
        let g = Grid::filled(1, 1, Terrain::Road, &CostTable::default());
        assert_eq!(Direct.find_path(&g, p(0, 0), p(0, 1)), Ok(None));
    }

    #[test]
    fn start_outside_grid_is_rejected() {
        let g = Grid::filled(2, 2, Terrain::Road, &CostTable::default());
        assert!(matches!(
            Direct.find_path(&g, p(-1, 0), p(1, 1)),
            Err(PathError::OutOfBounds(_))
        ));
    }

    #[test]
    fn trace_accumulates_cost() {
        let g = Grid::parse("rm\ngr", &CostTable::default()).unwrap();
        let s = Direct.search(&g, p(0, 0), p(1, 1)).unwrap();
        let gs: Vec<i64> = s.expansions.iter().map(|e| e.g).collect();
        // road, then grass left behind.
        assert_eq!(gs, vec![0, 2, 5]);
    }
}
