//! ASCII map format.
//!
//! One line per row, one [`Terrain::symbol`] per cell:
//!
//! ```text
//! rrgm
//! rswm
//! dddr
//! ```
//!
//! Leading/trailing whitespace on each line is ignored, as are blank lines
//! and lines starting with `#`.

use crate::error::MapError;
use crate::geom::Pos;
use crate::grid::Grid;
use crate::terrain::{CostTable, Terrain};

impl Grid {
    /// Parse an ASCII map, pricing cells with `costs`.
    pub fn parse(text: &str, costs: &CostTable) -> Result<Grid, MapError> {
        let rows = parse_rows(text)?;
        Grid::from_rows(&rows, costs)
    }
}

/// Parse an ASCII map into rows of terrain without building a grid.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<Terrain>>, MapError> {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));

    let mut rows = Vec::new();
    for (row, line) in lines.enumerate() {
        let cells = line
            .chars()
            .enumerate()
            .map(|(col, ch)| {
                Terrain::from_symbol(ch).ok_or(MapError::UnknownTerrain {
                    ch,
                    pos: Pos::new(row as i32, col as i32),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(cells);
    }
    Ok(rows)
}
