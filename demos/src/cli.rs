//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use wayfind_core::{CostTable, MapError, Pos, Terrain};
use wayfind_paths::{StrategyKind, UnknownStrategy};

/// Map used when neither `--map` nor `--random` is given.
pub const DEFAULT_MAP: &str = "\
# s stone, w water, r road, g grass, m mud, d dune
rrgggmmdddrr
rsswwwgmddrr
rrrrrwggmsrr
ggmrrwwgmsgg
gmmdrrrrrrgg
ddmddsswwrrm
rrrrrsswwrmm
";

/// Largest map `--random` will generate.
pub const MAX_CELLS: u64 = 1 << 24;

#[derive(Parser, Debug)]
#[command(name = "wayfind", version, about = "Find paths across weighted terrain")]
pub struct Args {
    /// ASCII map file, one terrain symbol per cell (s w r g m d).
    #[arg(short, long, conflicts_with = "random")]
    pub map: Option<PathBuf>,

    /// Generate a random ROWSxCOLS map instead of reading one.
    #[arg(short, long, value_name = "ROWSxCOLS", value_parser = parse_dims)]
    pub random: Option<(i32, i32)>,

    /// Seed for `--random`; a fresh one is drawn and logged if omitted.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Start cell as ROW,COL [default: top-left corner].
    #[arg(short, long, value_name = "ROW,COL", value_parser = parse_pos)]
    pub start: Option<Pos>,

    /// Goal cell as ROW,COL [default: bottom-right corner].
    #[arg(short, long, value_name = "ROW,COL", value_parser = parse_pos)]
    pub goal: Option<Pos>,

    /// Strategies to run, comma separated, or "all".
    #[arg(short = 'S', long, default_value = "all")]
    pub strategy: String,

    /// Override a terrain cost, e.g. `--cost road=1`. Repeatable.
    #[arg(long = "cost", value_name = "KIND=COST", value_parser = parse_cost)]
    pub costs: Vec<(Terrain, i32)>,

    /// Shade cells the search finalized but did not walk through.
    #[arg(short, long)]
    pub explored: bool,

    /// Print without colors.
    #[arg(long)]
    pub plain: bool,
}

impl Args {
    /// Default costs with every `--cost` override applied in order.
    pub fn cost_table(&self) -> Result<CostTable, MapError> {
        self.costs
            .iter()
            .try_fold(CostTable::default(), |table, &(kind, cost)| {
                table.with(kind, cost)
            })
    }

    pub fn strategies(&self) -> Result<Vec<StrategyKind>, UnknownStrategy> {
        if self.strategy.trim().eq_ignore_ascii_case("all") {
            return Ok(StrategyKind::ALL.to_vec());
        }
        self.strategy.split(',').map(str::parse).collect()
    }
}

/// Parse `ROWSxCOLS`, both at least 1.
pub fn parse_dims(s: &str) -> Result<(i32, i32), String> {
    let (rows, cols) = s
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let rows: i32 = rows.trim().parse().map_err(|e| format!("rows: {e}"))?;
    let cols: i32 = cols.trim().parse().map_err(|e| format!("cols: {e}"))?;
    if rows < 1 || cols < 1 {
        return Err(format!("map must be at least 1x1, got {rows}x{cols}"));
    }
    if rows as u64 * cols as u64 > MAX_CELLS {
        return Err(format!(
            "{rows}x{cols} map exceeds the limit of {MAX_CELLS} cells"
        ));
    }
    Ok((rows, cols))
}

/// Parse `ROW,COL`.
pub fn parse_pos(s: &str) -> Result<Pos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("col: {e}"))?;
    Ok(Pos::new(row, col))
}

/// Parse `KIND=COST`, where KIND is a terrain name or symbol.
pub fn parse_cost(s: &str) -> Result<(Terrain, i32), String> {
    let (kind, cost) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=COST, got {s:?}"))?;
    let kind: Terrain = kind.parse().map_err(|e: MapError| e.to_string())?;
    let cost = cost.trim().parse().map_err(|e| format!("cost: {e}"))?;
    Ok((kind, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn dims() {
        assert_eq!(parse_dims("12x20"), Ok((12, 20)));
        assert_eq!(parse_dims("3X4"), Ok((3, 4)));
        assert!(parse_dims("0x4").is_err());
        assert!(parse_dims("12").is_err());
        assert!(parse_dims("ax4").is_err());
        assert_eq!(parse_dims("4096x4096"), Ok((4096, 4096)));
        assert!(parse_dims("4096x4097").is_err());
        assert!(parse_dims("50000x50000").is_err());
    }

    #[test]
    fn positions() {
        assert_eq!(parse_pos("2,3"), Ok(Pos::new(2, 3)));
        assert_eq!(parse_pos(" 0 , 7 "), Ok(Pos::new(0, 7)));
        assert_eq!(parse_pos("-1,0"), Ok(Pos::new(-1, 0)));
        assert!(parse_pos("2;3").is_err());
    }

    #[test]
    fn costs() {
        assert_eq!(parse_cost("road=1"), Ok((Terrain::Road, 1)));
        assert_eq!(parse_cost("w=40"), Ok((Terrain::Water, 40)));
        assert!(parse_cost("lava=3").is_err());
        assert!(parse_cost("road").is_err());
    }

    #[test]
    fn overrides_are_applied_and_validated() {
        let args = Args::parse_from(["wayfind", "--cost", "road=1", "--cost", "mud=9"]);
        let table = args.cost_table().unwrap();
        assert_eq!(table.cost(Terrain::Road), 1);
        assert_eq!(table.cost(Terrain::Mud), 9);
        assert_eq!(table.cost(Terrain::Stone), 1000);

        let args = Args::parse_from(["wayfind", "--cost", "stone=2000000000"]);
        assert_eq!(args.cost_table().unwrap().cost(Terrain::Stone), 2_000_000_000);

        let args = Args::parse_from(["wayfind", "--cost", "grass=0"]);
        assert!(matches!(
            args.cost_table(),
            Err(MapError::NonPositiveCost { .. })
        ));
    }

    #[test]
    fn strategy_selection() {
        let args = Args::parse_from(["wayfind"]);
        assert_eq!(args.strategies().unwrap(), StrategyKind::ALL.to_vec());

        let args = Args::parse_from(["wayfind", "-S", "draza,aki"]);
        assert_eq!(
            args.strategies().unwrap(),
            vec![StrategyKind::Draza, StrategyKind::Aki]
        );

        let args = Args::parse_from(["wayfind", "-S", "dijkstra"]);
        assert!(args.strategies().is_err());
    }

    #[test]
    fn map_and_random_conflict() {
        let res = Args::try_parse_from(["wayfind", "--map", "a.txt", "--random", "3x3"]);
        assert!(res.is_err());
    }

    #[test]
    fn default_map_parses() {
        let g = wayfind_core::Grid::parse(DEFAULT_MAP, &CostTable::default()).unwrap();
        assert_eq!((g.rows(), g.cols()), (7, 12));
    }
}
