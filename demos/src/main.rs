//! Render a terrain map and the path every strategy finds across it.
//!
//! Run with: `cargo run --bin wayfind -- --random 10x24 --seed 7 --explored`
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the searches.

mod cli;
mod render;

use std::error::Error;
use std::fs;
use std::io;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayfind_core::{CostTable, Grid, Pos, TerrainGen};
use wayfind_paths::Strategy;

use cli::{Args, DEFAULT_MAP};
use render::{Options, View};

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("wayfind: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let costs = args.cost_table()?;
    let grid = load_grid(args, &costs)?;
    let kinds = args.strategies()?;

    let start = args.start.unwrap_or(Pos::ORIGIN);
    let goal = args
        .goal
        .unwrap_or(Pos::new(grid.rows() - 1, grid.cols() - 1));
    log::info!(
        "{}x{} map, {start} -> {goal}",
        grid.rows(),
        grid.cols()
    );

    let view = View {
        grid: &grid,
        start,
        goal,
        options: Options {
            color: !args.plain,
            explored: args.explored,
        },
    };
    let mut out = io::stdout().lock();
    for kind in kinds {
        let search = kind.search(&grid, start, goal)?;
        view.draw(&mut out, kind, &search)?;
    }
    Ok(())
}

fn load_grid(args: &Args, costs: &CostTable) -> Result<Grid, Box<dyn Error>> {
    if let Some((rows, cols)) = args.random {
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("random map seed {seed}");
        let mut tg = TerrainGen::new(StdRng::seed_from_u64(seed));
        return Ok(tg.grid(rows, cols, costs));
    }
    let text = match &args.map {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => DEFAULT_MAP.to_string(),
    };
    Ok(Grid::parse(&text, costs)?)
}
