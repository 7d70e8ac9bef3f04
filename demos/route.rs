//! Find a path on an ASCII map and print it.
//!
//! Run: cargo run --bin route -- [MAP_FILE] [--movement cardinal] [--heuristic zero]
//!
//! Set `RUST_LOG=debug` (or `trace`) to watch the search.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gridpath_core::Grid;
use gridpath_demos::{DEFAULT_MAP, HeuristicArg, MovementArg, render};
use gridpath_search::{PathSearchEngine, SearchConfig};

#[derive(Parser, Debug)]
#[command(name = "route", about = "Shortest path on an ASCII grid map")]
struct Args {
    /// Map file: `.` floor, `#` wall, `S` start, `G` goal. Uses a built-in
    /// map when omitted.
    map: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = MovementArg::Octile)]
    movement: MovementArg,

    #[arg(long, value_enum, default_value_t = HeuristicArg::Euclidean)]
    heuristic: HeuristicArg,

    /// Allow diagonal steps past blocked corners.
    #[arg(long)]
    corner_cutting: bool,

    /// Give up after expanding this many cells.
    #[arg(long)]
    max_expansions: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let text = match &args.map {
        Some(path) => {
            log::info!("Loading map from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => DEFAULT_MAP.to_string(),
    };
    let mut grid = Grid::from_ascii(&text)?;
    let start = grid.start().ok_or("map has no start cell (S)")?;
    let goal = grid.objectives().next().ok_or("map has no goal cell (G)")?;

    let config = SearchConfig::new(args.movement.into())
        .with_corner_cutting(args.corner_cutting)
        .with_max_expansions(args.max_expansions);
    let heuristic = args.heuristic.heuristic();
    if !heuristic.is_admissible_for(config.movement) {
        log::warn!(
            "{:?} heuristic overestimates under {:?} movement; path may not be shortest",
            args.heuristic,
            args.movement
        );
    }

    let mut engine = PathSearchEngine::new(config);
    match engine.find_path(&mut grid, start, goal, &*heuristic) {
        Ok(view) => {
            println!("{}", render(view.grid(), Some(&view)));
            log::info!(
                "{} cells, cost {:.3}, {} expanded",
                view.len(),
                view.cost(),
                engine.stats().expanded
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_no_path() => {
            println!("{}", render(&grid, None));
            log::warn!("{e}");
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}
