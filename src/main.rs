use std::io;
use std::path::PathBuf;

use clap::Parser;

use fifteen_puzzle_rs::config::SolverConfig;
use fifteen_puzzle_rs::io::parse_file_to_boards;
use fifteen_puzzle_rs::render::render_report;
use fifteen_puzzle_rs::search::Solver;

#[derive(Parser, Debug)]
#[command(
    name = "fifteen_puzzle_rs",
    about = "Parallel IDA* solver for the 15-puzzle"
)]
struct Cfg {
    /// Input file with one or more boards (16 integers each, 0 = blank)
    #[arg(value_name = "INPUT", default_value = "input.in")]
    input: PathBuf,

    /// Number of worker threads (default: $IDA_WORKERS or 4)
    #[arg(short = 'j', long, value_name = "N")]
    jobs: Option<usize>,

    /// Stop deepening once the bound exceeds this value (default: $IDA_BOUND_CAP or 80)
    #[arg(long = "bound-cap", value_name = "N")]
    bound_cap: Option<u32>,

    /// Print per-iteration progress (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cfg: Cfg) -> io::Result<()> {
    let boards = parse_file_to_boards(&cfg.input)?;
    println!(
        "info: read {} board(s) from '{}'.",
        boards.len(),
        cfg.input.display()
    );

    let mut config = SolverConfig::from_env().with_verbose(cfg.verbose);
    if let Some(jobs) = cfg.jobs {
        config = config.with_workers(jobs);
    }
    if let Some(cap) = cfg.bound_cap {
        config = config.with_bound_cap(cap);
    }
    println!(
        "info: workers = {}, bound cap = {}",
        config.workers, config.bound_cap
    );

    let solver = Solver::new(config).map_err(io::Error::other)?;
    for (i, board) in boards.into_iter().enumerate() {
        println!("info: board #{}", i);
        print!("{}", board);
        println!(
            "info: initial manhattan distance: {}",
            (solver.config().heuristic)(&board)
        );

        let report = solver.solve(board);
        print!("{}", render_report(&report));
        println!("info: solved in {:?}", report.elapsed);
        println!(
            "info: bounds = {:?}, visited = {}, pruned = {}, forks = {}",
            report.bounds, report.stats.visited, report.stats.pruned, report.stats.forks
        );
    }
    Ok(())
}

fn main() {
    let cfg = Cfg::parse();
    if let Err(e) = run(cfg) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
