use std::io::{self, BufWriter, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fifteen_puzzle_rs::io::board_to_line;
use fifteen_puzzle_rs::scramble::random_walk;

#[derive(Parser, Debug)]
#[command(
    name = "gen_rand_boards",
    about = "Generate random solvable 15-puzzle boards"
)]
struct Cfg {
    /// Number of boards
    #[arg(long, default_value_t = 50)]
    n: usize,

    /// Length of the random walk from the goal
    #[arg(long, default_value_t = 30)]
    walk: usize,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn run(cfg: Cfg) -> io::Result<()> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..cfg.n {
        let board = random_walk(&mut rng, cfg.walk);
        writeln!(out, "{}", board_to_line(&board))?;
    }
    out.flush()
}

fn main() {
    let cfg = Cfg::parse();
    if let Err(e) = run(cfg) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
