//! Example computing a knight's tour from the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_tour
//! ```
//!
//! Pick a start square (0-63, row-major) and a strategy:
//!
//! ```sh
//! cargo run --example solve_tour -- --start 12 --strategy warnsdorff
//! ```
//!
//! Shorten the search budget:
//!
//! ```sh
//! cargo run --example solve_tour -- --timeout-secs 5
//! ```
//!
//! Print the move table diagnostic instead of solving:
//!
//! ```sh
//! cargo run --example solve_tour -- --dump-moves
//! ```

use std::{process, time::Duration};

use cavalcade_core::{MoveTable, Square};
use cavalcade_solver::{SearchBudget, Strategy, TourSolver};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Backtracking,
    Warnsdorff,
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Backtracking => Strategy::Backtracking,
            StrategyKind::Warnsdorff => Strategy::Warnsdorff,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Start square, 0-63 in row-major order.
    #[arg(long, value_name = "SQUARE", value_parser = clap::value_parser!(u8).range(..64), default_value_t = 0)]
    start: u8,

    /// Search strategy.
    #[arg(long, value_name = "STRATEGY", default_value = "backtracking")]
    strategy: StrategyKind,

    /// Wall-clock budget in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    timeout_secs: u64,

    /// Print the per-square move table and coordinate grid, then exit.
    #[arg(long)]
    dump_moves: bool,
}

fn main() {
    let args = Args::parse();

    if args.dump_moves {
        print!("{}", MoveTable::shared());
        return;
    }

    let start = Square::from_index(args.start);
    let budget = SearchBudget::new(Duration::from_secs(args.timeout_secs));
    let solver = TourSolver::with_budget(budget);

    match solver.solve(start, args.strategy.into()) {
        Ok(tour) => {
            println!("Tour from square {start} ({:?}):", Strategy::from(args.strategy));
            println!();
            print!("{tour}");
            println!();
            println!("Visitation order:");
            let order = tour
                .iter()
                .map(|square| square.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("  {order}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
