//! Countdown Letters - CLI
//!
//! Play the letters round against the clock, solve a set of letters, or
//! benchmark the solver on random pools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countdown_letters::{
    commands::{draw_pools, run_benchmark, run_play, solve_letters},
    config::{DEFAULT_DEADLINE_SECS, DEFAULT_DICTIONARY, GameConfig, MAX_DEADLINE_SECS},
    dictionary::{AnagramIndex, load_index},
    output::{print_benchmark_result, print_solve_result},
    solver::Solver,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "countdown_letters",
    about = "The Countdown letters game: nine letters, thirty seconds, every word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "COUNTDOWN_DICTIONARY",
        default_value = DEFAULT_DICTIONARY
    )]
    dictionary: PathBuf,

    /// Seconds allowed to answer
    #[arg(
        short = 't',
        long,
        global = true,
        env = "COUNTDOWN_DEADLINE",
        default_value_t = DEFAULT_DEADLINE_SECS,
        value_parser = clap::value_parser!(u64).range(1..=MAX_DEADLINE_SECS)
    )]
    deadline: u64,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds against the clock (default)
    Play,

    /// List every word formable from the given letters
    Solve {
        /// Letters to solve, e.g. "streaming" or "s t r e a m"
        letters: String,
    },

    /// Solve random pools and report statistics
    Benchmark {
        /// Number of random pools to solve
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible pools
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig::new(cli.dictionary, cli.deadline);
    let index = load_dictionary(&config)?;
    let solver = Solver::new(&index);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(solver, &config).context("game aborted"),
        Commands::Solve { letters } => {
            let result = solve_letters(&letters, &solver)?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            println!("Solving {count} random pools...");
            let pools = draw_pools(count, &mut rng)?;
            let result = run_benchmark(&solver, &pools, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "countdown_letters=debug"
    } else {
        "countdown_letters=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load and index the configured word list
fn load_dictionary(config: &GameConfig) -> Result<AnagramIndex> {
    let index = load_index(&config.dictionary).with_context(|| {
        format!(
            "cannot start a round without a dictionary; check {} or pass --dictionary",
            config.dictionary.display()
        )
    })?;

    tracing::info!(
        words = index.len(),
        signatures = index.bucket_count(),
        "dictionary ready"
    );
    if index.is_empty() {
        tracing::warn!(path = %config.dictionary.display(), "dictionary has no usable words");
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_must_fit_the_answer_window() {
        let parse = |secs: &str| Cli::try_parse_from(["countdown_letters", "--deadline", secs]);

        assert_eq!(parse("1").unwrap().deadline, 1);
        assert_eq!(parse("3600").unwrap().deadline, MAX_DEADLINE_SECS);
        assert!(parse("0").is_err());
        assert!(parse("3601").is_err());
        assert!(parse("18446744073709551615").is_err());
    }
}
