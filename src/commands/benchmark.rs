//! Benchmark command
//!
//! Solves many random pools to measure speed and how often pools are barren.

use crate::core::{LetterPool, PoolError};
use crate::game::random_pool;
use crate::solver::{Solution, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pools: usize,
    pub empty_pools: usize,
    pub total_answers: usize,
    pub average_answers: f64,
    pub average_best_len: f64,
    pub best_len_distribution: BTreeMap<usize, usize>,
    pub candidates_checked: usize,
    pub duration: Duration,
    pub pools_per_second: f64,
}

/// Draw `count` random pools
///
/// # Errors
///
/// Returns `PoolError` if a drawn pool breaks the quotas.
pub fn draw_pools<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<LetterPool>, PoolError> {
    (0..count).map(|_| random_pool(rng)).collect()
}

/// Solve every pool in parallel and summarize
///
/// The index is shared read-only across worker threads.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark(
    solver: &Solver<'_>,
    pools: &[LetterPool],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(pools.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}",
                )
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let solutions: Vec<Solution> = pools
        .par_iter()
        .map(|pool| {
            let solution = solver.solve_pool(pool);
            pb.inc(1);
            solution
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    summarize(&solutions, duration)
}

fn summarize(solutions: &[Solution], duration: Duration) -> BenchmarkResult {
    let total_pools = solutions.len();
    let mut empty_pools = 0;
    let mut total_answers = 0;
    let mut candidates_checked = 0;
    let mut best_len_total = 0;
    let mut best_len_distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for solution in solutions {
        total_answers += solution.len();
        candidates_checked += solution.candidates_checked();
        match solution.max_len() {
            Some(len) => {
                best_len_total += len;
                *best_len_distribution.entry(len).or_insert(0) += 1;
            }
            None => empty_pools += 1,
        }
    }

    let solved = total_pools - empty_pools;
    BenchmarkResult {
        total_pools,
        empty_pools,
        total_answers,
        average_answers: if total_pools == 0 {
            0.0
        } else {
            total_answers as f64 / total_pools as f64
        },
        average_best_len: if solved == 0 {
            0.0
        } else {
            best_len_total as f64 / solved as f64
        },
        best_len_distribution,
        candidates_checked,
        duration,
        pools_per_second: total_pools as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
