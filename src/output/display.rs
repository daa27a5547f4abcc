//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_letters, word_list};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::game::{RoundOutcome, RoundResult};
use crate::solver::Solution;
use colored::Colorize;

/// Print the outcome of a round and the longest possible words
pub fn print_round_result(result: &RoundResult) {
    println!();
    match &result.outcome {
        RoundOutcome::Correct { word, points } => {
            println!(
                "{}",
                format!("✅ {} scores {points} points!", word.to_uppercase())
                    .green()
                    .bold()
            );
        }
        RoundOutcome::Incorrect { attempt } => {
            let shown = if attempt.is_empty() {
                "(nothing)".to_string()
            } else {
                attempt.to_uppercase()
            };
            println!("{}", format!("❌ {shown} is not a valid word. No score!").red().bold());
        }
        RoundOutcome::TimedOut => {
            println!("{}", "⏰ Time's up. No score!".yellow().bold());
        }
        RoundOutcome::NoWords => {
            println!(
                "{}",
                "🤷 No words can be made from these letters.".bright_black()
            );
        }
    }

    if let Some(max_len) = result.solution.max_len() {
        println!(
            "The longest answers ({max_len} letters): {}",
            word_list(result.solution.best_answers()).bright_white().bold()
        );
    }
    println!();
}

/// Print every word found for a set of letters
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}",
        spaced_letters(result.letters.as_bytes())
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_solution(&result.solution);
}

fn print_solution(solution: &Solution) {
    if solution.is_empty() {
        println!("\n{}", "No words found.".red().bold());
        return;
    }

    for (len, words) in solution.by_length().iter().rev() {
        println!(
            "\n{} {}",
            format!("{len:>2}:").bright_cyan().bold(),
            word_list(words.iter().copied())
        );
    }

    println!(
        "\n{} {}",
        "Best:".green().bold(),
        word_list(solution.best_answers()).bright_white().bold()
    );
    println!(
        "{}",
        format!(
            "{} words from {} candidate signatures",
            solution.len(),
            solution.candidates_checked()
        )
        .bright_black()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pools solved:     {}", result.total_pools);
    println!(
        "   Pools with none:  {}",
        format!("{}", result.empty_pools).yellow()
    );
    println!(
        "   Average answers:  {}",
        format!("{:.1}", result.average_answers)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average best:     {}",
        format!("{:.2} letters", result.average_best_len).green()
    );
    println!("   Lookups:          {}", result.candidates_checked);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pools/second:     {:.1}", result.pools_per_second);

    if result.best_len_distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Best word length:".bright_cyan().bold());
    let solved = (result.total_pools - result.empty_pools) as f64;
    for (len, &count) in &result.best_len_distribution {
        let pct = (count as f64 / solved) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
