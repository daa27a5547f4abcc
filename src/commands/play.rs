//! Play command
//!
//! Runs rounds back to back until the player quits.

use crate::GameError;
use crate::config::GameConfig;
use crate::game::round::ANSWER_PROMPT;
use crate::game::{RoundController, TerminalInput};
use crate::output::print_round_result;
use crate::solver::Solver;
use colored::Colorize;
use std::io;

/// Run the game loop
///
/// Rounds repeat with no limit; closing input while choosing letters or
/// pressing Ctrl-C during the answer window ends the game cleanly.
///
/// # Errors
///
/// Returns an error if the terminal fails for any other reason.
pub fn run_play(solver: Solver<'_>, config: &GameConfig) -> Result<(), GameError> {
    print_banner();

    let controller = RoundController::new(solver, config);
    let stdin = io::stdin();
    let mut choices = stdin.lock();
    let mut stdout = io::stdout();
    let mut rng = rand::rng();
    let mut round = 1;

    loop {
        println!("{}", format!("── Round {round} ──").bright_cyan().bold());

        let mut answers = TerminalInput::new(ANSWER_PROMPT);
        match controller.play_round(&mut choices, &mut stdout, &mut answers, &mut rng) {
            Ok(result) => print_round_result(&result),
            Err(e) if e.is_player_exit() => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        round += 1;
    }
}

fn print_banner() {
    println!("\n{}", "+".repeat(13).bright_yellow());
    println!("{} {} {}", "+".bright_yellow(), "COUNTDOWN".bold(), "+".bright_yellow());
    println!("{}\n", "+".repeat(13).bright_yellow());
}
