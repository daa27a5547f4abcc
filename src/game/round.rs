//! One round of the letters game
//!
//! Draw the pool, start the clock, collect the answer, solve the pool and
//! score the attempt. Nothing survives from one round to the next.

use super::clock::{AnswerInput, collect_answer};
use super::generator::draw_pool;
use crate::GameError;
use crate::config::GameConfig;
use crate::core::LetterPool;
use crate::output::formatters::spaced_letters;
use crate::solver::{Solution, Solver};
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Instant;

/// Prompt shown while the clock runs
pub const ANSWER_PROMPT: &str = "Enter your attempt: ";

/// How a round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The attempt is a dictionary word spelled from the pool
    Correct { word: String, points: usize },
    /// An attempt was submitted but is not in the answer set
    Incorrect { attempt: String },
    /// The clock ran out before anything was submitted
    TimedOut,
    /// No dictionary word can be formed from the pool
    NoWords,
}

impl RoundOutcome {
    /// Score an attempt against the pool's answer set
    ///
    /// The attempt is trimmed and lowercased, then must equal one of the
    /// answer words exactly. Being spelled from the pool is not enough.
    #[must_use]
    pub fn score(attempt: Option<&str>, solution: &Solution) -> Self {
        if solution.is_empty() {
            return Self::NoWords;
        }
        let Some(attempt) = attempt else {
            return Self::TimedOut;
        };

        let normalized = attempt.trim().to_ascii_lowercase();
        if solution.contains(&normalized) {
            Self::Correct {
                points: normalized.len(),
                word: normalized,
            }
        } else {
            Self::Incorrect {
                attempt: attempt.trim().to_string(),
            }
        }
    }

    /// Points earned, zero unless correct
    #[must_use]
    pub const fn points(&self) -> usize {
        match self {
            Self::Correct { points, .. } => *points,
            _ => 0,
        }
    }
}

/// Everything a finished round produced
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub pool: LetterPool,
    pub attempt: Option<String>,
    pub solution: Solution,
    pub outcome: RoundOutcome,
}

impl RoundResult {
    /// Solve the pool and score the attempt
    #[must_use]
    pub fn resolve(solver: &Solver<'_>, pool: LetterPool, attempt: Option<String>) -> Self {
        let started = Instant::now();
        let solution = solver.solve_pool(&pool);
        tracing::debug!(
            pool = %pool,
            answers = solution.len(),
            elapsed_us = started.elapsed().as_micros(),
            "pool solved"
        );

        let outcome = RoundOutcome::score(attempt.as_deref(), &solution);
        Self {
            pool,
            attempt,
            solution,
            outcome,
        }
    }
}

/// Runs rounds against one dictionary
pub struct RoundController<'a> {
    solver: Solver<'a>,
    config: &'a GameConfig,
}

impl<'a> RoundController<'a> {
    #[must_use]
    pub const fn new(solver: Solver<'a>, config: &'a GameConfig) -> Self {
        Self { solver, config }
    }

    /// Play one round
    ///
    /// Letter choices are read line by line from `choices`; the answer comes
    /// from `answers` within the configured deadline.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the player closes input, presses Ctrl-C
    /// during the answer window, or the terminal fails.
    pub fn play_round<C, O, A, R>(
        &self,
        choices: &mut C,
        output: &mut O,
        answers: &mut A,
        rng: &mut R,
    ) -> Result<RoundResult, GameError>
    where
        C: BufRead + ?Sized,
        O: Write + ?Sized,
        A: AnswerInput + ?Sized,
        R: Rng,
    {
        let pool = draw_pool(choices, output, rng)?;

        writeln!(output, "\nThe letters are: {}", spaced_letters(pool.letters()))?;
        writeln!(
            output,
            "Time starts now! You have {} seconds.",
            self.config.deadline.as_secs()
        )?;
        output.flush()?;

        let attempt = collect_answer(answers, self.config.deadline)?;
        if attempt.is_none() {
            writeln!(output, "You're too slow!")?;
        }

        let result = RoundResult::resolve(&self.solver, pool, attempt);
        tracing::info!(outcome = ?result.outcome, "round finished");
        Ok(result)
    }
}
