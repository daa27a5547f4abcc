//! Solve command
//!
//! Lists every word formable from a given set of letters.

use crate::core::MAX_WORD_LEN;
use crate::solver::{Solution, Solver};
use thiserror::Error;

/// Most letters accepted by the solve command
pub const MAX_SOLVE_LETTERS: usize = MAX_WORD_LEN + 2;

/// Letters the solve command cannot use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no letters given")]
    Empty,
    #[error("at most {MAX_SOLVE_LETTERS} letters can be solved, got {0}")]
    TooMany(usize),
    #[error("'{0}' is not an ASCII letter")]
    NotALetter(char),
}

/// Result of solving a set of letters
pub struct SolveResult {
    pub letters: String,
    pub solution: Solution,
}

/// Solve arbitrary letters, ignoring the pool quotas
///
/// Spaces and commas between letters are ignored.
///
/// # Errors
///
/// Returns `SolveError` if no letters remain, there are too many, or any
/// character is not an ASCII letter.
pub fn solve_letters(input: &str, solver: &Solver<'_>) -> Result<SolveResult, SolveError> {
    let letters: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if let Some(bad) = letters.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(SolveError::NotALetter(bad));
    }
    if letters.is_empty() {
        return Err(SolveError::Empty);
    }
    if letters.len() > MAX_SOLVE_LETTERS {
        return Err(SolveError::TooMany(letters.len()));
    }

    let letters = letters.to_ascii_lowercase();
    let solution = solver.solve(letters.as_bytes());

    Ok(SolveResult { letters, solution })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::AnagramIndex;
    use crate::dictionary::loader::words_from_lines;

    fn index() -> AnagramIndex {
        let (words, _) = words_from_lines(["cat", "act", "tac", "cats", "at", "a"]);
        AnagramIndex::build(words)
    }

    #[test]
    fn solve_letters_finds_all_lengths() {
        let index = index();
        let result = solve_letters("T A C S", &Solver::new(&index)).unwrap();

        assert_eq!(result.letters, "tacs");
        let texts: Vec<&str> = result.solution.answers().iter().map(Word::text).collect();
        assert_eq!(texts, ["cats", "cat", "act", "tac", "at", "a"]);
    }

    #[test]
    fn solve_letters_accepts_comma_separated() {
        let index = index();
        let result = solve_letters("c,a,t", &Solver::new(&index)).unwrap();
        assert_eq!(result.solution.max_len(), Some(3));
    }

    #[test]
    fn solve_letters_rejects_bad_input() {
        let index = index();
        let solver = Solver::new(&index);

        assert!(matches!(solve_letters("  ", &solver), Err(SolveError::Empty)));
        assert!(matches!(
            solve_letters("ca7", &solver),
            Err(SolveError::NotALetter('7'))
        ));
        assert!(matches!(
            solve_letters("abcdefghijklm", &solver),
            Err(SolveError::TooMany(13))
        ));
    }

    #[test]
    fn solve_letters_with_nothing_formable() {
        let index = index();
        let result = solve_letters("xyz", &Solver::new(&index)).unwrap();
        assert!(result.solution.is_empty());
    }
}
