//! Countdown Letters
//!
//! The letters round of Countdown: draw nine letters, race a 30-second clock,
//! then see every dictionary word the letters could have made.
//!
//! # Quick Start
//!
//! ```rust
//! use countdown_letters::core::{LetterPool, Word};
//! use countdown_letters::dictionary::AnagramIndex;
//! use countdown_letters::solver::Solver;
//!
//! let words = ["stream", "master", "tamers", "mate"].map(|w| Word::new(w).unwrap());
//! let index = AnagramIndex::build(words);
//!
//! let pool = LetterPool::new(b"streamxon").unwrap();
//! let solution = Solver::new(&index).solve_pool(&pool);
//! assert_eq!(solution.max_len(), Some(6));
//! assert_eq!(solution.best_answers().len(), 3);
//! ```

// Core domain types
pub mod core;

// Word list loading and anagram index
pub mod dictionary;

// Combination search
pub mod solver;

// Pool drawing, answer clock and rounds
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
mod error;

pub use error::GameError;
