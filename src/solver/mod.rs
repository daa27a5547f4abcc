//! Letters game solving
//!
//! Resolves a letter pool to every dictionary word it can spell.

pub mod search;

pub use search::{Solution, Solver, distinct_combinations};
