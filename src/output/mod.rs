//! Terminal output formatting
//!
//! Display utilities for round results and command output.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_round_result, print_solve_result};
