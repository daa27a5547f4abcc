//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, draw_pools, run_benchmark};
pub use play::run_play;
pub use solve::{SolveError, SolveResult, solve_letters};
