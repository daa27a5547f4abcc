//! Playing the letters game
//!
//! Pool drawing, the answer clock and the round controller that ties them to
//! the solver.

pub mod clock;
pub mod generator;
pub mod round;
pub mod terminal;

pub use clock::{AnswerInput, KeyInput, collect_answer};
pub use generator::{PoolBuilder, draw_pool, random_pool};
pub use round::{RoundController, RoundOutcome, RoundResult};
pub use terminal::TerminalInput;
