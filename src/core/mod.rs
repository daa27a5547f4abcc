//! Core domain types for the letters game
//!
//! Words, anagram signatures and letter pools. Pure and testable; nothing here
//! touches the terminal or the filesystem.

mod pool;
mod word;

pub use pool::{
    CONSONANTS, ChoiceError, LetterKind, LetterPool, MAX_CONSONANTS, MAX_VOWELS, MIN_CONSONANTS,
    MIN_VOWELS, POOL_SIZE, PoolError, VOWELS,
};
pub use word::{MAX_WORD_LEN, Signature, Word, WordError};
