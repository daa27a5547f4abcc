//! Letter pool generation
//!
//! The player picks consonant or vowel nine times; each pick draws a random
//! letter from the matching frequency table.

use crate::GameError;
use crate::core::{
    ChoiceError, LetterKind, LetterPool, MAX_CONSONANTS, MIN_CONSONANTS, POOL_SIZE, PoolError,
};
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{self, BufRead, Write};

/// Prompt shown before every choice
pub const CHOICE_PROMPT: &str = "Press c for a consonant or v for a vowel: ";

/// Draw one letter of the given kind, weighted by the frequency table
pub fn draw_letter<R: Rng>(kind: LetterKind, rng: &mut R) -> u8 {
    let table = kind.table();
    table[rng.random_range(0..table.len())]
}

/// Accumulates choices until the pool is full
#[derive(Debug, Default, Clone)]
pub struct PoolBuilder {
    letters: Vec<u8>,
    consonants: usize,
    vowels: usize,
}

impl PoolBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(POOL_SIZE),
            ..Self::default()
        }
    }

    /// Letters accepted so far, in draw order
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.len() == POOL_SIZE
    }

    /// Letters of this kind accepted so far
    #[must_use]
    pub const fn count(&self, kind: LetterKind) -> usize {
        match kind {
            LetterKind::Consonant => self.consonants,
            LetterKind::Vowel => self.vowels,
        }
    }

    /// Accept a choice and draw its letter
    ///
    /// A rejected choice leaves the builder untouched and consumes no slot.
    ///
    /// # Errors
    /// Returns `ChoiceError::QuotaExceeded` if the kind's quota is used up, or
    /// `ChoiceError::PoolFull` once nine letters are held.
    pub fn accept<R: Rng>(&mut self, kind: LetterKind, rng: &mut R) -> Result<u8, ChoiceError> {
        if self.is_complete() {
            return Err(ChoiceError::PoolFull);
        }
        if self.count(kind) >= kind.quota() {
            return Err(ChoiceError::QuotaExceeded { kind });
        }

        let letter = draw_letter(kind, rng);
        self.letters.push(letter);
        match kind {
            LetterKind::Consonant => self.consonants += 1,
            LetterKind::Vowel => self.vowels += 1,
        }
        Ok(letter)
    }

    /// Turn the accepted letters into a pool
    ///
    /// # Errors
    /// Returns `PoolError::WrongSize` if fewer than nine letters were accepted.
    pub fn finish(&self) -> Result<LetterPool, PoolError> {
        LetterPool::new(&self.letters)
    }
}

/// Ask the player for nine choices and build the pool
///
/// Invalid tokens and quota-breaking choices are reported on `output` and
/// asked again. The loop ends once nine letters are accepted.
///
/// # Errors
///
/// Returns `GameError::Io` if reading or writing fails, with
/// `ErrorKind::UnexpectedEof` if input closes before the pool is full.
pub fn draw_pool<I, O, R>(
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<LetterPool, GameError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
    R: Rng,
{
    let mut builder = PoolBuilder::new();
    let mut line = String::new();

    while !builder.is_complete() {
        write!(output, "{CHOICE_PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed during letter selection",
            )
            .into());
        }

        match LetterKind::parse(&line).and_then(|kind| builder.accept(kind, rng)) {
            Ok(letter) => {
                writeln!(
                    output,
                    "  {}  ({}/{POOL_SIZE})",
                    char::from(letter.to_ascii_uppercase()),
                    builder.letters().len()
                )?;
            }
            Err(e) => {
                tracing::debug!(error = %e, "letter choice rejected");
                writeln!(output, "Error: {e}")?;
            }
        }
    }

    Ok(builder.finish()?)
}

/// Draw a random quota-respecting pool without asking anyone
///
/// # Errors
/// Returns `PoolError` only if the draw tables are inconsistent with the quotas.
pub fn random_pool<R: Rng>(rng: &mut R) -> Result<LetterPool, PoolError> {
    let consonants = rng.random_range(MIN_CONSONANTS..=MAX_CONSONANTS);
    let mut kinds = [LetterKind::Vowel; POOL_SIZE];
    kinds[..consonants].fill(LetterKind::Consonant);
    kinds.shuffle(rng);

    let letters = kinds.map(|kind| draw_letter(kind, rng));
    LetterPool::new(&letters)
}
