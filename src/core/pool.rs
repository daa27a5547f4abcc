//! Letter pool for a single round
//!
//! Nine letters drawn by the player, with consonant and vowel quotas.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every pool
pub const POOL_SIZE: usize = 9;

/// Most consonants a pool may hold
pub const MAX_CONSONANTS: usize = 6;

/// Most vowels a pool may hold
pub const MAX_VOWELS: usize = 5;

/// Fewest consonants a full pool holds
pub const MIN_CONSONANTS: usize = POOL_SIZE - MAX_VOWELS;

/// Fewest vowels a full pool holds
pub const MIN_VOWELS: usize = POOL_SIZE - MAX_CONSONANTS;

/// Consonant draw table, weighted by English letter frequency
pub const CONSONANTS: &[u8] = b"nnnnnnrrrrrrttttttllllssssddddgggbbccmmppffhhvvwwyykjxqz";

/// Vowel draw table, weighted by English letter frequency
pub const VOWELS: &[u8] = b"eeeeeeeeeeeeaaaaaaaaaiiiiiiiiioooooooouuuu";

/// The two kinds of letter a player may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterKind {
    Consonant,
    Vowel,
}

/// Rejected pool construction choice
///
/// Recovered locally by re-prompting; never reaches the round controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("invalid input '{0}', press c for a consonant or v for a vowel")]
    Unrecognized(String),
    #[error(
        "no more {kind}s allowed, there must be at least {MIN_VOWELS} vowels and {MIN_CONSONANTS} consonants"
    )]
    QuotaExceeded { kind: LetterKind },
    #[error("the pool already holds {POOL_SIZE} letters")]
    PoolFull,
}

/// A letter sequence that cannot form a pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("a pool needs exactly {POOL_SIZE} letters, got {0}")]
    WrongSize(usize),
    #[error("'{0}' is not an ASCII letter")]
    NotALetter(char),
    #[error("{consonants} consonants and {vowels} vowels breaks the quota")]
    QuotaViolated { consonants: usize, vowels: usize },
}

impl LetterKind {
    /// Classify a lowercase ASCII letter
    #[must_use]
    pub const fn of(letter: u8) -> Self {
        match letter {
            b'a' | b'e' | b'i' | b'o' | b'u' => Self::Vowel,
            _ => Self::Consonant,
        }
    }

    /// The weighted draw table for this kind
    #[must_use]
    pub const fn table(self) -> &'static [u8] {
        match self {
            Self::Consonant => CONSONANTS,
            Self::Vowel => VOWELS,
        }
    }

    /// Maximum number of letters of this kind in one pool
    #[must_use]
    pub const fn quota(self) -> usize {
        match self {
            Self::Consonant => MAX_CONSONANTS,
            Self::Vowel => MAX_VOWELS,
        }
    }

    /// Parse a player choice token
    ///
    /// Accepts `c`/`consonant` and `v`/`vowel`, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns `ChoiceError::Unrecognized` for any other token.
    pub fn parse(token: &str) -> Result<Self, ChoiceError> {
        let token = token.trim();
        match token.to_ascii_lowercase().as_str() {
            "c" | "consonant" => Ok(Self::Consonant),
            "v" | "vowel" => Ok(Self::Vowel),
            _ => Err(ChoiceError::Unrecognized(token.to_string())),
        }
    }
}

impl FromStr for LetterKind {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LetterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consonant => write!(f, "consonant"),
            Self::Vowel => write!(f, "vowel"),
        }
    }
}

/// Nine letters in draw order, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: [u8; POOL_SIZE],
    consonants: usize,
}

impl LetterPool {
    /// Build a pool from letters in draw order
    ///
    /// Letters are lowercased before validation.
    ///
    /// # Errors
    /// Returns `PoolError` if there are not exactly nine ASCII letters or the
    /// consonant/vowel split falls outside 4-6 consonants and 3-5 vowels.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::LetterPool;
    ///
    /// let pool = LetterPool::new(b"STREAMING").unwrap();
    /// assert_eq!(pool.consonant_count(), 6);
    /// assert_eq!(pool.vowel_count(), 3);
    ///
    /// assert!(LetterPool::new(b"aeiouaeio").is_err());
    /// ```
    pub fn new(letters: &[u8]) -> Result<Self, PoolError> {
        let letters: [u8; POOL_SIZE] = letters
            .try_into()
            .map_err(|_| PoolError::WrongSize(letters.len()))?;

        if let Some(&bad) = letters.iter().find(|b| !b.is_ascii_alphabetic()) {
            return Err(PoolError::NotALetter(char::from(bad)));
        }

        let letters = letters.map(|b| b.to_ascii_lowercase());
        let consonants = letters
            .iter()
            .filter(|&&b| LetterKind::of(b) == LetterKind::Consonant)
            .count();
        let vowels = POOL_SIZE - consonants;

        if consonants > MAX_CONSONANTS || vowels > MAX_VOWELS {
            return Err(PoolError::QuotaViolated { consonants, vowels });
        }

        Ok(Self {
            letters,
            consonants,
        })
    }

    /// Letters in the order they were drawn
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; POOL_SIZE] {
        &self.letters
    }

    /// Letters sorted into canonical order
    #[must_use]
    pub fn sorted(&self) -> [u8; POOL_SIZE] {
        let mut sorted = self.letters;
        sorted.sort_unstable();
        sorted
    }

    #[inline]
    #[must_use]
    pub const fn consonant_count(&self) -> usize {
        self.consonants
    }

    #[inline]
    #[must_use]
    pub const fn vowel_count(&self) -> usize {
        POOL_SIZE - self.consonants
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.letters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotas_are_consistent() {
        assert_eq!(MIN_CONSONANTS, 4);
        assert_eq!(MIN_VOWELS, 3);
        assert_eq!(MAX_CONSONANTS + MIN_VOWELS, POOL_SIZE);
    }

    #[test]
    fn tables_hold_only_their_kind() {
        assert!(CONSONANTS.iter().all(|&b| LetterKind::of(b) == LetterKind::Consonant));
        assert!(VOWELS.iter().all(|&b| LetterKind::of(b) == LetterKind::Vowel));
    }

    #[test]
    fn consonant_table_weights_common_letters() {
        let count = |letter: u8| CONSONANTS.iter().filter(|&&b| b == letter).count();
        assert_eq!(count(b'n'), 6);
        assert_eq!(count(b't'), 6);
        assert_eq!(count(b'q'), 1);
        assert_eq!(count(b'z'), 1);
    }

    #[test]
    fn parse_accepts_short_and_long_tokens() {
        assert_eq!(LetterKind::parse("c"), Ok(LetterKind::Consonant));
        assert_eq!(LetterKind::parse(" V \n"), Ok(LetterKind::Vowel));
        assert_eq!(LetterKind::parse("Consonant"), Ok(LetterKind::Consonant));
        assert_eq!("vowel".parse(), Ok(LetterKind::Vowel));
    }

    #[test]
    fn parse_rejects_other_tokens() {
        assert!(matches!(
            LetterKind::parse("x"),
            Err(ChoiceError::Unrecognized(t)) if t == "x"
        ));
        assert!(LetterKind::parse("").is_err());
        assert!(LetterKind::parse("cv").is_err());
    }

    #[test]
    fn pool_accepts_valid_split() {
        let pool = LetterPool::new(b"tnrsleaio").unwrap();
        assert_eq!(pool.consonant_count(), 5);
        assert_eq!(pool.vowel_count(), 4);
        assert_eq!(pool.letters(), b"tnrsleaio");
        assert_eq!(&pool.sorted(), b"aeilnorst");
    }

    #[test]
    fn pool_lowercases_letters() {
        let pool = LetterPool::new(b"TNRSLEAIO").unwrap();
        assert_eq!(pool.to_string(), "tnrsleaio");
    }

    #[test]
    fn pool_rejects_wrong_size() {
        assert_eq!(LetterPool::new(b"abc"), Err(PoolError::WrongSize(3)));
        assert_eq!(LetterPool::new(b"tnrsleaiox"), Err(PoolError::WrongSize(10)));
    }

    #[test]
    fn pool_rejects_non_letters() {
        assert_eq!(LetterPool::new(b"tnrsle4io"), Err(PoolError::NotALetter('4')));
    }

    #[test]
    fn pool_rejects_quota_violations() {
        // Six consonants is the limit, seven is not
        assert!(LetterPool::new(b"tnrslmaio").is_ok());
        assert!(matches!(
            LetterPool::new(b"tnrslmpao"),
            Err(PoolError::QuotaViolated {
                consonants: 7,
                vowels: 2
            })
        ));
        assert!(matches!(
            LetterPool::new(b"tnaeiouae"),
            Err(PoolError::QuotaViolated {
                consonants: 2,
                vowels: 7
            })
        ));
    }
}
