//! Dictionary word representation
//!
//! A Word stores a lowercase dictionary entry together with its anagram signature.

use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// Longest word kept in the dictionary
pub const MAX_WORD_LEN: usize = 10;

/// Letters of a word sorted into canonical order
///
/// Equal for all true anagrams. Used as the key of the anagram index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Compute the signature of a lowercase word
    #[must_use]
    pub fn of(text: &str) -> Self {
        let mut bytes = text.as_bytes().to_vec();
        bytes.sort_unstable();
        Self(bytes)
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Lets the index be queried with a borrowed `&[u8]` candidate.
impl Borrow<[u8]> for Signature {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A dictionary word of 1 to 10 ASCII letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    signature: Signature,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must be at most {MAX_WORD_LEN} letters, got {0}")]
    TooLong(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty, longer than
    /// [`MAX_WORD_LEN`], or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::Word;
    ///
    /// let word = Word::new("Stream\n").unwrap();
    /// assert_eq!(word.text(), "stream");
    /// assert_eq!(word.signature().as_bytes(), b"aemrst");
    ///
    /// assert!(Word::new("don't").is_err());
    /// assert!(Word::new("extraordinary").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        if trimmed.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(trimmed.len()));
        }

        let text = trimmed.to_ascii_lowercase();
        let signature = Signature::of(&text);

        Ok(Self { text, signature })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
