//! Dictionary loading
//!
//! Reads a newline-delimited word list and keeps the entries a letter pool can use.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dictionary source could not be read
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts of raw entries dropped during loading
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkippedEntries {
    pub blank: usize,
    pub too_long: usize,
    pub invalid: usize,
}

impl SkippedEntries {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.blank + self.too_long + self.invalid
    }
}

/// Load words from a file
///
/// Entries longer than ten letters, blank lines and entries with non-letter
/// characters are skipped. The loader does not retry.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or is not UTF-8.
///
/// # Examples
/// ```no_run
/// use countdown_letters::dictionary::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (words, skipped) = words_from_lines(content.lines());

    tracing::info!(
        path = %path.display(),
        loaded = words.len(),
        skipped = skipped.total(),
        "dictionary loaded"
    );
    if skipped.invalid > 0 {
        tracing::warn!(
            count = skipped.invalid,
            "dictionary entries with non-letter characters were ignored"
        );
    }

    Ok(words)
}

/// Convert raw lines to words, in source order
///
/// # Examples
/// ```
/// use countdown_letters::dictionary::loader::words_from_lines;
///
/// let (words, skipped) = words_from_lines(["cat", "", "internationally"]);
/// assert_eq!(words.len(), 1);
/// assert_eq!(skipped.total(), 2);
/// ```
pub fn words_from_lines<'a, I>(lines: I) -> (Vec<Word>, SkippedEntries)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut skipped = SkippedEntries::default();
    let words = lines
        .into_iter()
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(WordError::Empty) => {
                skipped.blank += 1;
                None
            }
            Err(WordError::TooLong(_)) => {
                skipped.too_long += 1;
                None
            }
            Err(WordError::InvalidCharacters) => {
                skipped.invalid += 1;
                None
            }
        })
        .collect();

    (words, skipped)
}
