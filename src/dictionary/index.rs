//! Anagram index
//!
//! Groups dictionary words by their signature so a candidate set of letters
//! resolves to every word it spells in one hash lookup.

use crate::core::{Signature, Word};
use rustc_hash::FxHashMap;

/// Signature to words lookup, read-only once built
#[derive(Debug, Default, Clone)]
pub struct AnagramIndex {
    buckets: FxHashMap<Signature, Vec<Word>>,
    word_count: usize,
}

impl AnagramIndex {
    /// Build the index from words in dictionary order
    ///
    /// Words inside a bucket keep their source order. A word listed twice is
    /// stored once, at its first position.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::Word;
    /// use countdown_letters::dictionary::AnagramIndex;
    ///
    /// let words = ["cat", "act", "tac", "cats"].map(|w| Word::new(w).unwrap());
    /// let index = AnagramIndex::build(words);
    ///
    /// let bucket: Vec<&str> = index.lookup(b"act").iter().map(Word::text).collect();
    /// assert_eq!(bucket, ["cat", "act", "tac"]);
    /// assert!(index.lookup(b"acst").len() == 1);
    /// assert!(index.lookup(b"dog").is_empty());
    /// ```
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut buckets: FxHashMap<Signature, Vec<Word>> = FxHashMap::default();
        let mut word_count = 0;

        for word in words {
            let bucket = buckets.entry(word.signature().clone()).or_default();
            if !bucket.contains(&word) {
                bucket.push(word);
                word_count += 1;
            }
        }

        tracing::info!(
            words = word_count,
            signatures = buckets.len(),
            "anagram index built"
        );

        Self {
            buckets,
            word_count,
        }
    }

    /// Words spelled by exactly these sorted letters
    ///
    /// Returns an empty slice when no word has this signature, which is the
    /// usual outcome for a candidate.
    #[inline]
    #[must_use]
    pub fn lookup(&self, signature: &[u8]) -> &[Word] {
        self.buckets
            .get(signature)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct words indexed
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of distinct signatures
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
