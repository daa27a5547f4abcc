//! Combination search
//!
//! Enumerates every distinct sub-multiset of the pool letters, longest first,
//! and resolves each one against the anagram index.

use crate::core::{LetterPool, Word};
use crate::dictionary::AnagramIndex;
use std::collections::BTreeMap;

/// Every word a set of letters can form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    answers: Vec<Word>,
    candidates_checked: usize,
}

impl Solution {
    /// All formable words, longest first, anagram buckets in dictionary order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True when no dictionary word can be formed at any length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Length of the longest formable word, `None` for an empty answer set
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        self.answers.iter().map(Word::len).max()
    }

    /// Words of maximum length; empty when nothing can be formed
    #[must_use]
    pub fn best_answers(&self) -> Vec<&Word> {
        let Some(max_len) = self.max_len() else {
            return Vec::new();
        };
        self.answers.iter().filter(|w| w.len() == max_len).collect()
    }

    /// Check whether the exact text is one of the formable words
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.answers.iter().any(|w| w.text() == text)
    }

    /// Answers grouped by word length, longest group last
    #[must_use]
    pub fn by_length(&self) -> BTreeMap<usize, Vec<&Word>> {
        let mut groups: BTreeMap<usize, Vec<&Word>> = BTreeMap::new();
        for word in &self.answers {
            groups.entry(word.len()).or_default().push(word);
        }
        groups
    }

    /// Number of distinct candidate signatures looked up
    #[inline]
    #[must_use]
    pub const fn candidates_checked(&self) -> usize {
        self.candidates_checked
    }
}

/// Anagram solver over a shared read-only index
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    index: &'a AnagramIndex,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(index: &'a AnagramIndex) -> Self {
        Self { index }
    }

    /// Solve a round's letter pool
    #[must_use]
    pub fn solve_pool(&self, pool: &LetterPool) -> Solution {
        self.search(&pool.sorted())
    }

    /// Find every word formable from the given letters
    ///
    /// Every length is searched, from all the letters down to one; matches at
    /// shorter lengths are kept even after longer words are found.
    ///
    /// # Examples
    /// ```
    /// use countdown_letters::core::Word;
    /// use countdown_letters::dictionary::AnagramIndex;
    /// use countdown_letters::solver::Solver;
    ///
    /// let words = ["cat", "act", "tac", "cats"].map(|w| Word::new(w).unwrap());
    /// let index = AnagramIndex::build(words);
    /// let solution = Solver::new(&index).solve(b"tacts");
    ///
    /// assert_eq!(solution.max_len(), Some(4));
    /// assert_eq!(solution.len(), 4);
    /// ```
    #[must_use]
    pub fn solve(&self, letters: &[u8]) -> Solution {
        let mut sorted: Vec<u8> = letters.iter().map(u8::to_ascii_lowercase).collect();
        sorted.sort_unstable();
        self.search(&sorted)
    }

    /// Look up every distinct sub-multiset of already sorted, lowercase letters
    fn search(&self, sorted: &[u8]) -> Solution {
        let mut answers = Vec::new();
        let mut candidates_checked = 0;

        for k in (1..=sorted.len()).rev() {
            for candidate in distinct_combinations(sorted, k) {
                candidates_checked += 1;
                answers.extend_from_slice(self.index.lookup(&candidate));
            }
        }

        tracing::debug!(
            letters = %String::from_utf8_lossy(sorted),
            candidates = candidates_checked,
            answers = answers.len(),
            "combination search finished"
        );

        Solution {
            answers,
            candidates_checked,
        }
    }
}

/// Distinct `k`-letter subsequences of sorted letters, in lexicographic order
///
/// Repeated letters yield each letter sequence once, no matter which positions
/// supplied it. Each result is itself sorted and so is a valid signature.
#[must_use]
pub fn distinct_combinations(sorted: &[u8], k: usize) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    if k <= sorted.len() {
        let mut current = Vec::with_capacity(k);
        extend_combinations(sorted, k, 0, &mut current, &mut out);
    }
    out
}

fn extend_combinations(
    sorted: &[u8],
    k: usize,
    start: usize,
    current: &mut Vec<u8>,
    out: &mut Vec<Vec<u8>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }

    let needed = k - current.len();
    for i in start..=sorted.len() - needed {
        // Same letter at the same depth would repeat a sequence already produced
        if i > start && sorted[i] == sorted[i - 1] {
            continue;
        }
        current.push(sorted[i]);
        extend_combinations(sorted, k, i + 1, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_lines;
    use rustc_hash::FxHashMap;
    use std::collections::HashSet;

    fn index_of(lines: &[&str]) -> AnagramIndex {
        let (words, _) = words_from_lines(lines.iter().copied());
        AnagramIndex::build(words)
    }

    fn letter_counts(bytes: &[u8]) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &b in bytes {
            *counts.entry(b).or_insert(0) += 1;
        }
        counts
    }

    fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a str> {
        words.into_iter().map(Word::text).collect()
    }

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn combinations_of_distinct_letters_match_binomial() {
        let sorted = b"abcdefghi";
        for k in 0..=9 {
            assert_eq!(distinct_combinations(sorted, k).len(), binomial(9, k), "k = {k}");
        }
    }

    #[test]
    fn combinations_deduplicate_repeated_letters() {
        let combos = distinct_combinations(b"aab", 2);
        assert_eq!(combos, vec![b"aa".to_vec(), b"ab".to_vec()]);

        let combos = distinct_combinations(b"aaaa", 2);
        assert_eq!(combos, vec![b"aa".to_vec()]);
    }

    #[test]
    fn combinations_are_unique_and_sorted() {
        let sorted = b"aeeilnrtt";
        for k in 1..=sorted.len() {
            let combos = distinct_combinations(sorted, k);
            let unique: HashSet<&Vec<u8>> = combos.iter().collect();
            assert_eq!(unique.len(), combos.len(), "duplicates at k = {k}");
            assert!(combos.iter().all(|c| c.len() == k && c.is_sorted()));
        }
    }

    #[test]
    fn combinations_longer_than_input_are_empty() {
        assert!(distinct_combinations(b"ab", 3).is_empty());
    }

    #[test]
    fn cat_scenario_with_plural_in_index() {
        let index = index_of(&["cat", "act", "tac", "cats"]);
        let solver = Solver::new(&index);

        // "cats" sorts to acst, a sub-multiset of a,c,s,t,t
        let solution = solver.solve(b"acstt");
        assert_eq!(texts(solution.best_answers()), ["cats"]);
        assert_eq!(texts(solution.answers()), ["cats", "cat", "act", "tac"]);
    }

    #[test]
    fn cat_scenario_three_letter_anagrams_are_best() {
        let index = index_of(&["cat", "act", "tac", "cats"]);
        let solver = Solver::new(&index);

        assert_eq!(index.lookup(b"act").len(), 3);

        let solution = solver.solve(b"actt");
        assert_eq!(texts(solution.best_answers()), ["cat", "act", "tac"]);
        assert_eq!(solution.max_len(), Some(3));
    }

    #[test]
    fn answer_set_accumulates_all_lengths() {
        let index = index_of(&["a", "at", "tea", "eat", "seat", "east", "teas"]);
        let solution = Solver::new(&index).solve(b"aest");

        assert_eq!(
            texts(solution.answers()),
            ["seat", "east", "teas", "tea", "eat", "at", "a"]
        );
        assert_eq!(texts(solution.best_answers()), ["seat", "east", "teas"]);

        let groups = solution.by_length();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(texts(groups[&3].iter().copied()), ["tea", "eat"]);
    }

    #[test]
    fn answers_respect_letter_multiplicity() {
        let index = index_of(&["letter", "later", "tall", "tatt", "eel", "rattle", "ate"]);
        let pool = b"tlaerqxyn";
        let solution = Solver::new(&index).solve(pool);
        let pool_counts = letter_counts(pool);

        assert!(!solution.is_empty());
        for word in solution.answers() {
            let word_counts = letter_counts(word.text().as_bytes());
            for (letter, count) in word_counts {
                assert!(
                    count <= pool_counts.get(&letter).copied().unwrap_or(0),
                    "'{word}' uses '{}' too often",
                    char::from(letter)
                );
            }
        }
        assert!(solution.contains("later"));
        assert!(!solution.contains("letter"));
        assert!(!solution.contains("tall"));
        assert!(!solution.contains("rattle"));
        assert!(solution.contains("ate"));
    }

    #[test]
    fn repeated_pool_letters_do_not_double_count() {
        let index = index_of(&["tee", "see"]);
        let solution = Solver::new(&index).solve(b"eeeesst");

        assert_eq!(texts(solution.answers()), ["see", "tee"]);
    }

    #[test]
    fn solve_is_idempotent() {
        let index = index_of(&["stream", "master", "tamers", "mate", "team", "meat", "ream"]);
        let solver = Solver::new(&index);

        let first = solver.solve(b"streamxyz");
        let second = solver.solve(b"streamxyz");

        let a: HashSet<&str> = first.answers().iter().map(Word::text).collect();
        let b: HashSet<&str> = second.answers().iter().map(Word::text).collect();
        assert_eq!(a, b);
        assert_eq!(first.candidates_checked(), second.candidates_checked());
    }

    #[test]
    fn letter_order_does_not_matter() {
        let index = index_of(&["stream", "master", "tamers"]);
        let solver = Solver::new(&index);

        assert_eq!(solver.solve(b"maesrt"), solver.solve(b"STREAM"));
    }

    #[test]
    fn empty_answer_set_has_no_best() {
        let index = index_of(&["cat"]);
        let solution = Solver::new(&index).solve(b"xyzqjkvwb");

        assert!(solution.is_empty());
        assert_eq!(solution.max_len(), None);
        assert!(solution.best_answers().is_empty());
        assert!(solution.by_length().is_empty());
    }

    #[test]
    fn nine_distinct_letters_check_every_subset() {
        let index = index_of(&["cat"]);
        let solution = Solver::new(&index).solve(b"abcdefghi");

        assert_eq!(solution.candidates_checked(), 511);
    }

    #[test]
    fn solve_pool_uses_pool_letters() {
        let index = index_of(&["streaming", "master", "gin"]);
        let pool = LetterPool::new(b"gnimaerts").unwrap();

        let solver = Solver::new(&index);
        let solution = solver.solve_pool(&pool);

        assert_eq!(texts(solution.best_answers()), ["streaming"]);
        assert!(solution.contains("gin"));
        assert_eq!(solution.answers(), solver.solve(pool.letters()).answers());
        assert_eq!(solution.candidates_checked(), solver.solve(b"STREAMING").candidates_checked());
    }
}
