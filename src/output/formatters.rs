//! Formatting utilities for terminal output

use crate::core::Word;

/// Letters in uppercase, separated by spaces
#[must_use]
pub fn spaced_letters(letters: &[u8]) -> String {
    let mut result = String::with_capacity(letters.len() * 2);
    for (i, &b) in letters.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(char::from(b.to_ascii_uppercase()));
    }
    result
}

/// Words in uppercase, comma separated
#[must_use]
pub fn word_list<'a>(words: impl IntoIterator<Item = &'a Word>) -> String {
    words
        .into_iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
