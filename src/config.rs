//! Game configuration

use std::path::PathBuf;
use std::time::Duration;

/// Dictionary read when none is given
pub const DEFAULT_DICTIONARY: &str = "words.txt";

/// Seconds the player has to answer
pub const DEFAULT_DEADLINE_SECS: u64 = 30;

/// Longest answer window the CLI accepts
pub const MAX_DEADLINE_SECS: u64 = 3600;

/// Settings shared by every round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary: PathBuf,
    pub deadline: Duration,
}

impl GameConfig {
    #[must_use]
    pub fn new(dictionary: impl Into<PathBuf>, deadline_secs: u64) -> Self {
        Self {
            dictionary: dictionary.into(),
            deadline: Duration::from_secs(deadline_secs),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY, DEFAULT_DEADLINE_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_thirty_seconds_on_words_txt() {
        let config = GameConfig::default();
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
        assert_eq!(config.deadline, Duration::from_secs(30));
    }

    #[test]
    fn new_converts_seconds() {
        let config = GameConfig::new("/usr/share/dict/words", 5);
        assert_eq!(config.deadline.as_secs(), 5);
    }
}
