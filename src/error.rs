//! Crate-level error type

use crate::core::PoolError;
use std::io;
use thiserror::Error;

/// Failures that end a round
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid letter pool: {0}")]
    Pool(#[from] PoolError),
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

impl GameError {
    /// True when the player closed input or pressed Ctrl-C
    #[must_use]
    pub fn is_player_exit(&self) -> bool {
        matches!(
            self,
            Self::Io(e) if matches!(
                e.kind(),
                io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_and_interrupt_are_player_exits() {
        let eof = GameError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"));
        let ctrl_c = GameError::from(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"));
        let other = GameError::from(io::Error::other("broken pipe"));

        assert!(eof.is_player_exit());
        assert!(ctrl_c.is_player_exit());
        assert!(!other.is_player_exit());
        assert!(!GameError::from(PoolError::WrongSize(3)).is_player_exit());
    }
}
