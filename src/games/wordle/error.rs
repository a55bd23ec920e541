use thiserror::Error;

use super::{game::Status, store, SessionId};

#[derive(Debug, Error)]
pub enum Error {
    #[error("no game for session {0}")]
    NotFound(SessionId),

    #[error(transparent)]
    InvalidGuess(#[from] InvalidGuess),

    #[error("game is already over ({0})")]
    GameOver(Status),

    #[error("no words with {0} letters")]
    NoWords(usize),

    #[error("store error: {0}")]
    Store(#[from] store::Error),
}

impl Error {
    /// Rejected input that left the game untouched; the player can try again.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::InvalidGuess(_) | Self::GameOver(_))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    #[error("guess has {found} letters, expected {expected}")]
    WrongLength { expected: usize, found: usize },

    #[error("guess `{0}` must only contain the letters A-Z")]
    Alphabet(String),
}
