use std::{fmt, num::ParseIntError, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod core;

mod difficulty;
pub use difficulty::Difficulty;

mod error;
pub use error::{Error, InvalidGuess};

pub mod game;
pub use game::{GameRecord, Games, Status};

pub mod store;

mod words_list;
pub use words_list::WordsList;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Binds one browser session to its game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(i64);

impl SessionId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// A fresh positive id.
    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(1..i64::MAX))
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
