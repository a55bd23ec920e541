use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    /// One try at a nine letter word.
    Hackerman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub word_length: usize,
    pub max_attempts: usize,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Hackerman];

    /// Looks up a difficulty by its exact, lowercase label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.label() == label)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Hackerman => "hackerman",
        }
    }

    pub const fn settings(self) -> Settings {
        let (word_length, max_attempts) = match self {
            Self::Easy => (5, 7),
            Self::Medium => (5, 6),
            Self::Hard => (6, 5),
            Self::Hackerman => (9, 1),
        };

        Settings {
            word_length,
            max_attempts,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
