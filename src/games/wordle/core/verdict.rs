use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    #[default]
    Absent,
    Present,
    Correct,
}

impl Verdict {
    pub const fn as_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Tile background used by the board.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Correct => "green",
            Self::Present => "chocolate",
            Self::Absent => "black",
        }
    }
}

impl TryFrom<char> for Verdict {
    type Error = ParseFeedbackError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            'G' => Self::Correct,
            'Y' => Self::Present,
            'B' => Self::Absent,
            other => return Err(ParseFeedbackError(other)),
        })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a verdict, expected one of `G`, `Y` or `B`")]
pub struct ParseFeedbackError(char);

/// Per-letter verdicts for one guess, stored as a `G`/`Y`/`B` string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    pub fn absent(len: usize) -> Self {
        Self(vec![Verdict::Absent; len])
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_solved(&self) -> bool {
        !self.is_empty() && self.0.iter().all(|verdict| *verdict == Verdict::Correct)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Verdict> + '_ {
        self.0.iter()
    }
}

impl Index<usize> for Feedback {
    type Output = Verdict;

    fn index(&self, index: usize) -> &Self::Output {
        self.0.index(index)
    }
}

impl IndexMut<usize> for Feedback {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.0.index_mut(index)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|verdict| write!(f, "{verdict}"))
    }
}

impl FromStr for Feedback {
    type Err = ParseFeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(Verdict::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl TryFrom<String> for Feedback {
    type Error = ParseFeedbackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<Feedback> for String {
    fn from(value: Feedback) -> Self {
        value.to_string()
    }
}

impl PartialEq<&str> for Feedback {
    fn eq(&self, other: &&str) -> bool {
        &self.to_string() == other
    }
}
