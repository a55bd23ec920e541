use std::{collections::HashMap, fmt, ops::Index, slice::Iter, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::verdict::{Feedback, Verdict};

/// An uppercase `A-Z` word, either a target or a guess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: Vec<char>,
    letter_counts: HashMap<char, usize>,
}

impl Word {
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, char> {
        self.letters.iter()
    }

    /// Scores `guess` against this word.
    ///
    /// Exact matches are claimed first, then the remaining letters are credited
    /// left to right while the target still has unclaimed copies of them.
    pub fn score(&self, guess: &Word) -> Result<Feedback, LengthMismatch> {
        if guess.len() != self.len() {
            return Err(LengthMismatch {
                expected: self.len(),
                found: guess.len(),
            });
        }

        let mut feedback = Feedback::absent(self.len());
        let mut letter_counts = self.letter_counts.clone();

        for (index, letter) in guess.iter().enumerate() {
            if self[index] == *letter {
                feedback[index] = Verdict::Correct;
                let count = letter_counts.get_mut(letter).expect("word has letter");
                *count = count.saturating_sub(1);
            }
        }

        debug!(answer = %self, remaining = ?letter_counts);

        for (index, letter) in guess.iter().enumerate() {
            if feedback[index] != Verdict::Correct
                && letter_counts.get(letter).is_some_and(|count| *count > 0)
            {
                trace!("{letter}: present");

                feedback[index] = Verdict::Present;
                *letter_counts.get_mut(letter).expect("word has letter") -= 1;
            }
        }

        Ok(feedback)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("guess has {found} letters but the word has {expected}")]
pub struct LengthMismatch {
    pub expected: usize,
    pub found: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWordError {
    #[error("word is empty")]
    Empty,

    #[error("word `{0}` must only contain the letters A-Z")]
    Alphabet(String),
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseWordError::Empty);
        }

        if !s.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(ParseWordError::Alphabet(s.to_owned()));
        }

        let letters = s.chars().collect::<Vec<char>>();

        let mut letter_counts: HashMap<char, usize> = HashMap::new();
        for letter in &letters {
            *letter_counts.entry(*letter).or_default() += 1;
        }

        Ok(Self {
            letters,
            letter_counts,
        })
    }
}

impl TryFrom<String> for Word {
    type Error = ParseWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<Word> for String {
    fn from(value: Word) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}

impl Index<usize> for Word {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        self.letters.index(index)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.letters.iter().copied().eq(other.chars())
    }
}
