use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::games::wordle::{
    core::{Feedback, Word},
    Difficulty, Error, InvalidGuess,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Running,
    Won,
    Lost,
}

impl Status {
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub letters: Word,
    pub colors: Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    word: Word,
    word_length: usize,
    max_attempts: usize,
    attempts: Vec<Attempt>,
    status: Status,
    difficulty: Difficulty,
    started: DateTime<Utc>,
}

impl GameRecord {
    pub fn new(word: Word, difficulty: Difficulty) -> Self {
        Self {
            word_length: word.len(),
            max_attempts: difficulty.settings().max_attempts,
            word,
            attempts: Vec::new(),
            status: Status::Running,
            difficulty,
            started: Utc::now(),
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Scores `guess`, appends it and moves the game to `won` or `lost` when
    /// it ends. A rejected guess leaves the record unchanged.
    pub fn attempt(&mut self, guess: &str) -> Result<&Attempt, Error> {
        if !self.status.is_running() {
            return Err(Error::GameOver(self.status));
        }

        let found = guess.chars().count();
        if found != self.word_length {
            return Err(InvalidGuess::WrongLength {
                expected: self.word_length,
                found,
            }
            .into());
        }

        let letters: Word = guess
            .parse()
            .map_err(|_| InvalidGuess::Alphabet(guess.to_owned()))?;

        let colors = self.word.score(&letters).map_err(|err| {
            InvalidGuess::WrongLength {
                expected: err.expected,
                found: err.found,
            }
        })?;

        if colors.is_solved() {
            self.status = Status::Won;
        } else if self.attempts.len() + 1 >= self.max_attempts {
            self.status = Status::Lost;
        }

        let index = self.attempts.len();
        self.attempts.push(Attempt { letters, colors });
        Ok(&self.attempts[index])
    }
}
