use std::{collections::HashMap, fs, io, path::Path};

use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::core::Word;

const EMBEDDED: [&str; 3] = [
    include_str!("../../../words/5.txt"),
    include_str!("../../../words/6.txt"),
    include_str!("../../../words/9.txt"),
];

/// Candidate target words, grouped by length.
#[derive(Debug, Clone, Default)]
pub struct WordsList {
    by_length: HashMap<usize, Vec<Word>>,
}

impl WordsList {
    /// The lists compiled into the binary.
    pub fn embedded() -> Self {
        Self::from_lines(EMBEDDED.iter().flat_map(|list| list.lines()))
    }

    /// Reads every `*.txt` file in `dir`, one word per line.
    pub fn load(dir: &Path) -> io::Result<Self> {
        let mut contents = Vec::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                debug!(path = %path.display(), "reading words");
                contents.push(fs::read_to_string(&path)?);
            }
        }

        Ok(Self::from_lines(contents.iter().flat_map(|s| s.lines())))
    }

    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut by_length: HashMap<usize, Vec<Word>> = HashMap::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.to_uppercase().parse::<Word>() {
                Ok(word) => by_length.entry(word.len()).or_default().push(word),
                Err(err) => warn!(line, "skipping word: {err}"),
            }
        }

        Self { by_length }
    }

    pub fn random(&self, length: usize) -> Option<&Word> {
        self.by_length
            .get(&length)?
            .choose(&mut rand::thread_rng())
    }

    pub fn count(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }
}
