use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const HIDDEN_GOOD_CLUES: usize = 3;
pub const INFORMED_GOOD_CLUES: usize = 2;
pub const INFORMED_BAD_CLUES: usize = 1;

/// A secret word together with its true and decoy clues.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub good_clues: Vec<String>,
    #[serde(default)]
    pub bad_clues: Vec<String>,
}

/// The full list of playable words, as stored on disk.
#[derive(Clone, Deserialize, Debug)]
pub struct Corpus {
    words: Vec<WordEntry>,
}

#[derive(Clone, Copy, Serialize, PartialEq, Eq, Debug)]
pub enum ClueKind {
    Good,
    Bad,
}

/// A clue as revealed to the table.
#[derive(Clone, Serialize, PartialEq, Eq, Debug)]
pub struct Clue {
    pub text: String,
    pub kind: ClueKind,
}

impl Corpus {
    pub fn new(words: Vec<WordEntry>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyCorpus);
        }
        if let Some(index) = words.iter().position(|e| e.word.trim().is_empty()) {
            return Err(GameError::BlankWord(index));
        }
        Ok(Self { words })
    }

    /// Reads a corpus from a JSON file of the form `{"words": [...]}`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let data = std::fs::read_to_string(path).map_err(|source| GameError::CorpusUnreadable {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&data).map_err(|err| match err {
            GameError::CorpusMalformed { source, .. } => GameError::CorpusMalformed { path: display, source },
            other => other,
        })
    }

    pub fn from_json(data: &str) -> Result<Self, GameError> {
        let corpus: Corpus = serde_json::from_str(data).map_err(|source| GameError::CorpusMalformed {
            path: "<inline>".to_string(),
            source,
        })?;
        Self::new(corpus.words)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.words
    }

    /// Picks one entry uniformly at random.
    pub fn choose(&self, rng: &mut impl Rng) -> &WordEntry {
        // The constructor guarantees at least one entry.
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

impl WordEntry {
    /// Three distinct good clues, for the hidden saboteur mode.
    pub fn hidden_clues(&self, rng: &mut impl Rng) -> Result<Vec<Clue>, GameError> {
        sample(&self.word, &self.good_clues, ClueKind::Good, HIDDEN_GOOD_CLUES, rng)
    }

    /// Two good clues and one bad clue in random order, for the informed saboteur mode.
    pub fn informed_clues(&self, rng: &mut impl Rng) -> Result<Vec<Clue>, GameError> {
        let mut clues = sample(&self.word, &self.good_clues, ClueKind::Good, INFORMED_GOOD_CLUES, rng)?;
        clues.extend(sample(&self.word, &self.bad_clues, ClueKind::Bad, INFORMED_BAD_CLUES, rng)?);
        clues.shuffle(rng);
        Ok(clues)
    }
}

/// Draws `count` clues without replacement.
fn sample(word: &str, pool: &[String], kind: ClueKind, count: usize, rng: &mut impl Rng) -> Result<Vec<Clue>, GameError> {
    if pool.len() < count {
        return Err(GameError::NotEnoughClues {
            word: word.to_string(),
            kind: match kind {
                ClueKind::Good => "good",
                ClueKind::Bad => "bad",
            },
            needed: count,
            available: pool.len(),
        });
    }
    Ok(pool
        .choose_multiple(rng, count)
        .map(|text| Clue { text: text.clone(), kind })
        .collect())
}
