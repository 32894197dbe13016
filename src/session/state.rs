//! Session snapshot: the base word and the words accepted so far.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Accepted words, most recent first.
///
/// Uses `im::Vector` so snapshots clone in O(1) and front insertion stays
/// cheap as the history grows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedWords(Vector<String>);

impl UsedWords {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` as the most recent entry.
    pub fn push_front(&mut self, word: String) {
        self.0.push_front(word);
    }

    /// Most recent entry.
    #[must_use]
    pub fn first(&self) -> Option<&String> {
        self.0.front()
    }

    /// Entry at `index`, 0 being the most recent.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&String> {
        self.0.get(index)
    }

    /// Iterate from most recent to oldest.
    pub fn iter(&self) -> im::vector::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy into a `Vec`, most recent first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl From<Vec<String>> for UsedWords {
    fn from(words: Vec<String>) -> Self {
        Self(words.into_iter().collect())
    }
}

impl FromIterator<String> for UsedWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a UsedWords {
    type Item = &'a String;
    type IntoIter = im::vector::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything that survives a restart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Word whose letters candidates are spelled from.
    pub base_word: String,
    /// Accepted words, most recent first.
    pub used_words: UsedWords,
}

impl SessionState {
    /// Start a session on `base_word` with no accepted words.
    pub fn new(base_word: impl Into<String>) -> Self {
        Self {
            base_word: base_word.into().to_lowercase(),
            used_words: UsedWords::new(),
        }
    }

    /// Attach an existing history.
    #[must_use]
    pub fn with_used_words(mut self, used_words: impl Into<UsedWords>) -> Self {
        self.used_words = used_words.into();
        self
    }

    /// Repair a snapshot read back from storage.
    ///
    /// Lowercases everything and drops repeated entries, keeping the most
    /// recent one. Dictionary status is not rechecked.
    #[must_use]
    pub fn normalized(self) -> Self {
        let base_word = self.base_word.to_lowercase();
        let mut seen = FxHashSet::default();
        let mut dropped = 0usize;

        let used_words: UsedWords = self
            .used_words
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| {
                let keep = seen.insert(w.clone());
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();

        if dropped > 0 {
            warn!(base_word = %base_word, dropped, "dropped repeated words from saved session");
        }

        Self {
            base_word,
            used_words,
        }
    }
}
