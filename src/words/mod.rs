//! Base word list.
//!
//! The list is read once at startup from newline-separated text and is
//! read-only afterwards. It is never empty: when the source yields no words,
//! the configured default word stands in.

use std::path::Path;

use tracing::{debug, warn};

use crate::core::{WordChooser, DEFAULT_WORD};

/// Words bundled with the crate.
pub const BUNDLED_WORDS: &str = include_str!("../../assets/start.txt");

/// Candidate base words for new sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl Default for WordList {
    fn default() -> Self {
        Self::bundled()
    }
}

impl WordList {
    /// Build a list from newline-separated text.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped. An empty
    /// result falls back to `default_word`.
    #[must_use]
    pub fn from_text(text: &str, default_word: &str) -> Self {
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self::from_words(words, default_word)
    }

    /// Build a list from already-split words.
    #[must_use]
    pub fn from_words(words: Vec<String>, default_word: &str) -> Self {
        if words.is_empty() {
            warn!(default_word, "word list is empty, falling back to default word");
            return Self {
                words: vec![default_word.to_lowercase()],
            };
        }
        Self { words }
    }

    /// The list shipped with the crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_WORDS, DEFAULT_WORD)
    }

    /// Read a word file. An unreadable file is reported and treated as empty.
    #[must_use]
    pub fn load_or_default(path: &Path, default_word: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let list = Self::from_text(&text, default_word);
                debug!(path = %path.display(), words = list.len(), "loaded word list");
                list
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read word list");
                Self::from_words(Vec::new(), default_word)
            }
        }
    }

    /// Pick one word using `chooser`.
    ///
    /// Out-of-range picks are clamped to the last word.
    pub fn choose(&self, chooser: &mut impl WordChooser) -> &str {
        let idx = chooser
            .choose_index(self.words.len())
            .unwrap_or(0)
            .min(self.words.len() - 1);
        &self.words[idx]
    }

    /// All words in file order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
