//! In-memory word set dictionary.

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::debug;

use super::Dictionary;
use crate::error::WordListError;

/// Dictionary backed by a set of known words for a single language.
///
/// ## Example
///
/// ```
/// use rust_anagrams::dictionary::{Dictionary, WordSet};
///
/// let dict = WordSet::from_text("en", "milk\nsilk\nworm\n");
/// assert!(dict.is_recognized("silk", "en"));
/// assert!(dict.is_recognized("Silk", "en"));
/// assert!(!dict.is_recognized("silk", "fr"));
/// assert!(!dict.is_recognized("slik", "en"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    language: String,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Create an empty word set for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            words: FxHashSet::default(),
        }
    }

    /// Build a word set from newline-separated text.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    pub fn from_text(language: impl Into<String>, text: &str) -> Self {
        let mut set = Self::new(language);
        set.extend(text.lines());
        set
    }

    /// Read a newline-separated word file.
    pub fn load(language: impl Into<String>, path: &Path) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path).map_err(|e| WordListError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let set = Self::from_text(language, &text);
        debug!(path = %path.display(), words = set.len(), "loaded dictionary");
        Ok(set)
    }

    /// Add a single word.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Language this set answers for.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of known words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> Extend<&'a str> for WordSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl Dictionary for WordSet {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(&word.to_lowercase())
    }
}
