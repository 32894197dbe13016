//! Letter multiset used by the spellability check.

use smallvec::SmallVec;

/// The letters of a word, consumable one occurrence at a time.
///
/// Backed by a `SmallVec` so base words of ordinary length never allocate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterPool {
    letters: SmallVec<[char; 16]>,
}

impl LetterPool {
    /// Build a pool from the lowercased characters of `word`.
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            letters: word.to_lowercase().chars().collect(),
        }
    }

    /// Remove one occurrence of `letter`.
    ///
    /// Returns false if no occurrence is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Consume every character of `word`, lowercased.
    ///
    /// Stops at the first character the pool cannot supply.
    pub fn take_word(&mut self, word: &str) -> bool {
        word.to_lowercase().chars().all(|c| self.take(c))
    }

    /// Letters still available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if every letter has been used.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
