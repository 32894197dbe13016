//! Validation of candidate words.
//!
//! A candidate is checked against four rules, in order, and the first
//! failure decides the outcome:
//! 1. It is not the base word itself
//! 2. It can be spelled from the base word's letters
//! 3. It has not been accepted before
//! 4. It is long enough and the dictionary recognizes it
//!
//! Validation never mutates anything. Recording an accepted word is the
//! session's job.

use std::fmt;

use tracing::debug;

use crate::core::{GameConfig, LetterPool};
use crate::dictionary::Dictionary;

/// Why a candidate was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The candidate is the base word.
    SameAsBase,
    /// The base word lacks some letter, or enough copies of it.
    NotSpellableFromBase,
    /// The candidate was already accepted this session.
    AlreadyUsed,
    /// Too short, or unknown to the dictionary.
    NotARecognizedWord,
}

impl RejectionReason {
    /// Short heading for display.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            RejectionReason::SameAsBase => "Same word",
            RejectionReason::NotSpellableFromBase => "Word not possible",
            RejectionReason::AlreadyUsed => "Word already used",
            RejectionReason::NotARecognizedWord => "Word not recognized",
        }
    }

    /// Explanation for display, mentioning the base word where it helps.
    #[must_use]
    pub fn message(self, base: &str) -> String {
        match self {
            RejectionReason::SameAsBase => "Find a word other than the one you were given.".to_string(),
            RejectionReason::NotSpellableFromBase => {
                format!("You can't spell that word from {}.", base.to_lowercase())
            }
            RejectionReason::AlreadyUsed => "You found that one already.".to_string(),
            RejectionReason::NotARecognizedWord => "That isn't a word we know.".to_string(),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Check that `candidate` differs from `base`, ignoring case.
#[must_use]
pub fn is_not_base(base: &str, candidate: &str) -> bool {
    candidate.to_lowercase() != base.to_lowercase()
}

/// Check that every letter of `candidate` can be drawn from `base`, each base
/// letter used at most once.
#[must_use]
pub fn is_spellable(base: &str, candidate: &str) -> bool {
    LetterPool::new(base).take_word(candidate)
}

/// Check that `candidate` is not among `used`, ignoring case.
#[must_use]
pub fn is_original<I, S>(used: I, candidate: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidate = candidate.to_lowercase();
    !used
        .into_iter()
        .any(|word| word.as_ref().to_lowercase() == candidate)
}

/// Check that `candidate` has at least `min_len` characters and that the
/// dictionary knows it.
///
/// Length is tested first, so short words never reach the dictionary.
#[must_use]
pub fn is_real<D: Dictionary + ?Sized>(
    dictionary: &D,
    language: &str,
    min_len: usize,
    candidate: &str,
) -> bool {
    candidate.chars().count() >= min_len && dictionary.is_recognized(candidate, language)
}

/// Rule evaluation bound to a dictionary and language.
///
/// ## Example
///
/// ```
/// use rust_anagrams::core::GameConfig;
/// use rust_anagrams::dictionary::WordSet;
/// use rust_anagrams::rules::{RejectionReason, ValidationEngine};
///
/// let engine = ValidationEngine::new(WordSet::from_text("en", "loot\nlot"), &GameConfig::default());
/// let used: Vec<String> = Vec::new();
///
/// assert_eq!(engine.validate("tool", &used, "loot"), Ok(()));
/// assert_eq!(engine.validate("tool", &used, "TOOL"), Err(RejectionReason::SameAsBase));
/// assert_eq!(engine.validate("tool", &used, "lo"), Err(RejectionReason::NotARecognizedWord));
/// ```
#[derive(Clone, Debug)]
pub struct ValidationEngine<D> {
    dictionary: D,
    language: String,
    min_word_length: usize,
}

impl<D: Dictionary> ValidationEngine<D> {
    /// Create an engine using the language and length limit from `config`.
    pub fn new(dictionary: D, config: &GameConfig) -> Self {
        Self {
            dictionary,
            language: config.language.clone(),
            min_word_length: config.min_word_length,
        }
    }

    /// Decide whether `candidate` is acceptable for `base` given the words
    /// already accepted.
    ///
    /// Deterministic for a deterministic dictionary.
    pub fn validate<I, S>(&self, base: &str, used: I, candidate: &str) -> Result<(), RejectionReason>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidate = candidate.to_lowercase();
        let result = self.check(base, used, &candidate);
        debug!(base, candidate = %candidate, ?result, "validated candidate");
        result
    }

    fn check<I, S>(&self, base: &str, used: I, candidate: &str) -> Result<(), RejectionReason>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !is_not_base(base, candidate) {
            return Err(RejectionReason::SameAsBase);
        }
        if !is_spellable(base, candidate) {
            return Err(RejectionReason::NotSpellableFromBase);
        }
        if !is_original(used, candidate) {
            return Err(RejectionReason::AlreadyUsed);
        }
        if !is_real(&self.dictionary, &self.language, self.min_word_length, candidate) {
            return Err(RejectionReason::NotARecognizedWord);
        }
        Ok(())
    }

    /// The dictionary consulted by the real-word check.
    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Language passed to the dictionary.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Minimum accepted length.
    #[must_use]
    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{AcceptAll, RejectAll};

    fn engine() -> ValidationEngine<AcceptAll> {
        ValidationEngine::new(AcceptAll, &GameConfig::default())
    }

    #[test]
    fn test_is_not_base() {
        assert!(!is_not_base("tool", "tool"));
        assert!(!is_not_base("Tool", "tOOL"));
        assert!(is_not_base("tool", "loot"));
    }

    #[test]
    fn test_is_spellable_multiset() {
        assert!(is_spellable("tool", "loot"));
        assert!(!is_spellable("too", "tool"));
        assert!(is_spellable("silkworm", "silk"));
        assert!(!is_spellable("silkworm", "silks"));
    }

    #[test]
    fn test_is_original() {
        let used = vec!["loot".to_string(), "lot".to_string()];
        assert!(!is_original(&used, "LOT"));
        assert!(is_original(&used, "too"));
        assert!(is_original(Vec::<String>::new(), "too"));
    }

    #[test]
    fn test_is_real_length_and_dictionary() {
        assert!(!is_real(&AcceptAll, "en", 3, "lo"));
        assert!(is_real(&AcceptAll, "en", 3, "lot"));
        assert!(!is_real(&RejectAll, "en", 3, "lot"));
    }

    #[test]
    fn test_check_order_same_before_spellable() {
        let used = vec!["tool".to_string()];
        assert_eq!(engine().validate("tool", &used, "tool"), Err(RejectionReason::SameAsBase));
    }

    #[test]
    fn test_check_order_spellable_before_used() {
        let used = vec!["zzz".to_string()];
        assert_eq!(
            engine().validate("tool", &used, "zzz"),
            Err(RejectionReason::NotSpellableFromBase)
        );
    }

    #[test]
    fn test_check_order_used_before_real() {
        let engine = ValidationEngine::new(RejectAll, &GameConfig::default());
        let used = vec!["loot".to_string()];
        assert_eq!(engine.validate("tool", &used, "loot"), Err(RejectionReason::AlreadyUsed));
    }

    #[test]
    fn test_empty_candidate_is_too_short() {
        let used: Vec<String> = Vec::new();
        assert_eq!(
            engine().validate("tool", &used, ""),
            Err(RejectionReason::NotARecognizedWord)
        );
    }

    #[test]
    fn test_min_length_from_config() {
        let engine = ValidationEngine::new(AcceptAll, &GameConfig::new().with_min_word_length(4));
        let used: Vec<String> = Vec::new();
        assert_eq!(engine.min_word_length(), 4);
        assert_eq!(engine.language(), "en");
        assert_eq!(
            engine.validate("silkworm", &used, "milk"),
            Ok(())
        );
        assert_eq!(
            engine.validate("silkworm", &used, "ilk"),
            Err(RejectionReason::NotARecognizedWord)
        );
    }

    #[test]
    fn test_reason_copy() {
        assert_eq!(RejectionReason::AlreadyUsed.to_string(), "Word already used");
        assert_eq!(
            RejectionReason::NotSpellableFromBase.message("Silkworm"),
            "You can't spell that word from silkworm."
        );
    }
}
