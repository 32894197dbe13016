//! Dictionary oracle.
//!
//! The engine only ever asks one question: is this a real word in this
//! language? Sessions take any [`Dictionary`], so validation runs offline
//! against a fake in tests.

mod word_set;

pub use word_set::WordSet;

/// Spell-check capability consumed by the real-word check.
pub trait Dictionary {
    /// Check whether `word` is a recognized word in `language`.
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

/// Recognizes everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn is_recognized(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

/// Recognizes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectAll;

impl Dictionary for RejectAll {
    fn is_recognized(&self, _word: &str, _language: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fakes() {
        assert!(AcceptAll.is_recognized("qwxz", "en"));
        assert!(!RejectAll.is_recognized("word", "en"));
    }

    #[test]
    fn test_boxed_dictionary() {
        let dict: Box<dyn Dictionary> = Box::new(AcceptAll);
        assert!(dict.is_recognized("milk", "en"));
    }
}
