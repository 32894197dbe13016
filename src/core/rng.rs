//! Seedable random choice of base words.
//!
//! ## Key Features
//!
//! - **Injectable**: sessions take any [`WordChooser`], so tests can pin the
//!   base word without touching randomness at all
//! - **Deterministic**: same seed produces identical picks
//!
//! ```
//! use rust_anagrams::core::{WordChooser, WordRng};
//!
//! let mut rng1 = WordRng::new(42);
//! let mut rng2 = WordRng::new(42);
//! assert_eq!(rng1.choose_index(10), rng2.choose_index(10));
//!
//! assert_eq!(rng1.choose_index(0), None);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks one index out of `len` candidates.
///
/// Returns `None` only when `len == 0`.
pub trait WordChooser {
    fn choose_index(&mut self, len: usize) -> Option<usize>;
}

impl<C: WordChooser + ?Sized> WordChooser for &mut C {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (**self).choose_index(len)
    }
}

impl<C: WordChooser + ?Sized> WordChooser for Box<C> {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (**self).choose_index(len)
    }
}

/// Uniform chooser backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct WordRng {
    inner: ChaCha8Rng,
}

impl WordRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }
}

impl WordChooser for WordRng {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }
}

/// Always picks the same index, clamped to the list length.
///
/// Useful for tests and for replaying a known base word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedChooser(pub usize);

impl WordChooser for FixedChooser {
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.0.min(len - 1))
    }
}
