//! Core building blocks: configuration, random choice, letter pools.
//!
//! Nothing in here knows about sessions or storage.

pub mod config;
pub mod letters;
pub mod rng;

pub use config::{GameConfig, SaveCodec, DEFAULT_MIN_WORD_LENGTH, DEFAULT_STORAGE_KEY, DEFAULT_WORD};
pub use letters::LetterPool;
pub use rng::{FixedChooser, WordChooser, WordRng};
