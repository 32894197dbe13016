//! # rust-anagrams
//!
//! Word validation and session engine for a single-round anagram game.
//!
//! A session picks a base word, accepts candidate words spelled from its
//! letters, and keeps the accepted words across restarts.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Validation takes (base, accepted words, candidate) and
//!    returns a verdict. It never touches storage or mutates history.
//!
//! 2. **Injected Collaborators**: The dictionary, the key-value store, and the
//!    random base word choice are all traits, so a session runs offline and
//!    deterministically under test.
//!
//! 3. **Recoverable Infrastructure**: Unreadable saves start a new game;
//!    failed writes leave play running in memory.
//!
//! ## Modules
//!
//! - `core`: Configuration, random base word choice, letter pools
//! - `words`: Base word list
//! - `dictionary`: Dictionary oracle trait and an in-memory word set
//! - `rules`: The four validation checks and `ValidationEngine`
//! - `storage`: Key-value stores and snapshot codecs
//! - `session`: Session snapshot and the `GameSession` controller
//! - `error`: Infrastructure error types

pub mod core;
pub mod words;
pub mod dictionary;
pub mod rules;
pub mod storage;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, SaveCodec,
    WordChooser, WordRng, FixedChooser,
    LetterPool,
};

pub use crate::words::WordList;

pub use crate::dictionary::{Dictionary, WordSet, AcceptAll, RejectAll};

pub use crate::rules::{RejectionReason, ValidationEngine};

pub use crate::storage::{KeyValueStore, MemoryStore, FileStore};

pub use crate::session::{
    GameSession, GameSessionBuilder, SessionPhase, LoadOutcome, Accepted,
    SessionState, UsedWords,
};

pub use crate::error::{StoreError, CodecError, ConfigError, WordListError, PersistError, SubmitError};
