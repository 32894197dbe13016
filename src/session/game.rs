//! Game session: owns the base word and the accepted words.
//!
//! ## Lifecycle
//!
//! A session starts `Fresh`. It becomes `Active` either by restoring a saved
//! snapshot ([`GameSession::load_or_start`], [`GameSession::resume`]) or by
//! picking a new base word ([`GameSession::start_new_game`]). Submissions are
//! only accepted while `Active`.
//!
//! Every change to the snapshot is written to the store. Write failures are
//! logged and otherwise ignored: play continues in memory, and the next
//! successful write catches the store up.

use tracing::{debug, info, warn};

use crate::core::{GameConfig, WordChooser, WordRng};
use crate::dictionary::Dictionary;
use crate::error::{PersistError, SubmitError};
use crate::rules::ValidationEngine;
use crate::storage::{codec, KeyValueStore};
use crate::words::WordList;

use super::state::{SessionState, UsedWords};

/// Where a session is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No base word chosen yet.
    Fresh,
    /// Playing on a base word.
    Active(SessionState),
}

/// A word that was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    /// The word as recorded, lowercased.
    pub word: String,
    /// Position in the accepted list. Always 0: new words go first.
    pub index: usize,
    /// Whether the updated snapshot reached the store.
    pub persisted: bool,
}

/// How a session got its initial state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A saved snapshot was adopted.
    Restored,
    /// Nothing was saved, so a new game was started.
    NewGame,
    /// The saved bytes could not be decoded; a new game was started.
    Discarded,
}

/// Builder for a [`GameSession`].
pub struct GameSessionBuilder<D, S> {
    dictionary: D,
    store: S,
    config: GameConfig,
    words: Option<WordList>,
}

impl<D: Dictionary, S: KeyValueStore> GameSessionBuilder<D, S> {
    /// Use `config` instead of the defaults.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `words` instead of the bundled list.
    #[must_use]
    pub fn words(mut self, words: WordList) -> Self {
        self.words = Some(words);
        self
    }

    /// Build a session choosing base words with a [`WordRng`] seeded from
    /// the configuration, or from entropy if no seed is set.
    ///
    /// An invalid configuration is replaced by the defaults.
    pub fn build(mut self) -> GameSession<D, S, WordRng> {
        self.config = checked_config(self.config);
        let rng = match self.config.seed {
            Some(seed) => WordRng::new(seed),
            None => WordRng::from_entropy(),
        };
        self.build_with_chooser(rng)
    }

    /// Build a session choosing base words with `chooser`.
    ///
    /// An invalid configuration is replaced by the defaults.
    pub fn build_with_chooser<C: WordChooser>(mut self, chooser: C) -> GameSession<D, S, C> {
        self.config = checked_config(self.config);
        let words = self
            .words
            .unwrap_or_else(|| WordList::from_text(crate::words::BUNDLED_WORDS, &self.config.default_word));
        GameSession {
            engine: ValidationEngine::new(self.dictionary, &self.config),
            config: self.config,
            words,
            store: self.store,
            chooser,
            phase: SessionPhase::Fresh,
        }
    }
}

fn checked_config(config: GameConfig) -> GameConfig {
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!(error = %e, "invalid game config, using defaults");
            GameConfig::default()
        }
    }
}

/// Single-player anagram session.
pub struct GameSession<D, S, C = WordRng> {
    config: GameConfig,
    words: WordList,
    engine: ValidationEngine<D>,
    store: S,
    chooser: C,
    phase: SessionPhase,
}

impl<D: Dictionary, S: KeyValueStore> GameSession<D, S, WordRng> {
    /// Start building a session around a dictionary and a store.
    pub fn builder(dictionary: D, store: S) -> GameSessionBuilder<D, S> {
        GameSessionBuilder {
            dictionary,
            store,
            config: GameConfig::default(),
            words: None,
        }
    }
}

impl<D: Dictionary, S: KeyValueStore, C: WordChooser> GameSession<D, S, C> {
    /// Pick a new base word and clear the accepted words.
    ///
    /// The new snapshot is written to the store; returns whether that
    /// write succeeded.
    pub fn start_new_game(&mut self) -> bool {
        let base = self.words.choose(&mut self.chooser).to_string();
        info!(base_word = %base, "starting new game");

        self.phase = SessionPhase::Active(SessionState::new(base));
        self.persist()
    }

    /// Adopt a saved snapshot, or start a new game if there is none or it
    /// cannot be decoded.
    ///
    /// Restoring does not write to the store.
    pub fn load_or_start(&mut self, persisted: Option<&[u8]>) -> LoadOutcome {
        let Some(bytes) = persisted else {
            self.start_new_game();
            return LoadOutcome::NewGame;
        };

        match codec::decode(bytes, self.config.codec) {
            Ok(state) => {
                let state = state.normalized();
                info!(
                    base_word = %state.base_word,
                    used = state.used_words.len(),
                    "restored saved game"
                );
                self.phase = SessionPhase::Active(state);
                LoadOutcome::Restored
            }
            Err(e) => {
                warn!(error = %e, "failed to decode saved game, starting a new one");
                self.start_new_game();
                LoadOutcome::Discarded
            }
        }
    }

    /// Read the configured key from the store and hand it to
    /// [`load_or_start`](Self::load_or_start).
    ///
    /// A read failure counts as nothing saved.
    pub fn resume(&mut self) -> LoadOutcome {
        let persisted = match self.store.get(&self.config.storage_key) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "failed to read saved game");
                None
            }
        };
        self.load_or_start(persisted.as_deref())
    }

    /// Validate `candidate` and record it if it passes.
    ///
    /// Rejections leave the session and the store untouched.
    pub fn submit(&mut self, candidate: &str) -> Result<Accepted, SubmitError> {
        let SessionPhase::Active(state) = &mut self.phase else {
            return Err(SubmitError::NotStarted);
        };

        self.engine
            .validate(&state.base_word, &state.used_words, candidate)
            .map_err(|reason| {
                debug!(candidate, %reason, "rejected candidate");
                SubmitError::Rejected(reason)
            })?;

        let word = candidate.to_lowercase();
        state.used_words.push_front(word.clone());
        info!(word = %word, total = state.used_words.len(), "accepted word");

        let persisted = self.persist();
        Ok(Accepted {
            word,
            index: 0,
            persisted,
        })
    }

    /// Write the current snapshot to the store.
    ///
    /// Does nothing while `Fresh`.
    pub fn save(&mut self) -> Result<(), PersistError> {
        let SessionPhase::Active(state) = &self.phase else {
            return Ok(());
        };
        let bytes = codec::encode(state, self.config.codec)?;
        self.store.set(&self.config.storage_key, &bytes)?;
        Ok(())
    }

    fn persist(&mut self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to save game, continuing in memory");
                false
            }
        }
    }

    // === Accessors ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Check if a base word has been chosen.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, SessionPhase::Active(_))
    }

    /// Current snapshot, if any.
    #[must_use]
    pub fn state(&self) -> Option<&SessionState> {
        match &self.phase {
            SessionPhase::Active(state) => Some(state),
            SessionPhase::Fresh => None,
        }
    }

    /// Current base word, if any.
    #[must_use]
    pub fn base_word(&self) -> Option<&str> {
        self.state().map(|s| s.base_word.as_str())
    }

    /// Accepted words, most recent first, if a game is in progress.
    #[must_use]
    pub fn used_words(&self) -> Option<&UsedWords> {
        self.state().map(|s| &s.used_words)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn engine(&self) -> &ValidationEngine<D> {
        &self.engine
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give back the store, ending the session.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedChooser, SaveCodec};
    use crate::dictionary::{AcceptAll, WordSet};
    use crate::rules::RejectionReason;
    use crate::storage::MemoryStore;

    fn session() -> GameSession<WordSet, MemoryStore, FixedChooser> {
        GameSession::builder(WordSet::from_text("en", "loot\nlot\nto"), MemoryStore::new())
            .words(WordList::from_text("tool", "silkworm"))
            .build_with_chooser(FixedChooser(0))
    }

    #[test]
    fn test_fresh_rejects_submit() {
        let mut game = session();
        assert!(!game.is_active());
        assert_eq!(game.submit("loot"), Err(SubmitError::NotStarted));
        assert_eq!(game.base_word(), None);
    }

    #[test]
    fn test_start_new_game_persists() {
        let mut game = session();
        assert!(game.start_new_game());
        let state = game.state().unwrap().clone();

        assert_eq!(state.base_word, "tool");
        assert!(state.used_words.is_empty());

        let saved = game.store().get("saved words").unwrap().unwrap();
        assert_eq!(codec::decode(&saved, SaveCodec::Json).unwrap(), state);
    }

    #[test]
    fn test_submit_accepts_and_prepends() {
        let mut game = session();
        game.start_new_game();

        let first = game.submit("LOOT").unwrap();
        assert_eq!(first.word, "loot");
        assert_eq!(first.index, 0);
        assert!(first.persisted);

        game.submit("lot").unwrap();
        assert_eq!(
            game.used_words().unwrap().to_vec(),
            vec!["lot".to_string(), "loot".to_string()]
        );
    }

    #[test]
    fn test_rejection_leaves_store_untouched() {
        let mut game = session();
        game.start_new_game();
        let before = game.store().get("saved words").unwrap();

        assert_eq!(
            game.submit("to"),
            Err(SubmitError::Rejected(RejectionReason::NotARecognizedWord))
        );
        assert_eq!(game.store().get("saved words").unwrap(), before);
        assert!(game.used_words().unwrap().is_empty());
    }

    #[test]
    fn test_start_new_game_clears_history() {
        let mut game = session();
        game.start_new_game();
        game.submit("loot").unwrap();

        game.start_new_game();
        assert!(game.used_words().unwrap().is_empty());
    }

    #[test]
    fn test_builder_default_words_and_seed() {
        let game = GameSession::builder(AcceptAll, MemoryStore::new())
            .config(GameConfig::new().with_seed(7))
            .build();
        assert!(game.words().len() > 1);
        assert_eq!(game.config().seed, Some(7));
        assert_eq!(game.engine().min_word_length(), 3);
        assert_eq!(game.phase(), &SessionPhase::Fresh);
    }

    #[test]
    fn test_save_while_fresh_is_noop() {
        let mut game = session();
        game.save().unwrap();
        assert!(game.into_store().is_empty());
    }

    #[test]
    fn test_builder_replaces_invalid_config() {
        let mut game = GameSession::builder(WordSet::from_text("en", "loot\nlot\nto"), MemoryStore::new())
            .config(GameConfig::new().with_min_word_length(0).with_storage_key("slot"))
            .words(WordList::from_text("tool", "silkworm"))
            .build_with_chooser(FixedChooser(0));

        assert_eq!(game.config(), &GameConfig::default());
        assert_eq!(game.engine().min_word_length(), 3);

        game.start_new_game();
        assert_eq!(game.submit("to"), Err(SubmitError::Rejected(RejectionReason::NotARecognizedWord)));
        assert!(game.store().get("saved words").unwrap().is_some());
        assert_eq!(game.store().get("slot").unwrap(), None);
    }

    #[test]
    fn test_build_replaces_invalid_config() {
        let game = GameSession::builder(AcceptAll, MemoryStore::new())
            .config(GameConfig::new().with_default_word("  ").with_seed(9))
            .build();
        assert_eq!(game.config().default_word, "silkworm");
        assert_eq!(game.config().seed, None);
    }
}
