//! Game configuration.
//!
//! Everything a session needs to know that is not the word list, the
//! dictionary, or the store. Loadable from TOML; every field has a default,
//! so an empty file is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Key under which the session snapshot is stored.
pub const DEFAULT_STORAGE_KEY: &str = "saved words";

/// Base word used when the word list is empty.
pub const DEFAULT_WORD: &str = "silkworm";

/// Shortest candidate the real-word check accepts.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// On-disk shape of a saved session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveCodec {
    /// `{"base_word": "...", "used_words": [...]}` as JSON.
    #[default]
    Json,
    /// `{"<base word>": [...]}` as JSON, matching older saves.
    LegacyMap,
    /// The flat struct as bincode.
    Bincode,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Language passed to the dictionary oracle.
    pub language: String,

    /// Minimum candidate length, counted in characters.
    pub min_word_length: usize,

    /// Store key for the session snapshot.
    pub storage_key: String,

    /// Fallback base word.
    pub default_word: String,

    /// Format used when writing snapshots.
    pub codec: SaveCodec,

    /// Seed for base word selection. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_word: DEFAULT_WORD.to_string(),
            codec: SaveCodec::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dictionary language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the minimum candidate length.
    #[must_use]
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Set the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the fallback base word.
    #[must_use]
    pub fn with_default_word(mut self, word: impl Into<String>) -> Self {
        self.default_word = word.into();
        self
    }

    /// Set the save format.
    #[must_use]
    pub fn with_codec(mut self, codec: SaveCodec) -> Self {
        self.codec = codec;
        self
    }

    /// Pin the base word RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::Validation("language must not be empty".into()));
        }
        if self.min_word_length == 0 {
            return Err(ConfigError::Validation(
                "min_word_length must be > 0".into(),
            ));
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::Validation(
                "storage_key must not be empty".into(),
            ));
        }
        if self.default_word.trim().is_empty() {
            return Err(ConfigError::Validation(
                "default_word must not be empty".into(),
            ));
        }
        if self.default_word != self.default_word.trim().to_lowercase() {
            return Err(ConfigError::Validation(
                "default_word must be lowercase with no surrounding whitespace".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.storage_key, "saved words");
        assert_eq!(config.default_word, "silkworm");
        assert_eq!(config.codec, SaveCodec::Json);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_language("fr")
            .with_min_word_length(4)
            .with_storage_key("slot")
            .with_default_word("papillon")
            .with_codec(SaveCodec::Bincode)
            .with_seed(9);

        assert_eq!(config.language, "fr");
        assert_eq!(config.min_word_length, 4);
        assert_eq!(config.storage_key, "slot");
        assert_eq!(config.default_word, "papillon");
        assert_eq!(config.codec, SaveCodec::Bincode);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GameConfig::from_toml("min_word_length = 4\ncodec = \"legacy_map\"\n").unwrap();
        assert_eq!(config.min_word_length, 4);
        assert_eq!(config.codec, SaveCodec::LegacyMap);
        assert_eq!(config.storage_key, "saved words");
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_from_toml_bad_syntax() {
        assert!(matches!(
            GameConfig::from_toml("min_word_length = ["),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_validation_failures() {
        let zero = GameConfig::new().with_min_word_length(0);
        assert!(matches!(zero.validate(), Err(ConfigError::Validation(_))));

        let no_key = GameConfig::new().with_storage_key("");
        assert!(no_key.validate().is_err());

        let upper = GameConfig::new().with_default_word("Silkworm");
        assert!(upper.validate().is_err());

        let blank = GameConfig::new().with_default_word("  ");
        assert!(blank.validate().is_err());

        let no_lang = GameConfig::new().with_language("");
        assert!(no_lang.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("/nonexistent/anagrams.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(matches!(
            GameConfig::load(Path::new("/nonexistent/anagrams.toml")),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
