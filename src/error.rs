//! Error types for the infrastructure around a game session.
//!
//! Validation outcomes are not errors in this sense; see
//! [`RejectionReason`](crate::rules::RejectionReason).

use std::path::PathBuf;

use crate::rules::RejectionReason;

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage key must not be empty")]
    InvalidKey,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised while encoding or decoding a saved session.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("saved session contains no base word")]
    EmptySave,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when reading a word file.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised while writing the session snapshot.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to encode session: {0}")]
    Codec(#[from] CodecError),

    #[error("failed to store session: {0}")]
    Store(#[from] StoreError),
}

/// Why a submission did not change the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("no game in progress")]
    NotStarted,

    #[error("{0}")]
    Rejected(RejectionReason),
}

impl From<RejectionReason> for SubmitError {
    fn from(reason: RejectionReason) -> Self {
        SubmitError::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::InvalidKey.to_string(), "storage key must not be empty");
    }

    #[test]
    fn test_codec_error_display() {
        assert_eq!(
            CodecError::EmptySave.to_string(),
            "saved session contains no base word"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("min_word_length must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: min_word_length must be > 0"
        );
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(SubmitError::NotStarted.to_string(), "no game in progress");
        assert_eq!(
            SubmitError::from(RejectionReason::AlreadyUsed).to_string(),
            "Word already used"
        );
    }

    #[test]
    fn test_persist_error_wraps_store() {
        let err = PersistError::from(StoreError::InvalidKey);
        assert_eq!(
            err.to_string(),
            "failed to store session: storage key must not be empty"
        );
    }

    #[test]
    fn test_word_list_error_display() {
        let err = WordListError::Read {
            path: PathBuf::from("start.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read word file start.txt: gone");
    }
}
