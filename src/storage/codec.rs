//! Byte encodings of `SessionState`.
//!
//! Three shapes are supported:
//!
//! - [`SaveCodec::Json`]: `{"base_word":"silkworm","used_words":["milk"]}`
//! - [`SaveCodec::LegacyMap`]: `{"silkworm":["milk"]}`, a map with a single
//!   entry from the base word to its accepted words
//! - [`SaveCodec::Bincode`]: the flat struct in bincode
//!
//! Both JSON codecs read either JSON shape, so a save written in the legacy
//! format keeps loading after switching to the flat one. Bytes that fail in
//! the configured family are retried in the other (JSON or bincode) before
//! decoding gives up.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::core::SaveCodec;
use crate::error::CodecError;
use crate::session::{SessionState, UsedWords};

type LegacyMap = BTreeMap<String, Vec<String>>;

/// Serialize `state` in the given format.
pub fn encode(state: &SessionState, codec: SaveCodec) -> Result<Vec<u8>, CodecError> {
    let bytes = match codec {
        SaveCodec::Json => serde_json::to_vec(state)?,
        SaveCodec::LegacyMap => {
            let mut map = LegacyMap::new();
            map.insert(state.base_word.clone(), state.used_words.to_vec());
            serde_json::to_vec(&map)?
        }
        SaveCodec::Bincode => bincode::serialize(state)?,
    };
    Ok(bytes)
}

/// Deserialize a state written with `codec`, or with the other codec family.
///
/// Fails with [`CodecError::EmptySave`] when the bytes are well formed but
/// name no base word. When neither family can read the bytes, the error
/// from the configured one is returned.
pub fn decode(bytes: &[u8], codec: SaveCodec) -> Result<SessionState, CodecError> {
    let state = match decode_family(bytes, codec) {
        Ok(state) => state,
        Err(CodecError::EmptySave) => return Err(CodecError::EmptySave),
        Err(e) => {
            let other = match codec {
                SaveCodec::Json | SaveCodec::LegacyMap => SaveCodec::Bincode,
                SaveCodec::Bincode => SaveCodec::Json,
            };
            let state = match decode_family(bytes, other) {
                Ok(state) => state,
                Err(CodecError::EmptySave) => return Err(CodecError::EmptySave),
                Err(_) => return Err(e),
            };
            debug!(?codec, fallback = ?other, "decoded save with the other codec");
            state
        }
    };
    if state.base_word.is_empty() {
        return Err(CodecError::EmptySave);
    }
    Ok(state)
}

fn decode_family(bytes: &[u8], codec: SaveCodec) -> Result<SessionState, CodecError> {
    match codec {
        SaveCodec::Json | SaveCodec::LegacyMap => decode_json(bytes),
        SaveCodec::Bincode => Ok(bincode::deserialize::<SessionState>(bytes)?),
    }
}

fn decode_json(bytes: &[u8]) -> Result<SessionState, CodecError> {
    if let Ok(state) = serde_json::from_slice::<SessionState>(bytes) {
        return Ok(state);
    }

    let map: LegacyMap = serde_json::from_slice(bytes)?;
    if map.len() > 1 {
        warn!(entries = map.len(), "saved session has several base words, using the first");
    }
    let (base_word, used) = map.into_iter().next().ok_or(CodecError::EmptySave)?;
    Ok(SessionState {
        base_word,
        used_words: UsedWords::from(used),
    })
}
