//! Persistence of session snapshots.
//!
//! - `store`: byte-oriented key-value stores (in-memory and file-backed)
//! - `codec`: conversion between `SessionState` and bytes
//!
//! Writes overwrite: the last successful `set` for a key wins.

pub mod codec;
pub mod store;

pub use codec::{decode, encode};
pub use store::{FileStore, KeyValueStore, MemoryStore};
