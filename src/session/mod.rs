//! Session state and lifecycle.
//!
//! ## SessionState
//!
//! The persisted snapshot: base word plus accepted words, most recent first.
//!
//! ## GameSession
//!
//! The controller that owns a snapshot, routes submissions through the
//! validation rules, and writes the snapshot back after every change.

pub mod game;
pub mod state;

pub use game::{Accepted, GameSession, GameSessionBuilder, LoadOutcome, SessionPhase};
pub use state::{SessionState, UsedWords};
