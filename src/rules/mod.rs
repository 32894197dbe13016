//! Word validation rules.
//!
//! Pure functions over (base word, accepted words, candidate). The only
//! outside collaborator is the [`Dictionary`](crate::dictionary::Dictionary),
//! consulted last.

pub mod engine;

pub use engine::{is_not_base, is_original, is_real, is_spellable, RejectionReason, ValidationEngine};
