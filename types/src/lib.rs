//! Core domain types for mobspawn.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod matching;
mod spawn_reason;

pub use matching::{MatchingParseError, NameMatching};
pub use spawn_reason::{MobSpawnReason, UnknownVariant};
