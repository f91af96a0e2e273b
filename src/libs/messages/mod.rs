//! Centralized application messaging.
//!
//! All user-facing text lives in the [`Message`] enum, rendered through its
//! `Display` impl and emitted via the `msg_*` macros. Keeping the strings in
//! one place makes wording changes and review trivial.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
