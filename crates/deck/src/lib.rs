// ABOUTME: Shared output shape for the Goldfish and MTGAZone deck-list pipelines.
// ABOUTME: Re-exports Board, Links, Deck, DeckLists, DeckError and the aggregation policy.

//! Common types for deck-list extraction.
//!
//! Both site pipelines produce the same plain data: boards mapping card names
//! to copy counts, and ordered deck-name to URL listings. Nothing in here
//! touches HTML.

pub mod aggregate;
pub mod error;
pub mod models;

pub use aggregate::{FormatDecks, Metagame, Rejection};
pub use error::{DeckError, Result};
pub use models::{Board, Deck, DeckLists, Links};
