// ABOUTME: Aggregation policy applied by callers after deck pages are parsed.
// ABOUTME: Rejects conflicting names and empty mainboards; groups accepted decks by format.

//! Metagame aggregation.
//!
//! The parsers surface exactly what a page contains. Deciding which decks to
//! keep happens here:
//! - the deck name from the listing page replaces the name read from the deck page;
//! - a name that was already accepted is rejected as a conflict;
//! - a deck whose mainboard is empty is rejected.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Board, Deck};

/// Why a parsed deck was not added to a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("conflicting name")]
    Conflict,
    #[error("empty mainboard")]
    EmptyMainboard,
}

/// Accepted decks of a single format, keyed by listing name in acceptance order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormatDecks {
    mainboards: IndexMap<String, Board>,
    sideboards: IndexMap<String, Option<Board>>,
}

impl FormatDecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `deck` under `link_name`, or reports why it was rejected.
    pub fn accept(&mut self, link_name: &str, deck: Deck) -> Result<(), Rejection> {
        if self.mainboards.contains_key(link_name) {
            log::warn!("{} is a conflicting name and will not be saved", link_name);
            return Err(Rejection::Conflict);
        }
        if deck.main.is_empty() {
            log::warn!("{} has an empty mainboard and will not be saved", link_name);
            return Err(Rejection::EmptyMainboard);
        }
        if deck.name != link_name {
            log::debug!("page name {:?} replaced by listing name {:?}", deck.name, link_name);
        }
        self.mainboards.insert(link_name.to_string(), deck.main);
        self.sideboards.insert(link_name.to_string(), deck.side);
        Ok(())
    }

    pub fn mainboards(&self) -> &IndexMap<String, Board> {
        &self.mainboards
    }

    pub fn sideboards(&self) -> &IndexMap<String, Option<Board>> {
        &self.sideboards
    }

    /// Returns the accepted deck stored under `name`.
    pub fn get(&self, name: &str) -> Option<Deck> {
        let main = self.mainboards.get(name)?;
        let side = self.sideboards.get(name).cloned().flatten();
        Some(Deck::new(name, main.clone(), side))
    }

    pub fn len(&self) -> usize {
        self.mainboards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mainboards.is_empty()
    }
}

/// Accepted decks across several formats.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metagame {
    formats: IndexMap<String, FormatDecks>,
}

impl Metagame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the decks of `format`, replacing any previous entry for it.
    pub fn insert(&mut self, format: impl Into<String>, decks: FormatDecks) {
        let format = format.into();
        log::info!("{}: {} decks collected", format, decks.len());
        self.formats.insert(format, decks);
    }

    pub fn format(&self, format: &str) -> Option<&FormatDecks> {
        self.formats.get(format)
    }

    pub fn formats(&self) -> impl Iterator<Item = (&str, &FormatDecks)> {
        self.formats.iter().map(|(name, decks)| (name.as_str(), decks))
    }

    /// Mainboards grouped by format.
    pub fn mainboards(&self) -> IndexMap<&str, &IndexMap<String, Board>> {
        self.formats
            .iter()
            .map(|(name, decks)| (name.as_str(), decks.mainboards()))
            .collect()
    }

    /// Sideboards of every format flattened by deck name. Decks without a
    /// sideboard are left out; a name seen in a later format replaces an
    /// earlier one.
    pub fn sideboards(&self) -> IndexMap<String, Board> {
        let mut out = IndexMap::new();
        for decks in self.formats.values() {
            for (name, side) in decks.sideboards() {
                if let Some(side) = side {
                    out.insert(name.clone(), side.clone());
                }
            }
        }
        out
    }
}
