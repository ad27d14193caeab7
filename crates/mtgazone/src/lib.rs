// ABOUTME: MTGAZone pipeline: per-format metagame tables and tooltip-based deck pages.
// ABOUTME: Re-exports TableLinkCollector, parse_deck_page and link resolution helpers.

//! Extraction for MTGAZone pages.
//!
//! Deck pages carry their card lists as tooltip elements rather than plain
//! text, so both boards are read from the DOM.

pub mod deck;
pub mod options;
mod selectors;
pub mod tables;

pub use crate::deck::{normalize_card_name, parse_deck_page, SPLIT_CARD_SEPARATOR};
pub use crate::options::{
    resolve_link, TableOptions, HISTORIC_METAGAME_URL, MTGAZONE_ORIGIN, STANDARD_METAGAME_URL,
};
pub use crate::tables::{collect_format_tables, collect_links, TableLinkCollector};
