// ABOUTME: Goldfish pipeline: metagame listing links, deck pages, and plain-text deck lists.
// ABOUTME: Re-exports LinkCollector, parse_deck_page, parse_deck_text and listing options.

//! Extraction for MTGGoldfish pages.
//!
//! Callers fetch the HTML; this crate only reads it.
//!
//! ```
//! use mtgscrape_goldfish::parse_deck_text;
//!
//! let board = parse_deck_text("2 Bolt\n1 Bolt\n3 Shock").unwrap();
//! assert_eq!(board.get("Bolt"), Some(3));
//! ```

pub mod colors;
pub mod links;
pub mod options;
pub mod page;
pub mod text;

pub use crate::colors::is_color_name;
pub use crate::links::{collect_links, LinkCollector};
pub use crate::options::{
    metagame_url, LinkCollectorBuilder, ListingOptions, GOLDFISH_ORIGIN, LOAD_MORE_MARKER,
};
pub use crate::page::{parse_deck_page, SIDEBOARD_MARKER};
pub use crate::text::parse_deck_text;
