// ABOUTME: MTGAZone site constants and link resolution against the site origin.
// ABOUTME: TableOptions carries the origin used to absolutize relative "Decks" links.

use mtgscrape_deck::{DeckError, Result};
use url::Url;

pub const MTGAZONE_ORIGIN: &str = "https://mtgazone.com";

pub const STANDARD_METAGAME_URL: &str = "https://mtgazone.com/metagame/standard";
pub const HISTORIC_METAGAME_URL: &str = "https://mtgazone.com/metagame/historic";

/// Options for reading metagame tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub origin: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            origin: MTGAZONE_ORIGIN.to_string(),
        }
    }
}

impl TableOptions {
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

/// Resolves `href` against `origin`. Absolute links are returned unchanged.
pub fn resolve_link(origin: &str, href: &str) -> Result<String> {
    let href = href.trim();
    let base = Url::parse(origin)
        .map_err(|e| DeckError::malformed(format!("invalid origin {:?}: {}", origin, e)))?;
    let resolved = base
        .join(href)
        .map_err(|e| DeckError::malformed(format!("cannot resolve link {:?}: {}", href, e)))?;
    Ok(resolved.to_string())
}
