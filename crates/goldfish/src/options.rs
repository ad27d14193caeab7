// ABOUTME: Configuration for the Goldfish listing parser: site origin, load-more marker, color filter.
// ABOUTME: LinkCollectorBuilder provides a fluent API for constructing LinkCollector instances.

use crate::links::LinkCollector;

/// Origin prefixed to the relative deck links on listing pages.
pub const GOLDFISH_ORIGIN: &str = "https://www.mtggoldfish.com";

/// Text that starts the lazily loaded part of a metagame page.
pub const LOAD_MORE_MARKER: &str = "View More";

/// URL of the metagame overview page of `format`.
///
/// `full` selects the page listing every archetype; otherwise the page with
/// only the top decks is used.
pub fn metagame_url(format: &str, full: bool) -> String {
    let tail = if full { "/full#paper" } else { "/#paper" };
    format!("{}/metagame/{}{}", GOLDFISH_ORIGIN, format.to_lowercase(), tail)
}

/// Options controlling how a listing page is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    pub base_url: String,
    pub load_more_marker: String,
    pub exclude_color_names: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            base_url: GOLDFISH_ORIGIN.to_string(),
            load_more_marker: LOAD_MORE_MARKER.to_string(),
            exclude_color_names: true,
        }
    }
}

/// Builder for constructing LinkCollector instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct LinkCollectorBuilder {
    opts: ListingOptions,
}

impl LinkCollectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin prefixed to relative deck links.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the marker at which the document is truncated.
    pub fn load_more_marker(mut self, marker: impl Into<String>) -> Self {
        self.opts.load_more_marker = marker.into();
        self
    }

    /// Drop decks named only after a color combination (e.g. "UW").
    pub fn exclude_color_names(mut self, exclude: bool) -> Self {
        self.opts.exclude_color_names = exclude;
        self
    }

    pub fn build(self) -> LinkCollector {
        LinkCollector::new(self.opts)
    }
}
