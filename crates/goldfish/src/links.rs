// ABOUTME: Parses a Goldfish metagame overview page into an ordered deck name -> URL mapping.
// ABOUTME: Skips the leading non-deck entry, "Other", and optionally color-combination names.

use mtgscrape_deck::{DeckError, Links, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::colors::is_color_name;
use crate::options::{LinkCollectorBuilder, ListingOptions};

static DECK_NAMES: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.deck-price-paper").expect("valid deck name selector"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid anchor selector"));

/// Name of the catch-all bucket, never a real archetype.
const OTHER: &str = "Other";

/// Collects deck links from metagame overview pages.
#[derive(Debug, Clone, Default)]
pub struct LinkCollector {
    opts: ListingOptions,
}

impl LinkCollector {
    pub fn new(opts: ListingOptions) -> Self {
        Self { opts }
    }

    pub fn builder() -> LinkCollectorBuilder {
        LinkCollectorBuilder::new()
    }

    pub fn options(&self) -> &ListingOptions {
        &self.opts
    }

    /// Returns the deck links of `html` in document order.
    ///
    /// Only the part of the page before the load-more marker is read. The
    /// first deck-name element is not a deck and is skipped. When a name
    /// occurs twice the first link is kept.
    pub fn collect(&self, html: &str) -> Result<Links> {
        let document = Html::parse_document(truncate_at_marker(html, &self.opts.load_more_marker));
        let mut links = Links::new();

        for element in document.select(&DECK_NAMES).skip(1) {
            let name = display_name(&element);
            if name == OTHER || links.contains(&name) {
                continue;
            }
            if self.opts.exclude_color_names && is_color_name(&name) {
                continue;
            }

            let href = element
                .select(&ANCHOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .ok_or_else(|| DeckError::malformed(format!("deck {:?} has no link", name)))?;

            links.insert(name, format!("{}{}", self.opts.base_url, href));
        }

        Ok(links)
    }
}

/// Parses `html` with default options except for the color-name filter.
pub fn collect_links(html: &str, exclude_color_names: bool) -> Result<Links> {
    LinkCollector::builder()
        .exclude_color_names(exclude_color_names)
        .build()
        .collect(html)
}

fn truncate_at_marker<'a>(html: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return html;
    }
    match html.find(marker) {
        Some(end) => &html[..end],
        None => html,
    }
}

fn display_name(element: &ElementRef) -> String {
    element.text().collect::<String>().replace('\n', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, href: &str) -> String {
        format!(
            r#"<span class="deck-price-paper"><a href="{}">{}</a></span>"#,
            href, name
        )
    }

    fn page(entries: &[(&str, &str)]) -> String {
        let mut body = entry("Price", "/price-header");
        for (name, href) in entries {
            body.push_str(&entry(name, href));
        }
        format!("<html><body>{}</body></html>", body)
    }

    #[test]
    fn skips_first_element() {
        let links = collect_links(&page(&[("Burn", "/archetype/burn")]), true).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(
            links.get("Burn"),
            Some("https://www.mtggoldfish.com/archetype/burn")
        );
        assert!(!links.contains("Price"));
    }

    #[test]
    fn first_occurrence_wins() {
        let html = page(&[("Burn", "/archetype/burn-a"), ("Burn", "/archetype/burn-b")]);
        let links = collect_links(&html, true).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(
            links.get("Burn"),
            Some("https://www.mtggoldfish.com/archetype/burn-a")
        );
    }

    #[test]
    fn other_is_always_skipped() {
        let html = page(&[("Other", "/archetype/other"), ("Tron", "/archetype/tron")]);
        let links = collect_links(&html, false).unwrap();
        assert_eq!(links.names().collect::<Vec<_>>(), vec!["Tron"]);
    }

    #[test]
    fn color_names_are_excluded_when_asked() {
        let html = page(&[
            ("WUR", "/archetype/wur"),
            ("WURza", "/archetype/wurza"),
            ("Jeskai Control", "/archetype/jeskai"),
        ]);

        let clean = collect_links(&html, true).unwrap();
        assert_eq!(
            clean.names().collect::<Vec<_>>(),
            vec!["WURza", "Jeskai Control"]
        );

        let all = collect_links(&html, false).unwrap();
        assert_eq!(
            all.names().collect::<Vec<_>>(),
            vec!["WUR", "WURza", "Jeskai Control"]
        );
    }

    #[test]
    fn newlines_are_removed_from_names() {
        let html = page(&[("\nIzzet Murktide\n", "/archetype/murktide")]);
        let links = collect_links(&html, true).unwrap();
        assert!(links.contains("Izzet Murktide"));
    }

    #[test]
    fn document_is_cut_at_load_more_marker() {
        let mut html = page(&[("Burn", "/archetype/burn")]);
        html.push_str("<p>View More</p>");
        html.push_str(&entry("Budget Burn", "/archetype/budget-burn"));

        let links = collect_links(&html, true).unwrap();
        assert_eq!(links.names().collect::<Vec<_>>(), vec!["Burn"]);
    }

    #[test]
    fn custom_base_url() {
        let collector = LinkCollector::builder().base_url("http://localhost").build();
        let links = collector.collect(&page(&[("Burn", "/a/burn")])).unwrap();
        assert_eq!(links.get("Burn"), Some("http://localhost/a/burn"));
    }

    #[test]
    fn entry_without_link_is_malformed() {
        let html = format!(
            "{}{}",
            page(&[]),
            r#"<span class="deck-price-paper">Burn</span>"#
        );
        let err = collect_links(&html, true).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn empty_page_yields_no_links() {
        assert!(collect_links("<html></html>", true).unwrap().is_empty());
    }

    #[test]
    fn collecting_twice_is_identical() {
        let html = page(&[("Burn", "/archetype/burn"), ("Tron", "/archetype/tron")]);
        let collector = LinkCollector::default();
        assert_eq!(collector.collect(&html).unwrap(), collector.collect(&html).unwrap());
    }
}
