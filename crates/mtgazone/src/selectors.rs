// ABOUTME: CSS matchers for MTGAZone metagame tables and deck pages, compiled once per process.
// ABOUTME: Shared by the table and deck parsers so no selector is parsed per call.

use dom_query::Matcher;
use once_cell::sync::Lazy;

fn compile(css: &str) -> Matcher {
    Matcher::new(css).unwrap_or_else(|e| panic!("invalid built-in selector {:?}: {:?}", css, e))
}

pub(crate) static TABLE: Lazy<Matcher> = Lazy::new(|| compile("table"));
pub(crate) static ROW: Lazy<Matcher> = Lazy::new(|| compile("tr"));
pub(crate) static HEADER_CELL: Lazy<Matcher> = Lazy::new(|| compile("th"));
pub(crate) static DATA_CELL: Lazy<Matcher> = Lazy::new(|| compile("td"));
pub(crate) static ANCHOR: Lazy<Matcher> = Lazy::new(|| compile("a"));

pub(crate) static MAIN_DECK: Lazy<Matcher> = Lazy::new(|| compile("div.streamdecker-main-deck"));
pub(crate) static SIDEBOARD: Lazy<Matcher> = Lazy::new(|| compile("div.streamdecker-sideboard"));
pub(crate) static CARD_TOOLTIP: Lazy<Matcher> =
    Lazy::new(|| compile("span.wp-streamdecker-tooltip"));
pub(crate) static CARD_QTY: Lazy<Matcher> = Lazy::new(|| compile("div.card-qty"));
pub(crate) static CARD_NAME: Lazy<Matcher> = Lazy::new(|| compile("div.card-name"));
