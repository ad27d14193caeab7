// ABOUTME: Parses a Goldfish deck page into its display name, mainboard and optional sideboard.
// ABOUTME: Name comes from the text before the author byline; cards from the embedded deck-text input.

use ego_tree::NodeRef;
use mtgscrape_deck::{Board, Deck, DeckError, Result};
use once_cell::sync::Lazy;
use scraper::{Html, Node, Selector};

use crate::text::parse_deck_text;

static AUTHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.author").expect("valid author selector"));
static DECK_INPUT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("input#deck_input_deck").expect("valid deck input selector"));

/// Separates the mainboard from the sideboard in the embedded deck text.
pub const SIDEBOARD_MARKER: &str = "sideboard";

/// Prompts rendered inside the title that are not part of the deck name.
const NAME_BOILERPLATE: &[&str] = &[
    "Suggest\u{a0}a\u{a0}Better\u{a0}Name",
    "Suggest a Better Name",
    "Fix Archetype",
];

/// Parses a whole deck page.
///
/// A page without a sideboard marker yields `side: None`.
pub fn parse_deck_page(html: &str) -> Result<Deck> {
    let document = Html::parse_document(html);
    let name = deck_title(&document)?;
    let (main, side) = split_boards(deck_text(&document)?)?;
    Ok(Deck::new(name, main, side))
}

/// Reads the deck name from the title heading.
///
/// The heading looks like:
///
/// ```html
/// <h1 class="title">
///   Four - Color Omnath
///   <span class="author">by VTCLA</span>
/// </h1>
/// ```
pub fn deck_title(document: &Html) -> Result<String> {
    let author = document
        .select(&AUTHOR)
        .next()
        .ok_or_else(|| DeckError::malformed("no span.author byline"))?;

    let raw = author
        .prev_sibling()
        .and_then(text_of)
        .ok_or_else(|| DeckError::malformed("author byline is not preceded by the deck name"))?;

    Ok(clean_deck_name(raw))
}

fn text_of(node: NodeRef<'_, Node>) -> Option<&str> {
    match node.value() {
        Node::Text(text) => Some(&**text),
        _ => None,
    }
}

/// Normalizes a raw title: drops newlines and slashes, turns hyphens into
/// spaces, removes title prompts, cuts at the first `[`, `<` or `{`, and
/// collapses whitespace.
pub fn clean_deck_name(raw: &str) -> String {
    let mut name = raw.replace('\n', "").replace('/', "").replace('-', " ");
    for prompt in NAME_BOILERPLATE {
        name = name.replace(prompt, "");
    }
    if let Some(end) = name.find(|c: char| matches!(c, '[' | '<' | '{')) {
        name.truncate(end);
    }
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the plain-text deck list stored in the page's deck input.
pub fn deck_text(document: &Html) -> Result<&str> {
    document
        .select(&DECK_INPUT)
        .next()
        .ok_or_else(|| DeckError::malformed("no input#deck_input_deck element"))?
        .value()
        .attr("value")
        .ok_or_else(|| DeckError::malformed("input#deck_input_deck has no value"))
}

/// Splits deck text at the first sideboard marker and parses both halves.
pub fn split_boards(text: &str) -> Result<(Board, Option<Board>)> {
    match text.split_once(SIDEBOARD_MARKER) {
        Some((main, side)) => Ok((parse_deck_text(main)?, Some(parse_deck_text(side)?))),
        None => Ok((parse_deck_text(text)?, None)),
    }
}
