// ABOUTME: Parses an MTGAZone deck page's tooltip card list into main and side boards.
// ABOUTME: Split card names "A/B" are normalized to "A // B"; pages without containers are not decks.

use dom_query::{Document, Selection};
use mtgscrape_deck::{Board, DeckError, DeckLists, Result};

use crate::selectors::{CARD_NAME, CARD_QTY, CARD_TOOLTIP, MAIN_DECK, SIDEBOARD};

/// Separator used in split and double-faced card names.
pub const SPLIT_CARD_SEPARATOR: &str = " // ";

/// Parses a deck page.
///
/// Returns `Ok(None)` when the page has neither a main deck nor a sideboard
/// container, meaning it is not a deck page. A main deck without a sideboard
/// container yields an empty sideboard.
pub fn parse_deck_page(html: &str) -> Result<Option<DeckLists>> {
    let document = Document::from(html);
    let main = document.select_matcher(&MAIN_DECK);
    let side = document.select_matcher(&SIDEBOARD);

    match (main.exists(), side.exists()) {
        (false, false) => Ok(None),
        (false, true) => Err(DeckError::malformed("sideboard container without a main deck")),
        (true, false) => Ok(Some(DeckLists {
            main: read_board(&main.first())?,
            side: Board::new(),
        })),
        (true, true) => Ok(Some(DeckLists {
            main: read_board(&main.first())?,
            side: read_board(&side.first())?,
        })),
    }
}

fn read_board(container: &Selection) -> Result<Board> {
    let mut board = Board::new();

    for tooltip in container.select_matcher(&CARD_TOOLTIP).iter() {
        let qty = tooltip.select_matcher(&CARD_QTY);
        if !qty.exists() {
            return Err(DeckError::malformed("card tooltip without div.card-qty"));
        }
        let qty = qty.first().text();
        let count: u32 = qty.trim().parse().map_err(|e| {
            DeckError::parse(format!("invalid card quantity {:?}: {}", qty.trim(), e))
        })?;
        if count == 0 {
            return Err(DeckError::parse("card quantity must be at least 1"));
        }

        let name = tooltip.select_matcher(&CARD_NAME);
        if !name.exists() {
            return Err(DeckError::malformed("card tooltip without div.card-name"));
        }
        let name = name.first().text();
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::parse("card tooltip with an empty name"));
        }
        board.add(normalize_card_name(name), count);
    }

    Ok(board)
}

/// Writes every `/` in a card name as `" // "`.
///
/// Separators already written as `" // "` are folded back to `/` first, so
/// normalizing twice gives the same result.
pub fn normalize_card_name(name: &str) -> String {
    if !name.contains('/') {
        return name.to_string();
    }
    name.replace(SPLIT_CARD_SEPARATOR, "/").replace('/', SPLIT_CARD_SEPARATOR)
}
