// ABOUTME: Converts a line-oriented "count name" deck list into a Board.
// ABOUTME: Strips foil/set annotations that start at '[' or '<' and sums repeated cards.

use mtgscrape_deck::{Board, DeckError, Result};

/// Parses text such as `"4 Mox Opal [Foil]\n2 Galvanic Blast"` into a board.
///
/// Blank lines are skipped. Every other line must be a positive integer, one
/// space, and a card name; anything else fails the whole list.
pub fn parse_deck_text(text: &str) -> Result<Board> {
    let mut board = Board::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (count, rest) = line.split_once(' ').ok_or_else(|| {
            DeckError::parse(format!("line {:?}: no space between count and card name", line))
        })?;

        let count: u32 = count.parse().map_err(|e| {
            DeckError::parse(format!("line {:?}: invalid count {:?}: {}", line, count, e))
        })?;
        if count == 0 {
            return Err(DeckError::parse(format!("line {:?}: count must be at least 1", line)));
        }

        let name = strip_annotation(rest);
        if name.is_empty() {
            return Err(DeckError::parse(format!("line {:?}: missing card name", line)));
        }

        board.add(name, count);
    }

    Ok(board)
}

/// Cuts a card name at the first `[` or `<` and trims it.
pub fn strip_annotation(name: &str) -> &str {
    let end = name.find(|c: char| c == '[' || c == '<').unwrap_or(name.len());
    name[..end].trim()
}
