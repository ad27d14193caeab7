// ABOUTME: Plain data models shared by both deck-list pipelines.
// ABOUTME: Board (card -> copies), Links (ordered deck name -> URL), Deck and DeckLists.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from card name to number of copies for one part of a deck.
///
/// Adding a card that is already present sums the counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(BTreeMap<String, u32>);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` copies of `name`. A zero count leaves the board unchanged.
    pub fn add(&mut self, name: impl Into<String>, count: u32) {
        if count == 0 {
            return;
        }
        let copies = self.0.entry(name.into()).or_insert(0);
        *copies = copies.saturating_add(count);
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of distinct cards.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of cards, counting every copy.
    pub fn total_cards(&self) -> u32 {
        self.0.values().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, n)| (name.as_str(), *n))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Board {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut board = Board::new();
        for (name, count) in iter {
            board.add(name, count);
        }
        board
    }
}

impl<S: Into<String>> Extend<(S, u32)> for Board {
    fn extend<I: IntoIterator<Item = (S, u32)>>(&mut self, iter: I) {
        for (name, count) in iter {
            self.add(name, count);
        }
    }
}

/// Ordered mapping from deck display name to the absolute URL of its page.
///
/// Insertion keeps the first link seen for a name; later duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(IndexMap<String, String>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name -> url` unless `name` is already present.
    /// Returns true if the entry was added.
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) -> bool {
        match self.0.entry(name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(url.into());
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, url)| (name.as_str(), url.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<N: Into<String>, U: Into<String>> FromIterator<(N, U)> for Links {
    fn from_iter<I: IntoIterator<Item = (N, U)>>(iter: I) -> Self {
        let mut links = Links::new();
        for (name, url) in iter {
            links.insert(name, url);
        }
        links
    }
}

/// A named deck with a mainboard and an optional sideboard.
///
/// `side: None` means the page had no sideboard section at all, which is
/// different from a sideboard section with no cards in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub main: Board,
    pub side: Option<Board>,
}

impl Deck {
    pub fn new(name: impl Into<String>, main: Board, side: Option<Board>) -> Self {
        Self {
            name: name.into(),
            main,
            side,
        }
    }
}

/// Main and side boards read from a page that always yields both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLists {
    pub main: Board,
    pub side: Board,
}

impl DeckLists {
    /// Attaches a name, turning the lists into a `Deck` with a present sideboard.
    pub fn into_deck(self, name: impl Into<String>) -> Deck {
        Deck::new(name, self.main, Some(self.side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn board_add_sums_repeated_cards() {
        let mut board = Board::new();
        board.add("Lightning Bolt", 2);
        board.add("Lightning Bolt", 1);
        board.add("Shock", 3);

        assert_eq!(board.get("Lightning Bolt"), Some(3));
        assert_eq!(board.get("Shock"), Some(3));
        assert_eq!(board.len(), 2);
        assert_eq!(board.total_cards(), 6);
    }

    #[test]
    fn board_add_zero_is_ignored() {
        let mut board = Board::new();
        board.add("Island", 0);
        assert!(board.is_empty());
        assert!(!board.contains("Island"));
    }

    #[test]
    fn board_from_iter_sums() {
        let board: Board = vec![("Opt", 2), ("Opt", 2), ("Island", 20)]
            .into_iter()
            .collect();
        assert_eq!(board.get("Opt"), Some(4));
        assert_eq!(board.get("Island"), Some(20));
    }

    #[test]
    fn board_serializes_as_plain_object() {
        let board: Board = vec![("Shock", 1), ("Bolt", 3)].into_iter().collect();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"Bolt":3,"Shock":1}"#);
    }

    #[test]
    fn links_first_occurrence_wins() {
        let mut links = Links::new();
        assert!(links.insert("Burn", "https://a/burn-1"));
        assert!(!links.insert("Burn", "https://a/burn-2"));
        assert!(links.insert("Tron", "https://a/tron"));

        assert_eq!(links.get("Burn"), Some("https://a/burn-1"));
        assert_eq!(links.names().collect::<Vec<_>>(), vec!["Burn", "Tron"]);
    }

    #[test]
    fn links_serialize_in_insertion_order() {
        let links: Links = vec![("Zoo", "z"), ("Affinity", "a")].into_iter().collect();
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(json, r#"{"Zoo":"z","Affinity":"a"}"#);
    }

    #[test]
    fn deck_lists_into_deck_keeps_sideboard_present() {
        let lists = DeckLists {
            main: vec![("Opt", 4)].into_iter().collect(),
            side: Board::new(),
        };
        let deck = lists.into_deck("Izzet Phoenix");
        assert_eq!(deck.name, "Izzet Phoenix");
        assert_eq!(deck.side, Some(Board::new()));
    }
}
