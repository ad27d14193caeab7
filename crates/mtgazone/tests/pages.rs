// ABOUTME: Integration tests for the MTGAZone pipeline against saved page snapshots.
// ABOUTME: Covers placeholder-table skipping, format segmentation, and tooltip deck parsing.

use std::fs;

use mtgscrape_deck::Board;
use mtgscrape_mtgazone::{collect_format_tables, collect_links, parse_deck_page};
use pretty_assertions::assert_eq;

/// Load an HTML snapshot from the fixtures directory.
fn load_html_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}.html", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path, e))
}

fn board(cards: &[(&str, u32)]) -> Board {
    cards.iter().map(|(n, c)| (*n, *c)).collect()
}

#[test]
fn metagame_first_format_only() {
    let html = load_html_fixture("metagame");
    let links = collect_links(&html).unwrap();

    let entries: Vec<(&str, &str)> = links.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("Mono-Red Aggro", "https://mtgazone.com/deck/mono-red-aggro-standard/"),
            ("Azorius Control", "https://mtgazone.com/deck/azorius-control-standard/"),
            ("Izzet Epiphany", "https://mtgazone.com/deck/izzet-epiphany/"),
        ]
    );
}

#[test]
fn metagame_all_formats() {
    let html = load_html_fixture("metagame");
    let formats = collect_format_tables(&html).unwrap();

    assert_eq!(formats.len(), 2);
    assert_eq!(formats[0], collect_links(&html).unwrap());
    assert_eq!(
        formats[1].get("Rakdos Arcanist"),
        Some("https://mtgazone.com/deck/rakdos-arcanist/")
    );
}

#[test]
fn deck_with_sideboard() {
    let html = load_html_fixture("deck_izzet");
    let lists = parse_deck_page(&html).unwrap().expect("deck page");

    assert_eq!(
        lists.main,
        board(&[
            ("Goldspan Dragon", 4),
            ("Expressive Iteration", 4),
            ("Fable of the Mirror-Breaker // Reflection of Kiki-Jiki", 2),
            ("Alrund's Epiphany", 3),
            ("Island", 10),
        ])
    );
    assert_eq!(
        lists.side,
        board(&[
            ("Negate", 2),
            ("Valki, God of Lies // Tibalt, Cosmic Impostor", 1),
        ])
    );
}

#[test]
fn deck_without_sideboard_has_empty_side() {
    let html = load_html_fixture("deck_no_sideboard");
    let lists = parse_deck_page(&html).unwrap().expect("deck page");

    assert_eq!(lists.main.total_cards(), 24);
    assert_eq!(lists.side, Board::new());
}

#[test]
fn non_deck_page_is_not_recognized() {
    let html = load_html_fixture("not_a_deck");
    assert_eq!(parse_deck_page(&html).unwrap(), None);
}

#[test]
fn reparsing_is_identical() {
    let html = load_html_fixture("deck_izzet");
    assert_eq!(parse_deck_page(&html).unwrap(), parse_deck_page(&html).unwrap());
}
