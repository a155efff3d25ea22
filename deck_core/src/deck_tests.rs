//! Tests for Deck

use super::{Board, Deck};
use crate::card::CardIdentity;

fn card(name: &str, edition: Option<&str>) -> CardIdentity {
    CardIdentity::from_parts(name, edition, None, None).unwrap()
}

fn sample_deck() -> Deck {
    let mut deck = Deck::new("burn");
    deck.add_main(card("lightning bolt", Some("m10")), 2);
    deck.add_main(card("lightning bolt", None), 2);
    deck.add_main(card("mountain", None), 16);
    deck.add_side(card("lightning bolt", Some("m10")), 1);
    deck.add_side(card("smash to smithereens", None), 3);
    deck
}

#[test]
fn test_counts_per_board() {
    let deck = sample_deck();
    assert_eq!(deck.number_cards_main(), 20);
    assert_eq!(deck.number_cards_side(), 4);
    assert_eq!(deck.number_cards(), 24);
    assert!(!deck.is_empty());
    assert!(Deck::new("empty").is_empty());
}

#[test]
fn test_full_sums_boards() {
    let full = sample_deck().full();
    assert_eq!(full.get(&card("lightning bolt", Some("m10"))), 3);
    assert_eq!(full.get(&card("lightning bolt", None)), 2);
    assert_eq!(full.total(), 24);
}

#[test]
fn test_add_by_board() {
    let mut deck = Deck::new("x");
    deck.add(Board::Main, card("a", None), 1);
    deck.add(Board::Side, card("a", None), 2);
    assert_eq!(deck.board(Board::Main).get(&card("a", None)), 1);
    assert_eq!(deck.board(Board::Side).get(&card("a", None)), 2);
}

#[test]
fn test_from_entries_sums_repeats() {
    let deck = Deck::from_entries(
        "x",
        vec![(card("a", None), 1), (card("a", None), 2)],
        vec![(card("b", None), 1)],
    );
    assert_eq!(deck.main().get(&card("a", None)), 3);
    assert_eq!(deck.number_cards_side(), 1);
}

#[test]
fn test_remove_card_is_fuzzy_and_main_first() {
    let mut deck = sample_deck();

    // 2 + 2 alike copies on main, then 1 on side
    let removed = deck.remove_card(&card("lightning bolt", Some("m10")), Some(5));
    assert_eq!(removed, 5);
    assert!(!deck.main().contains_variant(&card("lightning bolt", None)));
    assert!(!deck.side().contains_variant(&card("lightning bolt", None)));
    assert_eq!(deck.number_cards_side(), 3);
}

#[test]
fn test_remove_card_clamps() {
    let mut deck = sample_deck();
    let removed = deck.remove_card(&card("smash to smithereens", None), Some(10));
    assert_eq!(removed, 3);
    assert_eq!(deck.remove_card(&card("smash to smithereens", None), None), 0);
}

#[test]
fn test_remove_card_all() {
    let mut deck = sample_deck();
    assert_eq!(deck.remove_card(&card("lightning bolt", None), None), 5);
    assert!(!deck.contains_variant(&card("lightning bolt", None)));
}

#[test]
fn test_remove_card_skips_other_editions() {
    let mut deck = Deck::new("x");
    deck.add_main(card("a", Some("lea")), 2);
    assert_eq!(deck.remove_card(&card("a", Some("m10")), None), 0);
    assert_eq!(deck.number_cards(), 2);
}

#[test]
fn test_contains_and_variants() {
    let deck = sample_deck();
    assert!(deck.contains(&card("smash to smithereens", None)));
    assert!(!deck.contains(&card("smash to smithereens", Some("som"))));
    assert!(deck.contains_variant(&card("smash to smithereens", Some("som"))));
    assert!(!deck.contains_variant(&card("shock", None)));
}

#[test]
fn test_find_all_copies() {
    let deck = sample_deck();

    let copies = deck.find_all_copies(&card("lightning bolt", Some("m10")));
    assert_eq!(copies.len(), 2);
    assert_eq!(copies.iter().map(|(_, n)| n).sum::<u32>(), 5);

    let by_name = deck.find_all_copies_by_name("Lightning Bolt");
    assert_eq!(by_name.len(), 2);
    assert!(deck.find_all_copies_by_name("  ").is_empty());
}

#[test]
fn test_sum_is_board_wise() {
    let mut other = Deck::new("other");
    other.add_main(card("mountain", None), 4);
    other.add_side(card("shock", None), 2);

    let total = sample_deck().sum(&other);
    assert_eq!(total.name, "burn");
    assert_eq!(total.main().get(&card("mountain", None)), 20);
    assert_eq!(total.side().get(&card("shock", None)), 2);
}

#[test]
fn test_equality_and_same_cards() {
    let mut main_only = Deck::new("a");
    main_only.add_main(card("x", None), 2);

    let mut split = Deck::new("b");
    split.add_main(card("x", None), 1);
    split.add_side(card("x", None), 1);

    let mut renamed = main_only.clone();
    renamed.name = "c".to_string();

    assert_ne!(main_only, split);
    assert!(main_only.same_cards(&split));
    assert_eq!(main_only, renamed);
}

#[test]
fn test_display_lists_boards() {
    let mut deck = Deck::new("x");
    deck.add_main(card("b", None), 1);
    deck.add_main(card("a", Some("m10")), 2);
    assert_eq!(deck.to_string(), "Main deck (3)\n    2 a [m10]\n    1 b");

    deck.add_side(card("c", None), 1);
    assert!(deck.to_string().ends_with("Side board (1)\n    1 c"));
}

#[test]
fn test_serde_round_trip() {
    let deck = sample_deck();
    let json = serde_json::to_string(&deck).unwrap();
    assert!(json.contains("\"mainboard\""));
    assert!(json.contains("\"sideboard\""));

    let back: Deck = serde_json::from_str(&json).unwrap();
    assert_eq!(back, deck);
    assert_eq!(back.name, "burn");
}

#[test]
fn test_serde_missing_boards_default_empty() {
    let deck: Deck = serde_json::from_str(r#"{"name": "empty"}"#).unwrap();
    assert!(deck.is_empty());
}
