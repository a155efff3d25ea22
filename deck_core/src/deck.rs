//! Decks: a main board and a side board of counted cards.

use crate::card::CardIdentity;
use crate::multiset::CardMultiset;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which board of a deck an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Board {
    Main,
    Side,
}

/// A named deck, want list or inventory.
///
/// The board split only matters for output placement; matching always works
/// on [`Deck::full`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "mainboard", default)]
    main: CardMultiset,
    #[serde(rename = "sideboard", default)]
    side: CardMultiset,
}

impl Deck {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn from_boards(name: &str, main: CardMultiset, side: CardMultiset) -> Self {
        Self {
            name: name.to_string(),
            main,
            side,
        }
    }

    /// Build a deck from the `(main, side)` entry lists an input adapter
    /// produces. Repeated identities are summed.
    pub fn from_entries(
        name: &str,
        main: Vec<(CardIdentity, u32)>,
        side: Vec<(CardIdentity, u32)>,
    ) -> Self {
        Self::from_boards(name, main.into(), side.into())
    }

    pub fn add_main(&mut self, card: CardIdentity, n: u32) {
        self.main.add(card, n);
    }

    pub fn add_side(&mut self, card: CardIdentity, n: u32) {
        self.side.add(card, n);
    }

    pub fn add(&mut self, board: Board, card: CardIdentity, n: u32) {
        match board {
            Board::Main => self.add_main(card, n),
            Board::Side => self.add_side(card, n),
        }
    }

    pub fn main(&self) -> &CardMultiset {
        &self.main
    }

    pub fn side(&self) -> &CardMultiset {
        &self.side
    }

    pub fn board(&self, board: Board) -> &CardMultiset {
        match board {
            Board::Main => &self.main,
            Board::Side => &self.side,
        }
    }

    /// Main and side board summed per identity.
    pub fn full(&self) -> CardMultiset {
        self.main.sum(&self.side)
    }

    pub fn number_cards_main(&self) -> u64 {
        self.main.total()
    }

    pub fn number_cards_side(&self) -> u64 {
        self.side.total()
    }

    pub fn number_cards(&self) -> u64 {
        self.number_cards_main() + self.number_cards_side()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.side.is_empty()
    }

    /// Remove up to `n` copies of cards [`alike`](CardIdentity::alike) to
    /// `card` (all of them when `n` is `None`), main board first.
    /// Returns the number removed.
    pub fn remove_card(&mut self, card: &CardIdentity, n: Option<u32>) -> u32 {
        let removed = self.remove_card_main(card, n);
        match n {
            Some(n) if removed >= n => removed,
            Some(n) => removed + self.remove_card_side(card, Some(n - removed)),
            None => removed + self.remove_card_side(card, None),
        }
    }

    pub fn remove_card_main(&mut self, card: &CardIdentity, n: Option<u32>) -> u32 {
        remove_alike(&mut self.main, card, n)
    }

    pub fn remove_card_side(&mut self, card: &CardIdentity, n: Option<u32>) -> u32 {
        remove_alike(&mut self.side, card, n)
    }

    /// Exact identity present on either board.
    pub fn contains(&self, card: &CardIdentity) -> bool {
        self.main.contains(card) || self.side.contains(card)
    }

    /// Some alike identity present on either board.
    pub fn contains_variant(&self, card: &CardIdentity) -> bool {
        self.main.contains_variant(card) || self.side.contains_variant(card)
    }

    /// All entries of the full deck alike to `card`.
    pub fn find_all_copies(&self, card: &CardIdentity) -> Vec<(CardIdentity, u32)> {
        let full = self.full();
        let copies = full
            .find_matches(card, CardIdentity::alike)
            .map(|(c, n)| (c.clone(), n))
            .collect();
        copies
    }

    /// All entries of the full deck carrying `name`, whatever their printing.
    pub fn find_all_copies_by_name(&self, name: &str) -> Vec<(CardIdentity, u32)> {
        let Ok(pattern) = CardIdentity::new(name) else {
            return Vec::new();
        };
        let full = self.full();
        let copies = full
            .find_matches(&pattern, |c, p| c.name() == p.name())
            .map(|(c, n)| (c.clone(), n))
            .collect();
        copies
    }

    /// Board-wise sum of two decks. The name of `self` is kept.
    pub fn sum(&self, other: &Deck) -> Deck {
        Deck {
            name: self.name.clone(),
            main: self.main.sum(&other.main),
            side: self.side.sum(&other.side),
        }
    }

    /// True when both decks hold the same cards, ignoring the board split.
    pub fn same_cards(&self, other: &Deck) -> bool {
        self.full() == other.full()
    }
}

fn remove_alike(board: &mut CardMultiset, card: &CardIdentity, n: Option<u32>) -> u32 {
    let matches: Vec<CardIdentity> = board
        .find_matches(card, CardIdentity::alike)
        .map(|(c, _)| c.clone())
        .collect();

    let mut removed = 0;
    for item in matches {
        let wanted = match n {
            Some(n) if removed >= n => break,
            Some(n) => Some(n - removed),
            None => None,
        };
        removed += board.remove(&item, wanted);
    }
    removed
}

/// Decks compare board by board; the name is not part of equality.
impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.main == other.main && self.side == other.side
    }
}

impl Eq for Deck {}

fn write_board(f: &mut fmt::Formatter<'_>, board: &CardMultiset) -> fmt::Result {
    let mut entries: Vec<_> = board.iter().collect();
    entries.sort_by(|a, b| {
        a.0.name()
            .cmp(b.0.name())
            .then_with(|| a.0.edition().cmp(&b.0.edition()))
    });
    for (card, n) in entries {
        write!(f, "\n    {n} {card}")?;
    }
    Ok(())
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Main deck ({})", self.number_cards_main())?;
        write_board(f, &self.main)?;
        if !self.side.is_empty() {
            write!(f, "\nSide board ({})", self.number_cards_side())?;
            write_board(f, &self.side)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "deck_tests.rs"]
mod tests;
