//! Multiset transforms applied before reconciliation.

use crate::deck::Deck;
use crate::multiset::CardMultiset;

/// Basic land names that are normally not proxied.
pub const BASIC_LANDS: [&str; 5] = ["plains", "island", "swamp", "mountain", "forest"];

/// Drop edition, language and collector number from every entry, summing
/// entries that collapse onto the same name.
pub fn strip_version(set: &CardMultiset) -> CardMultiset {
    set.iter()
        .map(|(card, n)| (card.without_version(), n))
        .collect()
}

/// Remove every entry whose name is one of `basic_names`, compared
/// case-insensitively, regardless of printing.
pub fn filter_basic_lands<S: AsRef<str>>(set: &CardMultiset, basic_names: &[S]) -> CardMultiset {
    let basics: Vec<String> = basic_names
        .iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .collect();

    set.iter()
        .filter(|(card, _)| !basics.iter().any(|basic| basic == card.name()))
        .map(|(card, n)| (card.clone(), n))
        .collect()
}

impl Deck {
    /// Copy of the deck with printing qualifiers removed on both boards.
    pub fn strip_versions(&self) -> Deck {
        Deck::from_boards(&self.name, strip_version(self.main()), strip_version(self.side()))
    }

    /// Copy of the deck without the given basic lands on either board.
    pub fn without_basic_lands<S: AsRef<str>>(&self, basic_names: &[S]) -> Deck {
        Deck::from_boards(
            &self.name,
            filter_basic_lands(self.main(), basic_names),
            filter_basic_lands(self.side(), basic_names),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardIdentity;

    fn card(name: &str, edition: Option<&str>, language: Option<&str>) -> CardIdentity {
        CardIdentity::from_parts(name, edition, language, None).unwrap()
    }

    #[test]
    fn test_strip_version_merges_printings() {
        let set: CardMultiset = vec![
            (card("bolt", Some("m10"), Some("en")), 2),
            (card("bolt", Some("lea"), None), 1),
            (card("bolt", None, None), 1),
            (card("counterspell", Some("ice"), None), 4),
        ]
        .into();

        let stripped = strip_version(&set);
        assert_eq!(stripped.len(), 2);
        assert_eq!(stripped.get(&card("bolt", None, None)), 4);
        assert_eq!(stripped.get(&card("counterspell", None, None)), 4);
        assert_eq!(stripped.total(), set.total());
    }

    #[test]
    fn test_filter_basic_lands_default_names() {
        let set: CardMultiset = vec![
            (card("Island", Some("m10"), None), 10),
            (card("forest", None, None), 5),
            (card("bolt", None, None), 4),
            (card("snow-covered island", None, None), 2),
        ]
        .into();

        let filtered = filter_basic_lands(&set, &BASIC_LANDS);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get(&card("bolt", None, None)), 4);
        assert_eq!(filtered.get(&card("snow-covered island", None, None)), 2);
    }

    #[test]
    fn test_filter_basic_lands_custom_names_case_insensitive() {
        let set: CardMultiset = vec![
            (card("wastes", None, None), 3),
            (card("island", None, None), 3),
        ]
        .into();

        let filtered = filter_basic_lands(&set, &["WASTES"]);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains(&card("island", None, None)));
    }

    #[test]
    fn test_deck_transforms_keep_boards() {
        let mut deck = Deck::new("burn");
        deck.add_main(card("bolt", Some("m10"), None), 4);
        deck.add_main(card("mountain", None, None), 16);
        deck.add_side(card("smash to smithereens", Some("som"), None), 2);

        let stripped = deck.strip_versions();
        assert_eq!(stripped.main().get(&card("bolt", None, None)), 4);
        assert_eq!(stripped.side().get(&card("smash to smithereens", None, None)), 2);
        assert_eq!(stripped.name, "burn");

        let spells = deck.without_basic_lands(&BASIC_LANDS);
        assert_eq!(spells.number_cards_main(), 4);
        assert_eq!(spells.number_cards_side(), 2);
        // input untouched
        assert_eq!(deck.number_cards_main(), 20);
    }
}
