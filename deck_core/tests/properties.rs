//! Property-based tests for multiset arithmetic and reconciliation
//!
//! Identities are drawn from a small alphabet so that wildcard collisions
//! between generated rows are frequent.

use deck_core::{
    exclude_inventory_from_deck, CardIdentity, CardMultiset, Deck,
};
use proptest::prelude::*;

fn identity_strategy() -> impl Strategy<Value = CardIdentity> {
    (
        prop::sample::select(vec!["a", "b"]),
        prop::option::of(prop::sample::select(vec!["x", "y"])),
        prop::option::of(prop::sample::select(vec!["en", "de"])),
        prop::option::of(1u32..3),
    )
        .prop_map(|(name, edition, language, number)| {
            CardIdentity::from_parts(name, edition, language, number).unwrap()
        })
}

fn multiset_strategy() -> impl Strategy<Value = CardMultiset> {
    prop::collection::vec((identity_strategy(), 0u32..5), 0..12)
        .prop_map(|entries| entries.into_iter().collect())
}

fn deck_strategy() -> impl Strategy<Value = Deck> {
    (multiset_strategy(), multiset_strategy())
        .prop_map(|(main, side)| Deck::from_boards("generated", main, side))
}

/// Every inventory entry holds at least as many copies as the whole deck.
fn abundant(inventory: &Deck, deck: &Deck) -> Deck {
    let copies = u32::try_from(deck.number_cards()).unwrap().max(1);
    let mut out = Deck::new("abundant");
    for (card, _) in inventory.full().iter() {
        out.add_main(card.clone(), copies);
    }
    out
}

#[derive(Debug, Clone)]
enum Op {
    Add(CardIdentity, u32),
    Remove(CardIdentity, Option<u32>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (identity_strategy(), 0u32..4).prop_map(|(c, n)| Op::Add(c, n)),
        (identity_strategy(), prop::option::of(0u32..4)).prop_map(|(c, n)| Op::Remove(c, n)),
    ]
}

proptest! {
    #[test]
    fn sum_is_commutative(a in multiset_strategy(), b in multiset_strategy()) {
        prop_assert_eq!(a.sum(&b), b.sum(&a));
    }

    #[test]
    fn sum_preserves_totals(a in multiset_strategy(), b in multiset_strategy()) {
        prop_assert_eq!(a.sum(&b).total(), a.total() + b.total());
    }

    #[test]
    fn counts_stay_positive(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut set = CardMultiset::new();
        for op in ops {
            match op {
                Op::Add(card, n) => set.add(card, n),
                Op::Remove(card, n) => {
                    let before = set.get(&card);
                    let removed = set.remove(&card, n);
                    prop_assert!(removed <= before);
                    prop_assert_eq!(set.get(&card), before - removed);
                }
            }
            prop_assert!(set.iter().all(|(_, n)| n > 0));
        }
    }

    #[test]
    fn alike_is_reflexive_and_symmetric(a in identity_strategy(), b in identity_strategy()) {
        prop_assert!(a.alike(&a));
        prop_assert_eq!(a.alike(&b), b.alike(&a));
    }

    #[test]
    fn specificity_is_reflexive_and_transitive(
        a in identity_strategy(),
        b in identity_strategy(),
        c in identity_strategy()
    ) {
        prop_assert!(a.is_at_least_as_specific_as(&a));
        if a.is_at_least_as_specific_as(&b) && b.is_at_least_as_specific_as(&c) {
            prop_assert!(a.is_at_least_as_specific_as(&c));
        }
        if a.is_at_least_as_specific_as(&b) {
            prop_assert!(a.alike(&b));
        }
    }

    #[test]
    fn exclusion_never_adds_cards(deck in deck_strategy(), inventory in deck_strategy()) {
        let full = deck.full();
        let result = exclude_inventory_from_deck(&deck, &inventory).full();
        for (card, n) in result.iter() {
            prop_assert!(n <= full.get(card));
        }
    }

    #[test]
    fn exclusion_removes_at_most_alike_inventory(deck in deck_strategy(), inventory in deck_strategy()) {
        let result = exclude_inventory_from_deck(&deck, &inventory);
        let removed = deck.number_cards() - result.number_cards();

        let inventory = inventory.full();
        let wanted = deck.full();
        let alike_owned: u64 = inventory
            .iter()
            .filter(|(item, _)| wanted.contains_variant(item))
            .map(|(_, n)| u64::from(n))
            .sum();
        prop_assert!(removed <= alike_owned);
    }

    #[test]
    fn exclusion_keeps_boards_within_source(deck in deck_strategy(), inventory in deck_strategy()) {
        let result = exclude_inventory_from_deck(&deck, &inventory);
        for (card, n) in result.main().iter() {
            prop_assert!(n <= deck.main().get(card));
        }
        for (card, n) in result.side().iter() {
            prop_assert!(n <= deck.side().get(card));
        }
    }

    #[test]
    fn exclusion_is_idempotent_for_abundant_inventory(deck in deck_strategy(), inventory in deck_strategy()) {
        let inventory = abundant(&inventory, &deck);
        let once = exclude_inventory_from_deck(&deck, &inventory);
        let twice = exclude_inventory_from_deck(&once, &inventory);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn exclusion_is_deterministic(deck in deck_strategy(), inventory in deck_strategy()) {
        prop_assert_eq!(
            exclude_inventory_from_deck(&deck, &inventory),
            exclude_inventory_from_deck(&deck.clone(), &inventory.clone())
        );
    }
}
