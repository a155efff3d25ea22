//! Want-list / inventory reconciliation.
//!
//! Both directions walk the demand side most-specific-first and spend owned
//! copies from a shared supply. An owned copy can be credited to a demand
//! row only when it is an instance of that row, i.e. the owned identity is
//! [at least as specific](CardIdentity::is_at_least_as_specific_as) as the
//! wanted one. A Magic 2010 Lightning Bolt satisfies a want for "any
//! Lightning Bolt"; an unversioned stack never satisfies a want for a
//! particular printing.
//!
//! The functions never mutate their inputs and always return a fresh deck.

use crate::card::CardIdentity;
use crate::deck::Deck;
use crate::multiset::CardMultiset;
use crate::transform::BASIC_LANDS;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Demand ordering: name and edition descending (an edition sorts before
/// its absence), then more pinned fields first.
///
/// Used with a stable sort, so rows that compare equal keep insertion order.
pub fn by_specificity(a: &CardIdentity, b: &CardIdentity) -> Ordering {
    b.name()
        .cmp(a.name())
        .then_with(|| b.edition().unwrap_or("").cmp(a.edition().unwrap_or("")))
        .then_with(|| b.pinned_fields().cmp(&a.pinned_fields()))
}

/// Outcome of matching a demand multiset against a supply multiset.
struct Allocation {
    /// Demand left unsatisfied, per demand identity.
    unmet: CardMultiset,
    /// Supply spent, per supply identity.
    claimed: CardMultiset,
}

fn allocate(demand: &CardMultiset, supply: &CardMultiset) -> Allocation {
    let mut rows: Vec<(&CardIdentity, u32)> = demand.iter().collect();
    rows.sort_by(|a, b| by_specificity(a.0, b.0));

    let mut unmet = CardMultiset::new();
    let mut claimed = CardMultiset::new();

    for (card, num) in rows {
        if num == 0 {
            continue;
        }

        // Generic stock first; specific printings are kept for later rows.
        let mut candidates: Vec<(&CardIdentity, u32)> = supply
            .find_matches(card, CardIdentity::is_at_least_as_specific_as)
            .collect();
        candidates.sort_by_key(|(item, _)| item.pinned_fields());

        let mut remaining = num;
        for (item, owned) in candidates {
            if remaining == 0 {
                break;
            }
            let available = owned.saturating_sub(claimed.get(item));
            let credit = available.min(remaining);
            if credit > 0 {
                claimed.add(item.clone(), credit);
                remaining -= credit;
                log::debug!("Credited {} {} against {}", credit, item, card);
            }
        }

        unmet.add(card.clone(), remaining);
    }

    Allocation { unmet, claimed }
}

/// Rebuild `source`'s boards so that each identity keeps `remaining` copies.
/// Copies that went away are taken off the main board first.
fn split_over_boards(source: &Deck, remaining: &CardMultiset) -> Deck {
    let mut out = Deck::new(&source.name);

    for (card, main_count) in source.main().iter() {
        let total = main_count.saturating_add(source.side().get(card));
        let removed = total.saturating_sub(remaining.get(card));
        out.add_main(card.clone(), main_count.saturating_sub(removed));
    }
    for (card, side_count) in source.side().iter() {
        let main_count = source.main().get(card);
        let total = main_count.saturating_add(side_count);
        let removed = total.saturating_sub(remaining.get(card));
        let from_side = removed.saturating_sub(main_count);
        out.add_side(card.clone(), side_count.saturating_sub(from_side));
    }

    out
}

/// What is still missing from `deck` once owned copies in `inventory` are
/// credited. Board placement of the remaining copies follows `deck`.
pub fn exclude_inventory_from_deck(deck: &Deck, inventory: &Deck) -> Deck {
    let allocation = allocate(&deck.full(), &inventory.full());
    split_over_boards(deck, &allocation.unmet)
}

/// What is left of `inventory` once `other_deck` has taken the copies it
/// needs. A demand row only consumes inventory entries that are at least as
/// specific as itself; rows without such entries consume nothing.
pub fn exclude_deck_from_inventory(inventory: &Deck, other_deck: &Deck) -> Deck {
    let supply = inventory.full();
    let allocation = allocate(&other_deck.full(), &supply);

    let remaining: CardMultiset = supply
        .iter()
        .map(|(item, n)| (item.clone(), n - allocation.claimed.get(item)))
        .collect();

    split_over_boards(inventory, &remaining)
}

/// Knobs for [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileOptions {
    /// Compare by card name only.
    pub strip_versions: bool,
    /// Keep basic lands on the want list.
    pub keep_basic_lands: bool,
    /// Names treated as basic lands.
    pub basic_lands: Vec<String>,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            strip_versions: false,
            keep_basic_lands: false,
            basic_lands: BASIC_LANDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Sum several inventory decks into one.
pub fn combine_inventories(inventories: &[Deck]) -> Deck {
    inventories
        .iter()
        .fold(Deck::new("inventory"), |acc, deck| acc.sum(deck))
}

/// Sum the inventories and take out every card committed to another deck.
///
/// With `strip_versions` set, both sides are compared by name only.
pub fn free_inventory(
    inventories: &[Deck],
    committed: &[Deck],
    options: &ReconcileOptions,
) -> Deck {
    let mut inventory = combine_inventories(inventories);
    if options.strip_versions {
        inventory = inventory.strip_versions();
    }

    for deck in committed {
        let before = inventory.number_cards();
        inventory = if options.strip_versions {
            exclude_deck_from_inventory(&inventory, &deck.strip_versions())
        } else {
            exclude_deck_from_inventory(&inventory, deck)
        };
        log::debug!(
            "Deck '{}' holds {} inventory cards",
            deck.name,
            before - inventory.number_cards()
        );
    }
    inventory
}

/// Full pipeline: sum the inventories, release the cards committed to other
/// decks, apply the configured transforms, and return what is left to
/// acquire from `want`.
pub fn reconcile(
    want: &Deck,
    inventories: &[Deck],
    committed: &[Deck],
    options: &ReconcileOptions,
) -> Deck {
    let inventory = free_inventory(inventories, committed, options);
    let mut want = if options.strip_versions {
        want.strip_versions()
    } else {
        want.clone()
    };
    if !options.keep_basic_lands {
        want = want.without_basic_lands(&options.basic_lands);
    }

    log::info!(
        "Reconciling {} wanted cards against {} available",
        want.number_cards(),
        inventory.number_cards()
    );

    let missing = exclude_inventory_from_deck(&want, &inventory);
    log::info!(
        "{} of {} wanted cards still missing",
        missing.number_cards(),
        want.number_cards()
    );
    missing
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
