//! deck_core - card identities, deck multisets and reconciliation
//!
//! Works out which cards of a want list are not covered by an inventory,
//! and which inventory cards are still free once other decks are built.
//! Pure in-memory logic; reading and writing decklists lives in `proxylist`.

pub mod card;
pub mod deck;
pub mod error;
pub mod multiset;
pub mod reconcile;
pub mod set_codes;
pub mod transform;

pub use card::CardIdentity;
pub use deck::{Board, Deck};
pub use error::{CoreError, Result};
pub use multiset::CardMultiset;
pub use reconcile::{
    combine_inventories, exclude_deck_from_inventory, exclude_inventory_from_deck, free_inventory,
    reconcile, ReconcileOptions,
};
pub use transform::{filter_basic_lands, strip_version, BASIC_LANDS};
