//! Counted collections of card identities.

use crate::card::CardIdentity;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A multiset of card identities.
///
/// Entries keep their insertion order, which is what makes the
/// reconciliation tie-break reproducible. A count of zero is never stored:
/// every mutating method prunes emptied entries before returning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(CardIdentity, u32)>", into = "Vec<(CardIdentity, u32)>")]
pub struct CardMultiset {
    entries: Vec<(CardIdentity, u32)>,
    index: HashMap<CardIdentity, usize>,
}

impl CardMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` copies of `card`. Adding zero copies is a no-op.
    pub fn add(&mut self, card: CardIdentity, n: u32) {
        if n == 0 {
            return;
        }
        match self.index.get(&card) {
            Some(&pos) => {
                let count = &mut self.entries[pos].1;
                *count = count.saturating_add(n);
            }
            None => {
                self.index.insert(card.clone(), self.entries.len());
                self.entries.push((card, n));
            }
        }
    }

    /// Add with a signed count, as read from external sources.
    pub fn add_signed(&mut self, card: CardIdentity, n: i64) -> Result<()> {
        let n = checked_count(n)?;
        self.add(card, n);
        Ok(())
    }

    /// Remove up to `n` copies of exactly `card` (all copies when `n` is
    /// `None`). Returns how many copies were actually removed.
    pub fn remove(&mut self, card: &CardIdentity, n: Option<u32>) -> u32 {
        let Some(&pos) = self.index.get(card) else {
            return 0;
        };
        let current = self.entries[pos].1;
        let removed = n.map_or(current, |n| n.min(current));
        self.entries[pos].1 = current - removed;
        if self.entries[pos].1 == 0 {
            self.prune_at(pos);
        }
        removed
    }

    /// Remove with a signed count; negative counts are rejected.
    pub fn remove_signed(&mut self, card: &CardIdentity, n: i64) -> Result<u32> {
        let n = checked_count(n)?;
        Ok(self.remove(card, Some(n)))
    }

    fn prune_at(&mut self, pos: usize) {
        let (card, _) = self.entries.remove(pos);
        self.index.remove(&card);
        for (i, (card, _)) in self.entries.iter().enumerate().skip(pos) {
            self.index.insert(card.clone(), i);
        }
    }

    /// Count stored under exactly `card`.
    pub fn get(&self, card: &CardIdentity) -> u32 {
        self.index
            .get(card)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, card: &CardIdentity) -> bool {
        self.index.contains_key(card)
    }

    /// True if any entry is [`alike`](CardIdentity::alike) to `card`.
    pub fn contains_variant(&self, card: &CardIdentity) -> bool {
        self.entries.iter().any(|(item, _)| card.alike(item))
    }

    /// New multiset whose counts are the per-identity sums of both operands.
    pub fn sum(&self, other: &CardMultiset) -> CardMultiset {
        let mut out = self.clone();
        out.extend(other.iter().map(|(card, n)| (card.clone(), n)));
        out
    }

    /// Entries for which `predicate(entry, pattern)` holds, lazily.
    pub fn find_matches<'a, F>(
        &'a self,
        pattern: &'a CardIdentity,
        predicate: F,
    ) -> impl Iterator<Item = (&'a CardIdentity, u32)> + 'a
    where
        F: Fn(&CardIdentity, &CardIdentity) -> bool + 'a,
    {
        self.iter().filter(move |(card, _)| predicate(*card, pattern))
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardIdentity, u32)> + '_ {
        self.entries.iter().map(|(card, n)| (card, *n))
    }

    /// Number of distinct identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of copies over all identities.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }
}

fn checked_count(n: i64) -> Result<u32> {
    if n < 0 {
        return Err(CoreError::InvalidArgument(format!(
            "count must not be negative, got {n}"
        )));
    }
    u32::try_from(n)
        .map_err(|_| CoreError::InvalidArgument(format!("count {n} is out of range")))
}

/// Multiset equality: same identities with the same counts, order ignored.
impl PartialEq for CardMultiset {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(card, n)| other.get(card) == n)
    }
}

impl Eq for CardMultiset {}

impl Extend<(CardIdentity, u32)> for CardMultiset {
    fn extend<I: IntoIterator<Item = (CardIdentity, u32)>>(&mut self, iter: I) {
        for (card, n) in iter {
            self.add(card, n);
        }
    }
}

impl FromIterator<(CardIdentity, u32)> for CardMultiset {
    fn from_iter<I: IntoIterator<Item = (CardIdentity, u32)>>(iter: I) -> Self {
        let mut set = CardMultiset::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for CardMultiset {
    type Item = (CardIdentity, u32);
    type IntoIter = std::vec::IntoIter<(CardIdentity, u32)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Vec<(CardIdentity, u32)>> for CardMultiset {
    fn from(entries: Vec<(CardIdentity, u32)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<CardMultiset> for Vec<(CardIdentity, u32)> {
    fn from(set: CardMultiset) -> Self {
        set.entries
    }
}

#[cfg(test)]
#[path = "multiset_tests.rs"]
mod tests;
