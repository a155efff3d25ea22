//! Card identities and the wildcard-aware matching relations between them.

use crate::error::{CoreError, Result};
use crate::set_codes::normalize_edition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A reference to one printing of a card, possibly under-specified.
///
/// Only the name is mandatory. Equality and hashing are structural over all
/// four fields, which makes `CardIdentity` usable as a multiset key; the
/// looser notions of "same card" live in [`CardIdentity::alike`] and
/// [`CardIdentity::is_at_least_as_specific_as`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CardFields", into = "CardFields")]
pub struct CardIdentity {
    name: String,
    edition: Option<String>,
    language: Option<String>,
    collectors_number: Option<NonZeroU32>,
}

/// Wire shape of a card identity; normalized on the way in.
#[derive(Debug, Serialize, Deserialize)]
struct CardFields {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    collectors_number: Option<u32>,
}

impl TryFrom<CardFields> for CardIdentity {
    type Error = CoreError;

    fn try_from(fields: CardFields) -> Result<Self> {
        CardIdentity::from_parts(
            &fields.name,
            fields.edition.as_deref(),
            fields.language.as_deref(),
            fields.collectors_number,
        )
    }
}

impl From<CardIdentity> for CardFields {
    fn from(card: CardIdentity) -> Self {
        CardFields {
            name: card.name,
            edition: card.edition,
            language: card.language,
            collectors_number: card.collectors_number.map(NonZeroU32::get),
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim().to_lowercase();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

/// Wildcard comparison of one optional field: unset on either side matches.
fn field_alike<T: PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

/// `pattern` either leaves the field open or pins it to `instance`'s value.
fn field_covers<T: PartialEq>(instance: &Option<T>, pattern: &Option<T>) -> bool {
    match pattern {
        None => true,
        Some(p) => instance.as_ref() == Some(p),
    }
}

impl CardIdentity {
    /// Create an identity with only a name set.
    pub fn new(name: &str) -> Result<Self> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(CoreError::InvalidIdentity(
                "card name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            edition: None,
            language: None,
            collectors_number: None,
        })
    }

    /// Create an identity from raw, possibly empty, field values.
    ///
    /// Empty edition or language strings are treated as unset. A collector
    /// number of zero is rejected.
    pub fn from_parts(
        name: &str,
        edition: Option<&str>,
        language: Option<&str>,
        collectors_number: Option<u32>,
    ) -> Result<Self> {
        let mut card = Self::new(name)?;
        if let Some(edition) = edition {
            card = card.with_edition(edition);
        }
        if let Some(language) = language {
            card = card.with_language(language);
        }
        if let Some(number) = collectors_number {
            let number = NonZeroU32::new(number).ok_or_else(|| {
                CoreError::InvalidArgument("collector number must be positive".to_string())
            })?;
            card = card.with_collectors_number(number);
        }
        Ok(card)
    }

    /// Pin the edition. Set names are folded to their set code.
    pub fn with_edition(mut self, edition: &str) -> Self {
        let edition = normalize_edition(edition);
        self.edition = if edition.is_empty() {
            None
        } else {
            Some(edition)
        };
        self
    }

    /// Pin the language code.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = normalize_code(language);
        self
    }

    pub fn with_collectors_number(mut self, number: NonZeroU32) -> Self {
        self.collectors_number = Some(number);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn collectors_number(&self) -> Option<u32> {
        self.collectors_number.map(NonZeroU32::get)
    }

    /// Number of optional fields that are pinned (0 to 3).
    pub fn pinned_fields(&self) -> usize {
        usize::from(self.edition.is_some())
            + usize::from(self.language.is_some())
            + usize::from(self.collectors_number.is_some())
    }

    /// Same card name with every printing qualifier cleared.
    pub fn without_version(&self) -> Self {
        Self {
            name: self.name.clone(),
            edition: None,
            language: None,
            collectors_number: None,
        }
    }

    /// Wildcard-tolerant equality.
    ///
    /// Names must match; edition and language match when either side is
    /// unset or both agree. Collector numbers are ignored. Symmetric and
    /// reflexive, but not transitive.
    pub fn alike(&self, other: &CardIdentity) -> bool {
        self.name == other.name
            && field_alike(&self.edition, &other.edition)
            && field_alike(&self.language, &other.language)
    }

    /// True when `self` is an instance of the pattern `other`: every field
    /// `other` pins, `self` pins to the same value.
    ///
    /// Reflexive and transitive, not symmetric. Implies [`alike`](Self::alike).
    pub fn is_at_least_as_specific_as(&self, other: &CardIdentity) -> bool {
        self.name == other.name
            && field_covers(&self.edition, &other.edition)
            && field_covers(&self.language, &other.language)
            && field_covers(&self.collectors_number, &other.collectors_number)
    }
}

impl fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match (&self.edition, self.collectors_number) {
            (Some(edition), Some(number)) => write!(f, " [{edition}:{number}]")?,
            (Some(edition), None) => write!(f, " [{edition}]")?,
            (None, Some(number)) => write!(f, " [#{number}]")?,
            (None, None) => {}
        }
        if let Some(language) = &self.language {
            write!(f, " ({language})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
