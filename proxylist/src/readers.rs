//! Decklist readers.
//!
//! Every reader turns a text source into the `(main, side)` entry lists
//! that [`Deck::from_entries`] consumes. The reconciliation core never sees
//! which format a deck came from.

use crate::error::{ProxyError, Result};
use crate::language::language_code;
use deck_core::{CardIdentity, Deck};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};
use std::num::NonZeroU32;

/// Card entries of one board
pub type Entries = Vec<(CardIdentity, u32)>;

/// Input adapter: parses a source into main and side board entries.
pub trait DeckReader {
    fn read(&self, source: &mut dyn Read) -> Result<(Entries, Entries)>;
}

/// Supported decklist formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// `4 Lightning Bolt [M10]` lines with main/side headers
    Text,
    /// deckbox.org inventory CSV export
    DeckboxCsv,
    /// Deck JSON as written by this tool
    Json,
    /// XMage `.dck` save file
    Xmage,
}

impl Format {
    pub fn reader(self) -> Box<dyn DeckReader> {
        match self {
            Format::Text => Box::new(PlainTextReader),
            Format::DeckboxCsv => Box::new(DeckboxCsvReader),
            Format::Json => Box::new(JsonReader),
            Format::Xmage => Box::new(XmageReader),
        }
    }
}

lazy_static! {
    static ref MAIN_HEADER: Regex =
        Regex::new(r"(?i)^(main(\s*(board|deck))?|deck)\s*(\(\d+\))?\s*:?$").unwrap();
    static ref SIDE_HEADER: Regex =
        Regex::new(r"(?i)^side(\s*board)?\s*(\(\d+\))?\s*:?$").unwrap();
    static ref CARD_LINE: Regex = Regex::new(
        r"^(?P<count>\d+)x?\s+(?:\[(?P<pre>[^\]]+)\]\s+)?(?P<name>[^\[\]]+?)(?:\s+\[(?P<post>[^\]]+)\])?(?:\s+\((?P<lang>[A-Za-z]{2,3})\))?$"
    )
    .unwrap();
    static ref XMAGE_LINE: Regex = Regex::new(
        r"(?i)^(?P<sb>SB:)?\s*(?P<count>\d+)\s+\[(?P<set>[^\]:]+):(?P<number>\d+)\]\s+(?P<name>.+)$"
    )
    .unwrap();
}

fn parse_count(text: &str, line: usize) -> Result<u32> {
    text.parse()
        .map_err(|_| ProxyError::malformed(line, "card count out of range"))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_collectors_number(text: &str, line: usize) -> Result<NonZeroU32> {
    text.trim()
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| ProxyError::malformed(line, format!("invalid collector number '{text}'")))
}

/// Plain text decklists.
///
/// ```text
/// Mainboard
/// 4 Lightning Bolt [M10]
/// 2 [LEA] Counterspell
/// 1 Sol Ring [C14:270] (en)
/// Sideboard
/// 3 Smash to Smithereens
/// ```
///
/// Blank lines and `#` / `//` comments are skipped. Lines before any
/// header belong to the main board.
pub struct PlainTextReader;

impl PlainTextReader {
    /// Parse the bracketed printing: `m10`, `m10:146` or `#146`.
    ///
    /// Set names may contain colons (`FTV: Dragons`); only an all-digit
    /// suffix after the last colon is taken as the collector number.
    fn parse_printing(card: CardIdentity, printing: &str, line: usize) -> Result<CardIdentity> {
        let printing = printing.trim();
        let (edition, number) = match printing.strip_prefix('#') {
            Some(number) => ("", Some(number)),
            None => match printing.rsplit_once(':') {
                Some((edition, number)) if is_digits(number.trim()) => (edition, Some(number)),
                _ => (printing, None),
            },
        };

        let card = card.with_edition(edition);
        match number {
            Some(number) => Ok(card.with_collectors_number(parse_collectors_number(number, line)?)),
            None => Ok(card),
        }
    }

    fn parse_line(text: &str, line: usize) -> Result<(CardIdentity, u32)> {
        let caps = CARD_LINE
            .captures(text)
            .ok_or_else(|| ProxyError::malformed(line, format!("unrecognized line '{text}'")))?;

        let count = parse_count(&caps["count"], line)?;
        let mut card = CardIdentity::new(&caps["name"])?;

        if let Some(printing) = caps.name("pre").or_else(|| caps.name("post")) {
            card = Self::parse_printing(card, printing.as_str(), line)?;
        }
        if let Some(lang) = caps.name("lang") {
            card = card.with_language(&language_code(lang.as_str()));
        }

        Ok((card, count))
    }
}

impl DeckReader for PlainTextReader {
    fn read(&self, source: &mut dyn Read) -> Result<(Entries, Entries)> {
        let mut main = Vec::new();
        let mut side = Vec::new();
        let mut in_side = false;

        for (i, line) in BufReader::new(source).lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') || text.starts_with("//") {
                continue;
            }
            if MAIN_HEADER.is_match(text) {
                in_side = false;
                continue;
            }
            if SIDE_HEADER.is_match(text) {
                in_side = true;
                continue;
            }

            let entry = Self::parse_line(text, i + 1)?;
            if in_side {
                side.push(entry);
            } else {
                main.push(entry);
            }
        }

        Ok((main, side))
    }
}

/// One row of a deckbox.org inventory export; unused columns are ignored.
#[derive(Debug, Deserialize)]
struct DeckboxRow {
    #[serde(rename = "Count")]
    count: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Edition", default)]
    edition: String,
    #[serde(rename = "Card Number", default)]
    card_number: String,
    #[serde(rename = "Language", default)]
    language: String,
    #[serde(rename = "Section", default)]
    section: String,
}

impl DeckboxRow {
    /// Inventory exports have no section column; deck exports mark each
    /// row `main` or `sideboard`.
    fn is_main(&self) -> bool {
        matches!(
            self.section.to_lowercase().as_str(),
            "" | "main" | "mainboard"
        )
    }
}

/// deckbox.org CSV, either an inventory export or a deck export with a
/// `Section` column. Rows of any section other than main go to the side
/// board.
pub struct DeckboxCsvReader;

impl DeckReader for DeckboxCsvReader {
    fn read(&self, source: &mut dyn Read) -> Result<(Entries, Entries)> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut main = Vec::new();
        let mut side = Vec::new();
        for (i, result) in rdr.deserialize().enumerate() {
            let row: DeckboxRow = result?;
            // header is line 1
            let line = i + 2;

            let count: u32 = row.count.parse().map_err(|_| {
                ProxyError::malformed(line, format!("invalid count '{}'", row.count))
            })?;
            // Collector numbers like "146a" carry no usable number
            let number = row.card_number.parse::<u32>().ok().filter(|n| *n > 0);
            let card = CardIdentity::from_parts(
                &row.name,
                Some(&row.edition),
                Some(&language_code(&row.language)),
                number,
            )
            .map_err(|e| ProxyError::malformed(line, e.to_string()))?;

            if row.is_main() {
                main.push((card, count));
            } else {
                side.push((card, count));
            }
        }

        Ok((main, side))
    }
}

/// XMage deck save files.
///
/// ```text
/// NAME:Burn
/// 4 [M10:146] Lightning Bolt
/// SB: 2 [M19:156] Shock
/// LAYOUT MAIN:(1,1)(NONE,false,50)|([M10:146])
/// ```
///
/// The `NAME:` header and the trailing `LAYOUT` lines carry no cards.
pub struct XmageReader;

impl XmageReader {
    fn parse_line(text: &str, line: usize) -> Result<(CardIdentity, u32, bool)> {
        let caps = XMAGE_LINE
            .captures(text)
            .ok_or_else(|| ProxyError::malformed(line, format!("unrecognized line '{text}'")))?;

        let count = parse_count(&caps["count"], line)?;
        let number = parse_collectors_number(&caps["number"], line)?;
        let card = CardIdentity::new(&caps["name"])?
            .with_edition(&caps["set"])
            .with_collectors_number(number);

        Ok((card, count, caps.name("sb").is_some()))
    }
}

impl DeckReader for XmageReader {
    fn read(&self, source: &mut dyn Read) -> Result<(Entries, Entries)> {
        let mut main = Vec::new();
        let mut side = Vec::new();

        for (i, line) in BufReader::new(source).lines().enumerate() {
            let line = line?;
            let text = line.trim();
            let upper = text.to_uppercase();
            if text.is_empty() || upper.starts_with("NAME:") || upper.starts_with("LAYOUT") {
                continue;
            }

            let (card, count, sideboard) = Self::parse_line(text, i + 1)?;
            if sideboard {
                side.push((card, count));
            } else {
                main.push((card, count));
            }
        }

        Ok((main, side))
    }
}

/// Deck JSON, `{"name", "mainboard": [[card, n], ...], "sideboard": [...]}`.
pub struct JsonReader;

impl DeckReader for JsonReader {
    fn read(&self, source: &mut dyn Read) -> Result<(Entries, Entries)> {
        let deck: Deck = serde_json::from_reader(source)?;
        Ok((
            deck.main().iter().map(|(c, n)| (c.clone(), n)).collect(),
            deck.side().iter().map(|(c, n)| (c.clone(), n)).collect(),
        ))
    }
}

#[cfg(test)]
#[path = "readers_tests.rs"]
mod tests;
