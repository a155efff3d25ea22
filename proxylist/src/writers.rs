//! Decklist writers, the output side of [`Format`].

use crate::error::{ProxyError, Result};
use crate::readers::Format;
use deck_core::{CardMultiset, Deck};
use std::io::Write;

/// Output adapter: renders a deck into a sink.
pub trait DeckWriter {
    fn write(&self, out: &mut dyn Write, deck: &Deck) -> Result<()>;
}

impl Format {
    /// Writer for this format. deckbox.org CSV and XMage are import-only.
    pub fn writer(self) -> Result<Box<dyn DeckWriter>> {
        match self {
            Format::Text => Ok(Box::new(PlainTextWriter)),
            Format::Json => Ok(Box::new(JsonWriter)),
            Format::DeckboxCsv | Format::Xmage => Err(ProxyError::Unsupported(format!(
                "{:?} decks cannot be written",
                self
            ))),
        }
    }
}

/// Plain text in the layout [`PlainTextReader`](crate::readers::PlainTextReader) accepts.
///
/// The `Sideboard` section is left out when the side board is empty.
pub struct PlainTextWriter;

impl PlainTextWriter {
    fn write_board(out: &mut dyn Write, header: &str, board: &CardMultiset) -> Result<()> {
        writeln!(out, "{header}")?;
        for (card, count) in board.iter() {
            writeln!(out, "{count} {card}")?;
        }
        Ok(())
    }
}

impl DeckWriter for PlainTextWriter {
    fn write(&self, out: &mut dyn Write, deck: &Deck) -> Result<()> {
        Self::write_board(out, "Mainboard", deck.main())?;
        if !deck.side().is_empty() {
            Self::write_board(out, "Sideboard", deck.side())?;
        }
        Ok(())
    }
}

/// Pretty-printed deck JSON.
pub struct JsonWriter;

impl DeckWriter for JsonWriter {
    fn write(&self, out: &mut dyn Write, deck: &Deck) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, deck)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::{DeckReader, JsonReader, PlainTextReader};
    use deck_core::CardIdentity;

    fn sample_deck() -> Deck {
        let mut deck = Deck::new("burn");
        deck.add_main(
            CardIdentity::from_parts("Lightning Bolt", Some("M10"), None, Some(146)).unwrap(),
            4,
        );
        deck.add_main(CardIdentity::new("Mountain").unwrap(), 16);
        deck.add_side(
            CardIdentity::from_parts("Shock", None, Some("de"), None).unwrap(),
            2,
        );
        deck
    }

    fn render(writer: &dyn DeckWriter, deck: &Deck) -> String {
        let mut out: Vec<u8> = Vec::new();
        writer.write(&mut out, deck).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_layout() {
        assert_eq!(
            render(&PlainTextWriter, &sample_deck()),
            "Mainboard\n4 lightning bolt [m10:146]\n16 mountain\nSideboard\n2 shock (de)\n"
        );
    }

    #[test]
    fn test_text_omits_empty_sideboard() {
        let mut deck = Deck::new("x");
        deck.add_main(CardIdentity::new("Opt").unwrap(), 1);
        assert_eq!(render(&PlainTextWriter, &deck), "Mainboard\n1 opt\n");
    }

    #[test]
    fn test_text_reads_back() {
        let deck = sample_deck();
        let text = render(&PlainTextWriter, &deck);
        let (main, side) = PlainTextReader.read(&mut text.as_bytes()).unwrap();
        assert_eq!(Deck::from_entries("burn", main, side), deck);
    }

    #[test]
    fn test_json_reads_back() {
        let deck = sample_deck();
        let json = render(&JsonWriter, &deck);
        let (main, side) = JsonReader.read(&mut json.as_bytes()).unwrap();
        assert_eq!(Deck::from_entries("burn", main, side), deck);
    }

    #[test]
    fn test_import_only_formats_have_no_writer() {
        for format in [Format::DeckboxCsv, Format::Xmage] {
            assert!(matches!(format.writer(), Err(ProxyError::Unsupported(_))));
        }
        assert!(Format::Text.writer().is_ok());
    }
}
