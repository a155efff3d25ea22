//! proxylist - which cards of a decklist still need proxies
//!
//! Reads a want list and any number of inventory files, releases the cards
//! already committed to other decks, and writes out what is left to acquire.
//! The matching itself lives in `deck_core`; this crate handles the file
//! formats around it.

pub mod error;
pub mod images;
pub mod language;
pub mod loader;
pub mod readers;
pub mod writers;

pub use error::{ProxyError, Result};
pub use images::{proxy_sheet, resolve, ImageMap, ProxySheet};
pub use language::{language_code, Language};
pub use loader::{guarded_load, load_all, load_deck, load_inventory, save_deck};
pub use readers::{
    DeckReader, DeckboxCsvReader, Format, JsonReader, PlainTextReader, XmageReader,
};
pub use writers::{DeckWriter, JsonWriter, PlainTextWriter};
