//! File-backed loading and saving of decks.

use crate::error::Result;
use crate::readers::Format;
use deck_core::{combine_inventories, Deck};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Deck name for a file: its stem, or the whole path when there is none.
fn deck_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read one deck file. The deck is named after the file stem.
pub fn load_deck(path: &Path, format: Format) -> Result<Deck> {
    let mut source = BufReader::new(File::open(path)?);
    let (main, side) = format.reader().read(&mut source)?;
    let deck = Deck::from_entries(&deck_name(path), main, side);

    log::debug!(
        "Loaded {} ({} main, {} side)",
        path.display(),
        deck.number_cards_main(),
        deck.number_cards_side()
    );
    Ok(deck)
}

/// Load a deck, logging any failure and falling back to an empty deck.
///
/// One unreadable inventory file must not stop the others from counting.
pub fn guarded_load(path: &Path, format: Format) -> Deck {
    match load_deck(path, format) {
        Ok(deck) => deck,
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            Deck::new(&deck_name(path))
        }
    }
}

/// Guarded load of every path, in order.
pub fn load_all<P: AsRef<Path>>(paths: &[P], format: Format) -> Vec<Deck> {
    paths
        .iter()
        .map(|path| guarded_load(path.as_ref(), format))
        .collect()
}

/// Sum of every inventory file that could be read.
pub fn load_inventory<P: AsRef<Path>>(paths: &[P], format: Format) -> Deck {
    let inventory = combine_inventories(&load_all(paths, format));
    log::info!(
        "Inventory: {} cards from {} files",
        inventory.number_cards(),
        paths.len()
    );
    inventory
}

/// Write a deck to `path`, replacing any existing file.
pub fn save_deck(path: &Path, deck: &Deck, format: Format) -> Result<()> {
    let writer = format.writer()?;
    let mut out = BufWriter::new(File::create(path)?);
    writer.write(&mut out, deck)?;
    out.flush()?;
    log::info!("Wrote {} cards to {}", deck.number_cards(), path.display());
    Ok(())
}
