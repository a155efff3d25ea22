//! Card image lookup for proxy sheets.

use deck_core::{CardIdentity, Deck};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Image file per card identity
pub type ImageMap = HashMap<CardIdentity, PathBuf>;

/// Image for a card: the exact printing if mapped, else the bare name.
pub fn resolve<'a>(images: &'a ImageMap, card: &CardIdentity) -> Option<&'a Path> {
    images
        .get(card)
        .or_else(|| images.get(&card.without_version()))
        .map(PathBuf::as_path)
}

/// Images to print for a deck, one entry per image with its copy count, and
/// the cards that have no image.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProxySheet {
    pub images: Vec<(PathBuf, u32)>,
    pub missing: Vec<(CardIdentity, u32)>,
}

/// Project a deck onto the image map. Both boards are included; cards that
/// resolve to the same image are merged, in deck order.
pub fn proxy_sheet(deck: &Deck, images: &ImageMap) -> ProxySheet {
    let mut sheet = ProxySheet::default();
    let mut positions: HashMap<&Path, usize> = HashMap::new();

    for (card, count) in deck.full().iter() {
        match resolve(images, card) {
            Some(path) => match positions.get(path) {
                Some(&i) => sheet.images[i].1 += count,
                None => {
                    positions.insert(path, sheet.images.len());
                    sheet.images.push((path.to_path_buf(), count));
                }
            },
            None => {
                log::warn!("No image for {}", card);
                sheet.missing.push((card.clone(), count));
            }
        }
    }
    sheet
}
