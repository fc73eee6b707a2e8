use scraper::ElementRef;

use crate::parser::locators::Locators;
use crate::parser::text::full_text;

/// All badge labels in the card, trimmed, document order. Duplicates
/// are preserved.
pub fn extract(card: ElementRef, loc: &Locators) -> Vec<String> {
    card.select(&loc.tag)
        .map(|badge| full_text(badge).trim().to_string())
        .collect()
}
