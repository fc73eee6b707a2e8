pub mod extract;
pub mod locators;
pub mod text;

use scraper::Html;
use tracing::debug;

use crate::deck::ExtractOptions;
use crate::records::CardRecord;
use locators::Locators;

/// Single pass: parse the document, then map each matched card element
/// to a record in document order.
pub fn process_document(html: &str, loc: &Locators, opts: &ExtractOptions) -> Vec<CardRecord> {
    let document = Html::parse_document(html);
    let records: Vec<CardRecord> = document
        .select(&loc.card)
        .enumerate()
        .map(|(i, card)| extract::extract_card(card, i + 1, loc, opts))
        .collect();
    debug!("matched {} card elements", records.len());
    records
}
