pub mod answer;
pub mod question;
pub mod tags;

use scraper::ElementRef;

use crate::deck::ExtractOptions;
use crate::parser::locators::Locators;
use crate::parser::text::{flatten_text, full_text};
use crate::records::CardRecord;

/// Build the record for one card. `index` is the 1-based position in
/// document order.
pub fn extract_card(
    card: ElementRef,
    index: usize,
    loc: &Locators,
    opts: &ExtractOptions,
) -> CardRecord {
    CardRecord {
        index,
        question: question::extract(card, loc),
        tags: tags::extract(card, loc),
        answer: answer::extract(card, loc, opts.policy),
        question_number: question_number(card, loc),
        raw_text: opts.include_raw_text.then(|| flatten_text(card)),
    }
}

/// Free-text label from the small-text element, if any.
fn question_number(card: ElementRef, loc: &Locators) -> String {
    card.select(&loc.question_number)
        .next()
        .map(|el| full_text(el).trim().to_string())
        .unwrap_or_default()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use crate::deck::{DeckKind, ExtractOptions};
    use crate::parser::locators::Locators;
    use crate::parser::process_document;
    use crate::records::CardRecord;

    fn extract_fixture(fixture: &str, deck: DeckKind) -> Vec<CardRecord> {
        let html =
            std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
        let loc = Locators::site_default();
        process_document(&html, &loc, &ExtractOptions::for_deck(deck))
    }

    #[test]
    fn behavioral_indexes_are_contiguous() {
        let records = extract_fixture("behavioral", DeckKind::Behavioral);
        assert_eq!(records.len(), 3);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.index, i + 1);
        }
    }

    #[test]
    fn behavioral_multi_part_question() {
        let records = extract_fixture("behavioral", DeckKind::Behavioral);
        assert_eq!(
            records[0].question,
            "Describe a time you led a team.\nWhat was the outcome?"
        );
    }

    #[test]
    fn behavioral_bulleted_answer() {
        let records = extract_fixture("behavioral", DeckKind::Behavioral);
        assert_eq!(
            records[0].answer,
            "• Set the context\n• Describe the action\n• Share the result"
        );
    }

    #[test]
    fn behavioral_question_number_label() {
        let records = extract_fixture("behavioral", DeckKind::Behavioral);
        assert_eq!(records[0].question_number, "Question 1 of 25");
        assert_eq!(records[2].question_number, "");
    }

    #[test]
    fn behavioral_raw_text_captured() {
        let records = extract_fixture("behavioral", DeckKind::Behavioral);
        for r in &records {
            assert!(r.raw_text.is_some());
        }
        let raw = records[0].raw_text.as_deref().unwrap();
        assert!(raw.contains("Describe a time you led a team."));
        assert!(raw.contains("Set the context"));
    }

    #[test]
    fn behavioral_question_fallback_verbatim() {
        let records = extract_fixture("behavioral", DeckKind::Behavioral);
        assert_eq!(records[1].question, "Tell me about yourself.");
    }

    #[test]
    fn behavioral_answer_fallback_without_items() {
        let records = extract_fixture("behavioral", DeckKind::Behavioral);
        assert_eq!(
            records[1].answer,
            "Walk through your background chronologically."
        );
    }

    #[test]
    fn behavioral_missing_question_container() {
        let records = extract_fixture("behavioral", DeckKind::Behavioral);
        assert_eq!(records[2].question, "");
    }

    #[test]
    fn technical_tags_keep_order_and_duplicates() {
        let records = extract_fixture("technical", DeckKind::Technical);
        assert_eq!(records[0].tags, vec!["easy", "arrays", "easy"]);
    }

    #[test]
    fn technical_paragraph_and_bullet_answer() {
        let records = extract_fixture("technical", DeckKind::Technical);
        assert_eq!(records[0].answer, "Intro\n• Detail");
    }

    #[test]
    fn technical_raw_text_not_captured() {
        let records = extract_fixture("technical", DeckKind::Technical);
        assert!(records.iter().all(|r| r.raw_text.is_none()));
    }

    #[test]
    fn technical_answer_fallback_is_trimmed() {
        let records = extract_fixture("technical", DeckKind::Technical);
        assert_eq!(
            records[1].answer,
            "Working capital is current assets minus current liabilities."
        );
    }

    #[test]
    fn technical_missing_answer_container() {
        let records = extract_fixture("technical", DeckKind::Technical);
        assert_eq!(records[2].answer, "");
    }
}
