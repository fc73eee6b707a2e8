use scraper::ElementRef;

use crate::deck::AnswerPolicy;
use crate::parser::locators::Locators;
use crate::parser::text::full_text;

/// Normalize the answer container under the selected policy. The two
/// policies intentionally disagree on trimming and empty-entry
/// filtering; see `AnswerPolicy`.
pub fn extract(card: ElementRef, loc: &Locators, policy: AnswerPolicy) -> String {
    let container = match card.select(&loc.answer).next() {
        Some(el) => el,
        None => return String::new(),
    };

    match policy {
        AnswerPolicy::BulletOnly => bullet_only(container, loc),
        AnswerPolicy::ParagraphAndBullet => paragraph_and_bullet(container, loc),
    }
}

/// List items as-is, bullet-prefixed. No items → container text, also
/// as-is.
fn bullet_only(container: ElementRef, loc: &Locators) -> String {
    let items: Vec<String> = container
        .select(&loc.answer_bullets)
        .map(|li| format!("• {}", full_text(li)))
        .collect();

    if items.is_empty() {
        full_text(container)
    } else {
        items.join("\n")
    }
}

/// Paragraphs and list items, trimmed; entries that trim to nothing are
/// dropped. No parts → trimmed container text.
fn paragraph_and_bullet(container: ElementRef, loc: &Locators) -> String {
    let parts: Vec<ElementRef> = container.select(&loc.answer_parts).collect();
    if parts.is_empty() {
        return full_text(container).trim().to_string();
    }

    parts
        .into_iter()
        .filter_map(|part| {
            let text = full_text(part);
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(if part.value().name() == "li" {
                format!("• {text}")
            } else {
                text.to_string()
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}
