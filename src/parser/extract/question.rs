use scraper::ElementRef;

use crate::parser::locators::Locators;
use crate::parser::text::full_text;

/// Normalize the question container into newline-joined lines, list
/// items prefixed with a bullet. No container → empty string; a
/// container with no paragraph/list children falls back to its full
/// text verbatim.
pub fn extract(card: ElementRef, loc: &Locators) -> String {
    let container = match card.select(&loc.question).next() {
        Some(el) => el,
        None => return String::new(),
    };

    let lines: Vec<String> = container
        .select(&loc.question_parts)
        .map(|part| {
            if part.value().name() == "li" {
                format!("• {}", full_text(part))
            } else {
                full_text(part)
            }
        })
        .collect();

    if lines.is_empty() {
        full_text(container)
    } else {
        lines.join("\n")
    }
}
