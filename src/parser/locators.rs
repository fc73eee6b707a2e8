use anyhow::{anyhow, Result};
use scraper::Selector;

// Structural signatures of the rendered deck page. Presentational
// classes are all the page offers; there are no semantic hooks.
const CARD: &str = "div.flex.flex-col.pb-4";
const QUESTION: &str = ".font-semibold.tracking-tight";
const TAG: &str = ".inline-flex.items-center.rounded-md.border";
const ANSWER: &str = ".whitespace-pre-line.animated-content";
const QUESTION_NUMBER: &str = ".text-muted-foreground.text-xs";

// Part selectors express the normalization contract, not the page
// shape, and stay fixed across targets.
const QUESTION_PARTS: &str = "p, ul, li";
const ANSWER_BULLETS: &str = "li";
const ANSWER_PARTS: &str = "p, li";

/// One selector per element role. Swapping a selector retargets the
/// extractor to a different document shape without touching the
/// normalization logic.
#[derive(Debug, Clone)]
pub struct Locators {
    pub card: Selector,
    pub question: Selector,
    pub tag: Selector,
    pub answer: Selector,
    pub question_number: Selector,
    pub question_parts: Selector,
    pub answer_bullets: Selector,
    pub answer_parts: Selector,
}

impl Locators {
    /// The fixed signatures of the flashcard site.
    pub fn site_default() -> Self {
        Self::from_css(CARD, QUESTION, TAG, ANSWER, QUESTION_NUMBER)
            .expect("default selectors are valid")
    }

    /// Build a locator set for a different document shape.
    pub fn from_css(
        card: &str,
        question: &str,
        tag: &str,
        answer: &str,
        question_number: &str,
    ) -> Result<Self> {
        Ok(Locators {
            card: parse(card)?,
            question: parse(question)?,
            tag: parse(tag)?,
            answer: parse(answer)?,
            question_number: parse(question_number)?,
            question_parts: parse(QUESTION_PARTS)?,
            answer_bullets: parse(ANSWER_BULLETS)?,
            answer_parts: parse(ANSWER_PARTS)?,
        })
    }
}

fn parse(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector {css:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_defaults_parse() {
        Locators::site_default();
    }

    #[test]
    fn retargeting_accepts_other_shapes() {
        let loc = Locators::from_css("article.card", "h2", ".badge", ".body", ".num");
        assert!(loc.is_ok());
    }

    #[test]
    fn invalid_selector_is_rejected() {
        let loc = Locators::from_css("div[", "h2", ".badge", ".body", ".num");
        assert!(loc.is_err());
    }
}
