use clap::ValueEnum;

/// How the answer container is normalized. The two policies disagree
/// on trimming and empty-entry filtering; both behaviors are kept
/// selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnswerPolicy {
    /// List items only, untrimmed; no items → container text as-is.
    BulletOnly,
    /// Paragraphs and list items, trimmed, empty entries dropped;
    /// none → trimmed container text.
    ParagraphAndBullet,
}

/// Deck preset: picks the answer policy, raw-text capture, and the
/// artifact file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeckKind {
    Behavioral,
    Technical,
}

impl DeckKind {
    pub fn answer_policy(self) -> AnswerPolicy {
        match self {
            DeckKind::Behavioral => AnswerPolicy::BulletOnly,
            DeckKind::Technical => AnswerPolicy::ParagraphAndBullet,
        }
    }

    pub fn includes_raw_text(self) -> bool {
        matches!(self, DeckKind::Behavioral)
    }

    pub fn file_name(self) -> &'static str {
        match self {
            DeckKind::Behavioral => "behavioral_flashcards_complete.json",
            DeckKind::Technical => "technical_flashcards_complete_v2.json",
        }
    }

    /// Label recorded in the report's Source column.
    pub fn label(self) -> &'static str {
        match self {
            DeckKind::Behavioral => "Behavioral",
            DeckKind::Technical => "Technical",
        }
    }
}

/// Extraction settings resolved from a deck preset plus CLI overrides.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub policy: AnswerPolicy,
    pub include_raw_text: bool,
}

impl ExtractOptions {
    pub fn for_deck(deck: DeckKind) -> Self {
        ExtractOptions {
            policy: deck.answer_policy(),
            include_raw_text: deck.includes_raw_text(),
        }
    }
}
