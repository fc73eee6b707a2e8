use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One extracted flashcard. Struct field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// 1-based position in document order.
    pub index: usize,
    pub question: String,
    pub tags: Vec<String>,
    pub answer: String,
    #[serde(rename = "questionNumber")]
    pub question_number: String,
    /// Flattened card text, captured only by the behavioral profile.
    #[serde(rename = "rawText", default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// Load a previously emitted records file for the read-side commands.
pub fn load_records(path: &Path) -> Result<Vec<CardRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<CardRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parsing records from {}", path.display()))?;
    Ok(records)
}
