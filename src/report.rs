use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::export::{OutputSink, MEDIA_CSV};
use crate::records::CardRecord;

static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Tag values that name a question type rather than a source firm.
const TYPE_CATEGORIES: &[&str] = &[
    "Accounting",
    "DCF",
    "Enterprise & Equity Value",
    "Finance Brain Teasers",
    "General Brain Teasers",
    "Leveraged Buyouts (LBOs)",
    "Market Knowledge",
    "Merger Model (M&A)",
    "Restructuring / Distressed M&A",
    "Restructuring group",
    "Technology Banking",
    "Valuation",
];

const HEADER: &[&str] = &[
    "Question Number",
    "Question",
    "Reported In",
    "Type",
    "Answer",
    "Source",
];

/// Collapse repeated newlines and runs of spaces/tabs, keeping
/// intentional single line breaks, then trim.
pub fn clean_text(text: &str) -> String {
    let collapsed = NEWLINE_RUNS.replace_all(text, "\n");
    let collapsed = SPACE_RUNS.replace_all(&collapsed, " ");
    collapsed.trim().to_string()
}

pub fn is_reported_in(tag: &str) -> bool {
    tag == "IB Vine Select" || tag.starts_with("Reported in ")
}

pub fn is_type_category(tag: &str) -> bool {
    TYPE_CATEGORIES.contains(&tag)
}

/// One flattened row of the cleaned export.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub question_number: String,
    pub question: String,
    pub reported_in: String,
    pub question_type: String,
    pub answer: String,
    pub source: String,
}

/// Classify and clean each record. First matching tag wins for both
/// labels, mirroring scrape order.
pub fn build_rows(records: &[CardRecord], source: &str) -> Vec<ReportRow> {
    records
        .iter()
        .map(|record| {
            let reported_in = record
                .tags
                .iter()
                .find(|t| is_reported_in(t))
                .cloned()
                .unwrap_or_default();
            let question_type = record
                .tags
                .iter()
                .find(|t| is_type_category(t))
                .cloned()
                .unwrap_or_default();
            ReportRow {
                question_number: record.question_number.clone(),
                question: clean_text(&record.question),
                reported_in,
                question_type,
                answer: clean_text(&record.answer),
                source: source.to_string(),
            }
        })
        .collect()
}

pub fn to_csv(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    push_row(&mut out, HEADER);
    for row in rows {
        push_row(
            &mut out,
            &[
                row.question_number.as_str(),
                row.question.as_str(),
                row.reported_in.as_str(),
                row.question_type.as_str(),
                row.answer.as_str(),
                row.source.as_str(),
            ],
        );
    }
    out
}

pub fn deliver_report(rows: &[ReportRow], name: &str, sink: &dyn OutputSink) -> Result<PathBuf> {
    sink.write(name, MEDIA_CSV, to_csv(rows).as_bytes())
}

fn push_row(out: &mut String, cells: &[&str]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

fn needs_quotes(cell: &str) -> bool {
    cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tags: &[&str], question: &str, answer: &str) -> CardRecord {
        CardRecord {
            index: 1,
            question: question.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            answer: answer.into(),
            question_number: "Question 1 of 10".into(),
            raw_text: None,
        }
    }

    #[test]
    fn clean_text_collapses_runs() {
        assert_eq!(clean_text("a\n\n\nb"), "a\nb");
        assert_eq!(clean_text("a  \t b"), "a b");
        assert_eq!(clean_text("  padded  "), "padded");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn reported_in_rule() {
        assert!(is_reported_in("Reported in Goldman Sachs Interview"));
        assert!(is_reported_in("IB Vine Select"));
        assert!(!is_reported_in("Accounting"));
        assert!(!is_reported_in("reported in lowercase"));
    }

    #[test]
    fn first_matching_tag_wins() {
        let records = vec![record(
            &[
                "Reported in Citi Interview",
                "Reported in UBS Interview",
                "DCF",
                "Valuation",
            ],
            "Q",
            "A",
        )];
        let rows = build_rows(&records, "Technical");
        assert_eq!(rows[0].reported_in, "Reported in Citi Interview");
        assert_eq!(rows[0].question_type, "DCF");
    }

    #[test]
    fn unclassified_tags_leave_labels_empty() {
        let records = vec![record(&["easy", "arrays"], "Q", "A")];
        let rows = build_rows(&records, "Technical");
        assert_eq!(rows[0].reported_in, "");
        assert_eq!(rows[0].question_type, "");
    }

    #[test]
    fn csv_quotes_embedded_separators() {
        let records = vec![record(&[], "What, exactly?", "He said \"no\"\nTwice")];
        let rows = build_rows(&records, "Behavioral");
        let csv = to_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Question Number,Question,Reported In,Type,Answer,Source"
        );
        assert!(csv.contains("\"What, exactly?\""));
        assert!(csv.contains("\"He said \"\"no\"\"\nTwice\""));
    }

    #[test]
    fn rows_carry_source_label() {
        let rows = build_rows(&[record(&[], "Q", "A")], "Behavioral");
        assert_eq!(rows[0].source, "Behavioral");
    }
}
