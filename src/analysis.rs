use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::records::CardRecord;

/// Aggregated view of the tag arrays across a records file. Positions
/// matter: the site emits source firm and question type at fixed slots,
/// and the distribution is how that structure was discovered.
pub struct TagReport {
    pub total: usize,
    pub unique: BTreeSet<String>,
    pub length_counts: BTreeMap<usize, usize>,
    pub position_tags: BTreeMap<usize, BTreeSet<String>>,
}

pub fn analyze(records: &[CardRecord]) -> TagReport {
    let length_counts: BTreeMap<usize, usize> = records
        .iter()
        .map(|r| r.tags.len())
        .counts()
        .into_iter()
        .collect();

    let mut unique = BTreeSet::new();
    let mut position_tags: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
    for record in records {
        for (pos, tag) in record.tags.iter().enumerate() {
            position_tags.entry(pos).or_default().insert(tag.clone());
            unique.insert(tag.clone());
        }
    }

    TagReport {
        total: records.len(),
        unique,
        length_counts,
        position_tags,
    }
}

impl TagReport {
    /// Tags naming a source ("Reported in …"), case-insensitive.
    pub fn reported_in_tags(&self) -> Vec<&String> {
        self.unique
            .iter()
            .filter(|t| t.to_lowercase().contains("reported in"))
            .collect()
    }

    /// Non-source tags seen at `position`, the candidates for a type
    /// category.
    pub fn type_candidates(&self, position: usize) -> Vec<&String> {
        self.position_tags
            .get(&position)
            .map(|set| {
                set.iter()
                    .filter(|t| !t.to_lowercase().contains("reported"))
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub fn render(report: &TagReport, records: &[CardRecord], samples: usize) -> String {
    let mut out = String::new();
    out.push_str("## Tag Report\n");
    out.push_str(&format!(
        "- Records: {}\n- Unique tags: {}\n",
        report.total,
        report.unique.len()
    ));

    out.push_str("\n### Tag count distribution\n");
    for (len, count) in &report.length_counts {
        out.push_str(&format!("- {} tags: {} questions\n", len, count));
    }

    out.push_str("\n### Tags by position\n");
    for (pos, tags) in &report.position_tags {
        out.push_str(&format!("- position {} ({} unique)\n", pos, tags.len()));
        for tag in tags {
            out.push_str(&format!("  - {}\n", tag));
        }
    }

    let reported = report.reported_in_tags();
    out.push_str(&format!(
        "\n### Tags containing \"Reported in\" ({})\n",
        reported.len()
    ));
    for tag in reported {
        out.push_str(&format!("- {}\n", tag));
    }

    out.push_str("\n### Candidate type tags (positions 1-2)\n");
    for pos in [1, 2] {
        for tag in report.type_candidates(pos) {
            out.push_str(&format!("- [{}] {}\n", pos, tag));
        }
    }

    if samples > 0 && !records.is_empty() {
        out.push_str("\n### Samples\n");
        for record in records.iter().take(samples) {
            out.push_str(&format!(
                "- #{}: {} tags: {}\n",
                record.index,
                record.tags.len(),
                record.tags.join(" | ")
            ));
        }
    }

    out
}
