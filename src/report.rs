use serde::Serialize;
use serde_json::Value;

use crate::{
    batch::BatchSummary,
    cleaner::ReviewCleaner,
    patterns::POLLUTION_PATTERNS,
    record::ReviewRecord,
};

/// Summary the pipeline writes alongside the cleaned dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningReport {
    pub stats: BatchSummary,
    pub pollution_patterns_count: usize,
    pub strategy: &'static str,
}

impl ReviewCleaner {
    pub fn report(&self, stats: &BatchSummary) -> CleaningReport {
        CleaningReport {
            stats: stats.clone(),
            pollution_patterns_count: POLLUTION_PATTERNS.len(),
            strategy: "hybrid_modal_delimiter_with_json_fallback",
        }
    }
}

/// One row of the manual spot-check view: original next to cleaned, with the
/// measured reduction.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRow {
    pub id: Option<Value>,
    pub author: Option<Value>,
    pub original_excerpt: String,
    pub cleaned_text: String,
    pub original_length: usize,
    pub final_length: usize,
    pub reduction_pct: f64,
}

/// Build a validation sample from cleaned records: up to `sample_size` rows
/// restricted to records where a pollution flag was set. Reporting
/// convenience only; the cleaned dataset itself is unaffected.
pub fn validation_sample(
    records: &[ReviewRecord],
    text_field: &str,
    sample_size: usize,
) -> Vec<ValidationRow> {
    records
        .iter()
        .filter_map(|record| {
            let metadata = record.metadata()?;
            if !metadata.is_polluted() {
                return None;
            }
            let original = record.text(text_field).unwrap_or_default();
            let excerpt: String = original.chars().take(200).collect();
            Some(ValidationRow {
                id: record.fields.get("id").cloned(),
                author: record.fields.get("author").cloned(),
                original_excerpt: format!("{excerpt}..."),
                cleaned_text: record
                    .text(crate::record::CLEANED_TEXT_FIELD)
                    .unwrap_or_default()
                    .to_string(),
                original_length: metadata.original_length,
                final_length: metadata.final_length,
                reduction_pct: (metadata.size_reduction_pct * 10.0).round() / 10.0,
            })
        })
        .take(sample_size)
        .collect()
}
