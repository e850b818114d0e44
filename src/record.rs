use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::{
    batch::BatchSummary,
    cleaner::ReviewCleaner,
    result::{CleaningMetadata, CleaningResult},
    CleanError,
};

/// Field added to each record holding the decontaminated text.
pub const CLEANED_TEXT_FIELD: &str = "cleaned_text";
/// Field added to each record holding the serialized `CleaningMetadata`.
pub const METADATA_FIELD: &str = "cleaning_metadata";

/// One scraped review record. The text field lives under a caller-chosen key;
/// auxiliary fields (rating, author, date, source identifier) are kept in the
/// flattened map and pass through cleaning untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ReviewRecord {
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field)?.as_str()
    }

    pub fn metadata(&self) -> Option<CleaningMetadata> {
        let value = self.fields.get(METADATA_FIELD)?;
        serde_json::from_value(value.clone()).ok()
    }
}

impl ReviewCleaner {
    /// Clean every record in place, adding `cleaned_text` and
    /// `cleaning_metadata` next to the existing fields. A record whose text
    /// field is missing or not a string passes through unchanged with an
    /// error-flagged metadata entry; no single record aborts the batch.
    pub fn clean_records(
        &self,
        records: &mut [ReviewRecord],
        text_field: &str,
    ) -> Result<BatchSummary, CleanError> {
        let mut results = Vec::with_capacity(records.len());
        for record in records.iter_mut() {
            let (cleaned_value, result) = match record.fields.get(text_field) {
                Some(Value::String(text)) => {
                    let result = self.clean(text);
                    (Value::String(result.cleaned_text.clone()), result)
                }
                other => {
                    // Pass the original (possibly absent) value through.
                    let original = other.cloned().unwrap_or(Value::Null);
                    let mut metadata = CleaningMetadata::unprocessed(0);
                    metadata.error = Some("invalid input".to_string());
                    let result = CleaningResult {
                        cleaned_text: String::new(),
                        metadata,
                    };
                    (original, result)
                }
            };
            record
                .fields
                .insert(CLEANED_TEXT_FIELD.to_string(), cleaned_value);
            record.fields.insert(
                METADATA_FIELD.to_string(),
                serde_json::to_value(&result.metadata)?,
            );
            results.push(result);
        }
        let summary = BatchSummary::from_results(&results);
        info!(
            "cleaned {} records, {} polluted, {} errors",
            summary.total_processed, summary.polluted_found, summary.cleaning_errors
        );
        Ok(summary)
    }
}

/// Serialize a record set the way the downstream pipeline stages expect it: a
/// human-indented JSON array, UTF-8, non-ASCII characters left unescaped.
pub fn to_json_pretty(records: &[ReviewRecord]) -> Result<String, CleanError> {
    Ok(serde_json::to_string_pretty(records)?)
}
