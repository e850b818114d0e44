use serde::{Deserialize, Serialize};

/// Which strategy in the cleaning chain actually produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningMethod {
    /// Everything before the last modal-window delimiter was discarded.
    ModalDelimiter,
    /// A leading JSON blob was located by brace matching and discarded.
    JsonPrefix,
    /// Only the residual pattern removal applied.
    PatternOnly,
}

/// What the cleaner did to a single text, recorded alongside the output.
///
/// The pollution flags describe the *original* text (fixed substring tests),
/// not which strategy fired. Lengths are character counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningMetadata {
    pub original_length: usize,
    pub final_length: usize,
    pub size_reduction_pct: f64,
    pub has_json_pollution: bool,
    pub has_video_pollution: bool,
    pub cleaning_method: Option<CleaningMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CleaningMetadata {
    pub(crate) fn unprocessed(original_length: usize) -> Self {
        CleaningMetadata {
            original_length,
            final_length: original_length,
            size_reduction_pct: 0.0,
            has_json_pollution: false,
            has_video_pollution: false,
            cleaning_method: None,
            error: None,
        }
    }

    /// True when either pollution detector fired on the original text.
    pub fn is_polluted(&self) -> bool {
        self.has_json_pollution || self.has_video_pollution
    }
}

/// Output of cleaning one raw text. Immutable once produced; later pipeline
/// stages only read `cleaned_text` onward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningResult {
    pub cleaned_text: String,
    pub metadata: CleaningMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_serializes_as_snake_case() {
        let json = serde_json::to_string(&CleaningMethod::ModalDelimiter).unwrap();
        assert_eq!(json, "\"modal_delimiter\"");
    }

    #[test]
    fn error_field_is_omitted_when_absent() {
        let meta = CleaningMetadata::unprocessed(5);
        let json = serde_json::to_string(&meta).unwrap();
        assert!(!json.contains("error"));
    }
}
