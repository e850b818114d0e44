use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use tracing::warn;

use crate::{
    config::CleanerConfig,
    patterns::{JSON_CONFIG_PREFIX, MULTI_WS, POLLUTION_REGEXES, VIDEO_MARKERS},
    result::{CleaningMetadata, CleaningMethod, CleaningResult},
    strategy, CleanError,
};

// Trait for final text normalization
pub trait TextCleaner: Send + Sync {
    fn clean(&self, text: &str) -> String;
}

// Default normalizer: collapses whitespace runs (including newlines) into
// single spaces and trims the ends.
pub struct WhitespaceNormalizer;

impl TextCleaner for WhitespaceNormalizer {
    fn clean(&self, text: &str) -> String {
        MULTI_WS.replace_all(text, " ").trim().to_string()
    }
}

/// A builder for the `ReviewCleaner` struct
/// That allows for configuring the cleaner
/// before building it
pub struct ReviewCleanerBuilder {
    config: Option<String>,
    normalizer: Option<Arc<dyn TextCleaner>>,
}

impl ReviewCleanerBuilder {
    pub fn new() -> Self {
        ReviewCleanerBuilder {
            config: None,
            normalizer: None,
        }
    }

    /// Accepts either a path to a .json/.toml file or an inline config string.
    pub fn with_config(mut self, config: &str) -> Self {
        self.config = Some(config.to_string());
        self
    }

    pub fn with_normalizer<T: TextCleaner + 'static>(mut self, normalizer: T) -> Self {
        self.normalizer = Some(Arc::new(normalizer));
        self
    }

    pub fn build(self) -> Result<ReviewCleaner, CleanError> {
        let config = match self.config {
            Some(raw) => CleanerConfig::from_config(&raw)?,
            None => CleanerConfig::default(),
        };
        Ok(ReviewCleaner {
            config,
            normalizer: self
                .normalizer
                .unwrap_or_else(|| Arc::new(WhitespaceNormalizer)),
        })
    }
}

impl Default for ReviewCleanerBuilder {
    fn default() -> Self {
        ReviewCleanerBuilder::new()
    }
}

/// Strips injected player chrome and leading JSON configuration blobs from
/// scraped review text.
///
/// Cleaning runs an ordered strategy chain: the modal-delimiter cut first,
/// then the JSON-prefix cut, and the residual pattern sweep last as the final
/// normalization pass whichever strategy fired.
///
/// # Example
///
/// ```
/// use review_cleaner::ReviewCleaner;
///
/// let cleaner = ReviewCleaner::default();
/// let result = cleaner.clean("Video Player is loading. Loved it");
/// assert_eq!(result.cleaned_text, "Loved it");
/// assert!(result.metadata.has_video_pollution);
/// ```
#[derive(Clone)]
pub struct ReviewCleaner {
    pub(crate) config: CleanerConfig,
    normalizer: Arc<dyn TextCleaner>,
}

impl Debug for ReviewCleaner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ReviewCleaner({:?})", self.config)
    }
}

impl Default for ReviewCleaner {
    fn default() -> Self {
        ReviewCleaner {
            config: CleanerConfig::default(),
            normalizer: Arc::new(WhitespaceNormalizer),
        }
    }
}

impl ReviewCleaner {
    pub fn new() -> ReviewCleanerBuilder {
        ReviewCleanerBuilder::new()
    }

    /// Clean one raw text. Total over all inputs: an empty string passes
    /// through with an error flag, and any internal failure falls back to the
    /// original text instead of surfacing to the caller.
    pub fn clean(&self, text: &str) -> CleaningResult {
        let original_length = text.chars().count();
        let mut metadata = CleaningMetadata::unprocessed(original_length);

        if text.is_empty() {
            metadata.error = Some("invalid input".to_string());
            return CleaningResult {
                cleaned_text: text.to_string(),
                metadata,
            };
        }

        // Detectors run on the original text, independent of which strategy
        // ends up firing.
        metadata.has_json_pollution = text.starts_with(JSON_CONFIG_PREFIX);
        metadata.has_video_pollution = VIDEO_MARKERS.iter().any(|m| text.contains(m));

        match self.run_strategies(text) {
            Ok((cleaned_text, method)) => {
                let final_length = cleaned_text.chars().count();
                metadata.final_length = final_length;
                metadata.size_reduction_pct = if original_length > 0 {
                    original_length.saturating_sub(final_length) as f64
                        / original_length as f64
                        * 100.0
                } else {
                    0.0
                };
                metadata.cleaning_method = Some(method);
                CleaningResult {
                    cleaned_text,
                    metadata,
                }
            }
            Err(err) => {
                warn!("cleaning failed, keeping original text: {err}");
                metadata.error = Some(err.to_string());
                CleaningResult {
                    cleaned_text: text.to_string(),
                    metadata,
                }
            }
        }
    }

    fn run_strategies(&self, text: &str) -> Result<(String, CleaningMethod), CleanError> {
        if let Some(tail) = strategy::after_modal_delimiter(text, self.config.min_remainder_len) {
            return Ok((self.strip_residual(tail), CleaningMethod::ModalDelimiter));
        }
        if let Some(rest) = strategy::strip_json_prefix(text, self.config.max_json_fraction)? {
            return Ok((self.strip_residual(rest), CleaningMethod::JsonPrefix));
        }
        Ok((self.strip_residual(text), CleaningMethod::PatternOnly))
    }

    // Residual pattern sweep, always the last step of any strategy.
    fn strip_residual(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for re in POLLUTION_REGEXES.iter() {
            cleaned = re.replace_all(&cleaned, "").into_owned();
        }
        self.normalizer.clean(&cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_passes_through_with_error() {
        let cleaner = ReviewCleaner::default();
        let result = cleaner.clean("");
        assert_eq!(result.cleaned_text, "");
        assert_eq!(result.metadata.original_length, 0);
        assert_eq!(result.metadata.final_length, 0);
        assert_eq!(result.metadata.size_reduction_pct, 0.0);
        assert!(result.metadata.error.is_some());
        assert!(result.metadata.cleaning_method.is_none());
    }

    #[test]
    fn plain_text_is_untouched() {
        let cleaner = ReviewCleaner::default();
        let result = cleaner.clean("Great product, works as advertised.");
        assert_eq!(result.cleaned_text, "Great product, works as advertised.");
        assert_eq!(
            result.metadata.cleaning_method,
            Some(CleaningMethod::PatternOnly)
        );
        assert!(!result.metadata.is_polluted());
    }

    #[test]
    fn chrome_only_input_cleans_to_empty() {
        let cleaner = ReviewCleaner::default();
        let result = cleaner.clean("Video Player is loading.JouezMuetPause");
        assert_eq!(result.cleaned_text, "");
        assert!(result.metadata.has_video_pollution);
        assert!(result.metadata.error.is_none());
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        let cleaner = ReviewCleaner::default();
        let result = cleaner.clean("  several\n\nwords \t separated   badly  ");
        assert_eq!(result.cleaned_text, "several words separated badly");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let cleaner = ReviewCleaner::default();
        let raw = "{\"clickstreamNexusMetricsConfig\":{\"actionType\":\"DISCOVERY\"},\"clientPrefix\":\"vse_reviews_desktop\"}Video Player is loading.Cliquez pour lire la vidéoJouezMuetThis is a modal window. J'ai adoré mais la description ne correspond pas au produit reçu.";
        let once = cleaner.clean(raw);
        let twice = cleaner.clean(&once.cleaned_text);
        assert_eq!(twice.cleaned_text, once.cleaned_text);
    }

    #[test]
    fn final_length_never_exceeds_original() {
        let cleaner = ReviewCleaner::default();
        for raw in [
            "",
            "plain",
            "{\"a\":1}short",
            "Jouez Muet Pause 2x Plein écran",
            &"pollution This is a modal window. ".repeat(50),
        ] {
            let result = cleaner.clean(raw);
            assert!(result.metadata.final_length <= result.metadata.original_length);
        }
    }

    #[test]
    fn custom_normalizer_is_honored() {
        struct Upper;
        impl TextCleaner for Upper {
            fn clean(&self, text: &str) -> String {
                text.trim().to_uppercase()
            }
        }
        let cleaner = ReviewCleaner::new().with_normalizer(Upper).build().unwrap();
        let result = cleaner.clean("nice speaker");
        assert_eq!(result.cleaned_text, "NICE SPEAKER");
    }
}
