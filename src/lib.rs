mod batch;
mod cleaner;
mod config;
mod error;
mod patterns;
mod record;
mod report;
mod result;
mod strategy;

pub use batch::{BatchOutcome, BatchSummary};
pub use cleaner::{ReviewCleaner, ReviewCleanerBuilder, TextCleaner, WhitespaceNormalizer};
pub use config::CleanerConfig;
pub use error::CleanError;
pub use record::{to_json_pretty, ReviewRecord, CLEANED_TEXT_FIELD, METADATA_FIELD};
pub use report::{validation_sample, CleaningReport, ValidationRow};
pub use result::{CleaningMethod, CleaningMetadata, CleaningResult};
