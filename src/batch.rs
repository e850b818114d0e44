#[cfg(feature = "multi_thread")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::{cleaner::ReviewCleaner, result::CleaningResult};

/// Aggregate counters over one batch of cleaned texts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total_processed: usize,
    pub polluted_found: usize,
    /// Arithmetic mean of every item's `size_reduction_pct`, 0 for an empty
    /// batch.
    pub avg_size_reduction: f64,
    pub cleaning_errors: usize,
}

impl BatchSummary {
    /// Pure reduction over per-item results; processing order does not affect
    /// the outcome.
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a CleaningResult>,
    {
        let mut summary = BatchSummary::default();
        let mut reduction_sum = 0.0;
        for result in results {
            summary.total_processed += 1;
            if result.metadata.is_polluted() {
                summary.polluted_found += 1;
            }
            if result.metadata.error.is_some() {
                summary.cleaning_errors += 1;
            }
            reduction_sum += result.metadata.size_reduction_pct;
        }
        if summary.total_processed > 0 {
            summary.avg_size_reduction = reduction_sum / summary.total_processed as f64;
        }
        summary
    }
}

/// Per-item results plus the batch-level reduction.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub results: Vec<CleaningResult>,
    pub summary: BatchSummary,
}

impl ReviewCleaner {
    /// Clean a batch of texts independently, one result per input, in input
    /// order. A failing item never aborts the batch; it shows up in
    /// `summary.cleaning_errors` instead.
    pub fn process_many<I, S>(&self, texts: I) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let results: Vec<CleaningResult> = texts
            .into_iter()
            .map(|text| self.clean(text.as_ref()))
            .collect();
        let summary = BatchSummary::from_results(&results);
        info!(
            "cleaned {} texts: {} polluted, {} errors, {:.1}% mean reduction",
            summary.total_processed,
            summary.polluted_found,
            summary.cleaning_errors,
            summary.avg_size_reduction
        );
        BatchOutcome { results, summary }
    }

    /// Parallel variant; items are independent so any execution order yields
    /// the same results and summary.
    #[cfg(feature = "multi_thread")]
    pub fn process_many_par<S>(&self, texts: &[S]) -> BatchOutcome
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<CleaningResult> = texts
            .par_iter()
            .map(|text| self.clean(text.as_ref()))
            .collect();
        let summary = BatchSummary::from_results(&results);
        BatchOutcome { results, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn summary_counts_polluted_and_errors() {
        let cleaner = ReviewCleaner::default();
        let outcome = cleaner.process_many([
            "perfectly normal review text",
            "Video Player is loading. decent sound for the price",
            "",
            "{\"clickstreamNexusMetricsConfig\":{\"actionType\":\"DISCOVERY\"}}Hello world",
        ]);
        assert_eq!(outcome.summary.total_processed, 4);
        assert_eq!(outcome.summary.polluted_found, 2);
        assert_eq!(outcome.summary.cleaning_errors, 1);
        assert_eq!(outcome.results.len(), 4);
    }

    #[test]
    fn mean_reduction_is_arithmetic_mean_over_all_items() {
        let cleaner = ReviewCleaner::default();
        let texts = [
            "no pollution here at all",
            "Jouez Muet some review text worth keeping",
            "",
        ];
        let outcome = cleaner.process_many(texts);
        let expected: f64 = outcome
            .results
            .iter()
            .map(|r| r.metadata.size_reduction_pct)
            .sum::<f64>()
            / texts.len() as f64;
        assert!((outcome.summary.avg_size_reduction - expected).abs() < EPS);
    }

    #[test]
    fn empty_batch_produces_zeroed_summary() {
        let cleaner = ReviewCleaner::default();
        let outcome = cleaner.process_many(Vec::<String>::new());
        assert_eq!(outcome.summary, BatchSummary::default());
    }

    #[cfg(feature = "multi_thread")]
    #[test]
    fn parallel_batch_matches_sequential() {
        let cleaner = ReviewCleaner::default();
        let texts: Vec<String> = (0..64)
            .map(|i| format!("Video Player is loading. review number {i} with enough body"))
            .collect();
        let sequential = cleaner.process_many(&texts);
        let parallel = cleaner.process_many_par(&texts);
        assert_eq!(parallel.results, sequential.results);
        assert_eq!(parallel.summary, sequential.summary);
    }
}
