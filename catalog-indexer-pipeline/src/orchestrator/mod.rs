//! Orchestrator module for the catalog indexer pipeline.
//!
//! Coordinates the source, processors, and loader for a single bulk-load
//! run: one product pass and one review pass over the same row sequence.

use tracing::info;

use crate::errors::PipelineError;
use crate::loader::SearchLoader;
use crate::processor::{ProductProcessor, ReviewProcessor};
use crate::source::CsvSource;

/// Aggregate outcome of one ingest run.
///
/// A run that completes reports success even when individual rows or
/// writes failed; the counters carry those conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Rows read from the source.
    pub rows: usize,
    /// Product documents written successfully.
    pub products_indexed: usize,
    /// Review documents written successfully.
    pub reviews_indexed: usize,
    /// Rows skipped during the product pass for missing an ASIN.
    pub malformed_rows: usize,
    /// Documents whose index write failed, across both passes.
    pub write_failures: usize,
}

/// Orchestrator that coordinates the pipeline components.
///
/// The two indexing passes share the read-only row sequence and write to
/// disjoint indices, so their order carries no semantic weight; products
/// run first only so that summary logging reads naturally.
pub struct Orchestrator {
    source: CsvSource,
    product_processor: ProductProcessor,
    review_processor: ReviewProcessor,
    loader: SearchLoader,
}

impl Orchestrator {
    /// Create a new orchestrator over a loaded source.
    pub fn new(source: CsvSource, loader: SearchLoader) -> Self {
        Self {
            source,
            product_processor: ProductProcessor::new(),
            review_processor: ReviewProcessor::new(),
            loader,
        }
    }

    /// Run the full ingest: ensure indices, then the product pass, then
    /// the review pass.
    ///
    /// Fatal errors (index creation, engine failures at startup) abort the
    /// run; per-row and per-document conditions are absorbed into the
    /// summary.
    pub async fn run(&self) -> Result<IngestSummary, PipelineError> {
        info!(rows = self.source.len(), "Starting catalog ingest");

        self.loader.ensure_indexes().await?;

        let product_batch = self.product_processor.process(self.source.rows());
        let product_stats = self.loader.load_products(&product_batch.documents).await;

        let reviews = self.review_processor.process(self.source.rows());
        let review_stats = self.loader.load_reviews(&reviews).await;

        let summary = IngestSummary {
            rows: self.source.len(),
            products_indexed: product_stats.indexed,
            reviews_indexed: review_stats.indexed,
            malformed_rows: product_batch.malformed_rows,
            write_failures: product_stats.failed + review_stats.failed,
        };

        info!(
            rows = summary.rows,
            products = summary.products_indexed,
            reviews = summary.reviews_indexed,
            malformed = summary.malformed_rows,
            write_failures = summary.write_failures,
            "Catalog ingest complete"
        );

        Ok(summary)
    }
}
