//! Review processor implementation.
//!
//! Extracts one `ReviewDocument` from every dataset row that carries
//! review text.

use tracing::debug;

use crate::source::{columns, Row};
use catalog_indexer_shared::ReviewDocument;

/// Processor that extracts review documents from dataset rows.
///
/// Inclusion is gated on review-text presence alone: a row with text but a
/// missing ASIN, rating, or username still produces a document with those
/// fields absent. Rows without text are silently skipped.
pub struct ReviewProcessor {
    // Stateless.
}

impl ReviewProcessor {
    /// Create a new review processor.
    pub fn new() -> Self {
        Self {}
    }

    /// Process all rows into review documents.
    pub fn process(&self, rows: &[Row]) -> Vec<ReviewDocument> {
        let documents: Vec<ReviewDocument> = rows
            .iter()
            .filter_map(|row| self.process_row(row))
            .collect();

        debug!(reviews = documents.len(), "Processed review rows");
        documents
    }

    /// Process a single row; `None` when the row carries no review text.
    fn process_row(&self, row: &Row) -> Option<ReviewDocument> {
        let text = row.get(columns::REVIEW_TEXT)?;

        Some(ReviewDocument {
            asin: row.get(columns::ASIN).map(str::to_string),
            rating: parse_rating(row.get(columns::REVIEW_RATING)),
            title: row.get(columns::REVIEW_TITLE).map(str::to_string),
            text: text.to_string(),
            username: row.get(columns::REVIEW_USERNAME).map(str::to_string),
            source_url: row.get(columns::REVIEW_SOURCE_URLS).map(str::to_string),
        })
    }
}

impl Default for ReviewProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the raw rating value into a number.
///
/// The source carries ratings as text; an absent or unparseable value maps
/// to `None` rather than rejecting the row.
fn parse_rating(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
}
