//! Error types for the catalog indexer pipeline.
//!
//! Only fatal conditions are represented as error values. Malformed rows
//! and per-document write failures are isolated where they occur and
//! surface as counters in the ingest summary instead.

use catalog_indexer_repository::SearchError;
use thiserror::Error;

/// Errors that can occur in the catalog indexer pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source dataset does not exist or could not be parsed.
    #[error("Source unreadable: {0}")]
    SourceUnreadable(String),

    /// A required column is missing from the dataset header.
    #[error("Schema mismatch: missing required column '{column}'")]
    SchemaMismatch {
        /// The name of the absent column.
        column: String,
    },

    /// Error from the search engine outside per-document writes
    /// (e.g. index creation at startup).
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
}

impl PipelineError {
    /// Create a source-unreadable error.
    pub fn source_unreadable(msg: impl Into<String>) -> Self {
        Self::SourceUnreadable(msg.into())
    }

    /// Create a schema mismatch error for the given column.
    pub fn schema_mismatch(column: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            column: column.into(),
        }
    }
}
