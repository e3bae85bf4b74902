//! Error types for the catalog indexer repository.

mod search_error;

pub use search_error::SearchError;
