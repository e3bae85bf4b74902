//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch,
//! Elasticsearch, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;

/// Abstract interface for search engine operations.
///
/// This trait defines the operations the indexing pipeline needs from a
/// search engine. Implementations can be swapped for different backends
/// (OpenSearch, mock, etc.) enabling easy testing and potential future
/// migrations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async
/// tasks.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Upsert a single document into the named index.
    ///
    /// When `id` is supplied it becomes the document's unique identifier:
    /// a document sharing that id is overwritten. When `id` is `None` the
    /// engine assigns its own identifier and every call creates a new
    /// document.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index name
    /// * `id` - Optional explicit document identifier
    /// * `document` - The JSON document body
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was written successfully
    /// * `Err(SearchError)` - If the write fails
    async fn index_document(
        &self,
        index: &str,
        id: Option<&str>,
        document: Value,
    ) -> Result<(), SearchError>;

    /// Ensure the named index exists with the given settings and mappings.
    ///
    /// If the index doesn't exist, it will be created. This should be
    /// called during application startup, before any writes.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index exists or was created successfully
    /// * `Err(SearchError)` - If index creation fails
    async fn ensure_index_exists(&self, index: &str, settings: Value) -> Result<(), SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the search engine is healthy
    /// * `Ok(false)` - If the search engine is unhealthy
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
