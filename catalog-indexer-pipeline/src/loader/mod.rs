//! Loader module for the catalog indexer pipeline.
//!
//! Writes processed documents into the search indices. Write failures are
//! isolated per document: each failure is logged with the index name and
//! document key, counted, and never blocks the remaining writes. Every
//! write is attempted exactly once.

use std::sync::Arc;

use tracing::{debug, error};

use crate::errors::PipelineError;
use catalog_indexer_repository::opensearch::{products_index_settings, reviews_index_settings};
use catalog_indexer_repository::SearchEngineClient;
use catalog_indexer_shared::{ProductDocument, ReviewDocument};

/// Outcome of one loading pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Documents written successfully.
    pub indexed: usize,
    /// Documents whose write failed.
    pub failed: usize,
}

/// Loader that indexes documents into the search engine.
///
/// Products are written with their ASIN as the explicit document id, so
/// repeated runs overwrite. Reviews are written without an id; the engine
/// assigns one and repeated runs duplicate.
pub struct SearchLoader {
    client: Arc<dyn SearchEngineClient>,
    products_index: String,
    reviews_index: String,
}

impl SearchLoader {
    /// Create a new loader writing to the given indices.
    pub fn new(
        client: Arc<dyn SearchEngineClient>,
        products_index: impl Into<String>,
        reviews_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            products_index: products_index.into(),
            reviews_index: reviews_index.into(),
        }
    }

    /// Ensure both search indices exist with their mappings.
    pub async fn ensure_indexes(&self) -> Result<(), PipelineError> {
        self.client
            .ensure_index_exists(&self.products_index, products_index_settings())
            .await?;
        self.client
            .ensure_index_exists(&self.reviews_index, reviews_index_settings())
            .await?;
        Ok(())
    }

    /// Write product documents, keyed by ASIN.
    pub async fn load_products(&self, documents: &[ProductDocument]) -> LoadStats {
        let mut stats = LoadStats::default();

        for doc in documents {
            let body = match serde_json::to_value(doc) {
                Ok(body) => body,
                Err(e) => {
                    error!(
                        index = %self.products_index,
                        asin = %doc.asin,
                        error = %e,
                        "Failed to serialize product document"
                    );
                    stats.failed += 1;
                    continue;
                }
            };

            match self
                .client
                .index_document(&self.products_index, Some(doc.document_id()), body)
                .await
            {
                Ok(()) => stats.indexed += 1,
                Err(e) => {
                    error!(
                        index = %self.products_index,
                        asin = %doc.asin,
                        error = %e,
                        "Failed to index product document"
                    );
                    stats.failed += 1;
                }
            }
        }

        debug!(
            index = %self.products_index,
            indexed = stats.indexed,
            failed = stats.failed,
            "Product load pass complete"
        );
        stats
    }

    /// Write review documents with engine-assigned ids.
    pub async fn load_reviews(&self, documents: &[ReviewDocument]) -> LoadStats {
        let mut stats = LoadStats::default();

        for doc in documents {
            let body = match serde_json::to_value(doc) {
                Ok(body) => body,
                Err(e) => {
                    error!(
                        index = %self.reviews_index,
                        error = %e,
                        "Failed to serialize review document"
                    );
                    stats.failed += 1;
                    continue;
                }
            };

            match self
                .client
                .index_document(&self.reviews_index, None, body)
                .await
            {
                Ok(()) => stats.indexed += 1,
                Err(e) => {
                    error!(
                        index = %self.reviews_index,
                        asin = doc.asin.as_deref().unwrap_or("<none>"),
                        error = %e,
                        "Failed to index review document"
                    );
                    stats.failed += 1;
                }
            }
        }

        debug!(
            index = %self.reviews_index,
            indexed = stats.indexed,
            failed = stats.failed,
            "Review load pass complete"
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_indexer_repository::SearchError;
    use serde_json::Value;
    use std::sync::Mutex;

    /// Mock search client that records every write and can be told to
    /// fail writes for specific ASINs.
    struct MockSearchClient {
        writes: Mutex<Vec<(String, Option<String>, Value)>>,
        fail_asins: Vec<String>,
    }

    impl MockSearchClient {
        fn new() -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
                fail_asins: Vec::new(),
            }
        }

        fn failing_on(asins: &[&str]) -> Self {
            Self {
                writes: Mutex::new(Vec::new()),
                fail_asins: asins.iter().map(|s| s.to_string()).collect(),
            }
        }

        fn writes(&self) -> Vec<(String, Option<String>, Value)> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchEngineClient for MockSearchClient {
        async fn index_document(
            &self,
            index: &str,
            id: Option<&str>,
            document: Value,
        ) -> Result<(), SearchError> {
            let asin = document["asin"].as_str().unwrap_or_default();
            if self.fail_asins.iter().any(|f| f == asin) {
                return Err(SearchError::index("simulated write failure"));
            }
            self.writes.lock().unwrap().push((
                index.to_string(),
                id.map(str::to_string),
                document,
            ));
            Ok(())
        }

        async fn ensure_index_exists(
            &self,
            _index: &str,
            _settings: Value,
        ) -> Result<(), SearchError> {
            Ok(())
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_products_are_written_with_asin_as_id() {
        let client = Arc::new(MockSearchClient::new());
        let loader = SearchLoader::new(client.clone(), "products", "reviews");

        let docs = vec![ProductDocument::new("A1"), ProductDocument::new("A2")];
        let stats = loader.load_products(&docs).await;

        assert_eq!(stats, LoadStats { indexed: 2, failed: 0 });

        let writes = client.writes();
        assert_eq!(writes[0].0, "products");
        assert_eq!(writes[0].1, Some("A1".to_string()));
        assert_eq!(writes[1].1, Some("A2".to_string()));
    }

    #[tokio::test]
    async fn test_reviews_are_written_without_id() {
        let client = Arc::new(MockSearchClient::new());
        let loader = SearchLoader::new(client.clone(), "products", "reviews");

        let docs = vec![ReviewDocument::new("good"), ReviewDocument::new("bad")];
        let stats = loader.load_reviews(&docs).await;

        assert_eq!(stats, LoadStats { indexed: 2, failed: 0 });

        let writes = client.writes();
        assert_eq!(writes.len(), 2);
        assert!(writes.iter().all(|(index, id, _)| index == "reviews" && id.is_none()));
    }

    #[tokio::test]
    async fn test_write_failure_does_not_block_remaining_documents() {
        let client = Arc::new(MockSearchClient::failing_on(&["A2"]));
        let loader = SearchLoader::new(client.clone(), "products", "reviews");

        let docs = vec![
            ProductDocument::new("A1"),
            ProductDocument::new("A2"),
            ProductDocument::new("A3"),
        ];
        let stats = loader.load_products(&docs).await;

        assert_eq!(stats, LoadStats { indexed: 2, failed: 1 });

        let written: Vec<Option<String>> =
            client.writes().into_iter().map(|(_, id, _)| id).collect();
        assert_eq!(
            written,
            vec![Some("A1".to_string()), Some("A3".to_string())]
        );
    }
}
