//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    IndexParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;

/// OpenSearch client implementation.
///
/// Provides document upsert and index management using OpenSearch as the
/// backend.
///
/// # Example
///
/// ```ignore
/// use serde_json::json;
///
/// let client = OpenSearchClient::new("http://localhost:9200")?;
///
/// // Keyed write: overwrites any document sharing the id.
/// client
///     .index_document("products", Some("B00TEST01"), json!({"asin": "B00TEST01"}))
///     .await?;
///
/// // Unkeyed write: the engine assigns the document id.
/// client
///     .index_document("reviews", None, json!({"text": "good"}))
///     .await?;
/// ```
pub struct OpenSearchClient {
    client: OpenSearch,
}

impl OpenSearchClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchClient)` - A new client instance
    /// * `Err(SearchError)` - If connection setup fails
    pub fn new(url: &str) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %url, "Created OpenSearch client");

        Ok(Self { client })
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchClient {
    /// Upsert a single document into the named index.
    ///
    /// With an explicit `id` this is an overwrite-on-conflict write; without
    /// one, OpenSearch generates the document id and every call creates a
    /// new document.
    async fn index_document(
        &self,
        index: &str,
        id: Option<&str>,
        document: Value,
    ) -> Result<(), SearchError> {
        let request = match id {
            Some(doc_id) => self.client.index(IndexParts::IndexId(index, doc_id)),
            None => self.client.index(IndexParts::Index(index)),
        };

        let response = request
            .body(document)
            .send()
            .await
            .map_err(|e| SearchError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(
                index = %index,
                doc_id = id.unwrap_or("<engine-assigned>"),
                status = %status,
                body = %error_body,
                "Index request failed"
            );
            return Err(SearchError::index(format!(
                "Index write failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(index = %index, doc_id = id.unwrap_or("<engine-assigned>"), "Document indexed");
        Ok(())
    }

    /// Ensure the named index exists, creating it with the given settings
    /// and mappings when missing.
    async fn ensure_index_exists(&self, index: &str, settings: Value) -> Result<(), SearchError> {
        let exists_response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        if exists_response.status_code().is_success() {
            debug!(index = %index, "Index already exists");
            return Ok(());
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(settings)
            .send()
            .await
            .map_err(|e| SearchError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(index = %index, status = %status, body = %error_body, "Index creation failed");
            return Err(SearchError::index_creation(format!(
                "Index creation failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %index, "Created search index");
        Ok(())
    }

    /// Check cluster health. A `red` cluster status is reported as
    /// unhealthy.
    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::health_check(e.to_string()))?;

        if !response.status_code().is_success() {
            return Ok(false);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::health_check(e.to_string()))?;

        let status = body["status"].as_str().unwrap_or("red");
        debug!(cluster_status = %status, "Cluster health checked");

        Ok(status != "red")
    }
}
