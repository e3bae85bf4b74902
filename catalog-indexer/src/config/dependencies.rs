//! Dependency initialization and wiring for the catalog indexer.

use std::env;
use std::sync::Arc;

use tracing::info;

use crate::IndexingError;
use catalog_indexer_pipeline::{loader::SearchLoader, source::CsvSource, Orchestrator};
use catalog_indexer_repository::opensearch::{PRODUCTS_INDEX, REVIEWS_INDEX};
use catalog_indexer_repository::{OpenSearchClient, SearchEngineClient};

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default path to the source dataset.
const DEFAULT_DATASET_PATH: &str = "data/products.csv";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// The search engine client is constructed here and lives for the
    /// duration of the process; nothing holds global connection state.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: OpenSearch server URL (default: http://localhost:9200)
    /// - `DATASET_PATH`: Path to the source CSV file (default: data/products.csv)
    /// - `PRODUCTS_INDEX`: Products index name (default: products)
    /// - `REVIEWS_INDEX`: Reviews index name (default: reviews)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the engine is unreachable, the dataset is
    ///   unreadable, or a required column is absent
    pub async fn new() -> Result<Self, IndexingError> {
        let opensearch_url =
            env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string());
        let dataset_path =
            env::var("DATASET_PATH").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());
        let products_index =
            env::var("PRODUCTS_INDEX").unwrap_or_else(|_| PRODUCTS_INDEX.to_string());
        let reviews_index =
            env::var("REVIEWS_INDEX").unwrap_or_else(|_| REVIEWS_INDEX.to_string());

        info!(
            opensearch_url = %opensearch_url,
            dataset_path = %dataset_path,
            products_index = %products_index,
            reviews_index = %reviews_index,
            "Initializing dependencies"
        );

        // Initialize OpenSearch client
        let search_client = OpenSearchClient::new(&opensearch_url)?;

        // Verify OpenSearch is reachable before touching the dataset
        let healthy = search_client.health_check().await.map_err(|e| {
            IndexingError::config(format!("OpenSearch health check failed: {}", e))
        })?;

        if !healthy {
            return Err(IndexingError::config("OpenSearch cluster is unhealthy"));
        }

        info!("OpenSearch connection verified");

        // Read the dataset fully into memory; source or schema problems
        // are fatal before any indexing begins.
        let source = CsvSource::from_path(&dataset_path)?;

        let loader = SearchLoader::new(Arc::new(search_client), products_index, reviews_index);

        let orchestrator = Orchestrator::new(source, loader);

        Ok(Self { orchestrator })
    }
}
