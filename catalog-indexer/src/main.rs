//! Catalog Indexer Main Entry Point
//!
//! This is the main binary for the catalog search indexer. It reads the
//! product/review dataset and bulk-loads it into the products and reviews
//! indices of an OpenSearch cluster.

use dotenv::dotenv;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_indexer::{Dependencies, IndexingError};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catalog_indexer=info,catalog_indexer_pipeline=info"));

    if env::var("LOG_JSON").is_ok() {
        // JSON format for structured log shipping
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "catalog-indexer",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        // Pretty console output for local runs
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "catalog-indexer",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), IndexingError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!("Starting catalog indexer");

    // Initialize dependencies; any failure here is fatal (engine
    // unreachable, source unreadable, schema mismatch).
    let deps = match Dependencies::new().await {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    // Run the ingest. Per-row and per-document conditions are absorbed
    // into the summary; only unrecoverable errors exit non-zero.
    match deps.orchestrator.run().await {
        Ok(summary) => {
            if summary.malformed_rows > 0 || summary.write_failures > 0 {
                warn!(
                    malformed_rows = summary.malformed_rows,
                    write_failures = summary.write_failures,
                    "Ingest completed with skipped rows or failed writes"
                );
            }
            info!(
                products = summary.products_indexed,
                reviews = summary.reviews_indexed,
                "Catalog indexer completed successfully"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Catalog indexer failed");
            Err(e.into())
        }
    }
}
