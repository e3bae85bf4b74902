//! # Catalog Indexer Pipeline
//!
//! This crate provides the pipeline components for reading a delimited
//! product/review dataset and indexing it into OpenSearch.
//!
//! ## Architecture
//!
//! The pipeline follows the Source-Processor-Loader pattern:
//!
//! 1. **Source**: Reads the dataset into an ordered row sequence
//! 2. **Processor**: Transforms rows into product and review documents
//! 3. **Loader**: Writes documents into the search indices
//! 4. **Orchestrator**: Coordinates the pipeline flow

pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;
pub mod source;

pub use errors::PipelineError;
pub use orchestrator::{IngestSummary, Orchestrator};
