//! Processor module for the catalog indexer pipeline.
//!
//! Transforms dataset rows into product and review documents.

mod product_processor;
mod review_processor;

pub use product_processor::{ProductBatch, ProductProcessor};
pub use review_processor::ReviewProcessor;
