//! # Catalog Indexer Shared
//!
//! Shared document types for the catalog indexer system.
//!
//! These are the structures that the pipeline builds from source rows and
//! that the repository writes into the search engine.

pub mod documents;

pub use documents::{ProductDocument, ReviewDocument};
