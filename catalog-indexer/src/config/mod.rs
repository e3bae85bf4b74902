//! Configuration for the catalog indexer.

mod dependencies;

pub use dependencies::Dependencies;
