//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend.

mod client;
mod index_config;

pub use client::OpenSearchClient;
pub use index_config::{
    products_index_settings, reviews_index_settings, PRODUCTS_INDEX, REVIEWS_INDEX,
};
