//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and mappings for the products
//! and reviews indices.

use serde_json::{json, Value};

/// Default name of the products index.
pub const PRODUCTS_INDEX: &str = "products";

/// Default name of the reviews index.
pub const REVIEWS_INDEX: &str = "reviews";

/// Get the index settings and mappings for the products index.
///
/// Products are looked up by exact ASIN, so identifying fields use the
/// `keyword` type; descriptive fields are full-text searchable. Dates are
/// kept as keywords because the source carries them as opaque strings.
pub fn products_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "asin": {
                    "type": "keyword"
                },
                "brand": {
                    "type": "text",
                    "fields": {
                        "raw": {
                            "type": "keyword"
                        }
                    }
                },
                "categories": {
                    "type": "keyword"
                },
                "dimensions": {
                    "type": "keyword",
                    "index": false
                },
                "weight": {
                    "type": "keyword",
                    "index": false
                },
                "date_added": {
                    "type": "keyword"
                },
                "date_updated": {
                    "type": "keyword"
                }
            }
        }
    })
}

/// Get the index settings and mappings for the reviews index.
///
/// Review text and title are the full-text search fields; `asin` is a
/// plain keyword attribute referencing a product.
pub fn reviews_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": {
                "asin": {
                    "type": "keyword"
                },
                "rating": {
                    "type": "float"
                },
                "title": {
                    "type": "text"
                },
                "text": {
                    "type": "text"
                },
                "username": {
                    "type": "keyword"
                },
                "source_url": {
                    "type": "keyword",
                    "index": false
                }
            }
        }
    })
}
