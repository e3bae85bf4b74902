//! Document types for the product and review search indices.
//!
//! This module defines the document structures that are indexed in the
//! search engine. Products are keyed by ASIN; reviews carry no key of
//! their own and receive an engine-assigned identifier.

use serde::{Deserialize, Serialize};

/// Document representation for the products index.
///
/// One document exists per distinct ASIN. Descriptive fields hold the
/// values of the first source row that carried the ASIN; later rows with
/// the same ASIN never modify an existing document.
///
/// Dates are carried as the raw strings found in the source; no date
/// parsing happens anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDocument {
    pub asin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Category path segments, in source order. An absent categories
    /// field yields an empty vector.
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<String>,
}

impl ProductDocument {
    /// Create a document carrying only an ASIN.
    pub fn new(asin: impl Into<String>) -> Self {
        Self {
            asin: asin.into(),
            brand: None,
            categories: Vec::new(),
            dimensions: None,
            weight: None,
            date_added: None,
            date_updated: None,
        }
    }

    /// The document ID used in the products index.
    ///
    /// The ASIN is the business key; using it as the document ID makes
    /// repeated runs overwrite rather than duplicate.
    pub fn document_id(&self) -> &str {
        &self.asin
    }
}

/// Document representation for the reviews index.
///
/// Every source row with non-empty review text produces one of these.
/// The `asin` is a plain attribute referencing a product, not a key, and
/// is not enforced to exist. Only `text` is guaranteed present; a review
/// with a missing username (or any other field) is still indexed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ReviewDocument {
    /// Create a review document from its text; all other fields start
    /// absent.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            asin: None,
            rating: None,
            title: None,
            text: text.into(),
            username: None,
            source_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_document_new() {
        let doc = ProductDocument::new("B00TEST01");

        assert_eq!(doc.asin, "B00TEST01");
        assert!(doc.brand.is_none());
        assert!(doc.categories.is_empty());
        assert_eq!(doc.document_id(), "B00TEST01");
    }

    #[test]
    fn test_product_serialization_skips_absent_fields() {
        let doc = ProductDocument {
            asin: "B00TEST01".to_string(),
            brand: Some("Acme".to_string()),
            categories: vec!["Electronics".to_string(), "Computers".to_string()],
            dimensions: None,
            weight: None,
            date_added: None,
            date_updated: None,
        };

        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["asin"], "B00TEST01");
        assert_eq!(json["brand"], "Acme");
        assert_eq!(json["categories"][0], "Electronics");
        assert!(json.get("dimensions").is_none());
        assert!(json.get("weight").is_none());
    }

    #[test]
    fn test_review_document_new() {
        let doc = ReviewDocument::new("great product");

        assert_eq!(doc.text, "great product");
        assert!(doc.asin.is_none());
        assert!(doc.rating.is_none());
        assert!(doc.username.is_none());
    }

    #[test]
    fn test_review_serialization_with_missing_username() {
        let mut doc = ReviewDocument::new("good");
        doc.asin = Some("A1".to_string());
        doc.rating = Some(5.0);

        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["text"], "good");
        assert_eq!(json["asin"], "A1");
        assert_eq!(json["rating"], 5.0);
        assert!(json.get("username").is_none());
    }
}
