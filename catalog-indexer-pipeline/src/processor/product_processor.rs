//! Product processor implementation.
//!
//! Scans dataset rows and builds one de-duplicated `ProductDocument` per
//! distinct ASIN.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::source::{columns, Row};
use catalog_indexer_shared::ProductDocument;

/// Result of a product processing pass.
#[derive(Debug)]
pub struct ProductBatch {
    /// One document per distinct ASIN, in first-seen order.
    pub documents: Vec<ProductDocument>,
    /// Rows skipped because they carried no ASIN.
    pub malformed_rows: usize,
}

/// Processor that de-duplicates products by ASIN.
///
/// De-duplication is first-write-wins: descriptive fields come from the
/// first row (in source order) that carried the ASIN, and every later row
/// with the same ASIN contributes nothing. This is deliberate business
/// policy, not an oversight; rows with the same ASIN but diverging fields
/// are not treated as a defect.
pub struct ProductProcessor {
    // Stateless; each pass owns its own seen-set.
}

impl ProductProcessor {
    /// Create a new product processor.
    pub fn new() -> Self {
        Self {}
    }

    /// Process all rows into de-duplicated product documents.
    ///
    /// Rows without an ASIN are a data-quality condition: they are skipped
    /// and counted, never aborting the scan.
    pub fn process(&self, rows: &[Row]) -> ProductBatch {
        let mut seen: HashSet<String> = HashSet::new();
        let mut documents = Vec::new();
        let mut malformed_rows = 0;

        for (position, row) in rows.iter().enumerate() {
            let asin = match row.get(columns::ASIN) {
                Some(asin) => asin,
                None => {
                    warn!(row = position, "Skipping row without ASIN");
                    malformed_rows += 1;
                    continue;
                }
            };

            // First-write-wins: later rows with a known ASIN are ignored.
            if !seen.insert(asin.to_string()) {
                continue;
            }

            documents.push(Self::build_document(asin, row));
        }

        debug!(
            products = documents.len(),
            malformed = malformed_rows,
            "Processed product rows"
        );

        ProductBatch {
            documents,
            malformed_rows,
        }
    }

    fn build_document(asin: &str, row: &Row) -> ProductDocument {
        ProductDocument {
            asin: asin.to_string(),
            brand: row.get(columns::BRAND).map(str::to_string),
            categories: split_categories(row.get(columns::CATEGORIES)),
            dimensions: row.get(columns::DIMENSIONS).map(str::to_string),
            weight: row.get(columns::WEIGHT).map(str::to_string),
            date_added: row.get(columns::DATE_ADDED).map(str::to_string),
            date_updated: row.get(columns::DATE_UPDATED).map(str::to_string),
        }
    }
}

impl Default for ProductProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw categories value on `,` into its segments.
///
/// Exact split semantics: segments are not trimmed and repeated delimiters
/// produce empty segments. An absent field yields an empty vector.
fn split_categories(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(value) => value.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Row;

    fn product_row(asin: &str, brand: &str, categories: &str) -> Row {
        Row::from_pairs([
            (columns::ASIN, asin),
            (columns::BRAND, brand),
            (columns::CATEGORIES, categories),
        ])
    }

    #[test]
    fn test_first_write_wins() {
        let processor = ProductProcessor::new();
        let rows = vec![
            product_row("A1", "Acme", "X,Y"),
            product_row("A1", "Acme2", "Z"),
        ];

        let batch = processor.process(&rows);

        assert_eq!(batch.documents.len(), 1);
        assert_eq!(batch.documents[0].asin, "A1");
        assert_eq!(batch.documents[0].brand, Some("Acme".to_string()));
        assert_eq!(batch.documents[0].categories, vec!["X", "Y"]);
    }

    #[test]
    fn test_category_split() {
        let processor = ProductProcessor::new();
        let rows = vec![product_row("A1", "Acme", "Electronics,Computers,Accessories")];

        let batch = processor.process(&rows);

        assert_eq!(
            batch.documents[0].categories,
            vec!["Electronics", "Computers", "Accessories"]
        );
    }

    #[test]
    fn test_category_split_preserves_empty_segments() {
        let processor = ProductProcessor::new();
        let rows = vec![product_row("A1", "Acme", "Electronics,,Accessories")];

        let batch = processor.process(&rows);

        assert_eq!(
            batch.documents[0].categories,
            vec!["Electronics", "", "Accessories"]
        );
    }

    #[test]
    fn test_absent_categories_yield_empty_vec() {
        let processor = ProductProcessor::new();
        let rows = vec![product_row("A1", "Acme", "NaN")];

        let batch = processor.process(&rows);

        assert!(batch.documents[0].categories.is_empty());
    }

    #[test]
    fn test_row_without_asin_is_skipped_not_fatal() {
        let processor = ProductProcessor::new();
        let rows = vec![
            product_row("", "NoKey", "X"),
            product_row("A2", "Acme", "Y"),
        ];

        let batch = processor.process(&rows);

        assert_eq!(batch.documents.len(), 1);
        assert_eq!(batch.documents[0].asin, "A2");
        assert_eq!(batch.malformed_rows, 1);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let processor = ProductProcessor::new();
        let rows = vec![
            product_row("B2", "Beta", "X"),
            product_row("A1", "Acme", "Y"),
            product_row("B2", "Dup", "Z"),
            product_row("C3", "Gamma", "W"),
        ];

        let batch = processor.process(&rows);

        let asins: Vec<&str> = batch.documents.iter().map(|d| d.asin.as_str()).collect();
        assert_eq!(asins, vec!["B2", "A1", "C3"]);
    }

    #[test]
    fn test_absent_optional_fields() {
        let processor = ProductProcessor::new();
        let rows = vec![Row::from_pairs([
            (columns::ASIN, "A1"),
            (columns::BRAND, ""),
            (columns::WEIGHT, "NaN"),
        ])];

        let batch = processor.process(&rows);

        let doc = &batch.documents[0];
        assert!(doc.brand.is_none());
        assert!(doc.weight.is_none());
        assert!(doc.dimensions.is_none());
        assert!(doc.date_added.is_none());
    }
}
