//! Source module for the catalog indexer pipeline.
//!
//! Reads the delimited dataset fully into memory as an ordered sequence of
//! rows. No transformation, filtering, or validation happens here beyond
//! parsing and a header check; type coercion is the consuming processor's
//! responsibility.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::errors::PipelineError;

/// Column names the dataset must carry.
pub mod columns {
    pub const ASIN: &str = "asins";
    pub const BRAND: &str = "brand";
    pub const CATEGORIES: &str = "categories";
    pub const DIMENSIONS: &str = "dimension";
    pub const WEIGHT: &str = "weight";
    pub const DATE_ADDED: &str = "dateAdded";
    pub const DATE_UPDATED: &str = "dateUpdated";
    pub const REVIEW_TEXT: &str = "reviews.text";
    pub const REVIEW_RATING: &str = "reviews.rating";
    pub const REVIEW_TITLE: &str = "reviews.title";
    pub const REVIEW_USERNAME: &str = "reviews.username";
    pub const REVIEW_SOURCE_URLS: &str = "reviews.sourceURLs";

    /// Every column that must be present in the dataset header. Absence of
    /// any of these is a configuration error, not a per-row error.
    pub const REQUIRED: [&str; 12] = [
        ASIN,
        BRAND,
        CATEGORIES,
        DIMENSIONS,
        WEIGHT,
        DATE_ADDED,
        DATE_UPDATED,
        REVIEW_TEXT,
        REVIEW_RATING,
        REVIEW_TITLE,
        REVIEW_USERNAME,
        REVIEW_SOURCE_URLS,
    ];
}

/// A single dataset row: a mapping from column name to raw value.
///
/// Rows are produced once by the source and are immutable afterwards. They
/// have no identity beyond their position in the source.
#[derive(Debug, Clone)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Build a row from column/value pairs. Exposed for tests and the
    /// processors' own test fixtures.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a field value, applying the null rule.
    ///
    /// A value is absent when the column is missing from the row, the raw
    /// string is empty, or it is the `NaN`/`nan` sentinel the source uses
    /// for missing data. This is the single place where null detection
    /// happens.
    pub fn get(&self, column: &str) -> Option<&str> {
        match self.values.get(column).map(String::as_str) {
            Some("") | Some("NaN") | Some("nan") | None => None,
            Some(value) => Some(value),
        }
    }

    /// Get the raw field value without null detection.
    pub fn get_raw(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// In-memory dataset source backed by a CSV file.
///
/// The entire file is read once at construction; the resulting row
/// sequence is read-only and shared by both indexing passes.
#[derive(Debug)]
pub struct CsvSource {
    rows: Vec<Row>,
}

impl CsvSource {
    /// Read the dataset from a file path.
    ///
    /// # Returns
    ///
    /// * `Ok(CsvSource)` - All rows, in source order
    /// * `Err(PipelineError::SourceUnreadable)` - If the file is missing or
    ///   cannot be parsed as CSV
    /// * `Err(PipelineError::SchemaMismatch)` - If a required column is
    ///   absent from the header
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| {
                PipelineError::source_unreadable(format!("{}: {}", path.display(), e))
            })?;

        let source = Self::read_rows(reader)?;
        info!(path = %path.display(), rows = source.len(), "Loaded dataset");
        Ok(source)
    }

    /// Read the dataset from any reader. Used by tests to parse in-memory
    /// CSV data.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, PipelineError> {
        let reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        Self::read_rows(reader)
    }

    fn read_rows<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, PipelineError> {
        let headers = reader
            .headers()
            .map_err(|e| PipelineError::source_unreadable(e.to_string()))?
            .clone();

        for column in columns::REQUIRED {
            if !headers.iter().any(|h| h == column) {
                return Err(PipelineError::schema_mismatch(column));
            }
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| PipelineError::source_unreadable(e.to_string()))?;
            rows.push(Row::from_pairs(headers.iter().zip(record.iter())));
        }

        Ok(Self { rows })
    }

    /// The loaded rows, in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "asins,brand,categories,dimension,weight,dateAdded,dateUpdated,reviews.text,reviews.rating,reviews.title,reviews.username,reviews.sourceURLs";

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut data = String::from(HEADER);
        for row in rows {
            data.push('\n');
            data.push_str(row);
        }
        data
    }

    #[test]
    fn test_reads_rows_in_source_order() {
        let data = csv_with_rows(&[
            "A1,Acme,X,,,,,good,5,Title,bob,http://a",
            "A2,Zeta,Y,,,,,bad,1,Title2,eve,http://b",
        ]);

        let source = CsvSource::from_reader(data.as_bytes()).unwrap();

        assert_eq!(source.len(), 2);
        assert_eq!(source.rows()[0].get(columns::ASIN), Some("A1"));
        assert_eq!(source.rows()[1].get(columns::ASIN), Some("A2"));
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let data = "asins,brand\nA1,Acme";

        let err = CsvSource::from_reader(data.as_bytes()).unwrap_err();

        match err {
            PipelineError::SchemaMismatch { column } => {
                assert_eq!(column, "categories");
            }
            other => panic!("expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_source_unreadable() {
        let err = CsvSource::from_path("/nonexistent/data.csv").unwrap_err();
        assert!(matches!(err, PipelineError::SourceUnreadable(_)));
    }

    #[test]
    fn test_null_rule() {
        let row = Row::from_pairs([
            ("brand", "Acme"),
            ("weight", ""),
            ("dimension", "NaN"),
            ("dateAdded", "nan"),
        ]);

        assert_eq!(row.get("brand"), Some("Acme"));
        assert_eq!(row.get("weight"), None);
        assert_eq!(row.get("dimension"), None);
        assert_eq!(row.get("dateAdded"), None);
        assert_eq!(row.get("missing"), None);

        // Raw access bypasses the null rule.
        assert_eq!(row.get_raw("dimension"), Some("NaN"));
    }

    #[test]
    fn test_empty_dataset() {
        let source = CsvSource::from_reader(HEADER.as_bytes()).unwrap();
        assert!(source.is_empty());
    }
}
