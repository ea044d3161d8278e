//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error / csv::Error / calamine::XlsxError                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds file, row and column context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError ← printed to stderr, non-zero exit                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Catalog loading errors. All of them are fatal: the shell refuses to start
/// with a catalog it could not fully read.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The price sheet could not be opened.
    #[error("Cannot open catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV itself is malformed (bad quoting, invalid UTF-8, ...).
    #[error("Malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    /// The `.xlsx` workbook could not be read (not a zip, broken XML, ...).
    #[error("Malformed workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// The workbook has no worksheet to read.
    #[error("Workbook has no worksheets")]
    NoWorksheet,

    /// A required column header is absent.
    ///
    /// ## When This Occurs
    /// - A flat-discount sheet loaded in markup mode (or the reverse)
    /// - Header row renamed in the spreadsheet
    #[error("Catalog is missing column '{column}' (found: {found:?})")]
    MissingColumn { column: String, found: Vec<String> },

    /// A required cell is blank.
    #[error("Row {row}: '{column}' is empty")]
    MissingValue { row: usize, column: String },

    /// A price cell does not hold a non-negative dollar amount.
    #[error("Row {row}: '{column}' has invalid price '{value}'")]
    InvalidPrice {
        row: usize,
        column: String,
        value: String,
    },

    /// The sheet has a header but no items.
    #[error("Catalog has no items")]
    Empty,
}

impl CatalogError {
    pub fn missing_value(row: usize, column: impl Into<String>) -> Self {
        CatalogError::MissingValue {
            row,
            column: column.into(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::MissingColumn {
            column: "FINAL PRICE".to_string(),
            found: vec!["TYPES".to_string(), "ITEM".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Catalog is missing column 'FINAL PRICE' (found: [\"TYPES\", \"ITEM\"])"
        );

        let err = CatalogError::InvalidPrice {
            row: 7,
            column: "ORIGINAL PRICE".to_string(),
            value: "call".to_string(),
        };
        assert_eq!(err.to_string(), "Row 7: 'ORIGINAL PRICE' has invalid price 'call'");

        assert_eq!(
            CatalogError::missing_value(3, "ITEM").to_string(),
            "Row 3: 'ITEM' is empty"
        );

        assert_eq!(CatalogError::NoWorksheet.to_string(), "Workbook has no worksheets");
    }
}
