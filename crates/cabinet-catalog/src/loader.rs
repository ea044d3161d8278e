//! # Catalog Loader
//!
//! Reads the price sheet, either the `.xlsx` workbook itself (first
//! worksheet) or a CSV export of it. Both feed the same header and row checks.
//!
//! ## Loading Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Read header row (trimmed, case-insensitive match)                   │
//! │       └── missing TYPES / ITEM / ORIGINAL PRICE / price column? FAIL    │
//! │                                                                         │
//! │  2. For each data row                                                   │
//! │       ├── fully blank? skip                                             │
//! │       ├── TYPES, ITEM blank? FAIL with row number                       │
//! │       ├── prices parse as non-negative dollars? else FAIL               │
//! │       └── type label: trim → lower → Title Case                         │
//! │                                                                         │
//! │  3. No rows left? FAIL (Empty)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use cabinet_core::validation::validate_price;
use cabinet_core::{Catalog, CatalogItem, Money, PricingMode};
use calamine::{Data, Reader, Xlsx};
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::normalize::display_type;
use crate::{ITEM_COLUMN, RETAIL_COLUMN, TYPE_COLUMN};

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    item_type: usize,
    item: usize,
    retail: usize,
    base: usize,
}

/// Loads a [`Catalog`] for one pricing mode.
///
/// The mode decides which price column holds the pre-markup price:
/// `FINAL PRICE` for flat-discount sheets, `PRICE WITH DISCOUNT` for markup
/// sheets.
#[derive(Debug, Clone, Copy)]
pub struct CatalogLoader {
    mode: PricingMode,
}

impl CatalogLoader {
    pub fn new(mode: PricingMode) -> Self {
        CatalogLoader { mode }
    }

    /// Opens and loads the sheet at `path`.
    ///
    /// `.xlsx` files are read as workbooks; anything else is read as CSV.
    pub fn load_path(&self, path: impl AsRef<Path>) -> CatalogResult<Catalog> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = if is_workbook(path) {
            self.load_workbook(BufReader::new(file))?
        } else {
            self.load_reader(file)?
        };
        info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Loads a CSV sheet from any reader (file, in-memory buffer, stdin).
    pub fn load_reader<R: Read>(&self, reader: R) -> CatalogResult<Catalog> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let columns = self.resolve_columns(&headers)?;
        debug!(?columns, price_column = self.mode.price_column(), "Catalog columns resolved");

        let mut items = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let record = record?;
            // Header is line 1; fall back to counting when position is unknown
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(index + 2);

            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            if let Some(item) = self.parse_cells(&cells, columns, row)? {
                items.push(item);
            }
        }

        finish(items)
    }

    /// Loads the first worksheet of an `.xlsx` workbook.
    ///
    /// Row numbers in errors are the spreadsheet's own (1-based) row numbers.
    pub fn load_workbook<RS: Read + Seek>(&self, reader: RS) -> CatalogResult<Catalog> {
        let mut workbook = Xlsx::new(reader)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(CatalogError::NoWorksheet)??;

        // Range rows are relative to the first used cell
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
        let mut rows = range.rows();

        let headers: Vec<String> = rows.next().map(cell_strings).unwrap_or_default();
        let columns = self.resolve_columns(&headers)?;
        debug!(?columns, price_column = self.mode.price_column(), "Workbook columns resolved");

        let mut items = Vec::new();
        for (index, cells) in rows.enumerate() {
            let row = first_row + index + 2;
            if let Some(item) = self.parse_cells(&cell_strings(cells), columns, row)? {
                items.push(item);
            }
        }

        finish(items)
    }

    fn resolve_columns(&self, headers: &[String]) -> CatalogResult<Columns> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(column))
                .ok_or_else(|| CatalogError::MissingColumn {
                    column: column.to_string(),
                    found: headers.to_vec(),
                })
        };

        Ok(Columns {
            item_type: find(TYPE_COLUMN)?,
            item: find(ITEM_COLUMN)?,
            retail: find(RETAIL_COLUMN)?,
            base: find(self.mode.price_column())?,
        })
    }

    /// Parses one data row. Fully blank rows yield `None`.
    fn parse_cells(&self, cells: &[String], columns: Columns, row: usize) -> CatalogResult<Option<CatalogItem>> {
        if cells.iter().all(|c| c.is_empty()) {
            return Ok(None);
        }
        self.parse_row(cells, columns, row).map(Some)
    }

    fn parse_row(&self, cells: &[String], columns: Columns, row: usize) -> CatalogResult<CatalogItem> {
        let cell = |index: usize| cells.get(index).map(String::as_str).unwrap_or("");

        let raw_type = cell(columns.item_type);
        if raw_type.is_empty() {
            return Err(CatalogError::missing_value(row, TYPE_COLUMN));
        }

        let name = cell(columns.item);
        if name.is_empty() {
            return Err(CatalogError::missing_value(row, ITEM_COLUMN));
        }

        let retail_price = parse_price(cell(columns.retail), RETAIL_COLUMN, row)?;
        let base_price = parse_price(cell(columns.base), self.mode.price_column(), row)?;

        Ok(CatalogItem::new(
            display_type(raw_type),
            name,
            retail_price,
            base_price,
        ))
    }
}

fn finish(items: Vec<CatalogItem>) -> CatalogResult<Catalog> {
    if items.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(Catalog::new(items))
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

/// Renders worksheet cells as the trimmed text the CSV path would see.
fn cell_strings(cells: &[Data]) -> Vec<String> {
    cells
        .iter()
        .map(|cell| match cell {
            Data::Empty => String::new(),
            Data::String(text) => text.trim().to_string(),
            // Floats print without exponent; price parsing rounds to cents
            other => other.to_string().trim().to_string(),
        })
        .collect()
}

fn parse_price(value: &str, column: &str, row: usize) -> CatalogResult<Money> {
    if value.is_empty() {
        return Err(CatalogError::missing_value(row, column));
    }

    let invalid = || CatalogError::InvalidPrice {
        row,
        column: column.to_string(),
        value: value.to_string(),
    };

    let price: Money = value.parse().map_err(|_| invalid())?;
    validate_price(price, column).map_err(|_| invalid())?;
    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
