//! The rendered invoice, ready to download or save.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{InvoiceError, InvoiceResult};

/// MIME type offered with the download.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A finished invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub filename: String,
}

impl InvoiceDocument {
    pub fn mime_type(&self) -> &'static str {
        PDF_MIME_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> InvoiceResult<()> {
        let path = path.as_ref();
        fs::write(path, &self.bytes).map_err(|source| InvoiceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            pages = self.page_count,
            bytes = self.bytes.len(),
            "Invoice saved"
        );
        Ok(())
    }
}
