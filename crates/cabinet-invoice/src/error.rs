//! # Invoice Error Types

use std::path::PathBuf;

use thiserror::Error;

/// Invoice rendering errors.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Nothing to invoice. No document is produced.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// The PDF object model refused to encode or write.
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Serializing the finished document into memory failed.
    #[error("PDF encoding failed: {0}")]
    Encode(#[source] std::io::Error),

    /// The finished document could not be saved.
    #[error("Cannot write invoice to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for invoice operations.
pub type InvoiceResult<T> = Result<T, InvoiceError>;
