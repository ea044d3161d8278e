//! # cabinet-invoice: Invoice Renderer
//!
//! Produces the printable PDF invoice from a cart snapshot and its totals.
//!
//! ## Page Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Mike Renovations LLC                                                   │
//! │  Phone: 239-200-5772                                  2025-06-01 14:30  │
//! │  Email: contact@mikerenovations.com                                     │
//! │                                                                         │
//! │  TYPE    ITEM     PRICE W/O DISCOUNT  UNIT $  FINAL PRICE $  QTY TOTAL $│
//! │  ───────────────────────────────────────────────────────────────────── │
//! │  Base    B12 Base 12in       $300.00 $100.00        $130.00    2 $260.00│
//! │  ...       (18pt rows; new page below y=100, no repeated header)        │
//! │  ───────────────────────────────────────────────────────────────────── │
//! │                               Price Without Discount:         $600.00  │
//! │                                            You Save:       (-$340.00)  │
//! │                            Subtotal (with discount):         $260.00  │
//! │                                         Tax (6.5%):          $16.90  │
//! │                                            Shipping:         $100.00  │
//! │                                            Delivery:            FREE  │
//! │                                         Final Total:         $376.90  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`renderer`] - Invoice layout (header, rows, pagination, totals)
//! - [`layout`] - Portrait and landscape presets (page size, columns)
//! - [`canvas`] - Procedural drawing surface producing content streams
//! - [`metrics`] - Helvetica glyph widths for right-aligned text
//! - [`pdf`] - Assembles pages into deterministic PDF bytes
//! - [`document`] - The finished invoice document
//! - [`business`] - Business details printed in the header
//!
//! ## Determinism
//! Same line items, totals, business info and timestamp always give the same
//! bytes: streams are not compressed, there is no random document ID, and
//! objects are numbered in drawing order.

pub mod business;
pub mod canvas;
pub mod document;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod renderer;

pub use business::BusinessInfo;
pub use document::{InvoiceDocument, PDF_MIME_TYPE};
pub use error::{InvoiceError, InvoiceResult};
pub use layout::PageLayout;
pub use renderer::InvoiceRenderer;

/// Default download name for the invoice.
pub const DEFAULT_FILENAME: &str = "invoice.pdf";

/// Timestamp format printed in the header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
