//! `cabinet invoice`: render the cart and save the PDF.

use std::path::{Path, PathBuf};

use cabinet_invoice::{BusinessInfo, InvoiceRenderer};
use chrono::NaiveDateTime;
use tracing::warn;

use crate::error::CliResult;
use crate::state::Session;

/// What the invoice command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceOutcome {
    Written {
        path: PathBuf,
        page_count: usize,
        bytes: usize,
    },
    /// Nothing in the cart; no file was touched.
    EmptyCart,
}

/// Renders the session's cart and writes it to `path`.
///
/// An empty cart is a warning, not an error: nothing is written.
pub fn run(
    session: &Session,
    renderer: &InvoiceRenderer,
    business: &BusinessInfo,
    path: &Path,
    timestamp: NaiveDateTime,
) -> CliResult<InvoiceOutcome> {
    if session.cart().is_empty() {
        warn!("Your cart is empty!");
        return Ok(InvoiceOutcome::EmptyCart);
    }

    let totals = session.totals();
    let document = renderer.render(session.cart().items(), &totals, business, timestamp)?;
    document.write_to(path)?;

    Ok(InvoiceOutcome::Written {
        path: path.to_path_buf(),
        page_count: document.page_count,
        bytes: document.len(),
    })
}
