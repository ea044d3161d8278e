//! `cabinet quote`: show the cart and its totals without writing a PDF.

use std::io::Write;

use cabinet_core::{InvoiceTotals, LineItem, PricingMode};
use cabinet_invoice::renderer::{totals_lines, truncate_name};
use serde::Serialize;

use crate::error::CliResult;
use crate::state::Session;

/// How the quote is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFormat {
    Table,
    Json,
}

/// JSON shape of a quote.
///
/// ```json
/// {
///   "mode": { "kind": "markup", "markup": 3000 },
///   "items": [ { "itemType": "Base Cabinets", "name": "B12", "quantity": 2, ... } ],
///   "totals": { "subtotal": 26000, "tax": 1690, "grandTotal": 37690, ... }
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote<'a> {
    pub mode: PricingMode,
    pub items: &'a [LineItem],
    pub totals: InvoiceTotals,
}

impl<'a> Quote<'a> {
    pub fn from_session(session: &'a Session) -> Self {
        Quote {
            mode: session.mode(),
            items: session.cart().items(),
            totals: session.totals(),
        }
    }
}

pub fn run(session: &Session, format: QuoteFormat, out: &mut dyn Write) -> CliResult<()> {
    let quote = Quote::from_session(session);
    match format {
        QuoteFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &quote)?;
            writeln!(out)?;
        }
        QuoteFormat::Table => write_table(&quote, out)?,
    }
    Ok(())
}

fn write_table(quote: &Quote<'_>, out: &mut dyn Write) -> CliResult<()> {
    if quote.items.is_empty() {
        writeln!(out, "Cart is empty")?;
    } else {
        writeln!(
            out,
            "{:<20} {:<30} {:>5} {:>12} {:>12} {:>12} {:>12}",
            "TYPE", "ITEM", "QTY", "RETAIL", "UNIT", "FINAL", "TOTAL"
        )?;
        for line in quote.items {
            writeln!(
                out,
                "{:<20} {:<30} {:>5} {:>12} {:>12} {:>12} {:>12}",
                line.item_type,
                truncate_name(&line.name),
                line.quantity,
                line.retail_price.to_string(),
                line.base_price.to_string(),
                line.final_unit_price.to_string(),
                line.line_total.to_string()
            )?;
        }
    }

    writeln!(out)?;
    for (label, value) in totals_lines(&quote.totals) {
        writeln!(out, "{label:>84} {value:>14}")?;
    }
    Ok(())
}
