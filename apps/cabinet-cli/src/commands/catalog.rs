//! `cabinet catalog`: browse the price sheet.

use std::io::Write;

use cabinet_core::{final_unit_price, PricingMode};
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::state::Session;

/// Lists the cabinet types, or the items of `item_type` with their prices.
pub fn run(session: &Session, item_type: Option<&str>, out: &mut dyn Write) -> CliResult<()> {
    match item_type {
        None => list_types(session, out),
        Some(item_type) => list_items(session, item_type, out),
    }
}

fn list_types(session: &Session, out: &mut dyn Write) -> CliResult<()> {
    let catalog = session.catalog();
    let types = catalog.types();
    debug!(types = types.len(), "Listing cabinet types");

    writeln!(out, "Cabinet types ({} items):", catalog.len())?;
    for item_type in types {
        let count = catalog.items_of_type(item_type).count();
        writeln!(out, "  {item_type:<30} {count:>5}")?;
    }
    Ok(())
}

fn list_items(session: &Session, item_type: &str, out: &mut dyn Write) -> CliResult<()> {
    let catalog = session.catalog();
    let items: Vec<_> = catalog.items_of_type(item_type).collect();
    if items.is_empty() {
        return Err(CliError::UnknownType {
            item_type: item_type.trim().to_string(),
            available: catalog.types().into_iter().map(String::from).collect(),
        });
    }

    let mode = session.mode();
    writeln!(out, "{}", items[0].item_type)?;
    match mode {
        PricingMode::FlatDiscount => {
            writeln!(out, "{:<30} {:>14} {:>14}", "ITEM", "RETAIL", mode.price_column())?;
            for item in items {
                writeln!(
                    out,
                    "{:<30} {:>14} {:>14}",
                    item.name,
                    item.retail_price.to_string(),
                    item.base_price.to_string()
                )?;
            }
        }
        PricingMode::Markup(rate) => {
            let with_markup = format!("WITH {rate} MARKUP");
            writeln!(
                out,
                "{:<30} {:>14} {:>20} {:>20}",
                "ITEM",
                "RETAIL",
                mode.price_column(),
                with_markup
            )?;
            for item in items {
                writeln!(
                    out,
                    "{:<30} {:>14} {:>20} {:>20}",
                    item.name,
                    item.retail_price.to_string(),
                    item.base_price.to_string(),
                    final_unit_price(item.base_price, rate).to_string()
                )?;
            }
        }
    }
    Ok(())
}
