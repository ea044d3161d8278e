//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::ModeSetting;
use cabinet_invoice::PageLayout;

#[derive(Debug, Parser)]
#[command(
    name = "cabinet",
    version,
    about = "Price cabinet orders and print PDF invoices"
)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every subcommand. Each one overrides the config file
/// and the environment.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// TOML config file (default: $CABINET_CONFIG if set)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Price sheet: .xlsx workbook, or CSV export for any other extension
    #[arg(long, global = true, value_name = "SHEET")]
    pub catalog: Option<PathBuf>,

    /// How unit prices are derived
    #[arg(long, global = true, value_enum)]
    pub mode: Option<ModeArg>,

    /// Markup percent added to the base price (markup mode)
    #[arg(long, global = true, value_name = "PERCENT")]
    pub markup: Option<f64>,

    /// Shipping fee in dollars: 0, 100, 200, 300 or 400
    #[arg(long, global = true, value_name = "DOLLARS")]
    pub shipping: Option<i64>,

    /// Delivery fee in dollars: 0, 100, 200, 300 or 400
    #[arg(long, global = true, value_name = "DOLLARS")]
    pub delivery: Option<i64>,

    /// Invoice page orientation
    #[arg(long, global = true, value_enum)]
    pub layout: Option<LayoutArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    FlatDiscount,
    Markup,
}

impl From<ModeArg> for ModeSetting {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::FlatDiscount => ModeSetting::FlatDiscount,
            ModeArg::Markup => ModeSetting::Markup,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Portrait,
    Landscape,
}

impl From<LayoutArg> for PageLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Portrait => PageLayout::Portrait,
            LayoutArg::Landscape => PageLayout::Landscape,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List cabinet types, or the items of one type with prices
    Catalog {
        /// Cabinet type to list (any case)
        #[arg(long = "type", value_name = "TYPE")]
        item_type: Option<String>,
    },

    /// Build a cart and print the quote
    Quote {
        #[command(flatten)]
        order: OrderArgs,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a cart and write the PDF invoice
    Invoice {
        #[command(flatten)]
        order: OrderArgs,

        /// Where to write the PDF
        #[arg(long, value_name = "FILE", default_value = cabinet_invoice::DEFAULT_FILENAME)]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct OrderArgs {
    /// Cart row as "TYPE|ITEM|QTY" (QTY defaults to 1). Repeat for more rows.
    #[arg(long = "item", value_name = "TYPE|ITEM|QTY")]
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_invoice_with_globals() {
        let cli = Cli::try_parse_from([
            "cabinet",
            "invoice",
            "--item",
            "Base Cabinets|B12|2",
            "--item",
            "Wall Cabinets|W3030",
            "--mode",
            "markup",
            "--markup",
            "30",
            "--shipping",
            "100",
            "--out",
            "order.pdf",
        ])
        .unwrap();

        assert_eq!(cli.options.mode, Some(ModeArg::Markup));
        assert_eq!(cli.options.markup, Some(30.0));
        assert_eq!(cli.options.shipping, Some(100));
        match cli.command {
            Command::Invoice { order, out } => {
                assert_eq!(order.items.len(), 2);
                assert_eq!(out, PathBuf::from("order.pdf"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_invoice_defaults_to_invoice_pdf() {
        let cli = Cli::try_parse_from(["cabinet", "invoice"]).unwrap();
        match cli.command {
            Command::Invoice { order, out } => {
                assert!(order.items.is_empty());
                assert_eq!(out, PathBuf::from("invoice.pdf"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_mode_value_names() {
        let cli = Cli::try_parse_from(["cabinet", "--mode", "flat-discount", "catalog"]).unwrap();
        assert_eq!(cli.options.mode, Some(ModeArg::FlatDiscount));
        assert!(Cli::try_parse_from(["cabinet", "--mode", "bogus", "catalog"]).is_err());
    }
}
