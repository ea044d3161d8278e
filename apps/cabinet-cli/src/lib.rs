//! # cabinet-cli
//!
//! Command-line front end for cabinet order quotes and invoices.
//!
//! ## Module Organization
//! ```text
//! cabinet_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── AppConfig: file → environment → flags
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   ├── order.rs    ◄─── "TYPE|ITEM|QTY" parsing
//! │   └── session.rs  ◄─── Catalog + cart + pricing settings
//! ├── commands/
//! │   ├── catalog.rs  ◄─── List types / items
//! │   ├── quote.rs    ◄─── Print cart and totals
//! │   └── invoice.rs  ◄─── Write the PDF
//! └── error.rs        ◄─── CliError and exit codes
//! ```
//!
//! ## Invocation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Initialize logging (stderr, RUST_LOG or "info")                     │
//! │  3. Resolve AppConfig                                                   │
//! │  4. Build Session: validate markup & fees, load catalog                 │
//! │  5. Add --item rows in order                                            │
//! │  6. Run the subcommand against the session                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::io::{self, Write};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cabinet_invoice::InvoiceRenderer;
use cli::{Cli, Command};
use commands::invoice::InvoiceOutcome;
use commands::quote::QuoteFormat;
use config::AppConfig;
use error::CliResult;
use state::Session;

pub use error::CliError;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - Default: INFO
/// - `RUST_LOG=debug` - cart and layout detail
/// - `RUST_LOG=cabinet_invoice=trace` - one crate only
///
/// Logs go to stderr so quotes on stdout stay clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs a parsed command against the real stdout/stderr and local clock.
pub fn run(cli: Cli) -> CliResult<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(
        cli,
        &mut stdout.lock(),
        &mut stderr.lock(),
        Local::now().naive_local(),
    )
}

/// Runs a parsed command.
///
/// `out` receives the command's output, `err` the user-facing warnings.
/// `now` is printed on invoices.
pub fn execute(
    cli: Cli,
    out: &mut dyn Write,
    err: &mut dyn Write,
    now: NaiveDateTime,
) -> CliResult<()> {
    let config = AppConfig::load(cli.options.config.as_deref())?.apply_options(&cli.options);
    debug!(?config, "Configuration resolved");

    let mut session = Session::from_config(&config)?;

    match cli.command {
        Command::Catalog { item_type } => {
            commands::catalog::run(&session, item_type.as_deref(), out)?;
        }
        Command::Quote { order, json } => {
            session.add_order_specs(&order.items)?;
            let format = if json { QuoteFormat::Json } else { QuoteFormat::Table };
            commands::quote::run(&session, format, out)?;
        }
        Command::Invoice { order, out: path } => {
            session.add_order_specs(&order.items)?;
            let renderer = InvoiceRenderer::new(config.layout);
            match commands::invoice::run(&session, &renderer, &config.business, &path, now)? {
                InvoiceOutcome::Written {
                    path,
                    page_count,
                    bytes,
                } => {
                    info!(path = %path.display(), page_count, bytes, "Invoice written");
                    writeln!(
                        out,
                        "Invoice written to {} ({} page{})",
                        path.display(),
                        page_count,
                        if page_count == 1 { "" } else { "s" }
                    )?;
                }
                InvoiceOutcome::EmptyCart => {
                    writeln!(err, "Your cart is empty!")?;
                }
            }
        }
    }

    Ok(())
}
