//! # cabinet
//!
//! ```text
//! cabinet catalog [--type TYPE]
//! cabinet quote   --item "TYPE|ITEM|QTY" ... [--json]
//! cabinet invoice --item "TYPE|ITEM|QTY" ... [--out invoice.pdf]
//!
//! global: --config FILE --catalog SHEET --mode flat-discount|markup
//!         --markup PERCENT --shipping DOLLARS --delivery DOLLARS
//!         --layout portrait|landscape
//! ```

use std::process::ExitCode;

use clap::Parser;

use cabinet_cli::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cabinet_cli::init_tracing();

    match cabinet_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
