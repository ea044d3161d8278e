//! # CLI Error Type
//!
//! Every failure a command can hit, with the exit status the binary reports.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                         CliError variant        Exit status     │
//! │  ──────                         ────────────────        ───────────     │
//! │  config file / env / flags ───► Config               ─► 3              │
//! │  price sheet              ───► Catalog              ─► 4              │
//! │  --item / unknown item    ───► InvalidOrder, Core,  ─► 5              │
//! │                                UnknownType, Validation                  │
//! │  PDF render / save        ───► Invoice              ─► 6              │
//! │  stdout / JSON            ───► Output, Json         ─► 6              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cabinet_catalog::CatalogError;
use cabinet_core::{CoreError, ValidationError};
use cabinet_invoice::InvoiceError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Invoice(#[from] InvoiceError),

    /// An `--item` argument that is not `TYPE|ITEM|QTY`.
    #[error("Invalid item \"{spec}\": {reason}")]
    InvalidOrder { spec: String, reason: String },

    #[error("Unknown cabinet type \"{item_type}\" (available: {})", .available.join(", "))]
    UnknownType {
        item_type: String,
        available: Vec<String>,
    },

    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Cannot encode quote: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn invalid_order(spec: &str, reason: impl Into<String>) -> Self {
        CliError::InvalidOrder {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 3,
            CliError::Catalog(_) => 4,
            CliError::Core(_)
            | CliError::Validation(_)
            | CliError::InvalidOrder { .. }
            | CliError::UnknownType { .. } => 5,
            CliError::Invoice(_) | CliError::Output(_) | CliError::Json(_) => 6,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
