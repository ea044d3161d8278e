//! # cabinet-core: Pure Business Logic for the Cabinet Order System
//!
//! This crate holds the pricing rules, the cart, and the totals that feed the
//! invoice. Everything here is a pure function of its inputs: markup,
//! shipping and delivery are always passed in explicitly.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cabinet POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cabinet-cli (shell)                          │   │
//! │  │     catalog ──► quote ──► invoice                               │   │
//! │  └──────────┬──────────────────┬───────────────────┬───────────────┘   │
//! │             │                  │                   │                    │
//! │  ┌──────────▼──────┐ ┌─────────▼───────────┐ ┌─────▼──────────────┐   │
//! │  │ cabinet-catalog │ │ ★ cabinet-core ★    │ │ cabinet-invoice    │   │
//! │  │  CSV → Catalog  │ │ Money • Pricing     │ │ Cart → PDF bytes   │   │
//! │  └─────────────────┘ │ Cart  • Validation  │ └────────────────────┘   │
//! │                      │ NO I/O • PURE       │                          │
//! │                      └─────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, LineItem, rates, totals)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable in-memory catalog with lookups
//! - [`pricing`] - The pricing engine (line items and invoice totals)
//! - [`cart`] - Ordered cart of line items
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary checks for quantity, markup and fees
//!
//! ## Example Usage
//!
//! ```rust
//! use cabinet_core::{Cart, CatalogItem, MarkupRate, Money};
//!
//! let item = CatalogItem::new(
//!     "Base Cabinets",
//!     "B12 Base 12in",
//!     Money::from_cents(30_000),
//!     Money::from_cents(10_000),
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(&item, 2, MarkupRate::from_bps(3000)).unwrap();
//!
//! let totals = cart.totals(Money::from_cents(10_000), Money::zero());
//! assert_eq!(totals.subtotal.cents(), 26_000);
//! assert_eq!(totals.tax.cents(), 1_690);
//! assert_eq!(totals.grand_total.cents(), 37_690);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartState};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_line_item, compute_totals, final_unit_price};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every invoice: 6.5% (650 basis points).
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(650);

/// Largest cart subtotal or retail total, in cents.
///
/// Tax, fees and savings derived from totals under this bound stay within
/// `i64`. Quantities and row counts are otherwise unlimited.
pub const MAX_AMOUNT_CENTS: i64 = i64::MAX / 4;

/// Highest markup accepted at the boundary: 100% (10000 basis points).
pub const MAX_MARKUP_BPS: u32 = 10_000;

/// Shipping and delivery fees offered to the customer, in whole dollars.
pub const FEE_OPTIONS_DOLLARS: [i64; 5] = [0, 100, 200, 300, 400];

/// Longest item name printed on an invoice row.
pub const INVOICE_NAME_MAX_CHARS: usize = 30;
