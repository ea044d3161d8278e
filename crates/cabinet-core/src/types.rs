//! # Domain Types
//!
//! Core domain types used throughout the cabinet order system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │    LineItem     │   │  InvoiceTotals  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  item_type      │──►│  quantity       │──►│  subtotal       │       │
//! │  │  name           │   │  markup         │   │  tax            │       │
//! │  │  retail_price   │   │  final price    │   │  fees           │       │
//! │  │  base_price     │   │  line_total     │   │  grand_total    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │   MarkupRate    │   │  PricingMode    │       │
//! │  │  bps (u32)      │   │  bps (u32)      │   │  FlatDiscount   │       │
//! │  │  650 = 6.5%     │   │  3000 = 30%     │   │  Markup(rate)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 650 bps = 6.5% (the store's sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

// =============================================================================
// Markup Rate
// =============================================================================

/// Markup added on top of the discounted base price, in basis points.
///
/// Unsigned, so a negative markup cannot be represented. The 0–100% range is
/// checked at the boundary by [`crate::validation::validate_markup_bps`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarkupRate(u32);

impl MarkupRate {
    /// Creates a markup from basis points (3000 = 30%).
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        MarkupRate(bps)
    }

    /// Creates a markup from a percentage as typed by the user.
    ///
    /// Negative and non-finite inputs collapse to zero; callers validate the
    /// raw percentage first when they need to reject them.
    pub fn from_percentage(pct: f64) -> Self {
        if !pct.is_finite() || pct <= 0.0 {
            return MarkupRate(0);
        }
        MarkupRate((pct * 100.0).round() as u32)
    }

    /// No markup.
    #[inline]
    pub const fn zero() -> Self {
        MarkupRate(0)
    }

    /// Returns the markup in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the markup as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for MarkupRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Pricing Mode
// =============================================================================

/// How the customer-facing unit price is derived from the catalog.
///
/// ```text
/// FlatDiscount            unit price = discounted sheet price
/// Markup(30%)             unit price = base price × 1.30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "markup")]
pub enum PricingMode {
    /// The sheet already carries the final discounted price.
    FlatDiscount,
    /// The sheet carries a base price; the shop adds a markup on top.
    Markup(MarkupRate),
}

impl PricingMode {
    /// The markup this mode applies (zero for flat discount).
    pub const fn markup(&self) -> MarkupRate {
        match self {
            PricingMode::FlatDiscount => MarkupRate::zero(),
            PricingMode::Markup(rate) => *rate,
        }
    }

    /// Name of the spreadsheet column holding the pre-markup price.
    pub const fn price_column(&self) -> &'static str {
        match self {
            PricingMode::FlatDiscount => "FINAL PRICE",
            PricingMode::Markup(_) => "PRICE WITH DISCOUNT",
        }
    }
}

impl Default for PricingMode {
    fn default() -> Self {
        PricingMode::FlatDiscount
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// One priced row of the catalog. Immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Display label of the cabinet type ("Base Cabinets").
    pub item_type: String,

    /// Item name as listed in the sheet.
    pub name: String,

    /// Full undiscounted reference price.
    pub retail_price: Money,

    /// Discounted price, before any markup.
    pub base_price: Money,
}

impl CatalogItem {
    pub fn new(
        item_type: impl Into<String>,
        name: impl Into<String>,
        retail_price: Money,
        base_price: Money,
    ) -> Self {
        CatalogItem {
            item_type: item_type.into(),
            name: name.into(),
            retail_price,
            base_price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced, quantity-resolved row of the cart.
///
/// Snapshot pattern: every price is frozen when the row is added. Rows are
/// never edited afterwards; adding the same item again appends a new row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub item_type: String,
    pub name: String,
    pub quantity: i64,
    pub retail_price: Money,
    pub base_price: Money,
    pub markup: MarkupRate,
    /// `round(base_price × (1 + markup), 2)`
    pub final_unit_price: Money,
    /// `retail_price − base_price × quantity`
    pub savings: Money,
    /// `final_unit_price × quantity`
    pub line_total: Money,
}

impl LineItem {
    /// Retail value of the row (`retail_price × quantity`).
    #[inline]
    pub fn retail_total(&self) -> Money {
        self.retail_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Totals block of an invoice. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub retail_total: Money,
    pub subtotal: Money,
    pub tax: Money,
    pub shipping_fee: Money,
    pub delivery_fee: Money,
    pub grand_total: Money,
    pub total_savings: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
