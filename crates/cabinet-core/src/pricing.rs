//! # Pricing Engine
//!
//! Pure functions from catalog rows and settings to line items and totals.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CatalogItem + quantity + markup                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_line_item()                                                    │
//! │       ├── final_unit_price = round(base × (1 + markup), 2)              │
//! │       ├── line_total       = final_unit_price × quantity                │
//! │       └── savings          = retail − base × quantity                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [LineItem, ...] + shipping + delivery                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_totals()                                                       │
//! │       ├── subtotal     = Σ line_total                                   │
//! │       ├── tax          = round(subtotal × 6.5%, 2)                      │
//! │       ├── retail_total = Σ retail × quantity                            │
//! │       ├── savings      = retail_total − subtotal                        │
//! │       └── grand_total  = subtotal + tax + shipping + delivery           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here reads configuration or session state. Validation of quantity
//! and markup happens before these functions are called (see [`crate::cart`]).

use crate::money::Money;
use crate::types::{CatalogItem, InvoiceTotals, LineItem, MarkupRate};
use crate::SALES_TAX_RATE;

/// Customer-facing unit price: base price plus markup, rounded to the cent.
#[inline]
pub fn final_unit_price(base_price: Money, markup: MarkupRate) -> Money {
    base_price.with_markup(markup)
}

/// Prices one catalog row for the cart.
///
/// ## Preconditions
/// `quantity >= 1`. Enforced by [`crate::Cart::add`] and
/// [`crate::validation::validate_quantity`].
///
/// ## Savings
/// Savings subtract the pre-markup base price times quantity from the retail
/// price of a single unit. The two sides are on different bases (one unit vs
/// the whole line); this is the price sheet's established formula and is kept
/// as-is. Totals use `retail_total - subtotal` instead.
///
/// ## Example
/// ```rust
/// use cabinet_core::{compute_line_item, CatalogItem, MarkupRate, Money};
///
/// let item = CatalogItem::new(
///     "Base Cabinets",
///     "B12",
///     Money::from_cents(30_000),
///     Money::from_cents(10_000),
/// );
/// let line = compute_line_item(&item, 2, MarkupRate::from_bps(3000));
///
/// assert_eq!(line.final_unit_price.cents(), 13_000);
/// assert_eq!(line.line_total.cents(), 26_000);
/// assert_eq!(line.savings.cents(), 10_000);
/// ```
pub fn compute_line_item(item: &CatalogItem, quantity: i64, markup: MarkupRate) -> LineItem {
    debug_assert!(quantity >= 1, "quantity must be validated before pricing");

    let final_unit_price = final_unit_price(item.base_price, markup);
    let line_total = final_unit_price.multiply_quantity(quantity);
    let savings = item.retail_price - item.base_price.multiply_quantity(quantity);

    LineItem {
        item_type: item.item_type.clone(),
        name: item.name.clone(),
        quantity,
        retail_price: item.retail_price,
        base_price: item.base_price,
        markup,
        final_unit_price,
        savings,
        line_total,
    }
}

/// Computes the invoice totals for a cart.
///
/// An empty cart is not an error here: it yields zero subtotal and tax, and
/// a grand total made of the fees alone.
///
/// ## Example
/// ```rust
/// use cabinet_core::{compute_totals, Money};
///
/// let totals = compute_totals(&[], Money::from_dollars(100), Money::from_dollars(200));
/// assert!(totals.subtotal.is_zero());
/// assert_eq!(totals.grand_total, Money::from_dollars(300));
/// ```
pub fn compute_totals(
    items: &[LineItem],
    shipping_fee: Money,
    delivery_fee: Money,
) -> InvoiceTotals {
    let subtotal: Money = items.iter().map(|i| i.line_total).sum();
    let retail_total: Money = items.iter().map(LineItem::retail_total).sum();
    let tax = subtotal.calculate_tax(SALES_TAX_RATE);

    InvoiceTotals {
        retail_total,
        subtotal,
        tax,
        shipping_fee,
        delivery_fee,
        grand_total: subtotal + tax + shipping_fee + delivery_fee,
        total_savings: retail_total - subtotal,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cabinet(retail_cents: i64, base_cents: i64) -> CatalogItem {
        CatalogItem::new(
            "Base Cabinets",
            "B24 Base 24in",
            Money::from_cents(retail_cents),
            Money::from_cents(base_cents),
        )
    }

    #[test]
    fn test_reference_cart() {
        let line = compute_line_item(&cabinet(30_000, 10_000), 2, MarkupRate::from_bps(3000));

        assert_eq!(line.final_unit_price.cents(), 13_000);
        assert_eq!(line.line_total.cents(), 26_000);
        assert_eq!(line.savings.cents(), 10_000);

        let totals = compute_totals(&[line], Money::from_dollars(100), Money::zero());
        assert_eq!(totals.subtotal.cents(), 26_000);
        assert_eq!(totals.tax.cents(), 1_690);
        assert_eq!(totals.grand_total.cents(), 37_690);
        assert_eq!(totals.retail_total.cents(), 60_000);
        assert_eq!(totals.total_savings.cents(), 34_000);
    }

    #[test]
    fn test_flat_discount_keeps_sheet_price() {
        let line = compute_line_item(&cabinet(25_000, 18_750), 3, MarkupRate::zero());
        assert_eq!(line.final_unit_price.cents(), 18_750);
        assert_eq!(line.line_total.cents(), 56_250);
    }

    #[test]
    fn test_markup_rounds_once_per_unit() {
        // $33.33 × 1.15 = $38.3295 → $38.33; × 3 = $114.99 (not $114.9885)
        let line = compute_line_item(&cabinet(5_000, 3_333), 3, MarkupRate::from_bps(1500));
        assert_eq!(line.final_unit_price.cents(), 3_833);
        assert_eq!(line.line_total.cents(), 11_499);
    }

    #[test]
    fn test_savings_can_go_negative() {
        // Retail is per unit, base is per line: large quantities flip the sign
        let line = compute_line_item(&cabinet(30_000, 10_000), 5, MarkupRate::zero());
        assert_eq!(line.savings.cents(), -20_000);
    }

    #[test]
    fn test_line_copies_catalog_fields() {
        let item = cabinet(30_000, 10_000);
        let line = compute_line_item(&item, 1, MarkupRate::from_bps(500));
        assert_eq!(line.item_type, item.item_type);
        assert_eq!(line.name, item.name);
        assert_eq!(line.retail_price, item.retail_price);
        assert_eq!(line.base_price, item.base_price);
        assert_eq!(line.markup.bps(), 500);
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = compute_totals(&[], Money::from_dollars(100), Money::from_dollars(200));
        assert!(totals.subtotal.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.retail_total.is_zero());
        assert!(totals.total_savings.is_zero());
        assert_eq!(totals.grand_total.cents(), 30_000);
    }

    #[test]
    fn test_totals_are_deterministic() {
        let lines = vec![
            compute_line_item(&cabinet(30_000, 10_000), 2, MarkupRate::from_bps(3000)),
            compute_line_item(&cabinet(9_999, 4_321), 7, MarkupRate::from_bps(3000)),
        ];
        let first = compute_totals(&lines, Money::from_dollars(300), Money::from_dollars(400));
        let second = compute_totals(&lines, Money::from_dollars(300), Money::from_dollars(400));
        assert_eq!(first, second);
    }
}
