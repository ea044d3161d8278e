//! # Cart
//!
//! Ordered collection of priced rows for one session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shell Action             Cart Method            State Change           │
//! │  ────────────             ───────────            ────────────           │
//! │                                                                         │
//! │  Add to Cart ───────────► add() ───────────────► items.push(line)       │
//! │                                                                         │
//! │  Clear Cart ────────────► clear() ─────────────► items.clear()          │
//! │                                                                         │
//! │  Show Cart ─────────────► items() ─────────────► (read only)            │
//! │                                                                         │
//! │  Invoice ───────────────► totals() ────────────► (read only)            │
//! │                                                                         │
//! │  ┌───────┐  add   ┌──────────┐                                          │
//! │  │ Empty │ ─────► │ NonEmpty │ ◄─┐ add                                  │
//! │  └───────┘ ◄───── └──────────┘ ──┘                                      │
//! │             clear                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{compute_line_item, compute_totals, final_unit_price};
use crate::types::{CatalogItem, InvoiceTotals, LineItem, MarkupRate};
use crate::validation::validate_quantity;
use crate::MAX_AMOUNT_CENTS;

/// Whether the cart holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is display and print order
/// - Rows are never merged: adding the same item twice gives two rows
/// - Every row was priced with the markup passed to `add` at that moment
/// - Subtotal and retail total never exceed [`MAX_AMOUNT_CENTS`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Prices a catalog item and appends it as a new row.
    ///
    /// ## Returns
    /// - `Ok(&LineItem)` with the row just added
    /// - `Err(CoreError::InvalidQuantity)` if quantity is below 1
    /// - `Err(CoreError::AmountOverflow)` if the row's amounts cannot be
    ///   represented alongside the rows already in the cart
    pub fn add(
        &mut self,
        item: &CatalogItem,
        quantity: i64,
        markup: MarkupRate,
    ) -> CoreResult<&LineItem> {
        validate_quantity(quantity)
            .map_err(|_| CoreError::InvalidQuantity { requested: quantity })?;
        if !self.fits(item, quantity, markup) {
            return Err(CoreError::AmountOverflow {
                name: item.name.clone(),
                quantity,
            });
        }

        let index = self.items.len();
        self.items.push(compute_line_item(item, quantity, markup));
        Ok(&self.items[index])
    }

    /// Removes every row. Irreversible.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Rows in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Invoice totals for the current rows and the given fees.
    pub fn totals(&self, shipping_fee: Money, delivery_fee: Money) -> InvoiceTotals {
        compute_totals(&self.items, shipping_fee, delivery_fee)
    }

    pub fn state(&self) -> CartState {
        if self.items.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Returns the number of rows in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total quantity across all rows.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Whether a new row keeps every cart total within [`MAX_AMOUNT_CENTS`].
    fn fits(&self, item: &CatalogItem, quantity: i64, markup: MarkupRate) -> bool {
        let within = |cents: i64| (0..=MAX_AMOUNT_CENTS).contains(&cents);
        if !within(item.base_price.cents()) || !within(item.retail_price.cents()) {
            return false;
        }

        let unit = final_unit_price(item.base_price, markup).cents();
        let subtotal: i64 = self.items.iter().map(|l| l.line_total.cents()).sum();
        let retail_total: i64 = self.items.iter().map(|l| l.retail_total().cents()).sum();

        let new_subtotal = unit
            .checked_mul(quantity)
            .and_then(|line| subtotal.checked_add(line));
        let new_retail_total = item
            .retail_price
            .cents()
            .checked_mul(quantity)
            .and_then(|line| retail_total.checked_add(line));
        let base_total = item.base_price.cents().checked_mul(quantity);

        matches!(
            (new_subtotal, new_retail_total, base_total),
            (Some(s), Some(r), Some(_)) if within(s) && within(r)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(name: &str, retail_cents: i64, base_cents: i64) -> CatalogItem {
        CatalogItem::new(
            "Wall Cabinets",
            name,
            Money::from_cents(retail_cents),
            Money::from_cents(base_cents),
        )
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let item = test_item("W3030", 30_000, 10_000);

        let line = cart.add(&item, 2, MarkupRate::from_bps(3000)).unwrap();
        assert_eq!(line.line_total.cents(), 26_000);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.state(), CartState::NonEmpty);
    }

    #[test]
    fn test_cart_add_same_item_twice_keeps_two_rows() {
        let mut cart = Cart::new();
        let item = test_item("W3030", 30_000, 10_000);

        cart.add(&item, 1, MarkupRate::zero()).unwrap();
        cart.add(&item, 1, MarkupRate::zero()).unwrap();

        assert_eq!(cart.len(), 2);
        assert!(cart.items().iter().all(|line| line.quantity == 1));
    }

    #[test]
    fn test_cart_preserves_insertion_order() {
        let mut cart = Cart::new();
        for name in ["W0930", "W1230", "B15", "SB36"] {
            cart.add(&test_item(name, 1_000, 500), 1, MarkupRate::zero())
                .unwrap();
        }

        let names: Vec<&str> = cart.items().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["W0930", "W1230", "B15", "SB36"]);
    }

    #[test]
    fn test_cart_rows_keep_markup_from_add_time() {
        let mut cart = Cart::new();
        let item = test_item("W3030", 30_000, 10_000);

        cart.add(&item, 1, MarkupRate::from_bps(1000)).unwrap();
        cart.add(&item, 1, MarkupRate::from_bps(2000)).unwrap();

        assert_eq!(cart.items()[0].final_unit_price.cents(), 11_000);
        assert_eq!(cart.items()[1].final_unit_price.cents(), 12_000);
    }

    #[test]
    fn test_cart_rejects_invalid_quantity() {
        let mut cart = Cart::new();
        let item = test_item("W3030", 30_000, 10_000);

        let err = cart.add(&item, 0, MarkupRate::zero()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { requested: 0 }));
        assert!(cart.add(&item, -3, MarkupRate::zero()).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_accepts_large_quantity() {
        let mut cart = Cart::new();
        let item = test_item("W3030", 30_000, 10_000);

        let line = cart.add(&item, 1000, MarkupRate::zero()).unwrap();
        assert_eq!(line.line_total.cents(), 10_000_000);
        assert_eq!(cart.total_quantity(), 1000);
    }

    #[test]
    fn test_cart_has_no_row_limit() {
        let mut cart = Cart::new();
        let item = test_item("W3030", 1_000, 500);
        for _ in 0..250 {
            cart.add(&item, 1, MarkupRate::zero()).unwrap();
        }

        assert_eq!(cart.len(), 250);
        assert_eq!(cart.totals(Money::zero(), Money::zero()).subtotal.cents(), 125_000);
    }

    #[test]
    fn test_cart_rejects_unrepresentable_amount() {
        let mut cart = Cart::new();
        let item = test_item("W3030", 30_000, 10_000);

        let err = cart.add(&item, i64::MAX, MarkupRate::zero()).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));

        let huge = test_item("Vault", MAX_AMOUNT_CENTS, MAX_AMOUNT_CENTS);
        cart.add(&huge, 1, MarkupRate::zero()).unwrap();
        assert!(cart.add(&item, 1, MarkupRate::zero()).is_err());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_cart_totals() {
        let mut cart = Cart::new();
        cart.add(&test_item("W3030", 30_000, 10_000), 2, MarkupRate::from_bps(3000))
            .unwrap();

        let totals = cart.totals(Money::from_dollars(100), Money::zero());
        assert_eq!(totals.subtotal.cents(), 26_000);
        assert_eq!(totals.tax.cents(), 1_690);
        assert_eq!(totals.grand_total.cents(), 37_690);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(&test_item("W3030", 30_000, 10_000), 2, MarkupRate::zero())
            .unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart.totals(Money::zero(), Money::zero()), InvoiceTotals::default());
    }
}
