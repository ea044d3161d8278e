//! # Session
//!
//! Owns the cart for one invocation. Pricing settings are fixed when the
//! session is created, so every row in the cart was priced the same way.

use cabinet_catalog::CatalogLoader;
use cabinet_core::{Cart, Catalog, InvoiceTotals, LineItem, Money, PricingMode};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::CliResult;
use crate::state::OrderLine;

#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    mode: PricingMode,
    shipping_fee: Money,
    delivery_fee: Money,
}

impl Session {
    pub fn new(catalog: Catalog, mode: PricingMode, shipping_fee: Money, delivery_fee: Money) -> Self {
        Session {
            catalog,
            cart: Cart::new(),
            mode,
            shipping_fee,
            delivery_fee,
        }
    }

    /// Validates the pricing settings, then loads the configured catalog.
    pub fn from_config(config: &AppConfig) -> CliResult<Self> {
        let mode = config.pricing_mode()?;
        let shipping_fee = config.shipping_fee()?;
        let delivery_fee = config.delivery_fee()?;

        let catalog = CatalogLoader::new(mode).load_path(&config.catalog)?;
        info!(
            items = catalog.len(),
            types = catalog.types().len(),
            mode = ?mode,
            "Session ready"
        );

        Ok(Session::new(catalog, mode, shipping_fee, delivery_fee))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn mode(&self) -> PricingMode {
        self.mode
    }

    pub fn shipping_fee(&self) -> Money {
        self.shipping_fee
    }

    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// Looks up a catalog item and appends it to the cart.
    pub fn add(&mut self, item_type: &str, name: &str, quantity: i64) -> CliResult<&LineItem> {
        let item = self.catalog.find(item_type, name)?;
        let line = self.cart.add(item, quantity, self.mode.markup())?;
        debug!(
            item_type = %line.item_type,
            name = %line.name,
            quantity = line.quantity,
            line_total = %line.line_total,
            "Added to cart"
        );
        Ok(line)
    }

    /// Adds every order line in order, stopping at the first failure.
    pub fn add_orders(&mut self, orders: &[OrderLine]) -> CliResult<()> {
        for order in orders {
            self.add(&order.item_type, &order.name, order.quantity)?;
        }
        Ok(())
    }

    /// Parses and adds `--item` arguments.
    pub fn add_order_specs<I, S>(&mut self, specs: I) -> CliResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let orders = specs
            .into_iter()
            .map(|spec| spec.as_ref().parse::<OrderLine>())
            .collect::<CliResult<Vec<_>>>()?;
        self.add_orders(&orders)
    }

    /// Totals for the cart with this session's fees.
    pub fn totals(&self) -> InvoiceTotals {
        self.cart.totals(self.shipping_fee, self.delivery_fee)
    }
}
