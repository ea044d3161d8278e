//! # Catalog
//!
//! The priced item list, loaded once per session and never modified.
//!
//! Loading and normalizing the spreadsheet belongs to `cabinet-catalog`; this
//! module only answers lookups over already validated rows. Type matching is
//! case-insensitive so "base cabinets" and "Base Cabinets" select the same
//! group.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::CatalogItem;

/// Immutable, ordered list of catalog items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Catalog { items }
    }

    /// All items, in sheet order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct type labels in the order they first appear.
    ///
    /// ## Example
    /// ```rust
    /// use cabinet_core::{Catalog, CatalogItem, Money};
    ///
    /// let catalog = Catalog::new(vec![
    ///     CatalogItem::new("Wall", "W1", Money::zero(), Money::zero()),
    ///     CatalogItem::new("Base", "B1", Money::zero(), Money::zero()),
    ///     CatalogItem::new("Wall", "W2", Money::zero(), Money::zero()),
    /// ]);
    /// assert_eq!(catalog.types(), vec!["Wall", "Base"]);
    /// ```
    pub fn types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.iter().any(|t| t.eq_ignore_ascii_case(&item.item_type)) {
                seen.push(&item.item_type);
            }
        }
        seen
    }

    /// Items of one type, in sheet order.
    pub fn items_of_type<'a>(&'a self, item_type: &str) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        let wanted = item_type.trim().to_string();
        self.items
            .iter()
            .filter(move |item| item.item_type.eq_ignore_ascii_case(&wanted))
    }

    /// First item matching type and name.
    ///
    /// ## Returns
    /// - `Err(CoreError::ItemNotFound)` when nothing matches
    pub fn find(&self, item_type: &str, name: &str) -> CoreResult<&CatalogItem> {
        let wanted_name = name.trim();
        self.items_of_type(item_type)
            .find(|item| item.name.trim() == wanted_name)
            .ok_or_else(|| CoreError::ItemNotFound {
                item_type: item_type.trim().to_string(),
                name: wanted_name.to_string(),
            })
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn sample() -> Catalog {
        vec![
            CatalogItem::new("Wall Cabinets", "W3030", Money::from_cents(30_000), Money::from_cents(15_000)),
            CatalogItem::new("Base Cabinets", "B12", Money::from_cents(25_000), Money::from_cents(12_500)),
            CatalogItem::new("Wall Cabinets", "W1230", Money::from_cents(18_000), Money::from_cents(9_000)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_types_are_distinct_and_ordered() {
        assert_eq!(sample().types(), vec!["Wall Cabinets", "Base Cabinets"]);
    }

    #[test]
    fn test_items_of_type_is_case_insensitive() {
        let catalog = sample();
        let names: Vec<&str> = catalog
            .items_of_type("wall cabinets")
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["W3030", "W1230"]);
    }

    #[test]
    fn test_find() {
        let catalog = sample();
        let item = catalog.find("Base Cabinets", " B12 ").unwrap();
        assert_eq!(item.base_price.cents(), 12_500);

        let err = catalog.find("Base Cabinets", "W3030").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound { .. }));
    }

    #[test]
    fn test_found_item_outlives_query() {
        let catalog = sample();
        let item = {
            let query = String::from("  WALL CABINETS ");
            catalog.find(&query, "W1230").unwrap()
        };
        assert_eq!(item.name, "W1230");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.types().is_empty());
        assert!(catalog.find("Wall Cabinets", "W3030").is_err());
    }
}
