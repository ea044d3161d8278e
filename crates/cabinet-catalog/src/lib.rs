//! # cabinet-catalog: Catalog Source
//!
//! Turns the store's price spreadsheet into a [`cabinet_core::Catalog`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Loading Flow                                │
//! │                                                                         │
//! │  cabinets_price.xlsx (first worksheet) or a CSV export of it            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                cabinet-catalog (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   header check ──► row parse ──► type normalize ──► CatalogItem │   │
//! │  │   (loader.rs)      (loader.rs)   (normalize.rs)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cabinet_core::Catalog (immutable for the session)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Expected Columns
//!
//! | Column | Meaning |
//! |--------|---------|
//! | `TYPES` | cabinet type, any case, stray spaces allowed |
//! | `ITEM` | item name |
//! | `ORIGINAL PRICE` | retail price |
//! | `FINAL PRICE` | discounted price (flat discount sheets) |
//! | `PRICE WITH DISCOUNT` | base price before markup (markup sheets) |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cabinet_catalog::CatalogLoader;
//! use cabinet_core::PricingMode;
//!
//! let catalog = CatalogLoader::new(PricingMode::FlatDiscount)
//!     .load_path("cabinets_price.xlsx")
//!     .unwrap();
//! println!("{} items", catalog.len());
//! ```

pub mod error;
pub mod loader;
pub mod normalize;

pub use error::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;
pub use normalize::{display_type, normalize_type, title_case};

/// Column holding the cabinet type.
pub const TYPE_COLUMN: &str = "TYPES";

/// Column holding the item name.
pub const ITEM_COLUMN: &str = "ITEM";

/// Column holding the retail (undiscounted) price.
pub const RETAIL_COLUMN: &str = "ORIGINAL PRICE";
