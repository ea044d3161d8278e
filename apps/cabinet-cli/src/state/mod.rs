//! # Session State
//!
//! One CLI invocation owns one [`Session`]: the loaded catalog, the cart
//! being built and the pricing settings that apply to it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Session                                        │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────────┐  │
//! │  │   Catalog    │  │     Cart     │  │   Settings                   │  │
//! │  │  (read-only) │  │  (appends)   │  │  PricingMode, shipping,      │  │
//! │  │              │  │              │  │  delivery                    │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────────────────┘  │
//! │                                                                         │
//! │  --item "TYPE|ITEM|QTY" ──► OrderLine ──► Catalog::find ──► Cart::add   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod order;
mod session;

pub use order::OrderLine;
pub use session::Session;
