//! # Commands
//!
//! One module per subcommand. Each takes the [`Session`](crate::state::Session)
//! plus a writer for its output, so tests can capture what a user would see.
//!
//! ```text
//! cabinet catalog [--type T]          ──► catalog::run
//! cabinet quote   --item ... [--json] ──► quote::run
//! cabinet invoice --item ... --out F  ──► invoice::run
//! ```

pub mod catalog;
pub mod invoice;
pub mod quote;
