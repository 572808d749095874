//! Sample ledger data.
//!
//! The plugin has no backend; the order ledger is produced by a seeded generator
//! so the same configuration always shows the same transactions.

pub mod generator;

pub use generator::{generate_transactions, DEFAULT_RECORD_COUNT, DEFAULT_SEED};
