//! Domain layer for the orderdeck plugin.
//!
//! Core types that do not depend on Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`transaction`]: Order transaction model shown in the ledger
//!
//! # Examples
//!
//! ```
//! use orderdeck::domain::{Transaction, TransactionStatus};
//! use orderdeck::virtual_list::Record;
//!
//! let trx = Transaction::new("TRX-10000", "Camera - #1", "user_0", 12_000, TransactionStatus::Completed);
//! assert_eq!(trx.key(), "TRX-10000");
//! ```

pub mod error;
pub mod transaction;

pub use error::{OrderdeckError, Result};
pub use transaction::{group_thousands, Transaction, TransactionStatus};
