//! Order transaction model.
//!
//! A [`Transaction`] is one row of the seller's order ledger. The ledger list is
//! keyed by transaction id and searched by item name, buyer name, and id.

use crate::virtual_list::{Record, Searchable};
use chrono::NaiveDate;
use std::fmt;

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    AwaitingShipment,
    InTransit,
    Completed,
    Dispute,
}

impl TransactionStatus {
    /// Statuses in the order the ledger generator cycles through them.
    pub const ALL: [Self; 4] = [
        Self::AwaitingShipment,
        Self::InTransit,
        Self::Completed,
        Self::Dispute,
    ];

    /// Human-readable label shown in the status column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AwaitingShipment => "Awaiting Shipment",
            Self::InTransit => "In Transit",
            Self::Completed => "Completed",
            Self::Dispute => "Dispute",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single sold item in the order ledger.
///
/// # Fields
///
/// - `id`: Unique transaction id (`TRX-10000`), used as the list key
/// - `item_name`: Listing title of the sold item
/// - `buyer_name`: Account name of the buyer
/// - `price_yen`: Sale price in whole yen
/// - `date`: Sale date
/// - `status`: Fulfilment state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub item_name: String,
    pub buyer_name: String,
    pub price_yen: u32,
    pub date: NaiveDate,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Creates a transaction dated on the ledger's reference day (Oct 24, 2024).
    ///
    /// # Examples
    ///
    /// ```
    /// use orderdeck::domain::{Transaction, TransactionStatus};
    ///
    /// let trx = Transaction::new("TRX-9999", "Lens - #2", "user_1", 7_000, TransactionStatus::InTransit);
    /// assert_eq!(trx.formatted_date(), "Oct 24, 2024");
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        item_name: impl Into<String>,
        buyer_name: impl Into<String>,
        price_yen: u32,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: id.into(),
            item_name: item_name.into(),
            buyer_name: buyer_name.into(),
            price_yen,
            date: reference_date(),
            status,
        }
    }

    /// Returns the transaction with its sale date replaced.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Formats the price with a yen sign and thousands separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use orderdeck::domain::{Transaction, TransactionStatus};
    ///
    /// let trx = Transaction::new("TRX-1", "Boots - #3", "user_2", 54_000, TransactionStatus::Completed);
    /// assert_eq!(trx.formatted_price(), "¥54,000");
    /// ```
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format!("¥{}", group_thousands(u64::from(self.price_yen)))
    }

    /// Formats the sale date as `Oct 24, 2024`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

impl Record for Transaction {
    type Key = str;

    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.item_name, &self.buyer_name, &self.id]
    }
}

/// Formats an integer with comma thousands separators (`5000` → `5,000`).
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Day the sample ledger is anchored to.
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 24).unwrap_or_default()
}
