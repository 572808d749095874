//! Deterministic order ledger generator.
//!
//! Transactions follow a fixed pattern (ids count down from `TRX-10000`, item
//! names and statuses cycle) with prices drawn from a seeded PCG stream.

use crate::domain::transaction::{reference_date, Transaction, TransactionStatus};
use chrono::Days;
use rand::{Rng, SeedableRng};

/// Number of transactions shown when not configured.
pub const DEFAULT_RECORD_COUNT: usize = 5000;

/// Price seed used when not configured.
pub const DEFAULT_SEED: u64 = 2024;

const ITEM_KINDS: [&str; 5] = ["Camera", "Scarf", "Boots", "Lens", "Watch"];

/// Lowest transaction number; ids are `TRX-{base - i}`.
const ID_BASE: usize = 10_000;

/// Transactions sharing one sale date before the date steps back a day.
const TRANSACTIONS_PER_DAY: usize = 250;

/// Generates `count` transactions, newest first.
///
/// # Example
///
/// ```rust
/// use orderdeck::data::generate_transactions;
///
/// let ledger = generate_transactions(3, 7);
/// assert_eq!(ledger[0].id, "TRX-10000");
/// assert_eq!(ledger[2].item_name, "Boots - #3");
/// assert_eq!(ledger, generate_transactions(3, 7));
/// ```
#[must_use]
pub fn generate_transactions(count: usize, seed: u64) -> Vec<Transaction> {
    let _span = tracing::debug_span!("generate_transactions", count, seed).entered();

    let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
    let base = ID_BASE.max(count);
    let newest = reference_date();

    (0..count)
        .map(|i| {
            let price_yen = (rng.random_range(0..50_u32) + 5) * 1000;
            let date = newest
                .checked_sub_days(Days::new((i / TRANSACTIONS_PER_DAY) as u64))
                .unwrap_or(newest);

            Transaction::new(
                format!("TRX-{}", base - i),
                format!("{} - #{}", ITEM_KINDS[i % ITEM_KINDS.len()], i + 1),
                format!("user_{i}"),
                price_yen,
                TransactionStatus::ALL[i % TransactionStatus::ALL.len()],
            )
            .with_date(date)
        })
        .collect()
}
