//! Report domain: executed transactions, read-only.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of transactions requested by `reports().list(None)`.
pub const DEFAULT_REPORT_LIMIT: u32 = 10;

/// A backend-recorded execution matching a buy and a sell order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    /// Exchange profile of the executing user (`CL`, `Regional`, ...).
    pub exchange: String,
    pub buy_order_id: String,
    pub sell_order_id: String,
    pub quantity: u64,
    pub execution_price: Decimal,
    pub total_amount: Decimal,
    pub executed_at: DateTime<Utc>,
}
