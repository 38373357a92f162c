//! Exchange trade types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single executed trade fetched from the exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Index symbol (e.g., ".BXBT")
    pub symbol: String,
    /// Trade price; carries the composite index value for index symbols
    pub price: Decimal,
    /// Execution timestamp
    pub timestamp: DateTime<Utc>,
}
