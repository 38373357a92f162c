//! Exchange access module
//!
//! Fetches recent index trades from the BitMEX REST API

mod bitmex;
mod types;

pub use bitmex::{BitmexClient, BitmexConfig, BITMEX_API_URL};
pub use types::TradeRecord;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Trait for trade history sources
#[async_trait]
pub trait TradeSource: Send + Sync {
    /// Fetch up to `count` trades for `symbol` executed since `start_time`
    async fn recent_trades(
        &self,
        symbol: &str,
        start_time: DateTime<Utc>,
        count: u32,
    ) -> anyhow::Result<Vec<TradeRecord>>;
}
