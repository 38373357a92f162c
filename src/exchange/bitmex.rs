//! BitMEX REST client for trade history
//!
//! Fetches the most recent trades of a symbol from the public `/trade`
//! endpoint. Index symbols (`.BXBT` and friends) trade synthetically, so
//! each record carries the composite index price.

use super::{TradeRecord, TradeSource};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// BitMEX REST API base URL
pub const BITMEX_API_URL: &str = "https://www.bitmex.com/api/v1";

/// Configuration for the BitMEX client
#[derive(Debug, Clone)]
pub struct BitmexConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for BitmexConfig {
    fn default() -> Self {
        Self {
            base_url: BITMEX_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the BitMEX REST API
pub struct BitmexClient {
    config: BitmexConfig,
    client: Client,
}

impl BitmexClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(BitmexConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: BitmexConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

impl Default for BitmexClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TradeSource for BitmexClient {
    async fn recent_trades(
        &self,
        symbol: &str,
        start_time: DateTime<Utc>,
        count: u32,
    ) -> anyhow::Result<Vec<TradeRecord>> {
        let url = format!("{}/trade", self.config.base_url);
        let start = format_start_time(start_time);
        let count = count.to_string();

        tracing::debug!(url = %url, symbol = %symbol, start = %start, "Fetching trades from BitMEX");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("startTime", start.as_str()),
                ("count", count.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("BitMEX API error: {} - {}", status, body);
        }

        let body = response.text().await?;
        let trades = parse_trades(&body)?;

        tracing::debug!(trade_count = trades.len(), "Fetched trades");

        Ok(trades)
    }
}

/// Raw trade record from the `/trade` endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BitmexTrade {
    /// Execution timestamp
    timestamp: DateTime<Utc>,
    /// Symbol the trade executed on
    symbol: String,
    /// Trade price
    price: Decimal,
}

impl From<BitmexTrade> for TradeRecord {
    fn from(trade: BitmexTrade) -> Self {
        Self {
            symbol: trade.symbol,
            price: trade.price,
            timestamp: trade.timestamp,
        }
    }
}

/// Serialize a start time the way the `/trade` endpoint expects
fn format_start_time(start_time: DateTime<Utc>) -> String {
    start_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a `/trade` response body
///
/// An empty body means no trades since the start time and parses to an
/// empty list rather than an error.
fn parse_trades(body: &str) -> anyhow::Result<Vec<TradeRecord>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let trades: Vec<BitmexTrade> = serde_json::from_str(body)
        .map_err(|e| anyhow::anyhow!("Failed to parse trade response: {}", e))?;

    Ok(trades.into_iter().map(TradeRecord::from).collect())
}
