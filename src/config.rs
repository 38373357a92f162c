//! Configuration for bitmex-index
//!
//! Parameters arrive as positional arguments with environment-variable
//! fallback, resolved once at startup before any network activity.

use std::env;
use thiserror::Error;

/// Environment variable name: InfluxDB hostname
pub const VAR_INFLUXDB_HOST: &str = "INFLUXDB_HOST";
/// Environment variable name: index symbol
pub const VAR_SYMBOL: &str = "SYMBOL";

/// Number of trades fetched per run; also the lookback window in minutes
pub const TRADE_COUNT: u32 = 3;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No host argument and no environment fallback
    #[error("missing InfluxDB host (pass it as the first argument or set INFLUXDB_HOST)")]
    MissingHost,
    /// No symbol argument and no environment fallback
    #[error("missing index symbol (pass it as the second argument or set SYMBOL)")]
    MissingSymbol,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// InfluxDB hostname that points are written to
    pub host: String,
    /// Index symbol to record
    pub symbol: String,
}

impl Config {
    /// Resolve configuration from explicit arguments, falling back to the
    /// process environment. An explicit argument wins over its variable.
    pub fn resolve(host: Option<String>, symbol: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve_with(host, symbol, |name| env::var(name).ok())
    }

    fn resolve_with(
        host: Option<String>,
        symbol: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = host
            .or_else(|| env(VAR_INFLUXDB_HOST))
            .ok_or(ConfigError::MissingHost)?;
        let symbol = symbol
            .or_else(|| env(VAR_SYMBOL))
            .ok_or(ConfigError::MissingSymbol)?;

        Ok(Self { host, symbol })
    }
}
