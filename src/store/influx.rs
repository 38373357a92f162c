//! InfluxDB writer for index points

use super::IndexSink;
use crate::index::{IndexPoint, MEASUREMENT};
use anyhow::Context;
use async_trait::async_trait;
use influxdb::{Client, Timestamp, WriteQuery};
use rust_decimal::prelude::ToPrimitive;

/// Database that index points are written to
pub const DATABASE: &str = "bitmex";

/// Default InfluxDB HTTP port
const DEFAULT_PORT: u16 = 8086;

/// Configuration for the InfluxDB writer
#[derive(Debug, Clone)]
pub struct InfluxConfig {
    /// InfluxDB hostname
    pub host: String,
    /// InfluxDB HTTP port
    pub port: u16,
    /// Target database
    pub database: String,
}

impl InfluxConfig {
    /// Configuration for `host` with the default port and database
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            database: DATABASE.to_string(),
        }
    }
}

/// Writer that records index points to InfluxDB
pub struct InfluxWriter {
    config: InfluxConfig,
    client: Client,
}

impl InfluxWriter {
    /// Create a writer for the given host with the default port and database
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_config(InfluxConfig::new(host))
    }

    /// Create a writer with custom configuration
    pub fn with_config(config: InfluxConfig) -> Self {
        let url = format!("http://{}:{}", config.host, config.port);
        let client = Client::new(url, config.database.as_str());

        Self { config, client }
    }
}

#[async_trait]
impl IndexSink for InfluxWriter {
    async fn write_points(&self, points: &[IndexPoint]) -> anyhow::Result<()> {
        tracing::info!(
            database = %self.config.database,
            point_count = points.len(),
            "Write points: {:?}",
            points
        );

        if points.is_empty() {
            tracing::debug!("No points to write");
            return Ok(());
        }

        let queries: Vec<WriteQuery> = points.iter().map(to_write_query).collect();

        self.client
            .query(queries)
            .await
            .context("InfluxDB write failed")?;

        Ok(())
    }
}

/// Build the line-protocol write query for one point
fn to_write_query(point: &IndexPoint) -> WriteQuery {
    let timestamp = Timestamp::Milliseconds(point.time.timestamp_millis() as u128);

    WriteQuery::new(timestamp, MEASUREMENT)
        .add_tag("symbol", point.symbol.clone())
        .add_field("value", point.value.to_f64().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use influxdb::Query;
    use rust_decimal_macros::dec;

    #[test]
    fn test_influx_config_defaults() {
        let config = InfluxConfig::new("influxdb.local");
        assert_eq!(config.host, "influxdb.local");
        assert_eq!(config.port, 8086);
        assert_eq!(config.database, DATABASE);
    }

    #[test]
    fn test_influx_config_custom() {
        let config = InfluxConfig {
            host: "influxdb.example.com".to_string(),
            port: 9999,
            database: "testdb".to_string(),
        };

        let writer = InfluxWriter::with_config(config);
        assert_eq!(writer.config.port, 9999);
        assert_eq!(writer.config.database, "testdb");
    }

    #[test]
    fn test_write_query_shape() {
        let point = IndexPoint {
            time: Utc.timestamp_opt(1_704_067_200, 0).unwrap(),
            symbol: ".BXBT".to_string(),
            value: dec!(42500.5),
        };

        let line = to_write_query(&point).build().unwrap().get();
        assert!(line.starts_with(MEASUREMENT));
        assert!(line.contains("symbol=.BXBT"));
        assert!(line.contains("value=42500.5"));
        assert!(line.contains("1704067200000"));
    }
}
