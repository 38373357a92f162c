//! Time-series storage module
//!
//! Writes index point batches to InfluxDB

mod influx;

pub use influx::{InfluxConfig, InfluxWriter, DATABASE};

use crate::index::IndexPoint;
use async_trait::async_trait;

/// Trait for index point sinks
#[async_trait]
pub trait IndexSink: Send + Sync {
    /// Write a batch of points in a single call
    async fn write_points(&self, points: &[IndexPoint]) -> anyhow::Result<()>;
}
