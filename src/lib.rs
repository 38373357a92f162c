//! bitmex-index: records BitMEX index prices to InfluxDB
//!
//! This library provides the components for:
//! - Fetching recent index trades from the BitMEX REST API
//! - Transforming trades into time-series index points
//! - Writing point batches to InfluxDB
//! - Configuration resolution (arguments with environment fallback)
//! - Structured logging

pub mod cli;
pub mod config;
pub mod exchange;
pub mod index;
pub mod pipeline;
pub mod store;
pub mod telemetry;
