//! The fetch, transform, write pipeline
//!
//! One straight-line pass per invocation: fetch recent trades for the
//! index symbol, map them into points, write the batch. Any failure
//! propagates and fails the whole run.

use crate::exchange::TradeSource;
use crate::index;
use crate::store::IndexSink;
use anyhow::Context;
use chrono::{Duration, Utc};

/// Run the pipeline once for `symbol`, fetching up to `count` trades from
/// the past `count` minutes and writing them to `sink` as index points.
pub async fn run<S, W>(source: &S, sink: &W, symbol: &str, count: u32) -> anyhow::Result<()>
where
    S: TradeSource,
    W: IndexSink,
{
    let start_time = Utc::now() - Duration::minutes(i64::from(count));

    tracing::info!(symbol = %symbol, lookback_minutes = count, "Fetching recent index trades");
    let trades = source
        .recent_trades(symbol, start_time, count)
        .await
        .context("Failed to fetch trades")?;

    let points = index::to_points(trades);

    tracing::info!(point_count = points.len(), "Writing index points");
    sink.write_points(&points)
        .await
        .context("Failed to write the index")?;

    tracing::info!("Done");

    Ok(())
}
