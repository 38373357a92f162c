//! Index point transformation
//!
//! Maps executed trades into the time-series points written to storage:
//! the trade timestamp becomes the point time, the symbol becomes a tag,
//! and the price becomes the `value` field.

use crate::exchange::TradeRecord;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Measurement name that index points are written under
pub const MEASUREMENT: &str = "index2";

/// A single time-series write unit derived from one trade
#[derive(Debug, Clone, PartialEq)]
pub struct IndexPoint {
    /// Point timestamp, taken verbatim from the trade
    pub time: DateTime<Utc>,
    /// Index symbol, stored as a tag
    pub symbol: String,
    /// Index price, stored as the `value` field
    pub value: Decimal,
}

impl From<TradeRecord> for IndexPoint {
    fn from(trade: TradeRecord) -> Self {
        Self {
            time: trade.timestamp,
            symbol: trade.symbol,
            value: trade.price,
        }
    }
}

/// Map trades into index points, one per trade, preserving order
pub fn to_points(trades: Vec<TradeRecord>) -> Vec<IndexPoint> {
    trades.into_iter().map(IndexPoint::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn trade(price: Decimal, secs: i64) -> TradeRecord {
        TradeRecord {
            symbol: ".BXBT".to_string(),
            price,
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_one_point_per_trade() {
        let trades = vec![
            trade(dec!(10000), 1_704_067_200),
            trade(dec!(10001), 1_704_067_260),
            trade(dec!(10002), 1_704_067_320),
        ];

        let points = to_points(trades);
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let points = to_points(vec![trade(dec!(42500.5), 1_704_067_200)]);

        assert_eq!(points[0].symbol, ".BXBT");
        assert_eq!(points[0].value, dec!(42500.5));
        assert_eq!(points[0].time, Utc.timestamp_opt(1_704_067_200, 0).unwrap());
    }

    #[test]
    fn test_order_preserved() {
        let trades = vec![
            trade(dec!(3), 30),
            trade(dec!(1), 10),
            trade(dec!(2), 20),
        ];

        let points = to_points(trades);
        assert_eq!(points[0].value, dec!(3));
        assert_eq!(points[1].value, dec!(1));
        assert_eq!(points[2].value, dec!(2));
    }

    #[test]
    fn test_empty_input() {
        let points = to_points(Vec::new());
        assert!(points.is_empty());
    }
}
