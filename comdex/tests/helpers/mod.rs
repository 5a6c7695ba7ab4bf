#![allow(dead_code)]

pub mod mock_connector;

use chrono::{DateTime, Duration, Utc};
use comdex_core::types::{Bar, BarBatch, InstrumentInfo};

pub use mock_connector::MockConnector;

/// A timestamp `days` whole days before now; old enough that the freshness
/// trim never interferes with historical fixtures.
pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

pub fn instrument(symbol: &str, product: &str, listed: DateTime<Utc>, delisted: DateTime<Utc>) -> InstrumentInfo {
    InstrumentInfo {
        symbol: symbol.to_string(),
        product: product.to_string(),
        listed_date: listed,
        delisted_date: delisted,
    }
}

/// Bars at the given timestamps with uniform close/open-interest values.
pub fn flat_bars(times: &[DateTime<Utc>], close: f64, oi: f64) -> Vec<Bar> {
    times
        .iter()
        .map(|&t| Bar::new(t, Some(close), Some(oi)))
        .collect()
}

pub fn batch(bars: Vec<Bar>) -> BarBatch {
    BarBatch::with_bars(bars)
}
