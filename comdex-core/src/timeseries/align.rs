use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::types::Bar;

/// One contract's observations at a shared timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Observation {
    /// Closing price, if present at this timestamp.
    pub close: Option<f64>,
    /// Open interest, if present at this timestamp.
    pub open_interest: Option<f64>,
}

/// Timestamp-aligned view of every contract in one product group.
///
/// Row vectors are indexed parallel to `symbols`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedGroup {
    /// Contract symbols, in input order.
    pub symbols: Vec<String>,
    /// Union of timestamps; one observation slot per contract.
    pub rows: BTreeMap<DateTime<Utc>, Vec<Observation>>,
}

/// Outer-join the series of a product group onto one timestamp axis.
///
/// - The timestamp axis is the union of every contract's bar-end timestamps.
/// - A contract without a bar at some timestamp gets an empty observation.
/// - Duplicate timestamps within one contract keep the first bar (sub-window
///   boundaries can overlap by one bar).
/// - Rows where every contract's open interest is missing are dropped: no
///   weight can be formed there.
#[must_use]
pub fn align_series(series: &BTreeMap<String, Vec<Bar>>) -> AlignedGroup {
    let symbols: Vec<String> = series.keys().cloned().collect();
    let width = symbols.len();
    let mut rows: BTreeMap<DateTime<Utc>, Vec<Observation>> = BTreeMap::new();

    for (slot, bars) in series.values().enumerate() {
        for bar in bars {
            let row = rows
                .entry(bar.eob)
                .or_insert_with(|| vec![Observation::default(); width]);
            let obs = &mut row[slot];
            if obs.close.is_none() && obs.open_interest.is_none() {
                obs.close = bar.close;
                obs.open_interest = bar.open_interest;
            }
        }
    }

    rows.retain(|_, row| row.iter().any(|o| o.open_interest.is_some()));

    AlignedGroup { symbols, rows }
}
