use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::align::AlignedGroup;

/// Compose the open-interest-weighted close composite for one product group.
///
/// Per timestamp:
/// - the weight denominator is the sum of the *non-missing* open-interest
///   values; contracts with missing open interest are excluded from it
///   entirely rather than counted as zero;
/// - each contract contributes `close × (open_interest / denominator)`;
/// - a missing close contributes 0 while its open interest stays in the
///   denominator, so sparse closes pull the composite down rather than
///   re-normalizing the remaining weights.
///
/// A timestamp whose denominator is not positive (all open interest zero)
/// yields a missing value; the table's forward-fill covers it like any other
/// gap.
#[must_use]
pub fn compose_weighted(aligned: &AlignedGroup) -> BTreeMap<DateTime<Utc>, Option<f64>> {
    aligned
        .rows
        .iter()
        .map(|(ts, row)| {
            let denominator: f64 = row.iter().filter_map(|o| o.open_interest).sum();
            if denominator > 0.0 {
                let value = row
                    .iter()
                    .map(|o| match (o.close, o.open_interest) {
                        (Some(close), Some(oi)) => close * (oi / denominator),
                        _ => 0.0,
                    })
                    .sum();
                (*ts, Some(value))
            } else {
                (*ts, None)
            }
        })
        .collect()
}
