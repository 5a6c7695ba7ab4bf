//! Configuration shared by the orchestrator and connectors.

use std::time::Duration;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Global configuration for the index pipeline.
///
/// The defaults reproduce the vendor constraints the pipeline was designed
/// around: bar-history calls bound their result size, so windows are cut
/// into 60-day slices anchored at 05:00 (before the Asian day session), and
/// the vendor's most recent ~30 minutes of open-interest data are considered
/// too immature to enter an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Length of one bar-history sub-window, in days.
    pub sub_window_days: i64,
    /// Time of day intermediate sub-window boundaries are anchored to.
    pub boundary_time: NaiveTime,
    /// How old a bar must be before it may enter the index.
    pub freshness_margin: Duration,
}

impl IndexConfig {
    /// Freshness margin as a chrono duration for timestamp arithmetic.
    #[must_use]
    pub fn freshness_margin_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.freshness_margin)
            .unwrap_or_else(|_| chrono::Duration::minutes(30))
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sub_window_days: 60,
            boundary_time: NaiveTime::from_hms_opt(5, 0, 0).unwrap_or_default(),
            freshness_margin: Duration::from_secs(30 * 60),
        }
    }
}
