//! Structured diagnostics for data the fetcher dropped without failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a fetched batch was dropped instead of entering a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkipReason {
    /// The batch declared a field set other than the expected
    /// eob/close/open-interest triple after normalization.
    MalformedFields(Vec<String>),
}

/// One dropped batch: which contract, which sub-window, and why.
///
/// Skips are never surfaced as errors; they ride along in the report so
/// callers (and tests) can observe them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipEvent {
    /// Contract symbol the batch was fetched for.
    pub symbol: String,
    /// Sub-window start.
    pub start: DateTime<Utc>,
    /// Sub-window end.
    pub end: DateTime<Utc>,
    /// Why the batch was dropped.
    pub reason: SkipReason,
}
