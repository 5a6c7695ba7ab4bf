use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::IndexError;
use crate::types::{BarBatch, Frequency, InstrumentInfo, SecType};

/// Focused role trait for connectors that can enumerate contract instruments.
#[async_trait]
pub trait InstrumentProvider: Send + Sync {
    /// List instruments whose product matches `name`, restricted to `sec_type`.
    ///
    /// The vendor matches by product name, so a lookup for a category name
    /// can return contracts from more than one product group.
    async fn instruments(
        &self,
        name: &str,
        sec_type: SecType,
    ) -> Result<Vec<InstrumentInfo>, IndexError>;
}

/// Focused role trait for connectors that serve historical bars.
#[async_trait]
pub trait BarHistoryProvider: Send + Sync {
    /// Fetch close/open-interest bars for `symbol` over `[start, end]`.
    ///
    /// Result size is bounded per call; callers are expected to slice long
    /// windows themselves. Gaps are returned as rows with missing values.
    async fn bar_history(
        &self,
        symbol: &str,
        frequency: Frequency,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<BarBatch, IndexError>;

    /// REQUIRED: exact frequencies this connector can natively serve.
    fn supported_frequencies(&self) -> &'static [Frequency];
}

/// Main connector trait implemented by vendor crates. Exposes capability discovery.
pub trait VendorConnector: Send + Sync {
    /// A stable identifier for diagnostics (e.g., "comdex-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise instrument lookup by returning a usable trait object
    /// reference when supported.
    fn as_instrument_provider(&self) -> Option<&dyn InstrumentProvider> {
        None
    }

    /// Advertise bar history by returning a usable trait object reference
    /// when supported.
    fn as_bar_history_provider(&self) -> Option<&dyn BarHistoryProvider> {
        None
    }
}
