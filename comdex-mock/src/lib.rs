use async_trait::async_trait;
use chrono::{DateTime, Utc};
use comdex_core::connector::{BarHistoryProvider, InstrumentProvider, VendorConnector};
use comdex_core::types::{BarBatch, Frequency, InstrumentInfo, SecType};
use comdex_core::IndexError;

mod fixtures;

/// Mock connector for CI-safe examples. Provides deterministic data from
/// static fixtures: contract rosters and daily bar series for copper, corn
/// (including its corn-starch product group), and gold.
///
/// Special triggers for failure-path tests:
/// - looking up category `"FAIL"` returns a forced connector error;
/// - bars for symbols starting with `"BAD"` declare a malformed field set.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VendorConnector for MockConnector {
    fn name(&self) -> &'static str {
        "comdex-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_instrument_provider(&self) -> Option<&dyn InstrumentProvider> {
        Some(self as &dyn InstrumentProvider)
    }

    fn as_bar_history_provider(&self) -> Option<&dyn BarHistoryProvider> {
        Some(self as &dyn BarHistoryProvider)
    }
}

#[async_trait]
impl InstrumentProvider for MockConnector {
    async fn instruments(
        &self,
        name: &str,
        _sec_type: SecType,
    ) -> Result<Vec<InstrumentInfo>, IndexError> {
        if name == "FAIL" {
            return Err(IndexError::connector(
                "comdex-mock",
                "forced failure: instruments",
            ));
        }
        let roster = fixtures::instruments::by_category(name);
        if roster.is_empty() {
            Err(IndexError::not_found(format!("instruments for {name}")))
        } else {
            Ok(roster)
        }
    }
}

#[async_trait]
impl BarHistoryProvider for MockConnector {
    async fn bar_history(
        &self,
        symbol: &str,
        frequency: Frequency,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<BarBatch, IndexError> {
        Ok(fixtures::bars::window(symbol, frequency, start, end))
    }

    fn supported_frequencies(&self) -> &'static [Frequency] {
        Frequency::ALL
    }
}
