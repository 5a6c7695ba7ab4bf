use async_trait::async_trait;
use chrono::{DateTime, Utc};
use comdex_core::connector::{BarHistoryProvider, InstrumentProvider, VendorConnector};
use comdex_core::types::{Bar, BarBatch, Frequency, InstrumentInfo, SecType};
use comdex_core::IndexError;

struct BarsOnly;

#[async_trait]
impl BarHistoryProvider for BarsOnly {
    async fn bar_history(
        &self,
        _symbol: &str,
        _frequency: Frequency,
        start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<BarBatch, IndexError> {
        Ok(BarBatch::with_bars(vec![Bar::new(
            start,
            Some(1.0),
            Some(1.0),
        )]))
    }

    fn supported_frequencies(&self) -> &'static [Frequency] {
        Frequency::ALL
    }
}

impl VendorConnector for BarsOnly {
    fn name(&self) -> &'static str {
        "bars-only"
    }

    fn as_bar_history_provider(&self) -> Option<&dyn BarHistoryProvider> {
        Some(self as &dyn BarHistoryProvider)
    }
}

#[test]
fn unimplemented_capabilities_default_to_none() {
    let c = BarsOnly;
    assert!(c.as_instrument_provider().is_none());
    assert!(c.as_bar_history_provider().is_some());
    assert_eq!(c.vendor(), "unknown");
}

#[test]
fn advertised_capability_is_callable() {
    let c = BarsOnly;
    let provider = c.as_bar_history_provider().unwrap();
    let now = Utc::now();
    let batch = tokio_test::block_on(provider.bar_history("CU2401", Frequency::D1, now, now))
        .unwrap();
    assert_eq!(batch.bars.len(), 1);
}

struct Lookup;

#[async_trait]
impl InstrumentProvider for Lookup {
    async fn instruments(
        &self,
        name: &str,
        _sec_type: SecType,
    ) -> Result<Vec<InstrumentInfo>, IndexError> {
        Err(IndexError::not_found(format!("instruments for {name}")))
    }
}

impl VendorConnector for Lookup {
    fn name(&self) -> &'static str {
        "lookup-only"
    }

    fn as_instrument_provider(&self) -> Option<&dyn InstrumentProvider> {
        Some(self as &dyn InstrumentProvider)
    }
}

#[test]
fn instrument_lookup_errors_pass_through() {
    let c = Lookup;
    let provider = c.as_instrument_provider().unwrap();
    let err = tokio_test::block_on(provider.instruments("铜", SecType::Future)).unwrap_err();
    assert!(matches!(err, IndexError::NotFound { .. }));
}
