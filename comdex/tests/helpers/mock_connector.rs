#![allow(clippy::type_complexity)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use comdex_core::connector::{BarHistoryProvider, InstrumentProvider, VendorConnector};
use comdex_core::types::{BarBatch, Frequency, InstrumentInfo, SecType};
use comdex_core::IndexError;

/// Simple in-memory connector used by integration tests.
/// Tailor behavior per test via the closure fields below; a capability is
/// advertised only when its closure is set.
pub struct MockConnector {
    pub name: &'static str,
    pub frequencies: &'static [Frequency],

    pub instruments_fn:
        Option<Arc<dyn Fn(&str, SecType) -> Result<Vec<InstrumentInfo>, IndexError> + Send + Sync>>,
    pub bar_history_fn: Option<
        Arc<
            dyn Fn(&str, Frequency, DateTime<Utc>, DateTime<Utc>) -> Result<BarBatch, IndexError>
                + Send
                + Sync,
        >,
    >,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "test-mock",
            frequencies: Frequency::ALL,
            instruments_fn: None,
            bar_history_fn: None,
        }
    }
}

impl MockConnector {
    pub fn with_instruments(
        mut self,
        f: impl Fn(&str, SecType) -> Result<Vec<InstrumentInfo>, IndexError> + Send + Sync + 'static,
    ) -> Self {
        self.instruments_fn = Some(Arc::new(f));
        self
    }

    pub fn with_bar_history(
        mut self,
        f: impl Fn(&str, Frequency, DateTime<Utc>, DateTime<Utc>) -> Result<BarBatch, IndexError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.bar_history_fn = Some(Arc::new(f));
        self
    }
}

impl VendorConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_instrument_provider(&self) -> Option<&dyn InstrumentProvider> {
        self.instruments_fn
            .as_ref()
            .map(|_| self as &dyn InstrumentProvider)
    }

    fn as_bar_history_provider(&self) -> Option<&dyn BarHistoryProvider> {
        self.bar_history_fn
            .as_ref()
            .map(|_| self as &dyn BarHistoryProvider)
    }
}

#[async_trait]
impl InstrumentProvider for MockConnector {
    async fn instruments(
        &self,
        name: &str,
        sec_type: SecType,
    ) -> Result<Vec<InstrumentInfo>, IndexError> {
        match &self.instruments_fn {
            Some(f) => f(name, sec_type),
            None => Err(IndexError::unsupported("instruments")),
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
        match &self.bar_history_fn {
            Some(f) => f(symbol, frequency, start, end),
            None => Err(IndexError::unsupported("bar-history")),
        }
    }

    fn supported_frequencies(&self) -> &'static [Frequency] {
        self.frequencies
    }
}
