//! Common data structures shared by the orchestrator and connectors.

use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use comdex_types::IndexError;
use serde::{Deserialize, Serialize};

/// Chinese commodity futures exchanges covered by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Exchange {
    /// Shanghai Futures Exchange.
    Shfe,
    /// Dalian Commodity Exchange.
    Dce,
    /// Zhengzhou Commodity Exchange.
    Czce,
}

impl Exchange {
    /// Vendor abbreviation used in exchange-qualified tickers ("SHFE.CU").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Shfe => "SHFE",
            Self::Dce => "DCE",
            Self::Czce => "CZCE",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Instrument type filter for vendor lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SecType {
    /// Futures contracts.
    Future,
}

impl SecType {
    /// Numeric code the vendor API uses for this instrument type.
    #[must_use]
    pub const fn vendor_code(self) -> u8 {
        match self {
            Self::Future => 4,
        }
    }
}

/// Bar frequencies the vendor bar-history endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Frequency {
    /// Daily bars.
    #[default]
    D1,
    /// Hourly bars.
    S3600,
    /// 30-minute bars.
    S1800,
    /// 15-minute bars.
    S900,
    /// 5-minute bars.
    S300,
    /// 1-minute bars.
    S60,
}

impl Frequency {
    /// Every frequency the vendor supports, in coarse-to-fine order.
    pub const ALL: &'static [Self] = &[
        Self::D1,
        Self::S3600,
        Self::S1800,
        Self::S900,
        Self::S300,
        Self::S60,
    ];

    /// Vendor wire form of this frequency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::S3600 => "3600s",
            Self::S1800 => "1800s",
            Self::S900 => "900s",
            Self::S300 => "300s",
            Self::S60 => "60s",
        }
    }

    /// Whether raw bars at this frequency carry the bar-start timestamp and
    /// frequency label columns that normalization must discard. The vendor
    /// includes them for every frequency except daily and one-minute bars.
    #[must_use]
    pub const fn carries_window_fields(self) -> bool {
        !matches!(self, Self::D1 | Self::S60)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| IndexError::invalid_arg(format!("unsupported frequency '{s}'")))
    }
}

/// Begin/end time argument: formatted text or an already-structured timestamp.
///
/// Text accepts `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS`; which form a value
/// takes is decided by the caller at construction, not by runtime type
/// inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    /// A formatted date or date-time string, parsed at resolution time.
    Text(String),
    /// A structured timestamp, used as-is.
    Timestamp(DateTime<Utc>),
}

impl From<&str> for TimeInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<DateTime<Utc>> for TimeInput {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

/// One tradable futures contract returned by the instrument lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentInfo {
    /// Contract symbol, e.g. "CU2401".
    pub symbol: String,
    /// Vendor product grouping field; one nominal category can span several
    /// product groups (corn lookups also return corn starch contracts).
    pub product: String,
    /// First trading day of the contract.
    pub listed_date: DateTime<Utc>,
    /// Last trading day of the contract.
    pub delisted_date: DateTime<Utc>,
}

/// One normalized bar observation for a contract.
///
/// Close and open interest are nullable: the vendor marks session gaps as
/// missing rather than omitting the row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar-end timestamp.
    pub eob: DateTime<Utc>,
    /// Closing price, if the contract traded.
    pub close: Option<f64>,
    /// Outstanding contract count.
    pub open_interest: Option<f64>,
}

impl Bar {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(eob: DateTime<Utc>, close: Option<f64>, open_interest: Option<f64>) -> Self {
        Self {
            eob,
            close,
            open_interest,
        }
    }
}

/// Columns a raw vendor bar batch may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BarField {
    /// Bar-end timestamp.
    Eob,
    /// Closing price.
    Close,
    /// Open interest ("position" on the wire).
    OpenInterest,
    /// Bar-start timestamp; bookkeeping only, discarded by normalization.
    Bob,
    /// Frequency label; bookkeeping only, discarded by normalization.
    FrequencyLabel,
}

impl BarField {
    /// Wire name of the column, for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eob => "eob",
            Self::Close => "close",
            Self::OpenInterest => "position",
            Self::Bob => "bob",
            Self::FrequencyLabel => "frequency",
        }
    }
}

/// Raw result of one bar-history call, with the field set the vendor declared.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarBatch {
    /// Columns the vendor declared for this batch.
    pub fields: Vec<BarField>,
    /// Rows, in vendor order.
    pub bars: Vec<Bar>,
}

impl BarBatch {
    /// A batch declaring the expected eob/close/open-interest triple.
    #[must_use]
    pub fn with_bars(bars: Vec<Bar>) -> Self {
        Self {
            fields: vec![BarField::Eob, BarField::Close, BarField::OpenInterest],
            bars,
        }
    }

    /// Whether the batch carries no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Discard the window bookkeeping columns and validate the remaining
    /// shape.
    ///
    /// Returns the rows when exactly the eob/close/open-interest triple
    /// remains; otherwise returns the leftover field set so the caller can
    /// record a skip diagnostic.
    ///
    /// # Errors
    /// Returns `Err(fields)` when the normalized field set is not the
    /// expected triple.
    pub fn normalize(mut self) -> Result<Vec<Bar>, Vec<BarField>> {
        self.fields
            .retain(|f| !matches!(f, BarField::Bob | BarField::FrequencyLabel));
        let expected = [BarField::Eob, BarField::Close, BarField::OpenInterest];
        let well_formed =
            self.fields.len() == expected.len() && expected.iter().all(|f| self.fields.contains(f));
        if well_formed {
            Ok(self.bars)
        } else {
            Err(self.fields)
        }
    }
}
