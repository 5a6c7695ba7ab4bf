//! Comdex computes open-interest-weighted composite indexes for commodity
//! futures categories on top of pluggable vendor connectors.
//!
//! Overview
//! - Resolves user keywords (native name, ticker, or exchange-qualified
//!   ticker) to canonical categories from a static registry.
//! - Normalizes begin/end times, clamping end times that are in the future
//!   or within the vendor's 30-minute open-interest maturity margin.
//! - Enumerates each category's contracts through the connector, fetches
//!   close/open-interest bars in 60-day sub-windows, and concatenates them
//!   per contract.
//! - Aligns every contract of a product group on one timestamp axis, weights
//!   closes by open-interest share, and merges the per-group composites into
//!   one table: columns sorted, gaps forward-filled, values rounded to two
//!   decimals, and the immature tail trimmed.
//!
//! Key behaviors and trade-offs
//! - All connector calls are awaited sequentially; a run issues one request
//!   at a time and keeps no state between runs.
//! - Vendor batches with an unexpected field shape are dropped, not
//!   surfaced: they ride along in the report's `skipped` list so callers and
//!   tests can observe them.
//! - Empty sub-window fetches are normal (contracts have unlisted periods)
//!   and skipped silently.
//! - Corn keywords are special: the vendor's corn lookup also returns corn
//!   starch contracts, so both composites are computed and the one that was
//!   not requested is dropped from the final table.
//!
//! Examples
//! Building an orchestrator and requesting an index:
//! ```rust,ignore
//! use std::sync::Arc;
//! use comdex::Comdex;
//! use comdex_core::Frequency;
//!
//! let comdex = Comdex::builder()
//!     .with_connector(Arc::new(connector))
//!     .build()?;
//!
//! let report = comdex
//!     .index()
//!     .keywords(["铜", "SHFE.AU"])
//!     .frequency(Frequency::D1)
//!     .begin("2023-01-01")
//!     .end("2023-06-30")
//!     .run()
//!     .await?;
//!
//! for (ts, row) in report.table.rows() {
//!     // one composite value per requested category
//! }
//! ```
//!
//! See `comdex/examples/` for runnable end-to-end demonstrations against the
//! mock connector.
#![warn(missing_docs)]

pub(crate) mod core;
mod index;

pub use core::{Comdex, ComdexBuilder};
pub use index::IndexBuilder;

// Re-export core types for convenience
pub use comdex_core::{
    // Foundational types
    Bar,
    BarBatch,
    BarField,
    Capability,
    CategorySpec,
    Exchange,
    Frequency,
    IndexConfig,
    IndexError,
    IndexReport,
    IndexTable,
    InstrumentInfo,
    SecType,
    SkipEvent,
    SkipReason,
    TimeInput,

    VendorConnector,
};
