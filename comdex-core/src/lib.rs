//! comdex-core
//!
//! Core types, traits, and utilities shared across the comdex ecosystem.
//!
//! - `types`: common data structures (bars, batches, frequencies, time inputs).
//! - `registry`: the static commodity category registry and symbol helpers.
//! - `connector`: the `VendorConnector` trait and capability provider traits.
//! - `timeseries`: helpers to align per-contract series and compose the
//!   open-interest-weighted index.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime. The provider
//! traits in `connector` are `async_trait` interfaces intended to be driven
//! from a Tokio 1.x runtime; the orchestrator in the `comdex` crate awaits
//! them strictly sequentially.
#![warn(missing_docs)]

/// Connector capability traits and the primary `VendorConnector` interface.
pub mod connector;
/// Static category registry: native names, tickers, exchange-qualified tickers.
pub mod registry;
/// Time-series utilities for aligning series and composing the index.
pub mod timeseries;
pub mod types;

pub use comdex_types::{Capability, IndexConfig, IndexError, SkipEvent, SkipReason};
pub use connector::VendorConnector;
pub use registry::{CategorySpec, prefix_code};
pub use timeseries::align::{AlignedGroup, Observation, align_series};
pub use timeseries::compose::compose_weighted;
pub use timeseries::table::{IndexReport, IndexTable};
pub use types::*;
