//! The four-stage index pipeline: resolve keywords, resolve the time window,
//! fetch per-contract series, compose the weighted table.

mod builder;
mod compose;
mod fetch;
mod resolve;
mod window;

pub use builder::IndexBuilder;
