use chrono::Utc;
use comdex_core::timeseries::align::align_series;
use comdex_core::timeseries::compose::compose_weighted;
use comdex_core::{Frequency, IndexError, IndexReport, IndexTable, TimeInput};

use crate::Comdex;

use super::{compose, fetch, resolve, window};

/// Builder to orchestrate one composite index computation.
pub struct IndexBuilder<'a> {
    comdex: &'a Comdex,
    keywords: Option<Vec<String>>,
    frequency: Frequency,
    begin: Option<TimeInput>,
    end: Option<TimeInput>,
}

impl<'a> IndexBuilder<'a> {
    /// Create a new builder bound to a `Comdex` instance.
    ///
    /// Behavior:
    /// - Starts with no keyword filter (every known category), daily bars,
    ///   and unset begin/end bounds.
    /// - Defers all validation to `run()`, so malformed keywords or time
    ///   strings fail there, before any connector call.
    #[must_use]
    pub const fn new(comdex: &'a Comdex) -> Self {
        Self {
            comdex,
            keywords: None,
            frequency: Frequency::D1,
            begin: None,
            end: None,
        }
    }

    /// Replace the keyword filter.
    ///
    /// Keywords may be native names, tickers, or exchange-qualified tickers,
    /// matched case-insensitively. Duplicates (including different aliases of
    /// one category) collapse; ordering is not preserved.
    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Add a single keyword to the filter.
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords
            .get_or_insert_with(Vec::new)
            .push(keyword.into());
        self
    }

    /// Select the bar frequency. Defaults to daily.
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the begin bound.
    ///
    /// Behavior: when unset, each contract's own listing date is used, so the
    /// index reaches back to the earliest listed contract of the category.
    #[must_use]
    pub fn begin(mut self, begin: impl Into<TimeInput>) -> Self {
        self.begin = Some(begin.into());
        self
    }

    /// Set the end bound.
    ///
    /// Behavior: when unset, each contract's own delisting date is used. An
    /// explicit end in the future, or within 30 minutes of now, is clamped
    /// back over the vendor's open-interest maturity margin.
    #[must_use]
    pub fn end(mut self, end: impl Into<TimeInput>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Execute the pipeline and return the composed table.
    ///
    /// Behavior and trade-offs:
    /// - Validates keywords and time bounds first; `InvalidArg` errors name
    ///   the offending value and fire before any connector call.
    /// - Fetches sequentially: one category, one contract, one sub-window at
    ///   a time. Batches the vendor returned ill-shaped are dropped and
    ///   reported in [`IndexReport::skipped`], never surfaced as errors.
    /// - The finished table has lexicographically sorted columns,
    ///   forward-filled gaps, 2-decimal values, and no rows younger than the
    ///   freshness margin.
    ///
    /// # Errors
    /// Returns `InvalidArg` for unknown keywords or malformed time strings,
    /// `Unsupported`/`NotFound`/`Connector` for connector-level failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "comdex::index::run",
            skip(self),
            fields(frequency = %self.frequency),
        )
    )]
    pub async fn run(self) -> Result<IndexReport, IndexError> {
        let now = Utc::now();
        let resolved = resolve::resolve_categories(self.keywords.as_deref())?;
        let bounds = window::resolve_window(self.begin.as_ref(), self.end.as_ref(), now)?;

        let mut table = IndexTable::new();
        let mut skipped = Vec::new();
        for category in &resolved.categories {
            let (groups, skips) = fetch::fetch_category(
                self.comdex.connector.as_ref(),
                category,
                self.frequency,
                bounds,
                &self.comdex.cfg,
            )
            .await?;
            skipped.extend(skips);
            for group in groups {
                let aligned = align_series(&group.series);
                table.insert_column(group.code, compose_weighted(&aligned));
            }
        }

        compose::finish(&mut table, &resolved, now, &self.comdex.cfg);
        Ok(IndexReport { table, skipped })
    }
}

impl Comdex {
    /// Begin building an index request.
    ///
    /// Typical usage: chain `keywords`/`frequency`/`begin`/`end` then call
    /// `run()`.
    #[must_use]
    pub const fn index(&'_ self) -> IndexBuilder<'_> {
        IndexBuilder::new(self)
    }
}
