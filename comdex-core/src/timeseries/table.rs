use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use comdex_types::SkipEvent;
use serde::{Deserialize, Serialize};

/// Timestamp-indexed composite table: one column per product-group code.
///
/// Row vectors are indexed parallel to `columns`. Timestamps are kept sorted
/// by the underlying map; columns are sorted explicitly by the composer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexTable {
    columns: Vec<String>,
    rows: BTreeMap<DateTime<Utc>, Vec<Option<f64>>>,
}

impl IndexTable {
    /// An empty table with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Column labels, in current order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Timestamp-keyed rows, values parallel to [`columns`](Self::columns).
    #[must_use]
    pub const fn rows(&self) -> &BTreeMap<DateTime<Utc>, Vec<Option<f64>>> {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at `(ts, column)`, if both exist and the cell is filled.
    #[must_use]
    pub fn value(&self, ts: DateTime<Utc>, column: &str) -> Option<f64> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(&ts)?.get(idx).copied().flatten()
    }

    /// Outer-join a composite series as a new column.
    ///
    /// Existing rows gain an empty slot for the new column; timestamps the
    /// table has not seen yet gain a row padded with missing values for every
    /// earlier column.
    pub fn insert_column(
        &mut self,
        code: impl Into<String>,
        series: BTreeMap<DateTime<Utc>, Option<f64>>,
    ) {
        let width = self.columns.len();
        self.columns.push(code.into());
        for row in self.rows.values_mut() {
            row.push(None);
        }
        for (ts, value) in series {
            let row = self.rows.entry(ts).or_insert_with(|| vec![None; width + 1]);
            if let Some(cell) = row.last_mut() {
                *cell = value;
            }
        }
    }

    /// Remove a column by label. Returns whether it existed.
    pub fn drop_column(&mut self, code: &str) -> bool {
        let Some(idx) = self.columns.iter().position(|c| c == code) else {
            return false;
        };
        self.columns.remove(idx);
        for row in self.rows.values_mut() {
            row.remove(idx);
        }
        true
    }

    /// Sort columns lexicographically by label, permuting every row to match.
    pub fn sort_columns(&mut self) {
        let mut order: Vec<usize> = (0..self.columns.len()).collect();
        order.sort_by(|&a, &b| self.columns[a].cmp(&self.columns[b]));
        self.columns = order.iter().map(|&i| self.columns[i].clone()).collect();
        for row in self.rows.values_mut() {
            *row = order.iter().map(|&i| row[i]).collect();
        }
    }

    /// Carry the last known value of each column forward over gaps.
    ///
    /// Leading rows before a column's first value stay missing.
    pub fn forward_fill(&mut self) {
        let mut last: Vec<Option<f64>> = vec![None; self.columns.len()];
        for row in self.rows.values_mut() {
            for (cell, carried) in row.iter_mut().zip(last.iter_mut()) {
                match cell {
                    Some(v) => *carried = Some(*v),
                    None => *cell = *carried,
                }
            }
        }
    }

    /// Round every value to `decimals` decimal places.
    pub fn round(&mut self, decimals: u32) {
        let factor = 10f64.powi(decimals as i32);
        for row in self.rows.values_mut() {
            for cell in row.iter_mut() {
                if let Some(v) = cell {
                    *v = (*v * factor).round() / factor;
                }
            }
        }
    }

    /// Truncate the table after the latest timestamp at or before `cutoff`.
    ///
    /// Rows younger than the cutoff are dropped. When no timestamp qualifies
    /// the whole table is cleared: a table made up entirely of too-fresh rows
    /// would leak exactly the data the cutoff exists to exclude.
    pub fn trim_tail(&mut self, cutoff: DateTime<Utc>) {
        self.rows.retain(|ts, _| *ts <= cutoff);
    }
}

/// Outcome of one index computation: the table plus non-fatal skips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexReport {
    /// The finished composite table.
    pub table: IndexTable,
    /// Batches the fetcher dropped, for observability.
    pub skipped: Vec<SkipEvent>,
}
