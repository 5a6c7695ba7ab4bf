use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use comdex_core::timeseries::table::{IndexReport, IndexTable};

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn col(entries: &[(i64, Option<f64>)]) -> BTreeMap<DateTime<Utc>, Option<f64>> {
    entries.iter().map(|&(t, v)| (ts(t), v)).collect()
}

#[test]
fn insert_column_outer_joins_and_pads() {
    let mut table = IndexTable::new();
    table.insert_column("CU", col(&[(1, Some(17.5)), (2, Some(18.0))]));
    table.insert_column("AU", col(&[(2, Some(400.0)), (3, Some(401.0))]));

    assert_eq!(table.columns(), ["CU", "AU"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.value(ts(1), "CU"), Some(17.5));
    assert_eq!(table.value(ts(1), "AU"), None);
    assert_eq!(table.value(ts(3), "CU"), None);
    assert_eq!(table.value(ts(3), "AU"), Some(401.0));
}

#[test]
fn sort_columns_is_lexicographic_and_permutes_rows() {
    let mut table = IndexTable::new();
    table.insert_column("CU", col(&[(1, Some(1.0))]));
    table.insert_column("AU", col(&[(1, Some(2.0))]));
    table.insert_column("C", col(&[(1, Some(3.0))]));
    table.sort_columns();

    assert_eq!(table.columns(), ["AU", "C", "CU"]);
    assert_eq!(table.value(ts(1), "AU"), Some(2.0));
    assert_eq!(table.value(ts(1), "C"), Some(3.0));
    assert_eq!(table.value(ts(1), "CU"), Some(1.0));
}

#[test]
fn drop_column_removes_cells() {
    let mut table = IndexTable::new();
    table.insert_column("C", col(&[(1, Some(1.0))]));
    table.insert_column("CS", col(&[(1, Some(2.0))]));
    assert!(table.drop_column("C"));
    assert!(!table.drop_column("C"));
    assert_eq!(table.columns(), ["CS"]);
    assert_eq!(table.value(ts(1), "CS"), Some(2.0));
}

#[test]
fn forward_fill_carries_last_value_and_leaves_leading_gaps() {
    let mut table = IndexTable::new();
    table.insert_column(
        "CU",
        col(&[(1, None), (2, Some(10.0)), (3, None), (4, None), (5, Some(12.0))]),
    );
    table.forward_fill();

    assert_eq!(table.value(ts(1), "CU"), None);
    assert_eq!(table.value(ts(3), "CU"), Some(10.0));
    assert_eq!(table.value(ts(4), "CU"), Some(10.0));
    assert_eq!(table.value(ts(5), "CU"), Some(12.0));
}

#[test]
fn round_uses_two_decimals() {
    let mut table = IndexTable::new();
    table.insert_column("CU", col(&[(1, Some(17.5049)), (2, Some(17.505))]));
    table.round(2);
    assert_eq!(table.value(ts(1), "CU"), Some(17.5));
    assert_eq!(table.value(ts(2), "CU"), Some(17.51));
}

#[test]
fn trim_tail_drops_rows_after_the_cutoff() {
    let mut table = IndexTable::new();
    table.insert_column("CU", col(&[(1, Some(1.0)), (2, Some(2.0)), (3, Some(3.0))]));
    table.trim_tail(ts(2));
    assert_eq!(table.len(), 2);
    assert!(table.rows().contains_key(&ts(2)));
    assert!(!table.rows().contains_key(&ts(3)));
}

#[test]
fn trim_tail_clears_a_table_with_no_mature_rows() {
    let mut table = IndexTable::new();
    table.insert_column("CU", col(&[(10, Some(1.0)), (11, Some(2.0))]));
    table.trim_tail(ts(5));
    assert!(table.is_empty());
    assert_eq!(table.columns(), ["CU"]);
}

#[test]
fn report_serde_round_trip() {
    let mut table = IndexTable::new();
    table.insert_column("CU", col(&[(1, Some(17.5))]));
    let report = IndexReport {
        table,
        skipped: Vec::new(),
    };
    let json = serde_json::to_string(&report).unwrap();
    let back: IndexReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
