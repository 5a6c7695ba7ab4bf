use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use comdex_core::timeseries::align::align_series;
use comdex_core::timeseries::compose::compose_weighted;
use comdex_core::types::Bar;

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn series(entries: &[(&str, &[(i64, Option<f64>, Option<f64>)])]) -> BTreeMap<String, Vec<Bar>> {
    entries
        .iter()
        .map(|(sym, bars)| {
            let bars = bars
                .iter()
                .map(|&(t, close, oi)| Bar::new(ts(t), close, oi))
                .collect();
            (sym.to_string(), bars)
        })
        .collect()
}

#[test]
fn align_unions_timestamps() {
    let s = series(&[
        ("CU2401", &[(1, Some(10.0), Some(100.0)), (2, Some(11.0), Some(110.0))]),
        ("CU2402", &[(2, Some(20.0), Some(300.0)), (3, Some(21.0), Some(310.0))]),
    ]);
    let aligned = align_series(&s);
    assert_eq!(aligned.symbols, vec!["CU2401", "CU2402"]);
    assert_eq!(aligned.rows.len(), 3);
    let row = &aligned.rows[&ts(1)];
    assert_eq!(row[0].close, Some(10.0));
    assert_eq!(row[1].close, None);
}

#[test]
fn align_drops_rows_where_every_open_interest_is_missing() {
    let s = series(&[
        ("CU2401", &[(1, Some(10.0), None), (2, Some(11.0), Some(110.0))]),
        ("CU2402", &[(1, Some(20.0), None)]),
    ]);
    let aligned = align_series(&s);
    assert_eq!(aligned.rows.len(), 1);
    assert!(aligned.rows.contains_key(&ts(2)));
}

#[test]
fn align_keeps_first_bar_on_duplicate_timestamps() {
    let s = series(&[(
        "CU2401",
        &[(1, Some(10.0), Some(100.0)), (1, Some(99.0), Some(999.0))],
    )]);
    let aligned = align_series(&s);
    assert_eq!(aligned.rows[&ts(1)][0].close, Some(10.0));
}

#[test]
fn composite_weights_by_open_interest_share() {
    // Two contracts, open interest 100/300, closes 10/20:
    // 10 * 0.25 + 20 * 0.75 = 17.5
    let s = series(&[
        ("CU2401", &[(1, Some(10.0), Some(100.0))]),
        ("CU2402", &[(1, Some(20.0), Some(300.0))]),
    ]);
    let composite = compose_weighted(&align_series(&s));
    assert_eq!(composite[&ts(1)], Some(17.5));
}

#[test]
fn missing_open_interest_is_excluded_from_the_denominator() {
    // The contract without open interest drops out entirely: the present one
    // carries weight 1.0.
    let s = series(&[
        ("CU2401", &[(1, Some(10.0), None)]),
        ("CU2402", &[(1, Some(20.0), Some(300.0))]),
    ]);
    let composite = compose_weighted(&align_series(&s));
    assert_eq!(composite[&ts(1)], Some(20.0));
}

#[test]
fn missing_close_contributes_zero_but_keeps_its_open_interest() {
    // Open interest 100/300 with the second close missing: the denominator
    // still counts 400, so the composite is 10 * 0.25 = 2.5, not 10.
    let s = series(&[
        ("CU2401", &[(1, Some(10.0), Some(100.0))]),
        ("CU2402", &[(1, None, Some(300.0))]),
    ]);
    let composite = compose_weighted(&align_series(&s));
    assert_eq!(composite[&ts(1)], Some(2.5));
}

#[test]
fn zero_total_open_interest_yields_a_missing_value() {
    let s = series(&[
        ("CU2401", &[(1, Some(10.0), Some(0.0))]),
        ("CU2402", &[(1, Some(20.0), Some(0.0))]),
    ]);
    let composite = compose_weighted(&align_series(&s));
    assert_eq!(composite[&ts(1)], None);
}
