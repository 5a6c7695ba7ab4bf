use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use comdex_core::types::{Bar, BarBatch, BarField, Frequency};

struct ContractParams {
    first: &'static str,
    last: &'static str,
    base_close: f64,
    base_oi: f64,
}

fn params(first: &'static str, last: &'static str, base_close: f64, base_oi: f64) -> ContractParams {
    ContractParams {
        first,
        last,
        base_close,
        base_oi,
    }
}

fn contract(symbol: &str) -> Option<ContractParams> {
    match symbol {
        "CU2403" => Some(params("2023-01-03", "2024-03-15", 68_000.0, 20_000.0)),
        "CU2406" => Some(params("2023-02-01", "2024-06-17", 68_500.0, 15_000.0)),
        "C2403" => Some(params("2023-01-03", "2024-03-14", 2_700.0, 90_000.0)),
        "C2405" => Some(params("2023-03-01", "2024-05-15", 2_720.0, 60_000.0)),
        "CS2403" => Some(params("2023-01-03", "2024-03-14", 3_100.0, 40_000.0)),
        "AU2406" => Some(params("2023-01-03", "2024-06-17", 450.0, 18_000.0)),
        _ => None,
    }
}

/// Deterministic daily bars for `symbol` over `[start, end]`, clipped to the
/// contract's life. Weekends are session gaps. Unknown symbols yield an empty
/// batch; symbols starting with "BAD" declare a malformed field set.
pub fn window(
    symbol: &str,
    frequency: Frequency,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> BarBatch {
    if symbol.starts_with("BAD") {
        return BarBatch {
            fields: vec![BarField::Eob, BarField::Close],
            bars: vec![Bar::new(start, Some(1.0), None)],
        };
    }
    let Some(params) = contract(symbol) else {
        return BarBatch::default();
    };

    let epoch = date(params.first);
    let from = start.max(datetime(params.first));
    let until = end.min(datetime(params.last) + Duration::hours(15));

    let mut bars = Vec::new();
    let mut day = from.date_naive();
    while let Some(eob) = session_close(day) {
        if eob > until {
            break;
        }
        if eob >= from && !is_weekend(day) {
            let age = (day - epoch).num_days();
            let close = params.base_close + ((age * 7) % 40) as f64;
            let oi = params.base_oi + (((age * 13) % 31) * 100) as f64;
            bars.push(Bar::new(eob, Some(close), Some(oi)));
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }

    let mut batch = BarBatch::with_bars(bars);
    if frequency.carries_window_fields() {
        batch.fields.push(BarField::Bob);
        batch.fields.push(BarField::FrequencyLabel);
    }
    batch
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

fn session_close(day: NaiveDate) -> Option<DateTime<Utc>> {
    NaiveTime::from_hms_opt(15, 0, 0).map(|t| day.and_time(t).and_utc())
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn datetime(s: &str) -> DateTime<Utc> {
    date(s).and_time(NaiveTime::MIN).and_utc()
}
