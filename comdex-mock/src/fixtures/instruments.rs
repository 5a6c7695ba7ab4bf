use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use comdex_core::InstrumentInfo;

/// Contract rosters per category name, as the vendor lookup would return
/// them. Corn lookups include the corn-starch product group, matching the
/// vendor's name-based matching.
pub fn by_category(name: &str) -> Vec<InstrumentInfo> {
    match name {
        "铜" => vec![
            inst("CU2403", "铜", "2023-01-03", "2024-03-15"),
            inst("CU2406", "铜", "2023-02-01", "2024-06-17"),
        ],
        "玉米" => vec![
            inst("C2403", "玉米", "2023-01-03", "2024-03-14"),
            inst("C2405", "玉米", "2023-03-01", "2024-05-15"),
            inst("CS2403", "玉米淀粉", "2023-01-03", "2024-03-14"),
        ],
        "黄金" => vec![inst("AU2406", "黄金", "2023-01-03", "2024-06-17")],
        _ => Vec::new(),
    }
}

fn inst(symbol: &str, product: &str, listed: &str, delisted: &str) -> InstrumentInfo {
    InstrumentInfo {
        symbol: symbol.to_string(),
        product: product.to_string(),
        listed_date: date(listed),
        delisted_date: date(delisted),
    }
}

fn date(s: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap()
        .and_time(NaiveTime::MIN)
        .and_utc()
}
