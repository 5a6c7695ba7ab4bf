//! The commodity category registry.
//!
//! Three registries resolve a user keyword to one canonical category: the
//! native-language name, the ticker root, and the exchange-qualified ticker.
//! All tables are static and lookups are pure functions; the registry is
//! never mutated at runtime.

use crate::types::Exchange;

/// One commodity category known to the index pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    /// Native-language name; also the string vendor instrument lookups use.
    pub name: &'static str,
    /// Ticker root, upper-case.
    pub ticker: &'static str,
    /// Listing exchange.
    pub exchange: Exchange,
}

impl CategorySpec {
    /// Exchange-qualified ticker, e.g. "SHFE.CU".
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.exchange.code(), self.ticker)
    }
}

/// Every category the pipeline can build an index for, in registry order.
pub const CATEGORIES: &[CategorySpec] = &[
    cat("玉米", "C", Exchange::Dce),
    cat("白糖", "SR", Exchange::Czce),
    cat("鸡蛋", "JD", Exchange::Dce),
    cat("动力煤", "TC", Exchange::Czce),
    cat("沥青", "BU", Exchange::Shfe),
    cat("热轧卷板", "HC", Exchange::Shfe),
    cat("豆一", "A", Exchange::Dce),
    cat("棉一", "CF", Exchange::Czce),
    cat("线型", "L", Exchange::Dce),
    cat("聚氯乙烯", "V", Exchange::Dce),
    cat("铜", "CU", Exchange::Shfe),
    cat("铝", "AL", Exchange::Shfe),
    cat("锌", "ZN", Exchange::Shfe),
    cat("铅", "PB", Exchange::Shfe),
    cat("镍", "NI", Exchange::Shfe),
    cat("螺纹钢", "RB", Exchange::Shfe),
    cat("玻璃", "FG", Exchange::Czce),
    cat("橡胶", "RU", Exchange::Shfe),
    cat("PTA", "TA", Exchange::Czce),
    cat("甲醇", "MA", Exchange::Czce),
    cat("聚丙烯", "PP", Exchange::Dce),
    cat("焦煤", "JM", Exchange::Dce),
    cat("焦炭", "J", Exchange::Dce),
    cat("铁矿石", "I", Exchange::Dce),
    cat("豆粕", "M", Exchange::Dce),
    cat("菜粕", "RM", Exchange::Czce),
    cat("豆油", "Y", Exchange::Dce),
    cat("棕榈油", "P", Exchange::Dce),
    cat("菜籽油", "OI", Exchange::Czce),
    cat("硅铁", "SF", Exchange::Czce),
    cat("锰硅", "SM", Exchange::Czce),
    cat("黄金", "AU", Exchange::Shfe),
    cat("白银", "AG", Exchange::Shfe),
];

const fn cat(name: &'static str, ticker: &'static str, exchange: Exchange) -> CategorySpec {
    CategorySpec {
        name,
        ticker,
        exchange,
    }
}

/// Keywords that mean corn starch. They resolve to the corn category (corn
/// lookups return the starch contracts too) but are tracked separately so the
/// composer can drop the unwanted column afterwards.
pub const CORN_STARCH_ALIASES: &[&str] = &["玉米淀粉", "淀粉", "CS", "DCE.CS"];

/// Keywords that mean plain corn.
pub const CORN_ALIASES: &[&str] = &["玉米", "C", "DCE.C"];

/// Resolve a keyword against all three registries, case-insensitively.
#[must_use]
pub fn find(keyword: &str) -> Option<&'static CategorySpec> {
    let upper = keyword.to_uppercase();
    CATEGORIES
        .iter()
        .find(|c| c.name.to_uppercase() == upper || c.ticker == upper || c.qualified() == upper)
}

/// Registry position of a category, used for set-like deduplication.
#[must_use]
pub fn position(spec: &CategorySpec) -> Option<usize> {
    CATEGORIES.iter().position(|c| c == spec)
}

/// Whether a keyword is one of the corn-starch aliases.
#[must_use]
pub fn is_corn_starch_alias(keyword: &str) -> bool {
    let upper = keyword.to_uppercase();
    CORN_STARCH_ALIASES.iter().any(|a| *a == upper)
}

/// Whether a keyword is one of the plain-corn aliases.
#[must_use]
pub fn is_corn_alias(keyword: &str) -> bool {
    let upper = keyword.to_uppercase();
    CORN_ALIASES.iter().any(|a| *a == upper)
}

/// Column code for a contract symbol: the first character when the second is
/// a digit ("C2401" → "C"), otherwise the first two ("CU2401" → "CU").
#[must_use]
pub fn prefix_code(symbol: &str) -> String {
    let mut chars = symbol.chars();
    let first = chars.next();
    let second = chars.next();
    let code: String = match (first, second) {
        (Some(a), Some(b)) if b.is_ascii_digit() => a.to_string(),
        (Some(a), Some(b)) => [a, b].iter().collect(),
        (Some(a), None) => a.to_string(),
        (None, _) => String::new(),
    };
    code.to_uppercase()
}
