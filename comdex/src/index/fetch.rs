use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use comdex_core::connector::{BarHistoryProvider, InstrumentProvider};
use comdex_core::registry::{self, CategorySpec};
use comdex_core::{
    Bar, Capability, Frequency, IndexConfig, IndexError, InstrumentInfo, SecType, SkipEvent,
    SkipReason, VendorConnector,
};

use super::window::ResolvedWindow;

/// One vendor product group of a category: the derived column code plus the
/// fetched series of every contract in the group.
pub(crate) struct ProductGroup {
    pub code: String,
    pub series: BTreeMap<String, Vec<Bar>>,
}

/// Fetch every contract series of one category.
///
/// Contracts are enumerated through the connector, grouped by the vendor's
/// product field (one nominal category can span several product groups, e.g.
/// corn and corn starch), and fetched sequentially in sub-windows. Groups or
/// contracts without any surviving data are omitted.
///
/// # Errors
/// - `Unsupported` when the connector lacks a capability or cannot serve the
///   requested frequency.
/// - `NotFound` when the category resolves to no contracts at all.
/// - Transport-level connector errors propagate; a `NotFound` for an
///   individual sub-window is treated as an empty slice instead.
pub(crate) async fn fetch_category(
    connector: &dyn VendorConnector,
    category: &CategorySpec,
    frequency: Frequency,
    window: ResolvedWindow,
    cfg: &IndexConfig,
) -> Result<(Vec<ProductGroup>, Vec<SkipEvent>), IndexError> {
    let lookup = connector
        .as_instrument_provider()
        .ok_or_else(|| IndexError::unsupported(Capability::Instruments.to_string()))?;
    let history = connector
        .as_bar_history_provider()
        .ok_or_else(|| IndexError::unsupported(Capability::BarHistory.to_string()))?;
    if !history.supported_frequencies().contains(&frequency) {
        return Err(IndexError::unsupported(format!(
            "{} frequency '{frequency}'",
            Capability::BarHistory
        )));
    }

    let instruments = lookup.instruments(category.name, SecType::Future).await?;
    if instruments.is_empty() {
        return Err(IndexError::not_found(format!(
            "instruments for {}",
            category.name
        )));
    }

    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut skipped: Vec<SkipEvent> = Vec::new();

    for (product, members) in group_by_product(instruments) {
        let code = members
            .first()
            .map(|inst| registry::prefix_code(&inst.symbol))
            .unwrap_or_default();
        #[cfg(feature = "tracing")]
        tracing::info!(category = category.name, product = %product, code = %code, "fetching product group");
        #[cfg(not(feature = "tracing"))]
        let _ = &product;

        let mut series: BTreeMap<String, Vec<Bar>> = BTreeMap::new();
        for inst in &members {
            let bars = fetch_instrument(history, inst, frequency, window, cfg, &mut skipped).await?;
            if !bars.is_empty() {
                series.insert(inst.symbol.clone(), bars);
            }
        }
        if !series.is_empty() {
            groups.push(ProductGroup { code, series });
        }
    }

    Ok((groups, skipped))
}

/// Fetch one contract's full series, sub-window by sub-window.
async fn fetch_instrument(
    history: &dyn BarHistoryProvider,
    inst: &InstrumentInfo,
    frequency: Frequency,
    window: ResolvedWindow,
    cfg: &IndexConfig,
    skipped: &mut Vec<SkipEvent>,
) -> Result<Vec<Bar>, IndexError> {
    let begin = window.begin.unwrap_or(inst.listed_date);
    let end = window.end.unwrap_or(inst.delisted_date);
    if begin >= end {
        return Ok(Vec::new());
    }

    let mut bars: Vec<Bar> = Vec::new();
    let bounds = sub_window_bounds(begin, end, cfg);
    for pair in bounds.windows(2) {
        let (start, stop) = (pair[0], pair[1]);
        let batch = match history.bar_history(&inst.symbol, frequency, start, stop).await {
            Ok(batch) => batch,
            // A contract can simply have no data for a slice (unlisted
            // period); that is not an error.
            Err(IndexError::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        };
        if batch.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol = %inst.symbol, %start, %stop, "empty sub-window");
            continue;
        }
        match batch.normalize() {
            Ok(rows) => bars.extend(rows),
            Err(fields) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    symbol = %inst.symbol,
                    %start,
                    %stop,
                    ?fields,
                    "dropping malformed bar batch"
                );
                skipped.push(SkipEvent {
                    symbol: inst.symbol.clone(),
                    start,
                    end: stop,
                    reason: SkipReason::MalformedFields(
                        fields.iter().map(|f| f.as_str().to_string()).collect(),
                    ),
                });
            }
        }
    }
    Ok(bars)
}

/// Partition `[begin, end]` into consecutive sub-window boundaries.
///
/// The first boundary is `begin` and the last is `end`; intermediate
/// boundaries step from `begin` in `sub_window_days` increments, each
/// re-anchored to its calendar date at the configured boundary time.
pub(crate) fn sub_window_bounds(
    begin: DateTime<Utc>,
    end: DateTime<Utc>,
    cfg: &IndexConfig,
) -> Vec<DateTime<Utc>> {
    let step = Duration::days(cfg.sub_window_days);
    let mut bounds = vec![begin];
    let mut cursor = begin + step;
    while cursor <= end {
        bounds.push(cursor.date_naive().and_time(cfg.boundary_time).and_utc());
        cursor += step;
    }
    bounds.push(end);
    bounds
}

fn group_by_product(instruments: Vec<InstrumentInfo>) -> BTreeMap<String, Vec<InstrumentInfo>> {
    let mut groups: BTreeMap<String, Vec<InstrumentInfo>> = BTreeMap::new();
    for inst in instruments {
        groups.entry(inst.product.clone()).or_default().push(inst);
    }
    groups
}
