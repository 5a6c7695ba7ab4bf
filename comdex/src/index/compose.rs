use chrono::{DateTime, Utc};
use comdex_core::{IndexConfig, IndexTable};

use super::resolve::ResolvedCategories;

/// Finishing pass over the merged table: corn disambiguation, column sort,
/// forward-fill, rounding, and the trailing-tail trim.
///
/// The corn filter mirrors the request flags: corn lookups always produce
/// both the corn and corn-starch composites, so whichever of the two was not
/// explicitly asked for is dropped — unless both (or neither) were requested,
/// in which case every produced column stays.
pub(crate) fn finish(
    table: &mut IndexTable,
    resolved: &ResolvedCategories,
    now: DateTime<Utc>,
    cfg: &IndexConfig,
) {
    match (resolved.starch_requested, resolved.corn_requested) {
        (true, false) => {
            table.drop_column("C");
        }
        (false, true) => {
            table.drop_column("CS");
        }
        _ => {}
    }

    table.sort_columns();
    table.forward_fill();
    table.round(2);
    table.trim_tail(now - cfg.freshness_margin_chrono());
}
