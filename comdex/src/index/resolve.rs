use std::collections::BTreeSet;

use comdex_core::registry::{self, CategorySpec};
use comdex_core::IndexError;

/// Outcome of keyword resolution: the categories to fetch plus the corn
/// bookkeeping the composer needs for its post-merge filter.
#[derive(Debug)]
pub(crate) struct ResolvedCategories {
    /// Categories in registry order; set semantics, order is not meaningful.
    pub categories: Vec<&'static CategorySpec>,
    /// Whether plain corn was explicitly requested.
    pub corn_requested: bool,
    /// Whether corn starch was explicitly requested.
    pub starch_requested: bool,
}

/// Resolve user keywords against the three registries.
///
/// - `None` means every known category.
/// - Each keyword matches case-insensitively against native names, tickers,
///   and exchange-qualified tickers; corn-starch aliases resolve to the corn
///   category with the starch flag set.
/// - Duplicate categories collapse to one entry; the result is ordered by
///   registry position, which downstream code treats as arbitrary.
///
/// # Errors
/// Returns `InvalidArg` naming the first keyword that matches no registry.
pub(crate) fn resolve_categories(
    keywords: Option<&[String]>,
) -> Result<ResolvedCategories, IndexError> {
    let Some(keywords) = keywords else {
        return Ok(ResolvedCategories {
            categories: registry::CATEGORIES.iter().collect(),
            corn_requested: false,
            starch_requested: false,
        });
    };

    let mut positions: BTreeSet<usize> = BTreeSet::new();
    let mut corn_requested = false;
    let mut starch_requested = false;

    for keyword in keywords {
        let spec = if registry::is_corn_starch_alias(keyword) {
            starch_requested = true;
            registry::find("玉米")
        } else {
            if registry::is_corn_alias(keyword) {
                corn_requested = true;
            }
            registry::find(keyword)
        };
        let spec = spec
            .ok_or_else(|| IndexError::invalid_arg(format!("unrecognized keyword '{keyword}'")))?;
        if let Some(pos) = registry::position(spec) {
            positions.insert(pos);
        }
    }

    Ok(ResolvedCategories {
        categories: positions
            .into_iter()
            .map(|pos| &registry::CATEGORIES[pos])
            .collect(),
        corn_requested,
        starch_requested,
    })
}
