use super::criteria::{Criteria, SortOrder};
use crate::models::Property;
use tracing::debug;

/// Apply `criteria` to `records`, returning a new price-ordered list.
///
/// Dropdown equality, the inclusive price window and the search text are
/// AND-combined; each is skipped when unset. The input is never modified.
pub fn filter(records: &[Property], criteria: &Criteria) -> Vec<Property> {
    let mut filtered: Vec<Property> = records
        .iter()
        .filter(|p| criteria.selections.admits(p))
        .filter(|p| criteria.price.contains(p.price))
        .filter(|p| match &criteria.search {
            Some(search) => search.matches_property(p),
            None => true,
        })
        .cloned()
        .collect();

    sort_by_price(&mut filtered, criteria.sort);

    debug!(
        "Filtered {} of {} properties (sort: {:?}, search: {:?})",
        filtered.len(),
        records.len(),
        criteria.sort,
        criteria.search_text()
    );

    filtered
}

/// Stable sort, so listings at the same price keep dataset order
pub fn sort_by_price(records: &mut [Property], order: SortOrder) {
    match order {
        SortOrder::Ascending => records.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Descending => records.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}
