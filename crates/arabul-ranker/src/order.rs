//! Stable comparators over supplier lists.
//!
//! Every ordering here uses `sort_by`, which is stable: suppliers that
//! compare equal keep their relative input order.

use std::collections::HashMap;

use arabul_core::Supplier;

/// Ascending by distance, unknown distances last.
pub fn sort_nearest(suppliers: &mut [Supplier]) {
    suppliers.sort_by(|a, b| a.sort_distance_km().total_cmp(&b.sort_distance_km()));
}

/// Returns a nearest-first copy of `suppliers`.
#[must_use]
pub fn nearest(suppliers: &[Supplier]) -> Vec<Supplier> {
    let mut sorted = suppliers.to_vec();
    sort_nearest(&mut sorted);
    sorted
}

/// Descending by average rating; ids missing from `ratings` rank as 0.
pub(crate) fn sort_by_rating(suppliers: &mut [Supplier], ratings: &HashMap<&str, f64>) {
    let rating = |s: &Supplier| ratings.get(s.id.as_str()).copied().unwrap_or(0.0);
    suppliers.sort_by(|a, b| rating(b).total_cmp(&rating(a)));
}

/// Descending by favorite count; ids missing from `counts` rank as 0.
pub(crate) fn sort_by_favorites(suppliers: &mut [Supplier], counts: &HashMap<&str, u64>) {
    let count = |s: &Supplier| counts.get(s.id.as_str()).copied().unwrap_or(0);
    suppliers.sort_by(|a, b| count(b).cmp(&count(a)));
}
