//! Supplier ranking for the AraBul result list.
//!
//! [`SupplierRanker`] orders a supplier list by distance, average rating,
//! or favorite count, consulting the aggregation collaborators from
//! `arabul-core` and falling back locally when they fail or have nothing
//! useful to say. [`RankSession`] adds generation tagging so only the most
//! recent request for a list is ever applied.

pub mod order;
pub mod ranker;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use order::{nearest, sort_nearest};
pub use ranker::{FallbackReason, RankBasis, Ranking, SupplierRanker, DEFAULT_AGGREGATE_TIMEOUT};
pub use session::{RankSession, RankTicket};
