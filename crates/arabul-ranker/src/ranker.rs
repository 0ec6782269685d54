//! Supplier ranking with remote aggregates and local fallbacks.
//!
//! | Mode          | Aggregate fetch fails / empty / all zero | Otherwise              |
//! |---------------|------------------------------------------|------------------------|
//! | `Nearest`     | n/a (no fetch)                           | distance ascending     |
//! | `ByRanking`   | distance ascending                       | average rating desc    |
//! | `MostPopular` | input order unchanged                    | favorite count desc    |
//!
//! `MostPopular` never falls back to distance order.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use arabul_core::{
    AggregationError, PopularityAggregation, RatingAggregation, SortMode, Supplier,
};

use crate::order::{sort_by_favorites, sort_by_rating, sort_nearest};

/// Default bound on each aggregate request.
pub const DEFAULT_AGGREGATE_TIMEOUT: Duration = Duration::from_secs(10);

/// What actually determined the order of a [`Ranking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBasis {
    Distance,
    Rating,
    Popularity,
    /// Input order returned as-is.
    Unchanged,
}

impl fmt::Display for RankBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBasis::Distance => write!(f, "distance"),
            RankBasis::Rating => write!(f, "average rating"),
            RankBasis::Popularity => write!(f, "favorite count"),
            RankBasis::Unchanged => write!(f, "current order"),
        }
    }
}

/// Why a remote-backed mode did not use its aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Request failed, timed out, or returned a malformed payload.
    RequestFailed,
    /// Request succeeded with no entries.
    NoData,
    /// Every returned value was zero.
    AllZero,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::RequestFailed => write!(f, "request failed"),
            FallbackReason::NoData => write!(f, "no data"),
            FallbackReason::AllZero => write!(f, "all values zero"),
        }
    }
}

/// An ordered copy of the input plus how it was produced.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub suppliers: Vec<Supplier>,
    pub mode: SortMode,
    pub basis: RankBasis,
    pub fallback: Option<FallbackReason>,
}

/// Orders supplier lists by a [`SortMode`].
///
/// Holds no mutable state, so one ranker can serve concurrent calls.
#[derive(Clone)]
pub struct SupplierRanker {
    ratings: Arc<dyn RatingAggregation>,
    popularity: Arc<dyn PopularityAggregation>,
    timeout: Duration,
}

impl fmt::Debug for SupplierRanker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplierRanker")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl SupplierRanker {
    #[must_use]
    pub fn new(
        ratings: Arc<dyn RatingAggregation>,
        popularity: Arc<dyn PopularityAggregation>,
    ) -> Self {
        Self {
            ratings,
            popularity,
            timeout: DEFAULT_AGGREGATE_TIMEOUT,
        }
    }

    /// Overrides the per-request bound; an aggregate call that exceeds it is
    /// treated as failed.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns a freshly ordered copy of `suppliers`. Never fails.
    pub async fn rank(&self, suppliers: &[Supplier], mode: SortMode) -> Vec<Supplier> {
        self.rank_detailed(suppliers, mode).await.suppliers
    }

    /// Like [`SupplierRanker::rank`], also reporting which ordering was used.
    pub async fn rank_detailed(&self, suppliers: &[Supplier], mode: SortMode) -> Ranking {
        let mut sorted = suppliers.to_vec();
        let (basis, fallback) = match mode {
            SortMode::Nearest => {
                sort_nearest(&mut sorted);
                (RankBasis::Distance, None)
            }
            SortMode::ByRanking => self.order_by_rating(&mut sorted).await,
            SortMode::MostPopular => self.order_by_popularity(&mut sorted).await,
        };

        tracing::debug!(
            %mode,
            ?basis,
            supplier_count = sorted.len(),
            "suppliers ranked"
        );

        Ranking {
            suppliers: sorted,
            mode,
            basis,
            fallback,
        }
    }

    async fn order_by_rating(
        &self,
        sorted: &mut [Supplier],
    ) -> (RankBasis, Option<FallbackReason>) {
        let ids = supplier_ids(sorted);
        let ratings = match self.bounded(self.ratings.bulk_ratings(&ids)).await {
            Ok(ratings) => ratings,
            Err(e) => {
                tracing::warn!(error = %e, "rating fetch failed, ordering by distance");
                sort_nearest(sorted);
                return (RankBasis::Distance, Some(FallbackReason::RequestFailed));
            }
        };

        let reason = if ratings.is_empty() {
            Some(FallbackReason::NoData)
        } else if !ratings.iter().any(|r| r.average_rating > 0.0) {
            Some(FallbackReason::AllZero)
        } else {
            None
        };
        if let Some(reason) = reason {
            tracing::info!(%reason, "no usable ratings, ordering by distance");
            sort_nearest(sorted);
            return (RankBasis::Distance, Some(reason));
        }

        let by_id: HashMap<&str, f64> = ratings
            .iter()
            .map(|r| (r.supplier_id.as_str(), r.average_rating))
            .collect();
        sort_by_rating(sorted, &by_id);
        (RankBasis::Rating, None)
    }

    async fn order_by_popularity(
        &self,
        sorted: &mut [Supplier],
    ) -> (RankBasis, Option<FallbackReason>) {
        let ids = supplier_ids(sorted);
        let counts = match self.bounded(self.popularity.favorite_counts(&ids)).await {
            Ok(counts) => counts,
            Err(e) => {
                tracing::warn!(error = %e, "popularity fetch failed, keeping current order");
                return (RankBasis::Unchanged, Some(FallbackReason::RequestFailed));
            }
        };

        let reason = if counts.is_empty() {
            Some(FallbackReason::NoData)
        } else if counts.iter().all(|c| c.favorite_count == 0) {
            Some(FallbackReason::AllZero)
        } else {
            None
        };
        if let Some(reason) = reason {
            tracing::info!(%reason, "no usable favorite counts, keeping current order");
            return (RankBasis::Unchanged, Some(reason));
        }

        let by_id: HashMap<&str, u64> = counts
            .iter()
            .map(|c| (c.supplier_id.as_str(), c.favorite_count))
            .collect();
        sort_by_favorites(sorted, &by_id);
        (RankBasis::Popularity, None)
    }

    /// Applies the configured timeout to one aggregate request.
    async fn bounded<T, F>(&self, request: F) -> Result<T, AggregationError>
    where
        F: Future<Output = Result<T, AggregationError>>,
    {
        tokio::time::timeout(self.timeout, request)
            .await
            .unwrap_or(Err(AggregationError::Timeout(self.timeout)))
    }
}

fn supplier_ids(suppliers: &[Supplier]) -> Vec<String> {
    suppliers.iter().map(|s| s.id.clone()).collect()
}

#[cfg(test)]
#[path = "ranker_test.rs"]
mod tests;
