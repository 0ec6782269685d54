//! Per-supplier aggregates and the collaborator traits that fetch them.
//!
//! The ranker only depends on these traits; the HTTP implementation lives in
//! `arabul-client`, tests use in-memory stubs.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Average rating for one supplier that has at least one rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub supplier_id: String,
    pub average_rating: f64,
    #[serde(default)]
    pub count: u64,
}

/// Favorite count for one supplier that has been favorited at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityAggregate {
    pub supplier_id: String,
    pub favorite_count: u64,
}

/// Failure to obtain aggregates from a collaborator.
///
/// The ranker treats every variant identically; the distinction only
/// matters for logs.
#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("aggregation request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("aggregation request timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed aggregation payload: {0}")]
    Malformed(String),
}

/// Batch source of average ratings.
#[async_trait]
pub trait RatingAggregation: Send + Sync {
    /// Returns one entry per id in `supplier_ids` that has ratings. Ids
    /// without ratings are simply absent.
    async fn bulk_ratings(
        &self,
        supplier_ids: &[String],
    ) -> Result<Vec<RatingAggregate>, AggregationError>;
}

/// Batch source of favorite counts.
#[async_trait]
pub trait PopularityAggregation: Send + Sync {
    /// Returns favorite counts for favorited suppliers. Implementations may
    /// ignore `supplier_ids` and return counts for every favorited supplier.
    async fn favorite_counts(
        &self,
        supplier_ids: &[String],
    ) -> Result<Vec<PopularityAggregate>, AggregationError>;
}
