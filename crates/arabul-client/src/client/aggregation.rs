use arabul_core::{
    AggregationError, PopularityAggregate, PopularityAggregation, RatingAggregate,
    RatingAggregation,
};
use async_trait::async_trait;

use super::ArabulClient;

#[async_trait]
impl RatingAggregation for ArabulClient {
    async fn bulk_ratings(
        &self,
        supplier_ids: &[String],
    ) -> Result<Vec<RatingAggregate>, AggregationError> {
        Ok(ArabulClient::bulk_ratings(self, supplier_ids).await?)
    }
}

#[async_trait]
impl PopularityAggregation for ArabulClient {
    /// `/popular-suppliers` is global; `supplier_ids` is not sent.
    async fn favorite_counts(
        &self,
        _supplier_ids: &[String],
    ) -> Result<Vec<PopularityAggregate>, AggregationError> {
        Ok(self.popular_suppliers().await?)
    }
}
