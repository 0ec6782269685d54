use arabul_core::{PopularityAggregate, RatingAggregate, Session};
use chrono::{SecondsFormat, Utc};
use reqwest::header;

use super::ArabulClient;
use crate::error::ApiError;
use crate::types::{
    Acknowledgement, PopularityEntry, RatingEntry, RatingSubmission, SupplierRating,
    UserRatingResponse,
};

impl ArabulClient {
    /// Fetches average ratings for a batch of suppliers
    /// (`POST /rating/rankings`).
    ///
    /// Suppliers without any rating are absent from the result. An empty
    /// `supplier_ids` slice returns an empty list without a request.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or timeout.
    /// - [`ApiError::NotFound`] / [`ApiError::UnexpectedStatus`] on non-2xx.
    /// - [`ApiError::Deserialize`] if the body is not an array of entries.
    pub async fn bulk_ratings(
        &self,
        supplier_ids: &[String],
    ) -> Result<Vec<RatingAggregate>, ApiError> {
        if supplier_ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.endpoint(&["rating", "rankings"])?;
        tracing::debug!(%url, count = supplier_ids.len(), "requesting bulk ratings");

        let request = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .header(header::CACHE_CONTROL, "no-cache")
            .json(supplier_ids);
        let entries: Vec<RatingEntry> = Self::send_json(request, "rating/rankings").await?;

        Ok(entries.into_iter().map(RatingAggregate::from).collect())
    }

    /// Fetches favorite counts for every favorited supplier
    /// (`GET /popular-suppliers`).
    ///
    /// # Errors
    ///
    /// Same as [`ArabulClient::bulk_ratings`].
    pub async fn popular_suppliers(&self) -> Result<Vec<PopularityAggregate>, ApiError> {
        let url = self.endpoint(&["popular-suppliers"])?;
        tracing::debug!(%url, "requesting popular suppliers");

        let request = self.client.get(url).header(header::ACCEPT, "application/json");
        let entries: Vec<PopularityEntry> = Self::send_json(request, "popular-suppliers").await?;

        Ok(entries.into_iter().map(PopularityAggregate::from).collect())
    }

    /// Fetches one supplier's average rating (`GET /rating/supplier/{id}`).
    ///
    /// A 404 means the supplier has not been rated yet and yields a zero
    /// rating rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, non-404 error statuses, or an
    /// undecodable body.
    pub async fn supplier_rating(&self, supplier_id: &str) -> Result<SupplierRating, ApiError> {
        let url = self.endpoint(&["rating", "supplier", supplier_id])?;
        match Self::send_json::<SupplierRating>(self.client.get(url), "rating/supplier").await {
            Ok(rating) => Ok(rating),
            Err(ApiError::NotFound { .. }) => Ok(SupplierRating::default()),
            Err(e) => Err(e),
        }
    }

    /// Fetches the session user's own rating for a supplier
    /// (`GET /rating/user`). Returns `None` when the user has not rated it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, non-404 error statuses, or an
    /// undecodable body.
    pub async fn user_rating(
        &self,
        session: &Session,
        supplier_id: &str,
    ) -> Result<Option<f64>, ApiError> {
        let url = self.endpoint(&["rating", "user"])?;
        let user_id = session.user_id.to_string();
        let request = self
            .client
            .get(url)
            .query(&[("user_id", user_id.as_str()), ("supplier_id", supplier_id)]);

        match Self::send_json::<UserRatingResponse>(request, "rating/user").await {
            Ok(body) => Ok(body.rating),
            Err(ApiError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Submits or replaces the session user's rating (`POST /rating`).
    ///
    /// The session token, when present, is sent as a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRating`] for ratings outside `1..=5`
    /// without contacting the backend, otherwise any [`ApiError`] from the
    /// request.
    pub async fn submit_rating(
        &self,
        session: &Session,
        supplier_id: &str,
        rating: u8,
    ) -> Result<Acknowledgement, ApiError> {
        if !(1..=5).contains(&rating) {
            return Err(ApiError::InvalidRating(rating));
        }

        let url = self.endpoint(&["rating"])?;
        let body = RatingSubmission {
            user_id: session.user_id,
            supplier_id,
            rating,
            rated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let mut request = self.client.post(url).json(&body);
        if let Some(token) = &session.token {
            request = request.bearer_auth(token);
        }

        let ack: Acknowledgement = Self::send_json(request, "rating").await?;
        tracing::info!(supplier_id, rating, success = ack.success, "rating submitted");
        Ok(ack)
    }
}
