use std::time::Duration;

use arabul_core::Session;
use chrono::{DateTime, SecondsFormat, Utc};

use super::ArabulClient;
use crate::error::ApiError;
use crate::types::{
    Acknowledgement, FavoriteEntry, FavoriteToggle, FavoritesResponse, IsFavoriteResponse,
};

/// Minimum time a supplier's detail screen must have been open for a
/// favorite to count toward its popularity.
pub const MIN_FAVORITE_DWELL: Duration = Duration::from_secs(10);

/// Whether a favorite made at `favorited_at` on a screen opened at
/// `screen_opened_at` counts toward popularity. Clock skew (favorited before
/// opened) never counts.
#[must_use]
pub fn is_valid_favorite(screen_opened_at: DateTime<Utc>, favorited_at: DateTime<Utc>) -> bool {
    (favorited_at - screen_opened_at)
        .to_std()
        .is_ok_and(|dwell| dwell >= MIN_FAVORITE_DWELL)
}

impl ArabulClient {
    /// Adds or removes a supplier from the session user's favorites
    /// (`POST /add-favourite`).
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from the request.
    pub async fn toggle_favorite(
        &self,
        session: &Session,
        supplier_id: &str,
        screen_opened_at: DateTime<Utc>,
    ) -> Result<Acknowledgement, ApiError> {
        let url = self.endpoint(&["add-favourite"])?;
        let favorited_at = Utc::now();
        let body = FavoriteToggle {
            user_id: session.user_id,
            supplier_id,
            favorited_at: favorited_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            screen_opened_at: screen_opened_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            is_valid_favorite: is_valid_favorite(screen_opened_at, favorited_at),
        };

        let request = self.client.post(url).json(&body);
        let ack: Acknowledgement = Self::send_json(request, "add-favourite").await?;
        tracing::info!(
            supplier_id,
            counted = body.is_valid_favorite,
            message = %ack.message,
            "favorite toggled"
        );
        Ok(ack)
    }

    /// Checks whether the session user has favorited a supplier
    /// (`GET /is-favorite`).
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from the request.
    pub async fn is_favorite(&self, session: &Session, supplier_id: &str) -> Result<bool, ApiError> {
        let url = self.endpoint(&["is-favorite"])?;
        let user_id = session.user_id.to_string();
        let request = self
            .client
            .get(url)
            .query(&[("user_id", user_id.as_str()), ("supplier_id", supplier_id)]);

        let body: IsFavoriteResponse = Self::send_json(request, "is-favorite").await?;
        Ok(body.is_favorite)
    }

    /// Lists the ids the session user has favorited (`GET /favorites/{user_id}`).
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from the request.
    pub async fn favorites(&self, session: &Session) -> Result<Vec<String>, ApiError> {
        let user_id = session.user_id.to_string();
        let url = self.endpoint(&["favorites", &user_id])?;

        let body: FavoritesResponse = Self::send_json(self.client.get(url), "favorites").await?;
        Ok(body.favorites.into_iter().map(FavoriteEntry::into_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn favorite_after_ten_seconds_counts() {
        assert!(is_valid_favorite(at(0), at(10)));
        assert!(is_valid_favorite(at(0), at(60)));
    }

    #[test]
    fn quick_favorite_does_not_count() {
        assert!(!is_valid_favorite(at(0), at(9)));
        assert!(!is_valid_favorite(at(0), at(0)));
    }

    #[test]
    fn favorite_before_open_does_not_count() {
        assert!(!is_valid_favorite(at(30), at(0)));
    }
}
