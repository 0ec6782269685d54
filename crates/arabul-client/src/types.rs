//! Wire types for the AraBul backend.
//!
//! Aggregate and favorite lists have been served in two shapes over time:
//! objects keyed by `supplier_id`, and bare id strings. Each list entry is
//! decoded once into an untagged enum and converted to the shared domain
//! types from `arabul-core`, so callers never branch on shape.

use arabul_core::{PopularityAggregate, RatingAggregate, RawSupplierId};
use serde::{Deserialize, Serialize};

/// One entry of the `POST /rating/rankings` response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RatingEntry {
    Record {
        supplier_id: RawSupplierId,
        #[serde(default)]
        average_rating: Option<f64>,
        #[serde(default)]
        count: Option<u64>,
    },
    /// Bare id with no rating value attached.
    Legacy(String),
}

impl From<RatingEntry> for RatingAggregate {
    fn from(entry: RatingEntry) -> Self {
        match entry {
            RatingEntry::Record {
                supplier_id,
                average_rating,
                count,
            } => RatingAggregate {
                supplier_id: supplier_id.into_id(),
                average_rating: average_rating.unwrap_or(0.0),
                count: count.unwrap_or(0),
            },
            RatingEntry::Legacy(id) => RatingAggregate {
                supplier_id: id.trim().to_string(),
                average_rating: 0.0,
                count: 0,
            },
        }
    }
}

/// One entry of the `GET /popular-suppliers` response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PopularityEntry {
    Record {
        supplier_id: RawSupplierId,
        #[serde(default)]
        count: Option<u64>,
    },
    /// Bare id: one favorite per occurrence.
    Legacy(String),
}

impl From<PopularityEntry> for PopularityAggregate {
    fn from(entry: PopularityEntry) -> Self {
        match entry {
            PopularityEntry::Record { supplier_id, count } => PopularityAggregate {
                supplier_id: supplier_id.into_id(),
                favorite_count: count.unwrap_or(0),
            },
            PopularityEntry::Legacy(id) => PopularityAggregate {
                supplier_id: id.trim().to_string(),
                favorite_count: 1,
            },
        }
    }
}

/// One entry of the `GET /favorites/{user_id}` list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum FavoriteEntry {
    Record { supplier_id: RawSupplierId },
    Legacy(RawSupplierId),
}

impl FavoriteEntry {
    pub(crate) fn into_id(self) -> String {
        match self {
            FavoriteEntry::Record { supplier_id } | FavoriteEntry::Legacy(supplier_id) => {
                supplier_id.into_id()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FavoritesResponse {
    #[serde(default)]
    pub favorites: Vec<FavoriteEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IsFavoriteResponse {
    pub is_favorite: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserRatingResponse {
    pub rating: Option<f64>,
}

/// Average rating for a single supplier (`GET /rating/supplier/{id}`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SupplierRating {
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub count: u64,
}

/// Generic `{ "message": ..., "success": ... }` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RatingSubmission<'a> {
    pub user_id: i64,
    pub supplier_id: &'a str,
    pub rating: u8,
    pub rated_at: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FavoriteToggle<'a> {
    pub user_id: i64,
    pub supplier_id: &'a str,
    pub favorited_at: String,
    pub screen_opened_at: String,
    pub is_valid_favorite: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ComplaintSubmission<'a> {
    pub user_id: i64,
    pub complaint_text: &'a str,
    pub supplier_id: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(json: &str) -> Vec<RatingAggregate> {
        serde_json::from_str::<Vec<RatingEntry>>(json)
            .unwrap()
            .into_iter()
            .map(RatingAggregate::from)
            .collect()
    }

    fn popularity(json: &str) -> Vec<PopularityAggregate> {
        serde_json::from_str::<Vec<PopularityEntry>>(json)
            .unwrap()
            .into_iter()
            .map(PopularityAggregate::from)
            .collect()
    }

    #[test]
    fn rating_record_with_numeric_id() {
        let parsed = ratings(r#"[{"supplier_id": 17, "average_rating": 4.5, "count": 2}]"#);
        assert_eq!(
            parsed,
            vec![RatingAggregate {
                supplier_id: "17".to_string(),
                average_rating: 4.5,
                count: 2,
            }]
        );
    }

    #[test]
    fn rating_record_with_null_average_is_zero() {
        let parsed = ratings(r#"[{"supplier_id": "a", "average_rating": null}]"#);
        assert!(parsed[0].average_rating.abs() < f64::EPSILON);
        assert_eq!(parsed[0].count, 0);
    }

    #[test]
    fn legacy_rating_entry_carries_no_value() {
        let parsed = ratings(r#"[" b "]"#);
        assert_eq!(parsed[0].supplier_id, "b");
        assert!(parsed[0].average_rating.abs() < f64::EPSILON);
    }

    #[test]
    fn mixed_popularity_shapes_decode() {
        let parsed = popularity(r#"[{"supplier_id": "101", "count": 3}, "102"]"#);
        assert_eq!(
            parsed,
            vec![
                PopularityAggregate {
                    supplier_id: "101".to_string(),
                    favorite_count: 3,
                },
                PopularityAggregate {
                    supplier_id: "102".to_string(),
                    favorite_count: 1,
                },
            ]
        );
    }

    #[test]
    fn non_array_payload_fails_to_decode() {
        assert!(serde_json::from_str::<Vec<PopularityEntry>>(r#"{"detail": "oops"}"#).is_err());
    }

    #[test]
    fn favorites_accept_strings_numbers_and_objects() {
        let parsed: FavoritesResponse =
            serde_json::from_str(r#"{"favorites": ["a", 7, {"supplier_id": " c "}]}"#).unwrap();
        let ids: Vec<String> = parsed.favorites.into_iter().map(FavoriteEntry::into_id).collect();
        assert_eq!(ids, vec!["a", "7", "c"]);
    }
}
