//! Supplier records as delivered by the search backend.
//!
//! The backend emits PascalCase keys (`SupplierID`, `SupplierName`, ...) and
//! is inconsistent about whether ids are JSON strings or numbers. Both are
//! normalised to a trimmed `String` here so the rest of the workspace only
//! ever sees opaque string ids.

use serde::{Deserialize, Deserializer, Serialize};

use crate::CoreError;

/// Distance used for suppliers whose `distance_km` is unknown.
///
/// Larger than any real road distance the backend reports, so unknown
/// suppliers sort after every located one under nearest-first ordering.
pub const UNKNOWN_DISTANCE_KM: f64 = 9999.0;

/// A supplier id as it appears on the wire: either a string or an integer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawSupplierId {
    Text(String),
    Int(i64),
}

impl RawSupplierId {
    /// Canonical string form: text ids are trimmed, integers are formatted.
    #[must_use]
    pub fn into_id(self) -> String {
        match self {
            RawSupplierId::Text(s) => s.trim().to_string(),
            RawSupplierId::Int(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawSupplierId::deserialize(deserializer).map(RawSupplierId::into_id)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Immutable snapshot of one business location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "SupplierID", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "SupplierName", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "Address", default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(rename = "City", default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(rename = "Region", default, deserialize_with = "null_as_empty")]
    pub region: String,
    #[serde(rename = "PhoneNumber", default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(rename = "ContactPerson", default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Human-readable travel time, e.g. `"12 dakika"`.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Supplier {
    /// Distance used for ordering; unknown distances map to [`UNKNOWN_DISTANCE_KM`].
    #[must_use]
    pub fn sort_distance_km(&self) -> f64 {
        self.distance_km.unwrap_or(UNKNOWN_DISTANCE_KM)
    }
}

#[derive(Debug, Deserialize)]
struct BusinessListPayload {
    #[serde(default)]
    data: Vec<BusinessGroup>,
}

#[derive(Debug, Deserialize)]
struct BusinessGroup {
    #[serde(rename = "Suppliers", default)]
    suppliers: Vec<Supplier>,
}

/// Decode a business-list payload (`{"data": [{"Suppliers": [...]}, ...]}`)
/// into a flat supplier list, preserving group order then in-group order.
///
/// # Errors
///
/// Returns [`CoreError::Decode`] if the payload is not valid JSON, or if any
/// supplier lacks a `SupplierID`.
pub fn parse_business_list(json: &str) -> Result<Vec<Supplier>, CoreError> {
    let payload: BusinessListPayload =
        serde_json::from_str(json).map_err(|source| CoreError::Decode {
            context: "business list".to_string(),
            source,
        })?;

    Ok(payload
        .data
        .into_iter()
        .flat_map(|group| group.suppliers)
        .collect())
}
