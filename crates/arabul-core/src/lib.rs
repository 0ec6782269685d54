//! Shared domain types for the AraBul supplier ranking workspace.
//!
//! Holds the [`Supplier`] snapshot decoded from search results, the
//! [`SortMode`] selector, the aggregate records returned by the rating and
//! popularity backends, and the collaborator traits the ranker consumes.

pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod session;
pub mod sort_mode;
pub mod supplier;

use thiserror::Error;

pub use aggregate::{
    AggregationError, PopularityAggregate, PopularityAggregation, RatingAggregate,
    RatingAggregation,
};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use session::Session;
pub use sort_mode::SortMode;
pub use supplier::{parse_business_list, RawSupplierId, Supplier, UNKNOWN_DISTANCE_KM};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid sort mode: {0}")]
    InvalidSortMode(String),

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
