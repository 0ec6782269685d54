//! HTTP client for the AraBul backend.
//!
//! Provides [`ArabulClient`], which implements the rating and popularity
//! aggregation traits from `arabul-core` and the user-scoped favorite,
//! rating, and complaint calls of the mobile app.

pub mod client;
pub mod error;
pub mod types;

pub use client::{is_valid_favorite, ArabulClient, MIN_FAVORITE_DWELL};
pub use error::ApiError;
pub use types::{Acknowledgement, SupplierRating};
