use arabul_core::AggregationError;
use thiserror::Error;

/// Errors returned by the AraBul backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("complaint text must not be empty")]
    EmptyComplaint,
}

impl From<ApiError> for AggregationError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Deserialize { .. } => AggregationError::Malformed(err.to_string()),
            other => AggregationError::Request(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_error_maps_to_malformed() {
        let source = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let err: AggregationError = ApiError::Deserialize {
            context: "popular-suppliers".to_string(),
            source,
        }
        .into();
        assert!(matches!(err, AggregationError::Malformed(ref m) if m.contains("popular-suppliers")));
    }

    #[test]
    fn status_error_maps_to_request() {
        let err: AggregationError = ApiError::UnexpectedStatus {
            status: 503,
            url: "http://localhost/rating/rankings".to_string(),
        }
        .into();
        assert!(matches!(err, AggregationError::Request(_)));
    }
}
