//! Helpers shared by API clients: the fetch error type and JSON decoding.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a read request against a remote JSON API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

/// Decode a response body
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_ok() {
        let v: Vec<i64> = decode_json("[1, 2, 3]").unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_json_error() {
        let err = decode_json::<Vec<i64>>("<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_status_message() {
        assert_eq!(FetchError::Status(503).to_string(), "Server responded with HTTP 503");
    }
}
