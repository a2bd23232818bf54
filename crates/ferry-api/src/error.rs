use ferry_core::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid master endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Only request-building failures (including JSON encoding of the call) are `Encode`.
/// Connection, timeout and response-body failures all mean the master was not heard.
impl From<ApiError> for TransportError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Http(e) if e.is_builder() => TransportError::Encode(e.to_string()),
            other => TransportError::Unreachable(other.to_string()),
        }
    }
}
