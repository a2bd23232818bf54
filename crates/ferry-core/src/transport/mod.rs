//! Delivery of scheduler calls to the master.
mod error;
pub use error::TransportError;

use async_trait::async_trait;
use ferry_model::wire::Call;

/// Raw outcome of a delivered call.
///
/// Only transport-level success is known here: the master answers `202 Accepted`
/// long before it has acted on the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallResponse {
    pub status: u16,
    pub body: String,
}

/// Sends scheduler calls to the master's control endpoint.
///
/// Framework identity and stream session are the implementation's concern.
/// Non-success statuses must be reported as [`TransportError::Status`].
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, call: &Call) -> Result<CallResponse, TransportError>;
}
