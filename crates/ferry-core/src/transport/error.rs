use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("master unreachable: {0}")]
    Unreachable(String),

    #[error("master answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to encode call: {0}")]
    Encode(String),
}
