use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown placement mode: {0}")]
    UnknownPlacementMode(String),

    #[error("unknown health check protocol: {0}")]
    UnknownProtocol(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
