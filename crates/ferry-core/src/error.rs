use thiserror::Error;

use crate::{store::StoreError, transport::TransportError};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("application not found: {0}")]
    ApplicationNotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
