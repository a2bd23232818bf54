//! HTTP delivery of scheduler calls to the master.
mod config;
pub use config::MasterConfig;

mod error;
pub use error::ApiError;

mod http;
pub use http::{HttpTransport, SCHEDULER_PATH, STREAM_ID_HEADER};
