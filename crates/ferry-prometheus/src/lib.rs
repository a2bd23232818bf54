//! Prometheus backend for the ferry launch pipeline metrics.
//!
//! [`PrometheusMetrics`] implements [`ferry_core::MetricsBackend`]; hand it to the task
//! builder, the descriptor builder and the launch coordinator as a shared handle.
//!
//! ```rust
//! use std::sync::Arc;
//! use ferry_core::{TaskInfoBuilder, MetricsHandle};
//! use ferry_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), prometheus::Error> {
//! let metrics = PrometheusMetrics::new()?;
//! let handle: MetricsHandle = Arc::new(metrics.clone());
//! let builder = TaskInfoBuilder::new().with_metrics(handle);
//! # let _ = builder;
//! let exposition = metrics.encode_text()?;
//! # let _ = exposition;
//! # Ok(())
//! # }
//! ```
//!
//! Metrics:
//! - `ferry_tasks_built_total{app}`
//! - `ferry_calls_total{call, outcome}`
//! - `ferry_degraded_total{reason}`
//!
//! No `/metrics` endpoint is served here; expose [`PrometheusMetrics::encode_text`]
//! through whatever HTTP server the binary already runs.
mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
