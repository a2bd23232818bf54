//! Metrics collection abstraction for the launch pipeline.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected into
//! [`crate::TaskBuilder`], [`crate::TaskInfoBuilder`] and [`crate::LaunchCoordinator`].
mod backend;
pub use backend::{CallKind, CallOutcome, DegradedReason, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
