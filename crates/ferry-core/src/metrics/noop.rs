use crate::metrics::backend::{CallKind, CallOutcome, DegradedReason, MetricsBackend};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_task_built(&self, _: &str) {}

    #[inline(always)]
    fn record_call(&self, _: CallKind, _: CallOutcome) {}

    #[inline(always)]
    fn record_degraded(&self, _: DegradedReason) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(CallKind::Accept.as_label(), "accept");
        assert_eq!(CallOutcome::Failed.as_label(), "failed");
        assert_eq!(DegradedReason::NoPorts.as_label(), "no_ports");
    }
}
