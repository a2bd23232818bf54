use std::sync::Arc;

use prometheus::{CounterVec, Opts, Registry, TextEncoder, proto::MetricFamily};

use ferry_core::{CallKind, CallOutcome, DegradedReason, MetricsBackend};

const NAMESPACE: &str = "ferry";

/// Prometheus implementation of [`MetricsBackend`].
///
/// Label values are bounded except `app`, which grows with the number of applications.
#[derive(Clone)]
pub struct PrometheusMetrics {
    tasks_built: CounterVec,
    calls: CounterVec,
    degraded: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Register the ferry counters in `registry`.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let tasks_built = counter(
            &registry,
            "tasks_built_total",
            "Tasks materialized from an application version",
            &["app"],
        )?;
        let calls = counter(
            &registry,
            "calls_total",
            "Scheduler calls sent to the master",
            &["call", "outcome"],
        )?;
        let degraded = counter(
            &registry,
            "degraded_total",
            "Launch descriptors built with missing ports or health check wiring",
            &["reason"],
        )?;

        Ok(Self {
            tasks_built,
            calls,
            degraded,
            registry,
        })
    }

    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Current values in the Prometheus text exposition format.
    pub fn encode_text(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.gather())
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

fn counter(
    registry: &Registry,
    name: &str,
    help: &str,
    labels: &[&str],
) -> Result<CounterVec, prometheus::Error> {
    let vec = CounterVec::new(Opts::new(name, help).namespace(NAMESPACE), labels)?;
    registry.register(Box::new(vec.clone()))?;
    Ok(vec)
}

impl MetricsBackend for PrometheusMetrics {
    fn record_task_built(&self, app_id: &str) {
        self.tasks_built.with_label_values(&[app_id]).inc();
    }

    fn record_call(&self, kind: CallKind, outcome: CallOutcome) {
        self.calls
            .with_label_values(&[kind.as_label(), outcome.as_label()])
            .inc();
    }

    fn record_degraded(&self, reason: DegradedReason) {
        self.degraded.with_label_values(&[reason.as_label()]).inc();
    }
}
