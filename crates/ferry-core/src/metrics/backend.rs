use std::sync::Arc;

/// Scheduler call kind for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Accept,
    Kill,
}

impl CallKind {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            CallKind::Accept => "accept",
            CallKind::Kill => "kill",
        }
    }
}

/// Transport-level outcome of a scheduler call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Master acknowledged the call.
    Accepted,
    /// Call was not delivered or the master answered with an error status.
    Failed,
}

impl CallOutcome {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            CallOutcome::Accepted => "accepted",
            CallOutcome::Failed => "failed",
        }
    }
}

/// Condition absorbed while building a launch descriptor instead of failing the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedReason {
    /// Bridge networking requested but the offer carries no ports.
    NoPorts,
    /// The offer ran out of ports before every mapping was bound.
    PortsExhausted,
    /// No strategy resolved a health check port; the check probes port 0.
    HealthPortUnresolved,
    /// Health check protocol is neither `http` nor `tcp`.
    UnknownHealthProtocol,
}

impl DegradedReason {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            DegradedReason::NoPorts => "no_ports",
            DegradedReason::PortsExhausted => "ports_exhausted",
            DegradedReason::HealthPortUnresolved => "health_port_unresolved",
            DegradedReason::UnknownHealthProtocol => "unknown_health_protocol",
        }
    }
}

/// Backend metrics collection interface.
///
/// Implementations are injected into the builders and the launch coordinator.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a task materialized from a version.
    fn record_task_built(&self, app_id: &str);
    /// Record a scheduler call and its transport outcome.
    fn record_call(&self, kind: CallKind, outcome: CallOutcome);
    /// Record a degraded descriptor build.
    fn record_degraded(&self, reason: DegradedReason);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
