use ferry_model::{
    HealthCheck, HealthProtocol, Task,
    wire::{self, HealthCheckType, HttpCheckInfo, PortMapping, TcpCheckInfo},
};
use tracing::{debug, warn};

use crate::metrics::{DegradedReason, MetricsHandle};

/// Status an HTTP check expects from a healthy task.
const HTTP_HEALTHY_STATUS: u32 = 200;

/// Resolve the task's declared checks against its bound port mappings.
///
/// A descriptor holds a single check, so the last check that yields one wins.
/// Checks with an unrecognized protocol are skipped.
pub fn to_health_check(
    task: &Task,
    bound: &[PortMapping],
    metrics: &MetricsHandle,
) -> Option<wire::HealthCheck> {
    if task.health_checks.len() > 1 {
        warn!(
            task = %task.id,
            declared = task.health_checks.len(),
            "only the last health check is kept"
        );
    }

    let mut resolved = None;
    for check in &task.health_checks {
        let protocol = match check.protocol() {
            Ok(p) => p,
            Err(e) => {
                warn!(task = %task.id, error = %e, "health check skipped");
                metrics.record_degraded(DegradedReason::UnknownHealthProtocol);
                continue;
            }
        };

        let port = resolve_host_port(task, check, bound);
        if port == 0 {
            debug!(task = %task.id, port = check.port, port_name = %check.port_name, "health check port unresolved");
            metrics.record_degraded(DegradedReason::HealthPortUnresolved);
        }
        resolved = Some(build_check(protocol, port, check));
    }
    resolved
}

/// Host port probed by `check`, `0` when nothing matches.
///
/// Preference: the name lookup, then a direct container-port match, then the mapping
/// at the (clamped) port index.
fn resolve_host_port(task: &Task, check: &HealthCheck, bound: &[PortMapping]) -> u32 {
    let by_container_port = |port: u32| {
        bound
            .iter()
            .find(|m| m.container_port == port)
            .map(|m| m.host_port)
    };

    let by_name = Some(check.port_name.as_str())
        .filter(|n| !n.is_empty())
        .and_then(|n| task.port_mapping(n))
        .and_then(|declared| by_container_port(declared.container_port));

    let by_port = Some(check.port)
        .filter(|p| *p != 0)
        .and_then(by_container_port);

    by_name
        .or(by_port)
        .or_else(|| {
            let idx = clamp_port_index(check.port_index, bound.len());
            bound.get(idx).map(|m| m.host_port)
        })
        .unwrap_or(0)
}

/// Negative or out-of-range indexes fall back to the first mapping.
fn clamp_port_index(idx: i64, len: usize) -> usize {
    usize::try_from(idx).ok().filter(|i| *i < len).unwrap_or(0)
}

fn build_check(protocol: HealthProtocol, port: u32, check: &HealthCheck) -> wire::HealthCheck {
    let (kind, http, tcp) = match protocol {
        HealthProtocol::Http => (
            HealthCheckType::Http,
            Some(HttpCheckInfo {
                scheme: Some("http".to_string()),
                port,
                path: Some(check.path.clone()),
                statuses: vec![HTTP_HEALTHY_STATUS],
            }),
            None,
        ),
        HealthProtocol::Tcp => (HealthCheckType::Tcp, None, Some(TcpCheckInfo { port })),
    };

    wire::HealthCheck {
        kind,
        http,
        tcp,
        interval_seconds: Some(check.interval_seconds),
        timeout_seconds: Some(check.timeout_seconds),
        consecutive_failures: Some(check.max_consecutive_failures),
        grace_period_seconds: Some(check.grace_period_seconds),
    }
}
