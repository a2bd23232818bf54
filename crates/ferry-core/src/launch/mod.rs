//! Accept/launch and kill calls against the master.
mod call;
pub use call::{REFUSE_SECONDS, accept_call, kill_call};

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use ferry_model::{
    Offer, Task,
    wire::{Call, FrameworkId, TaskInfo},
};
use tracing::{debug, error, info, instrument};

use crate::{
    error::CoreError,
    metrics::{CallKind, CallOutcome, MetricsHandle, noop_metrics},
    transport::{CallResponse, Transport, TransportError},
};

/// Issues scheduler calls that change cluster state.
///
/// Calls are sent once: there is no retry and no deduplication. A failed launch leaves
/// the offer consumed on this side; the master rescinds or re-offers it on its own.
pub struct LaunchCoordinator {
    framework_id: FrameworkId,
    transport: Arc<dyn Transport>,
    metrics: MetricsHandle,
    launched: AtomicU64,
}

impl LaunchCoordinator {
    pub fn new(framework_id: FrameworkId, transport: Arc<dyn Transport>) -> Self {
        Self {
            framework_id,
            transport,
            metrics: noop_metrics(),
            launched: AtomicU64::new(0),
        }
    }

    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Framework the calls are issued for.
    pub fn framework_id(&self) -> &FrameworkId {
        &self.framework_id
    }

    /// Descriptors handed to the master by successful launch calls so far.
    pub fn tasks_launched(&self) -> u64 {
        self.launched.load(Ordering::Relaxed)
    }

    /// Accept `offer` and launch every descriptor on it in one operation.
    ///
    /// The offer is consumed whatever the outcome.
    #[instrument(level = "debug", skip(self, offer, task_infos), fields(offer = %offer.id, tasks = task_infos.len()))]
    pub async fn launch_tasks(
        &self,
        offer: Offer,
        task_infos: Vec<TaskInfo>,
    ) -> Result<CallResponse, CoreError> {
        let count = task_infos.len() as u64;
        let call = accept_call(&self.framework_id, offer.id, task_infos);

        let resp = self.send(CallKind::Accept, &call).await?;
        let total = self.launched.fetch_add(count, Ordering::Relaxed) + count;
        info!(status = resp.status, launched = total, "launch accepted");
        Ok(resp)
    }

    /// Ask the master to kill `task` on the agent it was placed on.
    #[instrument(level = "debug", skip(self, task), fields(task = %task.id, agent = %task.agent_id))]
    pub async fn kill_task(&self, task: &Task) -> Result<CallResponse, CoreError> {
        let call = kill_call(&self.framework_id, task);
        let resp = self.send(CallKind::Kill, &call).await?;
        info!(status = resp.status, "kill accepted");
        Ok(resp)
    }

    async fn send(&self, kind: CallKind, call: &Call) -> Result<CallResponse, TransportError> {
        debug!(call = kind.as_label(), "sending call");
        match self.transport.send(call).await {
            Ok(resp) => {
                self.metrics.record_call(kind, CallOutcome::Accepted);
                Ok(resp)
            }
            Err(e) => {
                error!(call = kind.as_label(), error = %e, "call failed");
                self.metrics.record_call(kind, CallOutcome::Failed);
                Err(e)
            }
        }
    }
}

impl fmt::Debug for LaunchCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchCoordinator")
            .field("framework_id", &self.framework_id)
            .field("tasks_launched", &self.tasks_launched())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::metrics::{DegradedReason, MetricsBackend};
    use async_trait::async_trait;
    use ferry_model::{
        Env, KillPolicy, Labels, NetworkMode,
        wire::{AgentId, Call, CallType, OfferId, Resource, TaskId},
    };

    #[derive(Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<Call>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, call: &Call) -> Result<CallResponse, TransportError> {
            self.calls.lock().unwrap().push(call.clone());
            Ok(CallResponse {
                status: 202,
                body: String::new(),
            })
        }
    }

    struct RejectingTransport;

    #[async_trait]
    impl Transport for RejectingTransport {
        async fn send(&self, _call: &Call) -> Result<CallResponse, TransportError> {
            Err(TransportError::Status {
                status: 400,
                body: "Failed to validate scheduler::Call".into(),
            })
        }
    }

    #[derive(Default)]
    struct CallCounter {
        calls: Mutex<Vec<(CallKind, CallOutcome)>>,
    }

    impl MetricsBackend for CallCounter {
        fn record_task_built(&self, _: &str) {}
        fn record_call(&self, kind: CallKind, outcome: CallOutcome) {
            self.calls.lock().unwrap().push((kind, outcome));
        }
        fn record_degraded(&self, _: DegradedReason) {}
    }

    fn offer() -> Offer {
        Offer {
            id: OfferId::new("offer-1"),
            framework_id: None,
            agent_id: AgentId::new("agent-1"),
            hostname: "node-1".into(),
            resources: vec![Resource::ranges("ports", [(31000, 31010)])],
        }
    }

    fn task(kill_policy: Option<KillPolicy>) -> Task {
        Task {
            id: "1700000000-0.web.ops.dc1".into(),
            name: "0.web.ops.dc1".into(),
            app_id: "web".into(),
            version_id: "v1".into(),
            image: "nginx".into(),
            network: NetworkMode::Host,
            uris: Vec::new(),
            parameters: Vec::new(),
            port_mappings: Vec::new(),
            privileged: false,
            force_pull_image: false,
            env: Env::new(),
            volumes: Vec::new(),
            labels: Labels::new(),
            cpus: 0.1,
            mem: 32.0,
            disk: 0.0,
            kill_policy,
            health_checks: Vec::new(),
            offer_id: "offer-1".into(),
            agent_id: "agent-1".into(),
            agent_hostname: "node-1".into(),
        }
    }

    fn info(name: &str) -> TaskInfo {
        TaskInfo {
            name: name.into(),
            task_id: TaskId::new(format!("1-{name}")),
            agent_id: AgentId::new("agent-1"),
            resources: Vec::new(),
            command: None,
            container: None,
            health_check: None,
            labels: None,
        }
    }

    #[tokio::test]
    async fn launch_sends_one_accept_with_all_descriptors() {
        let transport = Arc::new(RecordingTransport::default());
        let coord = LaunchCoordinator::new(FrameworkId::new("fw-1"), transport.clone());

        let resp = coord
            .launch_tasks(offer(), vec![info("a"), info("b")])
            .await
            .unwrap();
        assert_eq!(resp.status, 202);

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.kind, CallType::Accept);
        assert_eq!(call.framework_id.as_ref().unwrap().as_str(), "fw-1");

        let accept = call.accept.as_ref().unwrap();
        assert_eq!(accept.offer_ids, vec![OfferId::new("offer-1")]);
        assert_eq!(accept.operations.len(), 1);
        let launch = accept.operations[0].launch.as_ref().unwrap();
        assert_eq!(launch.task_infos.len(), 2);
        assert_eq!(accept.filters.unwrap().refuse_seconds, Some(1.0));
        assert_eq!(coord.tasks_launched(), 2);
    }

    #[tokio::test]
    async fn failed_launch_surfaces_transport_error() {
        let metrics = Arc::new(CallCounter::default());
        let coord = LaunchCoordinator::new(FrameworkId::new("fw-1"), Arc::new(RejectingTransport))
            .with_metrics(metrics.clone());

        let err = coord.launch_tasks(offer(), vec![info("a")]).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Transport(TransportError::Status { status: 400, .. })
        ));
        assert_eq!(coord.tasks_launched(), 0);
        assert_eq!(
            *metrics.calls.lock().unwrap(),
            vec![(CallKind::Accept, CallOutcome::Failed)]
        );
    }

    #[tokio::test]
    async fn kill_carries_grace_period_in_nanoseconds() {
        let transport = Arc::new(RecordingTransport::default());
        let metrics = Arc::new(CallCounter::default());
        let coord = LaunchCoordinator::new(FrameworkId::new("fw-1"), transport.clone())
            .with_metrics(metrics.clone());

        coord
            .kill_task(&task(Some(KillPolicy { duration: 5000 })))
            .await
            .unwrap();

        let calls = transport.calls.lock().unwrap();
        let kill = calls[0].kill.as_ref().unwrap();
        assert_eq!(calls[0].kind, CallType::Kill);
        assert_eq!(kill.task_id.as_str(), "1700000000-0.web.ops.dc1");
        assert_eq!(kill.agent_id.as_ref().unwrap().as_str(), "agent-1");
        let grace = kill.kill_policy.unwrap().grace_period.unwrap();
        assert_eq!(grace.nanoseconds, 5_000_000_000);
        assert_eq!(
            *metrics.calls.lock().unwrap(),
            vec![(CallKind::Kill, CallOutcome::Accepted)]
        );
    }

    #[test]
    fn kill_without_grace_period_omits_policy() {
        let fw = FrameworkId::new("fw-1");
        assert!(kill_call(&fw, &task(None)).kill.unwrap().kill_policy.is_none());
        let zero = kill_call(&fw, &task(Some(KillPolicy { duration: 0 })));
        assert!(zero.kill.unwrap().kill_policy.is_none());
    }

    #[test]
    fn accept_call_encodes_master_shape() {
        let call = accept_call(&FrameworkId::new("fw-1"), OfferId::new("o-1"), vec![info("a")]);
        let json = serde_json::to_value(&call).unwrap();

        assert_eq!(json["type"], "ACCEPT");
        assert_eq!(json["accept"]["offer_ids"][0]["value"], "o-1");
        assert_eq!(json["accept"]["operations"][0]["type"], "LAUNCH");
        assert_eq!(
            json["accept"]["operations"][0]["launch"]["task_infos"][0]["name"],
            "a"
        );
        assert_eq!(json["accept"]["filters"]["refuse_seconds"], 1.0);
    }
}
