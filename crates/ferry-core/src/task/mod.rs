//! Materializes offer-bound tasks from application versions.
mod id;
pub use id::{make_task_id, make_task_name};

use std::{fmt, sync::Arc};

use ferry_model::{Application, Offer, PARAM_IP, Parameter, Task, Version};
use tracing::{debug, instrument, trace};

use crate::{
    error::CoreError,
    metrics::{MetricsHandle, noop_metrics},
    store::ApplicationStore,
};

/// Builds [`Task`]s for a matched offer.
///
/// Holds the application store used to resolve the owning application and to hand out
/// instance ordinals for auto-named tasks.
#[derive(Clone)]
pub struct TaskBuilder {
    store: Arc<dyn ApplicationStore>,
    metrics: MetricsHandle,
}

impl TaskBuilder {
    pub fn new(store: Arc<dyn ApplicationStore>) -> Self {
        Self {
            store,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend and return the updated builder.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Build a task for `version` bound to `offer`.
    ///
    /// Without an explicit `name` (or with an empty one) the name is derived from the
    /// application's instance ordinal, and the ordinal is advanced in the store. This is
    /// not idempotent: callers that retry must pass the name they got the first time.
    ///
    /// In fixed placement mode the ordinal also selects the pinned address from
    /// `version.ip`; a pool too short for it silently skips the `ip` parameter.
    #[instrument(level = "debug", skip(self, offer, version), fields(app = %version.app_id, offer = %offer.id))]
    pub async fn build_task(
        &self,
        offer: &Offer,
        version: &Version,
        name: Option<&str>,
    ) -> Result<Task, CoreError> {
        let app = self
            .store
            .fetch_application(&version.app_id)
            .await?
            .ok_or_else(|| CoreError::ApplicationNotFound(version.app_id.clone()))?;

        let (name, ordinal) = match name.filter(|n| !n.is_empty()) {
            Some(explicit) => (explicit.to_string(), app.instances),
            None => {
                let ordinal = self.store.next_instance(&app.id).await?;
                (make_task_name(ordinal, &app), ordinal)
            }
        };

        let docker = &version.container.docker;
        let mut parameters = docker.parameters.clone();
        if let Some(ip) = fixed_ip(&app, version, ordinal) {
            trace!(ip, ordinal, "pinning fixed-mode instance");
            parameters.push(Parameter::new(PARAM_IP, ip));
        }

        let task = Task {
            id: make_task_id(&name),
            name,
            app_id: version.app_id.clone(),
            version_id: version.id.clone(),
            image: docker.image.clone(),
            network: docker.network.clone(),
            uris: version.uris.clone(),
            parameters,
            port_mappings: docker.port_mappings.clone(),
            privileged: docker.privileged,
            force_pull_image: docker.force_pull_image,
            env: version.env.clone(),
            volumes: version.container.volumes.clone(),
            labels: version.labels.clone(),
            cpus: version.cpus,
            mem: version.mem,
            disk: version.disk,
            kill_policy: version.kill_policy,
            health_checks: version.health_checks.clone(),
            offer_id: offer.id.value.clone(),
            agent_id: offer.agent_id.value.clone(),
            agent_hostname: offer.hostname.clone(),
        };

        self.metrics.record_task_built(&task.app_id);
        debug!(task = %task.id, agent = %task.agent_id, "task built");
        Ok(task)
    }
}

impl fmt::Debug for TaskBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskBuilder")
            .field("store", &"<store>")
            .field("metrics", &"<handle>")
            .finish()
    }
}

/// Pinned address for instance `ordinal`, if the application is fixed and the pool reaches it.
fn fixed_ip<'a>(app: &Application, version: &'a Version, ordinal: u64) -> Option<&'a str> {
    if !app.mode.is_fixed() {
        return None;
    }
    let idx = usize::try_from(ordinal).ok()?;
    version.ip.get(idx).map(String::as_str)
}
