//! Translation of tasks into launch descriptors bound to an offer.
mod command;
mod container;
mod health;
mod network;
mod target;

pub use command::to_command_info;
pub use container::{to_container_info, to_labels};
pub use health::to_health_check;
pub use target::targets_for;

use ferry_model::{
    Offer, Task,
    wire::{AgentId, Resource, TaskId, TaskInfo},
};
use tracing::{info, warn};

use crate::{
    metrics::{MetricsHandle, noop_metrics},
    ports::PortAllocator,
};
use network::NetworkBinding;

/// Builds launch descriptors ([`TaskInfo`]) from tasks.
///
/// Building never fails: missing ports and unresolvable health checks degrade the
/// descriptor, are logged, and are reported to the metrics backend.
#[derive(Clone)]
pub struct TaskInfoBuilder {
    metrics: MetricsHandle,
}

impl Default for TaskInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskInfoBuilder {
    pub fn new() -> Self {
        Self {
            metrics: noop_metrics(),
        }
    }

    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Descriptor for `task`, drawing host ports from a fresh cursor over `offer`.
    pub fn build(&self, offer: &Offer, resources: Vec<Resource>, task: &Task) -> TaskInfo {
        let mut ports = PortAllocator::from_offer(offer);
        self.assemble(&mut ports, resources, task)
    }

    /// Descriptor for `task`, drawing host ports from a caller-owned cursor.
    ///
    /// Share one allocator across every task bundled into the same accept call so no two
    /// descriptors bind the same host port. An allocator created for another offer is
    /// reset in place to a fresh cursor over `offer`.
    pub fn build_with(
        &self,
        ports: &mut PortAllocator,
        offer: &Offer,
        resources: Vec<Resource>,
        task: &Task,
    ) -> TaskInfo {
        if ports.offer_id() != &offer.id {
            warn!(
                allocator = %ports.offer_id(),
                offer = %offer.id,
                "port allocator belongs to another offer, resetting it"
            );
            *ports = PortAllocator::from_offer(offer);
        }
        self.assemble(ports, resources, task)
    }

    fn assemble(
        &self,
        ports: &mut PortAllocator,
        mut resources: Vec<Resource>,
        task: &Task,
    ) -> TaskInfo {
        let mut container = to_container_info(task);
        let mut docker = container.docker.take().unwrap_or_default();

        NetworkBinding {
            docker: &mut docker,
            network_infos: &mut container.network_infos,
            resources: &mut resources,
        }
        .apply(task, ports, &self.metrics);

        let health_check = to_health_check(task, &docker.port_mappings, &self.metrics);
        container.docker = Some(docker);

        let info = TaskInfo {
            name: task.name.clone(),
            task_id: TaskId::new(task.id.as_str()),
            agent_id: AgentId::new(task.agent_id.as_str()),
            resources,
            command: Some(to_command_info(task)),
            container: Some(container),
            health_check,
            labels: to_labels(task),
        };

        info!(
            task = %task.id,
            agent = %task.agent_id,
            network = %task.network,
            ports = info.port_mappings().len(),
            "prepared task for launch"
        );
        info
    }
}

impl std::fmt::Debug for TaskInfoBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskInfoBuilder")
            .field("metrics", &"<handle>")
            .finish()
    }
}

/// Descriptor for `task` with a fresh port cursor and no metrics.
pub fn build_task_info(offer: &Offer, resources: Vec<Resource>, task: &Task) -> TaskInfo {
    TaskInfoBuilder::new().build(offer, resources, task)
}

/// Descriptor for `task` drawing ports from `ports`, with no metrics.
pub fn build_task_info_with(
    ports: &mut PortAllocator,
    offer: &Offer,
    resources: Vec<Resource>,
    task: &Task,
) -> TaskInfo {
    TaskInfoBuilder::new().build_with(ports, offer, resources, task)
}
