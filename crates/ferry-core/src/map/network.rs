use ferry_model::{
    NetworkMode, Task,
    wire::{DockerInfo, DockerNetwork, NetworkInfo, PortMapping, Resource},
};
use tracing::{error, trace, warn};

use crate::{
    metrics::{DegradedReason, MetricsHandle},
    ports::PortAllocator,
};

/// Network attachment and host-port bindings resolved against one offer.
pub(crate) struct NetworkBinding<'a> {
    pub(crate) docker: &'a mut DockerInfo,
    pub(crate) network_infos: &'a mut Vec<NetworkInfo>,
    pub(crate) resources: &'a mut Vec<Resource>,
}

impl NetworkBinding<'_> {
    /// Apply the task's network mode.
    ///
    /// Bridge mode binds every declared mapping to the next port of `ports` and claims
    /// that port as a single-value range resource. Missing or exhausted offer ports
    /// degrade the descriptor (fewer bindings) instead of failing it.
    pub(crate) fn apply(self, task: &Task, ports: &mut PortAllocator, metrics: &MetricsHandle) {
        match &task.network {
            NetworkMode::Isolated => {
                self.docker.network = Some(DockerNetwork::None);
            }
            NetworkMode::Host => {
                self.docker.network = Some(DockerNetwork::Host);
            }
            NetworkMode::Bridge => {
                self.docker.network = Some(DockerNetwork::Bridge);
                bind_bridge_ports(self, task, ports, metrics);
            }
            NetworkMode::Overlay(name) => {
                self.docker.network = Some(DockerNetwork::User);
                self.network_infos.push(NetworkInfo {
                    name: Some(name.clone()),
                });
            }
        }
    }
}

fn bind_bridge_ports(
    binding: NetworkBinding<'_>,
    task: &Task,
    ports: &mut PortAllocator,
    metrics: &MetricsHandle,
) {
    if task.port_mappings.is_empty() {
        return;
    }
    if ports.is_empty() {
        error!(task = %task.id, offer = %ports.offer_id(), "no ports resource defined");
        metrics.record_degraded(DegradedReason::NoPorts);
        return;
    }

    for (i, mapping) in task.port_mappings.iter().enumerate() {
        let Some(host_port) = ports.next() else {
            warn!(
                task = %task.id,
                bound = i,
                declared = task.port_mappings.len(),
                "offer ran out of ports, remaining mappings left unbound"
            );
            metrics.record_degraded(DegradedReason::PortsExhausted);
            return;
        };

        trace!(container_port = mapping.container_port, host_port, "port bound");
        binding.docker.port_mappings.push(PortMapping {
            host_port,
            container_port: mapping.container_port,
            protocol: (!mapping.protocol.is_empty()).then(|| mapping.protocol.clone()),
        });
        binding.resources.push(Resource::port(host_port));
    }
}
