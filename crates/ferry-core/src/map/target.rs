use ferry_model::{NetworkMode, PARAM_IP, Target, Task, wire::TaskInfo};

/// Proxy endpoints of a placed task.
///
/// Bridge tasks expose their bound host ports on the agent; host and overlay tasks
/// expose the declared container ports directly. Isolated tasks are unreachable.
pub fn targets_for(task: &Task, info: &TaskInfo) -> Vec<Target> {
    let target = |ip: &str, port: u32, name: &str| Target {
        app_id: task.app_id.clone(),
        version_id: task.version_id.clone(),
        task_id: task.id.clone(),
        task_ip: ip.to_string(),
        task_port: port,
        port_name: name.to_string(),
        weight: Target::DEFAULT_WEIGHT,
    };

    let declared = |ip: &str| -> Vec<Target> {
        task.port_mappings
            .iter()
            .map(|m| target(ip, m.container_port, &m.name))
            .collect()
    };

    match &task.network {
        NetworkMode::Isolated => Vec::new(),
        NetworkMode::Bridge => info
            .port_mappings()
            .iter()
            .map(|bound| {
                let name = task
                    .port_mappings
                    .iter()
                    .find(|m| m.container_port == bound.container_port)
                    .map(|m| m.name.as_str())
                    .unwrap_or_default();
                target(&task.agent_hostname, bound.host_port, name)
            })
            .collect(),
        NetworkMode::Host => declared(&task.agent_hostname),
        NetworkMode::Overlay(_) => {
            declared(task.parameter(PARAM_IP).unwrap_or(task.agent_hostname.as_str()))
        }
    }
}
