use ferry_model::{
    Task, VolumeMode,
    wire::{self, ContainerInfo, ContainerType, DockerInfo},
};

/// Docker container carrying image, flags, parameters and volumes.
///
/// Networking is left unset; it is decided separately from the task's network mode.
pub fn to_container_info(task: &Task) -> ContainerInfo {
    let parameters = task
        .parameters
        .iter()
        .map(|p| wire::Parameter {
            key: p.key().to_string(),
            value: p.value().to_string(),
        })
        .collect();

    let volumes = task
        .volumes
        .iter()
        .map(|v| wire::Volume {
            container_path: v.container_path.clone(),
            host_path: Some(v.host_path.clone()),
            mode: match v.mode {
                VolumeMode::ReadWrite => wire::VolumeMode::Rw,
                VolumeMode::ReadOnly => wire::VolumeMode::Ro,
            },
        })
        .collect();

    ContainerInfo {
        kind: ContainerType::Docker,
        docker: Some(DockerInfo {
            image: task.image.clone(),
            network: None,
            port_mappings: Vec::new(),
            privileged: task.privileged,
            parameters,
            force_pull_image: task.force_pull_image,
        }),
        volumes,
        network_infos: Vec::new(),
    }
}

/// Task labels, or `None` when the task carries none.
pub fn to_labels(task: &Task) -> Option<wire::Labels> {
    if task.labels.is_empty() {
        return None;
    }
    Some(wire::Labels {
        labels: task
            .labels
            .iter()
            .map(|(key, value)| wire::Label {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect(),
    })
}
