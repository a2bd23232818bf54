use serde::{Deserialize, Serialize};

use crate::{
    app::{HealthCheck, NetworkMode},
    domain::{Env, Labels, Parameter},
};

/// Port declared by a version, bound to a host port at launch time in bridge mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    pub container_port: u32,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub name: String,
}

/// Access mode of a host volume.
///
/// Only the exact string `RW` grants write access; everything else mounts read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VolumeMode {
    ReadWrite,
    #[default]
    ReadOnly,
}

impl From<String> for VolumeMode {
    fn from(s: String) -> Self {
        if s == "RW" {
            VolumeMode::ReadWrite
        } else {
            VolumeMode::ReadOnly
        }
    }
}

impl From<VolumeMode> for String {
    fn from(m: VolumeMode) -> Self {
        match m {
            VolumeMode::ReadWrite => "RW".to_string(),
            VolumeMode::ReadOnly => "RO".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub container_path: String,
    pub host_path: String,
    #[serde(default)]
    pub mode: VolumeMode,
}

/// Docker runtime settings of a version.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Docker {
    pub image: String,
    pub network: NetworkMode,
    pub parameters: Vec<Parameter>,
    pub port_mappings: Vec<PortMapping>,
    pub privileged: bool,
    pub force_pull_image: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    pub docker: Docker,
    pub volumes: Vec<Volume>,
}

/// Shutdown policy applied when a task is killed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillPolicy {
    /// Grace period in milliseconds. `0` means "use the agent default".
    pub duration: u64,
}

impl KillPolicy {
    /// Grace period converted to nanoseconds, or `None` when no grace period is set.
    pub fn grace_period_nanos(&self) -> Option<i64> {
        if self.duration == 0 {
            return None;
        }
        let nanos = self.duration.saturating_mul(1_000_000);
        Some(i64::try_from(nanos).unwrap_or(i64::MAX))
    }
}

/// Immutable description of how instances of an application run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Version {
    pub id: String,
    pub app_id: String,
    pub container: Container,
    pub env: Env,
    pub cpus: f64,
    pub mem: f64,
    pub disk: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<String>,
    #[serde(skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    /// Address pool for fixed-mode applications, indexed by instance ordinal.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ip: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_policy: Option<KillPolicy>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub health_checks: Vec<HealthCheck>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_rw_is_read_write() {
        assert_eq!(VolumeMode::from("RW".to_string()), VolumeMode::ReadWrite);
        for raw in ["rw", "RO", "", "readwrite"] {
            assert_eq!(VolumeMode::from(raw.to_string()), VolumeMode::ReadOnly);
        }
    }

    #[test]
    fn kill_policy_converts_millis_to_nanos() {
        assert_eq!(
            KillPolicy { duration: 5000 }.grace_period_nanos(),
            Some(5_000_000_000)
        );
        assert_eq!(KillPolicy { duration: 0 }.grace_period_nanos(), None);
        assert_eq!(
            KillPolicy { duration: u64::MAX }.grace_period_nanos(),
            Some(i64::MAX)
        );
    }

    #[test]
    fn version_parses_from_json() {
        let json = r#"{
            "id": "v1",
            "appId": "web",
            "container": {
                "docker": {
                    "image": "nginx:1.25",
                    "network": "BRIDGE",
                    "portMappings": [{"containerPort": 80, "protocol": "tcp", "name": "http"}]
                },
                "volumes": [{"containerPath": "/data", "hostPath": "/srv/data", "mode": "RW"}]
            },
            "env": {"MODE": "prod"},
            "cpus": 0.5,
            "mem": 128,
            "ip": ["10.0.0.1"],
            "killPolicy": {"duration": 3000}
        }"#;

        let v: Version = serde_json::from_str(json).unwrap();
        assert_eq!(v.app_id, "web");
        assert_eq!(v.container.docker.network, NetworkMode::Bridge);
        assert_eq!(v.container.docker.port_mappings[0].container_port, 80);
        assert_eq!(v.container.volumes[0].mode, VolumeMode::ReadWrite);
        assert_eq!(v.env.get("MODE"), Some("prod"));
        assert_eq!(v.kill_policy, Some(KillPolicy { duration: 3000 }));
        assert!(v.health_checks.is_empty());
    }
}
