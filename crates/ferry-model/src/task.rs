use serde::{Deserialize, Serialize};

use crate::{
    app::{HealthCheck, KillPolicy, NetworkMode, PortMapping, Volume},
    domain::{Env, Labels, Parameter},
};

/// One concrete instance of a [`crate::Version`], bound to the offer it was built for.
///
/// Built once by the task builder and never mutated afterwards: the offer/agent binding
/// (`offer_id`, `agent_id`, `agent_hostname`) is fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// `{unix-nanos}-{name}`.
    pub id: String,
    /// Explicit, or `{ordinal}.{app}.{run_as}.{cluster}`.
    pub name: String,
    pub app_id: String,
    pub version_id: String,

    pub image: String,
    pub network: NetworkMode,
    pub uris: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub port_mappings: Vec<PortMapping>,
    pub privileged: bool,
    pub force_pull_image: bool,
    pub env: Env,
    pub volumes: Vec<Volume>,
    pub labels: Labels,

    pub cpus: f64,
    pub mem: f64,
    pub disk: f64,

    pub kill_policy: Option<KillPolicy>,
    pub health_checks: Vec<HealthCheck>,

    pub offer_id: String,
    pub agent_id: String,
    pub agent_hostname: String,
}

impl Task {
    /// Value of a docker parameter, if the task carries one with this key.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.key() == key)
            .map(|p| p.value())
    }

    /// Declared port mapping with the given name.
    pub fn port_mapping(&self, name: &str) -> Option<&PortMapping> {
        self.port_mappings.iter().find(|m| m.name == name)
    }
}
