use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Protocol used to probe a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthProtocol {
    Http,
    Tcp,
}

impl FromStr for HealthProtocol {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(HealthProtocol::Http),
            "tcp" => Ok(HealthProtocol::Tcp),
            other => Err(ModelError::UnknownProtocol(other.to_string())),
        }
    }
}

/// Health check declared by a version.
///
/// The probed port is picked at launch time, in order of preference: the mapping named
/// `port_name`, the mapping whose container port equals `port`, the mapping at `port_index`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthCheck {
    /// `http` or `tcp`, case-insensitive. Anything else produces no check.
    pub protocol: String,
    /// Request path for HTTP checks.
    pub path: String,
    /// Container port to probe.
    pub port: u32,
    /// Index into the task's bound port mappings.
    ///
    /// Negative or out-of-range values are treated as `0`.
    pub port_index: i64,
    /// Name of a declared port mapping to probe.
    pub port_name: String,
    pub interval_seconds: f64,
    pub timeout_seconds: f64,
    pub max_consecutive_failures: u32,
    pub grace_period_seconds: f64,
}

impl HealthCheck {
    /// Parsed protocol of this check.
    pub fn protocol(&self) -> ModelResult<HealthProtocol> {
        self.protocol.parse()
    }
}
