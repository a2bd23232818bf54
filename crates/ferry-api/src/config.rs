use ferry_model::wire::FrameworkId;
use serde::{Deserialize, Serialize};

/// Connection settings for the master's scheduler endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterConfig {
    /// Base URL of the master, e.g. `http://master.dc1:5050`.
    pub endpoint: String,
    /// Framework id assigned by the master on subscription.
    pub framework_id: String,
    /// Stream id of the subscription, sent as `Mesos-Stream-Id` when set.
    pub stream_id: Option<String>,
    /// Per-request timeout. No timeout when unset.
    pub timeout_ms: Option<u64>,
}

impl MasterConfig {
    pub fn framework(&self) -> FrameworkId {
        FrameworkId::new(self.framework_id.as_str())
    }
}
