use serde::{Deserialize, Serialize};

use crate::wire::{AgentId, FrameworkId, OfferId, Resource};

/// Time-boxed grant of resources on one agent.
///
/// Not `Clone`: an offer is consumed exactly once, and the launch call takes it by value
/// so a launched offer cannot be used to build further descriptors.
#[derive(Debug, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_id: Option<FrameworkId>,
    pub agent_id: AgentId,
    pub hostname: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Offer {
    /// Sum of a scalar resource, `0.0` when absent.
    pub fn scalar(&self, name: &str) -> f64 {
        self.resources
            .iter()
            .filter(|r| r.name == name)
            .filter_map(|r| r.scalar)
            .map(|s| s.value)
            .sum()
    }
}
