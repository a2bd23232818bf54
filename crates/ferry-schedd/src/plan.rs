use std::{fs, path::Path};

use anyhow::Context;
use ferry_api::MasterConfig;
use ferry_model::{
    Application, Offer, Task, Version,
    wire::{Resource, TaskInfo},
};
use ferry_observe::LoggerConfig;
use serde::Deserialize;

/// One launch round: the offer to consume and the versions to place on it.
#[derive(Debug, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub logger: LoggerConfig,
    #[serde(default)]
    pub master: MasterConfig,
    /// Seeds the in-memory application store.
    #[serde(default)]
    pub applications: Vec<Application>,
    /// One task is built per entry, in order.
    pub versions: Vec<Version>,
    pub offer: Offer,
    /// Print the accept call instead of sending it.
    #[serde(default)]
    pub dry_run: bool,
}

impl Plan {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read plan {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("invalid plan {}", path.display()))
    }
}

/// Scalar resources claimed by `task`; zero amounts are not claimed.
pub fn scalar_resources(task: &Task) -> Vec<Resource> {
    [("cpus", task.cpus), ("mem", task.mem), ("disk", task.disk)]
        .into_iter()
        .filter(|(_, amount)| *amount > 0.0)
        .map(|(name, amount)| Resource::scalar(name, amount))
        .collect()
}

/// Scalar resources the descriptors claim beyond what `offer` grants, as
/// `(name, claimed, offered)`.
pub fn overcommitted(offer: &Offer, task_infos: &[TaskInfo]) -> Vec<(&'static str, f64, f64)> {
    ["cpus", "mem", "disk"]
        .into_iter()
        .filter_map(|name| {
            let claimed: f64 = task_infos
                .iter()
                .flat_map(|info| &info.resources)
                .filter(|r| r.name == name)
                .filter_map(|r| r.scalar)
                .map(|s| s.value)
                .sum();
            let offered = offer.scalar(name);
            (claimed > offered).then_some((name, claimed, offered))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"{
        "master": {"endpoint": "http://master:5050", "framework_id": "fw-1"},
        "applications": [
            {"id": "web", "runAs": "ops", "clusterId": "dc1", "instances": 0, "mode": "elastic"}
        ],
        "versions": [{
            "id": "v1",
            "appId": "web",
            "cpus": 0.5,
            "mem": 128,
            "container": {"docker": {
                "image": "nginx:1.25",
                "network": "BRIDGE",
                "portMappings": [{"containerPort": 80, "protocol": "tcp", "name": "http"}]
            }}
        }],
        "offer": {
            "id": {"value": "offer-1"},
            "agent_id": {"value": "agent-1"},
            "hostname": "node-1.dc1",
            "resources": [{"name": "ports", "type": "RANGES", "ranges": {"range": [{"begin": 31000, "end": 31005}]}}]
        }
    }"#;

    #[test]
    fn parses_plan_with_defaults() {
        let plan: Plan = serde_json::from_str(PLAN).unwrap();

        assert_eq!(plan.master.framework_id, "fw-1");
        assert_eq!(plan.applications.len(), 1);
        assert_eq!(plan.versions[0].container.docker.port_mappings.len(), 1);
        assert_eq!(plan.offer.hostname, "node-1.dc1");
        assert!(!plan.dry_run);
        assert_eq!(plan.logger.level.as_str(), "info");
    }

    #[test]
    fn flags_claims_beyond_offer() {
        let offer = Offer {
            resources: vec![Resource::scalar("cpus", 1.0), Resource::scalar("mem", 512.0)],
            ..serde_json::from_str::<Plan>(PLAN).unwrap().offer
        };
        let info = |cpus: f64, mem: f64| TaskInfo {
            name: "t".into(),
            task_id: ferry_model::wire::TaskId::new("t"),
            agent_id: ferry_model::wire::AgentId::new("agent-1"),
            resources: vec![Resource::scalar("cpus", cpus), Resource::scalar("mem", mem)],
            command: None,
            container: None,
            health_check: None,
            labels: None,
        };

        assert!(overcommitted(&offer, &[info(0.5, 128.0), info(0.5, 128.0)]).is_empty());
        assert_eq!(
            overcommitted(&offer, &[info(0.75, 128.0), info(0.5, 128.0)]),
            vec![("cpus", 1.25, 1.0)]
        );
    }

    #[test]
    fn missing_plan_file_is_reported() {
        let err = Plan::load("/nonexistent/ferry-plan.json").unwrap_err();
        assert!(err.to_string().contains("failed to read plan"));
    }
}
