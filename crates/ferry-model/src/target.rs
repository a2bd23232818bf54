use std::fmt;

use serde::{Deserialize, Serialize};

/// Reachable endpoint of a placed task, as handed to the proxy layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub app_id: String,
    pub version_id: String,
    pub task_id: String,
    pub task_ip: String,
    pub task_port: u32,
    pub port_name: String,
    pub weight: f64,
}

impl Target {
    /// Default balancing weight of a freshly placed endpoint.
    pub const DEFAULT_WEIGHT: f64 = 100.0;

    /// `http://{ip}:{port}` base address of this endpoint.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.task_ip, self.task_port)
    }
}

/// Kind of change announced to the proxy layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetChange {
    Add,
    Del,
    Update,
}

impl fmt::Display for TargetChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetChange::Add => "add",
            TargetChange::Del => "del",
            TargetChange::Update => "update",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetChangeEvent {
    pub change: TargetChange,
    #[serde(flatten)]
    pub target: Target,
}

impl fmt::Display for TargetChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.target;
        write!(
            f,
            "{{{}: app:{} task:{} ip:{}:{} weight:{}}}",
            self.change, t.app_id, t.task_id, t.task_ip, t.task_port, t.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target {
            app_id: "web".into(),
            version_id: "v1".into(),
            task_id: "1-0.web.ops.dc1".into(),
            task_ip: "10.0.0.5".into(),
            task_port: 31000,
            port_name: "http".into(),
            weight: Target::DEFAULT_WEIGHT,
        }
    }

    #[test]
    fn url_uses_ip_and_port() {
        assert_eq!(target().url(), "http://10.0.0.5:31000");
    }

    #[test]
    fn change_event_display_is_compact() {
        let ev = TargetChangeEvent {
            change: TargetChange::Add,
            target: target(),
        };
        assert_eq!(
            ev.to_string(),
            "{add: app:web task:1-0.web.ops.dc1 ip:10.0.0.5:31000 weight:100}"
        );
    }

    #[test]
    fn change_event_serializes_flat() {
        let ev = TargetChangeEvent {
            change: TargetChange::Del,
            target: target(),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["change"], "del");
        assert_eq!(json["task_port"], 31000);
    }

    #[test]
    fn target_serializes_exact_field_set() {
        let json = serde_json::to_value(target()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "app_id", "port_name", "task_id", "task_ip", "task_port", "version_id", "weight",
            ]
        );
    }
}
