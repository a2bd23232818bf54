use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// How instances of an application are placed.
///
/// - `Fixed`: every instance is pinned to an address taken from the version's IP pool.
/// - `Elastic`: instances get whatever networking their offer provides.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlacementMode {
    Fixed,
    #[default]
    Elastic,
}

impl PlacementMode {
    pub fn is_fixed(&self) -> bool {
        matches!(self, PlacementMode::Fixed)
    }
}

impl FromStr for PlacementMode {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(PlacementMode::Fixed),
            "elastic" | "replicates" | "" => Ok(PlacementMode::Elastic),
            other => Err(ModelError::UnknownPlacementMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for PlacementMode {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        s.parse()
    }
}

impl From<PlacementMode> for String {
    fn from(m: PlacementMode) -> Self {
        m.to_string()
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlacementMode::Fixed => "fixed",
            PlacementMode::Elastic => "elastic",
        })
    }
}

/// Persisted application record.
///
/// `instances` is the number of auto-named tasks created so far. It is owned by the
/// application store and only advanced through it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub run_as: String,
    pub cluster_id: String,
    #[serde(default)]
    pub instances: u64,
    #[serde(default)]
    pub mode: PlacementMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_mode_parses_case_insensitive() {
        assert_eq!("FIXED".parse::<PlacementMode>().unwrap(), PlacementMode::Fixed);
        assert_eq!("replicates".parse::<PlacementMode>().unwrap(), PlacementMode::Elastic);
        assert!("sticky".parse::<PlacementMode>().is_err());
    }

    #[test]
    fn application_defaults_to_elastic_with_zero_instances() {
        let app: Application =
            serde_json::from_str(r#"{"id":"web","runAs":"ops","clusterId":"dc1"}"#).unwrap();
        assert_eq!(app.instances, 0);
        assert_eq!(app.mode, PlacementMode::Elastic);
    }

    #[test]
    fn unknown_mode_fails_deserialization() {
        let res = serde_json::from_str::<Application>(
            r#"{"id":"web","runAs":"ops","clusterId":"dc1","mode":"sticky"}"#,
        );
        assert!(res.is_err());
    }
}
