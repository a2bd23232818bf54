use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::RESERVED_OVERLAY_NETWORK;

/// Container networking requested by a version.
///
/// Parsed once from its string form; the launch pipeline only ever matches on the variant.
///
/// | string             | variant            |
/// |--------------------|--------------------|
/// | `NONE`             | `Isolated`         |
/// | `HOST`             | `Host`             |
/// | `BRIDGE`           | `Bridge`           |
/// | reserved overlay   | `Overlay(name)`    |
/// | anything else      | `Isolated`         |
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NetworkMode {
    /// No network access.
    #[default]
    Isolated,
    /// Share the agent's network namespace.
    Host,
    /// Docker bridge; every declared port gets a host port from the offer.
    Bridge,
    /// User-defined network attached by name; container ports are routable directly.
    Overlay(String),
}

impl NetworkMode {
    /// Attach to a named overlay network.
    pub fn overlay(name: impl Into<String>) -> Self {
        NetworkMode::Overlay(name.into())
    }

    /// Parse the string form. Never fails: unrecognized values are isolated.
    pub fn parse(s: &str) -> Self {
        match s {
            "NONE" => NetworkMode::Isolated,
            "HOST" => NetworkMode::Host,
            "BRIDGE" => NetworkMode::Bridge,
            RESERVED_OVERLAY_NETWORK => NetworkMode::overlay(RESERVED_OVERLAY_NETWORK),
            _ => NetworkMode::Isolated,
        }
    }
}

impl From<String> for NetworkMode {
    fn from(s: String) -> Self {
        NetworkMode::parse(&s)
    }
}

impl From<NetworkMode> for String {
    fn from(m: NetworkMode) -> Self {
        m.to_string()
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMode::Isolated => f.write_str("NONE"),
            NetworkMode::Host => f.write_str("HOST"),
            NetworkMode::Bridge => f.write_str("BRIDGE"),
            NetworkMode::Overlay(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NetworkMode;

    #[test]
    fn parses_known_modes() {
        assert_eq!(NetworkMode::parse("NONE"), NetworkMode::Isolated);
        assert_eq!(NetworkMode::parse("HOST"), NetworkMode::Host);
        assert_eq!(NetworkMode::parse("BRIDGE"), NetworkMode::Bridge);
        assert_eq!(NetworkMode::parse("ferry"), NetworkMode::overlay("ferry"));
    }

    #[test]
    fn unknown_mode_is_isolated() {
        for raw in ["", "bridge", "macvlan", "weave"] {
            assert_eq!(
                NetworkMode::parse(raw),
                NetworkMode::Isolated,
                "expected {raw:?} to fall back to isolated"
            );
        }
    }

    #[test]
    fn serde_uses_string_form() {
        let mode: NetworkMode = serde_json::from_str(r#""BRIDGE""#).unwrap();
        assert_eq!(mode, NetworkMode::Bridge);
        assert_eq!(
            serde_json::to_string(&NetworkMode::overlay("ferry")).unwrap(),
            r#""ferry""#
        );
    }
}
