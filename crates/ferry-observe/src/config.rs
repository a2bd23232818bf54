use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{format::LoggerFormat, level::LoggerLevel, timezone::LoggerTimeZone};

/// Logger configuration. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directives, e.g. `"ferry_core=debug,info"`.
    pub level: LoggerLevel,
    /// Timezone of record timestamps.
    pub tz: LoggerTimeZone,
    /// Print the record's target (module path).
    pub with_targets: bool,
    /// Colorize text output. Ignored unless stdout is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// `true` when color is enabled and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg: LoggerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.tz, LoggerTimeZone::Utc);
        assert_eq!(cfg.level.as_str(), "info");
        assert!(cfg.with_targets);
        assert!(cfg.use_color);
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let cfg: LoggerConfig =
            serde_json::from_str(r#"{"format": "json", "level": "ferry_core=debug,info", "tz": "local"}"#)
                .unwrap();

        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.level.as_str(), "ferry_core=debug,info");
        assert_eq!(cfg.tz, LoggerTimeZone::Local);
        assert!(cfg.with_targets);
    }

    #[test]
    fn invalid_level_fails_the_whole_config() {
        let res = serde_json::from_str::<LoggerConfig>(r#"{"level": "ferry_core=chatty"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn color_off_when_disabled() {
        let cfg = LoggerConfig {
            use_color: false,
            ..Default::default()
        };
        assert!(!cfg.should_use_color());
    }
}
