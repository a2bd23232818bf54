//! Logging setup for ferry binaries.
mod config;
mod error;
mod format;
mod install;
mod level;
mod timer;
mod timezone;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::LoggerFormat;
pub use level::LoggerLevel;
pub use timer::LoggerRfc3339;
pub use timezone::{LoggerTimeZone, init_local_offset};

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Can succeed once per process; later calls return [`LoggerError::AlreadyInitialized`].
/// With [`LoggerTimeZone::Local`], call [`init_local_offset`] first, before any thread
/// is spawned.
///
/// ```rust
/// use ferry_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).unwrap();
/// tracing::info!("ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => install::text(cfg),
        LoggerFormat::Json => install::json(cfg),
        LoggerFormat::Journald => install::journald(cfg),
    }
}
