//! `applog` is a process-wide logging façade: every emitted record is tagged
//! with a runtime-settable logger identity, optionally carries stack-trace
//! and source-snippet context for a caller-supplied execution frame, and is
//! rendered into one fixed-column, `|\t|`-delimited line on standard output.
//!
//! It offers:
//! - Severity emit macros ([`debug!`], [`info!`], [`warning!`], [`error!`],
//!   [`critical!`]) plus [`exception!`] for logging an error with its cause
//!   chain and a traceback.
//! - A process-wide identity surface ([`set_id`] / [`get_id`]) whose value is
//!   copied into every subsequent record.
//! - An explicit enrichment pipeline ([`ContextEnricher`]) and a fixed line
//!   template ([`LineFormatter`]) that can be exercised directly against a
//!   custom [`MakeWriter`] destination.
//!
//! The severity threshold is read once from the `APPLOG_LEVEL` environment
//! variable when the global logger is first used; an unrecognized level name
//! aborts there rather than silently defaulting.
//!
//! # Example
//!
//! ```
//! applog::info!("service starting");
//! applog::set_id("request-7f3a");
//! applog::warning!("retrying upstream call, attempt {}", 2);
//! applog::set_id(""); // back to the default identity
//! ```

mod enricher;
mod formatter;
mod frame;
mod level;
mod logger;
mod macros;
mod record;
mod source;

use std::{env, io, sync::LazyLock};

pub use tracing_subscriber::fmt::MakeWriter;

pub use self::{
    enricher::{ContextEnricher, DEFAULT_LOGGER_ID},
    formatter::{Field, LineFormatter, DEFAULT_TEMPLATE, FIELD_SEPARATOR, LINE_SENTINEL, LINE_TAG},
    frame::FrameContext,
    level::Level,
    logger::Logger,
    record::{CallSite, LogRecord},
};

/// Environment variable naming the severity threshold of the global logger.
pub const LOG_LEVEL_ENV: &str = "APPLOG_LEVEL";

/// Name of the process-wide logger.
pub const DEFAULT_LOGGER_NAME: &str = "Default";

/// Errors that can occur within the logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The configured severity level does not name a known level.
    #[error("unrecognized log level `{0}`")]
    UnrecognizedLevel(String),
}

/// Reads the severity threshold from [`LOG_LEVEL_ENV`].
///
/// An unset variable yields [`Level::Debug`]; a set but unrecognized value is
/// an error, surfaced by the global logger as a startup failure.
///
/// # Errors
///
/// Returns [`LoggerError::UnrecognizedLevel`] when the variable is set to
/// something other than a known level name.
pub fn level_from_env() -> Result<Level, LoggerError> {
    match env::var(LOG_LEVEL_ENV) {
        Ok(value) => value.parse(),
        Err(env::VarError::NotPresent) => Ok(Level::Debug),
        Err(env::VarError::NotUnicode(value)) => Err(LoggerError::UnrecognizedLevel(
            value.to_string_lossy().into_owned(),
        )),
    }
}

static GLOBAL: LazyLock<Logger<fn() -> io::Stdout>> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // invalid configuration must abort at first use
    let level = level_from_env().expect("APPLOG_LEVEL must name a valid severity level");
    Logger::new(DEFAULT_LOGGER_NAME, level, io::stdout as fn() -> io::Stdout)
});

/// Returns the process-wide logger, constructing it on first use.
///
/// # Panics
///
/// Panics on first use when `APPLOG_LEVEL` is set to an unrecognized level
/// name; invalid configuration fails fast rather than being swallowed.
pub fn logger() -> &'static Logger<fn() -> io::Stdout> {
    &GLOBAL
}

/// Replaces the identity of the process-wide logger, effective immediately
/// for every subsequent emit from any thread. An empty value resets it to
/// [`DEFAULT_LOGGER_ID`].
pub fn set_id(id: impl Into<String>) {
    logger().set_id(id);
}

/// Returns the identity of the process-wide logger.
pub fn get_id() -> String {
    logger().get_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_defaults_to_debug() {
        // APPLOG_LEVEL is not set in the test environment.
        assert_eq!(level_from_env().ok(), Some(Level::Debug));
    }
}
