//! Log record and call-site types flowing through the enrichment pipeline.

use std::{fmt, time::Instant};

use time::UtcDateTime;

use crate::Level;

/// The location of an emit call, captured by the emit macros.
#[derive(Clone, Copy, Debug)]
pub struct CallSite {
    /// Full source path as compiled in (`file!()`).
    pub pathname: &'static str,

    /// 1-based line number of the emit call.
    pub lineno: u32,

    /// Path of the enclosing function.
    pub function: &'static str,
}

impl CallSite {
    /// The final component of [`pathname`][Self::pathname].
    pub fn filename(&self) -> &'static str {
        self.pathname
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.pathname)
    }
}

/// One log record: built per emit call, enriched once, formatted once.
#[derive(Clone, Debug)]
pub struct LogRecord<'a> {
    /// Name of the logger that produced the record.
    pub name: &'a str,

    /// Severity of the record.
    pub level: Level,

    /// Rendered message text.
    pub message: String,

    /// UTC timestamp at record creation.
    pub timestamp: UtcDateTime,

    /// Full source path of the emit call.
    pub pathname: &'static str,

    /// File name component of the emit call's source path.
    pub filename: &'static str,

    /// Line number of the emit call.
    pub lineno: u32,

    /// Path of the function containing the emit call.
    pub function: &'static str,

    /// Record creation time as whole seconds since the Unix epoch.
    pub created: i64,

    /// Milliseconds elapsed between logger construction and record creation.
    pub relative_created: u128,

    /// Logger identity copied in by enrichment.
    pub logger_id: String,

    /// Rendered stack trace, or empty when no frame handle was supplied.
    pub stack: String,

    /// Rendered source snippet, or empty when no frame handle was supplied.
    pub snippet: String,
}

impl<'a> LogRecord<'a> {
    /// Builds an un-enriched record for an emit call.
    pub fn new(
        name: &'a str,
        level: Level,
        message: fmt::Arguments<'_>,
        callsite: &CallSite,
        logger_started: Instant,
    ) -> Self {
        let timestamp = UtcDateTime::now();
        Self {
            name,
            level,
            message: message.to_string(),
            timestamp,
            pathname: callsite.pathname,
            filename: callsite.filename(),
            lineno: callsite.lineno,
            function: callsite.function,
            created: timestamp.unix_timestamp(),
            relative_created: logger_started.elapsed().as_millis(),
            logger_id: String::new(),
            stack: String::new(),
            snippet: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_last_path_component() {
        let callsite = CallSite {
            pathname: "crates/applog/src/record.rs",
            lineno: 1,
            function: "applog::record::tests",
        };
        assert_eq!(callsite.filename(), "record.rs");

        let windows = CallSite {
            pathname: r"crates\applog\src\record.rs",
            lineno: 1,
            function: "applog::record::tests",
        };
        assert_eq!(windows.filename(), "record.rs");
    }

    #[test]
    fn new_record_has_empty_enrichment_fields() {
        let callsite = CallSite {
            pathname: file!(),
            lineno: line!(),
            function: "applog::record::tests",
        };
        let record = LogRecord::new(
            "Default",
            Level::Info,
            format_args!("hello {}", 1),
            &callsite,
            Instant::now(),
        );
        assert_eq!(record.message, "hello 1");
        assert_eq!(record.logger_id, "");
        assert_eq!(record.stack, "");
        assert_eq!(record.snippet, "");
    }
}
