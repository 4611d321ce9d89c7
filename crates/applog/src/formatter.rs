//! The fixed, delimiter-separated line format applied to enriched records.

use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::record::LogRecord;

/// Literal separator between fields of a rendered line.
pub const FIELD_SEPARATOR: &str = "|\t|";

/// Literal tag opening every rendered line.
pub const LINE_TAG: &str = "APPLOG:";

/// Trailing token marking the end of a rendered line for downstream parsers.
pub const LINE_SENTINEL: &str = ";;;";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A placeholder in the line template, mapped to one record field or literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// The literal [`LINE_TAG`].
    Tag,

    /// Logger name.
    Name,

    /// Logger identity at enrichment time.
    LoggerId,

    /// Upper-case level name.
    LevelName,

    /// Timestamp, `YYYY-MM-DD HH:MM:SS` (UTC).
    Timestamp,

    /// Message text.
    Message,

    /// Full source path of the emit call.
    Pathname,

    /// File name of the emit call.
    Filename,

    /// Line number of the emit call.
    Lineno,

    /// Function containing the emit call.
    FuncName,

    /// Record creation time, whole seconds since the Unix epoch.
    Created,

    /// Milliseconds between logger construction and record creation.
    RelativeCreated,

    /// Rendered stack trace.
    Stack,

    /// Rendered source snippet.
    Snippet,

    /// The literal [`LINE_SENTINEL`].
    Sentinel,
}

/// The active output template.
///
/// `Stack` and `Snippet` are computed for every enriched record but stay out
/// of the rendered line; add them here to expose them.
pub const DEFAULT_TEMPLATE: &[Field] = &[
    Field::Tag,
    Field::Name,
    Field::LoggerId,
    Field::LevelName,
    Field::Timestamp,
    Field::Message,
    Field::Pathname,
    Field::Filename,
    Field::Lineno,
    Field::FuncName,
    Field::Created,
    Field::RelativeCreated,
    Field::Sentinel,
];

/// Stateless transform of an enriched record into one line of text.
#[derive(Clone, Copy, Debug)]
pub struct LineFormatter {
    template: &'static [Field],
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFormatter {
    /// Creates a formatter using [`DEFAULT_TEMPLATE`].
    pub const fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE,
        }
    }

    /// Creates a formatter with a custom field template.
    pub const fn with_template(template: &'static [Field]) -> Self {
        Self { template }
    }

    /// Renders `record` into a single line, without a trailing newline.
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        let parts: Vec<String> = self
            .template
            .iter()
            .map(|field| match field {
                Field::Tag => LINE_TAG.to_owned(),
                Field::Name => record.name.to_owned(),
                Field::LoggerId => record.logger_id.clone(),
                Field::LevelName => record.level.to_string(),
                Field::Timestamp => record
                    .timestamp
                    .format(&TIMESTAMP_FORMAT)
                    .unwrap_or_default(),
                Field::Message => record.message.clone(),
                Field::Pathname => record.pathname.to_owned(),
                Field::Filename => record.filename.to_owned(),
                Field::Lineno => record.lineno.to_string(),
                Field::FuncName => record.function.to_owned(),
                Field::Created => record.created.to_string(),
                Field::RelativeCreated => record.relative_created.to_string(),
                Field::Stack => record.stack.clone(),
                Field::Snippet => record.snippet.clone(),
                Field::Sentinel => LINE_SENTINEL.to_owned(),
            })
            .collect();
        parts.join(FIELD_SEPARATOR)
    }
}
