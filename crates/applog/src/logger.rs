//! The logger pipeline: threshold check, record construction, enrichment,
//! formatting, and the single write to the output stream.

use std::{
    error::Error,
    fmt,
    fmt::Write as _,
    io::Write as _,
    time::Instant,
};

use tracing_subscriber::fmt::MakeWriter;

use crate::{
    enricher::ContextEnricher,
    formatter::LineFormatter,
    frame::FrameContext,
    record::{CallSite, LogRecord},
    Level,
};

/// A severity-filtered logger rendering enriched records into fixed-format
/// lines on a [`MakeWriter`] destination.
///
/// The process-wide instance behind the emit macros is created lazily by
/// [`logger()`][crate::logger]; constructing one directly is mainly useful in
/// tests, where the writer can be an in-memory buffer.
pub struct Logger<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    name: &'static str,
    level: Level,
    started: Instant,
    enricher: ContextEnricher,
    formatter: LineFormatter,
    writer: W,
}

impl<W> fmt::Debug for Logger<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl<W> Logger<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    /// Creates a logger writing to `writer` with the given severity
    /// threshold.
    pub fn new(name: &'static str, level: Level, writer: W) -> Self {
        Self {
            name,
            level,
            started: Instant::now(),
            enricher: ContextEnricher::new(),
            formatter: LineFormatter::new(),
            writer,
        }
    }

    /// The configured severity threshold.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether a record at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Replaces the logger identity. An empty value resets it to
    /// [`DEFAULT_LOGGER_ID`][crate::DEFAULT_LOGGER_ID].
    pub fn set_id(&self, id: impl Into<String>) {
        self.enricher.set_identity(id);
    }

    /// Returns the logger identity currently in effect.
    pub fn get_id(&self) -> String {
        self.enricher.identity()
    }

    /// Emits one record: builds it, enriches it, renders it, writes it.
    ///
    /// Passing a frame handle attaches stack and snippet context to the
    /// record; whether those fields reach the output is decided by the line
    /// template, not here.
    pub fn log(
        &self,
        level: Level,
        message: fmt::Arguments<'_>,
        callsite: &CallSite,
        frame: Option<&FrameContext>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let mut record = LogRecord::new(self.name, level, message, callsite, self.started);
        self.enricher.enrich(&mut record, frame);
        let line = self.formatter.format(&record);
        self.write_line(&line, None);
    }

    /// Emits `message` at ERROR severity with the error's display, its
    /// `source()` chain, and a stack capture of the call site appended after
    /// the rendered line.
    pub fn log_error<E>(&self, error: &E, message: fmt::Arguments<'_>, callsite: &CallSite)
    where
        E: Error + ?Sized,
    {
        if !self.enabled(Level::Error) {
            return;
        }
        let mut record = LogRecord::new(self.name, Level::Error, message, callsite, self.started);
        self.enricher.enrich(&mut record, None);
        let line = self.formatter.format(&record);
        let trace = render_error_trace(error, callsite);
        self.write_line(&line, Some(&trace));
    }

    /// Flush one rendered line (plus an optional multi-line trailer) into the
    /// output stream with a trailing newline.
    ///
    /// Done with a single `write_all` call to avoid fragmentation of the line
    /// under multithreading. A failed write is dropped; a log call never
    /// fails.
    fn write_line(&self, line: &str, trailer: Option<&str>) {
        let mut buffer = Vec::with_capacity(line.len() + 1);
        buffer.extend_from_slice(line.as_bytes());
        if let Some(trailer) = trailer {
            buffer.push(b'\n');
            buffer.extend_from_slice(trailer.trim_end().as_bytes());
        }
        buffer.push(b'\n');
        let _ = self.writer.make_writer().write_all(&buffer);
    }
}

/// Renders an error's display, its cause chain, and a call-site stack capture
/// in the shape of a traceback.
fn render_error_trace<E>(error: &E, callsite: &CallSite) -> String
where
    E: Error + ?Sized,
{
    let mut out = String::new();
    let _ = writeln!(out, "{error}");
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = writeln!(out, "Caused by: {cause}");
        source = cause.source();
    }
    out.push_str("Stack (most recent call first):\n");
    out.push_str(&FrameContext::from_callsite(callsite).render_stack());
    out
}
