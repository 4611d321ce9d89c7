//! Execution-frame handles: the optional context captured at an emit call
//! from which stack traces and source snippets are derived.

use std::{fmt::Write, panic::Location, path::Path};

use backtrace::{Backtrace, BacktraceSymbol};

use crate::{record::CallSite, source};

/// A handle to the call stack at a specific execution point.
///
/// Capture one at the point of interest and pass it to an emit macro through
/// its `inspect` arm:
///
/// ```
/// use applog::FrameContext;
///
/// let frame = FrameContext::capture();
/// applog::debug!(inspect = frame, "checkpoint reached");
/// ```
#[derive(Debug)]
pub struct FrameContext {
    file: &'static str,
    line: u32,
    backtrace: Backtrace,
}

impl FrameContext {
    /// Captures the current call stack. The capture location becomes the
    /// origin for stack and snippet rendering.
    #[must_use]
    #[track_caller]
    pub fn capture() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            backtrace: Backtrace::new(),
        }
    }

    /// Captures the current call stack with `callsite` as the origin.
    #[must_use]
    pub fn from_callsite(callsite: &CallSite) -> Self {
        Self {
            file: callsite.pathname,
            line: callsite.lineno,
            backtrace: Backtrace::new(),
        }
    }

    /// Source file of the origin, as compiled in.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// 1-based line number of the origin.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Renders every frame from the origin outward, one entry per frame:
    /// file, line, function, and the source line when it can be read.
    ///
    /// Frames above the origin (the capture machinery itself) are skipped by
    /// matching the origin file and line. If the origin frame cannot be
    /// located, the full capture is rendered instead.
    pub(crate) fn render_stack(&self) -> String {
        let mut out = String::new();
        let mut reached_origin = false;

        for frame in self.backtrace.frames() {
            for symbol in frame.symbols() {
                if !reached_origin {
                    let at_origin = symbol
                        .filename()
                        .is_some_and(|path| path.ends_with(self.file))
                        && symbol.lineno() == Some(self.line);
                    if !at_origin {
                        continue;
                    }
                    reached_origin = true;
                }
                push_frame_entry(&mut out, symbol);
            }
        }

        if !reached_origin {
            out.clear();
            for frame in self.backtrace.frames() {
                for symbol in frame.symbols() {
                    push_frame_entry(&mut out, symbol);
                }
            }
        }
        out
    }

    /// Renders the source window around the origin line.
    pub(crate) fn render_snippet(&self) -> String {
        source::snippet(Path::new(self.file), self.line, source::SNIPPET_WINDOW)
    }
}

fn push_frame_entry(out: &mut String, symbol: &BacktraceSymbol) {
    let name = symbol
        .name()
        .map_or_else(|| String::from("<unknown>"), |name| name.to_string());

    match (symbol.filename(), symbol.lineno()) {
        (Some(file), Some(line)) => {
            let _ = writeln!(out, "  File \"{}\", line {line}, in {name}", file.display());
            if let Some(text) = source::line(file, line) {
                let _ = writeln!(out, "    {}", text.trim());
            }
        }
        _ => {
            let _ = writeln!(out, "  {name}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_the_call_location() {
        let frame = FrameContext::capture();
        assert!(frame.file().ends_with("frame.rs"));
        assert!(frame.line() > 0);
    }

    #[test]
    fn rendered_stack_is_never_empty_in_a_test_build() {
        let frame = FrameContext::capture();
        let stack = frame.render_stack();
        assert!(!stack.is_empty());
    }

    #[test]
    fn snippet_degrades_to_empty_for_a_missing_file() {
        let callsite = CallSite {
            pathname: "no/such/source/file.rs",
            lineno: 42,
            function: "applog::frame::tests",
        };
        let frame = FrameContext::from_callsite(&callsite);
        assert_eq!(frame.render_snippet(), "");
    }
}
