//! Write sink that records only the first failure.
//!
//! Rendering keeps appending after a failed write so the assembled text is as
//! complete as the sink allows; the first error is reported once at the end.

use std::fmt::{self, Write};

/// Wraps a [`fmt::Write`] sink and remembers its first error.
#[derive(Debug)]
pub struct SourceWriter<W> {
    sink: W,
    first_error: Option<fmt::Error>,
}

impl<W: Write> SourceWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            first_error: None,
        }
    }

    /// Writes a literal string.
    pub fn w(&mut self, s: &str) {
        let result = self.sink.write_str(s);
        self.record(result);
    }

    /// Writes formatted arguments, as produced by `format_args!`.
    pub fn f(&mut self, args: fmt::Arguments<'_>) {
        let result = self.sink.write_fmt(args);
        self.record(result);
    }

    fn record(&mut self, result: fmt::Result) {
        if let Err(e) = result {
            self.first_error.get_or_insert(e);
        }
    }

    pub fn has_failed(&self) -> bool {
        self.first_error.is_some()
    }

    /// Returns the sink together with the first recorded failure.
    pub fn finish(self) -> (W, Option<fmt::Error>) {
        (self.sink, self.first_error)
    }
}
