//! Descriptive frame logging around wrapped calls.
//!
//! Logging is an independent concern: it reuses the same argument
//! extraction as the checks but only describes what it sees. It never
//! fails a call and never alters a return value.

use std::sync::{Arc, Mutex};

use super::errors::CheckResult;
use crate::frame::{render_list, Tabular};

/// Destination for log lines. Synchronous, one line per event.
pub trait LogSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Default sink: stdout.
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Capture sink, used by tests to assert on emitted lines.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock poisoned").clone()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .expect("sink lock poisoned")
            .push(line.to_string());
    }
}

/// Describes a frame for a log line: `columns: ['A', 'B']`, with
/// ` with dtypes ['x', 'y']` appended when requested.
pub(crate) fn describe_frame(frame: &dyn Tabular, include_dtypes: bool) -> String {
    let mut description = format!("columns: {}", render_list(&frame.columns()));
    if include_dtypes {
        description.push_str(&format!(" with dtypes {}", render_list(&frame.dtypes())));
    }
    description
}

/// Logs the frames a wrapped function consumes and produces.
pub struct FrameLog {
    function: String,
    include_dtypes: bool,
    sink: Arc<dyn LogSink>,
}

impl FrameLog {
    /// Log for the named function, to stdout.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            include_dtypes: false,
            sink: Arc::new(StdoutSink),
        }
    }

    /// Also report each column's dtype.
    pub fn include_dtypes(mut self) -> Self {
        self.include_dtypes = true;
        self
    }

    /// Send lines to `sink` instead of stdout.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Describe a consumed frame.
    pub fn log_input(&self, frame: &dyn Tabular) {
        self.sink.emit(&format!(
            "Function {} parameters contained a DataFrame: {}",
            self.function,
            describe_frame(frame, self.include_dtypes)
        ));
    }

    /// Describe a produced frame.
    pub fn log_output(&self, frame: &dyn Tabular) {
        self.sink.emit(&format!(
            "Function {} returned a DataFrame: {}",
            self.function,
            describe_frame(frame, self.include_dtypes)
        ));
    }

    /// Wrap a function, describing its input and output frames.
    pub fn wrap<T, R, F>(self, func: F) -> impl Fn(&T) -> CheckResult<R>
    where
        T: Tabular,
        R: Tabular,
        F: Fn(&T) -> R,
    {
        self.wrap_fallible(move |frame: &T| Ok(func(frame)))
    }

    /// Wrap an already-fallible function. The output line is emitted
    /// only when a value was actually produced; errors from inner
    /// wrappers pass through untouched.
    pub fn wrap_fallible<T, R, F>(self, func: F) -> impl Fn(&T) -> CheckResult<R>
    where
        T: Tabular,
        R: Tabular,
        F: Fn(&T) -> CheckResult<R>,
    {
        move |frame: &T| {
            self.log_input(frame);
            let result = func(frame)?;
            self.log_output(&result);
            Ok(result)
        }
    }
}
