//! Wrapper combinators that run column checks around a function call.
//!
//! Each combinator takes a function and returns a new closure of the
//! same shape, running its check before (input) or after (output) the
//! delegate. The delegate's arguments and return value are never
//! altered. Because combinators also accept fallible delegates,
//! wrappers nest arbitrarily: the innermost wrapper runs nearest the
//! original body, and each performs its own check without shared state.

use super::args::{CallArgs, TabularArgs};
use super::errors::CheckResult;
use crate::frame::Tabular;
use crate::schema::{ColumnCheck, ColumnSpec};

/// Input-side check: validates a tabular argument before the body runs.
#[derive(Debug, Clone)]
pub struct InputCheck {
    name: Option<String>,
    check: ColumnCheck,
}

impl InputCheck {
    /// Create a check from any column declaration.
    pub fn new(columns: impl Into<ColumnSpec>) -> Self {
        Self {
            name: None,
            check: ColumnCheck::new(columns),
        }
    }

    /// Check the argument bound to `name` instead of the single
    /// positional one. Required when a call binds several frames.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Reject undeclared columns.
    pub fn strict(mut self) -> Self {
        self.check = self.check.strict();
        self
    }

    /// Resolve the bound argument and validate it.
    pub fn run(&self, args: &CallArgs<'_>) -> CheckResult<()> {
        let frame = args.resolve(self.name.as_deref())?;
        self.check.check(frame)?;
        Ok(())
    }

    /// Wrap a function of one tabular argument. The argument is
    /// validated first; the body runs only on success, with the
    /// argument unchanged.
    pub fn wrap<T, R, F>(self, func: F) -> impl Fn(&T) -> CheckResult<R>
    where
        T: Tabular,
        F: Fn(&T) -> R,
    {
        self.wrap_fallible(move |frame: &T| Ok(func(frame)))
    }

    /// Wrap an already-fallible function, for nesting wrappers.
    pub fn wrap_fallible<T, R, F>(self, func: F) -> impl Fn(&T) -> CheckResult<R>
    where
        T: Tabular,
        F: Fn(&T) -> CheckResult<R>,
    {
        move |frame: &T| {
            self.run(&CallArgs::single(frame))?;
            func(frame)
        }
    }

    /// Wrap a function whose arguments need explicit binding.
    ///
    /// The argument bundle exposes its tabular bindings through
    /// [`TabularArgs`]; resolution then picks the configured one.
    pub fn wrap_args<A, R, F>(self, func: F) -> impl Fn(&A) -> CheckResult<R>
    where
        A: TabularArgs,
        F: Fn(&A) -> CheckResult<R>,
    {
        move |args: &A| {
            self.run(&args.bindings())?;
            func(args)
        }
    }
}

/// Output-side check: validates the return value after the body runs.
#[derive(Debug, Clone)]
pub struct OutputCheck {
    check: ColumnCheck,
}

impl OutputCheck {
    /// Create a check from any column declaration.
    pub fn new(columns: impl Into<ColumnSpec>) -> Self {
        Self {
            check: ColumnCheck::new(columns),
        }
    }

    /// Reject undeclared columns.
    pub fn strict(mut self) -> Self {
        self.check = self.check.strict();
        self
    }

    /// Validate a produced frame.
    pub fn run(&self, frame: &dyn Tabular) -> CheckResult<()> {
        self.check.check(frame)?;
        Ok(())
    }

    /// Wrap a function returning a frame.
    pub fn wrap<T, R, F>(self, func: F) -> impl Fn(&T) -> CheckResult<R>
    where
        R: Tabular,
        F: Fn(&T) -> R,
    {
        self.wrap_fallible(move |arg: &T| Ok(func(arg)))
    }

    /// Wrap an already-fallible function. The body runs first; its
    /// value is returned unchanged only when the check passes.
    pub fn wrap_fallible<T, R, F>(self, func: F) -> impl Fn(&T) -> CheckResult<R>
    where
        R: Tabular,
        F: Fn(&T) -> CheckResult<R>,
    {
        move |arg: &T| {
            let result = func(arg)?;
            self.run(&result)?;
            Ok(result)
        }
    }
}
