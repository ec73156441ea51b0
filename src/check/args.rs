//! Argument binding and resolution for wrapped calls.
//!
//! A wrapper needs to know which of a call's arguments holds the frame
//! to validate. Bindings are collected in declaration order and the
//! lookup is an explicit, testable step rather than reflection.

use super::errors::{CheckError, CheckResult};
use crate::frame::Tabular;

/// Argument bundles that can expose their tabular bindings.
///
/// Implemented by the argument struct of a multi-argument function so
/// wrappers can resolve the frame to check by name.
pub trait TabularArgs {
    /// The call's tabular bindings, in declaration order.
    fn bindings(&self) -> CallArgs<'_>;
}

#[derive(Clone, Copy)]
struct Binding<'a> {
    name: Option<&'a str>,
    frame: &'a dyn Tabular,
}

/// The tabular arguments of one call, in declaration order.
#[derive(Default)]
pub struct CallArgs<'a> {
    bindings: Vec<Binding<'a>>,
}

impl<'a> CallArgs<'a> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// A call whose only tabular argument is `frame`.
    pub fn single(frame: &'a dyn Tabular) -> Self {
        Self::new().positional(frame)
    }

    /// Bind a named argument.
    pub fn bind(mut self, name: &'a str, frame: &'a dyn Tabular) -> Self {
        self.bindings.push(Binding {
            name: Some(name),
            frame,
        });
        self
    }

    /// Bind a positional (unnamed) argument.
    pub fn positional(mut self, frame: &'a dyn Tabular) -> Self {
        self.bindings.push(Binding { name: None, frame });
        self
    }

    /// Number of bound tabular arguments.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when the call binds no tabular argument.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Locate the binding to validate.
    ///
    /// With a name the match is exact. Without one the call must bind
    /// exactly one tabular argument; zero or several is a usage error
    /// raised before any validation runs.
    pub fn resolve(&self, name: Option<&str>) -> CheckResult<&'a dyn Tabular> {
        match name {
            Some(wanted) => self
                .bindings
                .iter()
                .find(|binding| binding.name == Some(wanted))
                .map(|binding| binding.frame)
                .ok_or_else(|| CheckError::UnknownArgument(wanted.to_string())),
            None => match self.bindings.as_slice() {
                [] => Err(CheckError::NoArgument),
                [only] => Ok(only.frame),
                many => Err(CheckError::AmbiguousArgument(many.len())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::MemFrame;

    fn frame() -> MemFrame {
        MemFrame::new([("Brand", "string")])
    }

    #[test]
    fn test_single_binding_resolves_unnamed() {
        let df = frame();
        let args = CallArgs::single(&df);
        assert!(args.resolve(None).is_ok());
    }

    #[test]
    fn test_empty_call_is_a_usage_error() {
        let args = CallArgs::new();
        assert_eq!(args.resolve(None).unwrap_err(), CheckError::NoArgument);
    }

    #[test]
    fn test_two_bindings_require_a_name() {
        let a = frame();
        let b = frame();
        let args = CallArgs::new().bind("left", &a).bind("right", &b);
        assert_eq!(
            args.resolve(None).unwrap_err(),
            CheckError::AmbiguousArgument(2)
        );
        assert!(args.resolve(Some("right")).is_ok());
    }

    #[test]
    fn test_unknown_name() {
        let df = frame();
        let args = CallArgs::new().bind("prices", &df);
        assert_eq!(
            args.resolve(Some("refs")).unwrap_err(),
            CheckError::UnknownArgument("refs".to_string())
        );
    }

    #[test]
    fn test_positional_binding_has_no_name() {
        let df = frame();
        let args = CallArgs::new().positional(&df);
        assert!(args.resolve(Some("df")).is_err());
        assert!(args.resolve(None).is_ok());
    }
}
