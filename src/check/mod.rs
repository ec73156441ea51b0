//! Function-boundary checks: wrapper combinators, argument resolution,
//! and descriptive frame logging.

pub mod args;
pub mod errors;
pub mod log;
pub mod wrap;

pub use args::{CallArgs, TabularArgs};
pub use errors::{CheckError, CheckResult};
pub use log::{FrameLog, LogSink, MemorySink, StdoutSink};
pub use wrap::{InputCheck, OutputCheck};
