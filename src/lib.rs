//! fmtlog
//!
//! Decorating loggers that prepend or append fixed text to every format
//! string before it reaches the wrapped logger.

pub mod utils;

pub use fmtlog_kernel::*;
pub use fmtlog_telemetry::{ConsoleLogger, TracingLogger};
