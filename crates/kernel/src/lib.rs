//! Core of fmtlog: the [`Logger`] capability and the decorators that rewrite
//! format strings on their way to a base logger.
//!
//! ```
//! use fmtlog_kernel::{with_prefix, with_suffix, Logger, RecordingLogger};
//!
//! let base = RecordingLogger::new();
//! let logger = with_suffix(with_prefix(base.clone(), "prefix: "), ", suffix");
//! logger.warnf("Hello world", &[]);
//!
//! assert_eq!(base.records()[0].format, "prefix: Hello world, suffix");
//! ```

pub mod decorator;
pub mod formatter;
pub mod logger;
pub mod recording;
pub mod render;
pub mod settings;

pub use decorator::{decorate_all, with_prefix, with_suffix, FmtLogger, LoggerExt};
pub use formatter::{Formatter, ParseFormatterError};
pub use logger::{Level, Logger, Value};
pub use recording::{Record, RecordingLogger};
pub use render::render;
