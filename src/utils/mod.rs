//! Project-specific utilities live here.

use fmtlog_kernel::{with_prefix, FmtLogger, Logger};

/// Formats a shared log prefix for a module.
pub fn module_prefix(module: &str) -> String {
    format!("[{module}] ")
}

/// Wraps `logger` so every line is tagged with `module`.
pub fn for_module<L: Logger>(logger: L, module: &str) -> FmtLogger<L> {
    with_prefix(logger, module_prefix(module))
}
