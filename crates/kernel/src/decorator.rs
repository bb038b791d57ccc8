//! Decorating loggers that rewrite format strings before delegating.

use crate::formatter::Formatter;
use crate::logger::{Logger, Value};

/// Applies one [`Formatter`] to every format string, then hands the call to
/// the wrapped logger with the arguments untouched.
///
/// Nesting builds a delegation chain: the outermost decorator formats first
/// and each inner decorator transforms the string it receives.
#[derive(Debug, Clone)]
pub struct FmtLogger<L> {
    inner: L,
    formatter: Formatter,
}

impl<L: Logger> FmtLogger<L> {
    pub fn new(inner: L, formatter: Formatter) -> Self {
        Self { inner, formatter }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }
}

impl<L: Logger> Logger for FmtLogger<L> {
    fn infof(&self, format: &str, args: &[Value]) {
        self.inner.infof(&self.formatter.format(format), args)
    }

    fn warnf(&self, format: &str, args: &[Value]) {
        self.inner.warnf(&self.formatter.format(format), args)
    }

    fn errorf(&self, format: &str, args: &[Value]) {
        self.inner.errorf(&self.formatter.format(format), args)
    }
}

/// Wrap `inner` so every format string gets `prefix` prepended.
pub fn with_prefix<L: Logger>(inner: L, prefix: impl Into<String>) -> FmtLogger<L> {
    FmtLogger::new(inner, Formatter::prefix(prefix))
}

/// Wrap `inner` so every format string gets `suffix` appended.
pub fn with_suffix<L: Logger>(inner: L, suffix: impl Into<String>) -> FmtLogger<L> {
    FmtLogger::new(inner, Formatter::suffix(suffix))
}

/// Fold `formatters` over `base`, first formatter innermost.
///
/// For chains whose shape is only known at runtime. An empty sequence
/// returns `base` as is.
pub fn decorate_all<'a, I>(base: Box<dyn Logger + 'a>, formatters: I) -> Box<dyn Logger + 'a>
where
    I: IntoIterator<Item = Formatter>,
{
    formatters
        .into_iter()
        .fold(base, |inner, formatter| -> Box<dyn Logger + 'a> {
            Box::new(FmtLogger::new(inner, formatter))
        })
}

/// Method-chaining constructors for any logger.
pub trait LoggerExt: Logger + Sized {
    fn with_prefix(self, prefix: impl Into<String>) -> FmtLogger<Self> {
        with_prefix(self, prefix)
    }

    fn with_suffix(self, suffix: impl Into<String>) -> FmtLogger<Self> {
        with_suffix(self, suffix)
    }

    fn decorate(self, formatter: Formatter) -> FmtLogger<Self> {
        FmtLogger::new(self, formatter)
    }
}

impl<L: Logger> LoggerExt for L {}
