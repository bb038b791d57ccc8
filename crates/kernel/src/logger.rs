//! The logging capability every base logger and decorator implements.

use std::fmt;
use std::sync::Arc;

/// Severity of a logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A format argument forwarded to the base logger.
///
/// Decorators never look inside a `Value`; only the base logger renders it.
/// [`Value::Display`] carries any other type unrendered until emission.
#[derive(Clone)]
pub enum Value {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Display(Arc<dyn fmt::Display + Send + Sync>),
}

impl Value {
    /// Wrap an arbitrary displayable value.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Value::Display(Arc::new(value))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Display(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Value::Display(value) => f
                .debug_tuple("Display")
                .field(&format_args!("{value}"))
                .finish(),
        }
    }
}

/// Opaque values are equal only when they share the same allocation.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Display(a), Value::Display(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

macro_rules! value_from_int {
    ($variant:ident => $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $wide)
                }
            }
        )+
    };
}

value_from_int!(Int => i64: i8, i16, i32, i64, isize);
value_from_int!(UInt => u64: u8, u16, u32, u64, usize);

/// Minimal three-method logging contract.
///
/// Implemented by base loggers that actually emit and by [`FmtLogger`](crate::FmtLogger),
/// which rewrites the format string and delegates. No `Send`/`Sync` bound is
/// imposed here: a decorator is exactly as thread-safe as what it wraps.
pub trait Logger {
    fn infof(&self, format: &str, args: &[Value]);

    fn warnf(&self, format: &str, args: &[Value]);

    fn errorf(&self, format: &str, args: &[Value]);

    /// Dispatch to the method matching `level`.
    fn logf(&self, level: Level, format: &str, args: &[Value]) {
        match level {
            Level::Info => self.infof(format, args),
            Level::Warn => self.warnf(format, args),
            Level::Error => self.errorf(format, args),
        }
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn infof(&self, format: &str, args: &[Value]) {
        (**self).infof(format, args)
    }

    fn warnf(&self, format: &str, args: &[Value]) {
        (**self).warnf(format, args)
    }

    fn errorf(&self, format: &str, args: &[Value]) {
        (**self).errorf(format, args)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn infof(&self, format: &str, args: &[Value]) {
        (**self).infof(format, args)
    }

    fn warnf(&self, format: &str, args: &[Value]) {
        (**self).warnf(format, args)
    }

    fn errorf(&self, format: &str, args: &[Value]) {
        (**self).errorf(format, args)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn infof(&self, format: &str, args: &[Value]) {
        (**self).infof(format, args)
    }

    fn warnf(&self, format: &str, args: &[Value]) {
        (**self).warnf(format, args)
    }

    fn errorf(&self, format: &str, args: &[Value]) {
        (**self).errorf(format, args)
    }
}

/// Build a `Vec<Value>` from heterogeneous arguments.
///
/// ```
/// use fmtlog_kernel::{args, Value};
///
/// let values = args!["disk", 93, true];
/// assert_eq!(values[1], Value::Int(93));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingLogger;

    #[test]
    fn level_displays_upper_case_tag() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }

    #[test]
    fn value_conversions_pick_matching_variant() {
        assert_eq!(Value::from("a"), Value::Str("a".to_string()));
        assert_eq!(Value::from(-3i32), Value::Int(-3));
        assert_eq!(Value::from(7usize), Value::UInt(7));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from('x'), Value::Char('x'));
    }

    #[test]
    fn value_display_is_plain() {
        let rendered: Vec<String> = args!["s", 1, 2u8, 0.25, true, 'c']
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["s", "1", "2", "0.25", "true", "c"]);
    }

    struct Endpoint {
        host: &'static str,
        port: u16,
    }

    impl fmt::Display for Endpoint {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}:{}", self.host, self.port)
        }
    }

    #[test]
    fn display_values_render_lazily_and_compare_by_identity() {
        let endpoint = Value::display(Endpoint {
            host: "db",
            port: 5432,
        });
        assert_eq!(endpoint.to_string(), "db:5432");
        assert_eq!(format!("{endpoint:?}"), "Display(db:5432)");

        assert_eq!(endpoint, endpoint.clone());
        assert_ne!(endpoint, Value::display(Endpoint { host: "db", port: 5432 }));
        assert_ne!(endpoint, Value::from("db:5432"));
    }

    #[test]
    fn display_values_pass_through_decorators_unchanged() {
        let recorder = RecordingLogger::new();
        let endpoint = Value::display(Endpoint {
            host: "cache",
            port: 6379,
        });
        crate::with_prefix(&recorder, "net: ").warnf("lost {}", std::slice::from_ref(&endpoint));

        let records = recorder.records();
        assert_eq!(records[0].args, [endpoint]);
        assert_eq!(crate::render(&records[0].format, &records[0].args), "net: lost cache:6379");
    }

    #[test]
    fn args_macro_handles_empty_list() {
        assert!(args![].is_empty());
    }

    #[test]
    fn logf_routes_by_level() {
        let recorder = RecordingLogger::new();
        recorder.logf(Level::Warn, "w", &[]);
        recorder.logf(Level::Error, "e", &[]);
        recorder.logf(Level::Info, "i", &[]);

        let levels: Vec<Level> = recorder.records().iter().map(|r| r.level).collect();
        assert_eq!(levels, [Level::Warn, Level::Error, Level::Info]);
    }

    fn emit_warning(logger: impl Logger) {
        logger.warnf("borrowed", &[]);
    }

    #[test]
    fn smart_pointers_forward_calls() {
        let recorder = Arc::new(RecordingLogger::new());
        let boxed: Box<dyn Logger> = Box::new(Arc::clone(&recorder));
        boxed.infof("boxed", &[]);
        emit_warning(&*recorder);

        let formats: Vec<String> = recorder
            .records()
            .into_iter()
            .map(|r| r.format)
            .collect();
        assert_eq!(formats, ["boxed", "borrowed"]);
    }
}
