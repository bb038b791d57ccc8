//! Runtime interpolation for base loggers.

use std::fmt::Write;

use crate::logger::Value;

/// Substitute `args` into `format` at runtime.
///
/// `{}` takes the next argument, `{{` and `}}` are literal braces. A `{}`
/// with nothing left to consume stays as `{}`, and leftover arguments are
/// appended as ` {EXTRA: a, b}`.
pub fn render(format: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut remaining = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) => {
                chars.next();
                out.push('{');
            }
            ('}', Some('}')) => {
                chars.next();
                out.push('}');
            }
            ('{', Some('}')) => {
                chars.next();
                match remaining.next() {
                    Some(value) => {
                        let _ = write!(out, "{value}");
                    }
                    None => out.push_str("{}"),
                }
            }
            _ => out.push(c),
        }
    }

    let extra: Vec<String> = remaining.map(ToString::to_string).collect();
    if !extra.is_empty() {
        let _ = write!(out, " {{EXTRA: {}}}", extra.join(", "));
    }

    out
}
