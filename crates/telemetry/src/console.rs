//! Base logger writing tagged lines to any `io::Write`.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard};

use fmtlog_kernel::{render, Level, Logger, Value};

/// Emits `[LEVEL] message` lines, rendering arguments into the format string.
///
/// Write failures are reported through `tracing` and otherwise dropped, since
/// the logging capability has no way to return them.
#[derive(Debug)]
pub struct ConsoleLogger<W: Write> {
    writer: Mutex<W>,
}

impl ConsoleLogger<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit(&self, level: Level, format: &str, args: &[Value]) {
        let line = format!("[{level}] {}\n", render(format, args));
        let mut writer = self.lock();
        if let Err(err) = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
        {
            tracing::warn!(
                target: "fmtlog-telemetry",
                error = %err,
                level = %level,
                "console logger write failed"
            );
        }
    }
}

impl<W: Write> Logger for ConsoleLogger<W> {
    fn infof(&self, format: &str, args: &[Value]) {
        self.emit(Level::Info, format, args);
    }

    fn warnf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Warn, format, args);
    }

    fn errorf(&self, format: &str, args: &[Value]) {
        self.emit(Level::Error, format, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmtlog_kernel::{args, with_prefix, with_suffix};

    fn output(console: ConsoleLogger<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn tags_lines_with_level() {
        let console = ConsoleLogger::new(Vec::new());
        console.infof("a", &[]);
        console.warnf("b", &[]);
        console.errorf("c", &[]);
        assert_eq!(output(console), "[INFO] a\n[WARN] b\n[ERROR] c\n");
    }

    #[test]
    fn renders_arguments() {
        let console = ConsoleLogger::new(Vec::new());
        console.infof("{} of {}", &args![3, 4]);
        assert_eq!(output(console), "[INFO] 3 of 4\n");
    }

    #[test]
    fn worked_example_chain() {
        let console = ConsoleLogger::new(Vec::new());
        {
            let l1 = with_prefix(&console, "prefix: ");
            l1.infof("Hello world", &[]);

            let l2 = with_suffix(l1, ", suffix");
            l2.warnf("Hello world", &[]);

            let l3 = with_prefix(l2, "after pre: ");
            l3.errorf("Hello world", &[]);
        }

        assert_eq!(
            output(console),
            "[INFO] prefix: Hello world\n\
             [WARN] prefix: Hello world, suffix\n\
             [ERROR] prefix: after pre: Hello world, suffix\n"
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_do_not_panic() {
        let console = ConsoleLogger::new(BrokenPipe);
        console.errorf("lost", &[]);
    }
}
