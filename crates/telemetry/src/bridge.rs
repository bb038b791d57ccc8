//! Base logger forwarding to the `tracing` macros.

use fmtlog_kernel::{render, Logger, Value};

/// Emits each call as a `tracing` event on the `fmtlog` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn infof(&self, format: &str, args: &[Value]) {
        tracing::info!(target: "fmtlog", "{}", render(format, args));
    }

    fn warnf(&self, format: &str, args: &[Value]) {
        tracing::warn!(target: "fmtlog", "{}", render(format, args));
    }

    fn errorf(&self, format: &str, args: &[Value]) {
        tracing::error!(target: "fmtlog", "{}", render(format, args));
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use fmtlog_kernel::{args, with_prefix};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn events_carry_decorated_message() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let logger = with_prefix(TracingLogger::new(), "svc: ");
            logger.infof("started on {}", &args![8080]);
            logger.errorf("stopped", &[]);
        });

        let captured = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(captured.contains("INFO fmtlog: svc: started on 8080"), "{captured}");
        assert!(captured.contains("ERROR fmtlog: svc: stopped"), "{captured}");
    }
}
