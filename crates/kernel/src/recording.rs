//! In-memory logger that captures calls instead of emitting them.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::logger::{Level, Logger, Value};

/// One captured logging call.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    pub format: String,
    pub args: Vec<Value>,
}

/// Base logger that stores every call it receives.
///
/// Clones share the same record buffer, so a clone can be handed to a
/// decorator by value while the original is used for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    records: Arc<Mutex<Vec<Record>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in call order.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, level: Level, format: &str, args: &[Value]) {
        self.lock().push(Record {
            level,
            format: format.to_string(),
            args: args.to_vec(),
        });
    }
}

impl Logger for RecordingLogger {
    fn infof(&self, format: &str, args: &[Value]) {
        self.record(Level::Info, format, args);
    }

    fn warnf(&self, format: &str, args: &[Value]) {
        self.record(Level::Warn, format, args);
    }

    fn errorf(&self, format: &str, args: &[Value]) {
        self.record(Level::Error, format, args);
    }
}
