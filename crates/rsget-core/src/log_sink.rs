//! Injectable structured log sink.
//!
//! The batch runner accepts any [`LogSink`] and defaults to [`NoopSink`];
//! this is the library's logger collaborator, separate from the process-wide
//! `tracing` subscriber (see [`crate::logging`]). [`TracingSink`] bridges
//! the two by forwarding records into `tracing`.

/// Severity of a [`LogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// One structured log record: where it came from and what happened.
#[derive(Debug)]
pub struct LogRecord<'a> {
    pub process: &'a str,
    pub module: &'a str,
    pub file: &'a str,
    pub function: &'a str,
    pub level: SinkLevel,
    pub message: &'a str,
}

/// Sink for structured log records. Implementations must be callable from
/// any thread and must not panic.
pub trait LogSink: Send + Sync {
    fn log(&self, record: &LogRecord<'_>);
}

/// Sink that discards every record. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _record: &LogRecord<'_>) {}
}

/// Sink that forwards records to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, record: &LogRecord<'_>) {
        match record.level {
            SinkLevel::Debug => tracing::debug!(
                module = record.module,
                function = record.function,
                "{}",
                record.message
            ),
            SinkLevel::Info => tracing::info!(
                module = record.module,
                function = record.function,
                "{}",
                record.message
            ),
            SinkLevel::Warn => tracing::warn!(
                module = record.module,
                function = record.function,
                "{}",
                record.message
            ),
            SinkLevel::Error => tracing::error!(
                module = record.module,
                function = record.function,
                "{}",
                record.message
            ),
        }
    }
}
