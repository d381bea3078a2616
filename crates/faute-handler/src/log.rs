//! Structured log sink
//!
//! The dispatcher records every error it handles through a [`LogSink`]
//! before deciding on a response. The sink API is infallible and
//! fire-and-forget: a failing backend must never prevent response
//! construction.

use faute_exception::LogLevel;

/// Structured context recorded alongside an error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
	pub file: &'static str,
	pub line: u32,
	pub code: i64,
}

/// Accepts (severity, message, context) and persists it somewhere
pub trait LogSink: Send + Sync {
	fn write(&self, level: LogLevel, message: &str, context: &LogContext);
}

/// Production sink emitting `tracing` events with structured fields
///
/// # Examples
///
/// ```
/// use faute_exception::LogLevel;
/// use faute_handler::{LogContext, LogSink, TracingSink};
///
/// let sink = TracingSink;
/// sink.write(
///     LogLevel::Warning,
///     "stream offline",
///     &LogContext { file: "src/stream.rs", line: 10, code: 502 },
/// );
/// ```
pub struct TracingSink;

impl LogSink for TracingSink {
	fn write(&self, level: LogLevel, message: &str, context: &LogContext) {
		match level {
			LogLevel::Debug => tracing::debug!(
				file = context.file,
				line = context.line,
				code = context.code,
				"{message}"
			),
			LogLevel::Info => tracing::info!(
				file = context.file,
				line = context.line,
				code = context.code,
				"{message}"
			),
			LogLevel::Warning => tracing::warn!(
				file = context.file,
				line = context.line,
				code = context.code,
				"{message}"
			),
			LogLevel::Error => tracing::error!(
				file = context.file,
				line = context.line,
				code = context.code,
				"{message}"
			),
		}
	}
}
