//! Application error entity
//!
//! Defines the error value consumed by the error dispatcher: a message,
//! a numeric code, a best-effort source location, an optional call-stack
//! trace, a kind tag selecting the dispatch strategy, and optional named
//! diagnostic tables surfaced on the development error page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::panic::Location;

pub type Result<T> = std::result::Result<T, AppError>;

/// Logger severity levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
	Debug,
	Info,
	Warning,
	Error,
}

impl LogLevel {
	/// Map onto a `tracing` level for the structured logging backend
	pub fn as_tracing_level(self) -> tracing::Level {
		match self {
			LogLevel::Debug => tracing::Level::DEBUG,
			LogLevel::Info => tracing::Level::INFO,
			LogLevel::Warning => tracing::Level::WARN,
			LogLevel::Error => tracing::Level::ERROR,
		}
	}
}

/// Classification attached to an error, selecting its dispatch branch
///
/// Every error that is not explicitly tagged is `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorKind {
	#[default]
	Generic,
	AuthenticationRequired,
	PermissionDenied,
}

/// A single call-stack frame, best-effort diagnostics only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceFrame {
	pub function: String,
	pub file: String,
	pub line: u32,
}

impl TraceFrame {
	pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
		Self {
			function: function.into(),
			file: file.into(),
			line,
		}
	}
}

/// The failure being dispatched
///
/// Created wherever the failure originates and read-only from then on.
/// The source location is captured from the construction site.
///
/// # Examples
///
/// ```
/// use faute_exception::{AppError, ErrorKind, LogLevel};
///
/// let err = AppError::new("database connection lost")
///     .with_code(1045)
///     .with_severity(LogLevel::Warning);
/// assert_eq!(err.kind(), ErrorKind::Generic);
/// assert_eq!(err.severity(), LogLevel::Warning);
/// assert_eq!(err.code(), 1045);
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
	message: String,
	code: i64,
	file: &'static str,
	line: u32,
	kind: ErrorKind,
	severity: Option<LogLevel>,
	trace: Vec<TraceFrame>,
	extra_data: Vec<(String, Map<String, Value>)>,
}

impl AppError {
	/// Create a generic error, capturing the caller's source location
	#[track_caller]
	pub fn new(message: impl Into<String>) -> Self {
		let location = Location::caller();
		Self {
			message: message.into(),
			code: 0,
			file: location.file(),
			line: location.line(),
			kind: ErrorKind::Generic,
			severity: None,
			trace: Vec::new(),
			extra_data: Vec::new(),
		}
	}

	/// Create an error signalling that the request requires a logged-in user
	///
	/// # Examples
	///
	/// ```
	/// use faute_exception::{AppError, ErrorKind};
	///
	/// let err = AppError::not_logged_in();
	/// assert_eq!(err.kind(), ErrorKind::AuthenticationRequired);
	/// ```
	#[track_caller]
	pub fn not_logged_in() -> Self {
		Self::new("You must be logged in to access this page.")
			.with_kind(ErrorKind::AuthenticationRequired)
	}

	/// Create an error signalling that the current user lacks permission
	#[track_caller]
	pub fn permission_denied() -> Self {
		Self::new("You do not have permission to access this portion of the site.")
			.with_kind(ErrorKind::PermissionDenied)
	}

	pub fn with_code(mut self, code: i64) -> Self {
		self.code = code;
		self
	}

	pub fn with_kind(mut self, kind: ErrorKind) -> Self {
		self.kind = kind;
		self
	}

	/// Attach an explicit logger severity hint
	///
	/// Errors without a hint are logged at [`LogLevel::Error`].
	pub fn with_severity(mut self, severity: LogLevel) -> Self {
		self.severity = Some(severity);
		self
	}

	/// Append a call-stack frame; frames keep their insertion order
	pub fn with_frame(mut self, frame: TraceFrame) -> Self {
		self.trace.push(frame);
		self
	}

	/// Attach a named diagnostic table for the development error page
	///
	/// Tables keep their insertion order when rendered.
	///
	/// # Examples
	///
	/// ```
	/// use faute_exception::AppError;
	/// use serde_json::{Map, Value};
	///
	/// let mut headers = Map::new();
	/// headers.insert("Host".into(), Value::String("radio.local".into()));
	///
	/// let err = AppError::new("stream offline").with_extra_table("Request Headers", headers);
	/// assert_eq!(err.extra_data().len(), 1);
	/// assert_eq!(err.extra_data()[0].0, "Request Headers");
	/// ```
	pub fn with_extra_table(mut self, legend: impl Into<String>, data: Map<String, Value>) -> Self {
		self.extra_data.push((legend.into(), data));
		self
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn code(&self) -> i64 {
		self.code
	}

	pub fn file(&self) -> &'static str {
		self.file
	}

	pub fn line(&self) -> u32 {
		self.line
	}

	pub fn kind(&self) -> ErrorKind {
		self.kind
	}

	/// Effective logging severity: the explicit hint, or `Error` if absent
	pub fn severity(&self) -> LogLevel {
		self.severity.unwrap_or(LogLevel::Error)
	}

	pub fn trace(&self) -> &[TraceFrame] {
		&self.trace
	}

	pub fn extra_data(&self) -> &[(String, Map<String, Value>)] {
		&self.extra_data
	}
}

/// Structured error payload returned to machine callers
///
/// Wire schema: `{"code": <integer>, "message": <string>, "trace": [...]}`.
/// The trace is populated only when detailed diagnostics are permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
	pub code: i64,
	pub message: String,
	pub trace: Vec<TraceFrame>,
}

impl ApiError {
	/// Build the machine payload for an error
	///
	/// # Examples
	///
	/// ```
	/// use faute_exception::{ApiError, AppError, TraceFrame};
	///
	/// let err = AppError::new("division by zero")
	///     .with_frame(TraceFrame::new("compute", "src/math.rs", 42));
	///
	/// let detailed = ApiError::from_error(&err, true);
	/// assert_eq!(detailed.trace.len(), 1);
	///
	/// let redacted = ApiError::from_error(&err, false);
	/// assert!(redacted.trace.is_empty());
	/// ```
	pub fn from_error(error: &AppError, show_detailed: bool) -> Self {
		Self {
			code: error.code(),
			message: error.message().to_string(),
			trace: if show_detailed {
				error.trace().to_vec()
			} else {
				Vec::new()
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_kind_is_generic() {
		let err = AppError::new("boom");
		assert_eq!(err.kind(), ErrorKind::Generic);
		assert_eq!(err.code(), 0);
	}

	#[test]
	fn test_severity_defaults_to_error() {
		let err = AppError::not_logged_in();
		assert_eq!(err.severity(), LogLevel::Error);

		let hinted = AppError::new("cache miss").with_severity(LogLevel::Debug);
		assert_eq!(hinted.severity(), LogLevel::Debug);
	}

	#[test]
	fn test_source_location_is_captured() {
		let err = AppError::new("boom");
		assert!(err.file().ends_with("lib.rs"));
		assert!(err.line() > 0);
	}

	#[test]
	fn test_level_ordering() {
		assert!(LogLevel::Debug < LogLevel::Info);
		assert!(LogLevel::Warning < LogLevel::Error);
	}

	#[test]
	fn test_extra_tables_keep_order() {
		let mut first = Map::new();
		first.insert("key".into(), Value::from(1));
		let mut second = Map::new();
		second.insert("key".into(), Value::from(2));

		let err = AppError::new("boom")
			.with_extra_table("First", first)
			.with_extra_table("Second", second);

		let legends: Vec<&str> = err.extra_data().iter().map(|(l, _)| l.as_str()).collect();
		assert_eq!(legends, vec!["First", "Second"]);
	}

	#[test]
	fn test_api_error_serializes_expected_schema() {
		let err = AppError::new("division by zero")
			.with_frame(TraceFrame::new("divide", "src/math.rs", 7));
		let payload = ApiError::from_error(&err, true);
		let json = serde_json::to_value(&payload).unwrap();

		assert_eq!(json["code"], 0);
		assert_eq!(json["message"], "division by zero");
		assert_eq!(json["trace"][0]["function"], "divide");
		assert_eq!(json["trace"][0]["line"], 7);
	}

	#[test]
	fn test_display_shows_message() {
		let err = AppError::new("stream offline").with_code(502);
		assert_eq!(err.to_string(), "stream offline");
	}
}
