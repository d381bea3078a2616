//! Runtime environment mode
//!
//! A read-only value struct injected into the dispatcher at
//! construction, never read from ambient global state, so every branch
//! is deterministic under test.

use std::env;

/// Process-wide runtime mode, snapshotted at startup
///
/// # Examples
///
/// ```
/// use faute_handler::Environment;
///
/// let env = Environment::development();
/// assert!(env.detailed_errors());
///
/// let env = Environment::production();
/// assert!(!env.detailed_errors());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment {
	/// Production deployments never expose stack traces or debug pages
	pub production: bool,
	/// The process is a command-line or batch invocation, not a web worker
	pub command_line: bool,
	/// A test harness is driving the process
	pub testing: bool,
}

impl Environment {
	/// Development mode: detailed errors, interactive web worker
	pub fn development() -> Self {
		Self::default()
	}

	/// Production mode: diagnostics stay internal
	pub fn production() -> Self {
		Self {
			production: true,
			..Self::default()
		}
	}

	pub fn with_command_line(mut self, command_line: bool) -> Self {
		self.command_line = command_line;
		self
	}

	pub fn with_testing(mut self, testing: bool) -> Self {
		self.testing = testing;
		self
	}

	/// Whether stack traces and diagnostic tables may be exposed
	pub fn detailed_errors(&self) -> bool {
		!self.production
	}

	/// Whether the invocation context expects structured responses
	/// irrespective of request headers
	pub fn machine_context(&self) -> bool {
		self.command_line || self.testing
	}

	/// Load the mode from `FAUTE_PRODUCTION` and `FAUTE_TESTING`
	///
	/// Unset or unparseable variables fall back to development defaults.
	/// The command-line flag is not an environment variable; binaries
	/// that are not web workers set it via [`Environment::with_command_line`].
	pub fn from_env() -> Self {
		Self {
			production: env_flag("FAUTE_PRODUCTION"),
			command_line: false,
			testing: env_flag("FAUTE_TESTING"),
		}
	}
}

fn env_flag(key: &str) -> bool {
	env::var(key)
		.ok()
		.and_then(|v| parse_bool(&v))
		.unwrap_or(false)
}

/// Parse common boolean spellings: true/false, yes/no, on/off, 1/0
fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "yes" | "on" | "1" => Some(true),
		"false" | "no" | "off" | "0" => Some(false),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	fn test_development_shows_detail() {
		let env = Environment::development();
		assert!(env.detailed_errors());
		assert!(!env.machine_context());
	}

	#[test]
	fn test_production_hides_detail() {
		assert!(!Environment::production().detailed_errors());
	}

	#[test]
	fn test_machine_context_flags() {
		assert!(Environment::development().with_command_line(true).machine_context());
		assert!(Environment::development().with_testing(true).machine_context());
	}

	#[test]
	fn test_parse_bool_variants() {
		assert_eq!(parse_bool("true"), Some(true));
		assert_eq!(parse_bool("YES"), Some(true));
		assert_eq!(parse_bool("on"), Some(true));
		assert_eq!(parse_bool("1"), Some(true));
		assert_eq!(parse_bool("false"), Some(false));
		assert_eq!(parse_bool("No"), Some(false));
		assert_eq!(parse_bool("off"), Some(false));
		assert_eq!(parse_bool("0"), Some(false));
		assert_eq!(parse_bool("maybe"), None);
	}

	#[test]
	#[serial]
	fn test_from_env_reads_flags() {
		unsafe {
			env::set_var("FAUTE_PRODUCTION", "yes");
			env::set_var("FAUTE_TESTING", "0");
		}
		let environment = Environment::from_env();
		assert!(environment.production);
		assert!(!environment.testing);
		assert!(!environment.command_line);
		unsafe {
			env::remove_var("FAUTE_PRODUCTION");
			env::remove_var("FAUTE_TESTING");
		}
	}

	#[test]
	#[serial]
	fn test_from_env_defaults_to_development() {
		unsafe {
			env::remove_var("FAUTE_PRODUCTION");
			env::remove_var("FAUTE_TESTING");
		}
		let environment = Environment::from_env();
		assert!(!environment.production);
		assert!(!environment.testing);
	}
}
