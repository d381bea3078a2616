//! Per-session flash messages and small key-value slots
//!
//! Provides Django-style flash messages for one-time notifications plus
//! a handful of small cross-request values (e.g. the pending post-login
//! redirect target). A [`Session`] is a cheap-clone handle scoped to one
//! browser session; concurrent requests for different sessions never
//! share state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Session slot holding the path to return to after a successful login
pub const LOGIN_REFERRER_KEY: &str = "login_referrer";

/// Flash message severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashLevel {
	Info,
	Success,
	Warning,
	Error,
}

/// A single flash message, displayed once on the next rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
	pub level: FlashLevel,
	pub text: String,
}

impl Flash {
	/// Create a new message
	///
	/// # Examples
	///
	/// ```
	/// use faute_sessions::{Flash, FlashLevel};
	///
	/// let msg = Flash::new(FlashLevel::Success, "Saved successfully!");
	/// assert_eq!(msg.level, FlashLevel::Success);
	/// ```
	pub fn new(level: FlashLevel, text: impl Into<String>) -> Self {
		Self {
			level,
			text: text.into(),
		}
	}

	/// Create an info message
	pub fn info(text: impl Into<String>) -> Self {
		Self::new(FlashLevel::Info, text)
	}

	/// Create a success message
	pub fn success(text: impl Into<String>) -> Self {
		Self::new(FlashLevel::Success, text)
	}

	/// Create a warning message
	pub fn warning(text: impl Into<String>) -> Self {
		Self::new(FlashLevel::Warning, text)
	}

	/// Create an error message
	pub fn error(text: impl Into<String>) -> Self {
		Self::new(FlashLevel::Error, text)
	}
}

#[derive(Debug, Default)]
struct SessionData {
	flashes: Vec<Flash>,
	values: HashMap<String, Value>,
}

/// Handle to one session's state
///
/// Clones share the same underlying storage, so a handle can be passed
/// to the dispatcher while the rendering layer keeps its own copy.
///
/// # Examples
///
/// ```
/// use faute_sessions::{Flash, Session};
///
/// let session = Session::new();
/// session.flash(Flash::warning("You must be logged in to access this page."));
///
/// let messages = session.take_flashes();
/// assert_eq!(messages.len(), 1);
/// assert!(session.take_flashes().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
	data: Arc<RwLock<SessionData>>,
}

impl Session {
	pub fn new() -> Self {
		Self {
			data: Arc::new(RwLock::new(SessionData::default())),
		}
	}

	/// Store a one-shot message for the next rendered page
	pub fn flash(&self, message: Flash) {
		let mut data = self.data.write().unwrap();
		data.flashes.push(message);
	}

	/// Drain all pending flash messages, clearing them
	pub fn take_flashes(&self) -> Vec<Flash> {
		let mut data = self.data.write().unwrap();
		std::mem::take(&mut data.flashes)
	}

	/// Read pending flash messages without clearing them
	pub fn peek_flashes(&self) -> Vec<Flash> {
		let data = self.data.read().unwrap();
		data.flashes.clone()
	}

	/// Store a small value in the session
	pub fn set(&self, key: impl Into<String>, value: Value) {
		let mut data = self.data.write().unwrap();
		data.values.insert(key.into(), value);
	}

	/// Read a value stored in the session
	pub fn get(&self, key: &str) -> Option<Value> {
		let data = self.data.read().unwrap();
		data.values.get(key).cloned()
	}

	/// Record the path to return to after the next successful login
	pub fn set_login_referrer(&self, path: impl Into<String>) {
		self.set(LOGIN_REFERRER_KEY, Value::String(path.into()));
	}

	/// The pending post-login redirect target, if one was recorded
	///
	/// # Examples
	///
	/// ```
	/// use faute_sessions::Session;
	///
	/// let session = Session::new();
	/// assert!(session.login_referrer().is_none());
	///
	/// session.set_login_referrer("/admin/stations");
	/// assert_eq!(session.login_referrer().as_deref(), Some("/admin/stations"));
	/// ```
	pub fn login_referrer(&self) -> Option<String> {
		match self.get(LOGIN_REFERRER_KEY) {
			Some(Value::String(path)) => Some(path),
			_ => None,
		}
	}
}
