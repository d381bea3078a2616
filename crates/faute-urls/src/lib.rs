//! Named route table with reverse URL resolution
//!
//! Inspired by Django's `django.urls.reverse()`: routes are registered
//! under a `"namespace:name"` key and resolved back to concrete paths,
//! substituting `{placeholder}` segments from caller-supplied params.

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum UrlError {
	#[error("no route named '{0}'")]
	UnknownName(String),
	#[error("route '{route}' is missing parameter '{name}'")]
	MissingParam { route: String, name: String },
}

pub type UrlResult<T> = Result<T, UrlError>;

/// Registry of named URL patterns
///
/// # Examples
///
/// ```
/// use faute_urls::NamedRoutes;
///
/// let mut routes = NamedRoutes::new();
/// routes.add("account:login", "/login");
/// routes.add("home", "/");
///
/// assert_eq!(routes.reverse_simple("account:login").unwrap(), "/login");
/// assert!(routes.reverse_simple("missing").is_err());
/// ```
#[derive(Debug, Default)]
pub struct NamedRoutes {
	patterns: HashMap<String, String>,
}

impl NamedRoutes {
	pub fn new() -> Self {
		Self {
			patterns: HashMap::new(),
		}
	}

	/// Register a pattern under a route name; re-registering replaces it
	pub fn add(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
		self.patterns.insert(name.into(), pattern.into());
	}

	pub fn contains(&self, name: &str) -> bool {
		self.patterns.contains_key(name)
	}

	/// Resolve a route name to a path, substituting `{placeholder}` params
	///
	/// An unknown name is a configuration error surfaced to the caller.
	///
	/// # Examples
	///
	/// ```
	/// use std::collections::HashMap;
	/// use faute_urls::NamedRoutes;
	///
	/// let mut routes = NamedRoutes::new();
	/// routes.add("stations:detail", "/stations/{id}");
	///
	/// let mut params = HashMap::new();
	/// params.insert("id".to_string(), "42".to_string());
	///
	/// let url = routes.reverse("stations:detail", &params).unwrap();
	/// assert_eq!(url, "/stations/42");
	/// ```
	pub fn reverse(&self, name: &str, params: &HashMap<String, String>) -> UrlResult<String> {
		let pattern = self
			.patterns
			.get(name)
			.ok_or_else(|| UrlError::UnknownName(name.to_string()))?;
		substitute(pattern, params).map_err(|missing| UrlError::MissingParam {
			route: name.to_string(),
			name: missing,
		})
	}

	/// Resolve a route that takes no parameters
	pub fn reverse_simple(&self, name: &str) -> UrlResult<String> {
		self.reverse(name, &HashMap::new())
	}
}

/// Single-pass `{placeholder}` substitution
///
/// Walks the pattern once, appending literal characters and substituted
/// parameter values. Returns the name of the first missing parameter.
fn substitute(pattern: &str, params: &HashMap<String, String>) -> Result<String, String> {
	let mut result = String::with_capacity(pattern.len());
	let mut chars = pattern.chars().peekable();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			match params.get(&name) {
				Some(value) => result.push_str(value),
				None => return Err(name),
			}
		} else {
			result.push(ch);
		}
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_reverse_without_params() {
		let mut routes = NamedRoutes::new();
		routes.add("home", "/");
		assert_eq!(routes.reverse_simple("home").unwrap(), "/");
	}

	#[test]
	fn test_reverse_substitutes_multiple_params() {
		let mut routes = NamedRoutes::new();
		routes.add("users:posts", "/users/{id}/posts/{post_id}/");

		let mut params = HashMap::new();
		params.insert("id".to_string(), "123".to_string());
		params.insert("post_id".to_string(), "456".to_string());

		assert_eq!(
			routes.reverse("users:posts", &params).unwrap(),
			"/users/123/posts/456/"
		);
	}

	#[test]
	fn test_unknown_name_is_an_error() {
		let routes = NamedRoutes::new();
		let err = routes.reverse_simple("account:login").unwrap_err();
		assert!(matches!(err, UrlError::UnknownName(_)));
	}

	#[test]
	fn test_missing_param_is_an_error() {
		let mut routes = NamedRoutes::new();
		routes.add("stations:detail", "/stations/{id}");
		let err = routes.reverse_simple("stations:detail").unwrap_err();
		match err {
			UrlError::MissingParam { route, name } => {
				assert_eq!(route, "stations:detail");
				assert_eq!(name, "id");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_re_registering_replaces_pattern() {
		let mut routes = NamedRoutes::new();
		routes.add("home", "/old");
		routes.add("home", "/");
		assert_eq!(routes.reverse_simple("home").unwrap(), "/");
	}
}
