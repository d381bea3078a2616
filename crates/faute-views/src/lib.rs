//! Template rendering for error pages
//!
//! A small rendering seam: the [`ViewRenderer`] trait hides the engine
//! so the dispatcher can be tested against a mock, with [`TeraRenderer`]
//! as the Tera-backed production implementation. The [`DebugPage`]
//! generator lives in [`debug`] and builds the development error page
//! without going through a template at all.

pub mod debug;

pub use debug::DebugPage;

use tera::{Context, Tera};

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
	#[error("template error: {0}")]
	Tera(#[from] tera::Error),
}

pub type ViewResult<T> = Result<T, ViewError>;

/// Renders a named template with a data context into a response body
pub trait ViewRenderer: Send + Sync {
	fn render(&self, template: &str, context: &Context) -> ViewResult<String>;
}

/// Tera-backed view renderer
///
/// Templates are registered up front; rendering is read-only and shares
/// no mutable state across requests.
///
/// # Examples
///
/// ```
/// use faute_views::{TeraRenderer, ViewRenderer};
/// use tera::Context;
///
/// let mut renderer = TeraRenderer::new();
/// renderer
///     .add_raw_template("system/error_general", "<h1>{{ title }}</h1>")
///     .unwrap();
///
/// let mut context = Context::new();
/// context.insert("title", "Something went wrong");
///
/// let html = renderer.render("system/error_general", &context).unwrap();
/// assert_eq!(html, "<h1>Something went wrong</h1>");
/// ```
#[derive(Default)]
pub struct TeraRenderer {
	tera: Tera,
}

impl TeraRenderer {
	pub fn new() -> Self {
		Self {
			tera: Tera::default(),
		}
	}

	/// Register a template body under a name
	pub fn add_raw_template(&mut self, name: &str, body: &str) -> ViewResult<()> {
		self.tera.add_raw_template(name, body)?;
		Ok(())
	}
}

impl ViewRenderer for TeraRenderer {
	fn render(&self, template: &str, context: &Context) -> ViewResult<String> {
		Ok(self.tera.render(template, context)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_with_context_variables() {
		let mut renderer = TeraRenderer::new();
		renderer
			.add_raw_template("greeting", "Hello {{ name }}!")
			.unwrap();

		let mut context = Context::new();
		context.insert("name", "World");

		let result = renderer.render("greeting", &context).unwrap();
		assert_eq!(result, "Hello World!");
	}

	#[test]
	fn test_unknown_template_is_an_error() {
		let renderer = TeraRenderer::new();
		let result = renderer.render("missing", &Context::new());
		assert!(result.is_err());
	}

	#[test]
	fn test_invalid_template_fails_at_registration() {
		let mut renderer = TeraRenderer::new();
		let result = renderer.add_raw_template("broken", "{% if %}");
		assert!(result.is_err());
	}
}
