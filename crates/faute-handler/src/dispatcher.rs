//! The error dispatcher
//!
//! Terminal position of request handling: receives the request snapshot,
//! the session handle and the unrecovered error, and produces the final
//! response. One log write and one dispatch decision per invocation.

use crate::environment::Environment;
use crate::log::{LogContext, LogSink};
use faute_exception::{ApiError, AppError, ErrorKind};
use faute_http::{Request, Response};
use faute_sessions::{Flash, Session};
use faute_urls::{NamedRoutes, UrlError};
use faute_views::{DebugPage, ViewError, ViewRenderer};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Template rendered for production users when no other branch applies
pub const GENERAL_ERROR_TEMPLATE: &str = "system/error_general";

/// Fatal dispatch failures
///
/// These are configuration or rendering defects, not request errors: the
/// outermost process boundary is responsible for turning them into a
/// minimal fallback response.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
	#[error("route resolution failed: {0}")]
	Url(#[from] UrlError),
	#[error("view rendering failed: {0}")]
	View(#[from] ViewError),
	#[error("response encoding failed: {0}")]
	Http(#[from] faute_http::Error),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Converts an unhandled failure into the response the caller sees
///
/// Collaborators are injected at construction; the request snapshot, the
/// session handle and the error arrive per call, so every branch is
/// deterministic under test.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use faute_exception::AppError;
/// use faute_handler::{Environment, ErrorDispatcher, TracingSink};
/// use faute_http::Request;
/// use faute_sessions::Session;
/// use faute_urls::NamedRoutes;
/// use faute_views::TeraRenderer;
/// use hyper::StatusCode;
///
/// let mut routes = NamedRoutes::new();
/// routes.add("account:login", "/login");
/// routes.add("home", "/");
///
/// let mut renderer = TeraRenderer::new();
/// renderer
///     .add_raw_template("system/error_general", "<h1>System Error</h1>")
///     .unwrap();
///
/// let dispatcher = ErrorDispatcher::new(
///     Arc::new(TracingSink),
///     Arc::new(routes),
///     Arc::new(renderer),
///     Environment::production(),
/// );
///
/// let request = Request::builder().uri("/admin").build().unwrap();
/// let session = Session::new();
/// let error = AppError::not_logged_in();
///
/// let response = dispatcher.dispatch(&request, &session, &error).unwrap();
/// assert_eq!(response.status, StatusCode::FOUND);
/// assert_eq!(
///     response.headers.get("location").unwrap().to_str().unwrap(),
///     "/login"
/// );
/// ```
pub struct ErrorDispatcher {
	log: Arc<dyn LogSink>,
	routes: Arc<NamedRoutes>,
	view: Arc<dyn ViewRenderer>,
	debug_page: DebugPage,
	environment: Environment,
	login_route: String,
	home_route: String,
}

impl ErrorDispatcher {
	pub fn new(
		log: Arc<dyn LogSink>,
		routes: Arc<NamedRoutes>,
		view: Arc<dyn ViewRenderer>,
		environment: Environment,
	) -> Self {
		Self {
			log,
			routes,
			view,
			debug_page: DebugPage::new(),
			environment,
			login_route: "account:login".to_string(),
			home_route: "home".to_string(),
		}
	}

	/// Replace the development error page generator
	pub fn with_debug_page(mut self, debug_page: DebugPage) -> Self {
		self.debug_page = debug_page;
		self
	}

	/// Route name resolved for authentication redirects
	pub fn with_login_route(mut self, name: impl Into<String>) -> Self {
		self.login_route = name.into();
		self
	}

	/// Route name resolved for permission redirects
	pub fn with_home_route(mut self, name: impl Into<String>) -> Self {
		self.home_route = name.into();
		self
	}

	/// Produce the final response for an unrecovered error
	///
	/// The error is logged first, unconditionally, so operational
	/// visibility never depends on which response path is chosen.
	pub fn dispatch(
		&self,
		request: &Request,
		session: &Session,
		error: &AppError,
	) -> DispatchResult<Response> {
		self.log.write(
			error.severity(),
			error.message(),
			&LogContext {
				file: error.file(),
				line: error.line(),
				code: error.code(),
			},
		);

		let show_detailed = self.environment.detailed_errors();

		// Machine callers always get structured errors, whatever the kind.
		if request.is_xhr() || self.environment.machine_context() {
			let payload = ApiError::from_error(error, show_detailed);
			return Ok(Response::internal_server_error().with_json(&payload)?);
		}

		match error.kind() {
			ErrorKind::AuthenticationRequired => {
				session.flash(Flash::warning(
					"You must be logged in to access this page.",
				));
				session.set_login_referrer(request.path());

				let location = self.routes.reverse_simple(&self.login_route)?;
				Ok(Response::temporary_redirect(location))
			}
			ErrorKind::PermissionDenied => {
				session.flash(Flash::error(
					"You do not have permission to access this portion of the site.",
				));

				let location = self.routes.reverse_simple(&self.home_route)?;
				Ok(Response::temporary_redirect(location))
			}
			ErrorKind::Generic if show_detailed => {
				let html = self
					.debug_page
					.render(error, &request_environment(request));
				Ok(Response::internal_server_error().with_html(html))
			}
			ErrorKind::Generic => {
				let mut context = tera::Context::new();
				context.insert("exception", error);
				let body = self.view.render(GENERAL_ERROR_TEMPLATE, &context)?;
				Ok(Response::internal_server_error().with_html(body))
			}
		}
	}
}

/// Snapshot of the request rendered on the debug page
fn request_environment(request: &Request) -> Map<String, Value> {
	let mut env = Map::new();
	env.insert(
		"method".to_string(),
		Value::String(request.method.to_string()),
	);
	env.insert("path".to_string(), Value::String(request.path().to_string()));
	env.insert(
		"version".to_string(),
		Value::String(format!("{:?}", request.version)),
	);

	let mut headers = Map::new();
	for (name, value) in &request.headers {
		let rendered = value.to_str().unwrap_or("<binary>").to_string();
		headers.insert(name.as_str().to_string(), Value::String(rendered));
	}
	env.insert("headers".to_string(), Value::Object(headers));

	env
}
