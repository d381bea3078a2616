//! # Faute
//!
//! Centralized error dispatch for hyper-based web applications.
//!
//! Faute sits at the terminal position of request handling: when a
//! request handler gives up with an unrecovered error, the
//! [`ErrorDispatcher`](handler::ErrorDispatcher) classifies it and
//! produces the final response: a structured JSON error for machine
//! callers, a flash-message redirect for authentication and permission
//! failures, a detailed debug page in development, or the application's
//! generic error template in production. Whatever branch is taken, the
//! error is recorded exactly once through a structured log sink.
//!
//! ## Crates
//!
//! - [`exception`]: the error entity with kind tags, severity hints,
//!   trace frames and diagnostic tables
//! - [`http`]: request snapshot and response value types
//! - [`urls`]: named route table with reverse resolution
//! - [`sessions`]: flash messages and small session slots
//! - [`views`]: template rendering and the development error page
//! - [`handler`]: the dispatcher itself plus environment mode and the
//!   log sink seam
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//! use faute::prelude::*;
//!
//! let mut routes = NamedRoutes::new();
//! routes.add("account:login", "/login");
//! routes.add("home", "/");
//!
//! let mut renderer = TeraRenderer::new();
//! renderer
//!     .add_raw_template("system/error_general", "<h1>System Error</h1>")
//!     .unwrap();
//!
//! let dispatcher = ErrorDispatcher::new(
//!     Arc::new(TracingSink),
//!     Arc::new(routes),
//!     Arc::new(renderer),
//!     Environment::from_env(),
//! );
//!
//! // Inside the request pipeline, after a handler failed:
//! let request = Request::builder().uri("/admin").build().unwrap();
//! let session = Session::new();
//! let error = AppError::not_logged_in();
//!
//! let response = dispatcher.dispatch(&request, &session, &error).unwrap();
//! assert_eq!(response.status, hyper::StatusCode::FOUND);
//! ```

pub use faute_exception as exception;
pub use faute_handler as handler;
pub use faute_http as http;
pub use faute_sessions as sessions;
pub use faute_urls as urls;
pub use faute_views as views;

/// Commonly used types, importable in one line
pub mod prelude {
	pub use faute_exception::{ApiError, AppError, ErrorKind, LogLevel, TraceFrame};
	pub use faute_handler::{
		DispatchError, Environment, ErrorDispatcher, LogContext, LogSink, TracingSink,
	};
	pub use faute_http::{Request, Response};
	pub use faute_sessions::{Flash, FlashLevel, Session};
	pub use faute_urls::NamedRoutes;
	pub use faute_views::{DebugPage, TeraRenderer, ViewRenderer};
}
