//! Terminal error handler
//!
//! The single point where "something went wrong" becomes "here is what
//! the caller sees and here is what gets recorded". The
//! [`ErrorDispatcher`] is invoked once per unrecovered error, after
//! normal handlers have already failed, and produces the final response
//! for that request:
//!
//! - machine callers (XHR, command line, test harness) always get a
//!   structured JSON error,
//! - authentication failures redirect to the login page with a flash
//!   message and a recorded return path,
//! - permission failures redirect home with a flash message,
//! - anything else gets the development debug page outside production,
//!   or the application's generic error template in production.
//!
//! The error is logged exactly once, before any branching, at the
//! severity the error declares (or `ERROR` if it declares none).

mod dispatcher;
mod environment;
mod log;

pub use dispatcher::{DispatchError, DispatchResult, ErrorDispatcher, GENERAL_ERROR_TEMPLATE};
pub use environment::Environment;
pub use log::{LogContext, LogSink, TracingSink};
