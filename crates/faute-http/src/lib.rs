//! HTTP value types for the error dispatch pipeline
//!
//! A read-only [`Request`] snapshot of the inbound request and a
//! write-once [`Response`] under construction. Both are plain values on
//! top of hyper's types; the server loop that produced them is not this
//! crate's concern.

mod request;
mod response;

pub use request::{Request, RequestBuilder};
pub use response::Response;

/// Errors raised while assembling HTTP values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid URI: {0}")]
    InvalidUri(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;
