use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

/// HTTP response under construction
///
/// A plain value: status, headers and a byte body. The invoking layer
/// writes it to the client.
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    /// Create a new Response with the given status code
    ///
    /// # Examples
    ///
    /// ```
    /// use faute_http::Response;
    /// use hyper::StatusCode;
    ///
    /// let response = Response::new(StatusCode::OK);
    /// assert_eq!(response.status, StatusCode::OK);
    /// assert!(response.body.is_empty());
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Create a Response with HTTP 200 OK status
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    /// Create a Response with HTTP 500 Internal Server Error status
    ///
    /// # Examples
    ///
    /// ```
    /// use faute_http::Response;
    /// use hyper::StatusCode;
    ///
    /// let response = Response::internal_server_error();
    /// assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    /// ```
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Create a Response with HTTP 302 Found (temporary redirect)
    ///
    /// # Examples
    ///
    /// ```
    /// use faute_http::Response;
    /// use hyper::StatusCode;
    ///
    /// let response = Response::temporary_redirect("/login");
    /// assert_eq!(response.status, StatusCode::FOUND);
    /// assert_eq!(
    ///     response.headers.get("location").unwrap().to_str().unwrap(),
    ///     "/login"
    /// );
    /// ```
    pub fn temporary_redirect(location: impl AsRef<str>) -> Self {
        Self::new(StatusCode::FOUND).with_location(location.as_ref())
    }

    /// Set the response body
    ///
    /// # Examples
    ///
    /// ```
    /// use faute_http::Response;
    /// use bytes::Bytes;
    ///
    /// let response = Response::ok().with_body("Hello, World!");
    /// assert_eq!(response.body, Bytes::from("Hello, World!"));
    /// ```
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a custom header to the response; invalid names or values are dropped
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes()) {
            if let Ok(header_value) = hyper::header::HeaderValue::from_str(value) {
                self.headers.insert(header_name, header_value);
            }
        }
        self
    }

    /// Add a Location header to the response
    pub fn with_location(mut self, location: &str) -> Self {
        if let Ok(value) = hyper::header::HeaderValue::from_str(location) {
            self.headers.insert(hyper::header::LOCATION, value);
        }
        self
    }

    /// Set the response body to JSON and add the Content-Type header
    ///
    /// # Examples
    ///
    /// ```
    /// use faute_http::Response;
    /// use serde_json::json;
    ///
    /// let data = json!({"code": 0, "message": "division by zero"});
    /// let response = Response::internal_server_error().with_json(&data).unwrap();
    ///
    /// assert_eq!(
    ///     response.headers.get("content-type").unwrap().to_str().unwrap(),
    ///     "application/json"
    /// );
    /// ```
    pub fn with_json<T: Serialize>(mut self, data: &T) -> crate::Result<Self> {
        let json =
            serde_json::to_vec(data).map_err(|e| crate::Error::Serialization(e.to_string()))?;
        self.body = Bytes::from(json);
        self.headers.insert(
            hyper::header::CONTENT_TYPE,
            hyper::header::HeaderValue::from_static("application/json"),
        );
        Ok(self)
    }

    /// Set the response body to HTML and add the Content-Type header
    pub fn with_html(mut self, html: impl Into<Bytes>) -> Self {
        self.body = html.into();
        self.headers.insert(
            hyper::header::CONTENT_TYPE,
            hyper::header::HeaderValue::from_static("text/html; charset=utf-8"),
        );
        self
    }
}
