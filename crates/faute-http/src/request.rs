use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};

/// Read-only snapshot of an inbound HTTP request
///
/// Carries only what error dispatch needs: the route path for redirect
/// targets and the headers used for content negotiation.
pub struct Request {
    pub method: Method,
    pub uri: Uri,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Request {
    /// Create a new Request from its parts
    ///
    /// # Examples
    ///
    /// ```
    /// use faute_http::Request;
    /// use hyper::{Method, Uri, Version, HeaderMap};
    /// use bytes::Bytes;
    ///
    /// let request = Request::new(
    ///     Method::GET,
    ///     Uri::from_static("/admin/stations"),
    ///     Version::HTTP_11,
    ///     HeaderMap::new(),
    ///     Bytes::new(),
    /// );
    /// assert_eq!(request.path(), "/admin/stations");
    /// ```
    pub fn new(
        method: Method,
        uri: Uri,
        version: Version,
        headers: HeaderMap,
        body: Bytes,
    ) -> Self {
        Self {
            method,
            uri,
            version,
            headers,
            body,
        }
    }

    /// Start building a Request
    ///
    /// # Examples
    ///
    /// ```
    /// use faute_http::Request;
    /// use hyper::Method;
    ///
    /// let request = Request::builder()
    ///     .method(Method::GET)
    ///     .uri("/profile")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.path(), "/profile");
    /// ```
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// The path component of the request URI
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Whether the request was made by an XHR-style client
    ///
    /// Detected from the `X-Requested-With: XMLHttpRequest` header sent
    /// by browser fetch wrappers and API clients. The value compare is
    /// case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use faute_http::Request;
    /// use hyper::Method;
    ///
    /// let request = Request::builder()
    ///     .method(Method::GET)
    ///     .uri("/api/status")
    ///     .header("X-Requested-With", "XMLHttpRequest")
    ///     .build()
    ///     .unwrap();
    /// assert!(request.is_xhr());
    ///
    /// let plain = Request::builder().uri("/page").build().unwrap();
    /// assert!(!plain.is_xhr());
    /// ```
    pub fn is_xhr(&self) -> bool {
        self.headers
            .get("x-requested-with")
            .and_then(|h| h.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("xmlhttprequest"))
    }
}

/// Builder for [`Request`]
pub struct RequestBuilder {
    method: Method,
    uri: Option<Uri>,
    uri_error: Option<String>,
    version: Version,
    headers: HeaderMap,
    body: Bytes,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::GET,
            uri: None,
            uri_error: None,
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the request URI; invalid input surfaces at `build()`
    pub fn uri(mut self, uri: &str) -> Self {
        match uri.parse::<Uri>() {
            Ok(parsed) => self.uri = Some(parsed),
            Err(e) => self.uri_error = Some(e.to_string()),
        }
        self
    }

    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Append a single header; invalid names or values are dropped
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes()) {
            if let Ok(header_value) = hyper::header::HeaderValue::from_str(value) {
                self.headers.insert(header_name, header_value);
            }
        }
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> crate::Result<Request> {
        if let Some(e) = self.uri_error {
            return Err(crate::Error::InvalidUri(e));
        }
        let uri = self.uri.unwrap_or_else(|| Uri::from_static("/"));
        Ok(Request::new(
            self.method,
            uri,
            self.version,
            self.headers,
            self.body,
        ))
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xhr_header_value_is_case_insensitive() {
        let request = Request::builder()
            .uri("/api")
            .header("X-Requested-With", "xmlhttprequest")
            .build()
            .unwrap();
        assert!(request.is_xhr());
    }

    #[test]
    fn test_other_requested_with_values_are_not_xhr() {
        let request = Request::builder()
            .uri("/api")
            .header("X-Requested-With", "com.example.app")
            .build()
            .unwrap();
        assert!(!request.is_xhr());
    }

    #[test]
    fn test_path_strips_query() {
        let request = Request::builder()
            .uri("/search?q=jazz")
            .build()
            .unwrap();
        assert_eq!(request.path(), "/search");
    }

    #[test]
    fn test_invalid_uri_surfaces_at_build() {
        let result = Request::builder().uri("http://[broken").build();
        assert!(result.is_err());
    }
}
