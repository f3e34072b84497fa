//! HTTP request building.
//!
//! Use [`Request::builder`] to construct requests with headers, query
//! parameters, and bodies. Interceptors mutate requests through
//! [`Request::headers_mut`] before the client transmits them.
//!
//! # Example
//!
//! ```
//! use maillon::Request;
//!
//! let request = Request::builder(http::Method::GET, "https://api.example.com".parse().unwrap())
//!     .header("Accept", "application/json")
//!     .query("page", "1")
//!     .build();
//! ```

use std::collections::HashMap;

use bytes::Bytes;

/// An HTTP request with method, URL, headers, and optional body.
///
/// Header names are kept as opaque strings; no case normalization or
/// validation is performed here.
#[derive(Debug, Clone)]
pub struct Request {
    method: http::Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: http::Method, url: url::Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &http::Method {
        &self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    ///
    /// This is the surface interceptors work against: inserting an existing
    /// name overwrites its value.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (http::Method, url::Url, HashMap<String, String>, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }

    /// Reassemble a request from its parts.
    #[must_use]
    pub fn from_parts(
        method: http::Method,
        url: url::Url,
        headers: HashMap<String, String>,
        body: Option<Bytes>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: http::Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Appends a query parameter to the URL.
    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(name, value);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_basic() {
        let url = url::Url::parse("https://api.example.com/foo").expect("valid URL");
        let request = Request::builder(http::Method::GET, url.clone())
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(request.url().as_str(), "https://api.example.com/foo");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn request_builder_with_query() {
        let url = url::Url::parse("https://api.example.com/foo").expect("valid URL");
        let request = Request::builder(http::Method::GET, url)
            .query("page", "1")
            .query("limit", "10")
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/foo?page=1&limit=10"
        );
    }

    #[test]
    fn request_headers_mut_overwrites() {
        let url = url::Url::parse("https://api.example.com/foo").expect("valid URL");
        let mut request = Request::builder(http::Method::GET, url)
            .header("X-Library", "old")
            .build();

        request
            .headers_mut()
            .insert("X-Library".to_string(), "libValue".to_string());

        assert_eq!(request.header("X-Library"), Some("libValue"));
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn request_header_names_are_opaque() {
        // No case folding: "x-library" and "X-Library" are distinct keys.
        let url = url::Url::parse("https://api.example.com/foo").expect("valid URL");
        let request = Request::builder(http::Method::GET, url)
            .header("X-Library", "a")
            .header("x-library", "b")
            .build();

        assert_eq!(request.header("X-Library"), Some("a"));
        assert_eq!(request.header("x-library"), Some("b"));
    }

    #[test]
    fn request_round_trips_through_parts() {
        let url = url::Url::parse("https://api.example.com/foo").expect("valid URL");
        let request = Request::builder(http::Method::POST, url)
            .header("Content-Type", "application/json")
            .body(Bytes::from_static(b"{}"))
            .build();

        let (method, url, headers, body) = request.into_parts();
        let rebuilt = Request::from_parts(method, url, headers, body);

        assert_eq!(rebuilt.method(), http::Method::POST);
        assert_eq!(rebuilt.header("Content-Type"), Some("application/json"));
        assert_eq!(rebuilt.body(), Some(&Bytes::from_static(b"{}")));
    }
}
