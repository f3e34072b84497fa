//! Fixed-value header interceptor.

use std::sync::Arc;

use crate::{Request, Result};

use super::RequestInterceptor;

/// Interceptor that always sets the same header name/value pair.
///
/// Applying it twice is equivalent to applying it once. It never fails.
///
/// # Example
///
/// ```
/// use maillon::interceptor::{RequestInterceptor, StaticHeaderInterceptor};
/// use maillon::Request;
///
/// let auth = StaticHeaderInterceptor::new("X-Auth-Token", "mockedTokenValue");
///
/// let url = "https://api.example.com/foo".parse().unwrap();
/// let mut request = Request::builder(http::Method::GET, url).build();
/// auth.apply(&mut request).unwrap();
///
/// assert_eq!(request.header("X-Auth-Token"), Some("mockedTokenValue"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticHeaderInterceptor {
    name: Arc<str>,
    value: Arc<str>,
}

impl StaticHeaderInterceptor {
    /// Create an interceptor setting `name` to `value` on every request.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
            value: Arc::from(value.into()),
        }
    }

    /// Header name set by this interceptor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header value set by this interceptor.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl RequestInterceptor for StaticHeaderInterceptor {
    fn apply(&self, request: &mut Request) -> Result<()> {
        request
            .headers_mut()
            .insert(self.name.to_string(), self.value.to_string());
        Ok(())
    }
}
