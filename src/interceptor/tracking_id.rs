//! Tracking identifier interceptor.

use std::sync::Arc;

use uuid::Uuid;

use crate::{Request, Result};

use super::RequestInterceptor;

/// Default header name for tracking identifiers.
pub const DEFAULT_TRACKING_HEADER: &str = "X-Tracking-ID";

/// Interceptor that sets a fresh random tracking identifier per request.
///
/// Each application generates a new UUID v4 and writes it in the canonical
/// 36-character hyphenated form. Uniqueness relies solely on the generator's
/// randomness; no deduplication is performed.
///
/// # Example
///
/// ```
/// use maillon::interceptor::{RequestInterceptor, TrackingIdInterceptor};
/// use maillon::Request;
///
/// let tracking = TrackingIdInterceptor::default();
///
/// let url = "https://api.example.com/foo".parse().unwrap();
/// let mut request = Request::builder(http::Method::GET, url).build();
/// tracking.apply(&mut request).unwrap();
///
/// let id = request.header("X-Tracking-ID").unwrap();
/// assert_eq!(id.len(), 36);
/// ```
#[derive(Debug, Clone)]
pub struct TrackingIdInterceptor {
    name: Arc<str>,
}

impl TrackingIdInterceptor {
    /// Create an interceptor writing identifiers under the given header name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
        }
    }

    /// Header name set by this interceptor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TrackingIdInterceptor {
    fn default() -> Self {
        Self::new(DEFAULT_TRACKING_HEADER)
    }
}

impl RequestInterceptor for TrackingIdInterceptor {
    fn apply(&self, request: &mut Request) -> Result<()> {
        request
            .headers_mut()
            .insert(self.name.to_string(), Uuid::new_v4().to_string());
        Ok(())
    }
}
