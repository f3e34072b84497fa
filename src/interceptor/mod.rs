//! Request interceptors.
//!
//! An interceptor is a unit that mutates an outgoing [`Request`] before the
//! client transmits it, typically by adding a header. Independently-authored
//! interceptors compose into a single ordered pipeline with
//! [`CompositeInterceptor`], which the client applies to every request.
//!
//! # Available interceptors
//!
//! - [`StaticHeaderInterceptor`] - sets a fixed header name/value pair
//! - [`TrackingIdInterceptor`] - sets a fresh UUID v4 per request
//! - [`CompositeInterceptor`] - chains interceptors in registration order
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use maillon::interceptor::{
//!     CompositeInterceptor, RequestInterceptor, StaticHeaderInterceptor, TrackingIdInterceptor,
//! };
//! use maillon::Request;
//!
//! let chain = CompositeInterceptor::new(vec![
//!     Arc::new(StaticHeaderInterceptor::new("X-Auth-Token", "mockedTokenValue")),
//!     Arc::new(TrackingIdInterceptor::default()),
//!     Arc::new(StaticHeaderInterceptor::new("X-Library", "libValue")),
//! ]);
//!
//! let url = "https://api.example.com/foo".parse().unwrap();
//! let mut request = Request::builder(http::Method::GET, url).build();
//! chain.apply(&mut request).unwrap();
//!
//! assert_eq!(request.header("X-Auth-Token"), Some("mockedTokenValue"));
//! assert_eq!(request.header("X-Library"), Some("libValue"));
//! assert_eq!(request.header("X-Tracking-ID").map(str::len), Some(36));
//! ```

use std::sync::Arc;

use crate::{Request, Result};

mod static_header;
mod tracking_id;

pub use static_header::StaticHeaderInterceptor;
pub use tracking_id::{DEFAULT_TRACKING_HEADER, TrackingIdInterceptor};

/// A unit that mutates an outgoing request before transmission.
///
/// Implementations must not block (no I/O, no waits), must not retain a
/// reference to the request beyond the call, and must be safe to invoke
/// concurrently across independent requests. Any configuration is captured
/// read-only at construction time.
pub trait RequestInterceptor: Send + Sync {
    /// Mutate the request in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Interceptor`] if the interceptor cannot
    /// produce its mutation. Headers already set on the request are left
    /// untouched by a failure.
    fn apply(&self, request: &mut Request) -> Result<()>;
}

/// An interceptor that delegates to an ordered sequence of interceptors.
///
/// The sequence is fixed at construction and applied strictly in
/// registration order against the same request, so later interceptors
/// observe mutations made by earlier ones. When two interceptors set the
/// same header name, the last one wins. The first failure aborts the rest
/// of the chain and propagates unchanged; headers set before the failure
/// are not rolled back.
#[derive(Clone, Default)]
pub struct CompositeInterceptor {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl CompositeInterceptor {
    /// Create a composite from an ordered list of interceptors.
    ///
    /// An empty list is valid: applying it is a no-op.
    #[must_use]
    pub fn new(interceptors: Vec<Arc<dyn RequestInterceptor>>) -> Self {
        Self { interceptors }
    }

    /// Number of held interceptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Returns `true` if the composite holds no interceptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl std::fmt::Debug for CompositeInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeInterceptor")
            .field("len", &self.interceptors.len())
            .finish()
    }
}

impl RequestInterceptor for CompositeInterceptor {
    fn apply(&self, request: &mut Request) -> Result<()> {
        for interceptor in &self.interceptors {
            interceptor.apply(request)?;
        }
        Ok(())
    }
}

impl FromIterator<Arc<dyn RequestInterceptor>> for CompositeInterceptor {
    fn from_iter<I: IntoIterator<Item = Arc<dyn RequestInterceptor>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
