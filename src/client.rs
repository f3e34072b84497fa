//! HTTP client implementation using hyper-util.
//!
//! [`HyperClient`] owns a connection pool and a [`CompositeInterceptor`]
//! built once from the interceptors registered on the builder. The chain is
//! applied to every outgoing request before transmission; a failing
//! interceptor aborts the request before anything is sent.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{
    Error, Request, Response, Result,
    config::{ClientConfig, ClientConfigBuilder},
    connector::https_connector,
    interceptor::{CompositeInterceptor, RequestInterceptor},
};

/// Core HTTP client trait.
///
/// The seam between request preparation and transmission; implement it to
/// substitute a mock transport in tests.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if an interceptor fails or the request cannot be
    /// transmitted (network errors, TLS errors, timeouts).
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

/// HTTP client using hyper-util with connection pooling, TLS, and a request
/// interceptor chain.
///
/// # Example
///
/// ```ignore
/// use maillon::{HyperClient, StaticHeaderInterceptor, TrackingIdInterceptor};
///
/// let client = HyperClient::builder()
///     .interceptor(StaticHeaderInterceptor::new("X-Auth-Token", "mockedTokenValue"))
///     .interceptor(TrackingIdInterceptor::default())
///     .interceptor(StaticHeaderInterceptor::new("X-Library", "libValue"))
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    interceptors: CompositeInterceptor,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("interceptors", &self.interceptors)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default configuration and no interceptors.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the interceptor chain applied to every outgoing request.
    #[must_use]
    pub const fn interceptors(&self) -> &CompositeInterceptor {
        &self.interceptors
    }

    /// Build a hyper request from a maillon request.
    fn build_hyper_request(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder().method(method).uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }

    /// Transmit an already-intercepted request.
    async fn send(&self, request: Request) -> Result<Response> {
        let hyper_request = Self::build_hyper_request(request)?;

        let response = tokio::time::timeout(self.config.timeout, self.inner.request(hyper_request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        Ok(Response::new(status, response_headers, body))
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for HyperClient {
    async fn execute(&self, mut request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().to_string();

        let span = span!(Level::INFO, "http_request", %method, %url);

        async {
            let start = Instant::now();

            let result = match self.interceptors.apply(&mut request) {
                Ok(()) => {
                    debug!(headers = ?request.headers(), "sending request");
                    self.send(request).await
                }
                // The request is never sent when the chain fails.
                Err(err) => Err(err),
            };

            let elapsed = start.elapsed();
            let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(response) => {
                    let status = response.status();
                    if response.is_success() {
                        info!(status, elapsed_ms, "request completed");
                    } else {
                        warn!(status, elapsed_ms, "request failed with HTTP error");
                    }
                }
                Err(err) => {
                    warn!(error = %err, elapsed_ms, "request failed");
                }
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Builder for [`HyperClient`].
///
/// Interceptors are registered individually and composed into a single
/// [`CompositeInterceptor`] exactly once, when [`build`](Self::build) runs;
/// the chain cannot change afterwards. Registration order is application
/// order.
#[derive(Default)]
pub struct HyperClientBuilder {
    config: ClientConfigBuilder,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl std::fmt::Debug for HyperClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClientBuilder")
            .field("config", &self.config)
            .field("interceptors_count", &self.interceptors.len())
            .finish()
    }
}

impl HyperClientBuilder {
    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    /// Register an interceptor at the end of the chain.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = HyperClient::builder()
    ///     .interceptor(StaticHeaderInterceptor::new("X-Auth-Token", "mockedTokenValue"))
    ///     .build();
    /// ```
    #[must_use]
    pub fn interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Register a shared interceptor at the end of the chain.
    #[must_use]
    pub fn interceptor_arc(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Register several interceptors, preserving their order.
    #[must_use]
    pub fn interceptors(
        mut self,
        interceptors: impl IntoIterator<Item = Arc<dyn RequestInterceptor>>,
    ) -> Self {
        self.interceptors.extend(interceptors);
        self
    }

    /// Build the client.
    ///
    /// Composes the registered interceptors into the final chain.
    #[must_use]
    pub fn build(self) -> HyperClient {
        let config = self.config.build();

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector());

        HyperClient {
            inner,
            interceptors: CompositeInterceptor::new(self.interceptors),
            config,
        }
    }
}
