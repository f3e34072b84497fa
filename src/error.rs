//! Error types for maillon.

use derive_more::{Display, Error, From};

/// Main error type for maillon operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// An interceptor failed while mutating an outgoing request.
    ///
    /// The first failure in a chain aborts the remaining interceptors and
    /// surfaces here unchanged; headers already set by earlier interceptors
    /// are left on the request.
    #[display("interceptor '{name}' failed: {message}")]
    #[from(skip)]
    Interceptor {
        /// Name of the failing interceptor.
        name: String,
        /// Failure message.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an interceptor failure.
    #[must_use]
    pub fn interceptor(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Interceptor {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if this is an interceptor failure.
    #[must_use]
    pub const fn is_interceptor(&self) -> bool {
        matches!(self, Self::Interceptor { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the name of the failing interceptor, if any.
    #[must_use]
    pub fn interceptor_name(&self) -> Option<&str> {
        match self {
            Self::Interceptor { name, .. } => Some(name),
            _ => None,
        }
    }
}
