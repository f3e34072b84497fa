//! Composable request interceptors for async HTTP clients.
//!
//! Inspired by OpenFeign's `RequestInterceptor`: independently-authored
//! units each mutate the outgoing request (usually by adding a header), and
//! a [`CompositeInterceptor`](interceptor::CompositeInterceptor) chains them
//! into one ordered pipeline applied to every request the client sends.
//!
//! # Example
//!
//! ```ignore
//! use maillon::prelude::*;
//!
//! let client = HyperClient::builder()
//!     .interceptor(StaticHeaderInterceptor::new("X-Auth-Token", "mockedTokenValue"))
//!     .interceptor(TrackingIdInterceptor::default())
//!     .interceptor(StaticHeaderInterceptor::new("X-Library", "libValue"))
//!     .build();
//!
//! let url = "https://api.example.com/api/internal/foo".parse()?;
//! let request = Request::builder(http::Method::GET, url).build();
//! let response = client.execute(request).await?;
//! ```
//!
//! Interceptors run in registration order against the same request, so later
//! interceptors observe earlier mutations and the last writer wins on header
//! collisions. The first interceptor failure aborts the chain and the
//! request is never sent.

mod client;
mod config;
mod connector;
mod error;
pub mod interceptor;
pub mod prelude;
mod request;
mod response;

pub use client::{HttpClient, HyperClient, HyperClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use interceptor::{
    CompositeInterceptor, RequestInterceptor, StaticHeaderInterceptor, TrackingIdInterceptor,
};
pub use request::{Request, RequestBuilder};
pub use response::Response;
