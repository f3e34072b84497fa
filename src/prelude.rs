//! Prelude module for convenient imports.
//!
//! ```ignore
//! use maillon::prelude::*;
//! ```

pub use crate::interceptor::{
    CompositeInterceptor, RequestInterceptor, StaticHeaderInterceptor, TrackingIdInterceptor,
};
pub use crate::{
    ClientConfig, Error, HttpClient, HyperClient, Request, RequestBuilder, Response, Result,
};
