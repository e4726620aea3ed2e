//! The HTTP collaborator endpoints send through.

pub mod reqwest_backend;

pub use reqwest_backend::ReqwestBackend;

use crate::error::ApiError;
use crate::request::{HttpResponse, RequestOptions};
use async_trait::async_trait;
use std::sync::Arc;

/// Sends one request. Non-2xx responses are returned as `Ok`; endpoints classify them.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(&self, request: &RequestOptions) -> Result<HttpResponse, ApiError>;
}

#[async_trait]
impl<T: HttpBackend + ?Sized> HttpBackend for Arc<T> {
    async fn send(&self, request: &RequestOptions) -> Result<HttpResponse, ApiError> {
        (**self).send(request).await
    }
}
