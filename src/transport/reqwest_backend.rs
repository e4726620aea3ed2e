//! `HttpBackend` over a shared `reqwest::Client`.

use super::HttpBackend;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::request::{HttpResponse, Payload, RequestOptions, Verb};
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ReqwestBackend {
    client: Client,
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl ReqwestBackend {
    pub fn new(client: Client, base_url: Option<String>) -> Self {
        ReqwestBackend {
            client,
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
            default_headers: Vec::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {}", e)))?;
        let mut backend = ReqwestBackend::new(client, config.base_url.clone());
        backend.default_headers = config
            .default_headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(backend)
    }

    /// Absolute urls pass through; relative ones are joined onto the base url.
    pub fn resolve_url(&self, url: &str) -> Result<String, ApiError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(url.to_string());
        }
        match &self.base_url {
            Some(base) if url.starts_with('/') => Ok(format!("{}{}", base, url)),
            Some(base) => Ok(format!("{}/{}", base, url)),
            None => Err(ApiError::InvalidUrl(format!(
                "relative url '{}' without a base url",
                url
            ))),
        }
    }
}

fn method(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Patch => Method::PATCH,
        Verb::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: &RequestOptions) -> Result<HttpResponse, ApiError> {
        let url = self.resolve_url(&request.url)?;
        let mut builder = self.client.request(method(request.method), &url);
        for (name, value) in self.default_headers.iter().chain(request.headers.iter()) {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        builder = match &request.payload {
            Payload::Empty => builder,
            Payload::Query(data) => builder.query(&data.to_query_pairs()),
            Payload::Body(data) => builder.json(&data.to_json_body()),
        };

        let response = builder.send().await.map_err(|e| {
            ApiError::Transport(format!("{} {} failed: {}", request.method, url, e))
        })?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("reading body of {} failed: {}", url, e)))?;
        Ok(HttpResponse { status, headers, body })
    }
}
