//! Endpoints bound to a route template and positional argument names.

use crate::error::ApiError;
use crate::handlers::Callbacks;
use crate::payload::NamedArgs;
use crate::request::{HttpResponse, RequestOptions, Verb};
use crate::route::{InvocationSpec, RouteTemplate};
use crate::state::ClientState;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct Endpoint {
    route: Arc<RouteTemplate>,
    arg_names: Arc<[String]>,
    state: ClientState,
}

impl Endpoint {
    pub(crate) fn new(route: RouteTemplate, arg_names: Vec<String>, state: ClientState) -> Self {
        Endpoint {
            route: Arc::new(route),
            arg_names: arg_names.into(),
            state,
        }
    }

    pub fn route(&self) -> &str {
        self.route.as_str()
    }

    pub fn template(&self) -> &RouteTemplate {
        &self.route
    }

    pub fn arg_names(&self) -> &[String] {
        &self.arg_names
    }

    /// Bind positional arguments. Extra values are ignored; missing ones stay undefined.
    pub fn call(&self, args: &[Value]) -> EndpointRequest {
        let named = NamedArgs::from_positional(&*self.arg_names, args);
        EndpointRequest {
            spec: self.route.build(&named),
            state: self.state.clone(),
        }
    }

    /// URL for named arguments, without positional binding.
    pub fn url(&self, args: &NamedArgs) -> String {
        self.route.build(args).url
    }

    /// Send `options` to the URL built from `url_args`. No per-call or global handlers run.
    pub async fn http(
        &self,
        url_args: &NamedArgs,
        mut options: RequestOptions,
    ) -> Result<HttpResponse, ApiError> {
        options.url = self.url(url_args);
        tracing::debug!(method = %options.method, url = %options.url, "request");
        self.state.backend.send(&options).await?.error_for_status()
    }
}

/// One bound call of an endpoint.
pub struct EndpointRequest {
    spec: InvocationSpec,
    state: ClientState,
}

impl EndpointRequest {
    pub fn spec(&self) -> &InvocationSpec {
        &self.spec
    }

    pub fn url(&self) -> &str {
        &self.spec.url
    }

    pub fn data(&self) -> &NamedArgs {
        &self.spec.data
    }

    /// Send with the built URL. On failure the per-call error callback runs before every
    /// registered error handler, in registration order.
    pub async fn execute(
        &self,
        mut options: RequestOptions,
        callbacks: Callbacks,
    ) -> Result<HttpResponse, ApiError> {
        options.url = self.spec.url.clone();
        tracing::debug!(method = %options.method, url = %options.url, "request");
        let result = match self.state.backend.send(&options).await {
            Ok(response) => response.error_for_status(),
            Err(e) => Err(e),
        };
        match &result {
            Ok(response) => callbacks.success(response),
            Err(err) => {
                callbacks.error(err);
                self.state.error_handlers.dispatch(err);
            }
        }
        result
    }

    async fn send(&self, verb: Verb, callbacks: Callbacks) -> Result<HttpResponse, ApiError> {
        let options = RequestOptions::with_data(verb, self.spec.data.clone());
        self.execute(options, callbacks).await
    }

    pub async fn get(&self, callbacks: Callbacks) -> Result<HttpResponse, ApiError> {
        self.send(Verb::Get, callbacks).await
    }

    pub async fn post(&self, callbacks: Callbacks) -> Result<HttpResponse, ApiError> {
        self.send(Verb::Post, callbacks).await
    }

    pub async fn put(&self, callbacks: Callbacks) -> Result<HttpResponse, ApiError> {
        self.send(Verb::Put, callbacks).await
    }

    pub async fn delete(&self, callbacks: Callbacks) -> Result<HttpResponse, ApiError> {
        self.send(Verb::Delete, callbacks).await
    }
}
