//! Endpoint factory: single endpoints, whole resources from an action table, and global error handlers.

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::handlers::ErrorHandlerRegistry;
use crate::route::RouteTemplate;
use crate::state::ClientState;
use crate::transport::{HttpBackend, ReqwestBackend};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Route suffix and the argument names appended for one action. Serialized as `["/suffix", ["arg"]]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action(pub String, pub Vec<String>);

impl Action {
    pub fn new<S: Into<String>>(suffix: impl Into<String>, extra_args: impl IntoIterator<Item = S>) -> Self {
        Action(suffix.into(), extra_args.into_iter().map(Into::into).collect())
    }

    pub fn suffix(&self) -> &str {
        &self.0
    }

    pub fn extra_args(&self) -> &[String] {
        &self.1
    }
}

pub type ActionTable = BTreeMap<String, Action>;

/// Named endpoints produced by `EndpointFactory::make`.
#[derive(Clone, Default)]
pub struct Resource {
    endpoints: BTreeMap<String, Endpoint>,
}

impl Resource {
    pub fn get(&self, action: &str) -> Option<&Endpoint> {
        self.endpoints.get(action)
    }

    pub fn endpoint(&self, action: &str) -> Result<&Endpoint, ApiError> {
        self.get(action)
            .ok_or_else(|| ApiError::UnknownAction(action.to_string()))
    }

    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Endpoint)> {
        self.endpoints.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[derive(Clone)]
pub struct EndpointFactory {
    state: ClientState,
}

impl EndpointFactory {
    pub fn new(backend: impl HttpBackend + 'static) -> Self {
        Self::with_state(ClientState::new(Arc::new(backend)))
    }

    pub fn with_state(state: ClientState) -> Self {
        EndpointFactory { state }
    }

    /// Factory over a `ReqwestBackend` built from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(ReqwestBackend::from_config(config)?))
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn error_handlers(&self) -> &ErrorHandlerRegistry {
        &self.state.error_handlers
    }

    pub fn make_endpoint<S: AsRef<str>>(&self, route: &str, arg_names: &[S]) -> Endpoint {
        Endpoint::new(
            RouteTemplate::parse(route),
            arg_names.iter().map(|s| s.as_ref().to_string()).collect(),
            self.state.clone(),
        )
    }

    /// One endpoint per action: route `base_url + suffix`, args `arg_names ++ extra_args`.
    pub fn make<S: AsRef<str>>(&self, base_url: &str, arg_names: &[S], actions: &ActionTable) -> Resource {
        let endpoints = actions
            .iter()
            .map(|(name, action)| {
                let route = format!("{}{}", base_url, action.suffix());
                let args: Vec<&str> = arg_names
                    .iter()
                    .map(|s| s.as_ref())
                    .chain(action.extra_args().iter().map(String::as_str))
                    .collect();
                (name.clone(), self.make_endpoint(&route, args.as_slice()))
            })
            .collect();
        Resource { endpoints }
    }

    /// Runs on every request error of every endpoint from this factory, after the per-call callback.
    pub fn register_global_error_handler(&self, handler: impl Fn(&ApiError) + Send + Sync + 'static) {
        self.state.error_handlers.register(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_deserializes_from_pair() {
        let table: ActionTable =
            serde_json::from_str(r#"{"get": ["/:id", ["id"]], "list": ["", []]}"#).unwrap();
        assert_eq!(table["get"], Action::new("/:id", ["id"]));
        assert_eq!(table["list"].suffix(), "");
        assert!(table["list"].extra_args().is_empty());
    }
}
