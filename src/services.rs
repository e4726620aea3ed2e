//! Builds a resource per service from a services definition.

use crate::config::{ClientConfig, ServicesConfig};
use crate::error::ApiError;
use crate::factory::{Action, ActionTable, EndpointFactory, Resource};
use crate::route::convert_url_rule;
use std::collections::BTreeMap;

#[derive(Clone, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, Resource>,
}

impl ServiceRegistry {
    /// Every service becomes `factory.make(prefix, service.args, endpoints)` with url rules
    /// converted to `:name` placeholders. The services file prefix wins over the client one.
    pub fn build(factory: &EndpointFactory, client: &ClientConfig, config: &ServicesConfig) -> Self {
        let prefix = config.url_prefix.as_deref().unwrap_or(&client.url_prefix);
        let services = config
            .services
            .iter()
            .map(|(name, service)| {
                let actions: ActionTable = service
                    .endpoints
                    .iter()
                    .map(|(action, endpoint)| {
                        let rule = convert_url_rule(endpoint.suffix());
                        (action.clone(), Action(rule, endpoint.extra_args().to_vec()))
                    })
                    .collect();
                tracing::debug!(service = %name, actions = actions.len(), "service built");
                (name.clone(), factory.make(prefix, service.args.as_slice(), &actions))
            })
            .collect();
        ServiceRegistry { services }
    }

    pub fn get(&self, name: &str) -> Option<&Resource> {
        self.services.get(name)
    }

    pub fn service(&self, name: &str) -> Result<&Resource, ApiError> {
        self.get(name)
            .ok_or_else(|| ApiError::UnknownService(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.services.iter().map(|(k, v)| (k.as_str(), v))
    }
}
