//! Raw config types: client settings and the services definition JSON.

use crate::factory::Action;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prepended to relative endpoint urls by the reqwest backend.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,
    /// Prefix for every service route, e.g. "/api".
    #[serde(default)]
    pub url_prefix: String,
}

/// One service: base argument names and its endpoints keyed by action.
/// Endpoint routes may use either `:name` or `<conv:name>` placeholders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub args: Vec<String>,
    pub endpoints: BTreeMap<String, Action>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Overrides `ClientConfig::url_prefix` when set.
    #[serde(default)]
    pub url_prefix: Option<String>,
    pub services: BTreeMap<String, ServiceConfig>,
}
