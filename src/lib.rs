//! Endpoint SDK: route-templated REST client endpoints over a pluggable HTTP backend.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod factory;
pub mod handlers;
pub mod payload;
pub mod request;
pub mod route;
pub mod services;
pub mod state;
pub mod transport;

pub use config::{load_services_from_path, load_services_from_str, ClientConfig, ServiceConfig, ServicesConfig};
pub use endpoint::{Endpoint, EndpointRequest};
pub use error::{ApiError, ConfigError, ErrorDetail};
pub use factory::{Action, ActionTable, EndpointFactory, Resource};
pub use handlers::{Callbacks, ErrorHandlerRegistry};
pub use payload::NamedArgs;
pub use request::{HttpResponse, Payload, Placement, RequestOptions, Verb};
pub use route::{convert_url_rule, InvocationSpec, RouteTemplate};
pub use services::ServiceRegistry;
pub use state::ClientState;
pub use transport::{HttpBackend, ReqwestBackend};
