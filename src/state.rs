//! Shared client state: the backend and the error handler registry, cloned into every endpoint.

use crate::handlers::ErrorHandlerRegistry;
use crate::transport::HttpBackend;
use std::sync::Arc;

#[derive(Clone)]
pub struct ClientState {
    pub backend: Arc<dyn HttpBackend>,
    /// Appended to by `register_global_error_handler`; endpoints already handed out see new handlers.
    pub error_handlers: ErrorHandlerRegistry,
}

impl ClientState {
    pub fn new(backend: Arc<dyn HttpBackend>) -> Self {
        ClientState {
            backend,
            error_handlers: ErrorHandlerRegistry::new(),
        }
    }
}
