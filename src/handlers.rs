//! Per-call callbacks and the error handler registry shared by every endpoint of a factory.

use crate::error::ApiError;
use crate::request::HttpResponse;
use std::sync::{Arc, RwLock};

pub type ErrorHandler = Arc<dyn Fn(&ApiError) + Send + Sync>;

type SuccessCallback = Box<dyn FnOnce(&HttpResponse) + Send>;
type ErrorCallback = Box<dyn FnOnce(&ApiError) + Send>;

/// Optional success and error continuations for a single request.
#[derive(Default)]
pub struct Callbacks {
    on_success: Option<SuccessCallback>,
    on_error: Option<ErrorCallback>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success(mut self, f: impl FnOnce(&HttpResponse) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnOnce(&ApiError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub(crate) fn success(self, response: &HttpResponse) {
        if let Some(f) = self.on_success {
            f(response);
        }
    }

    pub(crate) fn error(self, err: &ApiError) {
        if let Some(f) = self.on_error {
            f(err);
        }
    }
}

/// Append-only, ordered list of error handlers. Clones share the same list.
#[derive(Clone, Default)]
pub struct ErrorHandlerRegistry {
    handlers: Arc<RwLock<Vec<ErrorHandler>>>,
}

impl ErrorHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, handler: impl Fn(&ApiError) + Send + Sync + 'static) {
        let mut handlers = self.handlers.write().unwrap_or_else(|e| e.into_inner());
        handlers.push(Arc::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every handler in registration order. Handlers registered during a dispatch
    /// only run from the next error on.
    pub fn dispatch(&self, err: &ApiError) {
        let snapshot: Vec<ErrorHandler> = self
            .handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        tracing::debug!(handlers = snapshot.len(), error = %err, "dispatching error");
        for handler in snapshot {
            handler(err);
        }
    }
}
