//! In-memory backend that records every request and replays scripted responses.

use async_trait::async_trait;
use endpoint_sdk::{ApiError, HttpBackend, HttpResponse, RequestOptions};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub enum Scripted {
    Respond(u16, String),
    Fail(String),
}

#[derive(Default)]
pub struct RecordingBackend {
    pub requests: Mutex<Vec<RequestOptions>>,
    script: Mutex<VecDeque<Scripted>>,
}

#[allow(dead_code)]
impl RecordingBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Respond(status, body.to_string()));
    }

    pub fn fail(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
    }

    pub fn last(&self) -> RequestOptions {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpBackend for RecordingBackend {
    async fn send(&self, request: &RequestOptions) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Respond(status, body)) => Ok(HttpResponse::new(status, body)),
            Some(Scripted::Fail(message)) => Err(ApiError::Transport(message)),
            None => Ok(HttpResponse::new(200, "{}")),
        }
    }
}
