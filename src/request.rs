//! Request options and responses exchanged with the HTTP backend.

use crate::error::ApiError;
use crate::payload::NamedArgs;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Where leftover call data travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Query,
    Body,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }

    /// GET and DELETE carry data as query params; the others as a body.
    pub fn placement(&self) -> Placement {
        match self {
            Verb::Get | Verb::Delete => Placement::Query,
            Verb::Post | Verb::Put | Verb::Patch => Placement::Body,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    Query(NamedArgs),
    Body(NamedArgs),
}

impl Payload {
    pub fn placed(placement: Placement, data: NamedArgs) -> Self {
        match placement {
            Placement::Query => Payload::Query(data),
            Placement::Body => Payload::Body(data),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Verb,
    /// Set by the endpoint before sending; relative urls are resolved by the backend.
    pub url: String,
    pub payload: Payload,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new(method: Verb) -> Self {
        RequestOptions {
            method,
            url: String::new(),
            payload: Payload::Empty,
            headers: Vec::new(),
            timeout: None,
        }
    }

    /// Options for `method` with `data` placed where that verb expects it.
    pub fn with_data(method: Verb, data: NamedArgs) -> Self {
        let mut options = RequestOptions::new(method);
        options.payload = Payload::placed(method.placement(), data);
        options
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the `data` field of a `{"data": ..., "meta": ...}` envelope.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let envelope: Envelope<T> = serde_json::from_str(&self.body)?;
        Ok(envelope.data)
    }

    /// Non-2xx responses become `ApiError::Status`.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_status(self.status, self.body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn verbs_choose_placement() {
        let data = NamedArgs::new().with("q", "x");
        assert_eq!(
            RequestOptions::with_data(Verb::Get, data.clone()).payload,
            Payload::Query(data.clone())
        );
        assert_eq!(
            RequestOptions::with_data(Verb::Delete, data.clone()).payload,
            Payload::Query(data.clone())
        );
        assert_eq!(
            RequestOptions::with_data(Verb::Post, data.clone()).payload,
            Payload::Body(data.clone())
        );
        assert_eq!(
            RequestOptions::with_data(Verb::Put, data.clone()).payload,
            Payload::Body(data)
        );
    }

    #[test]
    fn unwraps_data_envelope() {
        let resp = HttpResponse::new(200, r#"{"data":[{"id":1}],"meta":{"count":1}}"#);
        let rows: Vec<Value> = resp.data().unwrap();
        assert_eq!(rows, vec![json!({"id": 1})]);
    }

    #[test]
    fn error_for_status_keeps_success() {
        assert!(HttpResponse::new(204, "").error_for_status().is_ok());
        let err = HttpResponse::new(422, "{}").error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut resp = HttpResponse::new(200, "");
        resp.headers.push(("Content-Type".into(), "application/json".into()));
        assert_eq!(resp.header("content-type"), Some("application/json"));
    }
}
