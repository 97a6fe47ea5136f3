// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for tracker HTTP calls.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests for production (blocking `reqwest`)
//! - Scripted transports for unit testing
//!
//! A transport performs exactly one request per call and never retries.
//! Status codes are returned, not interpreted.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;

use crate::config::HttpSettings;

const USER_AGENT_VALUE: &str = concat!("tagsync/", env!("CARGO_PKG_VERSION"));

/// Error type for transport operations.
///
/// Any of these means the request did not complete; nothing is known about
/// whether the tracker acted on it.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Could not establish a connection (refused, DNS failure, TLS).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request or response exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Request failed for another reason.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be read.
    #[error("receive failed: {0}")]
    ReceiveFailed(String),

    /// HTTP client could not be constructed.
    #[error("http client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::ConnectionFailed(e.to_string())
        } else {
            TransportError::RequestFailed(e.to_string())
        }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Where the access token goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    /// Token already in the query string, or no auth at all.
    None,
    /// `Authorization: Bearer <token>`.
    Bearer(String),
    /// A tracker-specific header such as `PRIVATE-TOKEN`.
    Header { name: &'static str, value: String },
}

/// A single request to a tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Host and path, without scheme or query.
    pub endpoint: String,
    /// `https` when true, `http` otherwise.
    pub secure: bool,
    pub method: Method,
    /// Query parameters, unencoded. The transport encodes them.
    pub query: Vec<(&'static str, String)>,
    pub auth: Auth,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(endpoint: impl Into<String>, secure: bool) -> Self {
        HttpRequest {
            endpoint: endpoint.into(),
            secure,
            method: Method::Get,
            query: Vec::new(),
            auth: Auth::None,
            body: None,
        }
    }

    pub fn post(endpoint: impl Into<String>, secure: bool, body: Value) -> Self {
        HttpRequest {
            endpoint: endpoint.into(),
            secure,
            method: Method::Post,
            query: Vec::new(),
            auth: Auth::None,
            body: Some(body),
        }
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// URL including scheme, without the query.
    pub fn url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}", scheme, self.endpoint)
    }
}

/// Parsed response: body, numeric status, and reason phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub body: Value,
    pub status: u16,
    pub message: String,
}

impl HttpResponse {
    pub fn new(status: u16, message: impl Into<String>, body: Value) -> Self {
        HttpResponse {
            body,
            status,
            message: message.into(),
        }
    }
}

/// Parses a raw response body.
///
/// Empty bodies become `Null`; bodies that are not JSON are kept as a string so
/// error pages still reach the caller.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Transport trait for one-shot HTTP calls.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations.
pub trait Transport {
    /// Perform exactly one request.
    fn send(&self, request: &HttpRequest) -> TransportResult<HttpResponse>;
}

/// HTTP transport implementation using blocking reqwest.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a new HTTP transport with the configured timeouts.
    pub fn new(settings: &HttpSettings) -> TransportResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> TransportResult<HttpResponse> {
        let url = request.url();
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        builder = builder
            .query(&request.query)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(ACCEPT, "application/json");
        builder = match &request.auth {
            Auth::None => builder,
            Auth::Bearer(token) => builder.bearer_auth(token),
            Auth::Header { name, value } => builder.header(*name, value),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.method,
            %url,
            query = %redact(&request.query),
            "sending request"
        );
        let response = builder.send()?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| TransportError::ReceiveFailed(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "received response");

        Ok(HttpResponse {
            body: parse_body(&text),
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("").to_string(),
        })
    }
}

/// Renders query parameters for logging with token values masked.
pub fn redact(query: &[(&'static str, String)]) -> String {
    query
        .iter()
        .map(|(key, value)| {
            if key.ends_with("token") {
                format!("{}=***", key)
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
