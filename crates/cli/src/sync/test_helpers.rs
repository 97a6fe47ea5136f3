// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync and remote tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;
use tagsync_core::{Annotation, TrackerState};

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError, TransportResult};

/// Scripted transport: replies are handed out in order, requests are recorded.
pub struct MockTransport {
    replies: Mutex<VecDeque<TransportResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response with the given status and JSON body.
    pub fn reply(self, status: u16, body: Value) -> Self {
        let message = match status {
            200 => "OK",
            201 => "Created",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            422 => "Unprocessable Entity",
            500 => "Internal Server Error",
            _ => "",
        };
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, message, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: TransportError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of requests sent so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// All requests sent so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &HttpRequest) -> TransportResult<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::ConnectionFailed("no scripted reply".into())))
    }
}

/// Value of the first query parameter named `key`.
pub fn query_param<'a>(request: &'a HttpRequest, key: &str) -> Option<&'a str> {
    request
        .query
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

/// Create a test annotation on the given line.
pub fn make_annotation(line: u32) -> Annotation {
    Annotation::new(
        "todo",
        "src/lib.rs",
        line,
        vec![format!("// [todo] - fix item {}", line)],
        format!("fix item {}", line),
    )
}

/// Tracker state with a token and the given host/project.
pub fn make_state(host: &str, project: &str) -> TrackerState {
    TrackerState {
        host: host.to_string(),
        project: project.to_string(),
        token: "test-token".to_string(),
        ..TrackerState::default()
    }
}
