// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub REST issues API.
//!
//! The token is sent as a bearer token. `host` may carry a path prefix for
//! GitHub Enterprise (e.g. `github.example.com/api/v3`).

use serde_json::{json, Value};
use tagsync_core::{IssueStatus, RemoteIssue, TrackerKind, TrackerState};

use super::{json_u64, IssuePayload, RemoteBackend, PAGE_SIZE};
use crate::error::{Error, Result};
use crate::sync::{Auth, HttpRequest};

const DEFAULT_HOST: &str = "api.github.com";

pub struct GitHubBackend {
    marker_label: String,
}

impl GitHubBackend {
    pub fn new(marker_label: &str) -> Self {
        GitHubBackend {
            marker_label: marker_label.to_string(),
        }
    }

    fn collection(state: &TrackerState) -> String {
        format!("{}/repos/{}/issues", state.host, state.project)
    }
}

impl RemoteBackend for GitHubBackend {
    fn kind(&self) -> TrackerKind {
        TrackerKind::GitHub
    }

    fn default_host(&self) -> &'static str {
        DEFAULT_HOST
    }

    fn marker_label(&self) -> &str {
        &self.marker_label
    }

    fn normalize_project(&self, project: &str) -> Result<String> {
        let project = project.trim().trim_matches('/');
        match project.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(project.to_string())
            }
            _ => Err(Error::InvalidProject {
                tracker: "github",
                project: project.to_string(),
                hint: "use 'owner/repo'",
            }),
        }
    }

    fn list_request(&self, state: &TrackerState, page: u32) -> HttpRequest {
        HttpRequest::get(Self::collection(state), state.secure)
            .with_query("state", "all")
            .with_query("per_page", PAGE_SIZE)
            .with_query("page", page)
            .with_auth(Auth::Bearer(state.token.clone()))
    }

    fn create_request(&self, state: &TrackerState, payload: &IssuePayload) -> HttpRequest {
        let body = json!({
            "title": payload.title,
            "labels": payload.labels,
            "body": payload.body,
        });
        HttpRequest::post(Self::collection(state), state.secure, body)
            .with_auth(Auth::Bearer(state.token.clone()))
    }

    fn parse_issue(&self, value: &Value) -> Option<RemoteIssue> {
        // The issues listing also returns pull requests.
        if value.get("pull_request").is_some() {
            return None;
        }
        let title = value.get("title")?.as_str()?;
        let status = match value.get("state").and_then(Value::as_str) {
            Some("closed") => IssueStatus::Closed,
            _ => IssueStatus::Open,
        };
        let body = value.get("body").and_then(Value::as_str).unwrap_or_default();
        let number = value.get("number").and_then(json_u64);
        Some(RemoteIssue::new(title, body, status).with_number(number))
    }
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
