// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitLab issues API (v4).
//!
//! The private token travels in the `private_token` query parameter for the
//! listing and additionally in the `PRIVATE-TOKEN` header when posting.

use serde_json::{json, Value};
use tagsync_core::{IssueStatus, RemoteIssue, TrackerKind, TrackerState};

use super::{json_u64, IssuePayload, RemoteBackend, PAGE_SIZE};
use crate::error::{Error, Result};
use crate::sync::{Auth, HttpRequest};

const DEFAULT_HOST: &str = "gitlab.com";

pub struct GitLabBackend {
    marker_label: String,
}

impl GitLabBackend {
    pub fn new(marker_label: &str) -> Self {
        GitLabBackend {
            marker_label: marker_label.to_string(),
        }
    }

    /// `{host}/api/v4/projects/{id}/issues`; path-style ids are URL-encoded.
    fn collection(state: &TrackerState) -> String {
        format!(
            "{}/api/v4/projects/{}/issues",
            state.host,
            state.project.replace('/', "%2F")
        )
    }
}

impl RemoteBackend for GitLabBackend {
    fn kind(&self) -> TrackerKind {
        TrackerKind::GitLab
    }

    fn default_host(&self) -> &'static str {
        DEFAULT_HOST
    }

    fn marker_label(&self) -> &str {
        &self.marker_label
    }

    fn normalize_project(&self, project: &str) -> Result<String> {
        let project = project.trim().trim_matches('/');
        if project.is_empty() {
            return Err(Error::InvalidProject {
                tracker: "gitlab",
                project: project.to_string(),
                hint: "use the numeric project id or 'group/name'",
            });
        }
        Ok(project.to_string())
    }

    fn list_request(&self, state: &TrackerState, page: u32) -> HttpRequest {
        HttpRequest::get(Self::collection(state), state.secure)
            .with_query("private_token", &state.token)
            .with_query("per_page", PAGE_SIZE)
            .with_query("page", page)
    }

    fn create_request(&self, state: &TrackerState, payload: &IssuePayload) -> HttpRequest {
        let body = json!({
            "title": payload.title,
            "labels": payload.labels.join(","),
            "description": payload.body,
        });
        HttpRequest::post(Self::collection(state), state.secure, body)
            .with_query("private_token", &state.token)
            .with_auth(Auth::Header {
                name: "PRIVATE-TOKEN",
                value: state.token.clone(),
            })
    }

    fn parse_issue(&self, value: &Value) -> Option<RemoteIssue> {
        let title = value.get("title")?.as_str()?;
        // "opened" and "reopened" are both open; anything unknown is scanned
        // with the open issues rather than dropped.
        let status = match value.get("state").and_then(Value::as_str) {
            Some("closed") => IssueStatus::Closed,
            _ => IssueStatus::Open,
        };
        let body = value
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let number = value.get("iid").and_then(json_u64);
        Some(RemoteIssue::new(title, body, status).with_number(number))
    }
}

#[cfg(test)]
#[path = "gitlab_tests.rs"]
mod tests;
