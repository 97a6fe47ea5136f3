// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locally extracted source annotations.
//!
//! Annotations are produced by an external scanner and handed to the sync
//! engine as JSON objects, one per line. They are read-only from here on.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;

/// A tagged source comment (e.g. `[todo] - handle retries`) with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Tag name as written in the source, e.g. "todo" or "review".
    pub tag: String,
    /// Source file path, relative to the scanned root.
    pub path: String,
    /// 1-based line number of the tag.
    pub line: u32,
    /// Lines surrounding the tag, in file order.
    #[serde(default)]
    pub context: Vec<String>,
    /// Human-readable title, usually the comment text after the tag.
    pub title: String,
}

impl Annotation {
    pub fn new(
        tag: impl Into<String>,
        path: impl Into<String>,
        line: u32,
        context: Vec<String>,
        title: impl Into<String>,
    ) -> Self {
        Annotation {
            tag: tag.into(),
            path: path.into(),
            line,
            context,
            title: title.into(),
        }
    }

    /// Parses a single JSON object into an annotation and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let annotation: Annotation = serde_json::from_str(json)?;
        annotation.validate()?;
        Ok(annotation)
    }

    /// Checks the fields the remote issue cannot do without.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAnnotation`] when the tag, path, or title is blank.
    pub fn validate(&self) -> Result<()> {
        if self.tag.trim().is_empty() {
            return Err(Error::InvalidAnnotation("tag is empty".to_string()));
        }
        if self.path.trim().is_empty() {
            return Err(Error::InvalidAnnotation("path is empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::InvalidAnnotation("title is empty".to_string()));
        }
        Ok(())
    }

    /// Stable identity of this annotation across runs.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }

    /// Title used for the remote issue: `"{title} [{path}]"`.
    pub fn issue_title(&self) -> String {
        format!("{} [{}]", self.title, self.path)
    }
}

#[cfg(test)]
#[path = "annotation_tests.rs"]
mod tests;
