// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tagsync-core operations.

use thiserror::Error;

/// All possible errors that can occur in tagsync-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid annotation: {0}")]
    InvalidAnnotation(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tagsync-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
