// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Content fingerprints for annotations.
//!
//! The fingerprint is the only thing that ties a local annotation to an issue
//! already on the tracker. It is embedded verbatim in the issue body and found
//! again later by substring search, so its text form must never change.
//!
//! Known limitation: the line number is part of the identity, so moving an
//! annotation (for example by inserting lines above it) yields a new
//! fingerprint and the issue is posted again.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::annotation::Annotation;

/// Number of hex characters kept from the digest.
pub const FINGERPRINT_LEN: usize = 32;

/// Hex digest identifying one annotation instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Computes the fingerprint from tag, path, line, and context.
    ///
    /// The title is deliberately left out: it is derived from the context and
    /// would only duplicate it.
    pub fn of(annotation: &Annotation) -> Self {
        let mut hasher = Sha256::new();
        update_field(&mut hasher, annotation.tag.as_bytes());
        update_field(&mut hasher, annotation.path.as_bytes());
        update_field(&mut hasher, annotation.line.to_string().as_bytes());
        hasher.update((annotation.context.len() as u64).to_le_bytes());
        for line in &annotation.context {
            update_field(&mut hasher, line.as_bytes());
        }
        let digest = hasher.finalize();
        Fingerprint(hex::encode(&digest[..FINGERPRINT_LEN / 2]))
    }

    /// Wraps an existing fingerprint string (e.g. one read back from a tracker).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Fingerprint(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Feeds one length-prefixed field, so no two field lists hash the same input.
fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "fingerprint_tests.rs"]
mod tests;
