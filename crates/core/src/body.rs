// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue body format.
//!
//! ```text
//! __filename__ : src/net.rs
//! __line #__ : 42
//! __tag__ : todo
//! __md5__ : 3f2a...
//!
//! <context lines>
//! ```
//!
//! The dedup scan only relies on the fingerprint appearing somewhere in the
//! body, so the header labels are kept byte-for-byte compatible with issues
//! posted by earlier releases (hence the historical `__md5__` label).

use crate::annotation::Annotation;
use crate::fingerprint::Fingerprint;

pub const FILENAME_LABEL: &str = "__filename__";
pub const LINE_LABEL: &str = "__line #__";
pub const TAG_LABEL: &str = "__tag__";
pub const FINGERPRINT_LABEL: &str = "__md5__";

/// Renders the body posted for an annotation.
pub fn render(annotation: &Annotation, fingerprint: &Fingerprint) -> String {
    let mut body = format!(
        "{FILENAME_LABEL} : {}\n{LINE_LABEL} : {}\n{TAG_LABEL} : {}\n{FINGERPRINT_LABEL} : {}\n\n",
        annotation.path, annotation.line, annotation.tag, fingerprint
    );
    for line in &annotation.context {
        body.push_str(line);
        body.push('\n');
    }
    body
}

/// Reads the fingerprint back out of a body produced by [`render`].
///
/// Returns `None` for bodies without a fingerprint header line.
pub fn parse_fingerprint(body: &str) -> Option<Fingerprint> {
    body.lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| {
            let (label, value) = line.split_once(" : ")?;
            (label == FINGERPRINT_LABEL && !value.trim().is_empty())
                .then(|| Fingerprint::from_raw(value.trim()))
        })
}

#[cfg(test)]
#[path = "body_tests.rs"]
mod tests;
