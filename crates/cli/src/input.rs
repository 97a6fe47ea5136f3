// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Annotation input: one JSON object per line.
//!
//! ```text
//! {"tag":"todo","path":"src/lib.rs","line":12,"context":["// [todo] - x"],"title":"x"}
//! ```

use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tagsync_core::Annotation;

use crate::error::{Error, Result};

/// Opens `path` for reading, or stdin when it is `-`.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = std::fs::File::open(Path::new(path)).map_err(|e| {
        Error::Io(io::Error::new(
            e.kind(),
            format!("failed to open '{}': {}", path, e),
        ))
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Reads annotations, skipping blank lines.
///
/// The first malformed or invalid line fails the whole read with its
/// 1-based line number.
pub fn read_annotations<R: BufRead>(reader: R) -> Result<Vec<Annotation>> {
    let mut annotations = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let annotation = Annotation::from_json(line).map_err(|e| Error::ParseLineError {
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        annotations.push(annotation);
    }
    tracing::debug!(count = annotations.len(), "read annotations");
    Ok(annotations)
}

/// Reads annotations from `path`, defaulting to stdin.
pub fn load(path: Option<&str>) -> Result<Vec<Annotation>> {
    read_annotations(open_input(path.unwrap_or("-"))?)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
