// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary with a clean environment: no colors, no token, no proxies.
pub fn tagsync() -> Command {
    let mut cmd = cargo_bin_cmd!("tagsync");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("TAGSYNC_TOKEN")
        .env_remove("RUST_LOG");
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    tagsync()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Initialized temp directory with GitLab set up against `host` over http.
pub fn init_gitlab(host: &str, token: &str) -> TempDir {
    let temp = init_temp();
    let mut cmd = tagsync();
    cmd.args(["setup", "gitlab", "--host", host, "--project", "42", "--insecure"])
        .current_dir(temp.path());
    if token.is_empty() {
        cmd.env("TAGSYNC_TOKEN", "only-at-setup");
    } else {
        cmd.args(["--token", token]);
    }
    cmd.assert().success();
    temp
}

pub fn read_config(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".tagsync/config.toml")).unwrap()
}

pub fn write_input(dir: &Path, lines: &[String]) -> String {
    let path = dir.join("annotations.jsonl");
    std::fs::write(&path, lines.join("\n")).unwrap();
    path.to_str().unwrap().to_string()
}

/// Minimal HTTP/1.1 tracker answering each connection with the next scripted reply.
///
/// Requests are returned by [`FakeTracker::finish`] as raw text (head and body).
/// It serves exactly as many requests as replies were scripted.
pub struct FakeTracker {
    pub host: String,
    handle: JoinHandle<Vec<String>>,
}

impl FakeTracker {
    pub fn start(replies: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let host = listener.local_addr().unwrap().to_string();
        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for (status, body) in replies {
                let (mut stream, _) = listener.accept().unwrap();
                seen.push(read_request(&mut stream));
                let reason = match status {
                    200 => "OK",
                    201 => "Created",
                    401 => "Unauthorized",
                    500 => "Internal Server Error",
                    _ => "Unknown",
                };
                write!(
                    stream,
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                )
                .unwrap();
                stream.flush().unwrap();
            }
            seen
        });
        FakeTracker { host, handle }
    }

    /// Waits for all scripted requests and returns them.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request = String::new();
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        if line == "\r\n" || line.is_empty() {
            break;
        }
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap();
        }
        request.push_str(&line);
    }
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).unwrap();
    request.push_str(&String::from_utf8(body).unwrap());
    request
}
