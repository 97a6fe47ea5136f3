// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for status lines.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// `[+]` success: soft green
    pub const OK: u8 = 71;
    /// `[x]` failure: soft red
    pub const FAIL: u8 = 167;
    /// `[-]` nothing done: medium grey
    pub const SKIP: u8 = 245;
    /// Field labels in `status`: steel blue
    pub const HEADER: u8 = 74;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const OK_START: &str = "\x1b[38;5;71m";
    pub const FAIL_START: &str = "\x1b[38;5;167m";
    pub const SKIP_START: &str = "\x1b[38;5;245m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", fg256(code), text, codes::RESET)
    } else {
        text.to_string()
    }
}

/// Leading marker of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Ok,
    Fail,
    Skip,
}

impl Mark {
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Ok => "[+]",
            Mark::Fail => "[x]",
            Mark::Skip => "[-]",
        }
    }

    fn code(self) -> u8 {
        match self {
            Mark::Ok => codes::OK,
            Mark::Fail => codes::FAIL,
            Mark::Skip => codes::SKIP,
        }
    }
}

/// `[+] text` with only the marker colored.
pub fn status_line_with(mark: Mark, text: &str, color: bool) -> String {
    format!("{} {}", paint(mark.code(), mark.symbol(), color), text)
}

pub fn status_line(mark: Mark, text: &str) -> String {
    status_line_with(mark, text, should_colorize())
}

pub fn ok(text: &str) -> String {
    status_line(Mark::Ok, text)
}

pub fn skip(text: &str) -> String {
    status_line(Mark::Skip, text)
}

/// Apply header color to a field label.
pub fn header_with(text: &str, color: bool) -> String {
    paint(codes::HEADER, text, color)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
