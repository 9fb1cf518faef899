// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text normalization shared by the pattern compiler and the filter.
//!
//! Patterns and candidate paths are normalized differently: a pattern
//! spells a separator as an escaped backslash (`\\`), while a path uses a
//! single one (`\`). Both end up as `/`.

use std::borrow::Cow;

use crate::pattern::MatchOptions;

/// Normalize a pattern line: optional case folding, then `\\` to `/`.
pub fn normalize_pattern(text: &str, options: MatchOptions) -> String {
    let folded = fold_case(text, options);
    folded.replace("\\\\", "/")
}

/// Normalize a candidate path: optional case folding, then `\` to `/`.
///
/// Borrows when matching case-sensitively and no separator needs fixing.
pub fn normalize_path(path: &str, options: MatchOptions) -> Cow<'_, str> {
    let folded = fold_case(path, options);
    if !folded.contains('\\') {
        return folded;
    }
    Cow::Owned(folded.replace('\\', "/"))
}

fn fold_case(text: &str, options: MatchOptions) -> Cow<'_, str> {
    if options.case_insensitive {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

/// Split text into lines, treating `\n`, `\r\n` and a lone `\r` as
/// terminators. A trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Decode pattern bytes as UTF-8, dropping a byte-order mark and replacing
/// invalid sequences.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(body)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
