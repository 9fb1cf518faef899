// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob to regex translation.
//!
//! Works like Python's `fnmatch.translate`, plus path-segment anchors:
//!
//! | glob      | regex                        |
//! |-----------|------------------------------|
//! | `*`       | `.*` (crosses `/`)           |
//! | `?`       | `.`                          |
//! | `[abc]`   | `[abc]`                      |
//! | `[!abc]`  | `[^abc]`                     |
//! | `[^abc]`  | `[\^abc]` (literal caret)    |
//! | `[[]`     | `[\[]` (literal bracket)     |
//! | `[` alone | `\[`                         |
//! | other     | escaped unless alnum or `_`  |

/// Matches at the start of the path or right after a separator.
const SEGMENT_START: &str = "(^|/)";
/// Matches at the end of the path or right before a separator.
const SEGMENT_END: &str = "($|/)";

/// Translate normalized glob text into regex source.
///
/// Empty input yields an empty expression, which matches every path.
pub fn glob_to_regex(pattern: &str) -> String {
    if pattern.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = pattern.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(pattern.len() * 2 + SEGMENT_START.len() + SEGMENT_END.len());

    if !pattern.starts_with('/') {
        out.push_str(SEGMENT_START);
    }

    let mut i = 0;
    while i < n {
        let c = chars[i];
        i += 1;
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i..end]);
                    i = end + 1;
                }
                None => out.push_str("\\["),
            },
            c if c.is_alphanumeric() || c == '_' => out.push(c),
            c => push_literal(&mut out, c),
        }
    }

    if !pattern.ends_with('/') {
        out.push_str(SEGMENT_END);
    }
    out
}

/// Find the `]` closing a class whose body starts at `start`.
///
/// A `]` directly after `[` or `[!` belongs to the body, so `[]]` and
/// `[!]]` are valid classes.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

fn push_class(out: &mut String, body: &[char]) {
    out.push('[');
    let rest = match body.first() {
        Some('!') => {
            out.push('^');
            &body[1..]
        }
        Some('^') => {
            out.push_str("\\^");
            &body[1..]
        }
        _ => body,
    };
    let mut prev = None;
    for &c in rest {
        push_class_char(out, c, prev);
        prev = Some(c);
    }
    out.push(']');
}

/// Append one class member. Nested `[` and the set operators `&&`, `~~`
/// and `--` mean something inside a regex class, so they are escaped.
/// A lone `-` still forms a range.
fn push_class_char(out: &mut String, c: char, prev: Option<char>) {
    match c {
        '[' | '&' | '~' | '\\' => out.push('\\'),
        '-' if prev == Some('-') => out.push('\\'),
        _ => {}
    }
    out.push(c);
}

/// Append `c` so the regex engine treats it literally.
///
/// ASCII punctuation gets a backslash. `<` and `>` are left bare since
/// `\<` and `\>` are word-boundary assertions. Anything else goes through
/// [`regex::escape`], which only touches metacharacters.
fn push_literal(out: &mut String, c: char) {
    if c.is_ascii() && c != '<' && c != '>' {
        out.push('\\');
        out.push(c);
    } else {
        let mut buf = [0u8; 4];
        out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
