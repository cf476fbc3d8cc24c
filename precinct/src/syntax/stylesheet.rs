//! Stylesheet reader for SCSS, indented Sass and Stylus.
//!
//! Produces a [`StyleSheet`] holding every at-rule in the text. The reader
//! never fails: unterminated comments or strings simply run to end of input.

use crate::model::stylesheet::{AtRule, StyleSheet, StyleSyntax};
use regex::Regex;
use std::sync::LazyLock;

/// Leading token of one comma-separated param: a quoted string, `url(`, or a bare word.
static PARAM_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"([^"]*)"|'([^']*)'|(url\()|([^\s,;"'()]+))"#).expect("valid regex")
});

/// Read `code` as a stylesheet written in `syntax`.
pub fn parse(code: &str, syntax: StyleSyntax) -> StyleSheet {
    let b = code.as_bytes();
    let mut rules = Vec::new();
    let mut line = 1usize;
    let mut i = 0usize;

    while i < b.len() {
        match b[i] {
            b'\n' => {
                line += 1;
                i += 1;
            }
            b'/' if b.get(i + 1) == Some(&b'*') => {
                let end = block_comment_end(b, i);
                line += count_newlines(&b[i..end]);
                i = end;
            }
            b'/' if b.get(i + 1) == Some(&b'/') => {
                i = line_end(b, i);
            }
            q @ (b'"' | b'\'') => {
                let end = string_end(b, i, q);
                line += count_newlines(&b[i..end]);
                i = end;
            }
            b'@' => {
                let name_start = i + 1;
                let mut j = name_start;
                while j < b.len() && is_ident_byte(b[j]) {
                    j += 1;
                }
                if j == name_start {
                    i += 1;
                    continue;
                }
                let name = code[name_start..j].to_string();
                let prelude_end = prelude_end(b, j, syntax);
                let prelude = code[j..prelude_end].trim().to_string();
                let params = split_params(&prelude);
                rules.push(AtRule {
                    name,
                    prelude,
                    params,
                    line,
                });
                line += count_newlines(&b[i..prelude_end]);
                i = prelude_end;
            }
            _ => i += 1,
        }
    }

    StyleSheet { syntax, rules }
}

fn is_ident_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'_'
}

fn count_newlines(s: &[u8]) -> usize {
    s.iter().filter(|&&c| c == b'\n').count()
}

/// Index just past the `*/` closing the comment opened at `start`.
fn block_comment_end(b: &[u8], start: usize) -> usize {
    let mut k = start + 2;
    while k + 1 < b.len() {
        if b[k] == b'*' && b[k + 1] == b'/' {
            return k + 2;
        }
        k += 1;
    }
    b.len()
}

/// Index of the newline ending the line that contains `start` (or end of input).
fn line_end(b: &[u8], start: usize) -> usize {
    b[start..]
        .iter()
        .position(|&c| c == b'\n')
        .map_or(b.len(), |p| start + p)
}

/// Index just past the closing quote of the string opened at `start`.
fn string_end(b: &[u8], start: usize, quote: u8) -> usize {
    let mut k = start + 1;
    while k < b.len() {
        match b[k] {
            b'\\' => k += 2,
            c if c == quote => return k + 1,
            b'\n' => return k,
            _ => k += 1,
        }
    }
    b.len()
}

/// Where the prelude starting at `start` ends.
///
/// Ends at a top-level `;`, `{` or `}`, at a `//` comment, or (for
/// newline-terminated syntaxes) at a top-level newline. A trailing `;` is
/// consumed.
fn prelude_end(b: &[u8], start: usize, syntax: StyleSyntax) -> usize {
    let mut depth = 0usize;
    let mut k = start;
    while k < b.len() {
        match b[k] {
            q @ (b'"' | b'\'') => {
                k = string_end(b, k, q);
                continue;
            }
            b'/' if b.get(k + 1) == Some(&b'*') => {
                k = block_comment_end(b, k);
                continue;
            }
            b'/' if b.get(k + 1) == Some(&b'/') && depth == 0 && !is_url_scheme(b, k) => {
                return k;
            }
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b';' if depth == 0 => return k + 1,
            b'{' | b'}' if depth == 0 => return k,
            b'\n' if depth == 0 && syntax.newline_terminates() => return k,
            _ => {}
        }
        k += 1;
    }
    b.len()
}

/// `://` is part of a URL, not a comment.
fn is_url_scheme(b: &[u8], slash: usize) -> bool {
    slash > 0 && b[slash - 1] == b':'
}

/// Split a prelude on top-level commas and keep each part's leading module-like token.
fn split_params(prelude: &str) -> Vec<String> {
    let body = prelude.trim_end_matches(';');
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0usize;

    for (idx, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&body[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);

    parts
        .into_iter()
        .filter_map(|p| {
            let caps = PARAM_HEAD.captures(p.trim())?;
            if caps.get(3).is_some() {
                return None;
            }
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
