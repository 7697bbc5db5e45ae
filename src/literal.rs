//! Quoting and tag primitives shared by all compilers.

use crate::ast::{Condition, NamedColor};

/// Quote literal text for a format code.
///
/// Embedded quotes and backslashes are backslash-escaped. Empty text yields an empty string
/// rather than `""` so optional prefixes and suffixes disappear cleanly.
pub fn quote(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// `[Color]` tag, or nothing when no color is set.
pub fn color_tag(color: Option<NamedColor>) -> String {
    match color {
        Some(c) => format!("[{}]", c),
        None => String::new(),
    }
}

/// `[op value]` tag of a conditional section.
pub fn condition_tag(condition: &Condition) -> String {
    format!("[{}]", condition)
}

/// Normalize a user supplied locale code into the content of a locale tag.
///
/// Accepts the bracketed form (`[$-en-US]`), the bare tag content
/// (`$-en-US`) or a plain language code (`en-US`). Blank input yields
/// `None`.
pub fn locale_code(code: &str) -> Option<String> {
    let mut inner = code.trim();
    if let Some(stripped) = inner.strip_prefix('[') {
        inner = stripped.strip_suffix(']').unwrap_or(stripped).trim();
    }
    if inner.is_empty() {
        return None;
    }
    if inner.starts_with('$') {
        Some(inner.to_string())
    } else {
        Some(format!("$-{}", inner))
    }
}

/// Returns true when `text` can follow a time token without quoting.
///
/// Only the time separator and spaces qualify; anything else could be read
/// as a token letter or a numeric placeholder.
pub fn is_bare_time_literal(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == ':' || c == ' ')
}
