//! Free-text normalization for tabular export.
//!
//! Doc-comment text arrives with source indentation and arbitrary line
//! endings. Cells in the sheet must be dense blocks: trimmed lines joined
//! by `\n`, blank lines dropped.

use regex::Regex;
use std::sync::LazyLock;

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Canonicalize multi-line doc text into a single block.
///
/// Trims the whole text, splits on any standard line ending, trims each
/// line, drops lines that are empty after trimming, and rejoins with a
/// single `\n`. Whitespace-only input yields the empty string.
pub fn normalize(raw: &str) -> String {
    let text = raw.trim();
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = RE_LINE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}
