//! Candidate line extraction from a release body.

use std::sync::LazyLock;

use regex::Regex;

use super::conventional::looks_like_conventional_commit;

static BULLET_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\S").expect("Invalid regex"));

static NUMBERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+\S").expect("Invalid regex"));

static BULLET_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+").expect("Invalid regex"));

static NUMBER_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("Invalid regex"));

/// Line boundaries: `\n`, `\r`, `\r\n`, vertical tab, form feed, the
/// file/group/record separators, NEL, and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split a body into lines without their terminators.
fn split_lines(body: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = body.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&body[start..i]);

        let mut end = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            end += 1;
        }
        start = end;
    }

    if start < body.len() {
        lines.push(&body[start..]);
    }

    lines
}

fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

fn is_list_item(line: &str) -> bool {
    BULLET_ITEM_RE.is_match(line) || NUMBERED_ITEM_RE.is_match(line)
}

/// Strip one bullet marker and then one number marker.
fn clean_list_item(line: &str) -> String {
    let s = line.trim();
    let s = BULLET_MARKER_RE.replace(s, "");
    let s = NUMBER_MARKER_RE.replace(&s, "");
    s.trim().to_string()
}

/// Extract conventional-commit shaped lines from a release body.
///
/// Headings and blank lines are skipped. List markers (`-`, `*`, `1.`) are
/// stripped before the prefix check; anything that doesn't start with a
/// conventional commit prefix afterwards (prose, "Full Changelog" links) is
/// dropped. Input order is kept.
pub fn extract_candidates(body: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for raw in split_lines(body) {
        if raw.trim().is_empty() || is_heading(raw) {
            continue;
        }

        let cleaned = if is_list_item(raw) {
            clean_list_item(raw)
        } else {
            raw.trim().to_string()
        };

        if looks_like_conventional_commit(&cleaned) {
            candidates.push(cleaned);
        }
    }

    candidates
}
