//! Heuristic mapping of release-note lines to changelog sections.

use std::sync::LazyLock;

use regex::Regex;

use super::format::KacSection;

/// Conventional type tokens in evaluation order. A token matches at the
/// start of the line or after a non-word character (Unicode-aware),
/// followed by `(` or `:`.
static TYPE_RULES: LazyLock<Vec<(Regex, KacSection)>> = LazyLock::new(|| {
    [
        ("feat", KacSection::Added),
        ("fix", KacSection::Fixed),
        ("perf|refactor|docs|style", KacSection::Changed),
        ("test|build|ci|chore", KacSection::Other),
        ("revert", KacSection::Changed),
    ]
    .into_iter()
    .map(|(tokens, section)| {
        let re = Regex::new(&format!(r"(?:^|\W)(?:{})[(:]", tokens)).expect("Invalid regex");
        (re, section)
    })
    .collect()
});

/// Map a line to a Keep a Changelog section.
///
/// Rules are checked in order and the first hit wins:
/// 1. security or CVE markers
/// 2. conventional commit type token
/// 3. breaking change markers
/// 4. deprecation and removal keywords
///
/// Falls back to [`KacSection::Other`].
pub fn bucket_for(line: &str) -> KacSection {
    let lower = line.trim().to_lowercase();

    if lower.contains("security") || lower.contains("cve-") {
        return KacSection::Security;
    }

    if let Some((_, section)) = TYPE_RULES.iter().find(|(re, _)| re.is_match(&lower)) {
        return *section;
    }

    // `type!:` without a scope skips the type rules above and lands here.
    if lower.contains("breaking change") {
        return KacSection::Changed;
    }
    let prefix = lower.split(':').next().unwrap_or_default();
    if prefix.contains('!') {
        return KacSection::Changed;
    }

    if lower.contains("deprecat") {
        return KacSection::Deprecated;
    }
    if lower.contains("remove") || lower.contains("deleted") || lower.contains("drop ") {
        return KacSection::Removed;
    }

    KacSection::Other
}
