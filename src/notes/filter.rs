//! Dependency-bot filtering and de-duplication.

use std::collections::HashSet;

use tracing::debug;

use super::conventional::{CommitType, ReleaseNoteItem, parse_release_note_item};

const DEPENDENCY_BOT_PREFIX: &str = "dependabot";
const DEPENDENCY_SCOPE_PREFIX: &str = "deps";

/// True for Dependabot dependency bumps such as `build(deps): ...` or
/// `build(deps-dev): ...`.
///
/// Other Dependabot entries (e.g. `ci:` action updates) are kept.
pub fn is_dependency_bump(item: &ReleaseNoteItem) -> bool {
    if !item.author.to_lowercase().starts_with(DEPENDENCY_BOT_PREFIX) {
        return false;
    }

    match &item.conventional {
        Some(subject) => {
            subject.commit_type == CommitType::Build
                && subject.scope.starts_with(DEPENDENCY_SCOPE_PREFIX)
        }
        None => false,
    }
}

/// Drop dependency bumps and exact duplicates, keeping first-seen order.
pub fn filter_candidates(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(candidates.len());

    for line in candidates {
        if let Some(item) = parse_release_note_item(&line) {
            if is_dependency_bump(&item) {
                if let Some(subject) = &item.conventional {
                    debug!(
                        "Skipping dependency bump {}({}) by {} (PR #{})",
                        subject.commit_type,
                        subject.scope,
                        item.author,
                        item.pull_request
                            .map_or_else(|| "?".to_string(), |n| n.to_string())
                    );
                }
                continue;
            }
        }

        if !seen.insert(line.clone()) {
            debug!("Skipping duplicate entry: {}", line);
            continue;
        }

        kept.push(line);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dependabot_build_deps_suppressed() {
        let item = parse_release_note_item(
            "build(deps-dev): bump globals by @dependabot[bot] in https://github.com/o/r/pull/925",
        )
        .unwrap();
        assert!(is_dependency_bump(&item));
    }

    #[test]
    fn test_dependabot_author_case_insensitive() {
        let item =
            parse_release_note_item("build(DEPS): bump x by @Dependabot in https://x/pull/3")
                .unwrap();
        assert!(is_dependency_bump(&item));
    }

    #[test]
    fn test_dependabot_ci_kept() {
        let item = parse_release_note_item(
            "ci(deps): bump actions/checkout by @dependabot[bot] in https://x/pull/2",
        )
        .unwrap();
        assert!(!is_dependency_bump(&item));
    }

    #[test]
    fn test_human_build_deps_kept() {
        let item =
            parse_release_note_item("build(deps): bump serde by @octocat in https://x/pull/4")
                .unwrap();
        assert!(!is_dependency_bump(&item));
    }

    #[test]
    fn test_filter_removes_duplicates_in_order() {
        let out = filter_candidates(lines(&[
            "feat: a",
            "fix: b",
            "feat: a",
            "chore: c",
            "fix: b",
        ]));
        assert_eq!(out, vec!["feat: a", "fix: b", "chore: c"]);
    }

    #[test]
    fn test_filter_is_case_sensitive_for_duplicates() {
        let out = filter_candidates(lines(&["feat: a", "Feat: a"]));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_filter_drops_dependency_bumps() {
        let out = filter_candidates(lines(&[
            "build(deps): bump foo from 1 to 2 by @dependabot[bot] in https://github.com/o/r/pull/42",
            "feat: keep me",
        ]));
        assert_eq!(out, vec!["feat: keep me"]);
    }
}
