//! Integration tests for the release body -> payload pipeline.

mod common;

use std::collections::HashSet;

use kac_notes::notes::extract_entries;
use kac_notes::{KacSection, ReleaseInput, build_payload};

fn input_with_body(tag: &str, body: &str) -> ReleaseInput {
    ReleaseInput {
        tag: tag.to_string(),
        body: body.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_scenario() {
    let body = "* feat: add search\n\
                * fix(ui): correct spacing\n\
                * build(deps): bump x by @dependabot[bot] in https://x/pull/1\n\
                * chore: cleanup";
    let payload = build_payload(&input_with_body("v2.0.0", body));
    let sections = &payload.keep_a_changelog;

    assert_eq!(payload.version, "2.0.0");
    assert_eq!(sections.get(KacSection::Added), ["feat: add search"]);
    assert_eq!(sections.get(KacSection::Fixed), ["fix(ui): correct spacing"]);
    assert_eq!(sections.get(KacSection::Other), ["chore: cleanup"]);
    assert!(sections.get(KacSection::Changed).is_empty());
    assert!(sections.get(KacSection::Security).is_empty());
    assert_eq!(sections.len(), 3);
}

#[test]
fn test_dependency_bump_excluded_everywhere() {
    let line = "build(deps): bump foo from 1 to 2 by @dependabot[bot] in https://github.com/o/r/pull/42";
    let payload = build_payload(&input_with_body("v1.0.0", line));

    assert!(payload.keep_a_changelog.is_empty());
}

#[test]
fn test_security_precedence() {
    let payload = build_payload(&input_with_body("v1.0.0", "fix: patch CVE-2024-0001 in auth"));
    assert_eq!(
        payload.keep_a_changelog.get(KacSection::Security),
        ["fix: patch CVE-2024-0001 in auth"]
    );
    assert!(payload.keep_a_changelog.get(KacSection::Fixed).is_empty());
}

#[test]
fn test_breaking_marker_ordering() {
    let body = "- feat!: remove legacy endpoint\n- feat(api)!: new pagination";
    let payload = build_payload(&input_with_body("v3.0.0", body));

    assert_eq!(
        payload.keep_a_changelog.get(KacSection::Changed),
        ["feat!: remove legacy endpoint"]
    );
    assert_eq!(
        payload.keep_a_changelog.get(KacSection::Added),
        ["feat(api)!: new pagination"]
    );
}

#[test]
fn test_duplicates_keep_first_position() {
    let body = "* fix: a\n* feat: b\n* fix: a\n* docs: c\n* feat: b";
    let payload = build_payload(&input_with_body("v1.0.0", body));

    assert_eq!(extract_entries(body), vec!["fix: a", "feat: b", "docs: c"]);
    assert_eq!(payload.keep_a_changelog.get(KacSection::Fixed), ["fix: a"]);
    assert_eq!(payload.keep_a_changelog.get(KacSection::Added), ["feat: b"]);
}

#[test]
fn test_version_derivation() {
    assert_eq!(build_payload(&input_with_body("v1.2.3", "")).version, "1.2.3");
    assert_eq!(build_payload(&input_with_body("1.2.3", "")).version, "1.2.3");

    let explicit = ReleaseInput {
        tag: "v1.2.3".to_string(),
        version: "9.9.9".to_string(),
        ..Default::default()
    };
    assert_eq!(build_payload(&explicit).version, "9.9.9");
}

#[test]
fn test_github_generated_notes() {
    let body = common::read_fixture(common::release_notes_fixture("github_generated.md"));
    let payload = build_payload(&input_with_body("v5.3.0", &body));
    let sections = &payload.keep_a_changelog;

    assert_eq!(
        sections.get(KacSection::Added),
        ["feat(ui): Show crate download statistics by @jdoe in https://github.com/octo/registry/pull/910"]
    );
    assert_eq!(
        sections.get(KacSection::Changed),
        [
            "refactor!: Rework storage provider configuration by @secana in https://github.com/octo/registry/pull/931",
            "docs: Update installation guide by @writer in https://github.com/octo/registry/pull/932",
        ]
    );
    assert_eq!(
        sections.get(KacSection::Fixed),
        ["fix: Handle missing README in crate upload by @jdoe in https://github.com/octo/registry/pull/911"]
    );
    assert_eq!(
        sections.get(KacSection::Security),
        ["fix(auth): Security fix for token leak in logs by @secana in https://github.com/octo/registry/pull/930"]
    );
    assert_eq!(
        sections.get(KacSection::Other),
        [
            "ci: Add pipeline for ARM builds by @secana in https://github.com/octo/registry/pull/904",
            "ci(deps): bump actions/checkout from 3 to 4 by @dependabot[bot] in https://github.com/octo/registry/pull/927",
        ]
    );
    assert!(sections.get(KacSection::Deprecated).is_empty());
    assert!(sections.get(KacSection::Removed).is_empty());
}

#[test]
fn test_plain_list_notes() {
    let body = common::read_fixture(common::release_notes_fixture("plain_list.md"));
    let payload = build_payload(&input_with_body("v0.9.0", &body));
    let sections = &payload.keep_a_changelog;

    assert_eq!(sections.get(KacSection::Added), ["feat: Add sparse index support"]);
    assert_eq!(
        sections.get(KacSection::Changed),
        [
            "perf(index): Cache crate metadata lookups",
            "revert: Undo experimental webhook retries",
            "style: Run formatter over the workspace",
            "fix!: Reject unsigned uploads",
        ]
    );
    assert_eq!(
        sections.get(KacSection::Other),
        ["chore: Bump MSRV", "test(db): Cover migration edge cases"]
    );
}

#[test]
fn test_prose_only_notes_yield_empty_sections() {
    let body = common::read_fixture(common::release_notes_fixture("prose_only.md"));
    let payload = build_payload(&input_with_body("v1.0.0", &body));

    assert!(payload.keep_a_changelog.is_empty());
    let json = serde_json::to_value(&payload).unwrap();
    let sections = json["keep_a_changelog"].as_object().unwrap();
    assert_eq!(sections.len(), 7);
    for name in KacSection::ALL.iter().map(|s| s.as_str()) {
        assert_eq!(sections[name], serde_json::json!([]), "Section {} not empty", name);
    }
}

#[test]
fn test_sections_partition_extracted_entries() {
    let bodies = [
        common::read_fixture(common::release_notes_fixture("github_generated.md")),
        common::read_fixture(common::release_notes_fixture("plain_list.md")),
        "* fix: x\n* fix: x\n* revert!: y\n* docs(api): z".to_string(),
    ];

    for body in bodies {
        let extracted = extract_entries(&body);
        let payload = build_payload(&input_with_body("v1.0.0", &body));
        let placed = common::placed_entries(&payload);

        assert_eq!(placed.len(), extracted.len());

        let placed_lines: HashSet<&str> = placed.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(placed_lines.len(), placed.len(), "Entry placed twice");
        for line in &extracted {
            assert!(placed_lines.contains(line.as_str()), "Entry dropped: {}", line);
        }
    }
}

#[test]
fn test_degenerate_bodies_yield_empty_sections() {
    let bodies = ["", "\n\n\n", "####", "* ", "1.", "feat:", "\u{feff}feat: bom", "🎉 fix: emoji"];

    for body in bodies {
        let payload = build_payload(&input_with_body("", body));
        assert!(
            payload.keep_a_changelog.is_empty(),
            "Unexpected entries for {:?}",
            body
        );

        let json = serde_json::to_value(&payload).unwrap();
        let sections = json["keep_a_changelog"].as_object().unwrap();
        assert_eq!(sections.len(), 7);
        for name in KacSection::ALL.iter().map(|s| s.as_str()) {
            assert_eq!(sections[name], serde_json::json!([]), "Section {} for {:?}", name, body);
        }
    }
}

#[test]
fn test_non_ascii_body_with_mixed_line_breaks() {
    let body = "* feat(i18n): prise en charge du fran\u{e7}ais\u{2029}\
                * fix: caf\u{e9} crash\r\
                * chore: renommer le pr\u{e9}fix: x\u{85}\
                \u{662}. docs: guide\n\
                * feat(i18n): prise en charge du fran\u{e7}ais";
    let payload = build_payload(&input_with_body("v1.0.0", body));

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json["keep_a_changelog"],
        serde_json::json!({
            "Added": ["feat(i18n): prise en charge du français"],
            "Changed": ["docs: guide"],
            "Deprecated": [],
            "Removed": [],
            "Fixed": ["fix: café crash"],
            "Security": [],
            "Other": ["chore: renommer le préfix: x"]
        })
    );
}
