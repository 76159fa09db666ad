//! Payload assembly: release metadata plus bucketed changelog entries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bucket::bucket_for;
use super::format::ChangelogSections;
use crate::notes::extract_entries;

/// Release metadata and notes body, as resolved from CLI flags or env.
///
/// All fields are opaque strings; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseInput {
    pub tag: String,
    pub version: String,
    pub date: String,
    pub body: String,
    pub source_repo: String,
}

/// The JSON document emitted for a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub version: String,
    pub tag: String,
    pub date: String,
    pub source_repo: String,
    pub keep_a_changelog: ChangelogSections,
}

/// Use `version` if set, otherwise the tag minus a leading `v`.
pub fn derive_version(tag: &str, version: &str) -> String {
    if !version.is_empty() {
        return version.to_string();
    }

    match tag.strip_prefix('v') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => tag.to_string(),
    }
}

/// Build the changelog payload for a release.
///
/// Never fails: an empty or unparseable body yields seven empty sections.
pub fn build_payload(input: &ReleaseInput) -> Payload {
    let version = derive_version(&input.tag, &input.version);

    let mut sections = ChangelogSections::default();
    for entry in extract_entries(&input.body) {
        let section = bucket_for(&entry);
        debug!("{} -> {}", entry, section);
        sections.push(section, entry);
    }

    Payload {
        version,
        tag: input.tag.clone(),
        date: input.date.clone(),
        source_repo: input.source_repo.clone(),
        keep_a_changelog: sections,
    }
}
