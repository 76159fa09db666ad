//! Release-note parsing: candidate extraction, conventional commit grammar,
//! and filtering.

pub mod conventional;
pub mod extract;
pub mod filter;

pub use conventional::{
    CommitType, ConventionalSubject, ReleaseNoteItem, looks_like_conventional_commit,
    parse_release_note_item, parse_subject,
};
pub use extract::extract_candidates;
pub use filter::{filter_candidates, is_dependency_bump};

use tracing::debug;

/// Extract, filter and de-duplicate the changelog entries of a release body.
pub fn extract_entries(body: &str) -> Vec<String> {
    let candidates = extract_candidates(body);
    let found = candidates.len();
    let entries = filter_candidates(candidates);

    debug!(
        "Extracted {} candidate lines, kept {} entries",
        found,
        entries.len()
    );

    entries
}
