//! kac-notes - Converts GitHub release notes into Keep a Changelog JSON.
//!
//! # Overview
//!
//! kac-notes reads a release body (usually GitHub's generated notes), keeps
//! the conventional-commit shaped lines, drops Dependabot dependency bumps
//! and duplicates, and buckets each line into one of the Keep a Changelog
//! sections (plus `Other`). The result is a single JSON document meant to be
//! produced in CI when a release is published.

pub mod changelog;
pub mod config;
pub mod error;
pub mod notes;
pub mod output;

// Re-export commonly used types
pub use changelog::{ChangelogSections, KacSection, Payload, ReleaseInput, build_payload};
pub use config::{ReleaseArgs, resolve_input};
pub use error::OutputError;
pub use notes::{CommitType, ConventionalSubject, ReleaseNoteItem};
