//! Keep a Changelog bucketing and payload assembly.

pub mod bucket;
pub mod format;
pub mod payload;

pub use bucket::bucket_for;
pub use format::{ChangelogSections, KacSection};
pub use payload::{Payload, ReleaseInput, build_payload, derive_version};
