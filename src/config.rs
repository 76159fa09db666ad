//! Release input resolution from CLI flags and environment variables.
//!
//! Each field takes the first non-empty value in its chain:
//!
//! | field         | chain                                                              |
//! |---------------|--------------------------------------------------------------------|
//! | `tag`         | `--tag`, RELEASE_TAG, GITHUB_REF_NAME, RELEASE_VERSION             |
//! | `version`     | `--version`, RELEASE_VERSION                                       |
//! | `date`        | `--date`, RELEASE_DATE, RELEASE_PUBLISHED_AT, GITHUB_EVENT_RELEASE_PUBLISHED_AT |
//! | `body`        | `--body`, RELEASE_BODY, GITHUB_EVENT_RELEASE_BODY                  |
//! | `source_repo` | `--source-repo`, SOURCE_REPO, GITHUB_REPOSITORY                    |
//!
//! Environment values are trimmed, except for the body which is used verbatim.

use std::env;

use crate::changelog::ReleaseInput;

pub const RELEASE_TAG: &str = "RELEASE_TAG";
pub const GITHUB_REF_NAME: &str = "GITHUB_REF_NAME";
pub const RELEASE_VERSION: &str = "RELEASE_VERSION";
pub const RELEASE_DATE: &str = "RELEASE_DATE";
pub const RELEASE_PUBLISHED_AT: &str = "RELEASE_PUBLISHED_AT";
pub const GITHUB_EVENT_RELEASE_PUBLISHED_AT: &str = "GITHUB_EVENT_RELEASE_PUBLISHED_AT";
pub const RELEASE_BODY: &str = "RELEASE_BODY";
pub const GITHUB_EVENT_RELEASE_BODY: &str = "GITHUB_EVENT_RELEASE_BODY";
pub const SOURCE_REPO: &str = "SOURCE_REPO";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// Values given on the command line. `None` and `Some("")` both defer to
/// the environment.
#[derive(Debug, Clone, Default)]
pub struct ReleaseArgs {
    pub tag: Option<String>,
    pub version: Option<String>,
    pub date: Option<String>,
    pub body: Option<String>,
    pub source_repo: Option<String>,
}

/// Resolve release input against the process environment.
pub fn resolve_input(args: &ReleaseArgs) -> ReleaseInput {
    resolve_input_with(args, |name| env::var(name).ok())
}

/// Resolve release input using `lookup` for environment variables.
pub fn resolve_input_with<F>(args: &ReleaseArgs, lookup: F) -> ReleaseInput
where
    F: Fn(&str) -> Option<String>,
{
    let trimmed = |name: &str| -> Option<String> {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let verbatim = |name: &str| -> Option<String> { lookup(name).filter(|v| !v.is_empty()) };
    let flag = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

    let tag = flag(&args.tag)
        .or_else(|| trimmed(RELEASE_TAG))
        .or_else(|| trimmed(GITHUB_REF_NAME))
        .or_else(|| trimmed(RELEASE_VERSION))
        .unwrap_or_default();

    let version = flag(&args.version)
        .or_else(|| trimmed(RELEASE_VERSION))
        .unwrap_or_default();

    let date = flag(&args.date)
        .or_else(|| trimmed(RELEASE_DATE))
        .or_else(|| trimmed(RELEASE_PUBLISHED_AT))
        .or_else(|| trimmed(GITHUB_EVENT_RELEASE_PUBLISHED_AT))
        .unwrap_or_default();

    let body = flag(&args.body)
        .or_else(|| verbatim(RELEASE_BODY))
        .or_else(|| verbatim(GITHUB_EVENT_RELEASE_BODY))
        .unwrap_or_default();

    let source_repo = flag(&args.source_repo)
        .or_else(|| trimmed(SOURCE_REPO))
        .or_else(|| trimmed(GITHUB_REPOSITORY))
        .unwrap_or_default();

    ReleaseInput {
        tag,
        version,
        date,
        body,
        source_repo,
    }
}
