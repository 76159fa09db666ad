//! Conventional commit grammar and release-note attribution parsing.
//!
//! GitHub's generated release notes list one pull request per bullet:
//!
//! ```text
//! * ci: Add pipeline step by @octocat in https://github.com/o/r/pull/904
//! * build(deps-dev): bump globals by @dependabot[bot] in https://github.com/o/r/pull/925
//! ```
//!
//! The attribution suffix is split off first, then the remaining subject is
//! decomposed as `type(scope)!: title`.

use std::sync::LazyLock;

use regex::Regex;

/// Type tokens recognised as conventional commit prefixes.
pub const COMMIT_TYPES: [&str; 11] = [
    "feat", "fix", "perf", "refactor", "docs", "style", "test", "build", "ci", "chore", "revert",
];

/// Loose prefix gate used when picking candidate lines out of a body.
static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?:{})(?:\(.+\))?!?:\s+\S+",
        COMMIT_TYPES.join("|")
    ))
    .expect("Invalid regex")
});

/// Strict decomposition of a subject into its conventional parts.
static SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<type>{})(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?:\s+(?P<title>.+)$",
        COMMIT_TYPES.join("|")
    ))
    .expect("Invalid regex")
});

/// Trailing `by @author in <url>` attribution.
static ATTRIBUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<subject>.+?)\s+by\s+@(?P<author>\S+)\s+in\s+(?P<url>https?://\S+)$")
        .expect("Invalid regex")
});

static PULL_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/pull/(\d+)(?:\D|$)").expect("Invalid regex"));

/// Conventional commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Perf,
    Refactor,
    Docs,
    Style,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitType {
    /// Lowercase token as it appears in a commit prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Perf => "perf",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
            Self::Revert => "revert",
        }
    }
}

impl std::str::FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "perf" => Ok(Self::Perf),
            "refactor" => Ok(Self::Refactor),
            "docs" => Ok(Self::Docs),
            "style" => Ok(Self::Style),
            "test" => Ok(Self::Test),
            "build" => Ok(Self::Build),
            "ci" => Ok(Self::Ci),
            "chore" => Ok(Self::Chore),
            "revert" => Ok(Self::Revert),
            _ => Err(format!("Unknown commit type: {}", s)),
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subject decomposed as `type(scope)!: title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalSubject {
    pub commit_type: CommitType,
    /// Lowercased scope, empty when the subject has none.
    pub scope: String,
    pub breaking: bool,
    pub title: String,
}

/// A release-note line carrying a GitHub attribution suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNoteItem {
    /// Text before the attribution.
    pub subject: String,
    pub author: String,
    pub url: String,
    /// Number taken from a `/pull/<n>` url.
    pub pull_request: Option<u64>,
    /// Present when `subject` is conventional-commit shaped.
    pub conventional: Option<ConventionalSubject>,
}

/// Check whether a line starts with a recognised conventional commit prefix.
pub fn looks_like_conventional_commit(line: &str) -> bool {
    PREFIX_RE.is_match(line.trim())
}

/// Decompose a subject into its conventional commit parts.
///
/// Returns `None` when the subject doesn't follow `type(scope)!: title`.
pub fn parse_subject(subject: &str) -> Option<ConventionalSubject> {
    let caps = SUBJECT_RE.captures(subject)?;

    let commit_type = caps.name("type")?.as_str().parse::<CommitType>().ok()?;
    let scope = caps
        .name("scope")
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();
    let breaking = caps.name("breaking").is_some();
    let title = caps.name("title")?.as_str().trim().to_string();

    Some(ConventionalSubject {
        commit_type,
        scope,
        breaking,
        title,
    })
}

/// Parse a release-note line with a `by @author in <url>` suffix.
///
/// Returns `None` when the line carries no attribution.
pub fn parse_release_note_item(line: &str) -> Option<ReleaseNoteItem> {
    let caps = ATTRIBUTION_RE.captures(line.trim())?;

    let subject = caps.name("subject")?.as_str().trim().to_string();
    let author = caps.name("author")?.as_str().trim().to_string();
    let url = caps.name("url")?.as_str().trim().to_string();

    // Overlong digit runs are left as `None`.
    let pull_request = PULL_NUMBER_RE
        .captures(&url)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok());

    let conventional = parse_subject(&subject);

    Some(ReleaseNoteItem {
        subject,
        author,
        url,
        pull_request,
        conventional,
    })
}
