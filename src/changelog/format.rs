//! Keep a Changelog section types.

use serde::{Deserialize, Serialize};

/// Changelog sections per Keep a Changelog, plus a catch-all `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KacSection {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
    Other,
}

impl KacSection {
    /// All sections in output order.
    pub const ALL: [KacSection; 7] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
        Self::Other,
    ];

    /// Get the display name for the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for KacSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entries grouped by section.
///
/// Every section is a field, so all seven keys are always serialized, in
/// Keep a Changelog order, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogSections {
    #[serde(rename = "Added")]
    pub added: Vec<String>,
    #[serde(rename = "Changed")]
    pub changed: Vec<String>,
    #[serde(rename = "Deprecated")]
    pub deprecated: Vec<String>,
    #[serde(rename = "Removed")]
    pub removed: Vec<String>,
    #[serde(rename = "Fixed")]
    pub fixed: Vec<String>,
    #[serde(rename = "Security")]
    pub security: Vec<String>,
    #[serde(rename = "Other")]
    pub other: Vec<String>,
}

impl ChangelogSections {
    /// Entries of one section.
    pub fn get(&self, section: KacSection) -> &[String] {
        match section {
            KacSection::Added => &self.added,
            KacSection::Changed => &self.changed,
            KacSection::Deprecated => &self.deprecated,
            KacSection::Removed => &self.removed,
            KacSection::Fixed => &self.fixed,
            KacSection::Security => &self.security,
            KacSection::Other => &self.other,
        }
    }

    fn get_mut(&mut self, section: KacSection) -> &mut Vec<String> {
        match section {
            KacSection::Added => &mut self.added,
            KacSection::Changed => &mut self.changed,
            KacSection::Deprecated => &mut self.deprecated,
            KacSection::Removed => &mut self.removed,
            KacSection::Fixed => &mut self.fixed,
            KacSection::Security => &mut self.security,
            KacSection::Other => &mut self.other,
        }
    }

    /// Append an entry to the end of a section.
    pub fn push(&mut self, section: KacSection, entry: String) {
        self.get_mut(section).push(entry);
    }

    /// Iterate sections in output order.
    pub fn iter(&self) -> impl Iterator<Item = (KacSection, &[String])> {
        KacSection::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Total number of entries across all sections.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count entries per non-empty section for summary output.
    pub fn count_by_section(&self) -> Vec<(KacSection, usize)> {
        self.iter()
            .map(|(section, entries)| (section, entries.len()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
