//! Core types for azdo-mutation-reports

use serde::{Deserialize, Serialize};

/// Unique identifier for an Azure DevOps build
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildId(pub i64);

impl BuildId {
    /// Create a new BuildId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for BuildId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<BuildId> for i64 {
    fn from(id: BuildId) -> Self {
        id.0
    }
}

impl PartialEq<i64> for BuildId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<BuildId> for i64 {
    fn eq(&self, other: &BuildId) -> bool {
        *self == other.0
    }
}

impl std::fmt::Display for BuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BuildId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// One attachment as returned by the build attachment listing
///
/// `self_url` is the attachment's self link; the timeline and record
/// identifiers needed to download its content are embedded in that URL
/// rather than exposed as listing fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMetadata {
    /// Attachment name, unique within its build and attachment type
    pub name: String,
    /// Self link for the attachment, if the service provided one
    pub self_url: Option<String>,
}

impl AttachmentMetadata {
    /// Create attachment metadata from a name and optional self link
    pub fn new(name: impl Into<String>, self_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            self_url,
        }
    }
}

/// Timeline and record identifiers extracted from an attachment self link
///
/// Both identifiers are required to address attachment content; a link that
/// yields only one of them is unusable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLocation {
    /// Timeline identifier (second path segment after the builds marker)
    pub timeline_id: String,
    /// Record identifier (third path segment after the builds marker)
    pub record_id: String,
}

impl ArtifactLocation {
    /// Create a location from its two identifiers
    pub fn new(timeline_id: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            timeline_id: timeline_id.into(),
            record_id: record_id.into(),
        }
    }
}

/// A fully resolved mutation report: attachment name plus decoded content
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Name of the attachment the content came from
    pub name: String,
    /// Attachment content decoded as UTF-8
    pub content: String,
}

impl ReportDocument {
    /// Create a report document from an attachment name and decoded content
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Outcome of resolving all mutation reports for one build
///
/// `succeeded` is true exactly when at least one report survived the
/// pipeline. A listing with entries whose downloads all failed is not a
/// success, and the flag can never disagree with `reports.is_empty()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCollectionResult {
    /// Surviving reports, in attachment listing order
    pub reports: Vec<ReportDocument>,
    /// Whether at least one report was resolved
    pub succeeded: bool,
}

impl ReportCollectionResult {
    /// The empty outcome: no reports, not succeeded
    pub fn empty() -> Self {
        Self {
            reports: Vec::new(),
            succeeded: false,
        }
    }

    /// Build an outcome from surviving reports, deriving the success flag
    pub fn from_reports(reports: Vec<ReportDocument>) -> Self {
        let succeeded = !reports.is_empty();
        Self { reports, succeeded }
    }
}

impl Default for ReportCollectionResult {
    fn default() -> Self {
        Self::empty()
    }
}
