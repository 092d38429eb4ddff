//! Extraction of timeline and record identifiers from attachment self links
//!
//! The build attachment listing does not expose timeline or record
//! identifiers as fields; they only appear as path segments of each
//! attachment's self link, after the `builds/` marker:
//!
//! ```text
//! .../_apis/build/builds/{buildId}/{timelineId}/{recordId}/attachments/...
//! ```
//!
//! Parsing is purely textual. The URL is not canonicalized and query
//! strings are not stripped, so a malformed link yields `None` rather
//! than an error.

use crate::types::ArtifactLocation;

/// Path marker that precedes the build, timeline and record segments
const BUILDS_MARKER: &str = "builds/";

/// Extract the timeline and record identifiers from an attachment self link
///
/// Takes the text after the first `builds/` occurrence and reads the second
/// and third `/`-separated segments (the first is the build id). Returns
/// `None` when the marker is absent, when fewer than three segments follow
/// it, or when either identifier segment is empty.
///
/// # Arguments
///
/// * `url` - The attachment's self link as returned by the listing
///
/// # Returns
///
/// The [`ArtifactLocation`] addressing the attachment content, or `None`
/// when the identifiers cannot be resolved from the link.
///
/// # Examples
///
/// ```
/// use azdo_mutation_reports::artifact_url::parse_artifact_url;
///
/// let url = "https://dev.azure.com/contoso/web/_apis/build/builds/4242/\
///            0dbdc35f-b447-4c48-ae5c-4c1ed57bcd5c/f8b9a292-1d27-53a5-90cc-6e63b2e3c478/\
///            attachments/stryker-mutator.mutation-report/mutation-report.html";
/// let location = parse_artifact_url(url).unwrap();
/// assert_eq!(location.timeline_id, "0dbdc35f-b447-4c48-ae5c-4c1ed57bcd5c");
/// assert_eq!(location.record_id, "f8b9a292-1d27-53a5-90cc-6e63b2e3c478");
///
/// assert!(parse_artifact_url("https://dev.azure.com/contoso/no-marker").is_none());
/// ```
#[must_use]
pub fn parse_artifact_url(url: &str) -> Option<ArtifactLocation> {
    let (_, remainder) = url.split_once(BUILDS_MARKER)?;
    let mut segments = remainder.split('/');
    // First segment is the build id; the content route only needs the two after it.
    segments.next()?;
    let timeline_id = segments.next()?;
    let record_id = segments.next()?;
    if timeline_id.is_empty() || record_id.is_empty() {
        return None;
    }
    Some(ArtifactLocation::new(timeline_id, record_id))
}
