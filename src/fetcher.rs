//! Resolution of individual report attachments
//!
//! Every attachment travels the same path: self link, identifiers parsed
//! out of it, content downloaded, bytes decoded as UTF-8. Any failure along
//! that path belongs to the one attachment; [`AttachmentFetcher::fetch_or_drop`]
//! turns it into a logged drop so the rest of the report set is unaffected.

use crate::artifact_url::parse_artifact_url;
use crate::client::BuildAttachmentClient;
use crate::error::{Error, Result};
use crate::types::{AttachmentMetadata, BuildId, ReportDocument};

/// Fetches and decodes report attachments of one attachment type
pub struct AttachmentFetcher<C> {
    client: C,
    report_type: String,
}

impl<C: BuildAttachmentClient> AttachmentFetcher<C> {
    /// Create a fetcher resolving attachments of the given type
    pub fn new(client: C, report_type: impl Into<String>) -> Self {
        Self {
            client,
            report_type: report_type.into(),
        }
    }

    /// The attachment type this fetcher resolves
    pub fn report_type(&self) -> &str {
        &self.report_type
    }

    /// List the report attachments published on a build
    ///
    /// # Errors
    ///
    /// Returns an error if the listing request fails; a failed listing means
    /// nothing can be resolved for the build.
    pub async fn list_attachments(
        &self,
        project_id: &str,
        build_id: BuildId,
    ) -> Result<Vec<AttachmentMetadata>> {
        self.client
            .list_attachments(project_id, build_id, &self.report_type)
            .await
    }

    /// Resolve one attachment to its decoded content
    ///
    /// The attachment's self link is parsed for the timeline and record
    /// identifiers, the content is downloaded, and the bytes are decoded as
    /// UTF-8 with invalid sequences replaced by U+FFFD. No download is
    /// attempted when the identifiers cannot be resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the attachment has no self link, if the timeline
    /// and record identifiers cannot be parsed out of it, or if the content
    /// download fails.
    pub async fn fetch_one(
        &self,
        project_id: &str,
        build_id: BuildId,
        attachment: &AttachmentMetadata,
    ) -> Result<String> {
        let url = attachment.self_url.as_ref().ok_or_else(|| Error::MissingUrl {
            attachment: attachment.name.clone(),
        })?;
        let location = parse_artifact_url(url).ok_or_else(|| Error::UnresolvableIdentifiers {
            attachment: attachment.name.clone(),
            url: url.clone(),
        })?;
        let bytes = self
            .client
            .attachment_bytes(
                project_id,
                build_id,
                &location,
                &self.report_type,
                &attachment.name,
            )
            .await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Resolve one attachment, dropping it on failure instead of erroring
    ///
    /// Failures are logged at warn level with the attachment name and the
    /// reason, then swallowed. Returns `None` for a dropped attachment so
    /// callers can keep resolving the remaining ones.
    pub async fn fetch_or_drop(
        &self,
        project_id: &str,
        build_id: BuildId,
        attachment: &AttachmentMetadata,
    ) -> Option<ReportDocument> {
        match self.fetch_one(project_id, build_id, attachment).await {
            Ok(content) => Some(ReportDocument::new(attachment.name.clone(), content)),
            Err(error) => {
                tracing::warn!(
                    attachment = %attachment.name,
                    error = %error,
                    "dropping attachment from the report set"
                );
                None
            }
        }
    }
}
