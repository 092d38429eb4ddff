//! Azure DevOps Build REST API client
//!
//! Two endpoints matter to this crate: the per-build attachment listing and
//! the attachment content route. The listing only carries attachment names
//! and self links; the content route additionally needs the timeline and
//! record identifiers hidden inside those links (see
//! [`crate::artifact_url`]).

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{ArtifactLocation, AttachmentMetadata, BuildId};

/// Trait for access to build attachments
///
/// This trait defines the two operations the report pipeline needs from the
/// build service: listing the attachments of one type on a build, and
/// downloading the content of a single attachment. Implementations can talk
/// to a real Azure DevOps organization or serve canned data in tests.
#[async_trait]
pub trait BuildAttachmentClient: Send + Sync {
    /// List the attachments of one type published on a build
    ///
    /// # Arguments
    ///
    /// * `project_id` - Project name or GUID the build belongs to
    /// * `build_id` - The build whose attachments to list
    /// * `attachment_type` - Attachment type tag to filter on
    ///
    /// # Returns
    ///
    /// Attachment metadata in the order the service returned it. An empty
    /// vector means the build has no attachments of this type.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing request fails, the service answers
    /// with a non-success status, or the response body cannot be decoded.
    async fn list_attachments(
        &self,
        project_id: &str,
        build_id: BuildId,
        attachment_type: &str,
    ) -> Result<Vec<AttachmentMetadata>>;

    /// Download the raw content of one attachment
    ///
    /// # Arguments
    ///
    /// * `project_id` - Project name or GUID the build belongs to
    /// * `build_id` - The build the attachment was published on
    /// * `location` - Timeline and record identifiers from the self link
    /// * `attachment_type` - Attachment type tag
    /// * `attachment_name` - Name of the attachment within its type
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers with a
    /// non-success status.
    async fn attachment_bytes(
        &self,
        project_id: &str,
        build_id: BuildId,
        location: &ArtifactLocation,
        attachment_type: &str,
        attachment_name: &str,
    ) -> Result<Vec<u8>>;
}

/// [`BuildAttachmentClient`] backed by the Azure DevOps Build REST API
///
/// Requests carry the configured API version as a query parameter and, when
/// a credential is configured, a personal access token as HTTP basic auth
/// with an empty username.
///
/// # Examples
///
/// ```no_run
/// use azdo_mutation_reports::client::{AzureBuildClient, BuildAttachmentClient};
/// use azdo_mutation_reports::config::Config;
/// use azdo_mutation_reports::types::BuildId;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     organization_url: "https://dev.azure.com/contoso".to_string(),
///     ..Config::default()
/// };
/// let client = AzureBuildClient::new(&config)?;
/// let attachments = client
///     .list_attachments("web", BuildId::new(4242), &config.report_type)
///     .await?;
/// println!("found {} attachments", attachments.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AzureBuildClient {
    http: reqwest::Client,
    base_url: Url,
    credential: Option<String>,
    api_version: String,
}

impl AzureBuildClient {
    /// Create a client from the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation, the
    /// organization URL does not parse, or the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.organization_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            http,
            base_url,
            credential: config.credential.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Organization base without a trailing slash, ready for path building
    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn attachment_list_url(
        &self,
        project_id: &str,
        build_id: BuildId,
        attachment_type: &str,
    ) -> String {
        format!(
            "{}/{}/_apis/build/builds/{}/attachments/{}?api-version={}",
            self.base(),
            urlencoding::encode(project_id),
            build_id,
            urlencoding::encode(attachment_type),
            self.api_version,
        )
    }

    fn attachment_content_url(
        &self,
        project_id: &str,
        build_id: BuildId,
        location: &ArtifactLocation,
        attachment_type: &str,
        attachment_name: &str,
    ) -> String {
        format!(
            "{}/{}/_apis/build/builds/{}/{}/{}/attachments/{}/{}?api-version={}",
            self.base(),
            urlencoding::encode(project_id),
            build_id,
            urlencoding::encode(&location.timeline_id),
            urlencoding::encode(&location.record_id),
            urlencoding::encode(attachment_type),
            urlencoding::encode(attachment_name),
            self.api_version,
        )
    }

    /// Send an authenticated GET and return the body on a success status
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let mut request = self.http.get(url);
        if let Some(credential) = &self.credential {
            request = request.basic_auth("", Some(credential));
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl BuildAttachmentClient for AzureBuildClient {
    async fn list_attachments(
        &self,
        project_id: &str,
        build_id: BuildId,
        attachment_type: &str,
    ) -> Result<Vec<AttachmentMetadata>> {
        let url = self.attachment_list_url(project_id, build_id, attachment_type);
        tracing::debug!(url = %url, "listing build attachments");
        let body = self.get_bytes(&url).await?;
        let listing: AttachmentListing = serde_json::from_slice(&body)?;
        Ok(listing
            .value
            .into_iter()
            .map(AttachmentEntry::into_metadata)
            .collect())
    }

    async fn attachment_bytes(
        &self,
        project_id: &str,
        build_id: BuildId,
        location: &ArtifactLocation,
        attachment_type: &str,
        attachment_name: &str,
    ) -> Result<Vec<u8>> {
        let url = self.attachment_content_url(
            project_id,
            build_id,
            location,
            attachment_type,
            attachment_name,
        );
        tracing::debug!(url = %url, "downloading attachment content");
        self.get_bytes(&url).await
    }
}

// Wire shape of the attachment listing. Only the fields the pipeline reads
// are declared; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct AttachmentListing {
    #[serde(default)]
    value: Vec<AttachmentEntry>,
}

#[derive(Debug, Deserialize)]
struct AttachmentEntry {
    name: String,
    #[serde(rename = "_links")]
    links: Option<AttachmentLinks>,
}

#[derive(Debug, Deserialize)]
struct AttachmentLinks {
    #[serde(rename = "self")]
    self_link: Option<ReferenceLink>,
}

#[derive(Debug, Deserialize)]
struct ReferenceLink {
    href: Option<String>,
}

impl AttachmentEntry {
    fn into_metadata(self) -> AttachmentMetadata {
        let self_url = self
            .links
            .and_then(|links| links.self_link)
            .and_then(|link| link.href);
        AttachmentMetadata {
            name: self.name,
            self_url,
        }
    }
}
