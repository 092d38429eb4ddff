//! Assembly of the full report set for a build
//!
//! The assembler drives the whole pipeline: list the report attachments,
//! resolve each one through [`AttachmentFetcher`], drop the ones that fail,
//! and hand back the survivors in listing order together with the overall
//! success flag. Only the listing itself is fatal; per-attachment failures
//! never abort the run.

use futures::stream::{self, StreamExt};

use crate::client::{AzureBuildClient, BuildAttachmentClient};
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::AttachmentFetcher;
use crate::types::{BuildId, ReportCollectionResult, ReportDocument};

/// Resolves every mutation report attached to a build
pub struct ReportAssembler<C> {
    fetcher: AttachmentFetcher<C>,
    fetch_concurrency: usize,
}

impl ReportAssembler<AzureBuildClient> {
    /// Create an assembler talking to a real Azure DevOps organization
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(AzureBuildClient::new(config)?, config))
    }
}

impl<C: BuildAttachmentClient> ReportAssembler<C> {
    /// Create an assembler over an existing client
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            fetcher: AttachmentFetcher::new(client, config.report_type.clone()),
            fetch_concurrency: config.fetch_concurrency.max(1),
        }
    }

    /// Resolve all mutation reports attached to the given build
    ///
    /// Attachments are fetched with at most the configured concurrency and
    /// reassembled in listing order, so the returned reports appear in the
    /// same sequence regardless of how the individual downloads interleave.
    /// Attachments that cannot be resolved are dropped with a warning; the
    /// result's `succeeded` flag is true exactly when at least one report
    /// survived.
    ///
    /// # Arguments
    ///
    /// * `project_id` - Project name or GUID the build belongs to
    /// * `build_id` - The build whose reports to resolve
    ///
    /// # Errors
    ///
    /// Returns an error only when the attachment listing itself fails;
    /// without a listing there is nothing to resolve.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use azdo_mutation_reports::assembler::ReportAssembler;
    /// use azdo_mutation_reports::config::Config;
    /// use azdo_mutation_reports::types::BuildId;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     organization_url: "https://dev.azure.com/contoso".to_string(),
    ///     ..Config::default()
    /// };
    /// let assembler = ReportAssembler::from_config(&config)?;
    /// let outcome = assembler.assemble("web", BuildId::new(4242)).await?;
    /// if outcome.succeeded {
    ///     println!("resolved {} reports", outcome.reports.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn assemble(
        &self,
        project_id: &str,
        build_id: BuildId,
    ) -> Result<ReportCollectionResult> {
        let attachments = self.fetcher.list_attachments(project_id, build_id).await?;
        if attachments.is_empty() {
            tracing::info!(
                project = %project_id,
                build = %build_id,
                report_type = %self.fetcher.report_type(),
                "build has no report attachments"
            );
            return Ok(ReportCollectionResult::empty());
        }

        let total = attachments.len();
        let reports: Vec<ReportDocument> = stream::iter(&attachments)
            .map(|attachment| self.fetcher.fetch_or_drop(project_id, build_id, attachment))
            .buffered(self.fetch_concurrency)
            .collect::<Vec<Option<ReportDocument>>>()
            .await
            .into_iter()
            .flatten()
            .collect();

        let dropped = total - reports.len();
        if dropped > 0 {
            tracing::warn!(
                project = %project_id,
                build = %build_id,
                resolved = reports.len(),
                dropped = dropped,
                "resolved report set is incomplete"
            );
        } else {
            tracing::debug!(
                project = %project_id,
                build = %build_id,
                resolved = reports.len(),
                "resolved all report attachments"
            );
        }

        Ok(ReportCollectionResult::from_reports(reports))
    }
}
