//! Configuration types for azdo-mutation-reports

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Attachment type tag produced by the Stryker mutation-testing tool.
///
/// The pipeline only considers attachments published under this type.
/// Configurable in principle via [`Config::report_type`]; fixed by convention
/// in Stryker deployments.
pub const DEFAULT_REPORT_TYPE: &str = "stryker-mutator.mutation-report";

/// Main configuration for the report-resolution pipeline
///
/// Works out of the box against a public project once `organization_url` is
/// set; every other field has a sensible default.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Azure DevOps organization
    /// (e.g., "https://dev.azure.com/my-org")
    #[serde(default)]
    pub organization_url: String,

    /// Personal access token sent as HTTP basic auth (None = unauthenticated)
    #[serde(default)]
    pub credential: Option<String>,

    /// Build REST API version sent with every request (default: "7.1")
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Timeout applied to each HTTP request (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,

    /// User agent sent with every request (default: "azdo-mutation-reports")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Attachment type to resolve (default: [`DEFAULT_REPORT_TYPE`])
    #[serde(default = "default_report_type")]
    pub report_type: String,

    /// Number of attachment fetches in flight at once (default: 1)
    ///
    /// With 1, attachments are fetched strictly one at a time in listing
    /// order. Higher values fan out over independent attachments; results are
    /// still reassembled in listing order, so consumers observe the same
    /// sequence either way.
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization_url: String::new(),
            credential: None,
            api_version: default_api_version(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
            report_type: default_report_type(),
            fetch_concurrency: default_fetch_concurrency(),
        }
    }
}

impl Config {
    /// Check the configuration for values the pipeline cannot work with
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending key when the
    /// organization URL or report type is empty, or the fetch concurrency
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        if self.organization_url.trim().is_empty() {
            return Err(Error::Config {
                message: "organization_url must not be empty".to_string(),
                key: Some("organization_url".to_string()),
            });
        }
        if self.report_type.trim().is_empty() {
            return Err(Error::Config {
                message: "report_type must not be empty".to_string(),
                key: Some("report_type".to_string()),
            });
        }
        if self.fetch_concurrency == 0 {
            return Err(Error::Config {
                message: "fetch_concurrency must be at least 1".to_string(),
                key: Some("fetch_concurrency".to_string()),
            });
        }
        Ok(())
    }
}

// The credential is a bearer-equivalent secret; keep it out of debug logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("organization_url", &self.organization_url)
            .field("credential", &self.credential.as_ref().map(|_| "***"))
            .field("api_version", &self.api_version)
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .field("report_type", &self.report_type)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .finish()
    }
}

// Default value functions
fn default_api_version() -> String {
    "7.1".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    "azdo-mutation-reports".to_string()
}

fn default_report_type() -> String {
    DEFAULT_REPORT_TYPE.to_string()
}

fn default_fetch_concurrency() -> usize {
    1
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
