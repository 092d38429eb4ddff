//! Error types for azdo-mutation-reports
//!
//! This module provides the error taxonomy for the report-resolution pipeline:
//! - Transport failures (network, non-success HTTP statuses)
//! - Per-attachment defects (missing self-link, unresolvable identifiers)
//! - Configuration and decode errors
//!
//! Per-attachment defects are non-fatal by policy: the fetcher logs them and
//! drops the affected attachment while the rest of the batch proceeds. Only a
//! failed attachment *listing* is fatal to an assembly run.

use thiserror::Error;

/// Result type alias for report-resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for azdo-mutation-reports
///
/// Each variant carries enough context to diagnose the failure from a log
/// line alone; attachment-scoped variants name the attachment they refer to.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "organization_url")
        key: Option<String>,
    },

    /// The organization base URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network-level transport failure (connect, timeout, TLS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The build service answered with a non-success status code
    #[error("HTTP {status} from {url}")]
    Http {
        /// Status code returned by the server
        status: u16,
        /// The request URL, for diagnostics
        url: String,
    },

    /// A response body could not be decoded into the expected wire shape
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Attachment metadata carries no self-referential link
    ///
    /// Non-fatal: the attachment is dropped and the batch continues.
    #[error("attachment {attachment} has no retrievable URL")]
    MissingUrl {
        /// Name of the attachment that was dropped
        attachment: String,
    },

    /// A self-referential link does not expose timeline and record identifiers
    ///
    /// Non-fatal: the attachment is dropped and the batch continues. Both
    /// identifiers are required together; a URL yielding only one of them is
    /// reported through this variant as well.
    #[error("identifiers not resolvable from URL {url}")]
    UnresolvableIdentifiers {
        /// Name of the attachment that was dropped
        attachment: String,
        /// The URL that failed structural parsing
        url: String,
    },
}
