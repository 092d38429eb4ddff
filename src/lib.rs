//! # azdo-mutation-reports
//!
//! Library for resolving Stryker mutation-test reports attached to Azure
//! DevOps builds.
//!
//! Stryker publishes its mutation report on a build as an attachment of type
//! `stryker-mutator.mutation-report`. This crate lists those attachments,
//! digs the timeline and record identifiers out of each attachment's self
//! link, downloads the content, and hands back the decoded reports in
//! listing order, ready for a results viewer to embed.
//!
//! ## Design Philosophy
//!
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sensible defaults** - Works against a public project with just an
//!   organization URL
//! - **Partial results over hard failure** - A broken attachment is dropped
//!   with a warning; only a failed listing aborts a run
//! - **Stable ordering** - Reports come back in attachment listing order no
//!   matter how concurrent downloads interleave
//!
//! ## Quick Start
//!
//! ```no_run
//! use azdo_mutation_reports::{BuildId, Config, ReportAssembler, ViewerState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         organization_url: "https://dev.azure.com/contoso".to_string(),
//!         credential: std::env::var("AZDO_PAT").ok(),
//!         ..Default::default()
//!     };
//!
//!     let assembler = ReportAssembler::from_config(&config)?;
//!     let outcome = assembler.assemble("web", BuildId::new(4242)).await?;
//!
//!     let mut viewer = ViewerState::new();
//!     viewer.apply(outcome);
//!     if let Some(report) = viewer.selected_report() {
//!         println!("{}", report.content);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Attachment self-link parsing
pub mod artifact_url;
/// Report set assembly for a build
pub mod assembler;
/// Azure DevOps Build REST API access
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Per-attachment resolution
pub mod fetcher;
/// Core types
pub mod types;
/// Viewer-side selection state
pub mod viewer;

// Re-export commonly used types
pub use assembler::ReportAssembler;
pub use client::{AzureBuildClient, BuildAttachmentClient};
pub use config::{Config, DEFAULT_REPORT_TYPE};
pub use error::{Error, Result};
pub use fetcher::AttachmentFetcher;
pub use types::{
    ArtifactLocation, AttachmentMetadata, BuildId, ReportCollectionResult, ReportDocument,
};
pub use viewer::{ViewerState, embed_script};
