//! Lookup traits consumed by the gate

use async_trait::async_trait;
use scan_gate_core::{ScanOverview, VulnerabilityPolicy};

use crate::StorageError;

/// Source of precomputed scan summaries
#[async_trait]
pub trait ScanOverviewStore: Send + Sync {
    /// Get the most recent overview for a manifest digest
    async fn get_overview(&self, digest: &str) -> Result<Option<ScanOverview>, StorageError>;
}

/// Source of per-project vulnerability settings
///
/// Infallible from the caller's side: a project that cannot be read is
/// reported with enforcement disabled.
#[async_trait]
pub trait PolicyChecker: Send + Sync {
    async fn vulnerability_policy(&self, project_name: &str) -> VulnerabilityPolicy;
}

/// Maps a tag to the manifest digest it currently points at
#[async_trait]
pub trait DigestResolver: Send + Sync {
    async fn resolve(&self, repository: &str, tag: &str) -> Result<Option<String>, StorageError>;
}
