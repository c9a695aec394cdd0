//! JSON seed data for the in-memory backend

use scan_gate_core::{ScanOverview, VulnerabilityPolicy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::StorageError;

/// Startup contents for [`crate::InMemoryStore`]
///
/// ```json
/// {
///   "policies": { "library": { "enabled": true, "threshold": "Medium" } },
///   "overviews": [ { "digest": "sha256:abc", "severity": "High" } ],
///   "tags": { "library/nginx:latest": "sha256:abc" }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    /// Project name -> vulnerability policy
    #[serde(default)]
    pub policies: HashMap<String, VulnerabilityPolicy>,
    /// Scan overviews, keyed by their digest once loaded
    #[serde(default)]
    pub overviews: Vec<ScanOverview>,
    /// `repository:tag` -> manifest digest
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }
}
