//! Core domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Severity;

/// The image a registry request refers to
///
/// Attached to the request by the identity resolver. An empty `digest`
/// means the request could not be pinned to a manifest (unknown tag,
/// manifest list, metadata request).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIdentity {
    /// Full repository name, e.g. `library/nginx`
    pub repository: String,
    /// Tag or digest as requested
    pub reference: String,
    /// Project owning the repository
    pub project_name: String,
    /// Manifest content digest, empty when unresolved
    pub digest: String,
}

impl ImageIdentity {
    pub fn new(repository: String, reference: String, project_name: String, digest: String) -> Self {
        Self {
            repository,
            reference,
            project_name,
            digest,
        }
    }

    pub fn has_digest(&self) -> bool {
        !self.digest.is_empty()
    }
}

/// Most recent scan summary recorded for a manifest digest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOverview {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Manifest digest the scan ran against
    pub digest: String,
    /// Worst severity found, `Severity::UNSCANNED` if the scan did not succeed
    pub severity: Severity,
    /// Scan job that produced this overview
    #[serde(default)]
    pub job_id: Option<String>,
    /// When the overview was last written
    #[serde(default = "Utc::now")]
    pub update_time: DateTime<Utc>,
}

impl ScanOverview {
    pub fn new(digest: String, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            digest,
            severity,
            job_id: None,
            update_time: Utc::now(),
        }
    }
}

/// A project's vulnerability enforcement setting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityPolicy {
    /// Whether pulls are gated on scan severity
    pub enabled: bool,
    /// Severity at or above which pulls are denied
    pub threshold: Severity,
}

impl VulnerabilityPolicy {
    pub fn enforcing(threshold: Severity) -> Self {
        Self {
            enabled: true,
            threshold,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Inclusive: an image exactly at the threshold violates it.
    pub fn is_violated_by(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let policy = VulnerabilityPolicy::enforcing(Severity::MEDIUM);
        assert!(policy.is_violated_by(Severity::MEDIUM));
        assert!(policy.is_violated_by(Severity::HIGH));
        assert!(!policy.is_violated_by(Severity::LOW));
    }

    #[test]
    fn test_overview_defaults_when_deserializing() {
        let overview: ScanOverview =
            serde_json::from_str(r#"{"digest": "sha256:abc", "severity": "High"}"#).unwrap();
        assert_eq!(overview.digest, "sha256:abc");
        assert_eq!(overview.severity, Severity::HIGH);
        assert!(overview.job_id.is_none());
    }

    #[test]
    fn test_default_policy_is_disabled() {
        assert!(!VulnerabilityPolicy::disabled().enabled);
    }
}
