//! In-memory backend for development and testing

use async_trait::async_trait;
use scan_gate_core::{ScanOverview, VulnerabilityPolicy};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::{DigestResolver, PolicyChecker, ScanOverviewStore, SeedData, StorageError};

/// In-memory lookups for development and testing
#[derive(Debug)]
pub struct InMemoryStore {
    policies: RwLock<HashMap<String, VulnerabilityPolicy>>,
    overviews: RwLock<HashMap<String, ScanOverview>>,
    tags: RwLock<HashMap<String, String>>,
}

fn tag_key(repository: &str, tag: &str) -> String {
    format!("{}:{}", repository, tag)
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            policies: RwLock::new(HashMap::new()),
            overviews: RwLock::new(HashMap::new()),
            tags: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let overviews = seed
            .overviews
            .into_iter()
            .map(|o| (o.digest.clone(), o))
            .collect();

        Self {
            policies: RwLock::new(seed.policies),
            overviews: RwLock::new(overviews),
            tags: RwLock::new(seed.tags),
        }
    }

    pub fn set_policy(&self, project_name: &str, policy: VulnerabilityPolicy) -> Result<(), StorageError> {
        let mut policies = self.policies.write().map_err(poisoned)?;
        policies.insert(project_name.to_string(), policy);
        Ok(())
    }

    /// Record an overview, replacing any earlier one for the same digest
    pub fn put_overview(&self, overview: ScanOverview) -> Result<(), StorageError> {
        let mut overviews = self.overviews.write().map_err(poisoned)?;
        overviews.insert(overview.digest.clone(), overview);
        Ok(())
    }

    pub fn tag(&self, repository: &str, tag: &str, digest: &str) -> Result<(), StorageError> {
        let mut tags = self.tags.write().map_err(poisoned)?;
        tags.insert(tag_key(repository, tag), digest.to_string());
        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> StorageError {
    StorageError::Internal(format!("lock poisoned: {}", err))
}

#[async_trait]
impl ScanOverviewStore for InMemoryStore {
    async fn get_overview(&self, digest: &str) -> Result<Option<ScanOverview>, StorageError> {
        let overviews = self.overviews.read().map_err(poisoned)?;
        Ok(overviews.get(digest).cloned())
    }
}

#[async_trait]
impl PolicyChecker for InMemoryStore {
    async fn vulnerability_policy(&self, project_name: &str) -> VulnerabilityPolicy {
        match self.policies.read() {
            Ok(policies) => policies.get(project_name).copied().unwrap_or_default(),
            Err(e) => {
                tracing::error!("Failed to read policy for project {}: {}", project_name, e);
                VulnerabilityPolicy::disabled()
            }
        }
    }
}

#[async_trait]
impl DigestResolver for InMemoryStore {
    async fn resolve(&self, repository: &str, tag: &str) -> Result<Option<String>, StorageError> {
        let tags = self.tags.read().map_err(poisoned)?;
        Ok(tags.get(&tag_key(repository, tag)).cloned())
    }
}
