//! Application state shared across middleware and handlers

use scan_gate_storage::{
    DigestResolver, InMemoryStore, ScannerToggle, SeedData, StorageError, Store,
};
use std::sync::Arc;

use crate::{GateConfig, VulnerabilityGate};

/// Shared application state
pub struct AppState {
    pub gate: Arc<VulnerabilityGate>,
    pub resolver: Arc<dyn DigestResolver>,
    pub toggle: Arc<ScannerToggle>,
}

impl AppState {
    /// Create with a custom lookup backend and toggle
    pub fn with_store<S: Store + 'static>(store: Arc<S>, toggle: Arc<ScannerToggle>) -> Self {
        let gate = VulnerabilityGate::new(toggle.clone(), store.clone(), store.clone());
        Self {
            gate: Arc::new(gate),
            resolver: store,
            toggle,
        }
    }

    /// Build the in-memory backend, seeded from `SEED_PATH` if configured
    pub fn from_config(config: &GateConfig) -> Result<Self, StorageError> {
        let store = match &config.seed_path {
            Some(path) => {
                let seed = SeedData::from_path(path)?;
                tracing::info!(
                    "Seeded store from {:?}: {} policies, {} overviews, {} tags",
                    path,
                    seed.policies.len(),
                    seed.overviews.len(),
                    seed.tags.len()
                );
                InMemoryStore::from_seed(seed)
            }
            None => InMemoryStore::new(),
        };

        Ok(Self::with_store(
            Arc::new(store),
            Arc::new(ScannerToggle::new(config.with_scanner)),
        ))
    }
}
