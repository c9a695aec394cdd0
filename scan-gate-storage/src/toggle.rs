//! Scanner integration switch

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether the vulnerability scanner integration is active
pub trait FeatureToggle: Send + Sync {
    fn is_enabled(&self) -> bool;
}

impl FeatureToggle for bool {
    fn is_enabled(&self) -> bool {
        *self
    }
}

/// Toggle that can be flipped while the server runs
#[derive(Debug, Default)]
pub struct ScannerToggle {
    enabled: AtomicBool,
}

impl ScannerToggle {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        tracing::info!("Scanner integration {}", if enabled { "enabled" } else { "disabled" });
    }
}

impl FeatureToggle for ScannerToggle {
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}
