//! Lookup layer for Scan Gate
//!
//! Defines the collaborators the gate reads from: scan overviews, project
//! vulnerability policies, tag-to-digest resolution and the scanner
//! feature toggle. Ships an in-memory backend that can be seeded from a
//! JSON file.

pub mod error;
pub mod memory;
pub mod seed;
pub mod toggle;
pub mod traits;

pub use error::StorageError;
pub use memory::InMemoryStore;
pub use seed::SeedData;
pub use toggle::{FeatureToggle, ScannerToggle};
pub use traits::{DigestResolver, PolicyChecker, ScanOverviewStore};

/// Everything the gate and identity resolver need from a backend
pub trait Store: ScanOverviewStore + PolicyChecker + DigestResolver + Send + Sync {}

impl<T> Store for T where T: ScanOverviewStore + PolicyChecker + DigestResolver + Send + Sync {}
