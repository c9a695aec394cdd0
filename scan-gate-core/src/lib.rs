//! Core domain models for Scan Gate
//!
//! This crate contains the shared data structures used across
//! the gate: ImageIdentity, ScanOverview, Severity and VulnerabilityPolicy.

pub mod error;
pub mod models;
pub mod severity;

pub use error::CoreError;
pub use models::*;
pub use severity::Severity;
