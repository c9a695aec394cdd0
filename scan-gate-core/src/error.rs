//! Error types for the core crate

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),
}
