//! Vulnerability severity ranks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Worst known vulnerability class of an image, as an integer rank.
///
/// Higher ranks are more severe. `Severity::UNSCANNED` (0) is the sentinel
/// the scan subsystem records when no scan has completed successfully; it
/// carries no information about the image and must never be read as safe.
///
/// Deserializes from either the numeric rank or its label (`"High"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "SeverityRepr", into = "i32")]
pub struct Severity(i32);

impl Severity {
    pub const UNSCANNED: Severity = Severity(0);
    pub const NONE: Severity = Severity(1);
    pub const UNKNOWN: Severity = Severity(2);
    pub const LOW: Severity = Severity(3);
    pub const MEDIUM: Severity = Severity(4);
    pub const HIGH: Severity = Severity(5);

    pub const fn new(rank: i32) -> Self {
        Self(rank)
    }

    /// Whether this is the "no successful scan" sentinel
    pub const fn is_unscanned(self) -> bool {
        self.0 == Self::UNSCANNED.0
    }

    /// Label for known ranks
    pub fn label(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Unscanned"),
            1 => Some("None"),
            2 => Some("Unknown"),
            3 => Some("Low"),
            4 => Some("Medium"),
            5 => Some("High"),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "Severity({})", self.0),
        }
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<i32>() {
            return Ok(Self(rank));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "unscanned" => Ok(Self::UNSCANNED),
            "none" => Ok(Self::NONE),
            "unknown" => Ok(Self::UNKNOWN),
            "low" => Ok(Self::LOW),
            "medium" => Ok(Self::MEDIUM),
            "high" => Ok(Self::HIGH),
            _ => Err(CoreError::InvalidSeverity(s.to_string())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Rank(i32),
    Label(String),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = CoreError;

    fn try_from(repr: SeverityRepr) -> Result<Self, Self::Error> {
        match repr {
            SeverityRepr::Rank(rank) => Ok(Self(rank)),
            SeverityRepr::Label(label) => label.parse(),
        }
    }
}
