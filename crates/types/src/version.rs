use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when a version string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid semantic version: '{0}'")]
pub struct VersionParseError(pub String);

/// A `major.minor.patch` version tuple, compared component-wise.
///
/// Used for feature-requirement checks: a registered capability satisfies a
/// requirement when its version is greater than or equal to the required one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionParseError;

    /// Accepts `major`, `major.minor`, or `major.minor.patch`; omitted
    /// components default to zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError(s.to_string()));
        }

        let mut components = [0u64; 3];
        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() > components.len() {
            return Err(VersionParseError(s.to_string()));
        }
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u64>()
                .map_err(|_| VersionParseError(s.to_string()))?;
        }

        let [major, minor, patch] = components;
        Ok(Self { major, minor, patch })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
