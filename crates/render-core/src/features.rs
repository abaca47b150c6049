//! Feature registration and the requirement gate.

use cardstock_types::{Requirement, SemanticVersion, VersionParseError};
use std::collections::HashMap;

/// The requirement version that matches any registered feature version.
pub const WILDCARD_VERSION: &str = "*";

/// Host-registered capabilities, mapping feature name to supported version.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistration {
    features: HashMap<String, String>,
}

impl FeatureRegistration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a feature version; setting the same name twice overwrites.
    pub fn set(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.features.insert(name.into(), version.into());
    }

    /// Returns the registered version for a feature. An empty registered
    /// version string means unsupported and reads as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.features
            .get(name)
            .map(String::as_str)
            .filter(|version| !version.is_empty())
    }

    pub fn remove(&mut self, name: &str) {
        self.features.remove(name);
    }
}

/// Checks whether every requirement on an element is met by the host's
/// feature registration.
///
/// Each requirement is evaluated even after the result is known to be false;
/// there is no short-circuit. A feature name absent from the registration
/// fails the whole check. A `"*"` requirement is satisfied by any registered
/// version. Otherwise the registered version must be at least the required
/// one. Malformed version strings are propagated, not swallowed.
pub fn meets_requirements(
    requirements: &[Requirement],
    registration: &FeatureRegistration,
) -> Result<bool, VersionParseError> {
    let mut met = true;

    for requirement in requirements {
        match registration.get(&requirement.name) {
            None => {
                log::debug!("requirement '{}' is not registered", requirement.name);
                met = false;
            }
            Some(_) if requirement.version == WILDCARD_VERSION => {}
            Some(registered) => {
                let required: SemanticVersion = requirement.version.parse()?;
                let registered: SemanticVersion = registered.parse()?;
                if registered < required {
                    log::debug!(
                        "requirement '{}' needs {required}, host has {registered}",
                        requirement.name
                    );
                    met = false;
                }
            }
        }
    }

    Ok(met)
}
