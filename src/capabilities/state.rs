//! Capability flag map
//!
//! Flags are kept in a sorted map so that serialized reports are stable
//! across runs. Lookups of unknown names answer `false`, the same as a probed
//! and unsupported capability.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Feature name to support flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityFlags {
    flags: BTreeMap<String, bool>,
}

impl CapabilityFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, supported: bool) {
        self.flags.insert(name.into(), supported);
    }

    /// Support flag for `name`; `false` when the name was never probed
    pub fn get(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(name, supported)| (name.as_str(), *supported))
    }

    pub fn supported(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, s)| *s).map(|(name, _)| name)
    }

    pub fn unsupported(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, s)| !*s).map(|(name, _)| name)
    }

    /// Add every flag of `other`, overwriting on name collisions
    pub fn merge(&mut self, other: CapabilityFlags) {
        self.flags.extend(other.flags);
    }

    /// Short "n/m supported" summary
    pub fn summary(&self) -> String {
        format!("{}/{} supported", self.supported().count(), self.len())
    }
}

impl FromIterator<(String, bool)> for CapabilityFlags {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, bool)> for CapabilityFlags {
    fn from_iter<I: IntoIterator<Item = (&'a str, bool)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, supported)| (name.to_string(), supported))
            .collect()
    }
}

impl fmt::Display for CapabilityFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, supported)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={supported}")?;
        }
        Ok(())
    }
}
