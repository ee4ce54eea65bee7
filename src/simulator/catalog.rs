//! Device profile catalog

use serde::{Deserialize, Serialize};

/// Named device viewport used for simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl DeviceProfile {
    pub fn new(name: impl Into<String>, width: u32, height: u32, pixel_ratio: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            pixel_ratio,
        }
    }

    /// Visual scale applied to the surface (1 / pixel ratio)
    pub fn scale(&self) -> f64 {
        1.0 / self.pixel_ratio
    }
}

/// Read-only, ordered collection of device profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceCatalog {
    profiles: Vec<DeviceProfile>,
}

impl DeviceCatalog {
    pub fn new(profiles: Vec<DeviceProfile>) -> Self {
        Self { profiles }
    }

    pub fn builtin_profiles() -> Vec<DeviceProfile> {
        vec![
            DeviceProfile::new("small-phone", 375, 667, 2.0),
            DeviceProfile::new("large-phone", 414, 896, 3.0),
            DeviceProfile::new("tablet", 768, 1024, 2.0),
            DeviceProfile::new("tablet-landscape", 1024, 768, 2.0),
            DeviceProfile::new("laptop", 1366, 768, 1.0),
            DeviceProfile::new("desktop", 1920, 1080, 1.0),
        ]
    }

    pub fn get(&self, name: &str) -> Option<&DeviceProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn profiles(&self) -> &[DeviceProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::new(Self::builtin_profiles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = DeviceCatalog::default();
        assert_eq!(catalog.len(), 6);
        let tablet = catalog.get("tablet").unwrap();
        assert_eq!((tablet.width, tablet.height), (768, 1024));
        assert_eq!(tablet.scale(), 0.5);
        assert!(!catalog.contains("Tablet"));
    }

    #[test]
    fn test_names_in_catalog_order() {
        let catalog = DeviceCatalog::default();
        assert_eq!(catalog.names().next(), Some("small-phone"));
        assert_eq!(catalog.names().last(), Some("desktop"));
    }
}
