//! Capability detector
//!
//! Runs the probe groups against a shared environment provider. Every call
//! produces fresh flags.

use std::{fmt, sync::Arc};

use crate::capabilities::probes::{CssFeature, CssProbe, InputProbe, PlatformProbe};
use crate::capabilities::state::CapabilityFlags;
use crate::environment::EnvironmentProvider;

/// Probes input, platform and CSS capabilities
#[derive(Clone)]
pub struct CapabilityDetector {
    env: Arc<dyn EnvironmentProvider>,
}

impl CapabilityDetector {
    pub fn new(env: Arc<dyn EnvironmentProvider>) -> Self {
        Self { env }
    }

    pub fn input(&self) -> CapabilityFlags {
        InputProbe::probe(self.env.as_ref())
    }

    pub fn touch_supported(&self) -> bool {
        InputProbe::touch_supported(self.env.as_ref())
    }

    pub fn platform(&self) -> CapabilityFlags {
        PlatformProbe::probe(self.env.as_ref())
    }

    pub fn css(&self) -> CapabilityFlags {
        CssProbe::probe(self.env.as_ref())
    }

    pub fn css_feature(&self, feature: CssFeature) -> bool {
        CssProbe::supports(self.env.as_ref(), feature)
    }

    /// Input and platform flags in one map
    pub fn host_capabilities(&self) -> CapabilityFlags {
        let mut flags = self.input();
        flags.merge(self.platform());
        flags
    }
}

impl fmt::Debug for CapabilityDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityDetector").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::fake::StaticEnvironment;
    use crate::environment::PlatformFeature;

    #[test]
    fn test_host_capabilities_merges_groups() {
        let detector = CapabilityDetector::new(Arc::new(StaticEnvironment::iphone()));
        let flags = detector.host_capabilities();
        assert_eq!(flags.len(), 1 + PlatformFeature::ALL.len());
        assert!(flags.get("touch"));
        assert!(flags.get("webgl"));
    }

    #[test]
    fn test_bare_host() {
        let detector = CapabilityDetector::new(Arc::new(StaticEnvironment::bare()));
        assert!(!detector.touch_supported());
        assert_eq!(detector.platform().supported().count(), 0);
        assert_eq!(detector.css().supported().count(), 0);
        assert!(!detector.css_feature(CssFeature::Grid));
    }
}
