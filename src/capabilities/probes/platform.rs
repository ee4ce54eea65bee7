//! Platform capability probe
//!
//! Detects storage, graphics, service worker and observer availability.

use tracing::info;

use super::guarded;
use crate::capabilities::state::CapabilityFlags;
use crate::environment::{EnvironmentProvider, PlatformFeature};

/// Platform probe
pub struct PlatformProbe;

impl PlatformProbe {
    pub fn probe(env: &dyn EnvironmentProvider) -> CapabilityFlags {
        info!("Probing platform capabilities...");

        let flags: CapabilityFlags = PlatformFeature::ALL
            .into_iter()
            .map(|feature| {
                let name = feature.flag_name();
                (name, guarded(name, env.platform_feature(feature), |s| s))
            })
            .collect();

        info!("Platform support: {}", flags.summary());
        flags
    }
}
