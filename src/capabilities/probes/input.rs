//! Input capability probe
//!
//! Detects touch input support.

use tracing::info;

use super::guarded;
use crate::capabilities::state::CapabilityFlags;
use crate::environment::EnvironmentProvider;

/// Flag name for touch support
pub const TOUCH: &str = "touch";

/// Input probe
pub struct InputProbe;

impl InputProbe {
    pub fn probe(env: &dyn EnvironmentProvider) -> CapabilityFlags {
        info!("Probing input capabilities...");

        let mut flags = CapabilityFlags::new();
        flags.insert(TOUCH, Self::touch_supported(env));
        flags
    }

    /// Touch events are supported, or the host reports at least one touch point
    ///
    /// Each signal is probed on its own; one failing does not mask the other.
    pub fn touch_supported(env: &dyn EnvironmentProvider) -> bool {
        let events = guarded("touchEvents", env.touch_events_supported(), |s| s);
        let points = guarded("maxTouchPoints", env.max_touch_points(), |n| n > 0);
        events || points
    }
}
