//! Capability probes for each feature group.

mod css;
mod input;
mod platform;

use tracing::{debug, warn};

use crate::environment::ProbeError;

pub use css::{CssFeature, CssProbe};
pub use input::{InputProbe, TOUCH};
pub use platform::PlatformProbe;

/// Collapse a probe result to a flag, degrading failures to `false`
pub(crate) fn guarded<T>(
    feature: &str,
    result: Result<T, ProbeError>,
    is_supported: impl FnOnce(T) -> bool,
) -> bool {
    match result {
        Ok(value) => {
            let supported = is_supported(value);
            debug!(feature, supported, "Probe completed");
            supported
        }
        Err(e) => {
            warn!(feature, error = %e, "Probe failed, reporting feature as unsupported");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_passes_value() {
        assert!(guarded("x", Ok(true), |v| v));
        assert!(!guarded("x", Ok(0u32), |v| v > 0));
    }

    #[test]
    fn test_guarded_degrades_error() {
        let result: Result<bool, _> = Err(ProbeError::UnsupportedFeature("x".into()));
        assert!(!guarded("x", result, |v| v));
    }
}
