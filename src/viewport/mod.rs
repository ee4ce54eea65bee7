//! Viewport snapshot capture
//!
//! [`ViewportInspector::capture`] queries the provider on every call. Nothing
//! is cached, because the display can be resized or rotated between calls.

mod agent;

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use agent::{DeviceClass, DeviceFlags};

use crate::breakpoint::{Breakpoint, BreakpointTable};
use crate::environment::EnvironmentProvider;

/// Display orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    Portrait,
    /// Wider than tall, or square
    Landscape,
}

impl Orientation {
    pub fn from_dimensions(width: f64, height: f64) -> Self {
        if height > width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portrait => f.write_str("portrait"),
            Self::Landscape => f.write_str("landscape"),
        }
    }
}

/// Point-in-time display and agent snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportInfo {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
    pub orientation: Orientation,
    pub breakpoint: Breakpoint,
    pub agent_string: String,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
}

impl ViewportInfo {
    pub fn device_flags(&self) -> DeviceFlags {
        DeviceFlags {
            is_mobile: self.is_mobile,
            is_tablet: self.is_tablet,
            is_desktop: self.is_desktop,
        }
    }

    /// Single label, tablet taking precedence over mobile
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_flags(self.device_flags())
    }
}

/// Captures [`ViewportInfo`] snapshots from an environment provider
#[derive(Clone)]
pub struct ViewportInspector {
    env: Arc<dyn EnvironmentProvider>,
    breakpoints: BreakpointTable,
}

impl ViewportInspector {
    pub fn new(env: Arc<dyn EnvironmentProvider>, breakpoints: BreakpointTable) -> Self {
        Self { env, breakpoints }
    }

    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    pub fn capture(&self) -> ViewportInfo {
        let width = self.env.viewport_width();
        let height = self.env.viewport_height();
        let pixel_ratio = normalize_pixel_ratio(self.env.device_pixel_ratio());
        let agent_string = self.env.user_agent();

        let flags = DeviceFlags::from_agent(&agent_string);
        let breakpoint = self.breakpoints.classify(width);
        let orientation = Orientation::from_dimensions(width, height);

        debug!(
            width,
            height,
            pixel_ratio,
            %breakpoint,
            %orientation,
            is_mobile = flags.is_mobile,
            is_tablet = flags.is_tablet,
            "Captured viewport"
        );

        ViewportInfo {
            width,
            height,
            pixel_ratio,
            orientation,
            breakpoint,
            agent_string,
            is_mobile: flags.is_mobile,
            is_tablet: flags.is_tablet,
            is_desktop: flags.is_desktop,
        }
    }
}

impl fmt::Debug for ViewportInspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportInspector")
            .field("breakpoints", &self.breakpoints)
            .finish_non_exhaustive()
    }
}

fn normalize_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        warn!("Host reported invalid device pixel ratio {ratio}, assuming 1.0");
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::fake::StaticEnvironment;

    fn inspector(env: StaticEnvironment) -> ViewportInspector {
        ViewportInspector::new(Arc::new(env), BreakpointTable::default())
    }

    #[test]
    fn test_capture_desktop() {
        let info = inspector(StaticEnvironment::desktop()).capture();
        assert_eq!(info.width, 1920.0);
        assert_eq!(info.height, 1080.0);
        assert_eq!(info.orientation, Orientation::Landscape);
        assert_eq!(info.breakpoint, Breakpoint::Xxl);
        assert!(info.is_desktop);
        assert_eq!(info.device_class(), DeviceClass::Desktop);
    }

    #[test]
    fn test_capture_iphone_portrait() {
        let info = inspector(StaticEnvironment::iphone()).capture();
        assert_eq!(info.orientation, Orientation::Portrait);
        assert_eq!(info.breakpoint, Breakpoint::Xs);
        assert_eq!(info.pixel_ratio, 3.0);
        assert!(info.is_mobile);
        assert!(!info.is_desktop);
    }

    #[test]
    fn test_square_viewport_is_landscape() {
        let info = inspector(StaticEnvironment::desktop().with_viewport(800.0, 800.0)).capture();
        assert_eq!(info.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_invalid_pixel_ratio_normalized() {
        let info = inspector(StaticEnvironment::desktop().with_pixel_ratio(0.0)).capture();
        assert_eq!(info.pixel_ratio, 1.0);
        let info = inspector(StaticEnvironment::desktop().with_pixel_ratio(f64::NAN)).capture();
        assert_eq!(info.pixel_ratio, 1.0);
    }

    #[test]
    fn test_android_tablet_flags_overlap() {
        let info = inspector(StaticEnvironment::android_tablet()).capture();
        assert!(info.is_tablet);
        assert!(info.is_mobile);
        assert!(!info.is_desktop);
        assert_eq!(info.breakpoint, Breakpoint::Md);
    }

    #[test]
    fn test_serializes_camel_case() {
        let info = inspector(StaticEnvironment::desktop()).capture();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["pixelRatio"], 1.0);
        assert_eq!(json["breakpoint"], "xxl");
        assert_eq!(json["isDesktop"], true);
    }
}
