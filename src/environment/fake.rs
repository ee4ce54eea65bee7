//! Deterministic environment and surface fakes
//!
//! `StaticEnvironment` answers every query from fixed values set through its
//! builder methods, which makes reports reproducible across runs and lets
//! tests inject failures for individual probes.
//!
//! ```
//! use lamco_viewport_probe::environment::fake::StaticEnvironment;
//! use lamco_viewport_probe::environment::EnvironmentProvider;
//!
//! let env = StaticEnvironment::desktop()
//!     .with_viewport(300.0, 640.0)
//!     .with_css_support("display", false)
//!     .with_failing_css("aspect-ratio");
//!
//! assert_eq!(env.viewport_width(), 300.0);
//! assert!(env.supports_css("aspect-ratio", "1 / 1").is_err());
//! ```

use std::collections::{HashMap, HashSet};

use super::{EnvironmentProvider, PlatformFeature, ProbeError, RenderSurface, SurfaceOverride};

/// Desktop Chrome agent string
pub const DESKTOP_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// iPhone Safari agent string
pub const IPHONE_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

/// Android tablet agent string (no `Mobile` token)
pub const ANDROID_TABLET_AGENT: &str = "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Environment provider answering from fixed values
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    width: f64,
    height: f64,
    pixel_ratio: f64,
    user_agent: String,
    host: String,
    touch_events: Result<bool, ProbeError>,
    max_touch_points: Result<u32, ProbeError>,
    platform: HashMap<PlatformFeature, bool>,
    failing_platform: HashSet<PlatformFeature>,
    css: HashMap<String, bool>,
    failing_css: HashSet<String>,
    css_default: bool,
}

impl StaticEnvironment {
    /// 1920x1080 desktop on localhost with every feature supported
    pub fn desktop() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            pixel_ratio: 1.0,
            user_agent: DESKTOP_AGENT.to_string(),
            host: "localhost".to_string(),
            touch_events: Ok(false),
            max_touch_points: Ok(0),
            platform: PlatformFeature::ALL.iter().map(|f| (*f, true)).collect(),
            failing_platform: HashSet::new(),
            css: HashMap::new(),
            failing_css: HashSet::new(),
            css_default: true,
        }
    }

    /// 390x844 iPhone with touch
    pub fn iphone() -> Self {
        Self::desktop()
            .with_viewport(390.0, 844.0)
            .with_pixel_ratio(3.0)
            .with_user_agent(IPHONE_AGENT)
            .with_touch(true, 5)
    }

    /// 800x1280 Android tablet with touch
    pub fn android_tablet() -> Self {
        Self::desktop()
            .with_viewport(800.0, 1280.0)
            .with_pixel_ratio(2.0)
            .with_user_agent(ANDROID_TABLET_AGENT)
            .with_touch(true, 10)
    }

    /// Host where nothing optional is available
    pub fn bare() -> Self {
        Self {
            platform: PlatformFeature::ALL.iter().map(|f| (*f, false)).collect(),
            css_default: false,
            ..Self::desktop()
        }
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_touch(mut self, events: bool, max_points: u32) -> Self {
        self.touch_events = Ok(events);
        self.max_touch_points = Ok(max_points);
        self
    }

    /// Make both touch queries fail
    pub fn with_failing_touch(mut self) -> Self {
        self.touch_events = Err(ProbeError::UnsupportedFeature("touch events".into()));
        self.max_touch_points = Err(ProbeError::UnsupportedFeature("maxTouchPoints".into()));
        self
    }

    /// Make only the touch-event query fail
    pub fn with_failing_touch_events(mut self) -> Self {
        self.touch_events = Err(ProbeError::UnsupportedFeature("touch events".into()));
        self
    }

    pub fn with_platform_feature(mut self, feature: PlatformFeature, available: bool) -> Self {
        self.platform.insert(feature, available);
        self.failing_platform.remove(&feature);
        self
    }

    pub fn with_failing_platform_feature(mut self, feature: PlatformFeature) -> Self {
        self.failing_platform.insert(feature);
        self
    }

    /// Answer for every query against `property`, regardless of value
    pub fn with_css_support(mut self, property: impl Into<String>, supported: bool) -> Self {
        let property = property.into();
        self.failing_css.remove(&property);
        self.css.insert(property, supported);
        self
    }

    /// Make every query against `property` fail
    pub fn with_failing_css(mut self, property: impl Into<String>) -> Self {
        self.failing_css.insert(property.into());
        self
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::desktop()
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn host_name(&self) -> String {
        self.host.clone()
    }

    fn touch_events_supported(&self) -> Result<bool, ProbeError> {
        self.touch_events.clone()
    }

    fn max_touch_points(&self) -> Result<u32, ProbeError> {
        self.max_touch_points.clone()
    }

    fn platform_feature(&self, feature: PlatformFeature) -> Result<bool, ProbeError> {
        if self.failing_platform.contains(&feature) {
            return Err(ProbeError::query_failed(
                feature.flag_name(),
                "host API threw during probe",
            ));
        }
        Ok(self.platform.get(&feature).copied().unwrap_or(false))
    }

    fn supports_css(&self, property: &str, _value: &str) -> Result<bool, ProbeError> {
        if self.failing_css.contains(property) {
            return Err(ProbeError::query_failed(property, "supports() threw"));
        }
        Ok(self.css.get(property).copied().unwrap_or(self.css_default))
    }
}

/// Rendering surface that records what the simulator did to it
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    current: Option<SurfaceOverride>,
    applied: usize,
    cleared: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override currently in place, if any
    pub fn current(&self) -> Option<&SurfaceOverride> {
        self.current.as_ref()
    }

    /// Number of `apply_override` calls
    pub fn applied_count(&self) -> usize {
        self.applied
    }

    /// Number of `clear_override` calls
    pub fn cleared_count(&self) -> usize {
        self.cleared
    }
}

impl RenderSurface for RecordingSurface {
    fn apply_override(&mut self, overlay: &SurfaceOverride) {
        self.current = Some(overlay.clone());
        self.applied += 1;
    }

    fn clear_override(&mut self) {
        self.current = None;
        self.cleared += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_environment_supports_nothing() {
        let env = StaticEnvironment::bare();
        for feature in PlatformFeature::ALL {
            assert_eq!(env.platform_feature(feature), Ok(false));
        }
        assert_eq!(env.supports_css("display", "grid"), Ok(false));
    }

    #[test]
    fn test_css_override_clears_failure() {
        let env = StaticEnvironment::desktop()
            .with_failing_css("display")
            .with_css_support("display", false);
        assert_eq!(env.supports_css("display", "flex"), Ok(false));
    }

    #[test]
    fn test_recording_surface_counts() {
        let mut surface = RecordingSurface::new();
        surface.apply_override(&SurfaceOverride {
            profile: "tablet".into(),
            width: 768,
            height: 1024,
            scale: 0.5,
        });
        assert_eq!(surface.current().map(|o| o.width), Some(768));
        surface.clear_override();
        assert!(surface.current().is_none());
        assert_eq!(surface.applied_count(), 1);
        assert_eq!(surface.cleared_count(), 1);
    }
}
