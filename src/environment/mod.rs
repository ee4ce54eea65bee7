//! Host environment seam
//!
//! Every host query this crate makes goes through [`EnvironmentProvider`], and
//! the only host mutation (the simulator's viewport override) goes through
//! [`RenderSurface`]. Substitute [`fake::StaticEnvironment`] and
//! [`fake::RecordingSurface`] to get fully deterministic behavior in tests.

pub mod fake;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by a single host capability query
///
/// Probes never propagate these. A failed query degrades the corresponding
/// flag to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The underlying host API is absent
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// The host API exists but the query failed
    #[error("Query failed for {feature}: {reason}")]
    QueryFailed {
        /// Feature being queried
        feature: String,
        /// Host-reported failure
        reason: String,
    },
}

impl ProbeError {
    /// Create a query failure for `feature`
    pub fn query_failed(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::QueryFailed {
            feature: feature.into(),
            reason: reason.into(),
        }
    }
}

/// Host platform facilities probed by the capability detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformFeature {
    /// Persistent key/value storage
    LocalStorage,
    /// Per-session key/value storage
    SessionStorage,
    /// WebGL rendering context creation
    WebGl,
    /// Service worker registration
    ServiceWorker,
    /// Intersection observer API
    IntersectionObserver,
}

impl PlatformFeature {
    /// All platform features, in report order
    pub const ALL: [PlatformFeature; 5] = [
        Self::LocalStorage,
        Self::SessionStorage,
        Self::WebGl,
        Self::ServiceWorker,
        Self::IntersectionObserver,
    ];

    /// Stable flag name used in capability maps
    pub fn flag_name(&self) -> &'static str {
        match self {
            Self::LocalStorage => "localStorage",
            Self::SessionStorage => "sessionStorage",
            Self::WebGl => "webgl",
            Self::ServiceWorker => "serviceWorker",
            Self::IntersectionObserver => "intersectionObserver",
        }
    }
}

/// Capability surface of the host the crate is running against
///
/// Display geometry and the agent string are always available; everything
/// that can be absent on a host returns `Result`.
pub trait EnvironmentProvider: Send + Sync {
    /// Logical viewport width in CSS pixels
    fn viewport_width(&self) -> f64;

    /// Logical viewport height in CSS pixels
    fn viewport_height(&self) -> f64;

    /// Ratio of physical to logical pixels
    fn device_pixel_ratio(&self) -> f64;

    /// Agent identification string
    fn user_agent(&self) -> String;

    /// Host name the page/application is served from (may include `:port`)
    fn host_name(&self) -> String;

    /// Whether touch events are supported
    fn touch_events_supported(&self) -> Result<bool, ProbeError>;

    /// Maximum simultaneous touch points reported by the host
    fn max_touch_points(&self) -> Result<u32, ProbeError>;

    /// Whether a platform facility is available
    fn platform_feature(&self, feature: PlatformFeature) -> Result<bool, ProbeError>;

    /// Whether the style engine accepts `property: value`
    fn supports_css(&self, property: &str, value: &str) -> Result<bool, ProbeError>;
}

/// Synthetic size/scale override applied to the root rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceOverride {
    /// Name of the simulated device profile
    pub profile: String,
    /// Target width in CSS pixels
    pub width: u32,
    /// Target height in CSS pixels
    pub height: u32,
    /// Visual scale (1 / device pixel ratio)
    pub scale: f64,
}

/// Root rendering surface the simulator writes its override to
pub trait RenderSurface {
    /// Apply `overlay`, replacing any override already in place
    fn apply_override(&mut self, overlay: &SurfaceOverride);

    /// Remove any override
    fn clear_override(&mut self);
}
