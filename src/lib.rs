//! # lamco-viewport-probe
//!
//! Environment introspection for responsive front ends: viewport
//! classification, capability and CSS feature detection, compatibility
//! reporting, and device simulation for local testing.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentProbe
//!   ├─> ViewportInspector ──> BreakpointTable (width → xs..xxl)
//!   ├─> CapabilityDetector ─> Input / Platform / CSS probes
//!   ├─> CompatibilityReporter (inspector + detector + rule table)
//!   └─> DeviceSimulator ────> RenderSurface (override on dev hosts only)
//! ```
//!
//! Every host query goes through the [`environment::EnvironmentProvider`]
//! trait. Supplying [`environment::fake::StaticEnvironment`] makes every
//! operation deterministic.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use lamco_viewport_probe::{EnvironmentProbe, Breakpoint};
//! use lamco_viewport_probe::environment::fake::{RecordingSurface, StaticEnvironment};
//!
//! let env = Arc::new(StaticEnvironment::iphone());
//! let mut probe = EnvironmentProbe::with_defaults(env, RecordingSurface::new()).unwrap();
//!
//! assert_eq!(probe.capture_viewport().breakpoint, Breakpoint::Xs);
//! assert!(probe.check_touch_support());
//! assert!(probe.run_compatibility_check().recommendations.is_empty());
//!
//! probe.simulate_viewport("tablet");
//! assert!(probe.simulation_state().is_simulated());
//! probe.reset_simulation();
//! ```

#![warn(clippy::all)]

/// Responsive breakpoint table and classification
pub mod breakpoint;

/// Capability detection (input, platform, CSS)
pub mod capabilities;

/// Configuration loading and validation
pub mod config;

/// Host environment seam and test fakes
pub mod environment;

/// Facade over all components
pub mod probe;

/// Compatibility report and recommendation rules
pub mod report;

/// Device viewport simulation
pub mod simulator;

/// Logging setup
pub mod telemetry;

/// Viewport snapshot capture
pub mod viewport;

pub use breakpoint::{classify, Breakpoint, BreakpointError, BreakpointTable};
pub use capabilities::{CapabilityDetector, CapabilityFlags, CssFeature};
pub use config::Config;
pub use environment::{
    EnvironmentProvider, PlatformFeature, ProbeError, RenderSurface, SurfaceOverride,
};
pub use probe::EnvironmentProbe;
pub use report::{
    CompatibilityReport, CompatibilityReporter, RecommendationRule, RuleCondition,
};
pub use simulator::{
    DeviceCatalog, DeviceProfile, DeviceSimulator, SimulationOutcome, SimulationState,
};
pub use viewport::{DeviceClass, Orientation, ViewportInfo, ViewportInspector};
