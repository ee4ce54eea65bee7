//! Environment probe facade
//!
//! [`EnvironmentProbe`] owns one of each component, wired to a single
//! environment provider and built from a validated [`Config`]. There is no
//! global instance: create one per host and pass it where it is needed.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::breakpoint::Breakpoint;
use crate::capabilities::{CapabilityDetector, CapabilityFlags};
use crate::config::Config;
use crate::environment::{EnvironmentProvider, RenderSurface};
use crate::report::{CompatibilityReport, CompatibilityReporter};
use crate::simulator::{DeviceSimulator, SimulationOutcome, SimulationState};
use crate::viewport::{ViewportInfo, ViewportInspector};

/// Stable entry point for viewport, capability and simulation queries
pub struct EnvironmentProbe<S: RenderSurface> {
    config: Config,
    inspector: ViewportInspector,
    detector: CapabilityDetector,
    reporter: CompatibilityReporter,
    simulator: DeviceSimulator<S>,
}

impl<S: RenderSurface> EnvironmentProbe<S> {
    /// Wire every component to `env` using `config`
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: Config, env: Arc<dyn EnvironmentProvider>, surface: S) -> Result<Self> {
        config.validate()?;
        let breakpoints = config.breakpoint_table()?;
        debug!("Breakpoint thresholds: {:?}", breakpoints.thresholds());

        let inspector = ViewportInspector::new(env.clone(), breakpoints);
        let detector = CapabilityDetector::new(env.clone());
        let reporter = CompatibilityReporter::new(
            inspector.clone(),
            detector.clone(),
            config.report.min_supported_width,
        );
        let simulator = DeviceSimulator::new(
            env,
            config.device_catalog(),
            config.simulator.allowed_hosts.clone(),
            surface,
        )
        .with_enabled(config.simulator.enabled);

        Ok(Self {
            config,
            inspector,
            detector,
            reporter,
            simulator,
        })
    }

    /// Probe with the default configuration
    pub fn with_defaults(env: Arc<dyn EnvironmentProvider>, surface: S) -> Result<Self> {
        Self::new(Config::default_config(), env, surface)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn classify(&self, width: f64) -> Breakpoint {
        self.inspector.breakpoints().classify(width)
    }

    pub fn capture_viewport(&self) -> ViewportInfo {
        self.inspector.capture()
    }

    pub fn check_touch_support(&self) -> bool {
        self.detector.touch_supported()
    }

    pub fn check_platform_support(&self) -> CapabilityFlags {
        self.detector.platform()
    }

    pub fn check_css_support(&self) -> CapabilityFlags {
        self.detector.css()
    }

    pub fn run_compatibility_check(&self) -> CompatibilityReport {
        self.reporter.run()
    }

    pub fn simulate_viewport(&mut self, name: &str) -> SimulationOutcome {
        self.simulator.simulate(name)
    }

    pub fn reset_simulation(&mut self) {
        self.simulator.reset();
    }

    pub fn simulation_state(&self) -> &SimulationState {
        self.simulator.state()
    }

    pub fn simulator(&self) -> &DeviceSimulator<S> {
        &self.simulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::fake::{RecordingSurface, StaticEnvironment};

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default_config();
        config.breakpoints.xl = 100.0;
        let result = EnvironmentProbe::new(
            config,
            Arc::new(StaticEnvironment::desktop()),
            RecordingSurface::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_breakpoints_flow_into_capture() {
        let mut config = Config::default_config();
        config.breakpoints.xxl = 2000.0;
        let probe = EnvironmentProbe::new(
            config,
            Arc::new(StaticEnvironment::desktop()),
            RecordingSurface::new(),
        )
        .unwrap();

        assert_eq!(probe.classify(1920.0), Breakpoint::Xl);
        assert_eq!(probe.capture_viewport().breakpoint, Breakpoint::Xl);
    }

    #[test]
    fn test_simulator_disabled_by_config() {
        let mut config = Config::default_config();
        config.simulator.enabled = false;
        let mut probe = EnvironmentProbe::new(
            config,
            Arc::new(StaticEnvironment::desktop()),
            RecordingSurface::new(),
        )
        .unwrap();

        assert_eq!(probe.simulate_viewport("tablet"), SimulationOutcome::Disabled);
        assert_eq!(probe.simulation_state(), &SimulationState::Normal);
    }
}
