//! Device viewport simulation
//!
//! Applies a synthetic size/scale override to the root rendering surface so
//! a page can be checked against a named device profile during local
//! development.
//!
//! # State machine
//!
//! ```text
//!            simulate(known)             simulate(other known)
//!  Normal ─────────────────────▶ Simulated ──────────┐
//!    ▲                              │  ▲              │
//!    └────────── reset() ───────────┘  └──────────────┘
//! ```
//!
//! `simulate` with an unknown profile, on a host that is not a recognized
//! local-development host, or with simulation disabled, is a no-op. `reset`
//! in `Normal` is a no-op.

mod catalog;

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use catalog::{DeviceCatalog, DeviceProfile};

use crate::environment::{EnvironmentProvider, RenderSurface, SurfaceOverride};

/// Hosts treated as local development when none are configured
pub const DEFAULT_DEV_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Simulator state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SimulationState {
    /// No override applied
    #[default]
    Normal,
    /// Override for `profile` applied
    Simulated {
        /// Active profile
        profile: DeviceProfile,
    },
}

impl SimulationState {
    pub fn is_simulated(&self) -> bool {
        matches!(self, Self::Simulated { .. })
    }

    pub fn active_profile(&self) -> Option<&DeviceProfile> {
        match self {
            Self::Normal => None,
            Self::Simulated { profile } => Some(profile),
        }
    }
}

/// What a `simulate` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationOutcome {
    /// Override applied, state is `Simulated`
    Applied,
    /// Profile name not in the catalog, nothing changed
    UnknownProfile,
    /// Current host is not a local-development host, nothing changed
    HostNotAllowed,
    /// Simulation disabled by configuration, nothing changed
    Disabled,
}

/// Two-state device simulator bound to a rendering surface
pub struct DeviceSimulator<S: RenderSurface> {
    env: Arc<dyn EnvironmentProvider>,
    catalog: DeviceCatalog,
    allowed_hosts: Vec<String>,
    enabled: bool,
    surface: S,
    state: SimulationState,
}

impl<S: RenderSurface> DeviceSimulator<S> {
    pub fn new(
        env: Arc<dyn EnvironmentProvider>,
        catalog: DeviceCatalog,
        allowed_hosts: Vec<String>,
        surface: S,
    ) -> Self {
        Self {
            env,
            catalog,
            allowed_hosts,
            enabled: true,
            surface,
            state: SimulationState::Normal,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Whether the provider's current host is a recognized development host
    pub fn is_dev_host(&self) -> bool {
        let host = self.env.host_name();
        let host = strip_port(host.trim());
        self.allowed_hosts
            .iter()
            .any(|allowed| allowed.trim().eq_ignore_ascii_case(host))
    }

    /// Apply the override for `name`, replacing any active one
    pub fn simulate(&mut self, name: &str) -> SimulationOutcome {
        if !self.enabled {
            debug!("Device simulation disabled, ignoring {name}");
            return SimulationOutcome::Disabled;
        }

        let Some(profile) = self.catalog.get(name).cloned() else {
            debug!("Unknown device profile {name}, ignoring");
            return SimulationOutcome::UnknownProfile;
        };

        if !self.is_dev_host() {
            debug!(
                "Host {} is not a development host, not simulating {name}",
                self.env.host_name()
            );
            return SimulationOutcome::HostNotAllowed;
        }

        let overlay = SurfaceOverride {
            profile: profile.name.clone(),
            width: profile.width,
            height: profile.height,
            scale: profile.scale(),
        };
        self.surface.apply_override(&overlay);

        info!(
            "Simulating {} ({}x{} @{}x)",
            profile.name, profile.width, profile.height, profile.pixel_ratio
        );
        self.state = SimulationState::Simulated { profile };
        SimulationOutcome::Applied
    }

    /// Clear any override and return to `Normal`
    pub fn reset(&mut self) {
        if !self.state.is_simulated() {
            return;
        }
        self.surface.clear_override();
        self.state = SimulationState::Normal;
        info!("Device simulation reset");
    }
}

impl<S: RenderSurface + fmt::Debug> fmt::Debug for DeviceSimulator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceSimulator")
            .field("catalog", &self.catalog)
            .field("allowed_hosts", &self.allowed_hosts)
            .field("enabled", &self.enabled)
            .field("surface", &self.surface)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Drop a trailing `:port`, keeping bracketed IPv6 literals intact
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    // Unbracketed IPv6 has no unambiguous port
    if host.matches(':').count() > 1 {
        return host;
    }
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}
