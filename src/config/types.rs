//! Configuration section types

use serde::{Deserialize, Serialize};

use crate::breakpoint::BreakpointTable;
use crate::report::DEFAULT_MIN_SUPPORTED_WIDTH;
use crate::simulator::{DeviceCatalog, DeviceProfile, DEFAULT_DEV_HOSTS};

/// Minimum widths of the `sm` through `xxl` tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointConfig {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

impl BreakpointConfig {
    pub fn thresholds(&self) -> [f64; 5] {
        [self.sm, self.md, self.lg, self.xl, self.xxl]
    }
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        let [sm, md, lg, xl, xxl] = BreakpointTable::DEFAULT_THRESHOLDS;
        Self { sm, md, lg, xl, xxl }
    }
}

/// Device simulator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Allow simulation at all
    pub enabled: bool,
    /// Hosts treated as local development (compared case-insensitively, port ignored)
    pub allowed_hosts: Vec<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_hosts: DEFAULT_DEV_HOSTS.iter().map(|h| (*h).to_string()).collect(),
        }
    }
}

/// Compatibility report configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Widths below this trigger the narrow-viewport recommendation
    pub min_supported_width: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_supported_width: DEFAULT_MIN_SUPPORTED_WIDTH,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for this crate (trace|debug|info|warn|error)
    pub level: String,
    /// Output format (pretty|compact|json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Default device list for the `devices` section
pub(crate) fn default_devices() -> Vec<DeviceProfile> {
    DeviceCatalog::builtin_profiles()
}
