//! Configuration management
//!
//! Handles loading and validation of configuration from TOML. Every section
//! has defaults, so an empty file (or no file at all) yields the built-in
//! breakpoint table, device catalog and simulator host list.
//!
//! ```toml
//! [breakpoints]
//! sm = 576
//! md = 768
//! lg = 992
//! xl = 1200
//! xxl = 1400
//!
//! [[devices]]
//! name = "small-phone"
//! width = 375
//! height = 667
//! pixel_ratio = 2.0
//!
//! [simulator]
//! enabled = true
//! allowed_hosts = ["localhost", "127.0.0.1"]
//!
//! [report]
//! min_supported_width = 320
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

pub mod types;

use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use types::{BreakpointConfig, LoggingConfig, ReportConfig, SimulatorConfig};

use crate::breakpoint::BreakpointTable;
use crate::simulator::{DeviceCatalog, DeviceProfile};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Breakpoint thresholds
    #[serde(default)]
    pub breakpoints: BreakpointConfig,
    /// Device profile catalog for the simulator
    #[serde(default = "types::default_devices")]
    pub devices: Vec<DeviceProfile>,
    /// Simulator configuration
    #[serde(default)]
    pub simulator: SimulatorConfig,
    /// Compatibility report configuration
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self {
            breakpoints: BreakpointConfig::default(),
            devices: types::default_devices(),
            simulator: SimulatorConfig::default(),
            report: ReportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.breakpoint_table()?;

        let mut seen = HashSet::new();
        for device in &self.devices {
            if device.name.trim().is_empty() {
                anyhow::bail!("Device profile name cannot be empty");
            }
            if !seen.insert(device.name.as_str()) {
                anyhow::bail!("Duplicate device profile: {}", device.name);
            }
            if device.width == 0 || device.height == 0 {
                anyhow::bail!(
                    "Device profile {} has zero dimension: {}x{}",
                    device.name,
                    device.width,
                    device.height
                );
            }
            if !device.pixel_ratio.is_finite() || device.pixel_ratio <= 0.0 {
                anyhow::bail!(
                    "Device profile {} has invalid pixel ratio: {}",
                    device.name,
                    device.pixel_ratio
                );
            }
        }

        if !self.report.min_supported_width.is_finite() || self.report.min_supported_width < 0.0 {
            anyhow::bail!(
                "Invalid min_supported_width: {}",
                self.report.min_supported_width
            );
        }

        if self.simulator.allowed_hosts.iter().any(|h| h.trim().is_empty()) {
            anyhow::bail!("Simulator allowed_hosts cannot contain empty entries");
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Invalid log level: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => {}
            _ => anyhow::bail!("Invalid log format: {}", self.logging.format),
        }

        Ok(())
    }

    /// Breakpoint table built from the `breakpoints` section
    pub fn breakpoint_table(&self) -> Result<BreakpointTable> {
        BreakpointTable::new(self.breakpoints.thresholds()).context("Invalid breakpoint table")
    }

    /// Device catalog built from the `devices` section
    pub fn device_catalog(&self) -> DeviceCatalog {
        DeviceCatalog::new(self.devices.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
