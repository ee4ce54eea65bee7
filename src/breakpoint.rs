//! Responsive breakpoint classification
//!
//! A [`BreakpointTable`] holds the minimum width of each tier above `xs`.
//! Thresholds are validated once at construction, so classification itself is
//! infallible and total: every width, including zero, negative and NaN, maps
//! to exactly one [`Breakpoint`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Responsive layout tier, ordered from narrowest to widest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Below the smallest threshold
    #[default]
    Xs,
    /// Small devices
    Sm,
    /// Medium devices
    Md,
    /// Large devices
    Lg,
    /// Extra large devices
    Xl,
    /// Extra extra large devices
    Xxl,
}

impl Breakpoint {
    /// All tiers in ascending order
    pub const ALL: [Breakpoint; 6] = [
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// Tiers that carry a threshold, in ascending order
    const THRESHOLDED: [Breakpoint; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Breakpoint {
    type Err = BreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BreakpointError::UnknownLabel(s.to_string()))
    }
}

/// Invalid breakpoint table or label
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakpointError {
    /// A threshold is NaN or infinite
    #[error("Threshold for {breakpoint} is not finite: {value}")]
    NonFinite {
        /// Offending tier
        breakpoint: Breakpoint,
        /// Offending value
        value: f64,
    },

    /// Thresholds are not strictly increasing
    #[error("Threshold for {breakpoint} ({value}) must be greater than {previous}")]
    NotIncreasing {
        /// Offending tier
        breakpoint: Breakpoint,
        /// Offending value
        value: f64,
        /// Threshold of the tier below
        previous: f64,
    },

    /// Label does not name a tier
    #[error("Unknown breakpoint label: {0}")]
    UnknownLabel(String),
}

/// Strictly increasing minimum widths for `sm` through `xxl`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakpointTable {
    thresholds: [f64; 5],
}

impl BreakpointTable {
    /// Default thresholds: 576, 768, 992, 1200, 1400
    pub const DEFAULT_THRESHOLDS: [f64; 5] = [576.0, 768.0, 992.0, 1200.0, 1400.0];

    /// Build a table from the `sm`, `md`, `lg`, `xl`, `xxl` minimum widths
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold is not finite or if the thresholds
    /// are not strictly increasing.
    pub fn new(thresholds: [f64; 5]) -> Result<Self, BreakpointError> {
        let mut previous: Option<f64> = None;
        for (breakpoint, value) in Breakpoint::THRESHOLDED.into_iter().zip(thresholds) {
            if !value.is_finite() {
                return Err(BreakpointError::NonFinite { breakpoint, value });
            }
            if let Some(previous) = previous {
                if value <= previous {
                    return Err(BreakpointError::NotIncreasing {
                        breakpoint,
                        value,
                        previous,
                    });
                }
            }
            previous = Some(value);
        }
        Ok(Self { thresholds })
    }

    /// Tier for `width`: the greatest threshold not above it, or `xs`
    pub fn classify(&self, width: f64) -> Breakpoint {
        Breakpoint::THRESHOLDED
            .into_iter()
            .zip(self.thresholds)
            .rev()
            .find(|(_, min)| width >= *min)
            .map_or(Breakpoint::Xs, |(bp, _)| bp)
    }

    /// Minimum width of a tier (`xs` starts at zero)
    pub fn min_width(&self, breakpoint: Breakpoint) -> f64 {
        Breakpoint::THRESHOLDED
            .into_iter()
            .zip(self.thresholds)
            .find(|(bp, _)| *bp == breakpoint)
            .map_or(0.0, |(_, min)| min)
    }

    pub fn thresholds(&self) -> [f64; 5] {
        self.thresholds
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            thresholds: Self::DEFAULT_THRESHOLDS,
        }
    }
}

/// Classify `width` against the default table
pub fn classify(width: f64) -> Breakpoint {
    BreakpointTable::default().classify(width)
}
