//! Compatibility reporting
//!
//! Composes a viewport snapshot and the capability probes into a
//! [`CompatibilityReport`], then attaches the messages of every
//! [`RecommendationRule`] whose condition holds.

pub mod rules;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use rules::{
    default_rules, RecommendationRule, RuleCondition, RuleContext, DEFAULT_MIN_SUPPORTED_WIDTH,
};

use crate::capabilities::{CapabilityDetector, CapabilityFlags};
use crate::viewport::{ViewportInfo, ViewportInspector};

/// Point-in-time compatibility snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    /// Viewport and agent state
    pub viewport: ViewportInfo,
    /// Input and platform flags
    pub capabilities: CapabilityFlags,
    /// CSS feature flags
    pub css_support: CapabilityFlags,
    /// Recommendations, in rule table order
    pub recommendations: Vec<String>,
}

impl CompatibilityReport {
    /// No rule fired
    pub fn is_fully_compatible(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn format_text(&self) -> String {
        let vp = &self.viewport;
        let mut output = String::new();

        output.push_str("\n=== Viewport ===\n\n");
        output.push_str(&format!(
            "  {}x{} @{}x ({}, {})\n",
            vp.width, vp.height, vp.pixel_ratio, vp.breakpoint, vp.orientation
        ));
        output.push_str(&format!(
            "  Device: {:?} (mobile: {}, tablet: {}, desktop: {})\n",
            vp.device_class(),
            vp.is_mobile,
            vp.is_tablet,
            vp.is_desktop
        ));
        output.push_str(&format!("  Agent: {}\n", vp.agent_string));

        for (title, flags) in [
            ("Capabilities", &self.capabilities),
            ("CSS Support", &self.css_support),
        ] {
            output.push_str(&format!("\n=== {title} ({}) ===\n\n", flags.summary()));
            for (name, supported) in flags.iter() {
                let mark = if supported { "✅" } else { "❌" };
                output.push_str(&format!("  {mark} {name}\n"));
            }
        }

        if !self.recommendations.is_empty() {
            output.push_str("\n=== Recommendations ===\n\n");
            for (i, rec) in self.recommendations.iter().enumerate() {
                output.push_str(&format!("  {}. {rec}\n", i + 1));
            }
        }

        output
    }
}

/// Runs the inspector and detector and evaluates the rule table
#[derive(Debug, Clone)]
pub struct CompatibilityReporter {
    inspector: ViewportInspector,
    detector: CapabilityDetector,
    rules: Vec<RecommendationRule>,
}

impl CompatibilityReporter {
    /// Reporter with the built-in rule table
    pub fn new(
        inspector: ViewportInspector,
        detector: CapabilityDetector,
        min_supported_width: f64,
    ) -> Self {
        Self {
            inspector,
            detector,
            rules: default_rules(min_supported_width),
        }
    }

    /// Append a rule after the existing table
    pub fn with_rule(mut self, rule: RecommendationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    pub fn run(&self) -> CompatibilityReport {
        info!("Running compatibility check...");

        let viewport = self.inspector.capture();
        let capabilities = self.detector.host_capabilities();
        let css_support = self.detector.css();

        let recommendations = rules::evaluate(
            &self.rules,
            &RuleContext {
                viewport: &viewport,
                capabilities: &capabilities,
                css_support: &css_support,
            },
        );

        info!(
            breakpoint = %viewport.breakpoint,
            recommendations = recommendations.len(),
            "Compatibility check complete"
        );

        CompatibilityReport {
            viewport,
            capabilities,
            css_support,
            recommendations,
        }
    }
}
