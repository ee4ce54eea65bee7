//! Recommendation rules
//!
//! Rules are plain data: an identifier, a condition and a message. The
//! reporter evaluates every rule in table order and never short-circuits, so
//! each rule can be tested on its own and new rules can be appended without
//! touching the composition logic.

use std::fmt;

use serde::Serialize;

use crate::capabilities::{CapabilityFlags, CssFeature};
use crate::environment::PlatformFeature;
use crate::viewport::ViewportInfo;

/// Default minimum supported viewport width in CSS pixels
pub const DEFAULT_MIN_SUPPORTED_WIDTH: f64 = 320.0;

/// Data a rule condition is evaluated against
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub viewport: &'a ViewportInfo,
    pub capabilities: &'a CapabilityFlags,
    pub css_support: &'a CapabilityFlags,
}

/// Predicate of a recommendation rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RuleCondition {
    /// Captured width is strictly below the given value
    ViewportNarrowerThan(f64),
    /// The CSS feature flag is false
    CssUnsupported(CssFeature),
    /// The named host capability flag is false (or absent)
    CapabilityUnsupported(String),
}

impl RuleCondition {
    pub fn holds(&self, ctx: &RuleContext<'_>) -> bool {
        match self {
            Self::ViewportNarrowerThan(min) => ctx.viewport.width < *min,
            Self::CssUnsupported(feature) => !ctx.css_support.get(feature.flag_name()),
            Self::CapabilityUnsupported(name) => !ctx.capabilities.get(name),
        }
    }
}

impl fmt::Display for RuleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewportNarrowerThan(min) => write!(f, "width < {min}"),
            Self::CssUnsupported(feature) => write!(f, "!{}", feature.flag_name()),
            Self::CapabilityUnsupported(name) => write!(f, "!{name}"),
        }
    }
}

/// A predicate paired with the recommendation it produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRule {
    pub id: String,
    pub condition: RuleCondition,
    pub message: String,
}

impl RecommendationRule {
    pub fn new(id: impl Into<String>, condition: RuleCondition, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            condition,
            message: message.into(),
        }
    }

    pub fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        self.condition.holds(ctx)
    }
}

/// The built-in rule table, in evaluation order
pub fn default_rules(min_supported_width: f64) -> Vec<RecommendationRule> {
    vec![
        RecommendationRule::new(
            "narrow-viewport",
            RuleCondition::ViewportNarrowerThan(min_supported_width),
            format!(
                "Viewport is narrower than {min_supported_width}px: set min-width: {min_supported_width}px on the page body"
            ),
        ),
        RecommendationRule::new(
            "no-flexbox",
            RuleCondition::CssUnsupported(CssFeature::Flexbox),
            "Flexbox is not supported: provide a fallback layout (block or inline-block)",
        ),
        RecommendationRule::new(
            "no-grid",
            RuleCondition::CssUnsupported(CssFeature::Grid),
            "CSS Grid is not supported: use flexbox fallbacks for grid layouts",
        ),
        RecommendationRule::new(
            "no-custom-properties",
            RuleCondition::CssUnsupported(CssFeature::CustomProperties),
            "CSS custom properties are not supported: provide static fallback values",
        ),
        RecommendationRule::new(
            "no-intersection-observer",
            RuleCondition::CapabilityUnsupported(
                PlatformFeature::IntersectionObserver.flag_name().to_string(),
            ),
            "IntersectionObserver is not supported: fall back to scroll event listeners",
        ),
    ]
}

/// Messages of every rule that applies, in table order
pub fn evaluate(rules: &[RecommendationRule], ctx: &RuleContext<'_>) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| rule.applies(ctx))
        .map(|rule| rule.message.clone())
        .collect()
}
