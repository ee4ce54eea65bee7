//! CSS feature probe
//!
//! Each feature is a single `supports(property, value)` query against the
//! host style engine.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::guarded;
use crate::capabilities::state::CapabilityFlags;
use crate::environment::EnvironmentProvider;

/// CSS features probed for the compatibility report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CssFeature {
    /// Flexbox with wrapping
    Flexbox,
    /// Grid templates
    Grid,
    /// Custom properties (`--name`)
    CustomProperties,
    /// `backdrop-filter`
    BackdropFilter,
    /// `clamp()`
    Clamp,
    /// `aspect-ratio`
    AspectRatio,
    /// Container queries
    ContainerQueries,
    /// Logical properties
    LogicalProperties,
}

impl CssFeature {
    /// All features, in probe order
    pub const ALL: [CssFeature; 8] = [
        Self::Flexbox,
        Self::Grid,
        Self::CustomProperties,
        Self::BackdropFilter,
        Self::Clamp,
        Self::AspectRatio,
        Self::ContainerQueries,
        Self::LogicalProperties,
    ];

    /// Stable flag name used in capability maps
    pub fn flag_name(&self) -> &'static str {
        match self {
            Self::Flexbox => "flexbox",
            Self::Grid => "grid",
            Self::CustomProperties => "customProperties",
            Self::BackdropFilter => "backdropFilter",
            Self::Clamp => "clamp",
            Self::AspectRatio => "aspectRatio",
            Self::ContainerQueries => "containerQueries",
            Self::LogicalProperties => "logicalProperties",
        }
    }

    /// Property/value pair passed to the style engine
    pub fn query(&self) -> (&'static str, &'static str) {
        match self {
            Self::Flexbox => ("flex-wrap", "wrap"),
            Self::Grid => ("grid-template-columns", "1fr 1fr"),
            Self::CustomProperties => ("--probe-custom-property", "0"),
            Self::BackdropFilter => ("backdrop-filter", "blur(1px)"),
            Self::Clamp => ("width", "clamp(1px, 50%, 100px)"),
            Self::AspectRatio => ("aspect-ratio", "16 / 9"),
            Self::ContainerQueries => ("container-type", "inline-size"),
            Self::LogicalProperties => ("margin-inline-start", "1px"),
        }
    }
}

/// CSS probe
pub struct CssProbe;

impl CssProbe {
    pub fn probe(env: &dyn EnvironmentProvider) -> CapabilityFlags {
        info!("Probing CSS feature support...");

        let flags: CapabilityFlags = CssFeature::ALL
            .into_iter()
            .map(|feature| (feature.flag_name(), Self::supports(env, feature)))
            .collect();

        info!("CSS support: {}", flags.summary());
        flags
    }

    pub fn supports(env: &dyn EnvironmentProvider, feature: CssFeature) -> bool {
        let (property, value) = feature.query();
        guarded(feature.flag_name(), env.supports_css(property, value), |s| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::fake::StaticEnvironment;

    #[test]
    fn test_all_features_supported_on_modern_host() {
        let flags = CssProbe::probe(&StaticEnvironment::desktop());
        assert_eq!(flags.len(), CssFeature::ALL.len());
        assert_eq!(flags.unsupported().count(), 0);
    }

    #[test]
    fn test_single_failing_query_is_isolated() {
        let env = StaticEnvironment::desktop()
            .with_failing_css("aspect-ratio")
            .with_css_support("grid-template-columns", false);
        let flags = CssProbe::probe(&env);

        assert_eq!(flags.len(), CssFeature::ALL.len());
        assert!(!flags.get("aspectRatio"));
        assert!(!flags.get("grid"));
        for feature in CssFeature::ALL {
            if !matches!(feature, CssFeature::AspectRatio | CssFeature::Grid) {
                assert!(flags.get(feature.flag_name()), "{feature:?}");
            }
        }
    }

    #[test]
    fn test_flag_names_unique() {
        let mut names: Vec<_> = CssFeature::ALL.iter().map(|f| f.flag_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CssFeature::ALL.len());
    }
}
