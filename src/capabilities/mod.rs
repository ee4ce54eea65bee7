//! Capability detection
//!
//! Boolean support flags for the host, grouped the way they are reported:
//!
//! - **Input**: touch support
//! - **Platform**: storage, WebGL, service workers, intersection observers
//! - **CSS**: layout and styling features queried through the style engine
//!
//! # Fault isolation
//!
//! Every probe is independent. A query that fails (the host API is missing
//! or errors) is logged at warning level and reported as `false`; it never
//! aborts the remaining probes.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use lamco_viewport_probe::capabilities::CapabilityDetector;
//! use lamco_viewport_probe::environment::fake::StaticEnvironment;
//!
//! let detector = CapabilityDetector::new(Arc::new(StaticEnvironment::desktop()));
//! let css = detector.css();
//! assert!(css.get("grid"));
//! ```

mod detector;
pub mod probes;
mod state;

pub use detector::CapabilityDetector;
pub use state::CapabilityFlags;

pub use probes::{CssFeature, CssProbe, InputProbe, PlatformProbe, TOUCH};
