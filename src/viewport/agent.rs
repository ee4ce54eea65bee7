//! Agent-string device classification
//!
//! Matching is plain, case-sensitive token search. The tablet and mobile
//! rules are evaluated independently, so an Android agent without a `Mobile`
//! token is reported as both a tablet and a mobile device.

use serde::{Deserialize, Serialize};

const TABLET_TOKENS: [&str; 2] = ["iPad", "Android"];

const TABLET_EXCLUDE_TOKEN: &str = "Mobile";

const MOBILE_TOKENS: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// Raw device-class flags derived from an agent string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceFlags {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
}

impl DeviceFlags {
    pub fn from_agent(agent: &str) -> Self {
        let is_mobile = MOBILE_TOKENS.iter().any(|token| agent.contains(token));
        let is_tablet = TABLET_TOKENS.iter().any(|token| agent.contains(token))
            && !agent.contains(TABLET_EXCLUDE_TOKEN);

        Self {
            is_mobile,
            is_tablet,
            is_desktop: !is_mobile,
        }
    }
}

/// Single device label for callers that cannot handle overlapping flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Tablet wins over mobile, mobile over desktop
    pub fn from_flags(flags: DeviceFlags) -> Self {
        if flags.is_tablet {
            Self::Tablet
        } else if flags.is_mobile {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::fake::{ANDROID_TABLET_AGENT, DESKTOP_AGENT, IPHONE_AGENT};

    #[test]
    fn test_desktop_agent() {
        let flags = DeviceFlags::from_agent(DESKTOP_AGENT);
        assert!(!flags.is_mobile);
        assert!(!flags.is_tablet);
        assert!(flags.is_desktop);
        assert_eq!(DeviceClass::from_flags(flags), DeviceClass::Desktop);
    }

    #[test]
    fn test_iphone_agent() {
        let flags = DeviceFlags::from_agent(IPHONE_AGENT);
        assert!(flags.is_mobile);
        assert!(!flags.is_tablet);
        assert!(!flags.is_desktop);
    }

    #[test]
    fn test_android_tablet_overlap_preserved() {
        let flags = DeviceFlags::from_agent(ANDROID_TABLET_AGENT);
        assert!(flags.is_tablet);
        assert!(flags.is_mobile);
        assert!(!flags.is_desktop);
        assert_eq!(DeviceClass::from_flags(flags), DeviceClass::Tablet);
    }

    #[test]
    fn test_android_phone_is_not_tablet() {
        let flags = DeviceFlags::from_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36",
        );
        assert!(flags.is_mobile);
        assert!(!flags.is_tablet);
    }

    #[test]
    fn test_ipad_with_mobile_token() {
        // Classic iPad Safari agents carry a Mobile/ build token
        let flags = DeviceFlags::from_agent(
            "Mozilla/5.0 (iPad; CPU OS 12_2 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148",
        );
        assert!(flags.is_mobile);
        assert!(!flags.is_tablet);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let flags = DeviceFlags::from_agent("custom-android-webview");
        assert!(!flags.is_mobile);
        assert!(!flags.is_tablet);
    }

    #[test]
    fn test_opera_mini_and_blackberry() {
        assert!(DeviceFlags::from_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)").is_mobile);
        assert!(DeviceFlags::from_agent("BlackBerry9700/5.0.0.351").is_mobile);
        assert!(DeviceFlags::from_agent("").is_desktop);
    }
}
