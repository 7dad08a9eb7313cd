//! Simplified to traditional Chinese script conversion

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zhconv::{zhconv, Variant};

/// Named conversion profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Profile {
    /// Simplified to generic traditional script
    #[default]
    #[serde(rename = "s2t")]
    SimplifiedToTraditional,

    /// Simplified to Taiwan traditional script
    #[serde(rename = "s2tw")]
    SimplifiedToTaiwan,

    /// Simplified to Hong Kong traditional script
    #[serde(rename = "s2hk")]
    SimplifiedToHongKong,
}

impl Profile {
    /// Profile name as used on the command line and in settings files
    pub fn name(&self) -> &'static str {
        match self {
            Profile::SimplifiedToTraditional => "s2t",
            Profile::SimplifiedToTaiwan => "s2tw",
            Profile::SimplifiedToHongKong => "s2hk",
        }
    }

    fn variant(&self) -> Variant {
        match self {
            Profile::SimplifiedToTraditional => Variant::ZhHant,
            Profile::SimplifiedToTaiwan => Variant::ZhTW,
            Profile::SimplifiedToHongKong => Variant::ZhHK,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s2t" => Ok(Profile::SimplifiedToTraditional),
            "s2tw" => Ok(Profile::SimplifiedToTaiwan),
            "s2hk" => Ok(Profile::SimplifiedToHongKong),
            _ => Err(ConfigError::InvalidValue {
                field: "profile",
                value: s.to_string(),
            }),
        }
    }
}

/// Maps text through a fixed conversion profile.
///
/// Characters without a mapping pass through unchanged. The conversion
/// tables are compiled in, so conversion itself cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptConverter {
    profile: Profile,
}

impl ScriptConverter {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Convert `text` to the profile's target script
    pub fn convert(&self, text: &str) -> String {
        zhconv(text, self.profile.variant())
    }
}
