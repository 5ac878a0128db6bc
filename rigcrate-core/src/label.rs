//! Body-part labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The fixed set of body parts a point cloud can be assigned to
///
/// The declaration order is the iteration order of every per-label map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "HEAD")]
    Head,
    #[serde(rename = "BODY")]
    Body,
    #[serde(rename = "LEFT ARM", alias = "LEFT_ARM")]
    LeftArm,
    #[serde(rename = "RIGHT ARM", alias = "RIGHT_ARM")]
    RightArm,
    #[serde(rename = "LEFT LEG", alias = "LEFT_LEG")]
    LeftLeg,
    #[serde(rename = "RIGHT LEG", alias = "RIGHT_LEG")]
    RightLeg,
}

impl Label {
    /// All labels in iteration order
    pub const ALL: [Label; 6] = [
        Label::Head,
        Label::Body,
        Label::LeftArm,
        Label::RightArm,
        Label::LeftLeg,
        Label::RightLeg,
    ];

    /// Identifier form, e.g. `LEFT_ARM`
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Head => "HEAD",
            Label::Body => "BODY",
            Label::LeftArm => "LEFT_ARM",
            Label::RightArm => "RIGHT_ARM",
            Label::LeftLeg => "LEFT_LEG",
            Label::RightLeg => "RIGHT_LEG",
        }
    }

    /// Name used in settings files, e.g. `LEFT ARM`
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Head => "HEAD",
            Label::Body => "BODY",
            Label::LeftArm => "LEFT ARM",
            Label::RightArm => "RIGHT ARM",
            Label::LeftLeg => "LEFT LEG",
            Label::RightLeg => "RIGHT LEG",
        }
    }

    pub fn is_arm(&self) -> bool {
        matches!(self, Label::LeftArm | Label::RightArm)
    }

    pub fn is_leg(&self) -> bool {
        matches!(self, Label::LeftLeg | Label::RightLeg)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = Error;

    /// Accepts both `LEFT_ARM` and `LEFT ARM`, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(' ', "_");
        Label::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == normalized)
            .ok_or_else(|| Error::InvalidData(format!("Unknown label: {:?}", s)))
    }
}
