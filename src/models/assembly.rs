use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Top-level assembly of the airframe a log entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assembly {
    #[serde(rename = "left wing")]
    LeftWing,
    #[serde(rename = "right wing")]
    RightWing,
    #[serde(rename = "fuselage")]
    Fuselage,
    #[serde(rename = "skin")]
    Skin,
    #[serde(rename = "avionics")]
    Avionics,
    #[serde(rename = "powerplant")]
    Powerplant,
    #[serde(rename = "gear")]
    Gear,
}

impl Assembly {
    pub const ALL: [Assembly; 7] = [
        Assembly::LeftWing,
        Assembly::RightWing,
        Assembly::Fuselage,
        Assembly::Skin,
        Assembly::Avionics,
        Assembly::Powerplant,
        Assembly::Gear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Assembly::LeftWing => "left wing",
            Assembly::RightWing => "right wing",
            Assembly::Fuselage => "fuselage",
            Assembly::Skin => "skin",
            Assembly::Avionics => "avionics",
            Assembly::Powerplant => "powerplant",
            Assembly::Gear => "gear",
        }
    }

    /// Names listed one per line, as shown when an assembly is rejected.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(Assembly::as_str)
            .collect::<Vec<_>>()
            .join("\n  ")
    }
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Assembly {
    type Err = AppError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::InvalidAssembly(Self::valid_names()))
    }
}
