use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WasteType {
    #[default]
    Mixed,
    Dry,
    Wet,
    #[serde(rename = "E-Waste")]
    EWaste,
    Hazardous,
}

impl WasteType {
    pub const ALL: [WasteType; 5] = [
        WasteType::Mixed,
        WasteType::Dry,
        WasteType::Wet,
        WasteType::EWaste,
        WasteType::Hazardous,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            WasteType::Mixed => "Mixed",
            WasteType::Dry => "Dry",
            WasteType::Wet => "Wet",
            WasteType::EWaste => "E-Waste",
            WasteType::Hazardous => "Hazardous",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteType::Mixed => "Mixed Waste",
            WasteType::Dry => "Dry Recyclable",
            WasteType::Wet => "Organic / Wet",
            WasteType::EWaste => "Electronic Waste",
            WasteType::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WasteType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WasteType::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(s) || t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::Parse(format!("unknown waste type '{s}'")))
    }
}

/// A validated pickup request. Only ever kept locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupDetails {
    pub address: String,
    pub pincode: String,
    pub state: String,
    pub landmark: Option<String>,
    pub date: NaiveDate,
    pub waste_type: WasteType,
}
