//! Conductor Materials
//!
//! Resistivity of the supported conductor materials at 20 °C. No temperature
//! coefficient is applied anywhere in the engine.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Conductor material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WireMaterial {
    /// Bare annealed copper
    #[default]
    Copper,
    /// Tinned copper, roughly 5% more resistive than bare copper
    TinnedCopper,
    /// Aluminum
    Aluminum,
}

impl WireMaterial {
    /// All material variants for UI selection
    pub const ALL: [WireMaterial; 3] = [
        WireMaterial::Copper,
        WireMaterial::TinnedCopper,
        WireMaterial::Aluminum,
    ];

    /// Resistivity ρ in ohm-meters at 20 °C
    pub const fn resistivity_ohm_m(self) -> f64 {
        match self {
            WireMaterial::Copper => 1.68e-8,
            WireMaterial::TinnedCopper => 1.77e-8,
            WireMaterial::Aluminum => 2.82e-8,
        }
    }

    /// Get the code string used in JSON (e.g., "copper", "tinnedCopper")
    pub fn code(&self) -> &'static str {
        match self {
            WireMaterial::Copper => "copper",
            WireMaterial::TinnedCopper => "tinnedCopper",
            WireMaterial::Aluminum => "aluminum",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "COPPER" | "CU" => Ok(WireMaterial::Copper),
            "TINNEDCOPPER" | "TINNED" | "TCU" => Ok(WireMaterial::TinnedCopper),
            "ALUMINUM" | "ALUMINIUM" | "AL" => Ok(WireMaterial::Aluminum),
            _ => Err(CalcError::invalid_input(
                "material",
                s,
                "Unsupported wire material; expected copper, tinned copper or aluminum",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WireMaterial::Copper => "Copper",
            WireMaterial::TinnedCopper => "Tinned Copper",
            WireMaterial::Aluminum => "Aluminum",
        }
    }
}

impl std::fmt::Display for WireMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for WireMaterial {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WireMaterial::from_str_flexible(s)
    }
}
