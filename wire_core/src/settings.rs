//! # Calculator Settings
//!
//! Default form values used when a caller does not supply a parameter. A
//! settings document may be partial; missing keys keep their defaults.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::settings::CalculatorDefaults;
//! use wire_core::units::LengthUnit;
//!
//! let defaults = CalculatorDefaults::from_json(r#"{ "length_unit": "feet" }"#).unwrap();
//! assert_eq!(defaults.length_unit, LengthUnit::Feet);
//! assert_eq!(defaults.input_voltage_v, 12.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationInput;
use crate::errors::CalcResult;
use crate::materials::{WireGauge, WireMaterial};
use crate::units::LengthUnit;

/// Default values for a new calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    /// Default wire gauge
    pub gauge: WireGauge,

    /// Default conductor material
    pub material: WireMaterial,

    /// Default length, expressed in `length_unit`
    pub length: f64,

    /// Unit lengths are entered in
    pub length_unit: LengthUnit,

    /// Default supply voltage (V)
    pub input_voltage_v: f64,

    /// Default load current (A)
    pub current_a: f64,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        CalculatorDefaults {
            gauge: WireGauge::Awg12,
            material: WireMaterial::Copper,
            length: 1.0,
            length_unit: LengthUnit::Meters,
            input_voltage_v: 12.0,
            current_a: 1.0,
        }
    }
}

impl CalculatorDefaults {
    /// Parse a (possibly partial) settings document
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a calculation input from these defaults, converting the length to meters
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput::new(
            self.gauge,
            self.material,
            self.length_unit.to_meters(self.length),
            self.input_voltage_v,
            self.current_a,
        )
    }
}
