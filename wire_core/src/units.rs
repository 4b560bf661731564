//! # Unit Types
//!
//! Type-safe wrappers for lengths. The calculation engine works in SI
//! (meters, volts, amperes, ohms); feet only exist at the input boundary and
//! are converted before a calculation runs.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::units::{Feet, Meters};
//!
//! let run = Feet(10.0);
//! let run_m: Meters = run.into();
//! assert!((run_m.0 - 3.048).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Exact length of one international foot in meters
pub const METERS_PER_FOOT: f64 = 0.3048;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in millimeters (conductor diameters)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * METERS_PER_FOOT)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 / METERS_PER_FOOT)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

/// Unit a user typed a wire length in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Meters,
    Feet,
}

impl LengthUnit {
    /// Convert a raw value in this unit to meters
    pub fn to_meters(self, value: f64) -> Meters {
        match self {
            LengthUnit::Meters => Meters(value),
            LengthUnit::Feet => Feet(value).into(),
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthUnit::Meters => write!(f, "meters"),
            LengthUnit::Feet => write!(f, "feet"),
        }
    }
}

impl std::str::FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meters),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Feet),
            other => Err(format!("unknown length unit '{other}' (expected meters or feet)")),
        }
    }
}

macro_rules! impl_value {
    ($($type:ty),+) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )+
    };
}

impl_value!(Meters, Feet, Millimeters);
