//! American Wire Gauge Sizes
//!
//! Supported AWG sizes with their solid-conductor diameters. Larger gauge
//! numbers denote thinner wire, so the diameter table strictly decreases as
//! the gauge number increases.
//!
//! Gauges serialize as the bare AWG number (`12`), which keeps JSON input
//! identical to what a user types into a gauge selector.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Standard wire gauge (AWG)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WireGauge {
    /// 2 AWG (6.51 mm)
    Awg2,
    /// 4 AWG (5.17 mm)
    Awg4,
    /// 6 AWG (4.12 mm)
    Awg6,
    /// 8 AWG (3.26 mm)
    Awg8,
    /// 10 AWG (2.59 mm)
    Awg10,
    /// 12 AWG (2.05 mm)
    #[default]
    Awg12,
    /// 14 AWG (1.62 mm)
    Awg14,
    /// 16 AWG (1.29 mm)
    Awg16,
    /// 18 AWG (1.02 mm)
    Awg18,
    /// 20 AWG (0.81 mm)
    Awg20,
    /// 22 AWG (0.64 mm)
    Awg22,
    /// 24 AWG (0.51 mm)
    Awg24,
    /// 26 AWG (0.41 mm)
    Awg26,
}

impl WireGauge {
    /// All supported gauges, thickest first
    pub const ALL: [WireGauge; 13] = [
        WireGauge::Awg2,
        WireGauge::Awg4,
        WireGauge::Awg6,
        WireGauge::Awg8,
        WireGauge::Awg10,
        WireGauge::Awg12,
        WireGauge::Awg14,
        WireGauge::Awg16,
        WireGauge::Awg18,
        WireGauge::Awg20,
        WireGauge::Awg22,
        WireGauge::Awg24,
        WireGauge::Awg26,
    ];

    /// AWG number of this gauge
    pub const fn awg(self) -> u8 {
        match self {
            WireGauge::Awg2 => 2,
            WireGauge::Awg4 => 4,
            WireGauge::Awg6 => 6,
            WireGauge::Awg8 => 8,
            WireGauge::Awg10 => 10,
            WireGauge::Awg12 => 12,
            WireGauge::Awg14 => 14,
            WireGauge::Awg16 => 16,
            WireGauge::Awg18 => 18,
            WireGauge::Awg20 => 20,
            WireGauge::Awg22 => 22,
            WireGauge::Awg24 => 24,
            WireGauge::Awg26 => 26,
        }
    }

    /// Conductor diameter in meters
    pub const fn diameter_m(self) -> f64 {
        match self {
            WireGauge::Awg2 => 0.00651,
            WireGauge::Awg4 => 0.00517,
            WireGauge::Awg6 => 0.00412,
            WireGauge::Awg8 => 0.00326,
            WireGauge::Awg10 => 0.00259,
            WireGauge::Awg12 => 0.00205,
            WireGauge::Awg14 => 0.00162,
            WireGauge::Awg16 => 0.00129,
            WireGauge::Awg18 => 0.00102,
            WireGauge::Awg20 => 0.00081,
            WireGauge::Awg22 => 0.00064,
            WireGauge::Awg24 => 0.00051,
            WireGauge::Awg26 => 0.00041,
        }
    }

    /// Conductor diameter in millimeters
    pub fn diameter_mm(self) -> Millimeters {
        Meters(self.diameter_m()).into()
    }

    /// Cross-sectional area of the conductor, π(d/2)², in square meters
    pub fn area_m2(self) -> f64 {
        std::f64::consts::PI * (self.diameter_m() / 2.0).powi(2)
    }

    /// Look up a gauge by its AWG number
    pub fn from_awg(awg: u8) -> CalcResult<Self> {
        WireGauge::ALL
            .into_iter()
            .find(|g| g.awg() == awg)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "gauge",
                    awg.to_string(),
                    "Unsupported wire gauge; expected an even AWG size from 2 to 26",
                )
            })
    }

    /// Parse from common string representations ("12", "12awg", "12 AWG", "#12")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let cleaned = s.trim().to_uppercase().replace([' ', '#'], "");
        let digits = cleaned.strip_suffix("AWG").unwrap_or(&cleaned);
        let awg: u8 = digits.parse().map_err(|_| {
            CalcError::invalid_input("gauge", s, "Wire gauge must be an AWG number")
        })?;
        WireGauge::from_awg(awg).map_err(|_| {
            CalcError::invalid_input(
                "gauge",
                s,
                "Unsupported wire gauge; expected an even AWG size from 2 to 26",
            )
        })
    }

    /// Selector label, e.g. "12 AWG (2.05 mm)"
    pub fn label(&self) -> String {
        format!("{} AWG ({:.2} mm)", self.awg(), self.diameter_mm().value())
    }
}

impl std::fmt::Display for WireGauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} AWG", self.awg())
    }
}

impl std::str::FromStr for WireGauge {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WireGauge::from_str_flexible(s)
    }
}

impl TryFrom<u8> for WireGauge {
    type Error = CalcError;

    fn try_from(awg: u8) -> Result<Self, Self::Error> {
        WireGauge::from_awg(awg)
    }
}

impl From<WireGauge> for u8 {
    fn from(gauge: WireGauge) -> Self {
        gauge.awg()
    }
}
