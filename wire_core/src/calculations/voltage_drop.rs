//! # Voltage Drop Calculation
//!
//! DC voltage drop, power loss and efficiency of a single conductor.
//!
//! ## Model
//!
//! - Resistance from geometry: R = ρL/A with A = π(d/2)²
//! - Single conductor only (no return-path doubling)
//! - Resistivity at 20 °C, no temperature correction
//! - DC only (no skin effect or reactance)
//!
//! Results that are physically meaningless but arithmetically valid are passed
//! through unchanged: a drop larger than the supply gives a negative output
//! voltage and a negative efficiency.
//!
//! ## Rounding
//!
//! [`analyze`] returns full precision. [`calculate`] rounds for display:
//! resistance to 4 decimal places, everything else to 2. Rounding scales by
//! 10ⁿ and uses [`f64::round`] (half away from zero).
//!
//! ## Example
//!
//! ```rust
//! use wire_core::calculations::voltage_drop::{calculate, CalculationInput};
//! use wire_core::materials::{WireGauge, WireMaterial};
//! use wire_core::units::Meters;
//!
//! let input = CalculationInput::new(
//!     WireGauge::Awg12,
//!     WireMaterial::Copper,
//!     Meters(1.0),
//!     12.0,
//!     1.0,
//! );
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.resistance_ohms, 0.0051);
//! assert_eq!(result.efficiency_percent, 99.96);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{WireGauge, WireMaterial};
use crate::units::Meters;

/// Decimal places kept for resistance
pub const RESISTANCE_DECIMALS: i32 = 4;

/// Decimal places kept for voltages, powers and efficiency
pub const DISPLAY_DECIMALS: i32 = 2;

/// Input parameters for a wire run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "gauge": 12,
///   "material": "copper",
///   "length_m": 1.0,
///   "input_voltage_v": 12.0,
///   "current_a": 1.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Wire gauge (AWG)
    pub gauge: WireGauge,

    /// Conductor material
    pub material: WireMaterial,

    /// One-way conductor length in meters
    pub length_m: f64,

    /// Supply voltage at the source end (V)
    pub input_voltage_v: f64,

    /// Load current (A)
    pub current_a: f64,
}

impl CalculationInput {
    /// Create an input from any length unit that converts to meters.
    pub fn new(
        gauge: WireGauge,
        material: WireMaterial,
        length: impl Into<Meters>,
        input_voltage_v: f64,
        current_a: f64,
    ) -> Self {
        CalculationInput {
            gauge,
            material,
            length_m: length.into().value(),
            input_voltage_v,
            current_a,
        }
    }

    /// Parse an input from JSON.
    ///
    /// Unlike plain deserialization, a missing field, an unsupported gauge or
    /// an unknown material is reported as [`CalcError::InvalidInput`] naming
    /// the field. Only malformed JSON is a serialization error.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let draft: CalculationInputDraft = serde_json::from_str(json)?;
        draft.build()
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_m", self.length_m, "Length")?;
        require_positive("input_voltage_v", self.input_voltage_v, "Input voltage")?;
        require_positive("current_a", self.current_a, "Current")?;
        Ok(())
    }
}

/// Partially specified input, as collected from a form or a JSON document.
///
/// Every field is optional so that a missing value surfaces as a field-level
/// error from [`CalculationInputDraft::build`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationInputDraft {
    /// AWG number, kept as raw JSON so a wrong type is a gauge error
    pub gauge: Option<serde_json::Value>,
    /// Material name, parsed flexibly
    pub material: Option<String>,
    /// Length in meters
    pub length_m: Option<f64>,
    /// Supply voltage (V)
    pub input_voltage_v: Option<f64>,
    /// Load current (A)
    pub current_a: Option<f64>,
}

impl CalculationInputDraft {
    /// Resolve the draft into a validated [`CalculationInput`].
    pub fn build(self) -> CalcResult<CalculationInput> {
        let raw = self.gauge.ok_or_else(|| CalcError::missing_field("gauge"))?;
        let gauge = raw
            .as_u64()
            .and_then(|awg| u8::try_from(awg).ok())
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "gauge",
                    raw.to_string(),
                    "Wire gauge must be an AWG number from 2 to 26",
                )
            })
            .and_then(WireGauge::from_awg)?;

        let material = self
            .material
            .as_deref()
            .ok_or_else(|| CalcError::missing_field("material"))
            .and_then(WireMaterial::from_str_flexible)?;

        let input = CalculationInput {
            gauge,
            material,
            length_m: self.length_m.ok_or_else(|| CalcError::missing_field("length_m"))?,
            input_voltage_v: self
                .input_voltage_v
                .ok_or_else(|| CalcError::missing_field("input_voltage_v"))?,
            current_a: self.current_a.ok_or_else(|| CalcError::missing_field("current_a"))?,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Full-precision results of a wire run, including intermediate geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireAnalysis {
    /// Conductor diameter (m)
    pub diameter_m: f64,
    /// Conductor cross-sectional area (m²)
    pub area_m2: f64,
    /// Material resistivity (Ω·m)
    pub resistivity_ohm_m: f64,
    /// Conductor resistance R = ρL/A (Ω)
    pub resistance_ohms: f64,
    /// Voltage drop I·R (V)
    pub voltage_drop_v: f64,
    /// Voltage at the load end (V), negative when the drop exceeds the supply
    pub output_voltage_v: f64,
    /// Power dissipated in the wire I²R (W)
    pub power_loss_w: f64,
    /// Power supplied I·V_in (W)
    pub input_power_w: f64,
    /// Power delivered I·V_out (W)
    pub output_power_w: f64,
    /// Output over input power (%)
    pub efficiency_percent: f64,
}

impl WireAnalysis {
    /// Round every quantity to its display precision.
    pub fn rounded(&self) -> CalculationResult {
        CalculationResult {
            resistance_ohms: round_to(self.resistance_ohms, RESISTANCE_DECIMALS),
            voltage_drop_v: round_to(self.voltage_drop_v, DISPLAY_DECIMALS),
            output_voltage_v: round_to(self.output_voltage_v, DISPLAY_DECIMALS),
            power_loss_w: round_to(self.power_loss_w, DISPLAY_DECIMALS),
            input_power_w: round_to(self.input_power_w, DISPLAY_DECIMALS),
            output_power_w: round_to(self.output_power_w, DISPLAY_DECIMALS),
            efficiency_percent: round_to(self.efficiency_percent, DISPLAY_DECIMALS),
        }
    }

    /// True when the wire drops more voltage than the source supplies
    pub fn drop_exceeds_supply(&self) -> bool {
        self.output_voltage_v < 0.0
    }
}

/// Results from a voltage drop calculation, rounded for display.
///
/// ## JSON Example
///
/// ```json
/// {
///   "resistance_ohms": 0.0051,
///   "voltage_drop_v": 0.01,
///   "output_voltage_v": 11.99,
///   "power_loss_w": 0.01,
///   "input_power_w": 12.0,
///   "output_power_w": 11.99,
///   "efficiency_percent": 99.96
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Conductor resistance (Ω), 4 decimal places
    pub resistance_ohms: f64,
    /// Voltage drop (V)
    pub voltage_drop_v: f64,
    /// Voltage at the load end (V)
    pub output_voltage_v: f64,
    /// Power dissipated in the wire (W)
    pub power_loss_w: f64,
    /// Power supplied (W)
    pub input_power_w: f64,
    /// Power delivered (W)
    pub output_power_w: f64,
    /// Efficiency (%)
    pub efficiency_percent: f64,
}

/// Run the wire model at full precision.
///
/// # Returns
///
/// * `Ok(WireAnalysis)` - Unrounded results
/// * `Err(CalcError)` - If inputs are invalid or a derived value is not finite
pub fn analyze(input: &CalculationInput) -> CalcResult<WireAnalysis> {
    input.validate()?;

    let diameter_m = input.gauge.diameter_m();
    let area_m2 = input.gauge.area_m2();
    let resistivity_ohm_m = input.material.resistivity_ohm_m();

    let resistance_ohms = resistivity_ohm_m * input.length_m / area_m2;
    let voltage_drop_v = input.current_a * resistance_ohms;
    let output_voltage_v = input.input_voltage_v - voltage_drop_v;
    let power_loss_w = input.current_a.powi(2) * resistance_ohms;
    let input_power_w = input.current_a * input.input_voltage_v;
    let output_power_w = input.current_a * output_voltage_v;

    // Underflow of I·V is the only way to reach a zero denominator.
    if input_power_w == 0.0 || !input_power_w.is_finite() {
        return Err(CalcError::invalid_input(
            "input_power_w",
            input_power_w.to_string(),
            "Input power must be a finite, non-zero value",
        ));
    }
    let efficiency_percent = output_power_w / input_power_w * 100.0;

    let analysis = WireAnalysis {
        diameter_m,
        area_m2,
        resistivity_ohm_m,
        resistance_ohms,
        voltage_drop_v,
        output_voltage_v,
        power_loss_w,
        input_power_w,
        output_power_w,
        efficiency_percent,
    };
    ensure_finite(&analysis)?;
    Ok(analysis)
}

/// Calculate voltage drop, power loss and efficiency for a wire run.
///
/// # Arguments
///
/// * `input` - Wire parameters
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Results rounded for display
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &CalculationInput) -> CalcResult<CalculationResult> {
    analyze(input).map(|analysis| analysis.rounded())
}

/// Round to a fixed number of decimal places, half away from zero.
///
/// Negative zero is normalized to zero so it never shows up as "-0.00".
/// Values too large to scale have no fractional digits left and are returned
/// unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn require_positive(field: &str, value: f64, label: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{label} must be a finite number"),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{label} must be positive"),
        ));
    }
    Ok(())
}

fn ensure_finite(analysis: &WireAnalysis) -> CalcResult<()> {
    let derived = [
        ("resistance_ohms", analysis.resistance_ohms),
        ("voltage_drop_v", analysis.voltage_drop_v),
        ("output_voltage_v", analysis.output_voltage_v),
        ("power_loss_w", analysis.power_loss_w),
        ("output_power_w", analysis.output_power_w),
        ("efficiency_percent", analysis.efficiency_percent),
    ];
    for (field, value) in derived {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Inputs are out of range; derived value is not finite",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Feet;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn test_input() -> CalculationInput {
        CalculationInput::new(WireGauge::Awg12, WireMaterial::Copper, Meters(1.0), 12.0, 1.0)
    }

    fn with_length(length_m: f64) -> CalculationInput {
        CalculationInput {
            length_m,
            ..test_input()
        }
    }

    fn with_current(current_a: f64) -> CalculationInput {
        CalculationInput {
            current_a,
            ..test_input()
        }
    }

    #[test]
    fn test_12_awg_copper_reference() {
        let analysis = analyze(&test_input()).unwrap();
        // R = 1.68e-8 / (π × 0.001025²) = 5.0899e-3 Ω
        assert!((analysis.resistance_ohms - 5.0899e-3).abs() < 1e-7);

        let result = analysis.rounded();
        assert_close(result.resistance_ohms, 0.0051);
        assert_close(result.voltage_drop_v, 0.01);
        assert_close(result.output_voltage_v, 11.99);
        assert_close(result.power_loss_w, 0.01);
        assert_close(result.input_power_w, 12.0);
        assert_close(result.output_power_w, 11.99);
        assert_close(result.efficiency_percent, 99.96);
    }

    #[test]
    fn test_26_awg_aluminum_reference() {
        let input =
            CalculationInput::new(WireGauge::Awg26, WireMaterial::Aluminum, Meters(10.0), 12.0, 5.0);
        let result = calculate(&input).unwrap();

        // A = π × 0.000205² = 1.32025e-7 m², R = 2.82e-7 / A = 2.13595 Ω
        assert_close(result.resistance_ohms, 2.136);
        assert_close(result.voltage_drop_v, 10.68);
        assert_close(result.output_voltage_v, 1.32);
        assert_close(result.power_loss_w, 53.4);
        assert_close(result.input_power_w, 60.0);
        assert_close(result.output_power_w, 6.6);
        assert_close(result.efficiency_percent, 11.0);
    }

    #[test]
    fn test_tinned_copper_reference() {
        let input = CalculationInput::new(
            WireGauge::Awg20,
            WireMaterial::TinnedCopper,
            Meters(5.0),
            24.0,
            2.0,
        );
        let result = calculate(&input).unwrap();

        // R = 1.77e-8 × 5 / (π × 0.000405²) = 0.171745 Ω
        assert_close(result.resistance_ohms, 0.1717);
        assert_close(result.voltage_drop_v, 0.34);
        assert_close(result.output_voltage_v, 23.66);
        assert_close(result.power_loss_w, 0.69);
        assert_close(result.input_power_w, 48.0);
        assert_close(result.efficiency_percent, 98.57);
    }

    #[test]
    fn test_length_monotonicity() {
        let lengths = [0.5, 1.0, 2.0, 5.0, 10.0, 50.0];
        let runs: Vec<WireAnalysis> = lengths
            .iter()
            .map(|&l| analyze(&with_length(l)).unwrap())
            .collect();

        for pair in runs.windows(2) {
            assert!(pair[1].resistance_ohms > pair[0].resistance_ohms);
            assert!(pair[1].voltage_drop_v > pair[0].voltage_drop_v);
            assert!(pair[1].power_loss_w > pair[0].power_loss_w);
            assert!(pair[1].output_voltage_v < pair[0].output_voltage_v);
            assert!(pair[1].efficiency_percent < pair[0].efficiency_percent);
        }
    }

    #[test]
    fn test_current_monotonicity() {
        let currents = [0.5, 1.0, 2.0, 5.0, 10.0];
        let runs: Vec<WireAnalysis> = currents
            .iter()
            .map(|&i| analyze(&with_current(i)).unwrap())
            .collect();

        for pair in runs.windows(2) {
            assert!(pair[1].power_loss_w > pair[0].power_loss_w);
            assert!(pair[1].voltage_drop_v > pair[0].voltage_drop_v);
        }
    }

    #[test]
    fn test_current_scaling() {
        let base = analyze(&with_current(2.0)).unwrap();
        let doubled = analyze(&with_current(4.0)).unwrap();

        // Drop is linear in current, loss is quadratic
        assert!((doubled.voltage_drop_v / base.voltage_drop_v - 2.0).abs() < 1e-12);
        assert!((doubled.power_loss_w / base.power_loss_w - 4.0).abs() < 1e-12);
        // Resistance does not depend on current
        assert_eq!(doubled.resistance_ohms, base.resistance_ohms);
    }

    #[test]
    fn test_zero_length_limit() {
        let analysis = analyze(&with_length(1e-9)).unwrap();
        assert!(analysis.resistance_ohms < 1e-8);
        assert!(analysis.voltage_drop_v < 1e-8);
        assert!((analysis.efficiency_percent - 100.0).abs() < 1e-6);

        let result = analysis.rounded();
        assert_eq!(result.resistance_ohms, 0.0);
        assert_eq!(result.voltage_drop_v, 0.0);
        assert_eq!(result.efficiency_percent, 100.0);
    }

    #[test]
    fn test_efficiency_bounds() {
        for gauge in WireGauge::ALL {
            for material in WireMaterial::ALL {
                let input = CalculationInput::new(gauge, material, Meters(10.0), 12.0, 1.0);
                let analysis = analyze(&input).unwrap();
                assert!(analysis.voltage_drop_v < input.input_voltage_v);
                assert!(
                    analysis.efficiency_percent > 0.0 && analysis.efficiency_percent < 100.0,
                    "{gauge} {material}: efficiency {}",
                    analysis.efficiency_percent
                );
            }
        }
    }

    #[test]
    fn test_thicker_wire_drops_less() {
        let drops: Vec<f64> = WireGauge::ALL
            .iter()
            .map(|&gauge| {
                let input = CalculationInput { gauge, ..test_input() };
                analyze(&input).unwrap().voltage_drop_v
            })
            .collect();

        for pair in drops.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_drop_exceeding_supply_passes_through() {
        let input =
            CalculationInput::new(WireGauge::Awg26, WireMaterial::Aluminum, Meters(100.0), 12.0, 5.0);
        let analysis = analyze(&input).unwrap();
        assert!(analysis.drop_exceeds_supply());

        let result = analysis.rounded();
        assert_close(result.voltage_drop_v, 106.8);
        assert_close(result.output_voltage_v, -94.8);
        assert!(result.efficiency_percent < 0.0);
    }

    #[test]
    fn test_feet_input_matches_meters() {
        let from_feet =
            CalculationInput::new(WireGauge::Awg12, WireMaterial::Copper, Feet(10.0), 12.0, 1.0);
        let from_meters =
            CalculationInput::new(WireGauge::Awg12, WireMaterial::Copper, Meters(3.048), 12.0, 1.0);
        assert!((from_feet.length_m - from_meters.length_m).abs() < 1e-12);

        let a = calculate(&from_feet).unwrap();
        let b = calculate(&from_meters).unwrap();
        assert_eq!(a, b);
        assert_close(a.resistance_ohms, 0.0155);
        assert_close(a.efficiency_percent, 99.87);
    }

    #[test]
    fn test_invalid_current() {
        for current in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = calculate(&with_current(current)).unwrap_err();
            assert_eq!(err.field(), Some("current_a"), "current {current}");
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_invalid_length_and_voltage() {
        let err = calculate(&with_length(0.0)).unwrap_err();
        assert_eq!(err.field(), Some("length_m"));

        let input = CalculationInput {
            input_voltage_v: -12.0,
            ..test_input()
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("input_voltage_v"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_underflowing_input_power() {
        let input = CalculationInput {
            input_voltage_v: 1e-200,
            current_a: 1e-200,
            ..test_input()
        };
        let err = analyze(&input).unwrap_err();
        assert_eq!(err.field(), Some("input_power_w"));
    }

    #[test]
    fn test_overflowing_result() {
        let input = CalculationInput {
            length_m: f64::MAX,
            current_a: 1e10,
            ..test_input()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_huge_length_rounds_to_finite_result() {
        let result = calculate(&with_length(f64::MAX)).unwrap();
        let fields = [
            result.resistance_ohms,
            result.voltage_drop_v,
            result.output_voltage_v,
            result.power_loss_w,
            result.input_power_w,
            result.output_power_w,
            result.efficiency_percent,
        ];
        assert!(fields.iter().all(|v| v.is_finite()), "{result:?}");

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "gauge": 26,
            "material": "aluminum",
            "length_m": 10.0,
            "input_voltage_v": 12.0,
            "current_a": 5.0
        }"#;
        let input = CalculationInput::from_json(json).unwrap();
        assert_eq!(input.gauge, WireGauge::Awg26);
        assert_eq!(input.material, WireMaterial::Aluminum);
        assert_close(calculate(&input).unwrap().voltage_drop_v, 10.68);
    }

    #[test]
    fn test_from_json_missing_field() {
        let json = r#"{"gauge": 12, "material": "copper", "length_m": 1.0, "input_voltage_v": 12.0}"#;
        let err = CalculationInput::from_json(json).unwrap_err();
        assert_eq!(err, CalcError::missing_field("current_a"));
    }

    #[test]
    fn test_from_json_unsupported_keys() {
        let json = r#"{"gauge": 3, "material": "copper", "length_m": 1.0, "input_voltage_v": 12.0, "current_a": 1.0}"#;
        let err = CalculationInput::from_json(json).unwrap_err();
        assert_eq!(err.field(), Some("gauge"));

        for gauge in ["-2", "12.5", "\"12\"", "300", "null"] {
            let json = format!(
                r#"{{"gauge": {gauge}, "material": "copper", "length_m": 1.0, "input_voltage_v": 12.0, "current_a": 1.0}}"#
            );
            let err = CalculationInput::from_json(&json).unwrap_err();
            assert_eq!(err.field(), Some("gauge"), "gauge {gauge}");
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }

        let json = r#"{"gauge": 12, "material": "silver", "length_m": 1.0, "input_voltage_v": 12.0, "current_a": 1.0}"#;
        let err = CalculationInput::from_json(json).unwrap_err();
        assert_eq!(err.field(), Some("material"));

        let json = r#"{"gauge": 12, "material": "copper", "length_m": -1.0, "input_voltage_v": 12.0, "current_a": 1.0}"#;
        let err = CalculationInput::from_json(json).unwrap_err();
        assert_eq!(err.field(), Some("length_m"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = CalculationInput::from_json("{gauge: 12").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.005089928, RESISTANCE_DECIMALS), 0.0051);
        assert_eq!(round_to(99.957583, DISPLAY_DECIMALS), 99.96);
        assert_eq!(round_to(-94.8047, DISPLAY_DECIMALS), -94.8);
        assert!(round_to(-0.0001, DISPLAY_DECIMALS).is_sign_positive());
    }

    #[test]
    fn test_round_to_ties_away_from_zero() {
        assert_eq!(round_to(0.125, DISPLAY_DECIMALS), 0.13);
        assert_eq!(round_to(-0.125, DISPLAY_DECIMALS), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_to_keeps_huge_values_finite() {
        assert_eq!(round_to(f64::MAX, RESISTANCE_DECIMALS), f64::MAX);
        assert_eq!(round_to(-f64::MAX, DISPLAY_DECIMALS), -f64::MAX);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"resistance_ohms\":0.0051"));
        assert!(json.contains("\"efficiency_percent\":99.96"));

        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_input_serialization() {
        let input = test_input();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"gauge\":12"));
        assert!(json.contains("\"material\":\"copper\""));

        let roundtrip: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_concurrent_callers() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalculationInput>();
        assert_send_sync::<CalculationResult>();

        let expected = calculate(&test_input()).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| calculate(&test_input()).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
