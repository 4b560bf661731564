//! # Power Flow Breakdown
//!
//! Splits the supplied power into the share lost in the wire and the share
//! delivered to the load. This is a presentation helper derived from an
//! already rounded [`CalculationResult`]; it is not part of the result
//! itself and any consumer can recompute it.

use serde::{Deserialize, Serialize};

use crate::calculations::voltage_drop::CalculationResult;
use crate::errors::{CalcError, CalcResult};

/// Share of input power lost in the wire vs delivered to the load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerFlow {
    /// Power supplied (W)
    pub input_power_w: f64,
    /// Power dissipated in the wire (W)
    pub power_loss_w: f64,
    /// Power delivered (W)
    pub output_power_w: f64,
    /// power_loss / input_power × 100
    pub loss_percent: f64,
    /// 100 - loss_percent
    pub output_percent: f64,
}

impl PowerFlow {
    /// Derive the breakdown from a rounded result.
    ///
    /// Fails when the rounded input power is zero, which happens for very
    /// small currents or voltages.
    pub fn from_result(result: &CalculationResult) -> CalcResult<Self> {
        if result.input_power_w == 0.0 {
            return Err(CalcError::invalid_input(
                "input_power_w",
                result.input_power_w.to_string(),
                "Input power rounds to zero; no power flow to break down",
            ));
        }

        let loss_percent = result.power_loss_w / result.input_power_w * 100.0;
        Ok(PowerFlow {
            input_power_w: result.input_power_w,
            power_loss_w: result.power_loss_w,
            output_power_w: result.output_power_w,
            loss_percent,
            output_percent: 100.0 - loss_percent,
        })
    }
}
