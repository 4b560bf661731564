//! # Wire Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`voltage_drop`] - DC voltage drop, power loss and efficiency of a wire run
//! - [`power_flow`] - Loss/delivered split of a result, for display

pub mod power_flow;
pub mod voltage_drop;

// Re-export commonly used types
pub use power_flow::PowerFlow;
pub use voltage_drop::{
    analyze, calculate, CalculationInput, CalculationInputDraft, CalculationResult, WireAnalysis,
};
