//! # wire_core - Wire Voltage Drop Engine
//!
//! `wire_core` estimates the DC voltage drop, power loss and efficiency of a
//! current-carrying wire from its gauge, material, length, supply voltage and
//! load current. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over constant lookup tables
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the offending field
//!
//! ## Quick Start
//!
//! ```rust
//! use wire_core::calculations::{calculate, CalculationInput};
//! use wire_core::materials::{WireGauge, WireMaterial};
//! use wire_core::units::Feet;
//!
//! let input = CalculationInput::new(
//!     WireGauge::Awg14,
//!     WireMaterial::Copper,
//!     Feet(25.0),
//!     12.0,
//!     5.0,
//! );
//! let result = calculate(&input).unwrap();
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("efficiency_percent"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Voltage drop model and power flow breakdown
//! - [`materials`] - Gauge diameter and material resistivity tables
//! - [`units`] - Type-safe length wrappers and feet/meters conversion
//! - [`settings`] - Default calculator inputs
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationInput, CalculationResult, PowerFlow};
pub use errors::{CalcError, CalcResult};
pub use materials::{WireGauge, WireMaterial};
