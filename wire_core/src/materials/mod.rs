//! # Materials Database
//!
//! Lookup tables for the two properties a conductor needs for a DC resistance
//! estimate: its diameter (from the AWG size) and its resistivity (from the
//! material).
//!
//! ## Example
//!
//! ```rust
//! use wire_core::materials::{WireGauge, WireMaterial};
//!
//! let gauge = WireGauge::Awg12;
//! let material = WireMaterial::Copper;
//!
//! assert_eq!(gauge.diameter_m(), 0.00205);
//! assert_eq!(material.resistivity_ohm_m(), 1.68e-8);
//! ```

pub mod conductor;
pub mod wire_gauge;

pub use conductor::WireMaterial;
pub use wire_gauge::WireGauge;
