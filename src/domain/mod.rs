//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the boundary and diagram enums (`Diagnostic`, `Diagram`)
//! - drawing attributes (`LineStyle`, `LineColor`)
//! - sampled curves (`BoundaryCurve`) and their JSON form (`CurveFile`)
//! - observations and their classification (`LineRatioPoint`, `Region`)

pub mod types;

pub use types::*;
