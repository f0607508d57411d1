//! Numeric helpers shared by curve sampling and rendering.

pub mod clip;
pub mod linspace;

pub use clip::*;
pub use linspace::*;
