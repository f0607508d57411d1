//! Reporting utilities: formatted terminal output for curves and classifications.

pub mod format;

pub use format::*;
