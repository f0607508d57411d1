//! Boundary curve definitions.
//!
//! Each boundary is a pure rational function of x over a fixed domain, so
//! sampling and classification code can stay generic over `Diagnostic`.

pub mod boundary;

pub use boundary::*;
