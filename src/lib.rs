//! `bpt-lines` library crate.
//!
//! Emission-line diagnostic ("BPT") boundaries: closed-form evaluation, drawing
//! onto pluggable surfaces, region classification, and terminal/SVG output.
//!
//! The binary (`bpt`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - curves can be drawn onto any `plot::Surface` a caller provides

pub mod app;
pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
