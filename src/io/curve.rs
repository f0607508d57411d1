//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of sampled boundaries:
//! - diagnostic + diagram + drawing attributes
//! - the sampled `x`/`y` arrays for quick plotting elsewhere
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{BoundaryCurve, CurveEntry, CurveFile};
use crate::error::AppError;

/// Build the JSON document for a set of sampled curves.
pub fn curve_file(curves: &[BoundaryCurve]) -> CurveFile {
    CurveFile {
        tool: "bpt".to_string(),
        generated: Utc::now(),
        samples: curves.first().map(|c| c.points.len()).unwrap_or(0),
        curves: curves.iter().map(CurveEntry::from_curve).collect(),
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curves: &[BoundaryCurve]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &curve_file(curves))
        .map_err(|e| AppError::usage(format!("Failed to write curve JSON: {e}")))?;

    log::info!("wrote {} curve(s) to {}", curves.len(), path.display());
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curve: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::usage(format!("Invalid curve JSON: {e}")))?;

    for entry in &curve.curves {
        if entry.x.len() != entry.y.len() {
            return Err(AppError::usage(format!(
                "Curve JSON entry {:?} has {} x values but {} y values.",
                entry.diagnostic,
                entry.x.len(),
                entry.y.len()
            )));
        }
    }
    Ok(curve)
}
