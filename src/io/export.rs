//! Export classified points to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{ClassifiedPoint, Diagram};
use crate::error::AppError;

/// Write classified points to a CSV file.
pub fn write_classified_csv(path: &Path, diagram: Diagram, classified: &[ClassifiedPoint]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_classified(file, diagram, classified)?;
    log::info!("exported {} classified point(s) to {}", classified.len(), path.display());
    Ok(())
}

/// Write classified points as CSV to any writer.
pub fn write_classified<W: Write>(out: W, diagram: Diagram, classified: &[ClassifiedPoint]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);

    writer
        .write_record(["id", "diagram", "x", "y", "region"])
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    let diagram = diagram.to_string();
    for c in classified {
        let p = &c.point;
        let x = format!("{:.6}", p.x);
        let y = format!("{:.6}", p.y);
        writer
            .write_record([
                p.id.as_str(),
                diagram.as_str(),
                x.as_str(),
                y.as_str(),
                c.region.display_name(),
            ])
            .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::usage(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}
