//! Shared "classification pipeline" used by the plot, render, and classify
//! commands.
//!
//! Keeping this in one place avoids duplicating the workflow:
//! CSV ingest -> classification
//!
//! The commands can then focus on presentation (tables vs. terminal vs. SVG).

use std::path::Path;

use crate::classify::classify_all;
use crate::domain::{ClassifiedPoint, Diagram};
use crate::error::AppError;
use crate::io::ingest::{IngestedRatios, load_line_ratios};

/// All computed outputs of one classification run.
#[derive(Debug, Clone)]
pub struct ClassificationRun {
    pub ingest: IngestedRatios,
    pub classified: Vec<ClassifiedPoint>,
}

/// Load `input` and classify every usable row on `diagram`.
pub fn run_classification(input: &Path, diagram: Diagram) -> Result<ClassificationRun, AppError> {
    let ingest = load_line_ratios(input)?;
    let classified = classify_all(diagram, &ingest.points);
    log::debug!("classified {} point(s) on the {} diagram", classified.len(), diagram.display_name());
    Ok(ClassificationRun { ingest, classified })
}

/// Classify only when an input catalog was given.
pub fn maybe_classify(input: Option<&Path>, diagram: Diagram) -> Result<Vec<ClassifiedPoint>, AppError> {
    match input {
        Some(path) => Ok(run_classification(path, diagram)?.classified),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Region;
    use std::io::Write;

    #[test]
    fn classifies_a_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,x,y").unwrap();
        writeln!(file, "sf,-1.0,-0.5").unwrap();
        writeln!(file, "agn,-0.2,1.0").unwrap();
        writeln!(file, "broken,,").unwrap();

        let run = run_classification(file.path(), Diagram::Nii).unwrap();
        assert_eq!(run.ingest.rows_read, 3);
        assert_eq!(run.ingest.row_errors.len(), 1);
        let regions: Vec<Region> = run.classified.iter().map(|c| c.region).collect();
        assert_eq!(regions, [Region::StarForming, Region::Agn]);
    }

    #[test]
    fn no_input_means_no_points() {
        assert!(maybe_classify(None, Diagram::Oi).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let err = run_classification(Path::new("/definitely/not/here.csv"), Diagram::Nii).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }
}
