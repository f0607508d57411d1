//! Place observed line ratios into diagram regions.
//!
//! Only the left branch of each boundary (x below its pole) separates
//! star-forming gas from the rest; everything at or right of the pole is on
//! the AGN side.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::domain::{ClassifiedPoint, Diagnostic, Diagram, LineRatioPoint, Region};

/// Classify a single `(x, y)` position on `diagram`.
pub fn classify(diagram: Diagram, x: f64, y: f64) -> Region {
    match diagram {
        Diagram::Nii => {
            if below(Diagnostic::NiiSfComposite, x, y) {
                Region::StarForming
            } else if below(Diagnostic::NiiCompositeAgn, x, y) {
                Region::Composite
            } else {
                Region::Agn
            }
        }
        Diagram::Sii => {
            if below(Diagnostic::SiiAgn, x, y) {
                Region::StarForming
            } else {
                Region::Agn
            }
        }
        Diagram::Oi => {
            if below(Diagnostic::OiAgn, x, y) {
                Region::StarForming
            } else {
                Region::Agn
            }
        }
    }
}

/// Classify a batch in parallel; output order matches input order.
pub fn classify_all(diagram: Diagram, points: &[LineRatioPoint]) -> Vec<ClassifiedPoint> {
    points
        .par_iter()
        .map(|p| ClassifiedPoint {
            point: p.clone(),
            region: classify(diagram, p.x, p.y),
        })
        .collect()
}

/// Count points per region. Every region is present, possibly with zero.
pub fn region_counts(classified: &[ClassifiedPoint]) -> HashMap<Region, usize> {
    let mut counts: HashMap<Region, usize> = Region::ALL.iter().map(|&r| (r, 0)).collect();
    for c in classified {
        *counts.entry(c.region).or_insert(0) += 1;
    }
    counts
}

fn below(boundary: Diagnostic, x: f64, y: f64) -> bool {
    x < boundary.pole() && y < boundary.evaluate(x)
}
