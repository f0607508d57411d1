//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the curve/classification code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::classify::region_counts;
use crate::domain::{BoundaryCurve, ClassifiedPoint, Diagram, Region};
use crate::io::ingest::IngestedRatios;

/// Table of sampled points along one boundary.
pub fn format_curve_table(curve: &BoundaryCurve) -> String {
    let d = curve.diagnostic;
    let (x0, x1) = d.domain();
    let k = d.coefficients();

    let mut out = String::new();
    out.push_str(&format!("Boundary: {} ({:?}, width {})\n", d.display_name(), curve.style, curve.width));
    out.push_str(&format!(
        "y = {:.2} / (x - ({:.2})) + {:.2}   x in [{x0:.2}, {x1:.2}], n={}\n",
        k.a,
        k.pole,
        k.c,
        curve.points.len()
    ));
    out.push_str(&format!("{:>4} {:>12} {:>12}\n", "i", "x", "y"));
    out.push_str(&format!("{:-<4} {:-<12} {:-<12}\n", "", "", ""));
    for (i, (x, y)) in curve.points.iter().enumerate() {
        out.push_str(&format!("{i:>4} {x:>12.6} {y:>12.6}\n"));
    }
    out
}

/// Summary header for a classification run.
pub fn format_classification_summary(diagram: Diagram, ingest: &IngestedRatios, classified: &[ClassifiedPoint]) -> String {
    let counts = region_counts(classified);
    let total = classified.len().max(1) as f64;

    let mut out = String::new();
    out.push_str(&format!("=== bpt - {} diagram classification ===\n", diagram.display_name()));
    out.push_str(&format!("x: {} | y: {}\n", diagram.x_label(), diagram.y_label()));
    out.push_str(&format!(
        "Rows: read={} used={} skipped={}\n",
        ingest.rows_read,
        ingest.rows_used,
        ingest.row_errors.len()
    ));
    for err in &ingest.row_errors {
        out.push_str(&format!(
            "  line {} ({}): {}\n",
            err.line,
            err.id.as_deref().unwrap_or("-"),
            err.message
        ));
    }

    out.push_str("\nRegions:\n");
    for region in regions_for(diagram) {
        let n = counts.get(region).copied().unwrap_or(0);
        out.push_str(&format!(
            "  {:<13} {n:>6} ({:>5.1}%)\n",
            region.display_name(),
            100.0 * n as f64 / total
        ));
    }
    out
}

/// Per-point region table.
pub fn format_classified_table(classified: &[ClassifiedPoint]) -> String {
    let mut out = String::new();
    out.push_str(format!("{:<24} {:>10} {:>10} {:<13}", "id", "x", "y", "region").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<24} {:-<10} {:-<10} {:-<13}", "", "", "", "").trim_end());
    out.push('\n');

    for c in classified {
        let p = &c.point;
        out.push_str(
            format!(
                "{:<24} {:>10.4} {:>10.4} {:<13}",
                truncate(&p.id, 24),
                p.x,
                p.y,
                c.region.display_name()
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

fn regions_for(diagram: Diagram) -> &'static [Region] {
    match diagram {
        Diagram::Nii => &Region::ALL,
        Diagram::Sii | Diagram::Oi => &[Region::StarForming, Region::Agn],
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Diagnostic, LineRatioPoint};
    use crate::io::ingest::RowError;
    use crate::models::sample_boundary;

    fn classified(id: &str, region: Region) -> ClassifiedPoint {
        ClassifiedPoint {
            point: LineRatioPoint {
                id: id.to_string(),
                x: -0.5,
                y: 0.25,
            },
            region,
        }
    }

    #[test]
    fn curve_table_lists_every_sample() {
        let curve = sample_boundary(Diagnostic::SiiAgn, 5).unwrap();
        let txt = format_curve_table(&curve);
        assert!(txt.starts_with("Boundary: [SII] SF/AGN (Solid, width 2)\n"));
        // header + formula + column header + rule + 5 rows
        assert_eq!(txt.lines().count(), 9);
        assert!(txt.lines().last().unwrap().contains("0.500000"));
        assert!(txt.lines().last().unwrap().contains("5.300000"));
    }

    #[test]
    fn summary_counts_and_percentages() {
        let ingest = IngestedRatios {
            points: Vec::new(),
            row_errors: vec![RowError {
                line: 4,
                id: Some("bad".to_string()),
                message: "invalid x value 'abc'".to_string(),
            }],
            rows_read: 5,
            rows_used: 4,
        };
        let rows = vec![
            classified("a", Region::StarForming),
            classified("b", Region::StarForming),
            classified("c", Region::Composite),
            classified("d", Region::Agn),
        ];
        let txt = format_classification_summary(Diagram::Nii, &ingest, &rows);
        assert!(txt.contains("Rows: read=5 used=4 skipped=1"));
        assert!(txt.contains("line 4 (bad): invalid x value 'abc'"));
        assert!(txt.contains("star-forming       2 ( 50.0%)"));
        assert!(txt.contains("composite          1 ( 25.0%)"));
    }

    #[test]
    fn sii_summary_has_no_composite_row() {
        let ingest = IngestedRatios {
            points: Vec::new(),
            row_errors: Vec::new(),
            rows_read: 1,
            rows_used: 1,
        };
        let txt = format_classification_summary(Diagram::Sii, &ingest, &[classified("a", Region::Agn)]);
        assert!(!txt.contains("composite"));
    }

    #[test]
    fn table_truncates_long_ids() {
        let rows = vec![classified("an-extremely-long-galaxy-identifier", Region::Agn)];
        let txt = format_classified_table(&rows);
        let line = txt.lines().nth(2).unwrap();
        assert!(line.starts_with("an-extremely-long-galax."));
        assert!(line.ends_with("AGN"));
    }
}
