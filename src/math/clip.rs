//! Clip polylines to a rectangular data window.
//!
//! Boundaries that straddle a pole shoot far outside any sensible plot
//! window. Renderers clip in data space before mapping to cells/pixels.

/// Liang-Barsky clipping of segment `a -> b` against the window.
///
/// Unclipped endpoints are returned bit-for-bit, so consecutive segments can
/// be chained by exact comparison.
pub fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let edges = [
        (-dx, a.0 - x_bounds.0),
        (dx, x_bounds.1 - a.0),
        (-dy, a.1 - y_bounds.0),
        (dy, y_bounds.1 - a.1),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let start = if t0 == 0.0 { a } else { (a.0 + t0 * dx, a.1 + t0 * dy) };
    let end = if t1 == 1.0 { b } else { (a.0 + t1 * dx, a.1 + t1 * dy) };
    Some((start, end))
}

/// Split a polyline into the runs that are visible inside the window.
pub fn clip_polyline(points: &[(f64, f64)], x_bounds: (f64, f64), y_bounds: (f64, f64)) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1], x_bounds, y_bounds) {
            Some((start, end)) => {
                if current.last() != Some(&start) {
                    if current.len() >= 2 {
                        runs.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(start);
                }
                current.push(end);
            }
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: (f64, f64) = (0.0, 10.0);
    const Y: (f64, f64) = (0.0, 10.0);

    #[test]
    fn inside_segment_is_untouched() {
        let seg = clip_segment((1.0, 1.0), (2.0, 3.0), X, Y).unwrap();
        assert_eq!(seg, ((1.0, 1.0), (2.0, 3.0)));
    }

    #[test]
    fn crossing_segment_is_cut_at_edge() {
        let (start, end) = clip_segment((5.0, 5.0), (5.0, 20.0), X, Y).unwrap();
        assert_eq!(start, (5.0, 5.0));
        assert!((end.1 - 10.0).abs() < 1e-12);
    }

    #[test]
    fn outside_segment_is_dropped() {
        assert!(clip_segment((-5.0, 11.0), (20.0, 11.0), X, Y).is_none());
    }

    #[test]
    fn polyline_splits_at_excursions() {
        let pts = [(1.0, 1.0), (2.0, 2.0), (3.0, 50.0), (4.0, 50.0), (5.0, 2.0), (6.0, 1.0)];
        let runs = clip_polyline(&pts, X, Y);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0][0], (1.0, 1.0));
        assert_eq!(runs[1].last().copied(), Some((6.0, 1.0)));
    }

    #[test]
    fn fully_visible_polyline_is_one_run() {
        let pts = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
        let runs = clip_polyline(&pts, X, Y);
        assert_eq!(runs, vec![pts.to_vec()]);
    }
}
