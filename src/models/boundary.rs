//! Closed-form boundary curves (Kewley et al. 2006).
//!
//! Every boundary has the same shape:
//!
//! `y = a / (x - pole) + c`
//!
//! evaluated over a fixed x-domain. The [NII] domains stop short of their
//! poles. The [SII] and [OI] domains straddle theirs; no sample at the default
//! density lands on the pole, and a sample count that puts any sample within
//! `POLE_TOLERANCE` of the domain span from a pole is rejected.

use crate::domain::{BoundaryCurve, Diagnostic, LineColor, LineStyle};
use crate::error::AppError;
use crate::math::linspace;

/// Number of samples used when drawing a boundary.
pub const DEFAULT_SAMPLES: usize = 50;

/// Stroke width shared by all boundaries.
pub const BOUNDARY_WIDTH: u32 = 2;

/// Minimum distance from a pole, as a fraction of the domain span.
pub const POLE_TOLERANCE: f64 = 1e-9;

/// Coefficients of `y = a / (x - pole) + c` plus the sampled domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCoefficients {
    pub a: f64,
    pub pole: f64,
    pub c: f64,
    pub x_min: f64,
    pub x_max: f64,
}

impl Diagnostic {
    pub fn coefficients(self) -> BoundaryCoefficients {
        match self {
            Diagnostic::NiiSfComposite => BoundaryCoefficients {
                a: 0.61,
                pole: 0.05,
                c: 1.3,
                x_min: -1.3,
                x_max: 0.0,
            },
            Diagnostic::NiiCompositeAgn => BoundaryCoefficients {
                a: 0.61,
                pole: 0.47,
                c: 1.19,
                x_min: -2.0,
                x_max: 0.35,
            },
            Diagnostic::SiiAgn => BoundaryCoefficients {
                a: 0.72,
                pole: 0.32,
                c: 1.3,
                x_min: -2.0,
                x_max: 0.5,
            },
            Diagnostic::OiAgn => BoundaryCoefficients {
                a: 0.73,
                pole: -0.59,
                c: 1.33,
                x_min: -2.0,
                x_max: 0.0,
            },
        }
    }

    /// Closed-form boundary value at `x`.
    pub fn evaluate(self, x: f64) -> f64 {
        let k = self.coefficients();
        k.a / (x - k.pole) + k.c
    }

    /// Closed x-interval the boundary is drawn over.
    pub fn domain(self) -> (f64, f64) {
        let k = self.coefficients();
        (k.x_min, k.x_max)
    }

    /// x-value of the vertical asymptote.
    pub fn pole(self) -> f64 {
        self.coefficients().pole
    }

    pub fn style(self) -> LineStyle {
        match self {
            Diagnostic::NiiSfComposite => LineStyle::Dashed,
            Diagnostic::NiiCompositeAgn | Diagnostic::SiiAgn | Diagnostic::OiAgn => LineStyle::Solid,
        }
    }

    pub fn width(self) -> u32 {
        BOUNDARY_WIDTH
    }

    pub fn default_color(self) -> LineColor {
        LineColor::BLACK
    }
}

/// Sample `diagnostic` at `n` evenly spaced points across its domain.
///
/// The curve carries the boundary's default color; callers override it when
/// drawing.
pub fn sample_boundary(diagnostic: Diagnostic, n: usize) -> Result<BoundaryCurve, AppError> {
    let (x_min, x_max) = diagnostic.domain();
    let xs = linspace(x_min, x_max, n)?;
    let pole = diagnostic.pole();
    // Rounding can land a sample an ulp off the pole, giving a huge finite y.
    let min_gap = POLE_TOLERANCE * (x_max - x_min);

    let mut points = Vec::with_capacity(xs.len());
    for x in xs {
        let y = diagnostic.evaluate(x);
        if (x - pole).abs() < min_gap || !y.is_finite() {
            return Err(AppError::usage(format!(
                "{} is undefined at x={x} with {n} samples (pole at {pole}).",
                diagnostic.display_name()
            )));
        }
        points.push((x, y));
    }

    Ok(BoundaryCurve {
        diagnostic,
        points,
        style: diagnostic.style(),
        color: diagnostic.default_color(),
        width: diagnostic.width(),
    })
}

/// Sample every boundary at the same density.
pub fn sample_all(n: usize) -> Result<Vec<BoundaryCurve>, AppError> {
    Diagnostic::ALL.iter().map(|&d| sample_boundary(d, n)).collect()
}
