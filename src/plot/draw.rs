//! Draw boundary curves onto a surface.
//!
//! Each named operation samples its boundary at `DEFAULT_SAMPLES` points and
//! appends one line to the surface. Pass a `Figure` to draw on whichever panel
//! is active. A `None` color means black.

use crate::domain::{Diagnostic, Diagram, LineColor};
use crate::error::AppError;
use crate::models::{DEFAULT_SAMPLES, sample_boundary};
use crate::plot::Surface;

/// Star-forming / composite division on the [NII] diagram (dashed).
pub fn draw_sf_composite_boundary<S>(surface: &mut S, color: Option<LineColor>) -> Result<(), AppError>
where
    S: Surface + ?Sized,
{
    draw_boundary(Diagnostic::NiiSfComposite, surface, color)
}

/// Composite / AGN division on the [NII] diagram.
pub fn draw_composite_agn_boundary<S>(surface: &mut S, color: Option<LineColor>) -> Result<(), AppError>
where
    S: Surface + ?Sized,
{
    draw_boundary(Diagnostic::NiiCompositeAgn, surface, color)
}

/// Star-forming / AGN division on the [SII] diagram.
pub fn draw_sii_agn_boundary<S>(surface: &mut S, color: Option<LineColor>) -> Result<(), AppError>
where
    S: Surface + ?Sized,
{
    draw_boundary(Diagnostic::SiiAgn, surface, color)
}

/// Star-forming / AGN division on the [OI] diagram.
pub fn draw_oi_agn_boundary<S>(surface: &mut S, color: Option<LineColor>) -> Result<(), AppError>
where
    S: Surface + ?Sized,
{
    draw_boundary(Diagnostic::OiAgn, surface, color)
}

/// Sample `diagnostic` and draw it with its fixed style and width.
pub fn draw_boundary<S>(diagnostic: Diagnostic, surface: &mut S, color: Option<LineColor>) -> Result<(), AppError>
where
    S: Surface + ?Sized,
{
    let curve = sample_boundary(diagnostic, DEFAULT_SAMPLES)?;
    let color = color.unwrap_or(curve.color);
    log::debug!(
        "drawing {} ({} samples, {:?}, {color})",
        diagnostic.display_name(),
        curve.points.len(),
        curve.style
    );
    surface.draw_line(&curve.points, curve.style, color, curve.width)
}

/// Draw every boundary that belongs to `diagram`.
pub fn draw_diagram_boundaries<S>(diagram: Diagram, surface: &mut S, color: Option<LineColor>) -> Result<(), AppError>
where
    S: Surface + ?Sized,
{
    for &d in diagram.boundaries() {
        draw_boundary(d, surface, color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineStyle;
    use crate::plot::{Figure, RecordingSurface};

    fn draw_one(f: fn(&mut RecordingSurface, Option<LineColor>) -> Result<(), AppError>) -> RecordingSurface {
        let mut s = RecordingSurface::new();
        f(&mut s, None).unwrap();
        s
    }

    #[test]
    fn each_operation_draws_one_default_line() {
        let cases: [(fn(&mut RecordingSurface, Option<LineColor>) -> Result<(), AppError>, Diagnostic); 4] = [
            (draw_sf_composite_boundary, Diagnostic::NiiSfComposite),
            (draw_composite_agn_boundary, Diagnostic::NiiCompositeAgn),
            (draw_sii_agn_boundary, Diagnostic::SiiAgn),
            (draw_oi_agn_boundary, Diagnostic::OiAgn),
        ];

        for (op, d) in cases {
            let s = draw_one(op);
            assert_eq!(s.lines().len(), 1);
            let line = &s.lines()[0];
            assert_eq!(line.points.len(), DEFAULT_SAMPLES);
            assert_eq!(line.style, d.style());
            assert_eq!(line.width, 2);
            assert_eq!(line.color, LineColor::BLACK);
            assert_eq!(line.points[0].0, d.domain().0);
            assert_eq!(line.points[DEFAULT_SAMPLES - 1].0, d.domain().1);
        }
    }

    #[test]
    fn sf_composite_is_dashed_others_solid() {
        assert_eq!(draw_one(draw_sf_composite_boundary).lines()[0].style, LineStyle::Dashed);
        assert_eq!(draw_one(draw_composite_agn_boundary).lines()[0].style, LineStyle::Solid);
    }

    #[test]
    fn explicit_color_is_used() {
        let mut s = RecordingSurface::new();
        let red = LineColor::rgb(255, 0, 0);
        draw_sii_agn_boundary(&mut s, Some(red)).unwrap();
        assert_eq!(s.lines()[0].color, red);
    }

    #[test]
    fn repeated_draws_are_identical() {
        let a = draw_one(draw_oi_agn_boundary);
        let b = draw_one(draw_oi_agn_boundary);
        assert_eq!(a.lines(), b.lines());
    }

    #[test]
    fn figure_routes_to_active_panel() {
        let mut fig = Figure::new();
        fig.add_panel(RecordingSurface::new());
        fig.add_panel(RecordingSurface::new());

        // The most recently added panel is active.
        draw_composite_agn_boundary(&mut fig, None).unwrap();
        fig.set_active(0).unwrap();
        draw_sf_composite_boundary(&mut fig, None).unwrap();

        let panels = fig.into_panels();
        assert_eq!(panels[0].lines()[0].style, LineStyle::Dashed);
        assert_eq!(panels[1].lines()[0].style, LineStyle::Solid);
    }

    #[test]
    fn no_active_surface_propagates_error() {
        let mut fig: Figure<RecordingSurface> = Figure::new();
        assert!(draw_oi_agn_boundary(&mut fig, None).is_err());
    }

    #[test]
    fn diagram_draws_all_its_boundaries() {
        let mut s = RecordingSurface::new();
        draw_diagram_boundaries(Diagram::Nii, &mut s, None).unwrap();
        assert_eq!(s.lines().len(), 2);

        let mut s = RecordingSurface::new();
        draw_diagram_boundaries(Diagram::Oi, &mut s, None).unwrap();
        assert_eq!(s.lines().len(), 1);
    }
}
