//! Plotters-powered SVG rendering of a diagnostic diagram.
//!
//! Boundaries are collected through the same `Surface` path the named draw
//! operations use, then laid out with Plotters once the full set of lines is
//! known. Lines are clipped to the plot window before drawing.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::domain::{ClassifiedPoint, Diagram, LineColor, LineStyle, Region};
use crate::error::AppError;
use crate::math::clip_polyline;
use crate::plot::{RecordingSurface, draw_diagram_boundaries};

/// Rendering options for an SVG diagram.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub width: u32,
    pub height: u32,
    /// Boundary color; `None` keeps each boundary's default (black).
    pub color: Option<LineColor>,
    pub caption: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            color: None,
            caption: None,
        }
    }
}

/// Render `diagram` (boundaries plus optional points) to an SVG document.
pub fn render_svg(diagram: Diagram, points: &[ClassifiedPoint], options: &SvgOptions) -> Result<String, AppError> {
    let mut surface = RecordingSurface::new();
    draw_diagram_boundaries(diagram, &mut surface, options.color)?;

    let (x0, x1, y0, y1) = diagram.default_bounds();
    let caption = options
        .caption
        .clone()
        .unwrap_or_else(|| format!("{} diagnostic diagram", diagram.display_name()));

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc(diagram.x_label())
            .y_desc(diagram.y_label())
            .x_label_formatter(&|v| format!("{v:.1}"))
            .y_label_formatter(&|v| format!("{v:.1}"))
            .draw()
            .map_err(render_err)?;

        for line in surface.lines() {
            let style = to_rgb(line.color).stroke_width(line.width);
            for run in clip_polyline(&line.points, (x0, x1), (y0, y1)) {
                match line.style {
                    LineStyle::Solid => {
                        chart.draw_series(LineSeries::new(run, style)).map_err(render_err)?;
                    }
                    LineStyle::Dashed => {
                        chart
                            .draw_series(DashedLineSeries::new(run, 8u32, 6u32, style))
                            .map_err(render_err)?;
                    }
                }
            }
        }

        for region in Region::ALL {
            let color = region_color(region);
            chart
                .draw_series(
                    points
                        .iter()
                        .filter(|p| p.region == region)
                        .filter(|p| p.point.x >= x0 && p.point.x <= x1 && p.point.y >= y0 && p.point.y <= y1)
                        .map(|p| Circle::new((p.point.x, p.point.y), 3, color.filled())),
                )
                .map_err(render_err)?;
        }

        root.present().map_err(render_err)?;
    }

    Ok(svg)
}

/// Render `diagram` and write it to `path`.
pub fn write_svg(path: &Path, diagram: Diagram, points: &[ClassifiedPoint], options: &SvgOptions) -> Result<(), AppError> {
    let svg = render_svg(diagram, points, options)?;
    std::fs::write(path, svg)
        .map_err(|e| AppError::usage(format!("Failed to write SVG '{}': {e}", path.display())))?;
    log::info!("wrote {} diagram to {}", diagram.display_name(), path.display());
    Ok(())
}

fn to_rgb(color: LineColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn region_color(region: Region) -> RGBColor {
    match region {
        Region::StarForming => RGBColor(31, 119, 180),
        Region::Composite => RGBColor(44, 160, 44),
        Region::Agn => RGBColor(214, 39, 40),
    }
}

fn render_err(e: impl std::fmt::Display) -> AppError {
    AppError::render(format!("Failed to render SVG: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineRatioPoint;

    #[test]
    fn svg_contains_boundaries_and_points() {
        let pts = vec![
            ClassifiedPoint {
                point: LineRatioPoint {
                    id: "a".to_string(),
                    x: -1.0,
                    y: -0.5,
                },
                region: Region::StarForming,
            },
            ClassifiedPoint {
                point: LineRatioPoint {
                    id: "b".to_string(),
                    x: 0.2,
                    y: 1.0,
                },
                region: Region::Agn,
            },
        ];
        let svg = render_svg(Diagram::Nii, &pts, &SvgOptions::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("diagnostic diagram"));
    }

    #[test]
    fn custom_color_reaches_the_document() {
        let options = SvgOptions {
            color: Some(LineColor::rgb(255, 0, 0)),
            ..SvgOptions::default()
        };
        let svg = render_svg(Diagram::Oi, &[], &options).unwrap();
        assert!(svg.to_uppercase().contains("#FF0000"));
    }

    #[test]
    fn write_svg_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sii.svg");
        write_svg(&path, Diagram::Sii, &[], &SvgOptions::default()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("</svg>"));
    }
}
