//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - solid boundaries: `-`
//! - dashed boundaries: `.` with every other segment skipped
//! - observed points: `s` (star-forming), `c` (composite), `A` (AGN)

use crate::domain::{ClassifiedPoint, Diagram, LineColor, LineStyle};
use crate::error::AppError;
use crate::math::clip_segment;
use crate::plot::{Surface, draw_diagram_boundaries};

/// Fixed-size character canvas over a fixed data window.
///
/// Lines are clipped to the window before rasterizing, so boundary branches
/// that run off-chart near a pole never smear along the border.
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    grid: Vec<Vec<char>>,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize, x_bounds: (f64, f64), y_bounds: (f64, f64)) -> Result<Self, AppError> {
        let (x0, x1) = x_bounds;
        let (y0, y1) = y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return Err(AppError::usage(format!(
                "Invalid plot window x=[{x0}, {x1}] y=[{y0}, {y1}]."
            )));
        }
        let width = width.max(10);
        let height = height.max(5);
        Ok(Self {
            grid: vec![vec![' '; width]; height],
            x_bounds,
            y_bounds,
        })
    }

    pub fn width(&self) -> usize {
        self.grid[0].len()
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Place a marker; points outside the window are dropped.
    pub fn plot_point(&mut self, x: f64, y: f64, ch: char) {
        if !self.contains(x, y) {
            return;
        }
        let (col, row) = self.to_cell(x, y);
        self.grid[row][col] = ch;
    }

    /// Rows joined by newlines, each terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for row in &self.grid {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_bounds.0 && x <= self.x_bounds.1 && y >= self.y_bounds.0 && y <= self.y_bounds.1
    }

    fn to_cell(&self, x: f64, y: f64) -> (usize, usize) {
        let width = self.width();
        let height = self.height();
        let u = ((x - self.x_bounds.0) / (self.x_bounds.1 - self.x_bounds.0)).clamp(0.0, 1.0);
        let v = ((y - self.y_bounds.0) / (self.y_bounds.1 - self.y_bounds.0)).clamp(0.0, 1.0);
        let col = (u * (width as f64 - 1.0)).round() as usize;
        // y=top is max -> row 0
        let row = (height as f64 - 1.0 - v * (height as f64 - 1.0)).round() as usize;
        (col, row)
    }

    fn draw_segment(&mut self, a: (f64, f64), b: (f64, f64), ch: char) {
        let Some((a, b)) = clip_segment(a, b, self.x_bounds, self.y_bounds) else {
            return;
        };
        let (x0, y0) = self.to_cell(a.0, a.1);
        let (x1, y1) = self.to_cell(b.0, b.1);
        draw_cells(&mut self.grid, x0, y0, x1, y1, ch);
    }
}

impl Surface for AsciiCanvas {
    fn draw_line(
        &mut self,
        points: &[(f64, f64)],
        style: LineStyle,
        _color: LineColor,
        _width: u32,
    ) -> Result<(), AppError> {
        let ch = match style {
            LineStyle::Solid => '-',
            LineStyle::Dashed => '.',
        };
        for (i, pair) in points.windows(2).enumerate() {
            if style == LineStyle::Dashed && i % 2 == 1 {
                continue;
            }
            self.draw_segment(pair[0], pair[1], ch);
        }
        Ok(())
    }
}

/// Render a diagram with its boundaries and optional classified points.
pub fn render_ascii_diagram(
    diagram: Diagram,
    points: &[ClassifiedPoint],
    width: usize,
    height: usize,
) -> Result<String, AppError> {
    let (x0, x1, y0, y1) = diagram.default_bounds();
    let mut canvas = AsciiCanvas::new(width, height, (x0, x1), (y0, y1))?;

    // Draw boundaries first (so points can overlay).
    draw_diagram_boundaries(diagram, &mut canvas, None)?;

    for p in points {
        canvas.plot_point(p.point.x, p.point.y, p.region.marker());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Diagram {}: x=[{x0:.2}, {x1:.2}] {} | y=[{y0:.2}, {y1:.2}] {}\n",
        diagram.display_name(),
        diagram.x_label(),
        diagram.y_label()
    ));
    out.push_str(&canvas.render());
    Ok(out)
}

/// Integer line drawing (Bresenham-ish). Only blank cells are written.
fn draw_cells(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
