//! Drawing surfaces.
//!
//! Boundary evaluation never renders inline. Drawing goes through the
//! `Surface` trait so callers decide where a line ends up: an in-memory
//! recording, a terminal canvas, or an SVG chart.

use crate::domain::{LineColor, LineStyle};
use crate::error::AppError;

/// Anything a boundary can be drawn on.
pub trait Surface {
    /// Append one polyline through `points` (data coordinates).
    fn draw_line(
        &mut self,
        points: &[(f64, f64)],
        style: LineStyle,
        color: LineColor,
        width: u32,
    ) -> Result<(), AppError>;
}

/// A line as it was handed to a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLine {
    pub points: Vec<(f64, f64)>,
    pub style: LineStyle,
    pub color: LineColor,
    pub width: u32,
}

/// Surface that keeps every line in memory.
///
/// Used by tests and by renderers that lay out a chart only after all series
/// are known.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    lines: Vec<RecordedLine>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[RecordedLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<RecordedLine> {
        self.lines
    }
}

impl Surface for RecordingSurface {
    fn draw_line(
        &mut self,
        points: &[(f64, f64)],
        style: LineStyle,
        color: LineColor,
        width: u32,
    ) -> Result<(), AppError> {
        self.lines.push(RecordedLine {
            points: points.to_vec(),
            style,
            color,
            width,
        });
        Ok(())
    }
}

/// A set of panels with one active at a time.
///
/// Drawing on a `Figure` draws on its active panel, which is how "the
/// current surface" is expressed without global state.
#[derive(Debug, Clone)]
pub struct Figure<S> {
    panels: Vec<S>,
    active: Option<usize>,
}

impl<S> Default for Figure<S> {
    fn default() -> Self {
        Self {
            panels: Vec::new(),
            active: None,
        }
    }
}

impl<S> Figure<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a panel and make it the active one. Returns its index.
    pub fn add_panel(&mut self, panel: S) -> usize {
        self.panels.push(panel);
        let idx = self.panels.len() - 1;
        self.active = Some(idx);
        idx
    }

    pub fn set_active(&mut self, idx: usize) -> Result<(), AppError> {
        if idx >= self.panels.len() {
            return Err(AppError::render(format!(
                "Panel {idx} does not exist (figure has {} panel(s)).",
                self.panels.len()
            )));
        }
        self.active = Some(idx);
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_mut(&mut self) -> Result<&mut S, AppError> {
        let idx = self
            .active
            .ok_or_else(|| AppError::render("No active surface: the figure has no panels."))?;
        self.panels
            .get_mut(idx)
            .ok_or_else(|| AppError::render(format!("Active panel {idx} is missing.")))
    }

    pub fn panels(&self) -> &[S] {
        &self.panels
    }

    pub fn into_panels(self) -> Vec<S> {
        self.panels
    }
}

impl<S: Surface> Surface for Figure<S> {
    fn draw_line(
        &mut self,
        points: &[(f64, f64)],
        style: LineStyle,
        color: LineColor,
        width: u32,
    ) -> Result<(), AppError> {
        self.active_mut()?.draw_line(points, style, color, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_lines_in_order() {
        let mut s = RecordingSurface::new();
        s.draw_line(&[(0.0, 0.0), (1.0, 1.0)], LineStyle::Solid, LineColor::BLACK, 2)
            .unwrap();
        s.draw_line(&[(0.0, 1.0)], LineStyle::Dashed, LineColor::rgb(255, 0, 0), 1)
            .unwrap();
        assert_eq!(s.lines().len(), 2);
        assert_eq!(s.lines()[1].style, LineStyle::Dashed);
    }

    #[test]
    fn figure_forwards_to_active_panel() {
        let mut fig = Figure::new();
        fig.add_panel(RecordingSurface::new());
        fig.add_panel(RecordingSurface::new());
        fig.set_active(0).unwrap();

        fig.draw_line(&[(0.0, 0.0), (1.0, 1.0)], LineStyle::Solid, LineColor::BLACK, 2)
            .unwrap();

        let panels = fig.into_panels();
        assert_eq!(panels[0].lines().len(), 1);
        assert!(panels[1].lines().is_empty());
    }

    #[test]
    fn empty_figure_has_no_active_surface() {
        let mut fig: Figure<RecordingSurface> = Figure::new();
        let err = fig
            .draw_line(&[(0.0, 0.0)], LineStyle::Solid, LineColor::BLACK, 2)
            .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_RENDER);
        assert!(fig.set_active(0).is_err());
    }
}
