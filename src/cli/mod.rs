//! Command-line parsing for the `bpt` diagnostic-diagram tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the curve/classification code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Diagnostic, Diagram};
use crate::models::DEFAULT_SAMPLES;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bpt", version, about = "Emission-line diagnostic (BPT) boundaries and classification")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print sampled points along one boundary curve.
    Curve(CurveArgs),
    /// Draw a diagram (boundaries plus optional catalog points) in the terminal.
    Plot(PlotArgs),
    /// Render a diagram to an SVG file.
    Render(RenderArgs),
    /// Classify a catalog of line ratios into star-forming / composite / AGN.
    Classify(ClassifyArgs),
    /// Export all boundaries as curve JSON.
    Export(ExportArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CurveArgs {
    /// Which boundary to sample.
    #[arg(short = 'd', long, value_enum, default_value_t = Diagnostic::NiiSfComposite)]
    pub diagnostic: Diagnostic,

    /// Number of evenly spaced samples across the boundary's domain.
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    /// Diagram to draw.
    #[arg(short = 'g', long, value_enum, default_value_t = Diagram::Nii)]
    pub diagram: Diagram,

    /// Optional line-ratio CSV to overlay (columns: id, x, y).
    #[arg(short = 'i', long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 24)]
    pub height: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct RenderArgs {
    /// Diagram to draw.
    #[arg(short = 'g', long, value_enum, default_value_t = Diagram::Nii)]
    pub diagram: Diagram,

    /// Output SVG path (relative paths resolve under BPT_PLOT_DIR when set).
    #[arg(short = 'o', long, value_name = "SVG")]
    pub output: PathBuf,

    /// Optional line-ratio CSV to overlay.
    #[arg(short = 'i', long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Boundary color (k, r, g, b, ..., a name, or #rrggbb). Falls back to BPT_LINE_COLOR, then black.
    #[arg(short = 'c', long)]
    pub color: Option<String>,

    /// Image width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Chart caption.
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Parser, Clone)]
pub struct ClassifyArgs {
    /// Line-ratio CSV (columns: id, x, y).
    #[arg(short = 'i', long, value_name = "CSV")]
    pub input: PathBuf,

    /// Diagram the x column belongs to.
    #[arg(short = 'g', long, value_enum, default_value_t = Diagram::Nii)]
    pub diagram: Diagram,

    /// Export per-point regions to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Only print region counts.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// Output curve JSON path.
    #[arg(short = 'o', long, value_name = "JSON")]
    pub output: PathBuf,

    /// Number of samples per boundary.
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,
}
