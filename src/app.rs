//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads environment settings (for commands that use them)
//! - samples/draws boundaries or classifies catalogs
//! - prints reports/plots
//! - writes optional exports

use std::path::Path;

use clap::Parser;

use crate::cli::{ClassifyArgs, Command, CurveArgs, ExportArgs, PlotArgs, RenderArgs};
use crate::config::Settings;
use crate::domain::CurveEntry;
use crate::error::AppError;
use crate::models::{sample_all, sample_boundary};
use crate::plot::{SvgOptions, render_ascii_diagram, write_svg};

pub mod pipeline;

/// Entry point for the `bpt` binary.
pub fn run() -> Result<(), AppError> {
    // We want `bpt` and `bpt -g sii` to behave like `bpt plot ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    dispatch(cli.command, Settings::from_env)
}

/// Run one command. Settings are loaded only by `render`.
fn dispatch<F>(command: Command, load_settings: F) -> Result<(), AppError>
where
    F: FnOnce() -> Result<Settings, AppError>,
{
    match command {
        Command::Curve(args) => handle_curve(args),
        Command::Plot(args) => handle_plot(args),
        Command::Render(args) => handle_render(args, &load_settings()?),
        Command::Classify(args) => handle_classify(args),
        Command::Export(args) => handle_export(args),
    }
}

fn handle_curve(args: CurveArgs) -> Result<(), AppError> {
    let curve = sample_boundary(args.diagnostic, args.samples)?;
    if args.json {
        let json = serde_json::to_string_pretty(&CurveEntry::from_curve(&curve))
            .map_err(|e| AppError::usage(format!("Failed to encode curve JSON: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_curve_table(&curve));
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let points = pipeline::maybe_classify(args.input.as_deref(), args.diagram)?;
    let plot = render_ascii_diagram(args.diagram, &points, args.width, args.height)?;
    print!("{plot}");
    Ok(())
}

fn handle_render(args: RenderArgs, settings: &Settings) -> Result<(), AppError> {
    let color = settings.resolve_color(args.color.as_deref())?;
    let output = settings.resolve_output(&args.output);
    ensure_parent_dir(&output)?;

    let points = pipeline::maybe_classify(args.input.as_deref(), args.diagram)?;
    let options = SvgOptions {
        width: args.width,
        height: args.height,
        color,
        caption: args.title,
    };
    write_svg(&output, args.diagram, &points, &options)?;

    println!("Diagram saved to: {}", output.display());
    Ok(())
}

fn handle_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let run = pipeline::run_classification(&args.input, args.diagram)?;

    println!(
        "{}",
        crate::report::format_classification_summary(args.diagram, &run.ingest, &run.classified)
    );
    if !args.summary {
        print!("{}", crate::report::format_classified_table(&run.classified));
    }

    if let Some(path) = &args.export {
        crate::io::export::write_classified_csv(path, args.diagram, &run.classified)?;
    }
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let curves = sample_all(args.samples)?;
    crate::io::curve::write_curve_json(&args.output, &curves)?;
    println!("Curves saved to: {}", args.output.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .map_err(|e| AppError::usage(format!("Failed to create output dir '{}': {e}", dir.display()))),
        _ => Ok(()),
    }
}

/// Rewrite argv so `bpt` defaults to `bpt plot`.
///
/// Rules:
/// - `bpt`                      -> `bpt plot`
/// - `bpt -g sii ...`           -> `bpt plot -g sii ...`
/// - `bpt --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("plot".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    // If the first token is a flag, treat it as "plot flags".
    if arg1.starts_with('-') {
        argv.insert(1, "plot".to_string());
    }

    argv
}
