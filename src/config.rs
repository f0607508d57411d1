//! Environment-driven defaults for the CLI.
//!
//! `.env` is loaded first (if present), then the process environment is read:
//!
//! - `BPT_LINE_COLOR`: boundary color when `--color` is not given
//! - `BPT_PLOT_DIR`: base directory for relative SVG output paths

use std::path::{Path, PathBuf};

use crate::domain::LineColor;
use crate::error::AppError;

pub const ENV_LINE_COLOR: &str = "BPT_LINE_COLOR";
pub const ENV_PLOT_DIR: &str = "BPT_PLOT_DIR";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub line_color: Option<LineColor>,
    pub plot_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (the environment in practice).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let line_color = match lookup(ENV_LINE_COLOR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.parse::<LineColor>().map_err(|e| {
                AppError::usage(format!("Invalid {ENV_LINE_COLOR} in environment (.env): {e}"))
            })?),
            None => None,
        };
        let plot_dir = lookup(ENV_PLOT_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { line_color, plot_dir })
    }

    /// CLI color wins over the environment; `None` means each boundary's default.
    pub fn resolve_color(&self, cli: Option<&str>) -> Result<Option<LineColor>, AppError> {
        match cli {
            Some(raw) => raw.parse().map(Some),
            None => Ok(self.line_color),
        }
    }

    /// Relative output paths land under `BPT_PLOT_DIR` when it is set.
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        match &self.plot_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, AppError> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(settings(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn reads_color_and_plot_dir() {
        let s = settings(&[(ENV_LINE_COLOR, "r"), (ENV_PLOT_DIR, "/tmp/plots")]).unwrap();
        assert_eq!(s.line_color, Some(LineColor::rgb(255, 0, 0)));
        assert_eq!(s.resolve_output(Path::new("a.svg")), PathBuf::from("/tmp/plots/a.svg"));
        assert_eq!(s.resolve_output(Path::new("/abs/a.svg")), PathBuf::from("/abs/a.svg"));
    }

    #[test]
    fn bad_color_in_environment_is_an_error() {
        assert!(settings(&[(ENV_LINE_COLOR, "not-a-color")]).is_err());
    }

    #[test]
    fn cli_color_overrides_environment() {
        let s = settings(&[(ENV_LINE_COLOR, "r")]).unwrap();
        assert_eq!(s.resolve_color(Some("b")).unwrap(), Some(LineColor::rgb(0, 0, 255)));
        assert_eq!(s.resolve_color(None).unwrap(), Some(LineColor::rgb(255, 0, 0)));
        assert!(s.resolve_color(Some("nope")).is_err());
    }
}
