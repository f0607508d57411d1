//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - drawn onto any `Surface`
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One of the published classification boundaries (Kewley et al. 2006).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Diagnostic {
    /// Star-forming / composite division on the [NII] diagram.
    NiiSfComposite,
    /// Composite / AGN division on the [NII] diagram.
    NiiCompositeAgn,
    /// Star-forming / AGN division on the [SII] diagram.
    SiiAgn,
    /// Star-forming / AGN division on the [OI] diagram.
    OiAgn,
}

impl Diagnostic {
    pub const ALL: [Diagnostic; 4] = [
        Diagnostic::NiiSfComposite,
        Diagnostic::NiiCompositeAgn,
        Diagnostic::SiiAgn,
        Diagnostic::OiAgn,
    ];

    /// Human-readable label for terminal output and legends.
    pub fn display_name(self) -> &'static str {
        match self {
            Diagnostic::NiiSfComposite => "[NII] SF/composite",
            Diagnostic::NiiCompositeAgn => "[NII] composite/AGN",
            Diagnostic::SiiAgn => "[SII] SF/AGN",
            Diagnostic::OiAgn => "[OI] SF/AGN",
        }
    }

    /// The diagram this boundary is drawn on.
    pub fn diagram(self) -> Diagram {
        match self {
            Diagnostic::NiiSfComposite | Diagnostic::NiiCompositeAgn => Diagram::Nii,
            Diagnostic::SiiAgn => Diagram::Sii,
            Diagnostic::OiAgn => Diagram::Oi,
        }
    }
}

/// A diagnostic diagram: log([X]/Hα) on x against log([OIII]5007/Hβ) on y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Diagram {
    Nii,
    Sii,
    Oi,
}

impl Diagram {
    pub const ALL: [Diagram; 3] = [Diagram::Nii, Diagram::Sii, Diagram::Oi];

    pub fn display_name(self) -> &'static str {
        match self {
            Diagram::Nii => "[NII]",
            Diagram::Sii => "[SII]",
            Diagram::Oi => "[OI]",
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            Diagram::Nii => "log([NII]6584/Hα)",
            Diagram::Sii => "log([SII]6717,31/Hα)",
            Diagram::Oi => "log([OI]6300/Hα)",
        }
    }

    pub fn y_label(self) -> &'static str {
        "log([OIII]5007/Hβ)"
    }

    /// Boundaries drawn on this diagram, in drawing order.
    pub fn boundaries(self) -> &'static [Diagnostic] {
        match self {
            Diagram::Nii => &[Diagnostic::NiiSfComposite, Diagnostic::NiiCompositeAgn],
            Diagram::Sii => &[Diagnostic::SiiAgn],
            Diagram::Oi => &[Diagnostic::OiAgn],
        }
    }

    /// Default plot window `(x0, x1, y0, y1)`.
    pub fn default_bounds(self) -> (f64, f64, f64, f64) {
        match self {
            Diagram::Nii => (-2.0, 0.5, -1.5, 1.5),
            Diagram::Sii => (-1.5, 0.5, -1.5, 1.5),
            Diagram::Oi => (-2.5, 0.0, -1.5, 1.5),
        }
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Diagram::Nii => "nii",
            Diagram::Sii => "sii",
            Diagram::Oi => "oi",
        };
        f.write_str(name)
    }
}

/// Stroke pattern for a boundary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// An opaque RGB line color.
///
/// Parsed from single-letter codes (`k`, `r`, `g`, `b`, `c`, `m`, `y`, `w`),
/// common color names, or `#rrggbb`. Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LineColor {
    pub const BLACK: LineColor = LineColor::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "k" | "black" => Self::rgb(0, 0, 0),
            "w" | "white" => Self::rgb(255, 255, 255),
            "r" | "red" => Self::rgb(255, 0, 0),
            "g" | "green" => Self::rgb(0, 128, 0),
            "b" | "blue" => Self::rgb(0, 0, 255),
            "c" | "cyan" => Self::rgb(0, 191, 191),
            "m" | "magenta" => Self::rgb(191, 0, 191),
            "y" | "yellow" => Self::rgb(191, 191, 0),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            _ => return None,
        };
        Some(color)
    }
}

impl Default for LineColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for LineColor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let valid = hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(AppError::usage(format!("Invalid hex color '{s}' (expected #rrggbb).")));
            }
            // All six characters are ASCII hex digits, so the slices and parses succeed.
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
            return Ok(Self::rgb(channel(0), channel(2), channel(4)));
        }

        // Single-letter codes are case-sensitive ("k" is black, "K" is not a color).
        if s.len() == 1 {
            return Self::from_name(s).ok_or_else(|| AppError::usage(format!("Unknown color code '{s}'.")));
        }
        Self::from_name(&s.to_ascii_lowercase())
            .ok_or_else(|| AppError::usage(format!("Unknown color '{s}'.")))
    }
}

impl TryFrom<String> for LineColor {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LineColor> for String {
    fn from(value: LineColor) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A boundary sampled over its domain, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCurve {
    pub diagnostic: Diagnostic,
    pub points: Vec<(f64, f64)>,
    pub style: LineStyle,
    pub color: LineColor,
    pub width: u32,
}

/// Classification region on a diagnostic diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    StarForming,
    Composite,
    Agn,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::StarForming, Region::Composite, Region::Agn];

    pub fn display_name(self) -> &'static str {
        match self {
            Region::StarForming => "star-forming",
            Region::Composite => "composite",
            Region::Agn => "AGN",
        }
    }

    /// Single-character marker used by the terminal plot.
    pub fn marker(self) -> char {
        match self {
            Region::StarForming => 's',
            Region::Composite => 'c',
            Region::Agn => 'A',
        }
    }
}

/// One observed galaxy (or spaxel) on a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRatioPoint {
    pub id: String,
    /// log of the diagram's x-axis ratio.
    pub x: f64,
    /// log([OIII]5007/Hβ).
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedPoint {
    pub point: LineRatioPoint,
    pub region: Region,
}

/// Curve JSON: the portable representation of sampled boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub samples: usize,
    pub curves: Vec<CurveEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveEntry {
    pub diagnostic: Diagnostic,
    pub diagram: Diagram,
    pub style: LineStyle,
    pub color: LineColor,
    pub width: u32,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurveEntry {
    pub fn from_curve(curve: &BoundaryCurve) -> Self {
        Self {
            diagnostic: curve.diagnostic,
            diagram: curve.diagnostic.diagram(),
            style: curve.style,
            color: curve.color,
            width: curve.width,
            x: curve.points.iter().map(|&(x, _)| x).collect(),
            y: curve.points.iter().map(|&(_, y)| y).collect(),
        }
    }

    pub fn to_curve(&self) -> BoundaryCurve {
        BoundaryCurve {
            diagnostic: self.diagnostic,
            points: self.x.iter().copied().zip(self.y.iter().copied()).collect(),
            style: self.style,
            color: self.color,
            width: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_codes_names_and_hex() {
        assert_eq!("k".parse::<LineColor>().unwrap(), LineColor::BLACK);
        assert_eq!("Red".parse::<LineColor>().unwrap(), LineColor::rgb(255, 0, 0));
        assert_eq!("#1a2B3c".parse::<LineColor>().unwrap(), LineColor::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn color_rejects_garbage() {
        assert!("K".parse::<LineColor>().is_err());
        assert!("#12345".parse::<LineColor>().is_err());
        assert!("#gggggg".parse::<LineColor>().is_err());
        assert!("chartreuse-ish".parse::<LineColor>().is_err());
    }

    #[test]
    fn color_serializes_as_hex() {
        let json = serde_json::to_string(&LineColor::rgb(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: LineColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LineColor::rgb(255, 0, 0));
    }

    #[test]
    fn every_boundary_belongs_to_its_diagram() {
        for diagram in Diagram::ALL {
            for d in diagram.boundaries() {
                assert_eq!(d.diagram(), diagram);
            }
        }
    }
}
