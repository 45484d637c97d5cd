//! Element types of the JSON label layout.
//!
//! Optional values stay `Option` here and are resolved to their defaults by
//! accessor methods, so a layout round-trips without inventing values.

use serde::{Deserialize, Serialize};

use crate::pdf::page::{Orientation, PageSize};
use crate::pdf::text::Alignment;

/// Longest text a field may be truncated to via `max_length`.
pub const MAX_FIELD_LEN: usize = 1024;

/// Custom deserializer for flags that may be given as a bool or a number.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagValue {
        Bool(bool),
        Number(f64),
        Other(serde_json::Value),
    }

    Ok(match FlagValue::deserialize(deserializer)? {
        FlagValue::Bool(b) => b,
        FlagValue::Number(n) => n != 0.0,
        FlagValue::Other(_) => false,
    })
}

fn default_true() -> bool {
    true
}

// ============================================================================
// PAGE
// ============================================================================

/// Page setup shared by every label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    /// "A3", "A4", "A5", "LETTER" or "LEGAL" (default A4).
    #[serde(default)]
    pub size: Option<String>,
    /// "portrait" (default) or "landscape".
    #[serde(default)]
    pub orientation: Option<String>,
    /// Default stroke width in points (default 3.0).
    #[serde(default)]
    pub line_width: Option<f32>,
}

impl PageConfig {
    pub const DEFAULT_LINE_WIDTH: f32 = 3.0;

    pub fn page_size(&self) -> PageSize {
        self.size
            .as_deref()
            .and_then(PageSize::from_name)
            .unwrap_or_default()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
            .as_deref()
            .and_then(Orientation::from_name)
            .unwrap_or_default()
    }

    pub fn line_width(&self) -> f32 {
        match self.line_width {
            Some(w) if w > 0.0 => w,
            _ => Self::DEFAULT_LINE_WIDTH,
        }
    }
}

// ============================================================================
// FONTS
// ============================================================================

/// Font setup: a default font name plus TrueType files to embed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font used when a field names none (default "Helvetica-Bold").
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub custom_fonts: Vec<CustomFont>,
}

impl FontConfig {
    pub const DEFAULT_FONT: &'static str = "Helvetica-Bold";

    pub fn default_font(&self) -> &str {
        self.default.as_deref().unwrap_or(Self::DEFAULT_FONT)
    }
}

/// A TrueType font file registered under `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFont {
    pub name: String,
    pub file: String,
    /// Accepted for compatibility; embedded fonts are always Unicode.
    #[serde(default)]
    pub encoding: Option<String>,
}

// ============================================================================
// TEXT FIELDS
// ============================================================================

/// A text box.
///
/// `text` is resolved per row: `"$column"` pulls from the CSV,
/// `"HEX_CODE"` / `"RANDOM_HEX"` insert the row's random code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub x_start: f32,
    pub x_end: f32,
    pub y_start: f32,
    pub y_end: f32,
    pub font_size: f32,
    #[serde(default)]
    pub text: String,
    /// Wrap words and shrink to fit the box.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub wrap: bool,
    /// "left" (default), "center" or "right".
    #[serde(default)]
    pub align: Option<String>,
    #[serde(default)]
    pub font_name: Option<String>,
    /// Truncate CSV values longer than this many characters (0 = off).
    #[serde(default)]
    pub max_length: Option<i64>,
}

impl Field {
    pub fn alignment(&self) -> Alignment {
        match self.align.as_deref() {
            Some("center") => Alignment::Center,
            Some("right") => Alignment::Right,
            _ => Alignment::Left,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length.unwrap_or(0).clamp(0, MAX_FIELD_LEN as i64) as usize
    }

    /// True if the box has positive extent in both directions.
    pub fn has_area(&self) -> bool {
        self.x_end > self.x_start && self.y_end > self.y_start
    }
}

// ============================================================================
// LINES
// ============================================================================

/// A straight stroked line.
///
/// With `"type": "horizontal_transform"` only `y` (and optionally
/// `x_start` / `x_end`) is read; otherwise the four coordinates are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineSpec {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub x_start: Option<f32>,
    #[serde(default)]
    pub y_start: Option<f32>,
    #[serde(default)]
    pub x_end: Option<f32>,
    #[serde(default)]
    pub y_end: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
    /// Stroke width in points (default 1.0).
    #[serde(default)]
    pub width: Option<f32>,
}

/// A resolved line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub width: f32,
}

impl LineSpec {
    pub const DEFAULT_WIDTH: f32 = 1.0;
    /// Right end of a horizontal line when none is given (A4 landscape width).
    pub const DEFAULT_HORIZONTAL_END: f32 = 841.89;

    pub fn is_horizontal(&self) -> bool {
        self.kind.as_deref() == Some("horizontal_transform")
    }

    pub fn width(&self) -> f32 {
        match self.width {
            Some(w) if w > 0.0 => w,
            _ => Self::DEFAULT_WIDTH,
        }
    }

    pub fn segment(&self) -> Segment {
        if self.is_horizontal() {
            let y = self.y.unwrap_or(0.0);
            Segment {
                start: (self.x_start.unwrap_or(0.0), y),
                end: (self.x_end.unwrap_or(Self::DEFAULT_HORIZONTAL_END), y),
                width: self.width(),
            }
        } else {
            Segment {
                start: (self.x_start.unwrap_or(0.0), self.y_start.unwrap_or(0.0)),
                end: (self.x_end.unwrap_or(0.0), self.y_end.unwrap_or(0.0)),
                width: self.width(),
            }
        }
    }
}

// ============================================================================
// QR CODE AND BARCODES
// ============================================================================

/// The optional QR code. Present in the layout means enabled unless
/// `"enabled": false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrConfig {
    #[serde(default = "QrConfig::default_x")]
    pub x: f32,
    #[serde(default = "QrConfig::default_y")]
    pub y: f32,
    /// Edge length of the square in points.
    #[serde(default = "QrConfig::default_size")]
    pub size: f32,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl QrConfig {
    fn default_x() -> f32 {
        192.0
    }

    fn default_y() -> f32 {
        1.0
    }

    fn default_size() -> f32 {
        113.4
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            x: Self::default_x(),
            y: Self::default_y(),
            size: Self::default_size(),
            text: String::new(),
            enabled: true,
        }
    }
}

/// A 1D barcode placement. `kind` is one of "code128", "ean13", "upca".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}
