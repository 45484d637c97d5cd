//! # Label Layout
//!
//! The JSON description of one label page. Every CSV row is rendered with
//! the same layout.
//!
//! ```ignore
//! {
//!   "page":   {"size": "A4", "orientation": "landscape", "line_width": 2},
//!   "fonts":  {"default": "Helvetica-Bold", "custom_fonts": [{"name": "Plex", "file": "plex.ttf"}]},
//!   "fields": [{"x_start": 10, "x_end": 300, "y_start": 500, "y_end": 540,
//!               "font_size": 18, "text": "$name", "wrap": true, "align": "center"}],
//!   "lines":  [{"type": "horizontal_transform", "y": 480, "width": 2}],
//!   "qr_code": {"x": 400, "y": 20, "size": 100, "text": "HEX_CODE"},
//!   "barcodes": [{"x": 20, "y": 20, "width": 200, "height": 60, "type": "ean13", "text": "$ean"}]
//! }
//! ```
//!
//! `page` and `fields` are required. List entries that fail to parse are
//! skipped with a warning instead of rejecting the whole layout.

pub mod resolve;
pub mod types;

pub use resolve::{HEX_LENGTH, RowContext, generate_hex_code};
pub use types::*;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, Result};
use crate::pdf::page::{Orientation, PageSize};

/// Largest layout file accepted (10 MiB).
pub const MAX_CONFIG_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum entries read from each of `fields`, `lines` and `barcodes`.
pub const MAX_ELEMENTS: usize = 1000;

/// Maximum number of custom fonts registered.
pub const MAX_CUSTOM_FONTS: usize = 100;

/// A complete label layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelLayout {
    pub page: PageConfig,
    #[serde(default)]
    pub fonts: FontConfig,
    #[serde(deserialize_with = "deserialize_elements")]
    pub fields: Vec<Field>,
    #[serde(default, deserialize_with = "deserialize_elements")]
    pub lines: Vec<LineSpec>,
    #[serde(default)]
    pub qr_code: Option<QrConfig>,
    #[serde(default, deserialize_with = "deserialize_elements")]
    pub barcodes: Vec<BarcodePlacement>,
}

/// Deserialize a list element by element, skipping entries that don't parse.
///
/// Each entry is first read as raw JSON so one bad entry cannot fail the
/// whole list. At most [`MAX_ELEMENTS`] entries are kept.
fn deserialize_elements<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let mut values: Vec<serde_json::Value> = Vec::deserialize(deserializer)?;
    if values.len() > MAX_ELEMENTS {
        tracing::warn!(count = values.len(), max = MAX_ELEMENTS, "too many layout entries, ignoring the rest");
        values.truncate(MAX_ELEMENTS);
    }

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value(v) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping invalid layout entry");
                None
            }
        })
        .collect())
}

impl LabelLayout {
    /// Parse a layout from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut layout: LabelLayout = serde_json::from_str(json)?;
        if layout.fonts.custom_fonts.len() > MAX_CUSTOM_FONTS {
            tracing::warn!(
                count = layout.fonts.custom_fonts.len(),
                max = MAX_CUSTOM_FONTS,
                "too many custom fonts, ignoring the rest"
            );
            layout.fonts.custom_fonts.truncate(MAX_CUSTOM_FONTS);
        }
        Ok(layout)
    }

    /// Read and parse a layout file, rejecting files over [`MAX_CONFIG_SIZE`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&read_config(path.as_ref())?)
    }
}

fn read_config(path: &Path) -> Result<String> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_CONFIG_SIZE {
        return Err(LabelError::Config(format!(
            "config file too large: {} bytes (max: {})",
            size, MAX_CONFIG_SIZE
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Findings from checking a layout without rendering it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Number of entries in `fields`.
    pub field_count: usize,
    /// Custom font files that were found.
    pub fonts_ok: Vec<String>,
    /// Non-fatal problems.
    pub warnings: Vec<String>,
}

/// Check layout JSON for structural errors and suspicious values.
///
/// Missing `page` or `fields` is an error; everything else is a warning.
pub fn validate_json(json: &str) -> Result<ValidationReport> {
    let root: serde_json::Value = serde_json::from_str(json)?;

    let Some(page) = root.get("page") else {
        return Err(LabelError::Config("missing 'page' section".into()));
    };
    let Some(fields) = root.get("fields").and_then(|f| f.as_array()) else {
        return Err(LabelError::Config("missing or invalid 'fields' array".into()));
    };

    let mut report = ValidationReport {
        field_count: fields.len(),
        ..Default::default()
    };

    if let Some(size) = page.get("size").and_then(|s| s.as_str()) {
        if PageSize::from_name(size).is_none() {
            report.warnings.push(format!("unknown page size: {}", size));
        }
    }
    if let Some(orientation) = page.get("orientation").and_then(|s| s.as_str()) {
        if Orientation::from_name(orientation).is_none() {
            report.warnings.push(format!(
                "unknown orientation: {} (use 'portrait' or 'landscape')",
                orientation
            ));
        }
    }
    if let Some(width) = page.get("line_width").and_then(|w| w.as_f64()) {
        if width <= 0.0 {
            report
                .warnings
                .push(format!("line_width must be positive ({}), using 3.0", width));
        }
    }

    let custom_fonts = root
        .pointer("/fonts/custom_fonts")
        .and_then(|f| f.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();
    for file in custom_fonts.iter().filter_map(|f| f.get("file")?.as_str()) {
        if Path::new(file).is_file() {
            report.fonts_ok.push(file.to_string());
        } else {
            report.warnings.push(format!("font file not found: {}", file));
        }
    }

    for (i, field) in fields.iter().enumerate() {
        let has_coords = ["x_start", "x_end", "y_start", "y_end"]
            .iter()
            .all(|key| field.get(key).is_some());
        if !has_coords {
            report
                .warnings
                .push(format!("field {} missing required coordinates", i));
        }
    }

    // The typed layout must parse too
    LabelLayout::from_json(json)?;

    Ok(report)
}

/// Check a layout file; see [`validate_json`].
pub fn validate_file(path: impl AsRef<Path>) -> Result<ValidationReport> {
    validate_json(&read_config(path.as_ref())?)
}
