//! # Barcode Rendering
//!
//! Converts glyph patterns into filled rectangles on a [`Canvas`].
//!
//! ## Geometry
//!
//! ```text
//! module_width = box.width / total_modules
//!
//! Code128:  total_modules = Σ pattern widths + 11
//!           cursor starts at box.x + 10 modules (left quiet zone)
//! EAN/UPC:  total_modules = 95
//!           cursor starts at box.x
//! ```
//!
//! Each maximal run of bar modules inside a glyph becomes one rectangle
//! spanning the full box height. Space runs only move the cursor.
//!
//! The Code128 allowance is 11 modules but only 10 are consumed on the left,
//! leaving one module of slack on the right.

use super::BarcodeType;
use super::encode::{code128_glyphs, ean13_glyphs, upca_glyphs};
use super::tables::EAN_TOTAL_MODULES;
use super::validate;

/// Modules reserved in the Code128 width calculation beyond the glyphs.
pub const CODE128_QUIET_ALLOWANCE: usize = 11;
/// Modules skipped before the first Code128 glyph.
pub const CODE128_LEFT_QUIET: usize = 10;

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The area a barcode is fitted into.
pub type BoundingBox = Rect;

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if both dimensions are strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Drawing surface capability consumed by [`draw`].
///
/// Implementations are sequential and append-only; the engine never reads
/// back from the canvas.
pub trait Canvas {
    /// Push the graphics state.
    fn save_state(&mut self);
    /// Pop the graphics state pushed by the matching `save_state`.
    fn restore_state(&mut self);
    /// Fill an axis-aligned rectangle with the current fill colour.
    fn fill_rect(&mut self, rect: Rect);
}

/// Glyph patterns for already-validated input.
fn glyphs(kind: BarcodeType, text: &str) -> Vec<&'static str> {
    match kind {
        BarcodeType::Code128 => code128_glyphs(text),
        BarcodeType::Ean13 => ean13_glyphs(text),
        BarcodeType::UpcA => upca_glyphs(text),
    }
}

/// Lay out glyph patterns starting at `x`, merging consecutive bars.
///
/// Returns the rectangles in left-to-right order.
pub fn layout_glyphs(glyphs: &[&str], x: f32, y: f32, module_width: f32, height: f32) -> Vec<Rect> {
    let mut rects = Vec::new();
    let mut cursor = x;

    for glyph in glyphs {
        let modules = glyph.as_bytes();
        let mut j = 0;
        while j < modules.len() {
            if modules[j] != b'1' {
                j += 1;
                continue;
            }
            let start = j;
            while j < modules.len() && modules[j] == b'1' {
                j += 1;
            }
            rects.push(Rect::new(
                cursor + start as f32 * module_width,
                y,
                (j - start) as f32 * module_width,
                height,
            ));
        }
        cursor += modules.len() as f32 * module_width;
    }

    rects
}

/// Compute the bar rectangles for `text` fitted into `bbox`.
///
/// Empty when the input does not validate or the box is not drawable.
pub fn geometry(kind: BarcodeType, text: &str, bbox: BoundingBox) -> Vec<Rect> {
    if !bbox.is_drawable() || !validate(kind, text) {
        return Vec::new();
    }

    let glyphs = glyphs(kind, text);
    let (total_modules, quiet) = match kind {
        BarcodeType::Code128 => (
            glyphs.iter().map(|g| g.len()).sum::<usize>() + CODE128_QUIET_ALLOWANCE,
            CODE128_LEFT_QUIET,
        ),
        BarcodeType::Ean13 | BarcodeType::UpcA => (EAN_TOTAL_MODULES, 0),
    };

    let module_width = bbox.width / total_modules as f32;
    let start_x = bbox.x + quiet as f32 * module_width;
    layout_glyphs(&glyphs, start_x, bbox.y, module_width, bbox.height)
}

/// Draw a barcode onto `canvas`, bracketed by save/restore.
///
/// Does nothing (not even the save/restore pair) for invalid input or a
/// non-positive box.
pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, bbox: BoundingBox, kind: BarcodeType, text: &str) {
    let rects = geometry(kind, text, bbox);
    if rects.is_empty() {
        return;
    }
    tracing::debug!(kind = kind.name(), rects = rects.len(), "drawing barcode");

    canvas.save_state();
    for rect in rects {
        canvas.fill_rect(rect);
    }
    canvas.restore_state();
}
