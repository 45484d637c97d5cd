//! # Text Boxes
//!
//! Places text inside a field's box. Two modes:
//!
//! - **single line**: baseline at `y_end - font_size - 5`, no clipping
//! - **wrapped**: words are flowed into lines; the font shrinks in 1pt
//!   steps (not below 6pt) until all lines fit, then lines are placed
//!   top-down and anything below the bottom padding is dropped
//!
//! Widths come from [`Metrics`]: per-glyph tables for the standard fonts,
//! an average estimate otherwise.

use super::metrics::Metrics;

/// Padding inside every text box, in points.
pub const PADDING: f32 = 5.0;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.2;
/// Smallest size wrapped text is shrunk to.
pub const MIN_FONT_SIZE: f32 = 6.0;

/// Horizontal alignment of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A box in page coordinates given by its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub x_start: f32,
    pub x_end: f32,
    pub y_start: f32,
    pub y_end: f32,
}

/// One positioned line of text (baseline origin).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Text laid out in a box at a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub font_size: f32,
    pub lines: Vec<PlacedLine>,
}

/// Advance width of `text` at `size` points.
pub fn text_width(text: &str, size: f32, metrics: Metrics) -> f32 {
    let units: u32 = text.chars().map(|c| metrics.advance(c) as u32).sum();
    units as f32 * size / 1000.0
}

fn aligned_x(bx: &TextBox, inner_width: f32, line_width: f32, align: Alignment) -> f32 {
    match align {
        Alignment::Left => bx.x_start + PADDING,
        Alignment::Center => bx.x_start + PADDING + (inner_width - line_width) / 2.0,
        Alignment::Right => bx.x_end - PADDING - line_width,
    }
}

/// Lay out `text` on a single line.
pub fn single_line(
    bx: &TextBox,
    text: &str,
    font_size: f32,
    align: Alignment,
    metrics: Metrics,
) -> PlacedText {
    let inner_width = bx.x_end - bx.x_start - 2.0 * PADDING;
    let line_width = text_width(text, font_size, metrics);
    PlacedText {
        font_size,
        lines: vec![PlacedLine {
            x: aligned_x(bx, inner_width, line_width, align),
            y: bx.y_end - font_size - PADDING,
            text: text.to_string(),
        }],
    }
}

/// Greedily flow words into lines no wider than `max_width`.
///
/// A word wider than `max_width` gets a line of its own.
fn flow(words: &[&str], size: f32, max_width: f32, metrics: Metrics) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in words {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if text_width(&candidate, size, metrics) > max_width {
            lines.push(std::mem::replace(&mut current, (*word).to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lay out `text` wrapped inside the box, shrinking the font to fit.
///
/// Returns `None` when the padded box has no room at all.
pub fn wrapped(
    bx: &TextBox,
    text: &str,
    font_size: f32,
    align: Alignment,
    metrics: Metrics,
) -> Option<PlacedText> {
    let inner_width = bx.x_end - bx.x_start - 2.0 * PADDING;
    let inner_height = bx.y_end - bx.y_start - 2.0 * PADDING;
    if inner_width <= 0.0 || inner_height <= 0.0 || font_size <= 0.0 {
        return None;
    }

    let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();

    let mut size = font_size;
    let mut lines = flow(&words, size, inner_width, metrics);
    while size - 1.0 >= MIN_FONT_SIZE && lines.len() as f32 * size * LINE_HEIGHT > inner_height {
        size -= 1.0;
        lines = flow(&words, size, inner_width, metrics);
    }

    let line_height = size * LINE_HEIGHT;
    let bottom = bx.y_start + PADDING;
    let mut y = bx.y_end - PADDING - size;
    let mut placed = Vec::with_capacity(lines.len());
    for line in lines {
        if y < bottom {
            break;
        }
        let x = aligned_x(bx, inner_width, text_width(&line, size, metrics), align);
        placed.push(PlacedLine { x, y, text: line });
        y -= line_height;
    }

    Some(PlacedText {
        font_size: size,
        lines: placed,
    })
}
