//! # QR Codes
//!
//! Renders a QR code as filled squares inside a `size × size` box whose
//! bottom-left corner is `(x, y)`. Module row 0 is the top of the box.
//! Adjacent dark modules in a row are merged into one rectangle.
//!
//! Error correction level M is used. Anything that cannot be encoded is
//! skipped with a warning; a label never fails because of its QR code.

use qrcode::{Color, EcLevel, QrCode};

use crate::barcode::{Canvas, Rect};

/// Compute dark-module rectangles for `text`.
///
/// `None` for empty text, a non-positive size, or text too long to encode.
pub fn qr_cells(text: &str, x: f32, y: f32, size: f32) -> Option<Vec<Rect>> {
    if text.is_empty() || size <= 0.0 {
        return None;
    }

    let code = match QrCode::with_error_correction_level(text, EcLevel::M) {
        Ok(code) => code,
        Err(e) => {
            tracing::warn!(error = %e, len = text.len(), "QR encoding failed");
            return None;
        }
    };

    let width = code.width();
    let cell = size / width as f32;
    let mut rects = Vec::new();

    for row in 0..width {
        let cell_y = y + size - (row + 1) as f32 * cell;
        let mut col = 0;
        while col < width {
            if code[(col, row)] != Color::Dark {
                col += 1;
                continue;
            }
            let start = col;
            while col < width && code[(col, row)] == Color::Dark {
                col += 1;
            }
            rects.push(Rect::new(
                x + start as f32 * cell,
                cell_y,
                (col - start) as f32 * cell,
                cell,
            ));
        }
    }

    Some(rects)
}

/// Draw a QR code onto `canvas`. Returns false if nothing was drawn.
pub fn draw<C: Canvas + ?Sized>(canvas: &mut C, text: &str, x: f32, y: f32, size: f32) -> bool {
    let Some(rects) = qr_cells(text, x, y, size) else {
        return false;
    };

    canvas.save_state();
    for rect in rects {
        canvas.fill_rect(rect);
    }
    canvas.restore_state();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[derive(Default)]
    struct Count {
        saves: usize,
        restores: usize,
        fills: usize,
    }

    impl Canvas for Count {
        fn save_state(&mut self) {
            self.saves += 1;
        }
        fn restore_state(&mut self) {
            self.restores += 1;
        }
        fn fill_rect(&mut self, _rect: Rect) {
            self.fills += 1;
        }
    }

    #[test]
    fn test_finder_patterns_at_top_and_bottom() {
        // "HELLO" at level M is version 1: 21 × 21 modules
        let rects = qr_cells("HELLO", 50.0, 20.0, 105.0).unwrap();
        let cell = 105.0 / 21.0;

        // Top row starts with the 7-module finder edge
        let top = rects[0];
        assert!((top.x - 50.0).abs() < EPS);
        assert!((top.y - (20.0 + 105.0 - cell)).abs() < EPS);
        assert!((top.width - 7.0 * cell).abs() < EPS);

        // Bottom row also starts with a finder edge, sitting on y
        let bottom = rects
            .iter()
            .find(|r| (r.y - 20.0).abs() < EPS)
            .unwrap();
        assert!((bottom.x - 50.0).abs() < EPS);
        assert!((bottom.width - 7.0 * cell).abs() < EPS);
    }

    #[test]
    fn test_cells_stay_inside_box() {
        let rects = qr_cells("https://example.com/item/42", 10.0, 10.0, 80.0).unwrap();
        for r in &rects {
            assert!(r.x >= 10.0 - EPS && r.x + r.width <= 90.0 + EPS);
            assert!(r.y >= 10.0 - EPS && r.y + r.height <= 90.0 + EPS);
        }
    }

    #[test]
    fn test_skipped_inputs() {
        assert!(qr_cells("", 0.0, 0.0, 100.0).is_none());
        assert!(qr_cells("abc", 0.0, 0.0, 0.0).is_none());
        assert!(qr_cells(&"x".repeat(5000), 0.0, 0.0, 100.0).is_none());
    }

    #[test]
    fn test_draw_brackets() {
        let mut canvas = Count::default();
        assert!(draw(&mut canvas, "ABC123", 0.0, 0.0, 50.0));
        assert_eq!((canvas.saves, canvas.restores), (1, 1));
        assert!(canvas.fills > 0);

        let mut canvas = Count::default();
        assert!(!draw(&mut canvas, "", 0.0, 0.0, 50.0));
        assert_eq!(canvas.saves + canvas.restores + canvas.fills, 0);
    }
}
