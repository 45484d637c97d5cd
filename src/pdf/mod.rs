//! # PDF Output
//!
//! printpdf 0.8 builds documents from plain data: each page is a
//! `Vec<Op>`. [`PdfCanvas`] accumulates those ops for one label page and
//! implements the barcode [`Canvas`] so barcodes and QR codes draw
//! straight into it.
//!
//! All coordinates are points from the bottom-left of the page.

pub mod fonts;
pub mod metrics;
pub mod page;
pub mod text;

pub use fonts::{FontBook, FontRef, builtin_font};
pub use metrics::Metrics;
pub use page::{Orientation, PageSize, dimensions_pt, pt_to_mm};
pub use text::{Alignment, PlacedText, TextBox};

use printpdf::{
    Line, LinePoint, Mm, Op, PaintMode, PdfPage, Point, Polygon, PolygonRing, Pt, TextItem,
    WindingOrder,
};

use crate::barcode::{Canvas, Rect};
use crate::layout::Segment;

fn point(x: f32, y: f32) -> LinePoint {
    LinePoint {
        p: Point { x: Pt(x), y: Pt(y) },
        bezier: false,
    }
}

/// Operation list for one page.
#[derive(Debug, Default)]
pub struct PdfCanvas {
    ops: Vec<Op>,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ops recorded so far.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Set the stroke width for following lines.
    pub fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(width) });
    }

    /// Stroke a straight line segment at its own width.
    pub fn stroke_line(&mut self, segment: &Segment) {
        let (x1, y1) = segment.start;
        let (x2, y2) = segment.end;
        self.set_line_width(segment.width);
        self.ops.push(Op::DrawLine {
            line: Line {
                points: vec![point(x1, y1), point(x2, y2)],
                is_closed: false,
            },
        });
    }

    /// Write laid-out text lines in `font`.
    pub fn text(&mut self, placed: &PlacedText, font: &FontRef) {
        for line in &placed.lines {
            self.ops.push(Op::StartTextSection);
            self.ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Pt(line.x),
                    y: Pt(line.y),
                },
            });
            let items = vec![TextItem::Text(line.text.clone())];
            match font {
                FontRef::Builtin(font) => {
                    self.ops.push(Op::SetFontSizeBuiltinFont {
                        size: Pt(placed.font_size),
                        font: *font,
                    });
                    self.ops.push(Op::WriteTextBuiltinFont { items, font: *font });
                }
                FontRef::External(id) => {
                    self.ops.push(Op::SetFontSize {
                        size: Pt(placed.font_size),
                        font: id.clone(),
                    });
                    self.ops.push(Op::WriteText {
                        items,
                        font: id.clone(),
                    });
                }
            }
            self.ops.push(Op::EndTextSection);
        }
    }

    /// Finish the canvas as a page of the given size in points.
    pub fn into_page(self, width_pt: f32, height_pt: f32) -> PdfPage {
        PdfPage::new(Mm(pt_to_mm(width_pt)), Mm(pt_to_mm(height_pt)), self.ops)
    }
}

impl Canvas for PdfCanvas {
    fn save_state(&mut self) {
        self.ops.push(Op::SaveGraphicsState);
    }

    fn restore_state(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }

    fn fill_rect(&mut self, rect: Rect) {
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);
        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing {
                    points: vec![point(x0, y0), point(x1, y0), point(x1, y1), point(x0, y1)],
                }],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        });
    }
}
