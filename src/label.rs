//! # Label Composition
//!
//! One page per CSV row. Elements are drawn in a fixed order so later ones
//! paint over earlier ones:
//!
//! ```text
//! 1. lines      (each at its own width)
//! 2. QR code    (if present, enabled and non-empty)
//! 3. barcodes   (unknown type or invalid data: warn and skip)
//! 4. fields     (boxes without area are skipped)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use labelgen::{CsvData, LabelLayout, label};
//!
//! let csv = CsvData::from_path("items.csv")?;
//! let layout = LabelLayout::from_path("config.json")?;
//! let pdf = label::generate(&csv, &layout, None, &mut rand::rng());
//! std::fs::write("labels.pdf", pdf)?;
//! # Ok::<(), labelgen::LabelError>(())
//! ```

use std::ops::Range;
use std::path::Path;

use printpdf::{PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg};
use rand::Rng;

use crate::barcode::{self, BarcodeType, BoundingBox};
use crate::data::CsvData;
use crate::error::Result;
use crate::layout::{BarcodePlacement, Field, LabelLayout, RowContext, generate_hex_code};
use crate::pdf::{FontBook, PdfCanvas, TextBox, dimensions_pt, text};
use crate::qr;

/// Rows to render: all of them, or just `requested` clamped to the last row.
pub fn select_rows(row_count: usize, requested: Option<usize>) -> Range<usize> {
    match requested {
        None => 0..row_count,
        Some(_) if row_count == 0 => 0..0,
        Some(row) if row >= row_count => {
            tracing::warn!(row, last = row_count - 1, "row beyond CSV row count, using last row");
            row_count - 1..row_count
        }
        Some(row) => row..row + 1,
    }
}

// ============================================================================
// PAGE COMPOSITION
// ============================================================================

/// Draw one label for `ctx` onto a fresh canvas.
pub fn compose(layout: &LabelLayout, fonts: &FontBook, ctx: &RowContext<'_>) -> PdfCanvas {
    let mut canvas = PdfCanvas::new();
    canvas.set_line_width(layout.page.line_width());

    for line in &layout.lines {
        canvas.stroke_line(&line.segment());
    }

    if let Some(qr_config) = layout.qr_code.as_ref().filter(|q| q.enabled) {
        let text = ctx.resolve(&qr_config.text);
        qr::draw(&mut canvas, &text, qr_config.x, qr_config.y, qr_config.size);
    }

    for placement in &layout.barcodes {
        draw_barcode(&mut canvas, placement, ctx);
    }

    for field in &layout.fields {
        draw_field(&mut canvas, field, fonts, ctx);
    }

    canvas
}

fn draw_barcode(canvas: &mut PdfCanvas, placement: &BarcodePlacement, ctx: &RowContext<'_>) {
    let kind: BarcodeType = match placement.kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            tracing::warn!(error = %e, "skipping barcode");
            return;
        }
    };

    let text = ctx.resolve(&placement.text);
    if !barcode::validate(kind, &text) {
        tracing::warn!(kind = kind.name(), text = %text, "invalid barcode data, skipping");
        return;
    }

    let bbox = BoundingBox::new(placement.x, placement.y, placement.width, placement.height);
    barcode::draw(canvas, bbox, kind, &text);
}

fn draw_field(canvas: &mut PdfCanvas, field: &Field, fonts: &FontBook, ctx: &RowContext<'_>) {
    if !field.has_area() {
        return;
    }

    let content = ctx.resolve_truncated(&field.text, field.max_length());
    let font = fonts.resolve(field.font_name.as_deref());
    let bx = TextBox {
        x_start: field.x_start,
        x_end: field.x_end,
        y_start: field.y_start,
        y_end: field.y_end,
    };

    let metrics = font.metrics();
    let placed = if field.wrap {
        match text::wrapped(&bx, &content, field.font_size, field.alignment(), metrics) {
            Some(placed) => placed,
            None => return,
        }
    } else {
        text::single_line(&bx, &content, field.font_size, field.alignment(), metrics)
    };
    canvas.text(&placed, &font);
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// A PDF document being filled with labels.
pub struct LabelBatch<'a> {
    layout: &'a LabelLayout,
    doc: PdfDocument,
    fonts: FontBook,
    pages: Vec<PdfPage>,
    page_size: (f32, f32),
}

impl<'a> LabelBatch<'a> {
    /// Start a document for `layout`, embedding its custom fonts.
    pub fn new(layout: &'a LabelLayout) -> Self {
        let mut doc = PdfDocument::new("Labels");
        let fonts = FontBook::load(&layout.fonts, &mut doc);
        let page_size = dimensions_pt(layout.page.page_size(), layout.page.orientation());
        Self {
            layout,
            doc,
            fonts,
            pages: Vec::new(),
            page_size,
        }
    }

    /// Add the label for one CSV row.
    pub fn add_label(&mut self, csv: &CsvData, row: usize, hex_code: &str) {
        let ctx = RowContext::new(csv, row, hex_code);
        let canvas = compose(self.layout, &self.fonts, &ctx);
        let (width, height) = self.page_size;
        self.pages.push(canvas.into_page(width, height));
    }

    /// Labels added so far.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Serialize the document.
    pub fn finish(self) -> Vec<u8> {
        let Self { mut doc, pages, .. } = self;
        let count = pages.len();
        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        tracing::debug!(pages = count, bytes = bytes.len(), warnings = warnings.len(), "PDF serialized");
        bytes
    }

    /// Serialize the document to `path`.
    pub fn save(self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.finish();
        std::fs::write(path.as_ref(), &bytes)?;
        tracing::info!(path = %path.as_ref().display(), bytes = bytes.len(), "wrote PDF");
        Ok(())
    }
}

/// Render the selected rows into PDF bytes, with one random code per label.
pub fn generate<R: Rng + ?Sized>(
    csv: &CsvData,
    layout: &LabelLayout,
    row: Option<usize>,
    rng: &mut R,
) -> Vec<u8> {
    let mut batch = LabelBatch::new(layout);
    for index in select_rows(csv.row_count(), row) {
        let hex_code = generate_hex_code(rng);
        batch.add_label(csv, index, &hex_code);
    }
    batch.finish()
}
