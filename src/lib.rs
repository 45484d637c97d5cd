//! # Labelgen - Batch Label Generator
//!
//! Labelgen turns a CSV table and a JSON layout into a PDF with one label
//! page per row. It provides:
//!
//! - **Barcodes**: Code128 (Set B), EAN-13 and UPC-A encoding and rendering
//! - **QR codes**: via the `qrcode` crate
//! - **Layout**: text fields with wrapping and alignment, lines, custom fonts
//! - **Data binding**: `$column` references and per-label random codes
//!
//! ## Quick Start
//!
//! ```no_run
//! use labelgen::{CsvData, LabelLayout, label::LabelBatch, layout::generate_hex_code};
//!
//! let csv = CsvData::from_path("items.csv")?;
//! let layout = LabelLayout::from_path("config.json")?;
//!
//! let mut batch = LabelBatch::new(&layout);
//! let mut rng = rand::rng();
//! for row in 0..csv.row_count() {
//!     batch.add_label(&csv, row, &generate_hex_code(&mut rng));
//! }
//! batch.save("labels.pdf")?;
//!
//! # Ok::<(), labelgen::LabelError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`barcode`] | 1D symbology tables, checksums, encoding, rendering |
//! | [`data`] | CSV loading |
//! | [`layout`] | JSON layout model and per-row text resolution |
//! | [`qr`] | QR code rendering |
//! | [`pdf`] | Page sizes, fonts, text boxes, PDF canvas |
//! | [`label`] | Page composition and document output |
//! | [`error`] | Error types |

pub mod barcode;
pub mod data;
pub mod error;
pub mod label;
pub mod layout;
pub mod pdf;
pub mod qr;

// Re-exports for convenience
pub use barcode::BarcodeType;
pub use data::CsvData;
pub use error::{LabelError, Result};
pub use layout::LabelLayout;
