//! # End-to-End Label Tests
//!
//! Load a CSV and a JSON layout from disk, render every supported element
//! and check the resulting PDF.

use std::fs;

use labelgen::barcode::{self, BarcodeType, Rect};
use labelgen::label::{self, LabelBatch};
use labelgen::layout::{self, generate_hex_code};
use labelgen::{CsvData, LabelLayout};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

const CSV: &str = "\
sku,name,ean,upc
SKU-001,\"Hexagon bolt, M6\",4006381333931,036000291452
SKU-002,Washer,5901234123457,042100005264

SKU-003,Nut with a name long enough to wrap,0000000000000,012345678905
";

const LAYOUT: &str = r#"{
    "page": {"size": "A4", "orientation": "landscape", "line_width": 2},
    "fonts": {"default": "Helvetica-Bold"},
    "fields": [
        {"x_start": 20, "x_end": 400, "y_start": 500, "y_end": 560, "font_size": 24,
         "text": "$name", "wrap": true, "align": "center"},
        {"x_start": 20, "x_end": 400, "y_start": 460, "y_end": 490, "font_size": 12,
         "text": "$sku", "font_name": "Courier", "max_length": 7},
        {"x_start": 420, "x_end": 800, "y_start": 460, "y_end": 490, "font_size": 10,
         "text": "HEX_CODE", "align": "right"}
    ],
    "lines": [
        {"type": "horizontal_transform", "y": 450, "width": 1.5},
        {"x_start": 410, "y_start": 20, "x_end": 410, "y_end": 440}
    ],
    "qr_code": {"x": 600, "y": 200, "size": 120, "text": "$sku"},
    "barcodes": [
        {"x": 20, "y": 300, "width": 300, "height": 80, "type": "code128", "text": "$sku"},
        {"x": 20, "y": 180, "width": 190, "height": 80, "type": "ean13", "text": "$ean"},
        {"x": 20, "y": 60, "width": 190, "height": 80, "type": "upca", "text": "$upc"},
        {"x": 250, "y": 60, "width": 100, "height": 80, "type": "itf", "text": "123"}
    ]
}"#;

fn write_inputs(dir: &tempfile::TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let csv_path = dir.path().join("items.csv");
    let config_path = dir.path().join("config.json");
    fs::write(&csv_path, CSV).unwrap();
    fs::write(&config_path, LAYOUT).unwrap();
    (csv_path, config_path)
}

#[test]
fn test_full_pipeline_writes_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let (csv_path, config_path) = write_inputs(&dir);

    let csv = CsvData::from_path(&csv_path).unwrap();
    assert_eq!(csv.row_count(), 3);
    assert_eq!(csv.get(0, "name"), Some("Hexagon bolt, M6"));

    let layout = LabelLayout::from_path(&config_path).unwrap();
    assert_eq!(layout.barcodes.len(), 4);

    let mut batch = LabelBatch::new(&layout);
    let mut rng = StdRng::seed_from_u64(42);
    for row in label::select_rows(csv.row_count(), None) {
        batch.add_label(&csv, row, &generate_hex_code(&mut rng));
    }
    assert_eq!(batch.len(), 3);

    let output = dir.path().join("labels.pdf");
    batch.save(&output).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_single_row_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let (csv_path, config_path) = write_inputs(&dir);
    let csv = CsvData::from_path(&csv_path).unwrap();
    let layout = LabelLayout::from_path(&config_path).unwrap();

    assert_eq!(label::select_rows(csv.row_count(), Some(99)), 2..3);

    let mut rng = StdRng::seed_from_u64(7);
    let bytes = label::generate(&csv, &layout, Some(99), &mut rng);
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_validate_layout_file() {
    let dir = tempfile::tempdir().unwrap();
    let (_, config_path) = write_inputs(&dir);
    let report = layout::validate_file(&config_path).unwrap();
    assert_eq!(report.field_count, 3);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_barcode_engine_public_surface() {
    assert!(barcode::validate(BarcodeType::UpcA, "036000291452"));
    assert!(!barcode::validate(BarcodeType::Ean13, "4006381333932"));
    assert_eq!(barcode::code128_symbols("AB12"), vec![104, 33, 34, 17, 18, 19, 106]);
    assert_eq!("upca".parse::<BarcodeType>().unwrap(), BarcodeType::UpcA);

    let bbox = Rect::new(0.0, 0.0, 95.0, 10.0);
    let rects = barcode::geometry(BarcodeType::Ean13, "4006381333931", bbox);
    assert_eq!(rects.first().map(|r| r.x), Some(0.0));
    assert!(barcode::geometry(BarcodeType::Ean13, "400638133393", bbox).is_empty());
}
