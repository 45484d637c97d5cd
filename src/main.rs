//! # Labelgen CLI
//!
//! Generate a PDF of labels from a CSV file and a JSON layout.
//!
//! ## Usage
//!
//! ```bash
//! # One label per row, layout from ./config.json, output to ./labels.pdf
//! labelgen items.csv
//!
//! # Custom layout and output
//! labelgen items.csv -c shelf.json -o shelf.pdf
//!
//! # Only row 3 (0-based)
//! labelgen items.csv --row 3
//!
//! # Check a layout without rendering
//! labelgen --validate -c shelf.json
//! ```
//!
//! Set `RUST_LOG=debug` for detailed diagnostics.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use labelgen::{
    CsvData, LabelError, LabelLayout,
    label::{LabelBatch, select_rows},
    layout::{self, generate_hex_code},
};

/// Labelgen - batch label generator
#[derive(Parser, Debug)]
#[command(name = "labelgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file with one label per row (first line is the header)
    #[arg(value_name = "CSV", required_unless_present = "validate")]
    csv: Option<PathBuf>,

    /// JSON layout file
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,

    /// Output PDF file
    #[arg(short, long, value_name = "FILE", default_value = "labels.pdf")]
    output: PathBuf,

    /// Process only this row (0-based; clamped to the last row)
    #[arg(short, long, value_name = "INDEX")]
    row: Option<usize>,

    /// Validate the layout file and exit
    #[arg(long)]
    validate: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LabelError> {
    let cli = Cli::parse();

    if cli.validate {
        return validate(&cli);
    }

    let Some(csv_path) = cli.csv.as_ref() else {
        return Err(LabelError::Config("CSV file is required".into()));
    };

    let csv = CsvData::from_path(csv_path)?;
    println!(
        "Loaded CSV: {} ({} rows, {} columns)",
        csv_path.display(),
        csv.row_count(),
        csv.column_count()
    );
    if csv.row_count() == 0 {
        return Err(LabelError::Csv {
            line: 2,
            message: "no data rows".into(),
        });
    }

    let layout = LabelLayout::from_path(&cli.config)?;
    println!("Using config: {}", cli.config.display());
    println!("Output file: {}", cli.output.display());

    let rows = select_rows(csv.row_count(), cli.row);
    if cli.row.is_some() {
        println!("Processing row {} only", rows.start);
    } else {
        println!("Processing all {} rows", rows.len());
    }

    let mut batch = LabelBatch::new(&layout);
    let mut rng = rand::rng();
    for row in rows {
        let hex_code = generate_hex_code(&mut rng);
        batch.add_label(&csv, row, &hex_code);
        println!("Generated label for row {}", row);
    }

    let count = batch.len();
    batch.save(&cli.output)?;
    println!("Successfully generated: {} with {} labels", cli.output.display(), count);

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), LabelError> {
    println!("Validating config: {}", cli.config.display());
    let report = layout::validate_file(&cli.config)?;

    println!("Fields: {}", report.field_count);
    for font in &report.fonts_ok {
        println!("Font OK: {}", font);
    }
    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }

    if report.warnings.is_empty() {
        println!("Config is valid");
    } else {
        println!("Config is valid with {} warning(s)", report.warnings.len());
    }
    Ok(())
}
