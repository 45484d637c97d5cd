//! # CSV Data Source
//!
//! Row data for label generation. The first line names the columns; every
//! following non-blank line is one label.
//!
//! ## Format
//!
//! - Fields are separated by `,`
//! - A field may be quoted with `"`; inside quotes `""` is a literal quote
//!   and commas do not split
//! - Whitespace before a field is skipped; unquoted fields are right-trimmed
//! - Lines containing only whitespace and commas are ignored
//! - Short rows are padded with empty strings, extra fields are dropped
//!
//! ```
//! use labelgen::data::CsvData;
//!
//! let csv = CsvData::parse("sku,name\nA-1,\"Bolt, M6\"\n").unwrap();
//! assert_eq!(csv.get(0, "name"), Some("Bolt, M6"));
//! ```

use std::path::Path;

use crate::error::{LabelError, Result};

/// Maximum number of columns read from the header.
pub const MAX_CSV_FIELDS: usize = 256;

/// Maximum number of data rows read from a file.
pub const MAX_CSV_ROWS: usize = 100_000;

/// Parsed CSV table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvData {
    /// Column names from the header line.
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` long.
    pub rows: Vec<Vec<String>>,
}

impl CsvData {
    /// Read and parse a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse CSV text.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input.lines().enumerate();

        let Some((_, header_line)) = lines.next() else {
            return Err(LabelError::Csv {
                line: 1,
                message: "file is empty".into(),
            });
        };

        let mut headers = split_record(header_line);
        if headers.len() > MAX_CSV_FIELDS {
            tracing::warn!(
                columns = headers.len(),
                max = MAX_CSV_FIELDS,
                "too many CSV columns, ignoring the rest"
            );
            headers.truncate(MAX_CSV_FIELDS);
        }

        let mut rows = Vec::new();
        for (index, line) in lines {
            if is_blank(line) {
                continue;
            }
            if rows.len() == MAX_CSV_ROWS {
                tracing::warn!(line = index + 1, max = MAX_CSV_ROWS, "CSV row limit reached");
                break;
            }
            let mut row = split_record(line);
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Index of the column called `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Value of column `name` in data row `row`.
    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let col = self.column(name)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c.is_whitespace() || c == ',')
}

/// Split one CSV line into fields.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}

        let mut field = String::new();
        if chars.next_if_eq(&'"').is_some() {
            while let Some(c) = chars.next() {
                if c != '"' {
                    field.push(c);
                } else if chars.next_if_eq(&'"').is_some() {
                    field.push('"');
                } else {
                    break;
                }
            }
            // Anything between the closing quote and the separator is dropped
            while chars.next_if(|c| *c != ',').is_some() {}
        } else {
            while let Some(c) = chars.next_if(|c| *c != ',') {
                field.push(c);
            }
            field.truncate(field.trim_end().len());
        }
        fields.push(field);

        // Consume the separator; end of line ends the record
        if chars.next().is_none() {
            break;
        }
    }

    fields
}
