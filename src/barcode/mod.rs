//! # 1D Barcode Engine
//!
//! Encodes text as Code128 (Set B), EAN-13 or UPC-A and renders it as filled
//! rectangles on any [`Canvas`].
//!
//! ## Pipeline
//!
//! ```text
//! (type, text, box) → validate → encode (glyph patterns) → render (rects) → Canvas
//! ```
//!
//! ## Supported Symbologies
//!
//! | Type | Input | Width |
//! |------|-------|-------|
//! | Code128 | any non-empty text, Set B | 11 per symbol + 11 quiet |
//! | EAN-13 | 13 digits, valid check digit | 95 modules |
//! | UPC-A | 12 digits, valid check digit | 95 modules |
//!
//! Invalid input or a degenerate box draws nothing; there is no error path.
//!
//! ## Example
//!
//! ```
//! use labelgen::barcode::{self, BarcodeType, Rect};
//!
//! assert!(barcode::validate(BarcodeType::Ean13, "4006381333931"));
//!
//! let rects = barcode::geometry(BarcodeType::Code128, "AB12", Rect::new(0.0, 0.0, 88.0, 20.0));
//! assert_eq!(rects[0].x, 10.0); // after the left quiet zone
//! ```

pub mod checksum;
pub mod encode;
pub mod render;
pub mod tables;

pub use encode::{code128_symbols, ean13_glyphs, upca_glyphs};
pub use render::{BoundingBox, Canvas, Rect, draw, geometry};

use std::fmt;
use std::str::FromStr;

/// Supported 1D symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarcodeType {
    /// Code128, character set B
    Code128,
    /// EAN-13 (13 digits)
    Ean13,
    /// UPC-A (12 digits)
    UpcA,
}

impl BarcodeType {
    /// Layout type name: `"code128"`, `"ean13"` or `"upca"`.
    pub fn name(self) -> &'static str {
        match self {
            BarcodeType::Code128 => "code128",
            BarcodeType::Ean13 => "ean13",
            BarcodeType::UpcA => "upca",
        }
    }
}

impl fmt::Display for BarcodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type name that does not match any [`BarcodeType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBarcodeType(pub String);

impl fmt::Display for UnknownBarcodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown barcode type '{}'", self.0)
    }
}

impl std::error::Error for UnknownBarcodeType {}

impl FromStr for BarcodeType {
    type Err = UnknownBarcodeType;

    /// Exact, case-sensitive match on the layout type names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code128" => Ok(BarcodeType::Code128),
            "ean13" => Ok(BarcodeType::Ean13),
            "upca" => Ok(BarcodeType::UpcA),
            other => Err(UnknownBarcodeType(other.to_string())),
        }
    }
}

fn all_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

/// Check that `text` can be encoded as `kind`.
///
/// - Code128: non-empty.
/// - EAN-13: 13 ASCII digits with a correct check digit.
/// - UPC-A: 12 ASCII digits with a correct check digit.
pub fn validate(kind: BarcodeType, text: &str) -> bool {
    match kind {
        BarcodeType::Code128 => !text.is_empty(),
        BarcodeType::Ean13 => all_digits(text, 13) && checksum::verify_ean13(text),
        BarcodeType::UpcA => all_digits(text, 12) && checksum::verify_upca(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_known_numbers() {
        assert!(validate(BarcodeType::Ean13, "4006381333931"));
        assert!(validate(BarcodeType::UpcA, "036000291452"));
        assert!(validate(BarcodeType::Code128, "AB12"));
    }

    #[test]
    fn test_validate_rejects() {
        assert!(!validate(BarcodeType::Ean13, "123"));
        assert!(!validate(BarcodeType::UpcA, "036000291450"));
        assert!(!validate(BarcodeType::Code128, ""));
        // Right length, non-digit
        assert!(!validate(BarcodeType::Ean13, "400638133393A"));
        assert!(!validate(BarcodeType::UpcA, "03600029145 "));
        // EAN-13 number presented as UPC-A and vice versa
        assert!(!validate(BarcodeType::UpcA, "4006381333931"));
        assert!(!validate(BarcodeType::Ean13, "036000291452"));
    }

    #[test]
    fn test_validate_ean13_exhaustive_check_digit() {
        // Exactly one of the ten possible check digits is accepted
        for body in ["400638133393", "590123412345", "000000000000", "978020137962"] {
            let accepted: Vec<char> = ('0'..='9')
                .filter(|&c| validate(BarcodeType::Ean13, &format!("{}{}", body, c)))
                .collect();
            assert_eq!(accepted.len(), 1, "body {}", body);
            let expected = (b'0' + checksum::ean13(body.as_bytes())) as char;
            assert_eq!(accepted[0], expected);
        }
    }

    #[test]
    fn test_validate_upca_exhaustive_check_digit() {
        for body in ["03600029145", "01234567890", "72527273070"] {
            let accepted: Vec<char> = ('0'..='9')
                .filter(|&c| validate(BarcodeType::UpcA, &format!("{}{}", body, c)))
                .collect();
            assert_eq!(accepted.len(), 1, "body {}", body);
        }
    }

    #[test]
    fn test_validate_code128_any_bytes() {
        assert!(validate(BarcodeType::Code128, " "));
        assert!(validate(BarcodeType::Code128, "\u{1}ünïcode"));
    }

    #[test]
    fn test_type_names() {
        for kind in [BarcodeType::Code128, BarcodeType::Ean13, BarcodeType::UpcA] {
            assert_eq!(kind.name().parse::<BarcodeType>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(
            "qr".parse::<BarcodeType>(),
            Err(UnknownBarcodeType("qr".into()))
        );
        // Names are case-sensitive
        assert!("EAN13".parse::<BarcodeType>().is_err());
    }
}
