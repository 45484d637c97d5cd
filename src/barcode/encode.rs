//! # Encoders
//!
//! Turn validated input into the ordered list of glyph patterns drawn
//! left-to-right.
//!
//! ## Code128
//!
//! Set B only. The symbol sequence is:
//!
//! ```text
//! [START_B] [data...] [checksum] [STOP]
//! ```
//!
//! Bytes outside printable ASCII (32..=126) become a space glyph (value 0).
//!
//! ## EAN-13 / UPC-A
//!
//! ```text
//! 101 | 6 left digits (A/B by parity of digit 0) | 01010 | 6 right digits | 101
//! ```
//!
//! UPC-A is EAN-13 with a leading `'0'`.

use super::checksum;
use super::tables::{
    CODE128_PATTERNS, CODE128_START_B, CODE128_STOP, EAN_CENTER_GUARD, EAN_LEFT_PATTERNS,
    EAN_PARITY, EAN_RIGHT_PATTERNS, EAN_SIDE_GUARD,
};

/// Encode `text` as a Code128 Set B symbol sequence.
///
/// Returns an empty sequence for empty input.
pub fn code128_symbols(text: &str) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut codes = Vec::with_capacity(text.len() + 3);
    codes.push(CODE128_START_B);
    codes.extend(text.bytes().map(|c| match c {
        32..=126 => c - 32,
        _ => 0,
    }));

    let check = checksum::code128(&codes);
    codes.push(check);
    codes.push(CODE128_STOP);
    codes
}

/// Code128 glyph patterns for `text`, in drawing order.
pub fn code128_glyphs(text: &str) -> Vec<&'static str> {
    code128_symbols(text)
        .into_iter()
        .map(|code| CODE128_PATTERNS[code as usize])
        .collect()
}

/// EAN-13 glyph patterns for a validated 13-digit string, guards included.
///
/// Always yields 15 glyphs totalling 95 modules.
pub fn ean13_glyphs(digits: &str) -> Vec<&'static str> {
    let d = digits.as_bytes();
    let parity = EAN_PARITY[(d[0] - b'0') as usize].as_bytes();

    let mut glyphs = Vec::with_capacity(15);
    glyphs.push(EAN_SIDE_GUARD);

    for (i, &c) in d[1..7].iter().enumerate() {
        let set = if parity[i] == b'A' { 0 } else { 1 };
        glyphs.push(EAN_LEFT_PATTERNS[(c - b'0') as usize][set]);
    }

    glyphs.push(EAN_CENTER_GUARD);

    for &c in &d[7..13] {
        glyphs.push(EAN_RIGHT_PATTERNS[(c - b'0') as usize]);
    }

    glyphs.push(EAN_SIDE_GUARD);
    glyphs
}

/// UPC-A glyph patterns for a validated 12-digit string.
pub fn upca_glyphs(digits: &str) -> Vec<&'static str> {
    ean13_glyphs(&format!("0{}", digits))
}
