//! # Symbology Tables
//!
//! Module patterns for Code128 and EAN-13, as published in the symbology
//! standards. Every pattern is a string over `'1'` (bar) and `'0'` (space).
//!
//! | Table | Entries | Pattern width |
//! |-------|---------|---------------|
//! | [`CODE128_PATTERNS`] | 107 | 11 |
//! | [`EAN_LEFT_PATTERNS`] | 10 × (A, B) | 7 |
//! | [`EAN_RIGHT_PATTERNS`] | 10 | 7 |
//! | [`EAN_PARITY`] | 10 | 6 letters |
//!
//! The stop entry (index 106) is stored without the trailing 2-module
//! termination bar, so every Code128 entry is exactly 11 modules wide.

/// Code128 Start A symbol value.
pub const CODE128_START_A: u8 = 103;
/// Code128 Start B symbol value.
pub const CODE128_START_B: u8 = 104;
/// Code128 Start C symbol value.
pub const CODE128_START_C: u8 = 105;
/// Code128 Stop symbol value.
pub const CODE128_STOP: u8 = 106;

/// Modulus of the Code128 checksum.
pub const CODE128_MODULUS: u32 = 103;

/// Code128 module patterns, indexed by symbol value (0..=106).
pub const CODE128_PATTERNS: [&str; 107] = [
    "11011001100", "11001101100", "11001100110", "10010011000", "10010001100",
    "10001001100", "10011001000", "10011000100", "10001100100", "11001001000",
    "11001000100", "11000100100", "10110011100", "10011011100", "10011001110",
    "10111001100", "10011101100", "10011100110", "11001110010", "11001011100",
    "11001001110", "11011100100", "11001110100", "11101101110", "11101001100",
    "11100101100", "11100100110", "11101100100", "11100110100", "11100110010",
    "11011011000", "11011000110", "11000110110", "10100011000", "10001011000",
    "10001000110", "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110", "10001101110",
    "10111011000", "10111000110", "10001110110", "11101110110", "11010001110",
    "11000101110", "11011101000", "11011100010", "11011101110", "11101011000",
    "11101000110", "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000", "10100001100",
    "10010110000", "10010000110", "10000101100", "10000100110", "10110010000",
    "10110000100", "10011010000", "10011000010", "10000110100", "10000110010",
    "11000010010", "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100", "10011110100",
    "10011110010", "11110100100", "11110010100", "11110010010", "11011011110",
    "11011110110", "11110110110", "10101111000", "10100011110", "10001011110",
    "10111101000", "10111100010", "11110101000", "11110100010", "10111011110",
    "10111101110", "11101011110", "11110101110", "11010000100", "11010010000",
    "11010011100", "11000111010",
];

/// EAN-13 left-hand patterns: `[digit][0]` is the A (odd parity) set,
/// `[digit][1]` the B (even parity) set.
pub const EAN_LEFT_PATTERNS: [[&str; 2]; 10] = [
    ["0001101", "0100111"],
    ["0011001", "0110011"],
    ["0010011", "0011011"],
    ["0111101", "0100001"],
    ["0100011", "0011101"],
    ["0110001", "0111001"],
    ["0101111", "0000101"],
    ["0111011", "0010001"],
    ["0110111", "0001001"],
    ["0001011", "0010111"],
];

/// EAN-13 right-hand (C set) patterns, indexed by digit.
pub const EAN_RIGHT_PATTERNS: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100",
    "1001110", "1010000", "1000100", "1001000", "1110100",
];

/// Parity selector for the six left-hand digits, indexed by the first digit.
pub const EAN_PARITY: [&str; 10] = [
    "AAAAAA", "AABABB", "AABBAB", "AABBBA", "ABAABB",
    "ABBAAB", "ABBBAA", "ABABAB", "ABABBA", "ABBABA",
];

/// Start and end guard of an EAN-13 symbol.
pub const EAN_SIDE_GUARD: &str = "101";
/// Center guard of an EAN-13 symbol.
pub const EAN_CENTER_GUARD: &str = "01010";

/// Total width of an EAN-13 / UPC-A symbol in modules.
pub const EAN_TOTAL_MODULES: usize = 95;

#[cfg(test)]
mod tests {
    use super::*;

    fn is_module_string(p: &str) -> bool {
        p.bytes().all(|b| b == b'0' || b == b'1')
    }

    #[test]
    fn test_code128_patterns_are_eleven_modules() {
        for (i, p) in CODE128_PATTERNS.iter().enumerate() {
            assert_eq!(p.len(), 11, "pattern {} has wrong width", i);
            assert!(is_module_string(p));
            // Every Code128 glyph starts with a bar and ends with a space
            assert!(p.starts_with('1'));
            assert!(p.ends_with('0'));
        }
    }

    #[test]
    fn test_code128_patterns_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in CODE128_PATTERNS {
            assert!(seen.insert(p), "duplicate pattern {}", p);
        }
    }

    #[test]
    fn test_code128_special_codes() {
        assert_eq!(CODE128_PATTERNS[CODE128_START_A as usize], "11010000100");
        assert_eq!(CODE128_PATTERNS[CODE128_START_B as usize], "11010010000");
        assert_eq!(CODE128_PATTERNS[CODE128_START_C as usize], "11010011100");
        assert_eq!(CODE128_PATTERNS[CODE128_STOP as usize], "11000111010");
    }

    #[test]
    fn test_ean_patterns_are_seven_modules() {
        for digit in 0..10 {
            for p in EAN_LEFT_PATTERNS[digit]
                .iter()
                .chain(std::iter::once(&EAN_RIGHT_PATTERNS[digit]))
            {
                assert_eq!(p.len(), 7);
                assert!(is_module_string(p));
            }
            // Left-hand glyphs start with a space, right-hand with a bar
            assert!(EAN_LEFT_PATTERNS[digit][0].starts_with('0'));
            assert!(EAN_LEFT_PATTERNS[digit][1].starts_with('0'));
            assert!(EAN_RIGHT_PATTERNS[digit].starts_with('1'));
        }
    }

    #[test]
    fn test_ean_right_is_complement_of_left_a() {
        for digit in 0..10 {
            let complement: String = EAN_LEFT_PATTERNS[digit][0]
                .chars()
                .map(|c| if c == '1' { '0' } else { '1' })
                .collect();
            assert_eq!(complement, EAN_RIGHT_PATTERNS[digit]);
        }
    }

    #[test]
    fn test_ean_left_b_is_reversed_right() {
        for digit in 0..10 {
            let reversed: String = EAN_RIGHT_PATTERNS[digit].chars().rev().collect();
            assert_eq!(reversed, EAN_LEFT_PATTERNS[digit][1]);
        }
    }

    #[test]
    fn test_parity_strings() {
        for p in EAN_PARITY {
            assert_eq!(p.len(), 6);
            assert!(p.starts_with('A'));
            assert!(p.bytes().all(|b| b == b'A' || b == b'B'));
        }
    }

    #[test]
    fn test_total_modules() {
        let total = EAN_SIDE_GUARD.len() * 2 + EAN_CENTER_GUARD.len() + 12 * 7;
        assert_eq!(total, EAN_TOTAL_MODULES);
    }
}
