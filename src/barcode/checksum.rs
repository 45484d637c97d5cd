//! # Checksums
//!
//! Check value computation for Code128 (weighted modulo 103) and the
//! EAN/UPC family (alternating 1/3 weights, modulo 10).
//!
//! The digit functions expect ASCII digits; callers gate on that first
//! (see [`super::validate`]).

use super::tables::CODE128_MODULUS;

/// Code128 checksum over a symbol sequence starting with the start code.
///
/// ```text
/// sum = codes[0] + Σ i·codes[i]   (i = 1..n)
/// checksum = sum mod 103
/// ```
///
/// The sum is reduced as it accumulates, so any input length is exact.
///
/// Returns 0 for an empty sequence.
pub fn code128(codes: &[u8]) -> u8 {
    let Some((&start, data)) = codes.split_first() else {
        return 0;
    };
    let modulus = CODE128_MODULUS as u64;
    let sum = data.iter().enumerate().fold(start as u64 % modulus, |acc, (i, &c)| {
        let weight = (i as u64 + 1) % modulus;
        (acc + weight * c as u64) % modulus
    });
    sum as u8
}

/// Weighted digit sum shared by EAN-13 and UPC-A.
///
/// `even_weight` applies at even 0-based positions, `odd_weight` at odd ones.
fn weighted_check_digit(digits: &[u8], even_weight: u32, odd_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let value = (d - b'0') as u32;
            if i % 2 == 0 { value * even_weight } else { value * odd_weight }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// EAN-13 check digit (0-9) for the first 12 digits of `digits`.
///
/// # Panics
///
/// Panics if `digits` is shorter than 12 bytes.
pub fn ean13(digits: &[u8]) -> u8 {
    weighted_check_digit(&digits[..12], 1, 3)
}

/// UPC-A check digit (0-9) for the first 11 digits of `digits`.
///
/// # Panics
///
/// Panics if `digits` is shorter than 11 bytes.
pub fn upca(digits: &[u8]) -> u8 {
    weighted_check_digit(&digits[..11], 3, 1)
}

/// True if a 13-digit string carries a correct EAN-13 check digit.
pub fn verify_ean13(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 13 && bytes.iter().all(u8::is_ascii_digit) && ean13(bytes) == bytes[12] - b'0'
}

/// True if a 12-digit string carries a correct UPC-A check digit.
pub fn verify_upca(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 12 && bytes.iter().all(u8::is_ascii_digit) && upca(bytes) == bytes[11] - b'0'
}
