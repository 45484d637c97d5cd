//! Per-row text substitution.
//!
//! | Layout text | Result |
//! |-------------|--------|
//! | `$column` | value of `column` in the current CSV row (literal if no such column) |
//! | `HEX_CODE`, `RANDOM_HEX` | the row's random code |
//! | anything else | unchanged |

use rand::Rng;

use crate::data::CsvData;

/// Length of the per-row random code.
pub const HEX_LENGTH: usize = 10;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Generate a random uppercase hex code of [`HEX_LENGTH`] characters.
pub fn generate_hex_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..HEX_LENGTH)
        .map(|_| HEX_CHARS[rng.random_range(0..HEX_CHARS.len())] as char)
        .collect()
}

/// Everything needed to resolve texts for one label.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub csv: &'a CsvData,
    pub row: usize,
    pub hex_code: &'a str,
}

impl<'a> RowContext<'a> {
    pub fn new(csv: &'a CsvData, row: usize, hex_code: &'a str) -> Self {
        Self { csv, row, hex_code }
    }

    /// Resolve a layout text for this row.
    pub fn resolve(&self, text: &str) -> String {
        self.resolve_truncated(text, 0)
    }

    /// Resolve a layout text, truncating CSV values longer than `max_length`
    /// characters (0 disables truncation).
    pub fn resolve_truncated(&self, text: &str, max_length: usize) -> String {
        if let Some(column) = text.strip_prefix('$') {
            return match self.csv.get(self.row, column) {
                Some(value) if max_length > 0 && value.chars().count() > max_length => {
                    tracing::info!(column, max_length, "truncated field");
                    value.chars().take(max_length).collect()
                }
                Some(value) => value.to_string(),
                None => text.to_string(),
            };
        }

        match text {
            "HEX_CODE" | "RANDOM_HEX" => self.hex_code.to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn csv() -> CsvData {
        CsvData::parse("sku,name\nA-1,Hexagon bolt\nB-2,Nut\n").unwrap()
    }

    #[test]
    fn test_column_substitution() {
        let csv = csv();
        let ctx = RowContext::new(&csv, 1, "0123456789");
        assert_eq!(ctx.resolve("$sku"), "B-2");
        assert_eq!(ctx.resolve("$name"), "Nut");
    }

    #[test]
    fn test_unknown_column_is_literal() {
        let csv = csv();
        let ctx = RowContext::new(&csv, 0, "0123456789");
        assert_eq!(ctx.resolve("$price"), "$price");
        assert_eq!(ctx.resolve("price"), "price");
    }

    #[test]
    fn test_row_out_of_range_is_literal() {
        let csv = csv();
        let ctx = RowContext::new(&csv, 7, "0123456789");
        assert_eq!(ctx.resolve("$sku"), "$sku");
    }

    #[test]
    fn test_hex_placeholders() {
        let csv = csv();
        let ctx = RowContext::new(&csv, 0, "ABCDEF0123");
        assert_eq!(ctx.resolve("HEX_CODE"), "ABCDEF0123");
        assert_eq!(ctx.resolve("RANDOM_HEX"), "ABCDEF0123");
        assert_eq!(ctx.resolve("hex_code"), "hex_code");
    }

    #[test]
    fn test_truncation() {
        let csv = csv();
        let ctx = RowContext::new(&csv, 0, "");
        assert_eq!(ctx.resolve_truncated("$name", 7), "Hexagon");
        assert_eq!(ctx.resolve_truncated("$name", 0), "Hexagon bolt");
        assert_eq!(ctx.resolve_truncated("$name", 50), "Hexagon bolt");
        // Literal text is never truncated
        assert_eq!(ctx.resolve_truncated("a long literal", 3), "a long literal");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let csv = CsvData::parse("w\nüberöl\n").unwrap();
        let ctx = RowContext::new(&csv, 0, "");
        assert_eq!(ctx.resolve_truncated("$w", 2), "üb");
    }

    #[test]
    fn test_hex_code_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let code = generate_hex_code(&mut rng);
        assert_eq!(code.len(), HEX_LENGTH);
        assert!(code.bytes().all(|b| HEX_CHARS.contains(&b)));
        // Codes differ between draws
        assert_ne!(code, generate_hex_code(&mut rng));
    }
}
