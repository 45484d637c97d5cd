//! # Glyph Metrics
//!
//! Advance widths for the standard PDF fonts, in 1/1000 em, indexed by
//! printable ASCII (`' '..='~'`). Values are the Adobe core-font AFM widths.
//!
//! | Font | Source |
//! |------|--------|
//! | Helvetica family | per-glyph table |
//! | Times family | per-glyph table (italics share the upright widths) |
//! | Courier family | fixed 600 |
//! | Symbol, ZapfDingbats, embedded fonts | average estimate |
//!
//! Characters outside printable ASCII use the average estimate.

use printpdf::BuiltinFont;

/// Average advance used when no per-glyph width is known.
pub const AVG_ADVANCE: u16 = 500;

/// Advance width of every Courier glyph.
pub const COURIER_ADVANCE: u16 = 600;

/// How glyph advances are looked up for a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metrics {
    /// Every glyph is [`AVG_ADVANCE`] wide.
    #[default]
    Estimated,
    /// Every glyph has the same advance.
    Fixed(u16),
    /// Per-glyph advances for printable ASCII.
    Table(&'static [u16; 95]),
}

impl Metrics {
    /// Metrics for one of the standard PDF fonts.
    pub fn for_builtin(font: BuiltinFont) -> Self {
        match font {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => Metrics::Table(&HELVETICA),
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                Metrics::Table(&HELVETICA_BOLD)
            }
            BuiltinFont::TimesRoman | BuiltinFont::TimesItalic => Metrics::Table(&TIMES_ROMAN),
            BuiltinFont::TimesBold | BuiltinFont::TimesBoldItalic => Metrics::Table(&TIMES_BOLD),
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => Metrics::Fixed(COURIER_ADVANCE),
            BuiltinFont::Symbol | BuiltinFont::ZapfDingbats => Metrics::Estimated,
        }
    }

    /// Advance of `c` in 1/1000 em.
    pub fn advance(self, c: char) -> u16 {
        match self {
            Metrics::Estimated => AVG_ADVANCE,
            Metrics::Fixed(width) => width,
            Metrics::Table(widths) => match c {
                ' '..='~' => widths[c as usize - 32],
                _ => AVG_ADVANCE,
            },
        }
    }
}

// ============================================================================
// WIDTH TABLES
// ============================================================================

/// Helvetica and Helvetica-Oblique.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold and Helvetica-BoldOblique.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Times-Roman (also used for Times-Italic).
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

/// Times-Bold (also used for Times-BoldItalic).
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_widths() {
        let m = Metrics::for_builtin(BuiltinFont::Helvetica);
        assert_eq!(m.advance(' '), 278);
        assert_eq!(m.advance('0'), 556);
        assert_eq!(m.advance('M'), 833);
        assert_eq!(m.advance('i'), 222);
        assert_eq!(m.advance('~'), 584);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = Metrics::for_builtin(BuiltinFont::Helvetica);
        let bold = Metrics::for_builtin(BuiltinFont::HelveticaBold);
        assert!(bold.advance('b') > regular.advance('b'));
        assert_eq!(
            Metrics::for_builtin(BuiltinFont::HelveticaBoldOblique),
            bold
        );
    }

    #[test]
    fn test_times_widths() {
        assert_eq!(Metrics::for_builtin(BuiltinFont::TimesRoman).advance('W'), 944);
        assert_eq!(Metrics::for_builtin(BuiltinFont::TimesBold).advance('W'), 1000);
    }

    #[test]
    fn test_courier_is_fixed() {
        let m = Metrics::for_builtin(BuiltinFont::CourierBold);
        assert_eq!(m.advance('i'), 600);
        assert_eq!(m.advance('W'), 600);
        assert_eq!(m.advance('é'), 600);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(Metrics::for_builtin(BuiltinFont::Symbol), Metrics::Estimated);
        assert_eq!(Metrics::Estimated.advance('W'), AVG_ADVANCE);
        // Non-ASCII in a table font uses the average
        assert_eq!(Metrics::for_builtin(BuiltinFont::Helvetica).advance('ü'), AVG_ADVANCE);
    }
}
