//! # Page Geometry
//!
//! Paper sizes in PDF points (1/72 inch). Label coordinates are points
//! measured from the bottom-left corner of the page.
//!
//! | Size | Portrait (pt) |
//! |------|---------------|
//! | A3 | 841.89 × 1190.55 |
//! | A4 | 595.28 × 841.89 |
//! | A5 | 419.53 × 595.28 |
//! | LETTER | 612 × 792 |
//! | LEGAL | 612 × 1008 |

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Supported paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl PageSize {
    /// Parse a layout size name ("A3", "A4", "A5", "LETTER", "LEGAL").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "A3" => Some(PageSize::A3),
            "A4" => Some(PageSize::A4),
            "A5" => Some(PageSize::A5),
            "LETTER" => Some(PageSize::Letter),
            "LEGAL" => Some(PageSize::Legal),
            _ => None,
        }
    }

    /// Portrait (width, height) in points.
    pub fn portrait_pt(self) -> (f32, f32) {
        match self {
            PageSize::A3 => (841.89, 1190.55),
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Parse "portrait" or "landscape".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "portrait" => Some(Orientation::Portrait),
            "landscape" => Some(Orientation::Landscape),
            _ => None,
        }
    }
}

/// Page (width, height) in points for a size and orientation.
pub fn dimensions_pt(size: PageSize, orientation: Orientation) -> (f32, f32) {
    let (w, h) = size.portrait_pt();
    match orientation {
        Orientation::Portrait => (w, h),
        Orientation::Landscape => (h, w),
    }
}

/// Convert points to millimetres.
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}
