//! Font lookup for text fields.
//!
//! A field's font name is resolved in this order:
//!
//! 1. a custom TrueType font registered under that name
//! 2. one of the 14 standard PDF fonts ("Helvetica-Bold", "Times-Roman", ...)
//! 3. the layout's default font (custom or standard)
//! 4. Helvetica-Bold

use std::collections::HashMap;

use printpdf::{BuiltinFont, FontId, ParsedFont, PdfDocument, PdfWarnMsg};

use super::metrics::Metrics;
use crate::layout::FontConfig;

/// A font usable in text operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FontRef {
    Builtin(BuiltinFont),
    External(FontId),
}

impl FontRef {
    /// Glyph metrics for measuring text in this font.
    ///
    /// Embedded fonts use the average estimate.
    pub fn metrics(&self) -> Metrics {
        match self {
            FontRef::Builtin(font) => Metrics::for_builtin(*font),
            FontRef::External(_) => Metrics::Estimated,
        }
    }
}

/// Map a standard PDF font name to its built-in font.
pub fn builtin_font(name: &str) -> Option<BuiltinFont> {
    let font = match name {
        "Helvetica" => BuiltinFont::Helvetica,
        "Helvetica-Bold" => BuiltinFont::HelveticaBold,
        "Helvetica-Oblique" => BuiltinFont::HelveticaOblique,
        "Helvetica-BoldOblique" => BuiltinFont::HelveticaBoldOblique,
        "Times-Roman" => BuiltinFont::TimesRoman,
        "Times-Bold" => BuiltinFont::TimesBold,
        "Times-Italic" => BuiltinFont::TimesItalic,
        "Times-BoldItalic" => BuiltinFont::TimesBoldItalic,
        "Courier" => BuiltinFont::Courier,
        "Courier-Bold" => BuiltinFont::CourierBold,
        "Courier-Oblique" => BuiltinFont::CourierOblique,
        "Courier-BoldOblique" => BuiltinFont::CourierBoldOblique,
        "Symbol" => BuiltinFont::Symbol,
        "ZapfDingbats" => BuiltinFont::ZapfDingbats,
        _ => return None,
    };
    Some(font)
}

/// Fonts available to one document.
#[derive(Debug, Clone, Default)]
pub struct FontBook {
    custom: HashMap<String, FontId>,
    default_name: String,
}

impl FontBook {
    /// A book with only the standard fonts.
    pub fn builtin(default_name: &str) -> Self {
        Self {
            custom: HashMap::new(),
            default_name: default_name.to_string(),
        }
    }

    /// Register the layout's custom fonts with `doc`.
    ///
    /// Fonts that cannot be read or parsed are skipped with a warning.
    pub fn load(config: &FontConfig, doc: &mut PdfDocument) -> Self {
        let mut book = Self::builtin(config.default_font());

        for font in &config.custom_fonts {
            let bytes = match std::fs::read(&font.file) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(name = %font.name, file = %font.file, error = %e, "font file unreadable, skipping");
                    continue;
                }
            };

            let mut warnings: Vec<PdfWarnMsg> = Vec::new();
            let Some(parsed) = ParsedFont::from_bytes(&bytes, 0, &mut warnings) else {
                tracing::warn!(name = %font.name, file = %font.file, "not a usable TrueType font, skipping");
                continue;
            };

            let id = doc.add_font(&parsed);
            tracing::info!(name = %font.name, file = %font.file, "registered font");
            book.custom.insert(font.name.clone(), id);
        }

        book
    }

    /// Number of registered custom fonts.
    pub fn custom_count(&self) -> usize {
        self.custom.len()
    }

    fn lookup(&self, name: &str) -> Option<FontRef> {
        if let Some(id) = self.custom.get(name) {
            return Some(FontRef::External(id.clone()));
        }
        builtin_font(name).map(FontRef::Builtin)
    }

    /// Resolve a field's font name, falling back as described above.
    pub fn resolve(&self, name: Option<&str>) -> FontRef {
        if let Some(name) = name {
            if let Some(font) = self.lookup(name) {
                return font;
            }
            tracing::warn!(font = name, fallback = %self.default_name, "unknown font");
        }
        self.lookup(&self.default_name)
            .unwrap_or(FontRef::Builtin(BuiltinFont::HelveticaBold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(builtin_font("Times-Roman"), Some(BuiltinFont::TimesRoman));
        assert_eq!(builtin_font("Courier-BoldOblique"), Some(BuiltinFont::CourierBoldOblique));
        assert_eq!(builtin_font("helvetica"), None);
        assert_eq!(builtin_font("Arial"), None);
    }

    #[test]
    fn test_resolve_fallbacks() {
        let book = FontBook::builtin("Courier");
        assert_eq!(book.resolve(Some("Times-Bold")), FontRef::Builtin(BuiltinFont::TimesBold));
        assert_eq!(book.resolve(Some("Comic Sans")), FontRef::Builtin(BuiltinFont::Courier));
        assert_eq!(book.resolve(None), FontRef::Builtin(BuiltinFont::Courier));
    }

    #[test]
    fn test_unknown_default_falls_back_to_helvetica_bold() {
        let book = FontBook::builtin("NoSuchFont");
        assert_eq!(book.resolve(None), FontRef::Builtin(BuiltinFont::HelveticaBold));
    }

    #[test]
    fn test_font_metrics() {
        let helvetica = FontRef::Builtin(BuiltinFont::Helvetica).metrics();
        assert_eq!(helvetica.advance('i'), 222);
        assert_eq!(FontRef::Builtin(BuiltinFont::Courier).metrics(), Metrics::Fixed(600));
        assert_eq!(FontRef::Builtin(BuiltinFont::Symbol).metrics(), Metrics::Estimated);
    }

    #[test]
    fn test_load_skips_missing_files() {
        let config: FontConfig = serde_json::from_str(
            r#"{"default": "Times-Roman", "custom_fonts": [{"name": "Gone", "file": "/nonexistent/gone.ttf"}]}"#,
        )
        .unwrap();
        let mut doc = PdfDocument::new("test");
        let book = FontBook::load(&config, &mut doc);
        assert_eq!(book.custom_count(), 0);
        assert_eq!(book.resolve(Some("Gone")), FontRef::Builtin(BuiltinFont::TimesRoman));
    }

    #[test]
    fn test_load_skips_garbage_font() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"definitely not a font").unwrap();
        let config = FontConfig {
            default: None,
            custom_fonts: vec![crate::layout::CustomFont {
                name: "Junk".into(),
                file: file.path().display().to_string(),
                encoding: None,
            }],
        };
        let mut doc = PdfDocument::new("test");
        let book = FontBook::load(&config, &mut doc);
        assert_eq!(book.custom_count(), 0);
    }
}
