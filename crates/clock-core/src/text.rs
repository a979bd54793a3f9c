// File: crates/clock-core/src/text.rs
// Summary: Numeral text metrics and drawing via Skia fonts, plus a deterministic fallback metric.

use skia_safe as skia;

/// Ink bounds of a run of text relative to its baseline origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TextBounds {
    /// Horizontal pen advance.
    pub advance: f32,
    pub width: f32,
    pub height: f32,
    /// Distance the ink extends below the baseline.
    pub bottom: f32,
}

pub trait GlyphMeasure {
    fn measure(&self, text: &str, size: f32) -> TextBounds;
}

/// Font-independent metrics: every glyph is a `0.6 x 0.72` em box sitting on the baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxMetrics;

impl GlyphMeasure for BoxMetrics {
    fn measure(&self, text: &str, size: f32) -> TextBounds {
        let width = size * 0.6 * text.chars().count() as f32;
        TextBounds { advance: width, width, height: size * 0.72, bottom: 0.0 }
    }
}

pub struct TextShaper {
    typeface: Option<skia::Typeface>,
}

impl TextShaper {
    pub const DEFAULT_FAMILIES: &'static [&'static str] =
        &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

    pub fn new() -> Self {
        Self::with_families(Self::DEFAULT_FAMILIES)
    }

    /// Use the first family the system font manager can resolve.
    pub fn with_families(families: &[&str]) -> Self {
        let fm = skia::FontMgr::default();
        let typeface = families
            .iter()
            .find_map(|f| fm.match_family_style(*f, skia::FontStyle::normal()))
            .or_else(|| fm.legacy_make_typeface(None::<&str>, skia::FontStyle::normal()));
        if typeface.is_none() {
            log::warn!("no system typeface resolved; numerals will not render");
        }
        Self { typeface }
    }

    pub fn has_typeface(&self) -> bool { self.typeface.is_some() }

    fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::new(tf.clone(), Some(size)),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }

    /// Draw `text` horizontally centered on `x` with its baseline at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, paint: &skia::Paint) {
        if size <= 0.0 {
            return;
        }
        let font = self.font(size);
        let (advance, _) = font.measure_str(text, Some(paint));
        canvas.draw_str(text, (x - advance / 2.0, y), &font, paint);
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl GlyphMeasure for TextShaper {
    fn measure(&self, text: &str, size: f32) -> TextBounds {
        if size <= 0.0 {
            return TextBounds::default();
        }
        let (advance, rect) = self.font(size).measure_str(text, None);
        TextBounds { advance, width: rect.width(), height: rect.height(), bottom: rect.bottom }
    }
}
