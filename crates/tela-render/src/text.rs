//! Font descriptions and the host text-measurement seam.
//!
//! tela does not shape or rasterize text itself. Widgets describe what
//! they want with [`Font`] and ask the host how big it is through
//! [`TextMetrics`]; the host's text stack (whatever it is) does the
//! actual layout work.

/// A font family selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    #[default]
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

impl FontFamily {
    /// Create a named font family.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

/// Font weight, typically ranging from 100 (thin) to 900 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);

    /// Create a font weight from a numeric value (100-900).
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font style (upright or slanted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Slanted, cursive-form glyphs.
    Italic,
}

/// A font description used for measurement and drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Create a font with the given family and point size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Get the weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Get the style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Return a copy with a different family.
    pub fn with_family(&self, family: FontFamily) -> Self {
        Self {
            family,
            ..self.clone()
        }
    }

    /// Return a copy with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Return a copy with a different weight.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }

    /// Return a copy with a different style.
    pub fn with_style(&self, style: FontStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}

/// Horizontal placement of text inside a bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of text inside a bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Combined horizontal and vertical text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Justification {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Justification {
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const TOP_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Top);
    pub const TOP_CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Top);
    pub const TOP_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Top);
    pub const CENTER_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Middle);
    pub const CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Middle);
    pub const CENTER_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Middle);
    pub const BOTTOM_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Bottom);
    pub const BOTTOM_CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Bottom);
    pub const BOTTOM_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Bottom);
}

/// Host-provided text measurement.
///
/// Implementations wrap the host framework's text layout engine. All
/// widget-side layout decisions (elision cut points, alignment offsets,
/// line advances) are derived from these two measurements.
pub trait TextMetrics {
    /// Width of `text` laid out on a single line in `font`.
    fn text_width(&self, text: &str, font: &Font) -> f32;

    /// Height of one line of `font`, including leading.
    fn line_height(&self, font: &Font) -> f32;
}

/// Deterministic fixed-advance metrics.
///
/// Every character advances by `size * advance_factor` and a line is
/// `size * line_factor` tall. Suitable for headless hosts and for tests
/// that need exact, font-independent numbers.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    /// Per-character advance as a fraction of the font size.
    pub advance_factor: f32,
    /// Line height as a fraction of the font size.
    pub line_factor: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance_factor: 0.5,
            line_factor: 1.2,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        text.chars().count() as f32 * font.size() * self.advance_factor
    }

    fn line_height(&self, font: &Font) -> f32 {
        font.size() * self.line_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_defaults() {
        let font = Font::default();
        assert_eq!(font.family(), &FontFamily::SansSerif);
        assert_eq!(font.size(), 14.0);
        assert_eq!(font.weight(), FontWeight::NORMAL);
        assert_eq!(font.style(), FontStyle::Normal);
    }

    #[test]
    fn test_font_with_family() {
        let font = Font::default().with_family(FontFamily::name("STZhongsong"));
        assert_eq!(font.family(), &FontFamily::name("STZhongsong"));
        assert_eq!(font.size(), 14.0);
    }

    #[test]
    fn test_fixed_metrics_width() {
        let metrics = FixedMetrics::default();
        let font = Font::default();
        assert_eq!(metrics.text_width("abcd", &font), 4.0 * 7.0);
        // Counted per character, not per byte.
        assert_eq!(metrics.text_width("选择", &font), 2.0 * 7.0);
    }

    #[test]
    fn test_fixed_metrics_line_height() {
        let metrics = FixedMetrics::default();
        let font = Font::default().with_size(10.0);
        assert_eq!(metrics.line_height(&font), 12.0);
    }
}
