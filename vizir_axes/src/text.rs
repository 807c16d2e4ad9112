// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement for tick labels.
//!
//! Tick-interval selection on the X axis depends on how wide the rendered labels
//! are, so the tick engine accepts a measurer rather than assuming glyph sizes.
//! Hosts implement [`TextMeasurer`] on top of whatever shaping they render with;
//! [`HeuristicTextMeasurer`] is good enough for tests and SVG dumps.

/// Measures single lines of label text.
pub trait TextMeasurer {
    /// Measure `text` as a single line in the given style.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Font selection for tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in screen units (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Creates a sans-serif `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(9.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
}

impl FontFamily {
    /// Returns the family name for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width of the line.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A heuristic measurer assuming ~0.6em glyph advances and a baseline at 0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}
