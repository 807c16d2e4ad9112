// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painter configuration.
//!
//! An [`AxesConfig`] is fixed once it is handed to a painter. Only the tick
//! options affect layout; [`AxesStyle`] is presentation-only.

use peniko::Color;
use peniko::color::palette::css;

use crate::TextStyle;
use crate::error::{Axis, ConfigError};

/// A color + width pair for stroked lines (axes, ticks, gridlines).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in screen units.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Colors and font used when painting. Has no effect on tick selection
/// except through label measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct AxesStyle {
    /// Stroke for the axis lines and tick marks.
    pub axes: StrokeStyle,
    /// Stroke for background grid lines.
    pub grid: StrokeStyle,
    /// Fill color for tick labels.
    pub label_fill: Color,
    /// Font for tick labels.
    pub font: TextStyle,
}

impl Default for AxesStyle {
    fn default() -> Self {
        Self {
            axes: StrokeStyle::solid(css::GRAY, 1.0),
            grid: StrokeStyle::solid(Color::from_rgb8(240, 240, 240), 1.0),
            label_fill: css::GRAY,
            font: TextStyle::new(9.0),
        }
    }
}

/// Tick and drawing options for an [`AxesPainter`](crate::AxesPainter).
///
/// The defaults are:
/// - `min_screen_tick_distance_x = 30`
/// - `min_screen_tick_distance_y = 20`
/// - `tick_size_screen = 5`
/// - labels, grid and label-width adjustment enabled.
#[derive(Clone, Debug, PartialEq)]
pub struct AxesConfig {
    /// Minimum distance between two X ticks, in pixels.
    pub min_screen_tick_distance_x: f64,
    /// Minimum distance between two Y ticks, in pixels.
    pub min_screen_tick_distance_y: f64,
    /// Length of tick marks, in pixels.
    pub tick_size_screen: f64,
    /// Whether the X tick distance grows to fit the widest label.
    ///
    /// Only effective when [`AxesConfig::print_labels`] is set.
    pub adjust_for_string_lengths: bool,
    /// Whether numeric labels are drawn next to ticks.
    pub print_labels: bool,
    /// Whether grid lines are drawn behind the axes.
    pub paint_grid: bool,
    /// Presentation options.
    pub style: AxesStyle,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            min_screen_tick_distance_x: 30.0,
            min_screen_tick_distance_y: 20.0,
            tick_size_screen: 5.0,
            adjust_for_string_lengths: true,
            print_labels: true,
            paint_grid: true,
            style: AxesStyle::default(),
        }
    }
}

impl AxesConfig {
    /// Creates a configuration with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum on-screen tick distances for both axes.
    pub fn with_min_screen_tick_distance(mut self, x: f64, y: f64) -> Self {
        self.min_screen_tick_distance_x = x;
        self.min_screen_tick_distance_y = y;
        self
    }

    /// Set the tick mark length in pixels.
    pub fn with_tick_size(mut self, tick_size_screen: f64) -> Self {
        self.tick_size_screen = tick_size_screen;
        self
    }

    /// Enable or disable label-width adjustment of the X tick distance.
    pub fn with_adjust_for_string_lengths(mut self, adjust: bool) -> Self {
        self.adjust_for_string_lengths = adjust;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, print_labels: bool) -> Self {
        self.print_labels = print_labels;
        self
    }

    /// Enable or disable grid lines.
    pub fn with_grid(mut self, paint_grid: bool) -> Self {
        self.paint_grid = paint_grid;
        self
    }

    /// Set the presentation style.
    pub fn with_style(mut self, style: AxesStyle) -> Self {
        self.style = style;
        self
    }

    /// Checks that the numeric options can drive tick selection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_screen_tick_distance_x", self.min_screen_tick_distance_x),
            ("min_screen_tick_distance_y", self.min_screen_tick_distance_y),
            ("tick_size_screen", self.tick_size_screen),
            ("style.font.font_size", self.style.font.font_size),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if self.min_screen_tick_distance_x <= 0.0 {
            return Err(ConfigError::NonPositiveTickDistance { axis: Axis::X });
        }
        if self.min_screen_tick_distance_y <= 0.0 {
            return Err(ConfigError::NonPositiveTickDistance { axis: Axis::Y });
        }
        if self.tick_size_screen < 0.0 {
            return Err(ConfigError::NegativeTickSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AxesConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_tick_options() {
        let zero_y = AxesConfig::new().with_min_screen_tick_distance(30.0, 0.0);
        assert_eq!(
            zero_y.validate(),
            Err(ConfigError::NonPositiveTickDistance { axis: Axis::Y })
        );

        let nan_x = AxesConfig::new().with_min_screen_tick_distance(f64::NAN, 20.0);
        assert_eq!(
            nan_x.validate(),
            Err(ConfigError::NonFinite {
                field: "min_screen_tick_distance_x"
            })
        );

        let negative_tick = AxesConfig::new().with_tick_size(-1.0);
        assert_eq!(negative_tick.validate(), Err(ConfigError::NegativeTickSize));
    }
}
