// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes pinned to the edges of the drawing area.

use kurbo::{Affine, Point};

use crate::error::ConfigError;
use crate::{AxesConfig, AxesPainter, AxesSurface};

/// Pixel offsets from the edges of the drawing area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    /// Offset from the top edge.
    pub top: f64,
    /// Offset from the left edge.
    pub left: f64,
    /// Offset from the bottom edge.
    pub bottom: f64,
    /// Offset from the right edge.
    pub right: f64,
}

impl Insets {
    /// Creates insets in CSS order (top, left, bottom, right).
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same offset on every edge.
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// Paints axes at fixed screen positions, regardless of pan and zoom.
///
/// The X axis runs along a screen row and the Y axis along a screen column, both
/// placed by [`Insets`]; ticks and labels still follow the world coordinates under
/// them. The grid is painted when [`AxesConfig::paint_grid`] is set.
///
/// - X axis row: `x_insets.top` pixels from the top, or `x_insets.bottom` from the
///   bottom when `top` is negative. It spans from `x_insets.left` to
///   `width - x_insets.right`.
/// - Y axis column: `y_insets.left` pixels from the left, or `y_insets.right` from
///   the right when `left` is negative. It spans from `height - y_insets.bottom`
///   up to `y_insets.top`.
#[derive(Clone, Debug)]
pub struct ScreenFixedAxesPainter {
    painter: AxesPainter,
    x_insets: Insets,
    y_insets: Insets,
}

impl ScreenFixedAxesPainter {
    /// Creates a painter with the given axis placement and tick options.
    pub fn new(
        config: AxesConfig,
        x_insets: Insets,
        y_insets: Insets,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            painter: AxesPainter::new(config)?,
            x_insets,
            y_insets,
        })
    }

    /// The inner painter, which owns the tick cache.
    pub fn painter(&self) -> &AxesPainter {
        &self.painter
    }

    /// Insets placing the X axis.
    pub fn x_insets(&self) -> Insets {
        self.x_insets
    }

    /// Insets placing the Y axis.
    pub fn y_insets(&self) -> Insets {
        self.y_insets
    }

    /// Paints the grid and both screen-fixed axes.
    pub fn paint(
        &mut self,
        surface: &mut dyn AxesSurface,
        transform: Affine,
        width: f64,
        height: f64,
    ) {
        let xi = self.x_insets;
        let x_row = if xi.top < 0.0 {
            height - xi.bottom
        } else {
            xi.top
        };
        let yi = self.y_insets;
        let y_column = if yi.left < 0.0 {
            width - yi.right
        } else {
            yi.left
        };

        if self.painter.config().paint_grid {
            self.painter.paint_grid(surface, transform, width, height);
        } else {
            self.painter.validate(&*surface, transform, width, height);
        }
        if !self.painter.viewport().is_some_and(|v| v.is_invertible()) {
            return;
        }
        let to_world = transform.inverse();

        let x_min = to_world * Point::new(xi.left, x_row);
        let x_max = to_world * Point::new(width - xi.right, x_row);
        self.painter
            .paint_axis_x(surface, transform, width, height, x_min.x, x_max.x, x_min.y);

        let y_min = to_world * Point::new(y_column, height - yi.bottom);
        let y_max = to_world * Point::new(y_column, yi.top);
        self.painter
            .paint_axis_y(surface, transform, width, height, y_min.y, y_max.y, y_min.x);
    }
}
