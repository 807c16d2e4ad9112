// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capabilities the painters need from a host canvas.

use kurbo::{Line, Point};
use peniko::Color;

use crate::{StrokeStyle, TextMeasurer, TextStyle};

/// A 2D canvas in screen coordinates.
///
/// Painters only stroke straight segments and draw single-line text, so any
/// native canvas (a Vello scene, an HTML canvas, an SVG writer) can implement this.
/// Measurement comes from the [`TextMeasurer`] supertrait and must match what
/// [`AxesSurface::draw_text`] renders, since label spacing is derived from it.
pub trait AxesSurface: TextMeasurer {
    /// Stroke a line segment.
    fn stroke_line(&mut self, line: Line, stroke: &StrokeStyle);

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle, fill: Color);
}
