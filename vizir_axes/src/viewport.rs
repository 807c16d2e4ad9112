// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport a tick set was computed for.

use kurbo::{Affine, Rect};

/// A world-to-screen transform plus the size of the drawing area.
///
/// Painters compare the incoming viewport against the cached one by value; any
/// difference, including a change of `width` alone, invalidates the cached ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// World-to-screen transform.
    pub transform: Affine,
    /// Drawing-area width in pixels.
    pub width: f64,
    /// Drawing-area height in pixels.
    pub height: f64,
}

impl ViewportState {
    /// Creates a viewport.
    ///
    /// Negative or `NaN` sizes are stored as zero, so equal inputs always compare
    /// equal.
    pub fn new(transform: Affine, width: f64, height: f64) -> Self {
        Self {
            transform,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// The screen rectangle `[0, 0, width, height]`.
    ///
    /// Negative or `NaN` sizes collapse to zero.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width.max(0.0), self.height.max(0.0))
    }

    /// Whether the transform can be inverted.
    pub fn is_invertible(&self) -> bool {
        let det = self.transform.determinant();
        det != 0.0
            && det.is_finite()
            && self.transform.as_coeffs().iter().all(|c| c.is_finite())
    }

    /// The world-space bounding box of the visible screen area.
    ///
    /// Returns `None` if the transform is not invertible. A zero-area viewport
    /// yields a zero-area rectangle.
    pub fn world_bounds(&self) -> Option<Rect> {
        if !self.is_invertible() {
            return None;
        }
        let world = self
            .transform
            .inverse()
            .transform_rect_bbox(self.screen_rect());
        world.is_finite().then_some(world)
    }
}
