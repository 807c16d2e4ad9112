// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axes render controller.
//!
//! [`AxesPainter`] keeps the tick sets for the last viewport it saw. Each paint
//! call first validates that cache against the incoming transform and size; only
//! when either differs are world bounds and ticks recomputed. Drawing then maps
//! world-space geometry through the transform and issues surface calls.

use alloc::vec::Vec;

use kurbo::{Affine, Line, Point, Rect};
use log::{trace, warn};

use crate::error::ConfigError;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::ticks::{
    LabelFormat, axis_unit_screen_length_x, axis_unit_screen_length_y, choose_label_format,
    compute_adjusted_world_tick_distance_x, compute_tick_positions, compute_world_tick_distance,
    enforce_tick_budget,
};
use crate::viewport::ViewportState;
use crate::{AxesConfig, AxesSurface, TextMeasurer};

/// Horizontal gap between a Y tick label and its tick, as a fraction of the label width.
const Y_LABEL_PADDING: f64 = 1.05;
/// Downward shift of a Y tick label's baseline, as a fraction of the label height.
const Y_LABEL_BASELINE_SHIFT: f64 = 0.3;

/// Tick positions and label format for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTicks {
    /// World-space tick positions, ascending, one interval apart.
    pub positions: Vec<f64>,
    /// World-space distance between consecutive ticks.
    pub interval: f64,
    /// Label format, `None` when labels are disabled.
    pub label_format: Option<LabelFormat>,
}

impl AxisTicks {
    fn compute(world_min: f64, world_max: f64, interval: f64, print_labels: bool) -> Self {
        let interval = enforce_tick_budget(world_min, world_max, interval);
        Self {
            positions: compute_tick_positions(world_min, world_max, interval),
            interval,
            label_format: print_labels.then(|| choose_label_format(interval)),
        }
    }

    fn empty(print_labels: bool) -> Self {
        Self {
            positions: Vec::new(),
            interval: 0.0,
            label_format: print_labels.then(|| LabelFormat::new(0)),
        }
    }
}

/// Paints labeled coordinate axes and a background grid for a pan/zoom view.
///
/// The painter is meant to be called once per frame with the current
/// world-to-screen transform and drawing-area size. Tick sets are cached and only
/// recomputed when the viewport changes; see [`AxesPainter::validate`].
///
/// Calls must be serialized by the owner; the painter holds no locks.
#[derive(Clone, Debug)]
pub struct AxesPainter {
    config: AxesConfig,
    viewport: Option<ViewportState>,
    world_bounds: Rect,
    ticks_x: AxisTicks,
    ticks_y: AxisTicks,
    recompute_count: u64,
}

impl Default for AxesPainter {
    fn default() -> Self {
        Self::with_valid_config(AxesConfig::default())
    }
}

impl AxesPainter {
    /// Creates a painter, rejecting configurations that cannot drive tick selection.
    pub fn new(config: AxesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: AxesConfig) -> Self {
        Self {
            ticks_x: AxisTicks::empty(config.print_labels),
            ticks_y: AxisTicks::empty(config.print_labels),
            config,
            viewport: None,
            world_bounds: Rect::ZERO,
            recompute_count: 0,
        }
    }

    /// The configuration this painter was built with.
    pub fn config(&self) -> &AxesConfig {
        &self.config
    }

    /// The viewport the cached ticks belong to, if any.
    pub fn viewport(&self) -> Option<&ViewportState> {
        self.viewport.as_ref()
    }

    /// World-space bounds of the last validated viewport.
    ///
    /// Zero for a degenerate transform or before the first validation.
    pub fn world_bounds(&self) -> Rect {
        self.world_bounds
    }

    /// Cached X-axis ticks.
    pub fn ticks_x(&self) -> &AxisTicks {
        &self.ticks_x
    }

    /// Cached Y-axis ticks.
    pub fn ticks_y(&self) -> &AxisTicks {
        &self.ticks_y
    }

    /// How many times tick sets have been recomputed.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Drops the cached viewport so the next call recomputes.
    ///
    /// Useful when the host's font metrics change without the viewport changing.
    pub fn invalidate(&mut self) {
        self.viewport = None;
    }

    /// Brings the cached bounds and ticks up to date with the given viewport.
    ///
    /// This is a no-op when `transform`, `width` and `height` all equal the values
    /// of the previous call. A non-invertible transform produces empty tick sets.
    pub fn validate(
        &mut self,
        measurer: &dyn TextMeasurer,
        transform: Affine,
        width: f64,
        height: f64,
    ) {
        let viewport = ViewportState::new(transform, width, height);
        if self.viewport.as_ref() == Some(&viewport) {
            return;
        }
        self.recompute_count += 1;

        match viewport.world_bounds() {
            Some(bounds) => {
                self.world_bounds = bounds;
                self.ticks_x = self.compute_ticks_x(measurer, &transform, bounds);
                self.ticks_y = self.compute_ticks_y(&transform, bounds);
                trace!(
                    "recomputed axes for {width}x{height}: x interval {}, y interval {}",
                    self.ticks_x.interval,
                    self.ticks_y.interval
                );
            }
            None => {
                warn!(
                    "world-to-screen transform {transform:?} is not invertible; axes left empty"
                );
                self.world_bounds = Rect::ZERO;
                self.ticks_x = AxisTicks::empty(self.config.print_labels);
                self.ticks_y = AxisTicks::empty(self.config.print_labels);
            }
        }
        self.viewport = Some(viewport);
    }

    fn compute_ticks_x(
        &self,
        measurer: &dyn TextMeasurer,
        transform: &Affine,
        bounds: Rect,
    ) -> AxisTicks {
        let unit_length = axis_unit_screen_length_x(transform);
        let min_distance = self.config.min_screen_tick_distance_x;
        let mut interval = compute_world_tick_distance(unit_length, min_distance);
        if self.config.print_labels && self.config.adjust_for_string_lengths {
            interval = compute_adjusted_world_tick_distance_x(
                measurer,
                &self.config.style.font,
                unit_length,
                bounds.x0,
                bounds.x1,
                interval,
                min_distance,
            );
        }
        AxisTicks::compute(bounds.x0, bounds.x1, interval, self.config.print_labels)
    }

    fn compute_ticks_y(&self, transform: &Affine, bounds: Rect) -> AxisTicks {
        let interval = compute_world_tick_distance(
            axis_unit_screen_length_y(transform),
            self.config.min_screen_tick_distance_y,
        );
        AxisTicks::compute(bounds.y0, bounds.y1, interval, self.config.print_labels)
    }

    /// Paints the grid (if enabled) and both axes through the world origin.
    pub fn paint(
        &mut self,
        surface: &mut dyn AxesSurface,
        transform: Affine,
        width: f64,
        height: f64,
    ) {
        self.validate(&*surface, transform, width, height);
        if self.config.paint_grid {
            self.paint_grid_lines(surface, &transform);
        }
        let b = self.world_bounds;
        self.paint_x(surface, &transform, b.x0, b.x1, 0.0);
        self.paint_y(surface, &transform, b.y0, b.y1, 0.0);
    }

    /// Paints only the X axis, at world height `world_y`, spanning
    /// `[world_min_x, world_max_x]`.
    ///
    /// Ticks outside that span are skipped. The tick interval still comes from the
    /// full viewport.
    pub fn paint_axis_x(
        &mut self,
        surface: &mut dyn AxesSurface,
        transform: Affine,
        width: f64,
        height: f64,
        world_min_x: f64,
        world_max_x: f64,
        world_y: f64,
    ) {
        self.validate(&*surface, transform, width, height);
        self.paint_x(surface, &transform, world_min_x, world_max_x, world_y);
    }

    /// Paints only the Y axis, at world position `world_x`, spanning
    /// `[world_min_y, world_max_y]`.
    pub fn paint_axis_y(
        &mut self,
        surface: &mut dyn AxesSurface,
        transform: Affine,
        width: f64,
        height: f64,
        world_min_y: f64,
        world_max_y: f64,
        world_x: f64,
    ) {
        self.validate(&*surface, transform, width, height);
        self.paint_y(surface, &transform, world_min_y, world_max_y, world_x);
    }

    /// Paints only the background grid, regardless of [`AxesConfig::paint_grid`].
    pub fn paint_grid(
        &mut self,
        surface: &mut dyn AxesSurface,
        transform: Affine,
        width: f64,
        height: f64,
    ) {
        self.validate(&*surface, transform, width, height);
        self.paint_grid_lines(surface, &transform);
    }

    fn paint_grid_lines(&self, surface: &mut dyn AxesSurface, transform: &Affine) {
        let b = self.world_bounds;
        let stroke = &self.config.style.grid;
        for &x in &self.ticks_x.positions {
            surface.stroke_line(*transform * Line::new((x, b.y0), (x, b.y1)), stroke);
        }
        for &y in &self.ticks_y.positions {
            surface.stroke_line(*transform * Line::new((b.x0, y), (b.x1, y)), stroke);
        }
    }

    fn paint_x(
        &self,
        surface: &mut dyn AxesSurface,
        transform: &Affine,
        world_min_x: f64,
        world_max_x: f64,
        world_y: f64,
    ) {
        let style = &self.config.style;
        surface.stroke_line(
            *transform * Line::new((world_min_x, world_y), (world_max_x, world_y)),
            &style.axes,
        );
        // Mirrored transforms hand the span over reversed.
        let (lo, hi) = (world_min_x.min(world_max_x), world_min_x.max(world_max_x));
        for &x in &self.ticks_x.positions {
            if x < lo || x > hi {
                continue;
            }
            let tick =
                self.tick_mark(transform, Point::new(x, world_y), Point::new(x, world_y - 1.0));
            surface.stroke_line(tick, &style.axes);

            if let Some(format) = &self.ticks_x.label_format {
                let label = format.format(x);
                let metrics = surface.measure(&label, &style.font);
                let origin = Point::new(
                    (tick.p1.x - metrics.advance_width * 0.5).trunc(),
                    (tick.p1.y + metrics.line_height()).trunc(),
                );
                surface.draw_text(&label, origin, &style.font, style.label_fill);
            }
        }
    }

    fn paint_y(
        &self,
        surface: &mut dyn AxesSurface,
        transform: &Affine,
        world_min_y: f64,
        world_max_y: f64,
        world_x: f64,
    ) {
        let style = &self.config.style;
        surface.stroke_line(
            *transform * Line::new((world_x, world_min_y), (world_x, world_max_y)),
            &style.axes,
        );
        let (lo, hi) = (world_min_y.min(world_max_y), world_min_y.max(world_max_y));
        for &y in &self.ticks_y.positions {
            if y < lo || y > hi {
                continue;
            }
            let tick =
                self.tick_mark(transform, Point::new(world_x, y), Point::new(world_x - 1.0, y));
            surface.stroke_line(tick, &style.axes);

            if let Some(format) = &self.ticks_y.label_format {
                let label = format.format(y);
                let metrics = surface.measure(&label, &style.font);
                let origin = Point::new(
                    (tick.p1.x - metrics.advance_width * Y_LABEL_PADDING).trunc(),
                    (tick.p1.y + metrics.line_height() * Y_LABEL_BASELINE_SHIFT).trunc(),
                );
                surface.draw_text(&label, origin, &style.font, style.label_fill);
            }
        }
    }

    /// Maps a one-unit world segment to screen space and rescales it to the
    /// configured tick length, so ticks keep their pixel size under anisotropic zoom.
    fn tick_mark(&self, transform: &Affine, world_start: Point, world_end: Point) -> Line {
        let screen = *transform * Line::new(world_start, world_end);
        scale_to_length(screen, self.config.tick_size_screen)
    }
}

/// Scales `line` about its start point so that it has the given length.
fn scale_to_length(line: Line, length: f64) -> Line {
    let dir = line.p1 - line.p0;
    let current = dir.length();
    if current == 0.0 || !current.is_finite() {
        return Line::new(line.p0, line.p0);
    }
    Line::new(line.p0, line.p0 + dir * (length / current))
}
