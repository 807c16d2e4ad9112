// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-scaling coordinate axes for pan/zoom views.
//!
//! This crate paints a labeled Cartesian grid on top of any 2D view whose
//! world-to-screen mapping is a [`kurbo::Affine`]:
//! - The **tick engine** ([`snap_up_to_nice_value`], [`compute_tick_positions`], ...)
//!   picks "nice" world-space tick intervals (1, 2, 5 × 10ⁿ) that keep a minimum
//!   on-screen spacing, optionally widening the X interval so labels don't collide.
//! - The **render controller** ([`AxesPainter`]) caches tick sets per viewport and
//!   drives an [`AxesSurface`] to stroke axes, ticks and grid lines and draw labels.
//! - [`ScreenFixedAxesPainter`] pins the axes to screen insets regardless of pan/zoom.
//!
//! The crate has no dependency on a concrete UI toolkit: hosts adapt their canvas
//! to [`AxesSurface`], and supply the transform and drawing-area size every frame.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod painter;
mod screen_fixed;
mod surface;
mod text;
mod ticks;
mod viewport;

pub use config::{AxesConfig, AxesStyle, StrokeStyle};
pub use error::{Axis, ConfigError};
pub use painter::{AxesPainter, AxisTicks};
pub use screen_fixed::{Insets, ScreenFixedAxesPainter};
pub use surface::AxesSurface;
pub use text::{FontFamily, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use ticks::{
    LabelFormat, MAX_TICKS_PER_AXIS, axis_unit_screen_length_x, axis_unit_screen_length_y,
    choose_label_format, compute_adjusted_world_tick_distance_x, compute_tick_positions,
    compute_world_tick_distance, enforce_tick_budget, snap_up_to_nice_value,
};
pub use viewport::ViewportState;
