// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick interval selection.
//!
//! Tick spacing starts from a minimum distance in pixels, is converted into world
//! units through the current transform, and is then snapped up to the next "nice"
//! value (1, 2 or 5 × 10ⁿ). On the X axis the spacing may be widened once more so
//! that the rendered labels of neighboring ticks do not overlap.
//!
//! Tick positions are always integer multiples of the interval, which keeps them
//! stable while panning: the set only shifts, it never re-phases.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Vec2};
use log::{debug, warn};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::{TextMeasurer, TextStyle};

/// Upper bound on the number of ticks computed for one axis.
///
/// [`enforce_tick_budget`] widens intervals that would exceed this.
pub const MAX_TICKS_PER_AXIS: usize = 10_000;

/// Extra room added to the widest label before comparing it against tick spacing.
const LABEL_WIDTH_PADDING: f64 = 1.05;

const NICE_MANTISSAS: [f64; 3] = [1.0, 2.0, 5.0];

/// Returns the smallest value of the form `m × 10ᵉ` with `m ∈ {1, 2, 5}` that is `>= x`.
///
/// Decimal nice values come out exactly as their literals (`0.2`, not
/// `0.20000000000000004`) for exponents within ±22.
///
/// `x` must be positive. Non-positive, infinite or `NaN` inputs are returned unchanged.
pub fn snap_up_to_nice_value(x: f64) -> f64 {
    if !x.is_finite() || x <= 0.0 {
        return x;
    }
    #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
    let exponent = x.log10().floor().clamp(-400.0, 400.0) as i32;
    // `log10` may land one decade off near exact powers of ten; scanning the
    // neighboring decades in ascending order still yields the tightest value.
    for e in (exponent - 1)..=(exponent + 1) {
        for m in NICE_MANTISSAS {
            let candidate = nice_value(m, e);
            if candidate >= x && candidate > 0.0 {
                return candidate;
            }
        }
    }
    x
}

fn nice_value(mantissa: f64, exponent: i32) -> f64 {
    if exponent >= 0 || exponent < -22 {
        mantissa * 10_f64.powi(exponent)
    } else {
        // 10ⁿ is exact for n <= 22, so the division rounds once, like a literal.
        mantissa / 10_f64.powi(-exponent)
    }
}

/// Screen length of a one-world-unit step along the world X axis.
pub fn axis_unit_screen_length_x(world_to_screen: &Affine) -> f64 {
    let [a, b, _, _, _, _] = world_to_screen.as_coeffs();
    Vec2::new(a, b).length()
}

/// Screen length of a one-world-unit step along the world Y axis.
pub fn axis_unit_screen_length_y(world_to_screen: &Affine) -> f64 {
    let [_, _, c, d, _, _] = world_to_screen.as_coeffs();
    Vec2::new(c, d).length()
}

/// Converts a minimum tick distance in pixels into a nice world-space interval.
///
/// `axis_unit_screen_length` is the on-screen length of one world unit along the axis.
/// A zero length (a degenerate transform) yields `+inf`.
pub fn compute_world_tick_distance(
    axis_unit_screen_length: f64,
    min_screen_tick_distance: f64,
) -> f64 {
    snap_up_to_nice_value(min_screen_tick_distance / axis_unit_screen_length)
}

/// Widens an X-axis interval so neighboring labels don't overlap.
///
/// The labels of the first and last bracketing ticks of `[world_min, world_max]`
/// are formatted at `interval` and measured. If the wider one (plus 5%) is larger
/// than `min_screen_tick_distance`, the interval is recomputed with that width as
/// the minimum spacing. This is a single pass; the result is not iterated to a
/// fixed point.
pub fn compute_adjusted_world_tick_distance_x(
    measurer: &dyn TextMeasurer,
    style: &TextStyle,
    axis_unit_screen_length: f64,
    world_min: f64,
    world_max: f64,
    interval: f64,
    min_screen_tick_distance: f64,
) -> f64 {
    if !interval.is_finite() || interval <= 0.0 {
        return interval;
    }
    let format = choose_label_format(interval);
    let first_tick = (world_min / interval).floor() * interval;
    let last_tick = ((world_max / interval).floor() + 1.0) * interval;

    let width_first = measurer.measure(&format.format(first_tick), style).advance_width;
    let width_last = measurer.measure(&format.format(last_tick), style).advance_width;
    let max_label_width = width_first.max(width_last) * LABEL_WIDTH_PADDING;

    if max_label_width > min_screen_tick_distance {
        let adjusted = compute_world_tick_distance(axis_unit_screen_length, max_label_width);
        debug!(
            "widened x tick interval from {interval} to {adjusted} for {max_label_width}px labels"
        );
        adjusted
    } else {
        interval
    }
}

/// Widens `interval` if covering `[world_min, world_max]` would need more than
/// [`MAX_TICKS_PER_AXIS`] ticks.
///
/// The widened interval is still a nice value.
pub fn enforce_tick_budget(world_min: f64, world_max: f64, interval: f64) -> f64 {
    let span = world_max - world_min;
    if !span.is_finite() || span <= 0.0 || !interval.is_finite() || interval <= 0.0 {
        return interval;
    }
    // `compute_tick_positions` emits at most `span / interval + 3` ticks.
    let budget = (MAX_TICKS_PER_AXIS - 3) as f64;
    if span / interval <= budget {
        return interval;
    }
    let widened = snap_up_to_nice_value(span / budget).max(interval);
    warn!(
        "tick interval {interval} over a span of {span} exceeds the tick budget; using {widened}"
    );
    widened
}

/// Returns the integer multiples of `interval` from `floor(world_min / interval)`
/// through `floor(world_max / interval) + 1`.
///
/// The result brackets the visible range with a tick on or beyond each edge.
/// It is empty when `world_max <= world_min`, when `interval` is not positive,
/// or when any input is not finite. At most [`MAX_TICKS_PER_AXIS`] ticks are
/// returned; use [`enforce_tick_budget`] first to keep full coverage.
pub fn compute_tick_positions(world_min: f64, world_max: f64, interval: f64) -> Vec<f64> {
    if !world_min.is_finite() || !world_max.is_finite() || !interval.is_finite() {
        return Vec::new();
    }
    if interval <= 0.0 || world_max <= world_min {
        return Vec::new();
    }
    let first = (world_min / interval).floor();
    let last = (world_max / interval).floor() + 1.0;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to the tick budget and non-negative"
    )]
    let count = (last - first + 1.0).clamp(0.0, MAX_TICKS_PER_AXIS as f64) as usize;
    (0..count).map(|i| (first + i as f64) * interval).collect()
}

/// Chooses how many decimals tick labels need for a given interval.
///
/// Intervals below `1` get `-floor(log10(interval))` decimals (`0.01` → 2,
/// `0.5` → 1); everything else is printed as an integer.
pub fn choose_label_format(interval: f64) -> LabelFormat {
    if !interval.is_finite() || interval <= 0.0 || interval >= 1.0 {
        return LabelFormat::new(0);
    }
    // Nudge so that exact powers of ten whose logarithm rounds low keep their decade.
    #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
    let decimals = (-(interval.log10() + 1e-9).floor()).clamp(0.0, 400.0) as usize;
    LabelFormat::new(decimals)
}

/// A fixed-point number format for tick labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LabelFormat {
    decimals: usize,
}

impl LabelFormat {
    /// Creates a format with the given number of fractional digits.
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Number of fractional digits.
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Formats `value` with a fixed number of decimals.
    ///
    /// Values that round to zero never print a minus sign.
    pub fn format(&self, value: f64) -> String {
        let s = alloc::format!("{value:.prec$}", prec = self.decimals);
        match s.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => String::from(rest),
            _ => s,
        }
    }
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{:.{}}}", self.decimals)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;
    use crate::{HeuristicTextMeasurer, TextMetrics};

    /// Previous nice value strictly below a nice value `v`.
    fn previous_nice(v: f64) -> f64 {
        let mut base = 10_f64.powf(v.log10().floor());
        let mut m = (v / base).round();
        if m >= 10.0 {
            base *= 10.0;
            m = 1.0;
        }
        if m <= 1.0 {
            0.5 * base
        } else if m <= 2.0 {
            base
        } else {
            2.0 * base
        }
    }

    fn is_nice(v: f64) -> bool {
        let base = 10_f64.powf(v.log10().floor());
        let m = v / base;
        NICE_MANTISSAS
            .iter()
            .chain([10.0].iter())
            .any(|n| (m - n).abs() < 1e-9)
    }

    #[test]
    fn snap_known_values() {
        assert_eq!(snap_up_to_nice_value(0.6), 1.0);
        assert_eq!(snap_up_to_nice_value(1.0), 1.0);
        assert_eq!(snap_up_to_nice_value(1.2), 2.0);
        assert_eq!(snap_up_to_nice_value(2.0), 2.0);
        assert_eq!(snap_up_to_nice_value(3.0), 5.0);
        assert_eq!(snap_up_to_nice_value(5.1), 10.0);
        assert_eq!(snap_up_to_nice_value(0.3), 0.5);
        assert_eq!(snap_up_to_nice_value(0.15), 0.2);
        assert_eq!(snap_up_to_nice_value(420.0), 500.0);
        assert_eq!(snap_up_to_nice_value(1e-9), 1e-9);
        assert_eq!(snap_up_to_nice_value(1.5e-9), 2e-9);
        assert_eq!(snap_up_to_nice_value(1000.0), 1000.0);
        assert_eq!(snap_up_to_nice_value(7e8), 1e9);
    }

    #[test]
    fn snap_is_nice_tight_and_bounded_across_magnitudes() {
        let samples = [1.0, 1.01, 1.5, 1.99, 2.0, 2.01, 3.3, 4.99, 5.0, 5.01, 7.0, 9.99];
        for e in -9..=9 {
            for s in samples {
                let x = s * 10_f64.powi(e);
                let v = snap_up_to_nice_value(x);
                assert!(v >= x, "snap({x}) = {v} is below input");
                assert!(is_nice(v), "snap({x}) = {v} is not nice");
                assert!(previous_nice(v) < x, "snap({x}) = {v} is not tight");
                let ratio = v / x;
                assert!((1.0..=5.0).contains(&ratio), "snap({x}) ratio {ratio}");
            }
        }
    }

    #[test]
    fn snap_passes_through_invalid_inputs() {
        assert_eq!(snap_up_to_nice_value(0.0), 0.0);
        assert_eq!(snap_up_to_nice_value(-3.0), -3.0);
        assert_eq!(snap_up_to_nice_value(f64::INFINITY), f64::INFINITY);
        assert!(snap_up_to_nice_value(f64::NAN).is_nan());
    }

    #[test]
    fn world_tick_distance_from_pixel_spacing() {
        // 30px at 50px per unit is 0.6 world units.
        assert_eq!(compute_world_tick_distance(50.0, 30.0), 1.0);
        assert_eq!(compute_world_tick_distance(50.0, 20.0), 0.5);
        assert_eq!(compute_world_tick_distance(0.5, 30.0), 100.0);
        assert_eq!(compute_world_tick_distance(0.0, 30.0), f64::INFINITY);
    }

    #[test]
    fn unit_lengths_ignore_translation_and_handle_rotation() {
        let t = Affine::translate((100.0, -40.0)) * Affine::scale_non_uniform(50.0, -20.0);
        assert!((axis_unit_screen_length_x(&t) - 50.0).abs() < 1e-12);
        assert!((axis_unit_screen_length_y(&t) - 20.0).abs() < 1e-12);

        let r = Affine::rotate(0.7) * Affine::scale(3.0);
        assert!((axis_unit_screen_length_x(&r) - 3.0).abs() < 1e-12);
        assert!((axis_unit_screen_length_y(&r) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn tick_positions_bracket_the_range() {
        let ticks = compute_tick_positions(0.0, 10.0, 1.0);
        let expected: Vec<f64> = (0..=11).map(f64::from).collect();
        assert_eq!(ticks, expected);

        let ticks = compute_tick_positions(-0.73, 0.41, 0.2);
        assert!(ticks[0] <= -0.73);
        assert!(*ticks.last().unwrap() >= 0.41);
        for pair in ticks.windows(2) {
            assert!((pair[1] - pair[0] - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn tick_positions_cover_arbitrary_ranges() {
        let cases = [
            (-1234.5, 987.0, 500.0),
            (0.001, 0.0042, 0.0005),
            (1e6, 1e6 + 3.0, 1.0),
            (-7.0, -6.5, 0.1),
        ];
        for (min, max, interval) in cases {
            let ticks = compute_tick_positions(min, max, interval);
            assert!(!ticks.is_empty());
            assert!(ticks[0] <= min, "{ticks:?} for [{min}, {max}]");
            assert!(*ticks.last().unwrap() >= max, "{ticks:?} for [{min}, {max}]");
            for pair in ticks.windows(2) {
                assert!(pair[1] > pair[0]);
                assert!((pair[1] - pair[0] - interval).abs() < interval * 1e-6);
            }
        }
    }

    #[test]
    fn tick_positions_for_degenerate_inputs_are_empty() {
        assert!(compute_tick_positions(3.0, 3.0, 1.0).is_empty());
        assert!(compute_tick_positions(4.0, 3.0, 1.0).is_empty());
        assert!(compute_tick_positions(0.0, 1.0, 0.0).is_empty());
        assert!(compute_tick_positions(0.0, 1.0, f64::INFINITY).is_empty());
        assert!(compute_tick_positions(f64::NAN, 1.0, 0.1).is_empty());
    }

    #[test]
    fn tick_budget_widens_pathological_intervals() {
        assert_eq!(enforce_tick_budget(0.0, 10.0, 1.0), 1.0);

        let widened = enforce_tick_budget(0.0, 1e9, 1e-3);
        assert!(is_nice(widened));
        let ticks = compute_tick_positions(0.0, 1e9, widened);
        assert!(ticks.len() <= MAX_TICKS_PER_AXIS);
        assert!(*ticks.last().unwrap() >= 1e9);
    }

    #[test]
    fn label_format_decimals_follow_interval_magnitude() {
        assert_eq!(choose_label_format(0.01).decimals(), 2);
        assert_eq!(choose_label_format(0.02).decimals(), 2);
        assert_eq!(choose_label_format(0.5).decimals(), 1);
        assert_eq!(choose_label_format(0.1).decimals(), 1);
        assert_eq!(choose_label_format(1e-6).decimals(), 6);
        assert_eq!(choose_label_format(1.0).decimals(), 0);
        assert_eq!(choose_label_format(500.0).decimals(), 0);
    }

    #[test]
    fn label_format_output() {
        assert_eq!(choose_label_format(0.01).format(0.03), "0.03");
        assert_eq!(choose_label_format(500.0).format(1500.0), "1500");
        assert_eq!(LabelFormat::new(1).format(-0.2), "-0.2");
        assert_eq!(LabelFormat::new(1).format(-0.0), "0.0");
        assert_eq!(LabelFormat::new(2).format(-1e-5), "0.00");
        assert_eq!(LabelFormat::new(2).to_string(), "{:.2}");
    }

    struct FixedWidthMeasurer(f64);

    impl TextMeasurer for FixedWidthMeasurer {
        fn measure(&self, _text: &str, style: &TextStyle) -> TextMetrics {
            TextMetrics {
                advance_width: self.0,
                ascent: 0.8 * style.font_size,
                descent: 0.2 * style.font_size,
                leading: 0.0,
            }
        }
    }

    #[test]
    fn wide_labels_widen_the_x_interval() {
        let style = TextStyle::default();
        let initial = compute_world_tick_distance(50.0, 30.0);
        let adjusted = compute_adjusted_world_tick_distance_x(
            &FixedWidthMeasurer(200.0),
            &style,
            50.0,
            0.0,
            10.0,
            initial,
            30.0,
        );
        assert!(adjusted > initial);
        // 200px * 1.05 at 50px per unit is 4.2 world units.
        assert_eq!(adjusted, 5.0);
    }

    #[test]
    fn narrow_labels_keep_the_x_interval() {
        let style = TextStyle::default();
        let initial = compute_world_tick_distance(50.0, 30.0);
        let adjusted = compute_adjusted_world_tick_distance_x(
            &HeuristicTextMeasurer,
            &style,
            50.0,
            0.0,
            10.0,
            initial,
            30.0,
        );
        assert_eq!(adjusted, initial);
    }

    #[test]
    fn adjustment_measures_the_bracketing_labels() {
        use core::cell::RefCell;

        struct Recording(RefCell<Vec<String>>);

        impl TextMeasurer for Recording {
            fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
                self.0.borrow_mut().push(text.to_string());
                HeuristicTextMeasurer.measure(text, style)
            }
        }

        let recording = Recording(RefCell::new(Vec::new()));
        compute_adjusted_world_tick_distance_x(
            &recording,
            &TextStyle::default(),
            100.0,
            -0.37,
            1.21,
            0.5,
            30.0,
        );
        assert_eq!(*recording.0.borrow(), ["-0.5", "1.5"]);
    }
}
