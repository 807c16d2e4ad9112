// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Painting itself never fails: degenerate viewports produce empty tick sets.
//! Only an invalid [`AxesConfig`](crate::AxesConfig) is rejected, when a painter is built.

use core::fmt;

/// One of the two coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors returned by [`AxesConfig::validate`](crate::AxesConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The minimum on-screen tick distance for an axis is zero or negative.
    NonPositiveTickDistance {
        /// The offending axis.
        axis: Axis,
    },
    /// The tick mark length is negative.
    NegativeTickSize,
    /// A numeric option is `NaN` or infinite.
    NonFinite {
        /// Name of the offending option.
        field: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTickDistance { axis } => {
                write!(f, "minimum {axis}-axis tick distance must be positive")
            }
            Self::NegativeTickSize => f.write_str("tick size must not be negative"),
            Self::NonFinite { field } => write!(f, "`{field}` must be finite"),
        }
    }
}

impl core::error::Error for ConfigError {}
