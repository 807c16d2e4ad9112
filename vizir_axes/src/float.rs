// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::floor`, `f64::log10` and friends live in `std`, not `core`. We dispatch
//! the few that tick computation and label placement need to `libm` here.

pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn trunc(self) -> Self;
    fn log10(self) -> Self;
    fn powi(self, n: i32) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn trunc(self) -> Self {
        libm::trunc(self)
    }

    fn log10(self) -> Self {
        libm::log10(self)
    }

    // Square-and-multiply keeps 10ⁿ exact for n <= 22, which the nice-value
    // snapping relies on.
    fn powi(self, n: i32) -> Self {
        if n == 0 {
            return 1.0;
        }

        let mut exp = i64::from(n);
        let mut base = self;
        if exp < 0 {
            base = 1.0 / base;
            exp = -exp;
        }

        let mut acc = 1.0;
        let mut e = exp as u64;
        while e != 0 {
            if (e & 1) != 0 {
                acc *= base;
            }
            e >>= 1;
            if e != 0 {
                base *= base;
            }
        }
        acc
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("vizir_axes requires either the `std` or `libm` feature");
