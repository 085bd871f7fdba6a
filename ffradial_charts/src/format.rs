// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using a precision derived from the tick step.
///
/// With nice steps the precision is exactly what the step needs: integer steps
/// format as integers, a step of `0.005` formats with three decimals. Ticks in
/// the same run all format consistently.
pub fn format_tick(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return String::from("-");
    }
    let decimals = decimals_for_step(step);
    format!("{value:.decimals$}")
}

fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let exp = step.log10().floor();
    let mut decimals = if exp >= 0.0 {
        0
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "negated floor of a negative exponent, small by construction"
        )]
        {
            (-exp) as usize
        }
    };
    // Steps like 0.25 need one more digit than their magnitude suggests.
    while decimals < 9 {
        let scaled = step * 10_f64.powf(decimals as f64);
        if (scaled - scaled.round()).abs() < 1e-9 {
            break;
        }
        decimals += 1;
    }
    decimals.min(9)
}
