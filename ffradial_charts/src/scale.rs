// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities for the radial chart.
//!
//! Three mappings drive the whole visualization:
//! - an angular band scale (state key → angle interval),
//! - a radial scale (value → radius, area-true),
//! - a two-point color ramp (value → fill).
//!
//! The radial and color domains are fixed once from the full dataset; only the
//! angular domain's *ordering* changes when the chart is re-sorted.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use core::f64::consts::TAU;

use peniko::Color;

/// An angular band scale over an ordered set of string keys.
///
/// The full circle `[0, 2π)` is split into `N` uniform steps in domain order.
/// A fixed pad angle is carved out of each step (half on each side) so
/// neighboring bars don't touch; the drawn band width is `step - pad`.
#[derive(Clone, Debug, Default)]
pub struct ScaleBandAngular {
    domain: Vec<String>,
    pad_angle: f64,
}

impl ScaleBandAngular {
    /// Default pad angle between bands, in radians.
    pub const DEFAULT_PAD_ANGLE: f64 = 0.01;

    /// Creates a band scale over the given key order.
    #[must_use]
    pub fn new(domain: Vec<String>) -> Self {
        Self {
            domain,
            pad_angle: Self::DEFAULT_PAD_ANGLE,
        }
    }

    /// Sets the pad angle carved out of each band.
    #[must_use]
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle.max(0.0);
        self
    }

    /// Replaces the domain ordering. Value mappings of other scales are
    /// unaffected; this is the only thing a re-sort changes.
    pub fn set_domain(&mut self, domain: Vec<String>) {
        self.domain = domain;
    }

    /// Returns the current domain order.
    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns the number of bands.
    #[must_use]
    pub fn count(&self) -> usize {
        self.domain.len()
    }

    /// Returns the angular step per band (`2π / N`), or 0 for an empty domain.
    #[must_use]
    pub fn step(&self) -> f64 {
        let n = self.domain.len();
        if n == 0 { 0.0 } else { TAU / n as f64 }
    }

    /// Returns the drawn band width (`step - pad`), never negative.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        (self.step() - self.pad_angle).max(0.0)
    }

    /// Returns the configured pad angle.
    #[must_use]
    pub fn pad_angle(&self) -> f64 {
        self.pad_angle
    }

    /// Returns the index of a key in the current order.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.domain.iter().position(|k| k == key)
    }

    /// Returns the half-open raw angle interval `[start, start + step)` for a
    /// key, before pad insetting. Angles are clockwise from twelve o'clock.
    #[must_use]
    pub fn interval(&self, key: &str) -> Option<(f64, f64)> {
        let i = self.index_of(key)?;
        let step = self.step();
        let start = step * i as f64;
        Some((start, start + step))
    }
}

/// A radial scale where *area*, not radius, is proportional to the value.
///
/// `map(v)` returns `sqrt(r0² + t·(r1² - r0²))` with `t = v / max`, so a bar
/// twice the value covers twice the ink. `map(0)` is exactly the inner radius.
#[derive(Clone, Copy, Debug)]
pub struct ScaleRadial {
    domain_max: f64,
    range: (f64, f64),
}

impl ScaleRadial {
    /// Creates a radial scale over `[0, domain_max]` mapping into `range`.
    #[must_use]
    pub fn new(domain_max: f64, range: (f64, f64)) -> Self {
        Self { domain_max, range }
    }

    /// Maps a value into a radius.
    #[must_use]
    pub fn map(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.domain_max <= 0.0 || !v.is_finite() {
            return r0;
        }
        let t = v / self.domain_max;
        if t <= 0.0 {
            return r0;
        }
        if t >= 1.0 && v == self.domain_max {
            return r1;
        }
        let rr = r0 * r0 + t * (r1 * r1 - r0 * r0);
        rr.max(0.0).sqrt()
    }

    /// Returns the configured domain maximum.
    #[must_use]
    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Returns the configured radius range.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice-ish" tick values over the value domain.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(0.0, self.domain_max, count)
    }
}

/// A two-point linear color ramp.
#[derive(Clone, Copy, Debug)]
pub struct ColorRamp {
    domain: (f64, f64),
    low: Color,
    high: Color,
}

impl ColorRamp {
    /// Creates a ramp from `low` at `domain.0` to `high` at `domain.1`.
    #[must_use]
    pub fn new(domain: (f64, f64), low: Color, high: Color) -> Self {
        Self { domain, low, high }
    }

    /// The chart's default blue ramp (`#58CCED` → `#1261A0`).
    #[must_use]
    pub fn default_blues(domain: (f64, f64)) -> Self {
        Self::new(
            domain,
            Color::from_rgb8(0x58, 0xCC, 0xED),
            Color::from_rgb8(0x12, 0x61, 0xA0),
        )
    }

    /// Returns the configured domain.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Maps a value into a color. Values outside the domain clamp to the
    /// nearest endpoint; a degenerate domain yields the low color.
    #[must_use]
    pub fn color(&self, v: f64) -> Color {
        let (d0, d1) = self.domain;
        let denom = d1 - d0;
        let t = if denom == 0.0 || !v.is_finite() {
            0.0
        } else {
            ((v - d0) / denom).clamp(0.0, 1.0)
        };
        lerp_rgba8(self.low, self.high, t)
    }
}

fn lerp_rgba8(a: Color, b: Color, t: f64) -> Color {
    let a = a.to_rgba8();
    let b = b.to_rgba8();
    let ch = |x: u8, y: u8| -> u8 {
        let v = f64::from(x) + t * (f64::from(y) - f64::from(x));
        let v = v.round().clamp(0.0, 255.0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to the u8 range"
        )]
        {
            v as u8
        }
    };
    Color::from_rgba8(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), ch(a.a, b.a))
}

/// Infer a `(min, max)` domain from a stream of values.
///
/// Non-finite values are ignored. Returns `None` if no finite values are
/// present.
pub fn infer_domain_f64(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Returns "nice-ish" tick values covering `[min, max]`.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn keys(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn bands_partition_the_full_circle() {
        let scale = ScaleBandAngular::new(keys(7));
        let total: f64 = (0..7)
            .map(|_| scale.band_width() + scale.pad_angle())
            .sum();
        assert!((total - TAU).abs() < 1e-9, "bands + pads must sum to 2π");

        // Intervals are contiguous half-open steps in domain order.
        let (s0, e0) = scale.interval("0").unwrap();
        let (s1, _e1) = scale.interval("1").unwrap();
        assert_eq!(s0, 0.0);
        assert!((e0 - s1).abs() < 1e-12);
    }

    #[test]
    fn empty_domain_does_not_divide_by_zero() {
        let scale = ScaleBandAngular::new(Vec::new());
        assert_eq!(scale.step(), 0.0);
        assert_eq!(scale.band_width(), 0.0);
        assert!(scale.interval("WY").is_none());
    }

    #[test]
    fn reordering_the_domain_moves_keys_but_keeps_geometry() {
        let mut scale = ScaleBandAngular::new(vec!["AL".to_string(), "WY".to_string()]);
        let step = scale.step();
        assert_eq!(scale.interval("AL").unwrap().0, 0.0);

        scale.set_domain(vec!["WY".to_string(), "AL".to_string()]);
        assert_eq!(scale.step(), step);
        assert_eq!(scale.interval("WY").unwrap().0, 0.0);
        assert!((scale.interval("AL").unwrap().0 - step).abs() < 1e-12);
    }

    #[test]
    fn radial_zero_maps_exactly_to_inner_radius() {
        let scale = ScaleRadial::new(50.0, (120.0, 300.0));
        assert_eq!(scale.map(0.0), 120.0);
        assert_eq!(scale.map(50.0), 300.0);
    }

    #[test]
    fn radial_is_monotonic_and_area_true() {
        let scale = ScaleRadial::new(10.0, (100.0, 200.0));
        let mut prev = scale.map(0.0);
        for i in 1..=10 {
            let r = scale.map(f64::from(i));
            assert!(r >= prev, "radial map must be non-decreasing");
            prev = r;
        }
        // Area between inner radius and the mapped radius is proportional to
        // the value: r(v)² - r0² = t · (r1² - r0²).
        let r = scale.map(5.0);
        let lhs = r * r - 100.0 * 100.0;
        let rhs = 0.5 * (200.0f64 * 200.0 - 100.0 * 100.0);
        assert!((lhs - rhs).abs() < 1e-6);
    }

    #[test]
    fn radial_degenerate_domain_maps_to_inner_radius() {
        let scale = ScaleRadial::new(0.0, (120.0, 300.0));
        assert_eq!(scale.map(0.0), 120.0);
        assert_eq!(scale.map(12.0), 120.0);
    }

    #[test]
    fn ramp_hits_both_endpoints_and_clamps() {
        let ramp = ColorRamp::default_blues((0.1, 0.9));
        assert_eq!(ramp.color(0.1).to_rgba8().r, 0x58);
        assert_eq!(ramp.color(0.9).to_rgba8().b, 0xA0);
        assert_eq!(ramp.color(-5.0), ramp.color(0.1));
        assert_eq!(ramp.color(99.0), ramp.color(0.9));
    }

    #[test]
    fn ramp_degenerate_domain_yields_low_color() {
        let ramp = ColorRamp::default_blues((0.5, 0.5));
        assert_eq!(ramp.color(0.5).to_rgba8().r, 0x58);
    }

    #[test]
    fn infer_domain_skips_non_finite() {
        let d = infer_domain_f64(vec![1.0, f64::NAN, 3.0, f64::INFINITY]).unwrap();
        assert_eq!(d, (1.0, 3.0));
        assert!(infer_domain_f64(vec![f64::NAN]).is_none());
    }

    #[test]
    fn nice_ticks_cover_the_domain_with_round_steps() {
        let ticks = nice_ticks(0.0, 53.0, 5);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert!(ticks.last().copied().unwrap() >= 53.0);
        for w in ticks.windows(2) {
            assert!((w[1] - w[0] - 10.0).abs() < 1e-9);
        }
    }
}
