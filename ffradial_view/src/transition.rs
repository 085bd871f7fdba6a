// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed tweens with a caller-supplied clock.
//!
//! The animator never reads a clock; every call takes `now_ms`. That keeps
//! animation deterministic under test and leaves frame pacing to the host.
//! Starting a tween for a key that already has one replaces it, so a new sort
//! or hover supersedes an in-flight animation instead of queueing behind it.

use std::collections::HashMap;
use std::hash::Hash;

/// Symmetric cubic ease: slow in, fast middle, slow out.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        1.0 + u * u * u / 2.0
    }
}

/// Linear interpolation between two values of a type.
pub trait Lerp: Copy {
    /// Returns the value a fraction `t` of the way from `a` to `b`.
    fn lerp(a: Self, b: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Pairs interpolate component-wise; used for angle intervals.
impl Lerp for (f64, f64) {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        (f64::lerp(a.0, b.0, t), f64::lerp(a.1, b.1, t))
    }
}

/// A single in-flight transition.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
}

impl<T: Lerp> Tween<T> {
    /// Creates a tween starting at `now_ms`.
    pub fn new(from: T, to: T, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms: now_ms,
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Samples the tween at `now_ms`, clamped to the endpoints.
    pub fn sample(&self, now_ms: f64) -> T {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        T::lerp(self.from, self.to, ease_cubic_in_out(t))
    }

    /// Returns the target value.
    pub fn target(&self) -> T {
        self.to
    }

    /// Whether the tween has reached its target at `now_ms`.
    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms >= self.start_ms + self.duration_ms
    }
}

/// A set of keyed tweens.
#[derive(Clone, Debug)]
pub struct Animator<K, T> {
    tweens: HashMap<K, Tween<T>>,
}

impl<K: Eq + Hash, T: Lerp> Animator<K, T> {
    /// Creates an empty animator.
    pub fn new() -> Self {
        Self {
            tweens: HashMap::new(),
        }
    }

    /// Starts (or replaces) a tween for `key` from its current visual value.
    ///
    /// If a tween is already running, its sampled value at `now_ms` becomes
    /// the new starting point; the old target is discarded. Last write wins.
    pub fn retarget(&mut self, key: K, fallback_from: T, to: T, now_ms: f64, duration_ms: f64) {
        let from = self
            .tweens
            .get(&key)
            .map_or(fallback_from, |tween| tween.sample(now_ms));
        self.tweens
            .insert(key, Tween::new(from, to, now_ms, duration_ms));
    }

    /// Samples the current value for `key`, or `fallback` if it was never
    /// animated.
    pub fn value_or(&self, key: &K, fallback: T, now_ms: f64) -> T {
        self.tweens
            .get(key)
            .map_or(fallback, |tween| tween.sample(now_ms))
    }

    /// Whether any tween is still running at `now_ms`.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.tweens.values().any(|tween| !tween.is_done(now_ms))
    }

    /// Drops tweens that already reached their target.
    pub fn prune_finished(&mut self, now_ms: f64) {
        self.tweens.retain(|_, tween| !tween.is_done(now_ms));
    }
}

impl<K: Eq + Hash, T: Lerp> Default for Animator<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_clamped_and_symmetric() {
        assert_eq!(ease_cubic_in_out(-1.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert_eq!(ease_cubic_in_out(2.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-12);
        let lo = ease_cubic_in_out(0.25);
        let hi = ease_cubic_in_out(0.75);
        assert!((lo + hi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tween_clamps_outside_its_window() {
        let tween = Tween::new(0.0, 10.0, 100.0, 1000.0);
        assert_eq!(tween.sample(0.0), 0.0);
        assert_eq!(tween.sample(100.0), 0.0);
        assert!((tween.sample(600.0) - 5.0).abs() < 1e-9);
        assert_eq!(tween.sample(1100.0), 10.0);
        assert_eq!(tween.sample(99_999.0), 10.0);
    }

    #[test]
    fn zero_duration_jumps_to_the_target() {
        let tween = Tween::new(0.0, 10.0, 100.0, 0.0);
        assert_eq!(tween.sample(100.0), 10.0);
    }

    #[test]
    fn retarget_starts_from_the_sampled_value() {
        let mut anim: Animator<&str, f64> = Animator::new();
        anim.retarget("x", 0.0, 10.0, 0.0, 1000.0);
        // Halfway through, redirect to 0. The new tween starts at the current
        // visual value (5.0), not at the old target.
        let mid = anim.value_or(&"x", 0.0, 500.0);
        assert!((mid - 5.0).abs() < 1e-9);
        anim.retarget("x", 0.0, 0.0, 500.0, 1000.0);
        let after = anim.value_or(&"x", 0.0, 500.0);
        assert!((after - 5.0).abs() < 1e-9);
        assert_eq!(anim.value_or(&"x", 0.0, 1500.0), 0.0);
    }

    #[test]
    fn interval_tweens_move_both_endpoints() {
        let tween = Tween::new((0.0, 1.0), (2.0, 3.0), 0.0, 100.0);
        let (a0, a1) = tween.sample(50.0);
        assert!((a0 - 1.0).abs() < 1e-9);
        assert!((a1 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn prune_drops_only_finished_tweens() {
        let mut anim: Animator<u64, f64> = Animator::new();
        anim.retarget(1, 0.0, 1.0, 0.0, 100.0);
        anim.retarget(2, 0.0, 1.0, 0.0, 1000.0);
        anim.prune_finished(500.0);
        assert!(!anim.is_animating(1500.0));
        assert_eq!(anim.value_or(&1, -1.0, 500.0), -1.0, "finished tween dropped");
        assert!((anim.value_or(&2, -1.0, 500.0) - 0.5).abs() < 1e-9);
    }
}
