// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radial bar series.
//!
//! One annular sector per state, spanning that state's angular band and
//! reaching from the inner radius to the value radius. Bars carry stable ids
//! keyed by the caller (not by angular position), so a re-sort shows up as
//! updates to existing marks.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use ffradial_core::{Mark, MarkId};

use crate::scale::{ColorRamp, ScaleBandAngular, ScaleRadial};
use crate::sector_mark::SectorMarkSpec;
use crate::z_order;

/// One bar of the radial series.
#[derive(Clone, Debug)]
pub struct RadialBar {
    /// Stable identity for diffing; survives re-sorts.
    pub stable_id: u64,
    /// The angular band key (state abbreviation).
    pub key: String,
    /// The value mapped to the outer radius.
    pub value: f64,
    /// The value mapped through the color ramp. Often a different measure
    /// than `value`.
    pub color_value: f64,
    /// Whole-bar opacity; dimmed while another bar is hovered.
    pub opacity: f64,
}

impl RadialBar {
    /// Creates a fully opaque bar.
    pub fn new(stable_id: u64, key: impl Into<String>, value: f64, color_value: f64) -> Self {
        Self {
            stable_id,
            key: key.into(),
            value,
            color_value,
            opacity: 1.0,
        }
    }

    /// Sets the bar opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// The radial bar series spec.
#[derive(Clone, Debug)]
pub struct RadialBarsSpec {
    /// Stable-id base added to each bar's `stable_id`.
    pub id_base: u64,
    /// Chart center in scene coordinates.
    pub center: Point,
    /// Angular band scale; its domain order is the current sort order.
    pub angular: ScaleBandAngular,
    /// Radial value scale.
    pub radial: ScaleRadial,
    /// Color ramp for bar fills.
    pub ramp: ColorRamp,
    /// The bars to draw.
    pub bars: Vec<RadialBar>,
}

impl RadialBarsSpec {
    /// Generates one sector mark per bar whose key is in the angular domain.
    ///
    /// Bars with unknown keys are skipped rather than drawn at a default
    /// angle.
    pub fn marks(&self) -> Vec<Mark> {
        self.bars
            .iter()
            .filter_map(|bar| {
                let interval = self.angular.interval(&bar.key)?;
                Some(self.bar_mark(bar, interval))
            })
            .collect()
    }

    /// Generates the mark for one bar at an explicit angle interval.
    ///
    /// During a sort transition the caller animates intervals between the old
    /// and new domain positions and feeds the interpolated interval here.
    pub fn bar_mark(&self, bar: &RadialBar, (a0, a1): (f64, f64)) -> Mark {
        let (r0, _) = self.radial.range();
        SectorMarkSpec::new(
            MarkId::from_raw(self.id_base + bar.stable_id),
            self.center,
            r0,
            self.radial.map(bar.value),
            a0,
            a1,
        )
        .with_pad_angle(self.angular.pad_angle())
        .with_fill(self.ramp.color(bar.color_value))
        .with_opacity(bar.opacity)
        .with_z_index(z_order::SERIES_FILL)
        .mark()
    }
}
