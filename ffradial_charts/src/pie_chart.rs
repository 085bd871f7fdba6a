// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-state breakdown pie.
//!
//! Drawn inside the donut hole while a bar is hovered. Slices keep the input
//! order of the breakdown rows; sorting them by size would make the pie twitch
//! between hovers of similar states.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{PI, TAU};

use kurbo::Point;
use peniko::color::palette::css;
use smallvec::SmallVec;

use ffradial_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::palette::BrandPalette;
use crate::radial_axis::StrokeStyle;
use crate::sector_mark::{SectorMarkSpec, polar_point};
use crate::z_order;

/// Inner radius of the label placement arc.
const LABEL_ARC_INNER: f64 = 5.0;

/// One laid-out pie slice.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Index into the input rows.
    pub index: usize,
    /// Slice key (brand name).
    pub key: String,
    /// The raw value.
    pub value: f64,
    /// The slice's share of the positive total, in `(0, 1]`.
    pub fraction: f64,
    /// Start angle in radians, clockwise from twelve o'clock.
    pub start_angle: f64,
    /// End angle in radians, clockwise from twelve o'clock.
    pub end_angle: f64,
}

impl PieSlice {
    /// Returns the slice's mid angle.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Lays out pie slices over the full circle.
///
/// Rows keep their input order. Rows with non-positive or non-finite values
/// are skipped but keep their original index, so slice identity is stable
/// across states that differ only in which brands are present.
pub fn pie_layout<K: Into<String>>(
    rows: impl IntoIterator<Item = (K, f64)>,
) -> SmallVec<[PieSlice; 8]> {
    let rows: SmallVec<[(String, f64); 8]> = rows
        .into_iter()
        .map(|(k, v)| (k.into(), v))
        .collect();
    let total: f64 = rows
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();
    if total <= 0.0 {
        return SmallVec::new();
    }

    let mut slices = SmallVec::new();
    let mut angle = 0.0;
    for (index, (key, value)) in rows.into_iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        let sweep = fraction * TAU;
        slices.push(PieSlice {
            index,
            key,
            value,
            fraction,
            start_angle: angle,
            end_angle: angle + sweep,
        });
        angle += sweep;
    }
    slices
}

/// The pie spec: slices plus styling.
#[derive(Clone, Debug)]
pub struct PieChartSpec {
    /// Stable-id base; each slice uses two deterministic offsets.
    pub id_base: u64,
    /// Pie center in scene coordinates.
    pub center: Point,
    /// Pie radius; must fit inside the donut hole.
    pub radius: f64,
    /// Angular gap between slices.
    pub pad_angle: f64,
    /// Brand color assignment.
    pub palette: BrandPalette,
    /// Label font size.
    pub label_font_size: f64,
    /// The laid-out slices.
    pub slices: SmallVec<[PieSlice; 8]>,
}

impl PieChartSpec {
    /// Creates a pie spec with default styling.
    pub fn new(
        id_base: u64,
        center: Point,
        radius: f64,
        slices: SmallVec<[PieSlice; 8]>,
    ) -> Self {
        Self {
            id_base,
            center,
            radius,
            pad_angle: 0.01,
            palette: BrandPalette::new(),
            label_font_size: 10.0,
            slices,
        }
    }

    /// Generates slice and label marks.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::with_capacity(self.slices.len() * 2);
        for slice in &self.slices {
            out.push(
                SectorMarkSpec::new(
                    MarkId::from_raw(self.id_base + 2 * slice.index as u64),
                    self.center,
                    0.0,
                    self.radius,
                    slice.start_angle,
                    slice.end_angle,
                )
                .with_pad_angle(self.pad_angle)
                .with_fill(self.palette.color(&slice.key))
                .with_stroke(StrokeStyle::solid(css::WHITE, 1.0))
                .with_z_index(z_order::SERIES_FILL)
                .mark(),
            );

            let mid = slice.mid_angle();
            // Labels read along the radius; flip on the left half so they
            // never read inward-upside-down.
            let rotation = if mid < PI {
                mid.to_degrees() - 90.0
            } else {
                mid.to_degrees() + 90.0
            };
            let label_radius = (LABEL_ARC_INNER + self.radius) / 2.0;
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 2 * slice.index as u64 + 1),
                z_order::PIE_LABELS,
                TextMark::new(polar_point(self.center, label_radius, mid), slice.key.clone())
                    .with_font_size(self.label_font_size)
                    .with_angle(rotation)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle)
                    .with_fill(css::BLACK),
            ));
        }
        out
    }
}
