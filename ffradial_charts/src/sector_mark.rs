// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (arc) mark generation.
//!
//! Both chart layers are built from sectors: the radial bars are annular
//! sectors between the inner and a value radius, and the pie slices are plain
//! sectors from the center. Angles here are in radians, measured *clockwise
//! from twelve o'clock* — the convention the rest of the crate uses for
//! anything angular. Conversion to the math convention happens once, inside
//! path generation.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::FRAC_PI_2;

use kurbo::{Circle, Point, Shape};
use peniko::Brush;

use ffradial_core::{Mark, MarkId, PathMark};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::radial_axis::StrokeStyle;
use crate::z_order;

/// Converts a clockwise-from-noon angle to a point at radius `r` from
/// `center`, in scene (y-down) coordinates.
pub fn polar_point(center: Point, r: f64, angle: f64) -> Point {
    Point::new(center.x + r * angle.sin(), center.y - r * angle.cos())
}

/// An annular sector.
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// Inner radius in scene coordinates (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius in scene coordinates.
    pub outer_radius: f64,
    /// Start angle in radians, clockwise from twelve o'clock.
    pub start_angle: f64,
    /// End angle in radians, clockwise from twelve o'clock.
    pub end_angle: f64,
    /// Angular gap carved out of the sector, half from each side.
    pub pad_angle: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Whole-mark opacity in `[0, 1]`.
    pub opacity: f64,
    /// Curve flattening tolerance when converting the sector to a `BezPath`.
    pub tolerance: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl SectorMarkSpec {
    /// Creates a new sector mark spec.
    pub fn new(
        id: MarkId,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            id,
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            pad_angle: 0.0,
            fill: Brush::default(),
            stroke: None,
            opacity: 1.0,
            tolerance: 0.1,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the pad angle.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle.max(0.0);
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the whole-mark opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the padded angle interval actually drawn.
    ///
    /// Padding never inverts the sector: if the pad exceeds the sweep the
    /// sector collapses to its midpoint.
    pub fn drawn_interval(&self) -> (f64, f64) {
        let half = self.pad_angle / 2.0;
        let a0 = self.start_angle + half;
        let a1 = self.end_angle - half;
        if a0 <= a1 {
            (a0, a1)
        } else {
            let mid = (self.start_angle + self.end_angle) / 2.0;
            (mid, mid)
        }
    }

    /// Returns the sector centroid: mid-angle at mid-radius.
    pub fn centroid(&self) -> Point {
        let (a0, a1) = self.drawn_interval();
        let mid = (a0 + a1) / 2.0;
        let r = (self.inner_radius + self.outer_radius) / 2.0;
        polar_point(self.center, r, mid)
    }

    /// Generates the mark for this spec.
    pub fn mark(&self) -> Mark {
        let (a0, a1) = self.drawn_interval();
        let circle = Circle::new(self.center, self.outer_radius);
        // kurbo measures angles from the +x axis; in y-down scene coordinates
        // a positive sweep runs clockwise, matching our noon-based convention.
        let segment = circle.segment(self.inner_radius, a0 - FRAC_PI_2, a1 - a0);
        let path = segment.path_elements(self.tolerance).collect();

        let mut payload = PathMark::new(path)
            .with_fill(self.fill.clone())
            .with_opacity(self.opacity);
        if let Some(stroke) = self.stroke.clone() {
            payload = payload.with_stroke(stroke.brush, stroke.stroke_width);
        }
        Mark::path(self.id, self.z_index, payload)
    }

    /// Generates marks for this spec.
    pub fn marks(&self) -> Vec<Mark> {
        alloc::vec![self.mark()]
    }
}
