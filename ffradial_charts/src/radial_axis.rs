// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial value axis: concentric gridline circles plus value labels.
//!
//! The axis draws one stroked circle per tick of the radial scale, and one
//! haloed label per tick at the twelve o'clock position so labels stay
//! readable on top of whichever bar they cross.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Circle, Point, Shape};
use peniko::Brush;
use peniko::color::palette::css;

use ffradial_core::{Mark, MarkId, PathMark, TextAnchor, TextBaseline, TextMark};

use crate::format::format_tick;
use crate::scale::ScaleRadial;
use crate::z_order;

/// A paint + width pair for stroked paths (gridlines, tick stubs, outlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridline circles.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::GRAY.with_alpha(0.5)),
                stroke_width: 0.5,
            },
        }
    }
}

/// The radial value axis of the chart.
#[derive(Clone, Debug)]
pub struct RadialAxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from
    /// this base.
    pub id_base: u64,
    /// Chart center in scene coordinates.
    pub center: Point,
    /// The radial scale being annotated.
    pub scale: ScaleRadial,
    /// Requested tick count. The actual count depends on nice rounding.
    pub tick_count: usize,
    /// Gridline styling.
    pub grid: GridStyle,
    /// Label fill paint.
    pub label_fill: Brush,
    /// Label font size.
    pub label_font_size: f64,
    /// Curve flattening tolerance for the gridline circles.
    pub tolerance: f64,
}

impl RadialAxisSpec {
    /// Creates an axis spec with default styling.
    pub fn new(id_base: u64, center: Point, scale: ScaleRadial) -> Self {
        Self {
            id_base,
            center,
            scale,
            tick_count: 5,
            grid: GridStyle::default(),
            label_fill: css::DIM_GRAY.into(),
            label_font_size: 10.0,
            tolerance: 0.1,
        }
    }

    /// Sets the requested tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets gridline styling.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = grid;
        self
    }

    /// Returns the tick values drawn by this axis.
    ///
    /// The zero tick sits on the inner radius where a circle would just
    /// outline the hole, and ticks past the domain maximum would fall outside
    /// the outer radius; both are dropped.
    pub fn tick_values(&self) -> Vec<f64> {
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .filter(|&t| t > 0.0 && t <= self.scale.domain_max())
            .collect()
    }

    /// Generates gridline and label marks.
    pub fn marks(&self) -> Vec<Mark> {
        let ticks = self.tick_values();
        let step = ticks
            .windows(2)
            .map(|w| w[1] - w[0])
            .next()
            .unwrap_or_else(|| ticks.first().copied().unwrap_or(1.0));

        let mut marks = Vec::with_capacity(ticks.len() * 2);
        for (i, &t) in ticks.iter().enumerate() {
            let r = self.scale.map(t);
            let circle = Circle::new(self.center, r);
            let path = circle.path_elements(self.tolerance).collect();
            marks.push(Mark::path(
                MarkId::from_raw(self.id_base + 2 * i as u64),
                z_order::GRID_LINES,
                PathMark::new(path)
                    .with_fill(peniko::Color::TRANSPARENT)
                    .with_stroke(
                        self.grid.stroke.brush.clone(),
                        self.grid.stroke.stroke_width,
                    ),
            ));

            let pos = Point::new(self.center.x, self.center.y - r);
            marks.push(Mark::text(
                MarkId::from_raw(self.id_base + 2 * i as u64 + 1),
                z_order::AXIS_LABELS,
                TextMark::new(pos, format_tick(t, step))
                    .with_font_size(self.label_font_size)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle)
                    .with_fill(self.label_fill.clone())
                    .with_halo(css::WHITE, 3.0),
            ));
        }
        marks
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use ffradial_core::{MarkKind, MarkPayload};

    use super::*;

    fn axis() -> RadialAxisSpec {
        RadialAxisSpec::new(
            100,
            Point::new(300.0, 300.0),
            ScaleRadial::new(50.0, (120.0, 280.0)),
        )
    }

    #[test]
    fn zero_tick_is_dropped() {
        let ticks = axis().tick_values();
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|&t| t > 0.0));
        assert!(ticks.iter().all(|&t| t <= 50.0));
    }

    #[test]
    fn each_tick_emits_a_circle_and_a_haloed_label() {
        let axis = axis();
        let marks = axis.marks();
        assert_eq!(marks.len(), axis.tick_values().len() * 2);

        let circles = marks
            .iter()
            .filter(|m| m.payload.kind() == MarkKind::Path)
            .count();
        assert_eq!(circles, axis.tick_values().len());

        for mark in &marks {
            if let MarkPayload::Text(t) = &mark.payload {
                assert!(t.halo.is_some(), "axis labels need a halo");
                assert_eq!(t.anchor, TextAnchor::Middle);
                // Labels sit at twelve o'clock, straight above the center.
                assert_eq!(t.pos.x, 300.0);
                assert!(t.pos.y < 300.0);
            }
        }
    }

    #[test]
    fn labels_sit_on_the_scaled_radius() {
        let axis = axis();
        let marks = axis.marks();
        let ticks = axis.tick_values();
        let labels: Vec<_> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                _ => None,
            })
            .collect();
        for (t, label) in ticks.iter().zip(labels) {
            let r = axis.scale.map(*t);
            assert!((300.0 - label.pos.y - r).abs() < 1e-9);
        }
    }
}
