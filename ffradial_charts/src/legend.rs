// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color ramp legend.
//!
//! The bar fills come from a continuous ramp, so the legend samples the ramp
//! at nice tick values and shows one swatch per sample in a single column,
//! with a title above.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use ffradial_core::{Mark, MarkId, RectMark, TextAnchor, TextBaseline, TextMark};

use crate::format::format_tick;
use crate::layout::union_rect;
use crate::measure::TextMeasurer;
use crate::scale::{ColorRamp, nice_ticks};
use crate::z_order;

/// A single-column legend of ramp samples.
#[derive(Clone, Debug)]
pub struct RampLegendSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from
    /// this base.
    pub id_base: u64,
    /// Legend origin (top-left of the title).
    pub origin: Point,
    /// Legend title.
    pub title: String,
    /// The ramp being sampled.
    pub ramp: ColorRamp,
    /// Requested sample count. The actual count depends on nice rounding.
    pub tick_count: usize,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Label font size.
    pub font_size: f64,
    /// Title font size.
    pub title_font_size: f64,
    /// Label and title paint.
    pub text_fill: Brush,
}

impl RampLegendSpec {
    /// Creates a legend with default styling.
    pub fn new(id_base: u64, origin: Point, title: impl Into<String>, ramp: ColorRamp) -> Self {
        Self {
            id_base,
            origin,
            title: title.into(),
            ramp,
            tick_count: 5,
            swatch_size: 15.0,
            row_gap: 4.0,
            label_dx: 6.0,
            font_size: 10.0,
            title_font_size: 11.0,
            text_fill: css::BLACK.into(),
        }
    }

    /// Returns the sampled values shown in the legend, low to high.
    pub fn sample_values(&self) -> Vec<f64> {
        let (d0, d1) = self.ramp.domain();
        nice_ticks(d0, d1, self.tick_count)
            .into_iter()
            .filter(|&t| t >= d0 && t <= d1)
            .collect()
    }

    /// Generates the title, swatch, and label marks.
    pub fn marks(&self) -> Vec<Mark> {
        let samples = self.sample_values();
        let step = samples.windows(2).map(|w| w[1] - w[0]).next().unwrap_or(1.0);

        let mut out = Vec::with_capacity(samples.len() * 2 + 1);
        out.push(Mark::text(
            MarkId::from_raw(self.id_base),
            z_order::LEGEND_LABELS,
            TextMark::new(self.origin, self.title.clone())
                .with_font_size(self.title_font_size)
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Hanging)
                .with_fill(self.text_fill.clone()),
        ));

        let row_height = self.swatch_size.max(self.font_size);
        let top = self.origin.y + self.title_font_size + self.row_gap * 2.0;
        for (i, &value) in samples.iter().enumerate() {
            let y = top + i as f64 * (row_height + self.row_gap);
            out.push(Mark::rect(
                MarkId::from_raw(self.id_base + 1 + 2 * i as u64),
                z_order::LEGEND_SWATCHES,
                RectMark::new(Rect::new(
                    self.origin.x,
                    y,
                    self.origin.x + self.swatch_size,
                    y + self.swatch_size,
                ))
                .with_fill(self.ramp.color(value)),
            ));
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 2 + 2 * i as u64),
                z_order::LEGEND_LABELS,
                TextMark::new(
                    Point::new(
                        self.origin.x + self.swatch_size + self.label_dx,
                        y + row_height * 0.5,
                    ),
                    format_tick(value, step),
                )
                .with_font_size(self.font_size)
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Middle)
                .with_fill(self.text_fill.clone()),
            ));
        }
        out
    }

    /// Estimates legend bounds using the provided text measurer.
    pub fn bounds(&self, measurer: &impl TextMeasurer) -> Rect {
        let mut bounds = Rect::new(self.origin.x, self.origin.y, self.origin.x, self.origin.y);
        for mark in self.marks() {
            let b = match &mark.payload {
                ffradial_core::MarkPayload::Text(t) => {
                    let (w, h) = measurer.measure(&t.text, t.font_size);
                    Rect::new(t.pos.x, t.pos.y - h * 0.5, t.pos.x + w, t.pos.y + h * 0.5)
                }
                payload => match payload.bounds() {
                    Some(b) => b,
                    None => continue,
                },
            };
            bounds = union_rect(bounds, b);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use ffradial_core::MarkPayload;

    use crate::measure::HeuristicTextMeasurer;

    use super::*;

    fn legend() -> RampLegendSpec {
        RampLegendSpec::new(
            9000,
            Point::new(20.0, 20.0),
            "Unique FF Restaurants",
            ColorRamp::default_blues((0.0, 50.0)),
        )
    }

    #[test]
    fn samples_stay_inside_the_ramp_domain() {
        let samples = legend().sample_values();
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|&v| (0.0..=50.0).contains(&v)));
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn title_plus_one_swatch_and_label_per_sample() {
        let legend = legend();
        let marks = legend.marks();
        assert_eq!(marks.len(), 1 + legend.sample_values().len() * 2);

        let MarkPayload::Text(title) = &marks[0].payload else {
            panic!("expected the title first");
        };
        assert_eq!(title.text, "Unique FF Restaurants");
    }

    #[test]
    fn swatch_colors_follow_the_ramp() {
        let legend = legend();
        let marks = legend.marks();
        let swatches: Vec<_> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(r),
                _ => None,
            })
            .collect();
        for (value, swatch) in legend.sample_values().iter().zip(&swatches) {
            assert_eq!(swatch.fill, legend.ramp.color(*value).into());
        }
    }

    #[test]
    fn bounds_contain_every_swatch() {
        let legend = legend();
        let b = legend.bounds(&HeuristicTextMeasurer);
        assert_eq!(b.x0, 20.0);
        assert!(b.height() > legend.swatch_size * legend.sample_values().len() as f64);
    }
}
