// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles: a wrapped text block and a title curved along the outer rim.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;

use ffradial_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::measure::TextMeasurer;
use crate::sector_mark::polar_point;
use crate::wrap::wrap_text;
use crate::z_order;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// A multi-line text block, wrapped to a maximum width.
#[derive(Clone, Debug)]
pub struct TextBlockSpec {
    /// Stable-id base; one mark per wrapped line.
    pub id_base: u64,
    /// Top-left of the first line.
    pub origin: Point,
    /// The text to wrap.
    pub text: String,
    /// Maximum line width in scene coordinates.
    pub max_width: f64,
    /// Font size.
    pub font_size: f64,
    /// Text paint.
    pub fill: Brush,
}

impl TextBlockSpec {
    /// Creates a text block with default styling.
    pub fn new(id_base: u64, origin: Point, text: impl Into<String>, max_width: f64) -> Self {
        Self {
            id_base,
            origin,
            text: text.into(),
            max_width,
            font_size: 12.0,
            fill: css::BLACK.into(),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates one text mark per wrapped line.
    pub fn marks(&self, measurer: &impl TextMeasurer) -> Vec<Mark> {
        let line_height = self.font_size * LINE_HEIGHT;
        wrap_text(&self.text, self.max_width, self.font_size, measurer)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                Mark::text(
                    MarkId::from_raw(self.id_base + i as u64),
                    z_order::TITLES,
                    TextMark::new(
                        Point::new(self.origin.x, self.origin.y + i as f64 * line_height),
                        line,
                    )
                    .with_font_size(self.font_size)
                    .with_anchor(TextAnchor::Start)
                    .with_baseline(TextBaseline::Hanging)
                    .with_fill(self.fill.clone()),
                )
            })
            .collect()
    }
}

/// A title curved along the top of the outer rim.
///
/// There is no text-on-path mark, so the title is laid out one glyph at a
/// time: each character becomes its own text mark positioned on the arc and
/// rotated to the local tangent.
#[derive(Clone, Debug)]
pub struct ArcTitleSpec {
    /// Stable-id base; one mark per character.
    pub id_base: u64,
    /// Chart center in scene coordinates.
    pub center: Point,
    /// Arc radius; typically the outer radius plus a small gap.
    pub radius: f64,
    /// The title text.
    pub text: String,
    /// Fraction of the arc length at which the first glyph starts.
    pub start_fraction: f64,
    /// Font size.
    pub font_size: f64,
    /// Text paint.
    pub fill: Brush,
}

impl ArcTitleSpec {
    /// Creates an arc title with default styling.
    pub fn new(id_base: u64, center: Point, radius: f64, text: impl Into<String>) -> Self {
        Self {
            id_base,
            center,
            radius,
            text: text.into(),
            start_fraction: 0.31,
            font_size: 14.0,
            fill: css::BLACK.into(),
        }
    }

    /// Sets the start fraction along the arc.
    pub fn with_start_fraction(mut self, start_fraction: f64) -> Self {
        self.start_fraction = start_fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Generates one text mark per glyph along the arc.
    ///
    /// The arc spans the top half of the circle, nine o'clock to three
    /// o'clock through noon. Glyphs that would run past the end of the arc
    /// are dropped.
    pub fn marks(&self, measurer: &impl TextMeasurer) -> Vec<Mark> {
        let arc_length = PI * self.radius;
        let mut offset = self.start_fraction * arc_length;

        let mut out = Vec::with_capacity(self.text.chars().count());
        for (i, ch) in self.text.chars().enumerate() {
            let mut buf = [0_u8; 4];
            let glyph = &*ch.encode_utf8(&mut buf);
            let (width, _) = measurer.measure(glyph, self.font_size);
            let mid = offset + width / 2.0;
            offset += width;
            if mid > arc_length {
                break;
            }

            // Angle clockwise from noon; the arc starts at nine o'clock.
            let angle = -FRAC_PI_2 + (mid / arc_length) * PI;
            let pos = polar_point(self.center, self.radius, angle);
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + i as u64),
                z_order::TITLES,
                TextMark::new(pos, String::from(glyph))
                    .with_font_size(self.font_size)
                    .with_angle(angle.to_degrees())
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Alphabetic)
                    .with_fill(self.fill.clone()),
            ));
        }
        out
    }
}
