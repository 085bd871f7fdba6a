// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover tooltip.
//!
//! A small text card near the pointer. The card always sits on the pointer's
//! outward side, away from the viewport center, so it never covers the pie
//! drawn in the middle of the chart.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use ffradial_core::{Mark, MarkId, RectMark, TextAnchor, TextBaseline, TextMark};

use crate::layout::Size;
use crate::measure::TextMeasurer;
use crate::z_order;

/// Horizontal offset from the pointer when the card sits to the right.
const DX_RIGHT: f64 = 15.0;
/// Horizontal offset when the card sits to the left.
const DX_LEFT: f64 = -155.0;
/// Vertical offset when the card sits below the pointer.
const DY_BELOW: f64 = 15.0;
/// Vertical offset when the card sits above.
const DY_ABOVE: f64 = -55.0;

/// Returns the card's top-left corner for a pointer position.
///
/// The card sits left of the pointer in the left half of the viewport and
/// above it in the top half, always pushed away from the chart center.
pub fn anchor_for(pointer: Point, viewport: Size) -> Point {
    let dx = if pointer.x < viewport.width / 2.0 {
        DX_LEFT
    } else {
        DX_RIGHT
    };
    let dy = if pointer.y < viewport.height / 2.0 {
        DY_ABOVE
    } else {
        DY_BELOW
    };
    Point::new(pointer.x + dx, pointer.y + dy)
}

/// The tooltip card spec.
#[derive(Clone, Debug)]
pub struct TooltipSpec {
    /// Stable-id base; background rect plus one mark per line.
    pub id_base: u64,
    /// Pointer position in scene coordinates.
    pub pointer: Point,
    /// Viewport size, for edge flipping.
    pub viewport: Size,
    /// Text lines, top to bottom. The first line is the heading.
    pub lines: Vec<String>,
    /// Font size for the body lines.
    pub font_size: f64,
    /// Card background paint.
    pub background: Brush,
    /// Text paint.
    pub text_fill: Brush,
    /// Inner padding around the text.
    pub padding: f64,
}

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

impl TooltipSpec {
    /// Creates a tooltip with default styling.
    pub fn new(id_base: u64, pointer: Point, viewport: Size, lines: Vec<String>) -> Self {
        Self {
            id_base,
            pointer,
            viewport,
            lines,
            font_size: 11.0,
            background: Brush::Solid(css::WHITE.with_alpha(0.9)),
            text_fill: css::BLACK.into(),
            padding: 6.0,
        }
    }

    /// Generates the card background and text line marks.
    pub fn marks(&self, measurer: &impl TextMeasurer) -> Vec<Mark> {
        let anchor = anchor_for(self.pointer, self.viewport);
        let line_height = self.font_size * LINE_HEIGHT;
        let width = self
            .lines
            .iter()
            .map(|line| measurer.measure(line, self.font_size).0)
            .fold(0.0, f64::max);
        let card = Rect::new(
            anchor.x,
            anchor.y,
            anchor.x + width + 2.0 * self.padding,
            anchor.y + self.lines.len() as f64 * line_height + 2.0 * self.padding,
        );

        let mut out = Vec::with_capacity(self.lines.len() + 1);
        out.push(Mark::rect(
            MarkId::from_raw(self.id_base),
            z_order::TOOLTIP,
            RectMark::new(card)
                .with_fill(self.background.clone())
                .with_stroke(css::GRAY, 0.5)
                .with_corner_radius(3.0),
        ));
        for (i, line) in self.lines.iter().enumerate() {
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 1 + i as u64),
                z_order::TOOLTIP,
                TextMark::new(
                    Point::new(
                        card.x0 + self.padding,
                        card.y0 + self.padding + i as f64 * line_height,
                    ),
                    line.clone(),
                )
                .with_font_size(self.font_size)
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Hanging)
                .with_fill(self.text_fill.clone()),
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use ffradial_core::MarkPayload;

    use crate::measure::HeuristicTextMeasurer;

    use super::*;

    const VIEWPORT: Size = Size {
        width: 600.0,
        height: 600.0,
    };

    #[test]
    fn card_sits_above_left_in_the_top_left_quadrant() {
        let a = anchor_for(Point::new(100.0, 100.0), VIEWPORT);
        assert_eq!(a, Point::new(-55.0, 45.0));
    }

    #[test]
    fn card_stays_on_the_outward_side_in_every_quadrant() {
        // Bottom-right quadrant: below and to the right.
        let a = anchor_for(Point::new(500.0, 500.0), VIEWPORT);
        assert_eq!(a, Point::new(515.0, 515.0));
        // Top-right: right but above.
        let a = anchor_for(Point::new(500.0, 100.0), VIEWPORT);
        assert_eq!(a, Point::new(515.0, 45.0));
        // Bottom-left: left but below.
        let a = anchor_for(Point::new(100.0, 500.0), VIEWPORT);
        assert_eq!(a, Point::new(-55.0, 515.0));
    }

    #[test]
    fn card_never_reaches_toward_the_viewport_center() {
        let center = Point::new(VIEWPORT.width / 2.0, VIEWPORT.height / 2.0);
        for pointer in [
            Point::new(100.0, 100.0),
            Point::new(500.0, 100.0),
            Point::new(100.0, 500.0),
            Point::new(500.0, 500.0),
        ] {
            let a = anchor_for(pointer, VIEWPORT);
            if pointer.x < center.x {
                assert!(a.x < pointer.x, "left-half cursor must push the card left");
            } else {
                assert!(a.x > pointer.x);
            }
            if pointer.y < center.y {
                assert!(a.y < pointer.y, "top-half cursor must push the card up");
            } else {
                assert!(a.y > pointer.y);
            }
        }
    }

    #[test]
    fn card_contains_all_its_lines() {
        let tooltip = TooltipSpec::new(
            700,
            Point::new(100.0, 100.0),
            VIEWPORT,
            vec![
                "Wyoming".to_string(),
                "FF per 1k: 0.32".to_string(),
                "Unique FF: 12".to_string(),
            ],
        );
        let marks = tooltip.marks(&HeuristicTextMeasurer);
        assert_eq!(marks.len(), 4);

        let MarkPayload::Rect(card) = &marks[0].payload else {
            panic!("expected the card rect first");
        };
        for mark in &marks[1..] {
            let MarkPayload::Text(t) = &mark.payload else {
                panic!("expected text lines");
            };
            assert!(card.rect.contains(t.pos));
        }
    }

    #[test]
    fn all_marks_render_above_everything_else() {
        let tooltip = TooltipSpec::new(
            700,
            Point::new(10.0, 10.0),
            VIEWPORT,
            vec!["AL".to_string()],
        );
        for mark in tooltip.marks(&HeuristicTextMeasurer) {
            assert_eq!(mark.z_index, z_order::TOOLTIP);
        }
    }
}
