// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-band key labels around the inner radius.
//!
//! Each band gets a short tick stub pointing into the donut hole and a
//! tangential label just inside the inner radius. Labels on the bottom half
//! of the circle are flipped 180° so they never read upside down; the flipped
//! branch uses a slightly smaller inset to keep the visual gap even.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{BezPath, Point};
use peniko::Brush;
use peniko::color::palette::css;

use ffradial_core::{Mark, MarkId, PathMark, TextAnchor, TextBaseline, TextMark};

use crate::radial_axis::StrokeStyle;
use crate::scale::ScaleBandAngular;
use crate::sector_mark::polar_point;
use crate::z_order;

/// One labeled band.
#[derive(Clone, Debug)]
pub struct StateLabel {
    /// Stable identity for diffing; survives re-sorts.
    pub stable_id: u64,
    /// The angular band key, also the label text.
    pub key: String,
}

/// The per-band label layer.
#[derive(Clone, Debug)]
pub struct StateLabelsSpec {
    /// Stable-id base; stub and text marks use deterministic offsets.
    pub id_base: u64,
    /// Chart center in scene coordinates.
    pub center: Point,
    /// Inner radius the labels hug.
    pub inner_radius: f64,
    /// Angular band scale; its domain order is the current sort order.
    pub angular: ScaleBandAngular,
    /// Tick stub styling.
    pub stub: StrokeStyle,
    /// Label fill paint.
    pub label_fill: Brush,
    /// Label font size.
    pub label_font_size: f64,
    /// The bands to label.
    pub labels: Vec<StateLabel>,
}

/// Stub length in scene coordinates.
const STUB_LENGTH: f64 = 5.0;
/// Label inset from the inner radius for the unflipped branch.
const LABEL_INSET: f64 = 16.0;
/// Label inset for the flipped branch.
const LABEL_INSET_FLIPPED: f64 = 9.0;

impl StateLabelsSpec {
    /// Creates a label layer with default styling.
    pub fn new(
        id_base: u64,
        center: Point,
        inner_radius: f64,
        angular: ScaleBandAngular,
        labels: Vec<StateLabel>,
    ) -> Self {
        Self {
            id_base,
            center,
            inner_radius,
            angular,
            stub: StrokeStyle::solid(css::BLACK, 1.0),
            label_fill: css::BLACK.into(),
            label_font_size: 10.0,
            labels,
        }
    }

    /// Generates stub and label marks for every known key.
    pub fn marks(&self) -> Vec<Mark> {
        self.labels
            .iter()
            .filter_map(|label| {
                let interval = self.angular.interval(&label.key)?;
                Some(self.label_marks(label, interval))
            })
            .flatten()
            .collect()
    }

    /// Generates the two marks for one band at an explicit angle interval.
    pub fn label_marks(&self, label: &StateLabel, (a0, a1): (f64, f64)) -> [Mark; 2] {
        let mid = (a0 + a1) / 2.0;

        let mut stub = BezPath::new();
        stub.move_to(polar_point(self.center, self.inner_radius, mid));
        stub.line_to(polar_point(self.center, self.inner_radius - STUB_LENGTH, mid));
        let stub_mark = Mark::path(
            MarkId::from_raw(self.id_base + 2 * label.stable_id),
            z_order::SERIES_STROKE,
            PathMark::new(stub)
                .with_fill(peniko::Color::TRANSPARENT)
                .with_stroke(self.stub.brush.clone(), self.stub.stroke_width),
        );

        // Bottom-half labels flip 180° so text never reads upside down.
        // `mid` is in [0, 2π), so plain `%` is already the euclidean wrap.
        let flipped = (mid + FRAC_PI_2) % TAU >= PI;
        let (inset, angle) = if flipped {
            (LABEL_INSET_FLIPPED, mid.to_degrees() - 180.0)
        } else {
            (LABEL_INSET, mid.to_degrees())
        };
        let pos = polar_point(self.center, self.inner_radius - inset, mid);
        let text_mark = Mark::text(
            MarkId::from_raw(self.id_base + 2 * label.stable_id + 1),
            z_order::STATE_LABELS,
            TextMark::new(pos, label.key.clone())
                .with_font_size(self.label_font_size)
                .with_angle(angle)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_fill(self.label_fill.clone()),
        );

        [stub_mark, text_mark]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use kurbo::Shape;

    use ffradial_core::MarkPayload;

    use super::*;

    fn spec(keys: &[&str]) -> StateLabelsSpec {
        let labels = keys
            .iter()
            .enumerate()
            .map(|(i, k)| StateLabel {
                stable_id: i as u64,
                key: k.to_string(),
            })
            .collect();
        StateLabelsSpec::new(
            500,
            Point::new(300.0, 300.0),
            120.0,
            ScaleBandAngular::new(keys.iter().map(|k| k.to_string()).collect()),
            labels,
        )
    }

    fn texts(marks: &[Mark]) -> Vec<&TextMark> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn each_key_gets_a_stub_and_a_label() {
        let marks = spec(&["AL", "AK", "AZ"]).marks();
        assert_eq!(marks.len(), 6);
        assert_eq!(texts(&marks).len(), 3);
    }

    #[test]
    fn top_half_labels_are_upright_bottom_half_flipped() {
        // Four bands: mids at 45°, 135°, 225°, 315° clockwise from noon.
        let spec = spec(&["NE", "SE", "SW", "NW"]);
        let marks = spec.marks();
        let texts = texts(&marks);

        // 45° and 315° fall on the top half, no flip.
        assert!((texts[0].angle - 45.0).abs() < 1e-9);
        assert!((texts[3].angle - 315.0).abs() < 1e-9);
        // 135° and 225° are on the bottom half and flip by 180°.
        assert!((texts[1].angle - -45.0).abs() < 1e-9);
        assert!((texts[2].angle - 45.0).abs() < 1e-9);
    }

    #[test]
    fn labels_sit_inside_the_inner_radius() {
        let spec = spec(&["AL", "AK", "AZ", "AR"]);
        for t in texts(&spec.marks()) {
            let dx = t.pos.x - 300.0;
            let dy = t.pos.y - 300.0;
            let r = (dx * dx + dy * dy).sqrt();
            assert!(r < 120.0, "labels must sit inside the inner radius");
        }
    }

    #[test]
    fn stubs_point_inward_from_the_inner_radius() {
        let spec = spec(&["AL"]);
        let marks = spec.marks();
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected the stub path first");
        };
        let b = p.path.bounding_box();
        // Single band: mid angle π, stub runs straight down from the inner
        // radius toward the center.
        assert!((b.x0 - 300.0).abs() < 1e-9);
        assert!((b.y1 - 420.0).abs() < 1e-9);
        assert!((b.y0 - 415.0).abs() < 1e-9);
    }
}
