// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark identity and payload types.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// A stable mark identity.
///
/// Identity is what makes diffing meaningful: a bar keeps the same `MarkId`
/// across re-sorts, so a layout change is an update (and can be animated)
/// rather than an exit/enter pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchoring, matching the SVG `text-anchor` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start of the text.
    Start,
    /// Anchor at the middle of the text.
    Middle,
    /// Anchor at the end of the text.
    End,
}

/// Vertical text baseline, matching the SVG `dominant-baseline` values we use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Center the text vertically on the anchor point.
    Middle,
    /// Place the alphabetic baseline on the anchor point.
    Alphabetic,
    /// Hang the text below the anchor point.
    Hanging,
    /// Place the ideographic baseline on the anchor point.
    Ideographic,
}

/// The kind of a mark payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A filled/stroked path.
    Path,
    /// A text run.
    Text,
    /// An axis-aligned rectangle.
    Rect,
}

/// A filled and optionally stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint. Ignored when `stroke_width` is zero.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Whole-mark opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A stroked outline painted behind a text run so it stays legible on top of
/// other marks (gridlines, bars).
#[derive(Clone, Debug, PartialEq)]
pub struct TextHalo {
    /// Halo paint.
    pub brush: Brush,
    /// Halo stroke width in scene coordinates.
    pub width: f64,
}

/// A single-line text run (unshaped).
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees, applied around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Optional background halo stroke.
    pub halo: Option<TextHalo>,
    /// Whole-mark opacity in `[0, 1]`.
    pub opacity: f64,
}

/// An axis-aligned rectangle, optionally with rounded corners.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint. Ignored when `stroke_width` is zero.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Corner radius in scene coordinates.
    pub corner_radius: f64,
    /// Whole-mark opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A mark payload.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A path payload.
    Path(PathMark),
    /// A text payload.
    Text(TextMark),
    /// A rect payload.
    Rect(RectMark),
}

impl MarkPayload {
    /// Returns the payload kind.
    #[must_use]
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
            Self::Rect(_) => MarkKind::Rect,
        }
    }

    /// Returns geometric bounds, where cheaply available.
    ///
    /// Text bounds require measurement and are left to the renderer.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
            Self::Rect(r) => Some(r.rect),
        }
    }
}

/// A mark: identity, render order, payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable mark id.
    pub id: MarkId,
    /// Rendering order hint. Renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// The mark payload.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark from its parts.
    #[must_use]
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }

    /// Convenience constructor for a path mark.
    #[must_use]
    pub fn path(id: MarkId, z_index: i32, path: PathMark) -> Self {
        Self::new(id, z_index, MarkPayload::Path(path))
    }

    /// Convenience constructor for a text mark.
    #[must_use]
    pub fn text(id: MarkId, z_index: i32, text: TextMark) -> Self {
        Self::new(id, z_index, MarkPayload::Text(text))
    }

    /// Convenience constructor for a rect mark.
    #[must_use]
    pub fn rect(id: MarkId, z_index: i32, rect: RectMark) -> Self {
        Self::new(id, z_index, MarkPayload::Rect(rect))
    }
}

impl PathMark {
    /// Creates a filled path with no stroke and full opacity.
    #[must_use]
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    /// Sets the fill paint.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets stroke paint and width.
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the whole-mark opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

impl TextMark {
    /// Creates a text mark with default styling.
    #[must_use]
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
            halo: None,
            opacity: 1.0,
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the rotation angle (degrees).
    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the text anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets a background halo stroke.
    #[must_use]
    pub fn with_halo(mut self, brush: impl Into<Brush>, width: f64) -> Self {
        self.halo = Some(TextHalo {
            brush: brush.into(),
            width,
        });
        self
    }

    /// Sets the whole-mark opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

impl RectMark {
    /// Creates a filled rect with square corners and no stroke.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 0.0,
            corner_radius: 0.0,
            opacity: 1.0,
        }
    }

    /// Sets the fill paint.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets stroke paint and width.
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Sets the whole-mark opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}
