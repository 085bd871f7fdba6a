// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained scenes and per-tick mark diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// A change to a retained mark, produced by [`Scene::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark appeared.
    Enter {
        /// The mark id.
        id: MarkId,
        /// The payload kind.
        kind: MarkKind,
        /// Render order.
        z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Geometric bounds, where cheaply available.
        bounds: Option<Rect>,
    },
    /// A retained mark's payload or z-index changed.
    Update {
        /// The mark id.
        id: MarkId,
        /// The payload kind after the update.
        kind: MarkKind,
        /// Render order after the update.
        new_z_index: i32,
        /// The payload before the update.
        old: Box<MarkPayload>,
        /// The payload after the update.
        new: Box<MarkPayload>,
    },
    /// A retained mark disappeared.
    Exit {
        /// The mark id.
        id: MarkId,
        /// The payload kind it had.
        kind: MarkKind,
    },
}

/// A retained set of marks for one chart layer.
///
/// Each call to [`Scene::tick`] supplies the complete desired mark set for the
/// layer; the scene diffs it against what it retains. Ticking with an empty
/// list therefore clears the layer (every retained mark exits), which is
/// exactly how the pie sub-chart is cleared on pointer-leave.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marks: HashMap::new(),
        }
    }

    /// Returns the number of retained marks.
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene retains no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the retained payload for a mark, if present.
    #[must_use]
    pub fn payload(&self, id: MarkId) -> Option<&MarkPayload> {
        self.marks.get(&id).map(|(_z, p)| p)
    }

    /// Returns the retained z-index for a mark, if present.
    #[must_use]
    pub fn z_index(&self, id: MarkId) -> Option<i32> {
        self.marks.get(&id).map(|(z, _p)| *z)
    }

    /// Iterates retained marks in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (MarkId, i32, &MarkPayload)> {
        self.marks.iter().map(|(id, (z, p))| (*id, *z, p))
    }

    /// Replaces the retained mark set with `marks` and returns the diffs.
    ///
    /// Diffs are emitted as enters/updates in input order followed by exits in
    /// ascending id order, so callers observe a deterministic sequence. If an
    /// id occurs more than once in `marks`, the last occurrence wins.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut out = Vec::new();
        let mut seen: HashMap<MarkId, ()> = HashMap::with_capacity(marks.len());

        for mark in marks {
            let Mark {
                id,
                z_index,
                payload,
            } = mark;
            seen.insert(id, ());
            match self.marks.get(&id) {
                None => {
                    let bounds = payload.bounds();
                    out.push(MarkDiff::Enter {
                        id,
                        kind: payload.kind(),
                        z_index,
                        new: Box::new(payload.clone()),
                        bounds,
                    });
                    self.marks.insert(id, (z_index, payload));
                }
                Some((old_z, old_payload)) => {
                    if *old_z == z_index && *old_payload == payload {
                        continue;
                    }
                    // A repeated id within one tick folds into the latest
                    // target attributes: last write wins.
                    let old = Box::new(old_payload.clone());
                    out.push(MarkDiff::Update {
                        id,
                        kind: payload.kind(),
                        new_z_index: z_index,
                        old,
                        new: Box::new(payload.clone()),
                    });
                    self.marks.insert(id, (z_index, payload));
                }
            }
        }

        let mut exits: Vec<(MarkId, MarkKind)> = self
            .marks
            .iter()
            .filter(|(id, _)| !seen.contains_key(*id))
            .map(|(id, (_z, p))| (*id, p.kind()))
            .collect();
        exits.sort_by_key(|(id, _)| *id);
        for (id, kind) in exits {
            self.marks.remove(&id);
            out.push(MarkDiff::Exit { id, kind });
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::{Point, Rect};
    use peniko::color::palette::css;

    use super::*;
    use crate::mark::{RectMark, TextMark};

    fn swatch(id: u64, x: f64) -> Mark {
        Mark::rect(
            MarkId::from_raw(id),
            0,
            RectMark::new(Rect::new(x, 0.0, x + 10.0, 10.0)).with_fill(css::TOMATO),
        )
    }

    #[test]
    fn enter_then_unchanged_tick_is_silent() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![swatch(1, 0.0)]);
        assert!(matches!(&diffs[..], [MarkDiff::Enter { .. }]));

        let diffs = scene.tick(vec![swatch(1, 0.0)]);
        assert!(diffs.is_empty(), "unchanged mark should produce no diffs");
        assert_eq!(scene.mark_count(), 1);
    }

    #[test]
    fn moved_mark_updates_with_old_and_new_payloads() {
        let mut scene = Scene::new();
        scene.tick(vec![swatch(1, 0.0)]);
        let diffs = scene.tick(vec![swatch(1, 5.0)]);
        let [MarkDiff::Update { id, old, new, .. }] = &diffs[..] else {
            panic!("expected a single update diff");
        };
        assert_eq!(*id, MarkId::from_raw(1));
        let (MarkPayload::Rect(old), MarkPayload::Rect(new)) = (&**old, &**new) else {
            panic!("expected rect payloads");
        };
        assert_eq!(old.rect.x0, 0.0);
        assert_eq!(new.rect.x0, 5.0);
    }

    #[test]
    fn empty_tick_exits_everything() {
        let mut scene = Scene::new();
        scene.tick(vec![swatch(1, 0.0), swatch(2, 20.0)]);
        let diffs = scene.tick(Vec::new());
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Exit { .. })));
        assert!(scene.is_empty());
    }

    #[test]
    fn exits_are_ordered_by_id() {
        let mut scene = Scene::new();
        scene.tick(vec![swatch(9, 0.0), swatch(3, 0.0), swatch(7, 0.0)]);
        let diffs = scene.tick(Vec::new());
        let ids: Vec<u64> = diffs
            .iter()
            .map(|d| match d {
                MarkDiff::Exit { id, .. } => id.0,
                _ => panic!("expected only exits"),
            })
            .collect();
        assert_eq!(ids, vec![3, 7, 9]);
    }

    #[test]
    fn repeated_id_in_one_tick_keeps_the_last_payload() {
        let mut scene = Scene::new();
        scene.tick(vec![swatch(1, 0.0), swatch(1, 50.0)]);
        let MarkPayload::Rect(r) = scene.payload(MarkId::from_raw(1)).unwrap() else {
            panic!("expected rect payload");
        };
        assert_eq!(r.rect.x0, 50.0);
    }

    #[test]
    fn text_enter_has_no_bounds() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![Mark::text(
            MarkId::from_raw(4),
            0,
            TextMark::new(Point::new(1.0, 2.0), "WY"),
        )]);
        let [MarkDiff::Enter { kind, bounds, .. }] = &diffs[..] else {
            panic!("expected a single enter diff");
        };
        assert_eq!(*kind, MarkKind::Text);
        assert!(bounds.is_none());
    }
}
