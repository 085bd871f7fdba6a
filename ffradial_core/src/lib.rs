// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained-mark runtime for the ffradial chart.
//!
//! The chart layer generates flat lists of [`Mark`]s (paths, text, rects) with
//! stable identities. A [`Scene`] retains the previous tick's marks and turns
//! each new list into [`MarkDiff`]s:
//! - marks with new ids **enter**,
//! - marks whose payload or z-index changed **update** (last write wins),
//! - retained marks missing from the new list **exit**.
//!
//! This is what gives the interactive chart its semantics: re-drawing the pie
//! layer for a new hover replaces the old slices wholesale, and an unchanged
//! bar produces no diff at all.
//!
//! Text marks store unshaped strings; shaping and measurement live downstream.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, PathMark, RectMark, TextAnchor, TextBaseline, TextHalo,
    TextMark,
};
pub use scene::{MarkDiff, Scene};
