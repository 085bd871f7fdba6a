// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `ffradial_core` marks carry an explicit `z_index` for render ordering. The
//! chart layer sets z-indexes consistently so callers don't have to hand-tune
//! paint order per layer.
//!
//! These values are intentionally coarse. Renderers should sort by
//! `(z_index, MarkId)` for a deterministic tie-break.

/// Plot background/frame fills (the annotation text box).
pub const PLOT_BACKGROUND: i32 = -100;
/// Radial gridline circles drawn behind the bars.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (the radial bars, pie slices).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (state label tick stubs).
pub const SERIES_STROKE: i32 = 10;

/// Value labels on the radial axis.
pub const AXIS_LABELS: i32 = 40;
/// Per-state labels around the inner radius.
pub const STATE_LABELS: i32 = 45;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Chart-level titles and annotation text.
pub const TITLES: i32 = 80;

/// Pie slice labels, above their slices.
pub const PIE_LABELS: i32 = 85;
/// The hover tooltip, above everything.
pub const TOOLTIP: i32 = 100;
