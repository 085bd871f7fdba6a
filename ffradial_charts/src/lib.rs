// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for the radial restaurant-density chart.
//!
//! This crate turns data and scales into [`ffradial_core`] marks. Everything
//! here is deterministic layout: no I/O, no clock, no renderer. The layers:
//!
//! - [`scale`]: angular band, area-true radial, and color-ramp scales.
//! - [`bar_mark`] / [`sector_mark`]: the radial bar series and its sectors.
//! - [`pie_chart`]: the per-state breakdown pie drawn in the donut hole.
//! - [`radial_axis`], [`state_labels`], [`legend`], [`title`], [`tooltip`]:
//!   the guide layers around the series.
//!
//! Angles are radians, clockwise from twelve o'clock, throughout.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod float;

pub mod bar_mark;
pub mod format;
pub mod layout;
pub mod legend;
pub mod measure;
pub mod palette;
pub mod pie_chart;
pub mod radial_axis;
pub mod scale;
pub mod sector_mark;
pub mod state_labels;
pub mod title;
pub mod tooltip;
pub mod wrap;
pub mod z_order;

pub use bar_mark::{RadialBar, RadialBarsSpec};
pub use layout::Size;
pub use legend::RampLegendSpec;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use palette::BrandPalette;
pub use pie_chart::{PieChartSpec, PieSlice, pie_layout};
pub use radial_axis::{GridStyle, RadialAxisSpec, StrokeStyle};
pub use scale::{ColorRamp, ScaleBandAngular, ScaleRadial};
pub use sector_mark::{SectorMarkSpec, polar_point};
pub use state_labels::{StateLabel, StateLabelsSpec};
pub use title::{ArcTitleSpec, TextBlockSpec};
pub use tooltip::TooltipSpec;
pub use wrap::wrap_text;
