// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction and animation for the ffradial chart.
//!
//! Three layers, cleanly separated:
//!
//! - [`state`]: the pure interaction state machine (hover, sort).
//! - [`transition`]: keyed tweens driven by a caller-supplied clock.
//! - [`controller`]: the retained chart that turns events plus time into
//!   scene diffs.
//!
//! Nothing here reads a wall clock or touches a renderer; both stay in the
//! host binary.

pub mod controller;
pub mod state;
pub mod transition;

pub use controller::{ChartController, ChartLayout, RenderOutput};
pub use state::{Effect, Event, ViewState};
pub use transition::{Animator, Lerp, Tween, ease_cubic_in_out};
