// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart controller.
//!
//! Owns the loaded datasets, the scales, three retained scenes (bars, pie,
//! tooltip), and the animations between layouts. Events go in through
//! [`ChartController::handle_event`]; [`ChartController::render`] samples the
//! animations at a caller-supplied time and returns the scene diffs a
//! renderer applies.

use std::collections::HashMap;

use kurbo::Point;

use ffradial_charts::{
    ColorRamp, PieChartSpec, RadialBar, RadialBarsSpec, ScaleBandAngular, ScaleRadial, Size,
    StateLabel, StateLabelsSpec, TooltipSpec, pie_layout, scale::infer_domain_f64,
};
use ffradial_core::{Mark, MarkDiff, MarkPayload, Scene};
use ffradial_data::{SortMode, StateBreakdown, StateMetric, sort_metrics};

use crate::state::{Effect, Event, ViewState, transition};
use crate::transition::Animator;

/// Bar opacity while a bar is hovered.
const HOVER_BAR_OPACITY: f64 = 0.85;
/// Duration of the hover dim/undim.
const HOVER_FADE_MS: f64 = 10.0;
/// Tooltip opacity when fully faded in.
const TOOLTIP_VISIBLE_OPACITY: f64 = 0.9;
/// Tooltip fade-in duration.
const TOOLTIP_FADE_IN_MS: f64 = 200.0;
/// Tooltip fade-out duration.
const TOOLTIP_FADE_OUT_MS: f64 = 500.0;
/// Duration of the sort re-layout animation.
const SORT_ANIMATION_MS: f64 = 1000.0;

/// Gap between the donut hole edge and the pie.
const PIE_MARGIN: f64 = 15.0;

/// Mark-id bases per layer, spaced so layers never collide.
const BARS_ID_BASE: u64 = 0;
const STATE_LABELS_ID_BASE: u64 = 1000;
const PIE_ID_BASE: u64 = 4000;
const TOOLTIP_ID_BASE: u64 = 5000;

/// Fixed geometry of the chart.
#[derive(Clone, Copy, Debug)]
pub struct ChartLayout {
    /// Chart center in scene coordinates.
    pub center: Point,
    /// Donut hole radius.
    pub inner_radius: f64,
    /// Maximum bar radius.
    pub outer_radius: f64,
    /// Viewport size, for tooltip edge flipping.
    pub viewport: Size,
}

impl ChartLayout {
    /// A centered layout filling a viewport, in the usual proportions.
    pub fn centered(viewport: Size) -> Self {
        let half = viewport.width.min(viewport.height) / 2.0;
        Self {
            center: Point::new(viewport.width / 2.0, viewport.height / 2.0),
            inner_radius: half * 0.4,
            outer_radius: half * 0.9,
            viewport,
        }
    }
}

/// Per-layer scene diffs from one render pass.
#[derive(Clone, Debug, Default)]
pub struct RenderOutput {
    /// Bars, their angle labels, and tick stubs.
    pub bars: Vec<MarkDiff>,
    /// The hover pie.
    pub pie: Vec<MarkDiff>,
    /// The hover tooltip.
    pub tooltip: Vec<MarkDiff>,
}

/// Which shared opacity is being animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum OpacityTarget {
    Bars,
    Tooltip,
}

/// The retained chart: data, scales, scenes, animations.
#[derive(Debug)]
pub struct ChartController {
    layout: ChartLayout,
    metrics: Vec<StateMetric>,
    breakdowns: Vec<StateBreakdown>,
    /// abbrev → load-order index. Load order never changes, so mark ids
    /// survive re-sorts and sorts animate as updates.
    stable_ids: HashMap<String, u64>,
    state: ViewState,
    angular: ScaleBandAngular,
    radial: ScaleRadial,
    ramp: ColorRamp,
    bars_scene: Scene,
    pie_scene: Scene,
    tooltip_scene: Scene,
    intervals: Animator<u64, (f64, f64)>,
    opacities: Animator<OpacityTarget, f64>,
    pointer: Point,
    tooltip_lines: Vec<String>,
}

impl ChartController {
    /// Builds a controller over loaded datasets.
    ///
    /// Metrics are put in the initial alphabetical order; the value→radius
    /// and value→color mappings are fixed here from the full dataset and
    /// never change afterwards.
    pub fn new(
        layout: ChartLayout,
        mut metrics: Vec<StateMetric>,
        breakdowns: Vec<StateBreakdown>,
    ) -> Self {
        let stable_ids = metrics
            .iter()
            .enumerate()
            .map(|(i, m)| (m.abbrev.clone(), i as u64))
            .collect();

        sort_metrics(&mut metrics, SortMode::ByState);

        let max_ff = metrics
            .iter()
            .map(|m| m.ff_percapita)
            .fold(0.0, f64::max);
        let radial = ScaleRadial::new(max_ff, (layout.inner_radius, layout.outer_radius));
        let ramp_domain = infer_domain_f64(metrics.iter().map(|m| m.unique_count))
            .unwrap_or((0.0, 0.0));
        let ramp = ColorRamp::default_blues(ramp_domain);
        let angular =
            ScaleBandAngular::new(metrics.iter().map(|m| m.abbrev.clone()).collect());

        Self {
            layout,
            metrics,
            breakdowns,
            stable_ids,
            state: ViewState::default(),
            angular,
            radial,
            ramp,
            bars_scene: Scene::new(),
            pie_scene: Scene::new(),
            tooltip_scene: Scene::new(),
            intervals: Animator::new(),
            opacities: Animator::new(),
            pointer: Point::ORIGIN,
            tooltip_lines: Vec::new(),
        }
    }

    /// Applies one interaction event at the given time.
    pub fn handle_event(&mut self, event: Event, now_ms: f64) {
        let (next, effects) = transition(&self.state, event);
        self.state = next;
        for effect in effects {
            self.apply_effect(effect, now_ms);
        }
    }

    fn apply_effect(&mut self, effect: Effect, now_ms: f64) {
        match effect {
            Effect::BeginHover { abbrev, pointer } => {
                self.pointer = pointer;
                self.tooltip_lines = self.tooltip_lines_for(&abbrev);
                self.opacities.retarget(
                    OpacityTarget::Bars,
                    1.0,
                    HOVER_BAR_OPACITY,
                    now_ms,
                    HOVER_FADE_MS,
                );
                self.opacities.retarget(
                    OpacityTarget::Tooltip,
                    0.0,
                    TOOLTIP_VISIBLE_OPACITY,
                    now_ms,
                    TOOLTIP_FADE_IN_MS,
                );
            }
            Effect::MoveTooltip { pointer } => self.pointer = pointer,
            Effect::EndHover => {
                self.opacities
                    .retarget(OpacityTarget::Bars, 1.0, 1.0, now_ms, HOVER_FADE_MS);
                self.opacities.retarget(
                    OpacityTarget::Tooltip,
                    0.0,
                    0.0,
                    now_ms,
                    TOOLTIP_FADE_OUT_MS,
                );
            }
            Effect::Resort(mode) => self.resort(mode, now_ms),
        }
    }

    fn resort(&mut self, mode: SortMode, now_ms: f64) {
        // Capture where each bar currently sits before the domain changes;
        // mid-animation sorts start from the sampled position.
        let old: Vec<(u64, Option<(f64, f64)>)> = self
            .metrics
            .iter()
            .map(|m| {
                let id = self.stable_ids[&m.abbrev];
                (id, self.current_interval(&m.abbrev, now_ms))
            })
            .collect();
        let old: HashMap<u64, Option<(f64, f64)>> = old.into_iter().collect();

        sort_metrics(&mut self.metrics, mode);
        self.angular
            .set_domain(self.metrics.iter().map(|m| m.abbrev.clone()).collect());

        for metric in &self.metrics {
            let id = self.stable_ids[&metric.abbrev];
            let Some(target) = self.angular.interval(&metric.abbrev) else {
                continue;
            };
            let from = old.get(&id).copied().flatten().unwrap_or(target);
            self.intervals
                .retarget(id, from, target, now_ms, SORT_ANIMATION_MS);
        }
    }

    fn current_interval(&self, abbrev: &str, now_ms: f64) -> Option<(f64, f64)> {
        let id = *self.stable_ids.get(abbrev)?;
        let target = self.angular.interval(abbrev)?;
        Some(self.intervals.value_or(&id, target, now_ms))
    }

    fn tooltip_lines_for(&self, abbrev: &str) -> Vec<String> {
        let Some(metric) = self.metrics.iter().find(|m| m.abbrev == abbrev) else {
            return Vec::new();
        };
        vec![
            metric.state.clone(),
            format!("FF per 1k: {:.2}", metric.ff_percapita),
            format!("Unique FF: {:.2}", metric.unique_count),
        ]
    }

    /// Renders one frame: samples animations at `now_ms`, regenerates marks,
    /// and diffs them against the retained scenes.
    pub fn render(&mut self, now_ms: f64) -> RenderOutput {
        let bars = self.bars_scene.tick(self.bar_layer_marks(now_ms));
        let pie = self.pie_scene.tick(self.pie_layer_marks());
        let tooltip = self.tooltip_scene.tick(self.tooltip_layer_marks(now_ms));
        // Interval tweens fall back to the angular scale once pruned; opacity
        // tweens have no such backstop, so finished ones are kept and keep
        // reporting their settled value.
        self.intervals.prune_finished(now_ms);
        RenderOutput { bars, pie, tooltip }
    }

    fn bar_layer_marks(&self, now_ms: f64) -> Vec<Mark> {
        let hover_opacity = self
            .opacities
            .value_or(&OpacityTarget::Bars, 1.0, now_ms);
        let hovered = self.state.hovered.as_deref();
        let bars_spec = RadialBarsSpec {
            id_base: BARS_ID_BASE,
            center: self.layout.center,
            angular: self.angular.clone(),
            radial: self.radial,
            ramp: self.ramp,
            bars: Vec::new(),
        };
        let labels_spec = StateLabelsSpec::new(
            STATE_LABELS_ID_BASE,
            self.layout.center,
            self.layout.inner_radius,
            self.angular.clone(),
            Vec::new(),
        );

        let mut marks = Vec::with_capacity(self.metrics.len() * 3);
        for metric in &self.metrics {
            let id = self.stable_ids[&metric.abbrev];
            let Some(interval) = self.current_interval(&metric.abbrev, now_ms) else {
                continue;
            };
            // Only the hovered bar dims; the rest stay at full opacity.
            let opacity = if hovered == Some(metric.abbrev.as_str()) {
                hover_opacity
            } else {
                1.0
            };
            let bar = RadialBar::new(id, metric.abbrev.clone(), metric.ff_percapita, metric.unique_count)
                .with_opacity(opacity);
            marks.push(bars_spec.bar_mark(&bar, interval));

            let label = StateLabel {
                stable_id: id,
                key: metric.abbrev.clone(),
            };
            marks.extend(labels_spec.label_marks(&label, interval));
        }
        marks
    }

    fn pie_layer_marks(&self) -> Vec<Mark> {
        let Some(abbrev) = self.state.hovered.as_deref() else {
            return Vec::new();
        };
        let Some(breakdown) = self.breakdowns.iter().find(|b| b.abbrev == abbrev) else {
            return Vec::new();
        };
        let slices = pie_layout(
            breakdown
                .positive_entries()
                .map(|(brand, count)| (brand.to_string(), count)),
        );
        PieChartSpec::new(
            PIE_ID_BASE,
            self.layout.center,
            (self.layout.inner_radius - PIE_MARGIN).max(0.0),
            slices,
        )
        .marks()
    }

    fn tooltip_layer_marks(&self, now_ms: f64) -> Vec<Mark> {
        let opacity = self
            .opacities
            .value_or(&OpacityTarget::Tooltip, 0.0, now_ms);
        if opacity <= 0.0 || self.tooltip_lines.is_empty() {
            return Vec::new();
        }
        let spec = TooltipSpec::new(
            TOOLTIP_ID_BASE,
            self.pointer,
            self.layout.viewport,
            self.tooltip_lines.clone(),
        );
        let mut marks = spec.marks(&ffradial_charts::HeuristicTextMeasurer);
        for mark in &mut marks {
            match &mut mark.payload {
                MarkPayload::Rect(r) => r.opacity *= opacity,
                MarkPayload::Text(t) => t.opacity *= opacity,
                MarkPayload::Path(p) => p.opacity *= opacity,
            }
        }
        marks
    }

    /// The fixed chart geometry.
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    /// Metrics in the current display order.
    pub fn metrics(&self) -> &[StateMetric] {
        &self.metrics
    }

    /// The angular band scale in the current sort order.
    pub fn angular(&self) -> &ScaleBandAngular {
        &self.angular
    }

    /// The fixed radial scale.
    pub fn radial(&self) -> ScaleRadial {
        self.radial
    }

    /// The fixed color ramp.
    pub fn ramp(&self) -> ColorRamp {
        self.ramp
    }

    /// The current interaction state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Whether any animation is still running at `now_ms`.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.intervals.is_animating(now_ms) || self.opacities.is_animating(now_ms)
    }
}
