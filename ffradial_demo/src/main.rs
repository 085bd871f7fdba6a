// Copyright 2025 the FFRadial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG snapshot demo for the fast-food radial chart.
//!
//! Loads the two dataset CSVs, replays a scripted interaction (optional sort,
//! optional hover), lets every animation settle, and writes a single SVG.

mod svg;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use kurbo::{Point, Rect};
use peniko::color::palette::css;

use ffradial_charts::{
    ArcTitleSpec, HeuristicTextMeasurer, RadialAxisSpec, RampLegendSpec, Size, TextBlockSpec,
    z_order,
};
use ffradial_core::{Mark, MarkId, RectMark, Scene, TextAnchor, TextBaseline, TextMark};
use ffradial_data::{SortMode, load_datasets};
use ffradial_view::{ChartController, ChartLayout, Event};

/// Time (ms) at which the scripted hover happens; the sort animation has
/// settled by then.
const HOVER_AT_MS: f64 = 1500.0;
/// Time (ms) of the final frame; every fade and tween has settled.
const SNAPSHOT_AT_MS: f64 = 3000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum SortArg {
    /// Alphabetical by state abbreviation.
    #[default]
    State,
    /// Descending by restaurants per capita.
    Total,
    /// Descending by unique brands per capita.
    Unique,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::State => Self::ByState,
            SortArg::Total => Self::ByTotalPerCapita,
            SortArg::Unique => Self::ByUniquePerCapita,
        }
    }
}

/// Render the fast-food radial chart to an SVG file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Per-state metrics CSV (state,abbrev,ff_percapita,unique_count).
    metrics: PathBuf,

    /// Wide per-brand breakdown CSV (abbrev + one column per brand).
    breakdowns: PathBuf,

    /// Sort order for the bars.
    #[arg(long, value_enum, default_value_t)]
    sort: SortArg,

    /// Hover this state (two-letter abbreviation) before the snapshot.
    #[arg(long)]
    hover: Option<String>,

    /// Pointer x for the hover tooltip.
    #[arg(long, default_value_t = 660.0)]
    pointer_x: f64,

    /// Pointer y for the hover tooltip.
    #[arg(long, default_value_t = 240.0)]
    pointer_y: f64,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Output path.
    #[arg(long, default_value = "ffradial.svg")]
    out: PathBuf,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (metrics, breakdowns) = load_datasets(&args.metrics, &args.breakdowns)?;
    log::info!(
        "loaded {} states and {} breakdown rows",
        metrics.len(),
        breakdowns.len()
    );

    let viewport = Size {
        width: args.width,
        height: args.height,
    };
    let layout = ChartLayout::centered(viewport);
    let mut controller = ChartController::new(layout, metrics, breakdowns);

    // Replay the scripted interaction, then take the settled frame.
    controller.handle_event(Event::SortClicked(args.sort.into()), 0.0);
    if let Some(abbrev) = &args.hover {
        controller.handle_event(
            Event::PointerEnter {
                abbrev: abbrev.clone(),
                pointer: Point::new(args.pointer_x, args.pointer_y),
            },
            HOVER_AT_MS,
        );
    }
    let frame = controller.render(SNAPSHOT_AT_MS);

    let mut svg_scene = svg::SvgScene::default();
    svg_scene.set_view_box(Rect::new(0.0, 0.0, viewport.width, viewport.height));
    svg_scene.apply_diffs(&frame.bars);
    svg_scene.apply_diffs(&frame.pie);
    svg_scene.apply_diffs(&frame.tooltip);

    let mut dressing_scene = Scene::new();
    let dressing = dressing_scene.tick(dressing_marks(&controller));
    svg_scene.apply_diffs(&dressing);

    std::fs::write(&args.out, svg_scene.to_svg_string())?;
    log::info!("wrote {}", args.out.display());
    Ok(())
}

/// Static guide marks: axis, legend, titles, copy blocks, sort buttons.
fn dressing_marks(controller: &ChartController) -> Vec<Mark> {
    let measurer = HeuristicTextMeasurer;
    let layout = controller.layout();
    let mut marks = Vec::new();

    marks.extend(
        RadialAxisSpec::new(10_000, layout.center, controller.radial())
            .with_tick_count(5)
            .marks(),
    );

    marks.extend(
        RampLegendSpec::new(
            11_000,
            Point::new(20.0, 20.0),
            "Unique FF Restaurants",
            controller.ramp(),
        )
        .marks(),
    );

    marks.extend(
        ArcTitleSpec::new(
            12_000,
            layout.center,
            layout.outer_radius + 5.0,
            "Fast Food Restaurants per 1000 Residents",
        )
        .marks(&measurer),
    );

    let copy: [(&str, &str); 3] = [
        (
            "about",
            "Bar length shows fast food restaurants per 1000 residents; \
             bar color shows how many distinct chains operate in the state.",
        ),
        (
            "how to read",
            "Hover a state's bar to see its brand breakdown as a pie in the \
             center. Use the sort buttons to reorder the bars.",
        ),
        (
            "notes",
            "Per-capita values use resident population, so sparsely populated \
             states can rank surprisingly high.",
        ),
    ];
    let block_width = 190.0;
    let box_top = 106.0;
    let mut y = 120.0;
    let mut copy_marks = Vec::new();
    for (i, (heading, body)) in copy.iter().enumerate() {
        let id_base = 13_000 + (i as u64) * 100;
        copy_marks.push(Mark::text(
            MarkId::from_raw(id_base),
            z_order::TITLES,
            TextMark::new(Point::new(20.0, y), heading.to_uppercase())
                .with_font_size(11.0)
                .with_baseline(TextBaseline::Hanging)
                .with_fill(css::DIM_GRAY),
        ));
        y += 18.0;
        let block = TextBlockSpec::new(id_base + 1, Point::new(20.0, y), *body, block_width)
            .with_font_size(10.0);
        let lines = block.marks(&measurer);
        y += lines.len() as f64 * 12.0 + 14.0;
        copy_marks.extend(lines);
    }

    // White card behind the copy blocks so they read over the gridlines.
    marks.push(Mark::rect(
        MarkId::from_raw(12_900),
        z_order::PLOT_BACKGROUND,
        RectMark::new(Rect::new(12.0, box_top, 28.0 + block_width, y - 8.0))
            .with_fill(css::WHITE)
            .with_stroke(css::WHITE_SMOKE, 3.0)
            .with_corner_radius(3.0),
    ));
    marks.extend(copy_marks);

    marks.extend(sort_button_marks(controller));
    marks
}

/// The three sort buttons; exactly one is drawn selected.
fn sort_button_marks(controller: &ChartController) -> Vec<Mark> {
    let selected = controller.state().sort_mode;
    let buttons = [
        (SortMode::ByState, "By State"),
        (SortMode::ByTotalPerCapita, "By FF / Capita"),
        (SortMode::ByUniquePerCapita, "By Unique FF"),
    ];

    let origin = Point::new(controller.layout().viewport.width - 130.0, 20.0);
    let (width, height, gap) = (110.0, 24.0, 8.0);

    let mut marks = Vec::with_capacity(buttons.len() * 2);
    for (i, (mode, label)) in buttons.into_iter().enumerate() {
        let y = origin.y + i as f64 * (height + gap);
        let fill = if mode == selected {
            css::STEEL_BLUE
        } else {
            css::GAINSBORO
        };
        let text_fill = if mode == selected {
            css::WHITE
        } else {
            css::BLACK
        };
        marks.push(Mark::rect(
            MarkId::from_raw(14_000 + 2 * i as u64),
            z_order::TITLES,
            RectMark::new(Rect::new(origin.x, y, origin.x + width, y + height))
                .with_fill(fill)
                .with_corner_radius(4.0),
        ));
        marks.push(Mark::text(
            MarkId::from_raw(14_001 + 2 * i as u64),
            z_order::TITLES,
            TextMark::new(Point::new(origin.x + width / 2.0, y + height / 2.0), label)
                .with_font_size(10.0)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_fill(text_fill),
        ));
    }
    marks
}
