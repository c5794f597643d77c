//! SVG chart components: the stacked release-count area chart and the
//! user-vs-critic score scatter plot. Geometry is computed in plain helpers
//! so it stays unit-testable without a renderer.

use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::core::filter::{AreaPoint, ScatterPoint};
use crate::core::format;

const CHART_WIDTH: f64 = 560.0;
const CHART_HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;

// Tableau 10.
const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

pub(crate) fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn plot_width() -> f64 {
    CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// Horizontal pixel position for `value` within `[lo, hi]`. A degenerate
/// domain maps everything to the plot center.
fn x_pos(value: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return MARGIN_LEFT + plot_width() / 2.0;
    }
    MARGIN_LEFT + (value - lo) / (hi - lo) * plot_width()
}

/// Vertical pixel position for `value` within `[0, max]` (y grows downward).
fn y_pos(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return MARGIN_TOP + plot_height();
    }
    MARGIN_TOP + plot_height() - value / max * plot_height()
}

/// One platform's slice of the stacked area: per axis year, the cumulative
/// band below it and the band top including its own quantity.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlatformBand {
    pub platform: String,
    pub segments: Vec<(u16, u32, u32)>,
}

/// Distinct release years across all points, ascending.
pub(crate) fn axis_years(points: &[AreaPoint]) -> Vec<u16> {
    let mut years: Vec<u16> = points.iter().map(|point| point.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Builds cumulative per-platform bands over the shared year axis. Years a
/// platform has no releases in contribute zero height, so every band spans
/// the full axis and the stack never overlaps. Returns the bands (platforms
/// ascending, bottom of the stack first) and the tallest stacked total.
pub(crate) fn stacked_bands(points: &[AreaPoint]) -> (Vec<PlatformBand>, u32) {
    let years = axis_years(points);

    let mut by_platform: BTreeMap<String, BTreeMap<u16, u32>> = BTreeMap::new();
    for point in points {
        by_platform
            .entry(point.platform.clone())
            .or_default()
            .insert(point.year, point.quantity);
    }

    let mut running: BTreeMap<u16, u32> = years.iter().map(|year| (*year, 0)).collect();
    let mut max_total = 0u32;
    let mut bands = Vec::with_capacity(by_platform.len());

    for (platform, quantities) in by_platform {
        let mut segments = Vec::with_capacity(years.len());
        for year in &years {
            let lower = running[year];
            let upper = lower + quantities.get(year).copied().unwrap_or(0);
            running.insert(*year, upper);
            max_total = max_total.max(upper);
            segments.push((*year, lower, upper));
        }
        bands.push(PlatformBand { platform, segments });
    }

    (bands, max_total)
}

/// Polygon point list for a band: along the upper edge left to right, then
/// back along the lower edge.
fn band_polygon(band: &PlatformBand, year_lo: u16, year_hi: u16, max_total: u32) -> String {
    let lo = f64::from(year_lo);
    let hi = f64::from(year_hi);
    let max = f64::from(max_total);

    let mut coords = Vec::with_capacity(band.segments.len() * 2);
    for (year, _, upper) in &band.segments {
        coords.push((x_pos(f64::from(*year), lo, hi), y_pos(f64::from(*upper), max)));
    }
    for (year, lower, _) in band.segments.iter().rev() {
        coords.push((x_pos(f64::from(*year), lo, hi), y_pos(f64::from(*lower), max)));
    }

    coords
        .into_iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn ReleaseAreaChart(points: Vec<AreaPoint>) -> Element {
    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h2 { class: "chart-card__title", "Releases per platform" }
            }
            if points.is_empty() {
                p { class: "chart-card__placeholder", "No games match the current filters." }
            } else {
                {render_area(&points)}
            }
        }
    }
}

fn render_area(points: &[AreaPoint]) -> Element {
    let years = axis_years(points);
    let (bands, max_total) = stacked_bands(points);
    let year_lo = years.first().copied().unwrap_or(0);
    let year_hi = years.last().copied().unwrap_or(0);

    let polygons: Vec<(String, &'static str, String)> = bands
        .iter()
        .enumerate()
        .map(|(index, band)| {
            (
                band.platform.clone(),
                palette_color(index),
                band_polygon(band, year_lo, year_hi, max_total),
            )
        })
        .collect();

    let baseline = MARGIN_TOP + plot_height();
    let right = CHART_WIDTH - MARGIN_RIGHT;
    let tick_y = baseline + 24.0;
    let max_label_x = MARGIN_LEFT - 8.0;
    let max_label_y = MARGIN_TOP + 12.0;
    let max_label = format::format_quantity(max_total);

    rsx! {
        svg {
            class: "chart",
            width: "{CHART_WIDTH}",
            height: "{CHART_HEIGHT}",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            role: "img",

            line {
                x1: "{MARGIN_LEFT}", y1: "{baseline}", x2: "{right}", y2: "{baseline}",
                class: "chart__axis",
            }
            line {
                x1: "{MARGIN_LEFT}", y1: "{MARGIN_TOP}", x2: "{MARGIN_LEFT}", y2: "{baseline}",
                class: "chart__axis",
            }

            for (_, color, polygon_points) in polygons.iter() {
                polygon {
                    points: "{polygon_points}",
                    fill: "{color}",
                    fill_opacity: "0.75",
                }
            }

            text {
                x: "{MARGIN_LEFT}", y: "{tick_y}",
                class: "chart__tick",
                text_anchor: "start",
                "{year_lo}"
            }
            text {
                x: "{right}", y: "{tick_y}",
                class: "chart__tick",
                text_anchor: "end",
                "{year_hi}"
            }
            text {
                x: "{max_label_x}", y: "{max_label_y}",
                class: "chart__tick",
                text_anchor: "end",
                "{max_label}"
            }
        }
        div { class: "chart__legend",
            for (platform, color, _) in polygons.iter() {
                span { class: "chart__legend-item",
                    span { class: "chart__legend-swatch", style: "background: {color}" }
                    "{platform}"
                }
            }
        }
    }
}

#[component]
pub fn ScoreScatterChart(points: Vec<ScatterPoint>) -> Element {
    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h2 { class: "chart-card__title", "User score vs. critic score" }
            }
            if points.is_empty() {
                p { class: "chart-card__placeholder", "No games match the current filters." }
            } else {
                {render_scatter(&points)}
            }
        }
    }
}

/// Distinct genres across the points, ascending, for stable color assignment.
pub(crate) fn scatter_genres(points: &[ScatterPoint]) -> Vec<String> {
    let mut genres: Vec<String> = points.iter().map(|point| point.genre.clone()).collect();
    genres.sort_unstable();
    genres.dedup();
    genres
}

// Score axes are fixed to the dataset's scales rather than fitted to the
// selection, so the view doesn't rescale on every filter change.
const USER_SCORE_MAX: f64 = 10.0;
const CRITIC_SCORE_MAX: f64 = 100.0;

fn render_scatter(points: &[ScatterPoint]) -> Element {
    let genres = scatter_genres(points);
    let color_of = |genre: &str| {
        let index = genres
            .iter()
            .position(|candidate| candidate == genre)
            .unwrap_or(0);
        palette_color(index)
    };

    let dots: Vec<(f64, f64, &'static str)> = points
        .iter()
        .map(|point| {
            (
                x_pos(point.user_score, 0.0, USER_SCORE_MAX),
                y_pos(point.critic_score, CRITIC_SCORE_MAX),
                color_of(&point.genre),
            )
        })
        .collect();

    let legend: Vec<(String, &'static str)> = genres
        .iter()
        .map(|genre| (genre.clone(), color_of(genre)))
        .collect();

    let baseline = MARGIN_TOP + plot_height();
    let right = CHART_WIDTH - MARGIN_RIGHT;
    let tick_y = baseline + 24.0;
    let max_label_x = MARGIN_LEFT - 8.0;
    let max_label_y = MARGIN_TOP + 12.0;
    let user_lo = format::format_score(0.0);
    let user_hi = format::format_score(USER_SCORE_MAX);

    rsx! {
        svg {
            class: "chart",
            width: "{CHART_WIDTH}",
            height: "{CHART_HEIGHT}",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            role: "img",

            line {
                x1: "{MARGIN_LEFT}", y1: "{baseline}", x2: "{right}", y2: "{baseline}",
                class: "chart__axis",
            }
            line {
                x1: "{MARGIN_LEFT}", y1: "{MARGIN_TOP}", x2: "{MARGIN_LEFT}", y2: "{baseline}",
                class: "chart__axis",
            }

            for (cx, cy, color) in dots.iter() {
                circle { cx: "{cx}", cy: "{cy}", r: "4", fill: "{color}", fill_opacity: "0.8" }
            }

            text {
                x: "{MARGIN_LEFT}", y: "{tick_y}",
                class: "chart__tick",
                text_anchor: "start",
                "{user_lo}"
            }
            text {
                x: "{right}", y: "{tick_y}",
                class: "chart__tick",
                text_anchor: "end",
                "{user_hi}"
            }
            text {
                x: "{max_label_x}", y: "{max_label_y}",
                class: "chart__tick",
                text_anchor: "end",
                "100"
            }
        }
        div { class: "chart__legend",
            for (genre, color) in legend.iter() {
                span { class: "chart__legend-item",
                    span {
                        class: "chart__legend-swatch",
                        style: "background: {color}",
                    }
                    "{genre}"
                }
            }
        }
    }
}
