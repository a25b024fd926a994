//! SVG column chart.
//!
//! Renders a tabular payload (`data_arr` rows plus an options mapping):
//! series 0 as columns, any further numeric series as a polyline, skipping
//! role-annotation columns so richer combo payloads degrade gracefully.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use serde_json::{Map, Value};

use super::ChartModel;
use crate::core::format;

const DEFAULT_WIDTH: f64 = 600.0;
const DEFAULT_HEIGHT: f64 = 400.0;
const DEFAULT_GROUP_WIDTH: f64 = 0.9;
const DEFAULT_BAR_COLOR: &str = "#4a7c59";
const DEFAULT_LINE_COLOR: &str = "#22262e";

const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 36.0;
const MARGIN_LEFT: f64 = 24.0;
const MARGIN_RIGHT: f64 = 24.0;

/// Resolved chart geometry, ready to emit as SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub tick_y: f64,
    pub bar_color: String,
    pub line_color: String,
    pub bars: Vec<Bar>,
    pub overlays: Vec<Overlay>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value_label: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub center_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub points: String,
}

impl ChartSpec {
    pub fn from_model(model: &ChartModel) -> Result<Self, String> {
        let (header, rows) = model
            .data_arr
            .split_first()
            .ok_or_else(|| "payload has no header row".to_string())?;
        if rows.is_empty() {
            return Err("payload has no data rows".to_string());
        }

        // Column 0 holds the labels; object headers are role annotations
        // (intervals, tooltips) that this widget does not draw.
        let series_cols: Vec<usize> = header
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, cell)| !cell.is_object())
            .map(|(idx, _)| idx)
            .collect();
        if series_cols.is_empty() {
            return Err("payload has no value columns".to_string());
        }

        let options = ChartOptions::from_map(&model.options);

        let labels: Vec<String> = rows.iter().map(|row| label_text(row.first())).collect();
        let series: Vec<Vec<Option<f64>>> = series_cols
            .iter()
            .map(|&col| {
                rows.iter()
                    .map(|row| {
                        row.get(col)
                            .and_then(Value::as_f64)
                            .filter(|value| value.is_finite())
                    })
                    .collect()
            })
            .collect();

        let axis_max = series
            .iter()
            .flatten()
            .flatten()
            .fold(0.0f64, |acc, &value| acc.max(value));
        if axis_max <= 0.0 {
            return Err("payload has no positive values".to_string());
        }

        let plot_w = (options.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (options.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let slot = plot_w / labels.len() as f64;
        let bar_w = (slot * options.group_width).min(slot);

        let bars = labels
            .iter()
            .zip(&series[0])
            .enumerate()
            .map(|(idx, (label, value))| {
                let value = value.unwrap_or(0.0).max(0.0);
                let h = (value / axis_max).min(1.0) * plot_h;
                let x = MARGIN_LEFT + idx as f64 * slot + (slot - bar_w) / 2.0;
                let y = MARGIN_TOP + plot_h - h;
                Bar {
                    label: label.clone(),
                    value_label: value_label(value, axis_max),
                    x: round1(x),
                    y: round1(y),
                    w: round1(bar_w),
                    h: round1(h),
                    center_x: round1(MARGIN_LEFT + idx as f64 * slot + slot / 2.0),
                    label_y: round1((y - 6.0).max(14.0)),
                }
            })
            .collect();

        let overlays = series[1..]
            .iter()
            .map(|values| {
                let points = values
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, value)| {
                        value.map(|value| {
                            let x = MARGIN_LEFT + idx as f64 * slot + slot / 2.0;
                            let y = MARGIN_TOP + plot_h
                                - (value.max(0.0) / axis_max).min(1.0) * plot_h;
                            format!("{},{}", round1(x), round1(y))
                        })
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                Overlay { points }
            })
            .filter(|overlay| !overlay.points.is_empty())
            .collect();

        Ok(Self {
            title: options.title,
            width: options.width,
            height: options.height,
            tick_y: round1(options.height - MARGIN_BOTTOM + 20.0),
            bar_color: options.bar_color,
            line_color: options.line_color,
            bars,
            overlays,
        })
    }
}

#[component]
pub fn ColumnChart(model: ChartModel) -> Element {
    let spec = match ChartSpec::from_model(&model) {
        Ok(spec) => spec,
        Err(err) => {
            debug!("chart model rejected: {err}");
            return rsx! {};
        }
    };

    rsx! {
        svg {
            class: "stats-chart",
            width: "{spec.width}",
            height: "{spec.height}",
            view_box: "0 0 {spec.width} {spec.height}",
            role: "img",
            "aria-label": "{spec.title}",

            if !spec.title.is_empty() {
                text {
                    class: "stats-chart__title",
                    x: "{spec.width / 2.0}",
                    y: "28",
                    text_anchor: "middle",
                    "{spec.title}"
                }
            }

            for (idx, bar) in spec.bars.iter().enumerate() {
                g { key: "{idx}",
                    rect {
                        class: "stats-chart__bar",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.w}",
                        height: "{bar.h}",
                        fill: "{spec.bar_color}",
                    }
                    text {
                        class: "stats-chart__value",
                        x: "{bar.center_x}",
                        y: "{bar.label_y}",
                        text_anchor: "middle",
                        "{bar.value_label}"
                    }
                    text {
                        class: "stats-chart__tick",
                        x: "{bar.center_x}",
                        y: "{spec.tick_y}",
                        text_anchor: "middle",
                        "{bar.label}"
                    }
                }
            }

            for (idx, overlay) in spec.overlays.iter().enumerate() {
                polyline {
                    key: "{idx}",
                    class: "stats-chart__overlay",
                    points: "{overlay.points}",
                    fill: "none",
                    stroke: "{spec.line_color}",
                    stroke_width: "2",
                }
            }
        }
    }
}

struct ChartOptions {
    title: String,
    width: f64,
    height: f64,
    group_width: f64,
    bar_color: String,
    line_color: String,
}

impl ChartOptions {
    fn from_map(map: &Map<String, Value>) -> Self {
        let colors = map.get("colors").and_then(Value::as_array);
        Self {
            title: map
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            // Non-numeric sizes ("100%") fall back to the fixed defaults.
            width: map
                .get("width")
                .and_then(Value::as_f64)
                .filter(|width| *width > 0.0)
                .unwrap_or(DEFAULT_WIDTH),
            height: map
                .get("height")
                .and_then(Value::as_f64)
                .filter(|height| *height > 0.0)
                .unwrap_or(DEFAULT_HEIGHT),
            group_width: map
                .get("bar")
                .and_then(|bar| bar.get("groupWidth"))
                .map(parse_group_width)
                .unwrap_or(DEFAULT_GROUP_WIDTH),
            bar_color: colors
                .and_then(|colors| colors.first())
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_BAR_COLOR)
                .to_string(),
            line_color: colors
                .and_then(|colors| colors.get(1))
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_LINE_COLOR)
                .to_string(),
        }
    }
}

fn parse_group_width(value: &Value) -> f64 {
    if let Some(pct) = value
        .as_str()
        .and_then(|text| text.strip_suffix('%'))
        .and_then(|text| text.trim().parse::<f64>().ok())
    {
        return (pct / 100.0).clamp(0.05, 1.0);
    }
    if let Some(ratio) = value.as_f64() {
        if ratio > 0.0 && ratio <= 1.0 {
            return ratio;
        }
    }
    DEFAULT_GROUP_WIDTH
}

fn label_text(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

fn value_label(value: f64, axis_max: f64) -> String {
    if axis_max <= 1.0 {
        format::format_percent(value)
    } else {
        format!("{value:.0}")
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
