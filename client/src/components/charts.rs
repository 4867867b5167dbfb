//! SVG charts for the dashboard.
//!
//! Geometry comes from `util::chart_math`; these components only map it to
//! elements and labels.

use leptos::prelude::*;

use crate::net::types::{CategoryCount, DailyCount, ModelUsage};
use crate::util::chart_math::{
    Frame, arc_path, bar_layout, line_points, nice_ceiling, palette_color, percent_label, pie_slices,
    polar, polyline_path,
};
use crate::util::format::{format_count, model_color};

const LINE_FRAME: Frame = Frame {
    width: 640.0,
    height: 300.0,
    padding: 32.0,
};
const BAR_FRAME: Frame = Frame {
    width: 480.0,
    height: 250.0,
    padding: 28.0,
};
const PIE_SIZE: f64 = 220.0;
const PIE_RADIUS: f64 = 80.0;

/// Prompts-per-day line chart.
#[component]
pub fn PromptsLineChart(#[prop(into)] series: Signal<Vec<DailyCount>>) -> impl IntoView {
    let chart = move || {
        let series = series.get();
        if series.is_empty() {
            return view! { <p class="chart__empty">"No data for this range"</p> }.into_any();
        }
        let counts: Vec<u64> = series.iter().map(|day| day.count).collect();
        let ceiling = nice_ceiling(counts.iter().copied().max().unwrap_or(0));
        let points = line_points(&counts, LINE_FRAME, ceiling);
        let path = polyline_path(&points);
        let dots = points
            .iter()
            .zip(&series)
            .map(|((x, y), day)| {
                view! {
                    <circle class="chart__dot" cx={*x} cy={*y} r="4"></circle>
                    <text class="chart__axis-label" x={*x} y={LINE_FRAME.height - 8.0} text-anchor="middle">
                        {day.date.clone()}
                    </text>
                }
            })
            .collect_view();

        view! {
            <svg class="chart chart--line" viewBox=format!("0 0 {} {}", LINE_FRAME.width, LINE_FRAME.height)>
                <line
                    class="chart__grid"
                    x1=LINE_FRAME.padding
                    y1=LINE_FRAME.padding
                    x2={LINE_FRAME.width - LINE_FRAME.padding}
                    y2=LINE_FRAME.padding
                ></line>
                <line
                    class="chart__grid"
                    x1=LINE_FRAME.padding
                    y1=LINE_FRAME.bottom()
                    x2={LINE_FRAME.width - LINE_FRAME.padding}
                    y2=LINE_FRAME.bottom()
                ></line>
                <text class="chart__axis-label" x="4" y={LINE_FRAME.padding + 4.0}>{format_count(ceiling)}</text>
                <path class="chart__line" d=path fill="none" stroke="#3498db" stroke-width="2"></path>
                {dots}
            </svg>
        }
        .into_any()
    };

    view! { <div class="chart">{chart}</div> }
}

/// Model-usage pie with percentage labels and a legend.
#[component]
pub fn ModelUsagePie(usage: Vec<ModelUsage>) -> impl IntoView {
    let counts: Vec<u64> = usage.iter().map(|m| m.count).collect();
    let slices = pie_slices(&counts);
    if slices.is_empty() {
        return view! { <p class="chart__empty">"No model usage recorded"</p> }.into_any();
    }
    let center = PIE_SIZE / 2.0;

    let wedges = slices
        .iter()
        .zip(&usage)
        .map(|(slice, model)| {
            let (lx, ly) = polar(center, center, PIE_RADIUS * 0.6, slice.mid());
            view! {
                <path d=arc_path(center, center, PIE_RADIUS, *slice) fill=model_color(&model.model)></path>
                <text class="chart__slice-label" x=lx y=ly text-anchor="middle" dominant-baseline="central">
                    {percent_label(slice.fraction)}
                </text>
            }
        })
        .collect_view();

    let legend = usage
        .iter()
        .map(|model| {
            view! {
                <li class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background-color: {}", model_color(&model.model))></span>
                    {model.model.clone()}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--pie">
            <svg viewBox=format!("0 0 {PIE_SIZE} {PIE_SIZE}")>{wedges}</svg>
            <ul class="chart__legend">{legend}</ul>
        </div>
    }
    .into_any()
}

/// Top-categories bar chart.
#[component]
pub fn CategoryBars(categories: Vec<CategoryCount>) -> impl IntoView {
    let counts: Vec<u64> = categories.iter().map(|c| c.count).collect();
    let bars = bar_layout(&counts, BAR_FRAME, 16.0);
    if bars.is_empty() {
        return view! { <p class="chart__empty">"No categories recorded"</p> }.into_any();
    }

    let rects = bars
        .iter()
        .zip(&categories)
        .enumerate()
        .map(|(i, (bar, category))| {
            view! {
                <rect x=bar.x y=bar.y width=bar.width height=bar.height rx="4" fill=palette_color(i)></rect>
                <text class="chart__axis-label" x={bar.x + bar.width / 2.0} y={BAR_FRAME.height - 8.0} text-anchor="middle">
                    {category.category.clone()}
                </text>
                <text class="chart__bar-value" x={bar.x + bar.width / 2.0} y={bar.y - 6.0} text-anchor="middle">
                    {format_count(category.count)}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart chart--bars" viewBox=format!("0 0 {} {}", BAR_FRAME.width, BAR_FRAME.height)>
                {rects}
            </svg>
        </div>
    }
    .into_any()
}
