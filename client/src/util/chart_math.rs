//! SVG geometry for the dashboard charts.
//!
//! All functions work in the chart's own viewBox coordinates with the origin
//! at the top-left, so callers only pick a size. Angles are radians, measured
//! clockwise from twelve o'clock.

#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

pub const PALETTE: [&str; 4] = ["#3498db", "#9b59b6", "#2ecc71", "#e67e22"];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Drawing area inside a viewBox of `width` x `height` with uniform `padding`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    pub fn inner_width(self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn inner_height(self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    pub fn bottom(self) -> f64 {
        self.height - self.padding
    }
}

/// Smallest 1/2/5 x 10^n that is at least `max`; `1` for an empty series.
pub fn nice_ceiling(max: u64) -> u64 {
    if max == 0 {
        return 1;
    }
    let mut magnitude = 1u64;
    while magnitude.saturating_mul(10) <= max {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10 * magnitude)
}

/// Evenly spaced points for a line chart scaled against `ceiling`.
pub fn line_points(values: &[u64], frame: Frame, ceiling: u64) -> Vec<(f64, f64)> {
    let ceiling = ceiling.max(1) as f64;
    let step = if values.len() > 1 {
        frame.inner_width() / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() > 1 {
                frame.padding + step * i as f64
            } else {
                frame.width / 2.0
            };
            let y = frame.bottom() - frame.inner_height() * (*value as f64 / ceiling);
            (x, y)
        })
        .collect()
}

/// `M x y L x y ...` path through `points`.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{}{cmd} {x:.1} {y:.1}", if i == 0 { "" } else { " " });
    }
    path
}

/// One wedge of a pie chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

impl PieSlice {
    pub fn mid(self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Wedges proportional to `values`. Empty or all-zero input yields none.
pub fn pie_slices(values: &[u64]) -> Vec<PieSlice> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let fraction = *value as f64 / total as f64;
            let end = start + fraction * TAU;
            let slice = PieSlice { start, end, fraction };
            start = end;
            slice
        })
        .collect()
}

/// Point on the circle at `angle`.
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// SVG path for a wedge. A full-circle slice is drawn as two half arcs.
pub fn arc_path(cx: f64, cy: f64, radius: f64, slice: PieSlice) -> String {
    let sweep = slice.end - slice.start;
    if sweep >= TAU - 1e-9 {
        let (x0, y0) = polar(cx, cy, radius, 0.0);
        let (x1, y1) = polar(cx, cy, radius, std::f64::consts::PI);
        return format!(
            "M {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 1 1 {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 1 1 {x0:.2} {y0:.2} Z"
        );
    }
    let (x0, y0) = polar(cx, cy, radius, slice.start);
    let (x1, y1) = polar(cx, cy, radius, slice.end);
    let large = u8::from(sweep > std::f64::consts::PI);
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large} 1 {x1:.2} {y1:.2} Z")
}

/// Whole-number percentage label, e.g. `42%`.
pub fn percent_label(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// One bar in viewBox coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical bars filling the frame, separated by `gap`.
pub fn bar_layout(values: &[u64], frame: Frame, gap: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let ceiling = nice_ceiling(values.iter().copied().max().unwrap_or(0)) as f64;
    let count = values.len() as f64;
    let width = ((frame.inner_width() - gap * (count - 1.0)) / count).max(0.0);
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let height = frame.inner_height() * (*value as f64 / ceiling);
            Bar {
                x: frame.padding + i as f64 * (width + gap),
                y: frame.bottom() - height,
                width,
                height,
            }
        })
        .collect()
}
