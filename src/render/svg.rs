//! SVG bar chart
//!
//! Draws a [`ChartSpec`] as a self-contained `<svg>` element.

use std::fmt::Write;

use super::escape_html;
use crate::view::{format_si, ChartSpec};

pub const CHART_WIDTH: f64 = 900.0;
pub const CHART_HEIGHT: f64 = 480.0;

const MARGIN_TOP: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 70.0;
const MARGIN_LEFT: f64 = 90.0;

/// Target number of y-axis intervals
const Y_TICKS: usize = 5;

/// Render the chart as an inline SVG element
pub fn render_chart(chart: &ChartSpec) -> String {
    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;

    let (step, top) = nice_scale(chart.max_value(), Y_TICKS);
    let y_of = |v: f64| baseline - (v / top) * plot_h;

    let mut svg = String::new();
    // Writing to a String never fails
    let _ = write!(
        svg,
        r#"<svg class="chart" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{title}">"#,
        w = CHART_WIDTH,
        h = CHART_HEIGHT,
        title = escape_html(&chart.title),
    );

    let _ = write!(
        svg,
        r#"<text class="chart-title" x="{x}" y="32" text-anchor="middle" font-size="18">{title}</text>"#,
        x = CHART_WIDTH / 2.0,
        title = escape_html(&chart.title),
    );

    // Gridlines and y tick labels
    let intervals = ((top / step).round() as usize).min(Y_TICKS * 2);
    for i in 0..=intervals {
        let tick = step * i as f64;
        let y = y_of(tick);
        let _ = write!(
            svg,
            r##"<line x1="{x1}" y1="{y:.1}" x2="{x2}" y2="{y:.1}" stroke="#e5e5e5"/><text x="{lx}" y="{ty:.1}" text-anchor="end" font-size="12">{label}</text>"##,
            x1 = MARGIN_LEFT,
            x2 = MARGIN_LEFT + plot_w,
            lx = MARGIN_LEFT - 8.0,
            ty = y + 4.0,
            label = format_si(tick),
        );
    }

    // Bars
    if !chart.bars.is_empty() {
        let slot = plot_w / chart.bars.len() as f64;
        let bar_w = slot * 0.8;

        for (idx, bar) in chart.bars.iter().enumerate() {
            let x = MARGIN_LEFT + slot * idx as f64 + (slot - bar_w) / 2.0;
            let y = y_of(bar.value);
            let center = x + bar_w / 2.0;
            let category = escape_html(&bar.category);

            let _ = write!(
                svg,
                r#"<g class="bar"><title>{category}: {value}</title><rect x="{x:.1}" y="{y:.1}" width="{bw:.1}" height="{bh:.1}" fill="{color}"/><text x="{cx:.1}" y="{ty:.1}" text-anchor="middle" font-size="13">{text}</text><text x="{cx:.1}" y="{ly:.1}" text-anchor="middle" font-size="13">{category}</text></g>"#,
                value = bar.value,
                bw = bar_w,
                bh = baseline - y,
                color = escape_html(&bar.color),
                cx = center,
                ty = y - 6.0,
                text = escape_html(&bar.text),
                ly = baseline + 20.0,
            );
        }
    }

    // Axes
    let _ = write!(
        svg,
        r##"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="#444"/><line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="#444"/>"##,
        l = MARGIN_LEFT,
        r = MARGIN_LEFT + plot_w,
        t = MARGIN_TOP,
        b = baseline,
    );

    let _ = write!(
        svg,
        r#"<text class="x-label" x="{x}" y="{y}" text-anchor="middle" font-size="14">{label}</text>"#,
        x = MARGIN_LEFT + plot_w / 2.0,
        y = CHART_HEIGHT - 18.0,
        label = escape_html(&chart.x_label),
    );

    let _ = write!(
        svg,
        r#"<text class="y-label" x="{x}" y="{y}" text-anchor="middle" font-size="14" transform="rotate(-90 {x} {y})">{label}</text>"#,
        x = 22.0,
        y = MARGIN_TOP + plot_h / 2.0,
        label = escape_html(&chart.y_label),
    );

    svg.push_str("</svg>");
    svg
}

/// Pick a 1/2/5 x 10^n tick step so that `ticks` steps cover `max`
///
/// Returns `(step, top)` where `top` is the axis maximum. An empty chart
/// still gets a unit axis; when rounding `top` up would overflow, the axis
/// ends at `max` itself.
fn nice_scale(max: f64, ticks: usize) -> (f64, f64) {
    if max <= 0.0 || !max.is_finite() {
        return (1.0 / ticks as f64, 1.0);
    }

    let raw = max / ticks as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    let step = nice * magnitude;
    let top = (max / step).ceil() * step;
    if !step.is_finite() || !top.is_finite() {
        return (max / ticks as f64, max);
    }
    (step, top)
}
