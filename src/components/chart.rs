//! Chart Components
//!
//! Pie, bar and line charts drawn on HTML5 Canvas from literal fixture
//! series.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::fixtures::analytics::{ChartSeries, TrendSeries};

/// Pie chart with an HTML legend
#[component]
pub fn PieChart(series: ChartSeries) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let draw_series = series.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &draw_series);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="400" height="260" class="w-full h-64" />
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {series.labels.iter().zip(series.colors.iter()).map(|(label, color)| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-sm text-gray-600">{*label}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Vertical bar chart with a y-axis in percent
#[component]
pub fn BarChart(series: ChartSeries) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &series);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="500" height="260" class="w-full h-64" />
    }
}

/// Multi-series line chart with an HTML legend
#[component]
pub fn LineChart(
    labels: Vec<&'static str>,
    series: Vec<TrendSeries>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let draw_labels = labels.clone();
    let draw_series = series.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_lines(&canvas, &draw_labels, &draw_series);
        }
    });

    view! {
        <div>
            <div class="flex justify-center flex-wrap gap-4 mb-4">
                {series.iter().map(|s| {
                    let color = s.color;
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-600">{s.label}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
            <canvas node_ref=canvas_ref width="800" height="320" class="w-full h-80" />
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Draw a pie chart: one slice per value, proportional to the series total
fn draw_pie(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    let total: f64 = series.values.iter().sum();
    if total <= 0.0 {
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 10.0;

    // Start at 12 o'clock
    let mut angle = -std::f64::consts::FRAC_PI_2;

    for (value, color) in series.values.iter().zip(series.colors.iter()) {
        let sweep = value / total * std::f64::consts::PI * 2.0;

        ctx.set_fill_style(&(*color).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, angle, angle + sweep);
        ctx.close_path();
        ctx.fill();

        // Slice separator
        ctx.set_stroke_style(&"#ffffff".into());
        ctx.set_line_width(2.0);
        ctx.stroke();

        angle += sweep;
    }
}

/// Draw a bar chart with horizontal grid lines and axis labels
fn draw_bars(canvas: &HtmlCanvasElement, series: &ChartSeries) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 10.0;
    let margin_top = 10.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    let max = series.values.iter().cloned().fold(0.0, f64::max);
    if max <= 0.0 {
        return;
    }

    // Horizontal grid lines (5 lines)
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}%", value), 5.0, y + 4.0);
    }

    // Bars
    let slot = chart_width / series.values.len() as f64;
    let bar_width = slot * 0.6;

    for (i, (value, color)) in series.values.iter().zip(series.colors.iter()).enumerate() {
        let bar_height = value / max * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&(*color).into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // X-axis labels
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(series.labels[i], x, height - 10.0);
    }
}

/// Draw a multi-series line chart over evenly spaced labels
fn draw_lines(canvas: &HtmlCanvasElement, labels: &[&'static str], series: &[TrendSeries]) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Find global max for the y-axis; the baseline is zero
    let mut global_max = f64::NEG_INFINITY;
    for s in series {
        for value in &s.values {
            global_max = global_max.max(*value);
        }
    }
    if !global_max.is_finite() || global_max <= 0.0 {
        return;
    }
    global_max *= 1.1;

    // Grid lines and y labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = global_max - (i as f64 / 5.0) * global_max;
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    let steps = (labels.len().max(2) - 1) as f64;

    // One polyline plus point markers per series
    for s in series {
        ctx.set_stroke_style(&s.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, value) in s.values.iter().enumerate() {
            let x = margin_left + (i as f64 / steps) * chart_width;
            let y = margin_top + ((global_max - value) / global_max) * chart_height;
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&s.color.into());
        for (i, value) in s.values.iter().enumerate() {
            let x = margin_left + (i as f64 / steps) * chart_width;
            let y = margin_top + ((global_max - value) / global_max) * chart_height;
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // X-axis labels
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("11px sans-serif");
    for (i, label) in labels.iter().enumerate() {
        let x = margin_left + (i as f64 / steps) * chart_width;
        let _ = ctx.fill_text(label, x - 10.0, height - 10.0);
    }
}
