//! SVG line chart of the summary history.
//!
//! Plots the mean/min/max series over the configured span, newest at the
//! right edge. Axis labels, the reference line, and the series all go
//! through the same viewport transform.

use alloc::string::String;
use core::fmt::Write;

use crate::config::ChartConfig;
use crate::plot::{ChartViewport, scale_ceiling, time_ticks, value_ticks};
use crate::storage::{SUMMARY_WINDOW_SECONDS, Summary, SummaryStore};

use super::{GRAPH_CSS, PAGE_FOOTER, make_styled_page};

/// Reference line drawn at the outdoor baseline concentration.
const BASELINE_PPM: f32 = 400.0;

/// Render the chart page for the summary history.
pub fn graph_page<const N: usize>(summaries: &SummaryStore<N>, config: &ChartConfig) -> String {
    let viewport = ChartViewport::from_config(config);
    let observed_max = summaries.iter().map(|s| s.ppm_max).max();
    let ceiling = scale_ceiling(config.scale, observed_max);

    let mut contents = String::new();
    let _ = write!(
        contents,
        "<h1>CO<sub>2</sub> for {span} hours</h1>\
         <p>CO<sub>2</sub> concentrations for the past {span} hours</p>\n",
        span = config.hours_span,
    );

    let _ = write!(
        contents,
        "<div class=\"cograph\">\
         <svg version=\"1.2\" xmlns=\"http://www.w3.org/2000/svg\" class=\"cograph\" \
         width=\"{}px\" height=\"{}px\" overflow=\"visible\">\n",
        config.width, config.height,
    );

    // Axis titles
    contents.push_str(
        "<g class=\"label-title\">\
         <text x=\"-200\" y=\"-30\" transform=\"rotate(-90)\">ppm</text></g>\n\
         <g class=\"label-title\"><text x=\"50%\" y=\"380\">Time (hours ago)</text></g>\n",
    );

    contents.push_str("<g class=\"x-labels\">\n");
    for tick in time_ticks(&viewport, config.hours_span).iter() {
        let _ = write!(
            contents,
            "<text x=\"{}\" y=\"{}\">{}</text>\n",
            tick.position.x, tick.position.y, tick.label,
        );
    }
    contents.push_str("</g>\n<g class=\"y-labels\">\n");
    for tick in value_ticks(&viewport, ceiling).iter() {
        let _ = write!(
            contents,
            "<text x=\"{}\" y=\"{}\">{}</text>\n",
            tick.position.x, tick.position.y, tick.label,
        );
    }
    contents.push_str("</g>\n");

    // Reference line at the outdoor baseline
    let baseline_left = viewport.to_canvas(0.0, BASELINE_PPM / ceiling);
    let baseline_right = viewport.to_canvas(1.0, BASELINE_PPM / ceiling);
    let _ = write!(
        contents,
        "<polyline fill=\"none\" stroke=\"#000088\" stroke-width=\"2\" points=\"\n\
         {},{}\n{},{}\n\"></polyline>\n",
        baseline_left.x, baseline_left.y, baseline_right.x, baseline_right.y,
    );

    // Mean in front, min/max behind in a lighter stroke
    let span_points = points_in_span(config);
    for (stroke, width, value) in [
        ("#00ee00", 2, (|s: &Summary| s.ppm_mean) as fn(&Summary) -> u16),
        ("#cccccc", 1, |s: &Summary| s.ppm_min),
        ("#cccccc", 1, |s: &Summary| s.ppm_max),
    ] {
        let _ = write!(
            contents,
            "<polyline fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{width}\" points=\"\n",
        );
        contents.push_str(&series_points(summaries, span_points, value, ceiling, &viewport));
        contents.push_str("\"></polyline>\n");
    }

    contents.push_str("</svg></div>\n");
    contents.push_str(PAGE_FOOTER);
    make_styled_page("CO2 graph", GRAPH_CSS, &contents)
}

/// Number of summaries that fit the configured span.
fn points_in_span(config: &ChartConfig) -> usize {
    ((config.hours_span * 3600 / SUMMARY_WINDOW_SECONDS) as usize).max(1)
}

/// Polyline points for one series, plotted newest first: the newest
/// summary lands at x = 1 and each older one steps left by one window.
fn series_points<const N: usize>(
    summaries: &SummaryStore<N>,
    span_points: usize,
    value: fn(&Summary) -> u16,
    ceiling: f32,
    viewport: &ChartViewport,
) -> String {
    let count = summaries.count();
    let plotted = count.min(span_points);
    let x_step = 1.0 / span_points as f32;

    let mut out = String::new();
    for offset in 1..=plotted {
        if let Ok(summary) = summaries.at(count - offset) {
            let point = viewport.to_canvas(
                1.0 - offset as f32 * x_step,
                f32::from(value(&summary)) / ceiling,
            );
            let _ = write!(out, "{},{}\n", point.x, point.y);
        }
    }
    out
}
