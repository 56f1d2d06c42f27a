//! Axis tick placement and labels.
//!
//! Ticks are evaluated through the same viewport transform as the data
//! series, at fixed fractional positions: sevenths-of-six for the value
//! axis, quarters for the time axis. Labels are built in fixed-capacity
//! strings to avoid heap allocation during rendering.

use core::fmt::Write;

use embedded_graphics::prelude::*;
use heapless::{String, Vec};

use super::viewport::ChartViewport;

/// Maximum length of a tick label.
pub const MAX_TICK_LABEL_LENGTH: usize = 8;

/// Labels drawn on the value axis: one per sixth of the ceiling, plus zero.
pub const VALUE_TICK_COUNT: usize = 7;

/// Labels drawn on the time axis: one per quarter of the span, plus "now".
pub const TIME_TICK_COUNT: usize = 5;

/// Horizontal fraction at which value labels are anchored, left of the axis.
const VALUE_LABEL_X: f32 = -0.05;

/// Vertical fraction at which time labels are anchored, below the axis.
const TIME_LABEL_Y: f32 = -0.1;

/// One axis tick: canvas position plus label text.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: Point,
    pub label: String<MAX_TICK_LABEL_LENGTH>,
}

/// Value-axis ticks for the given scale ceiling, bottom to top.
pub fn value_ticks(viewport: &ChartViewport, ceiling: f32) -> Vec<Tick, VALUE_TICK_COUNT> {
    let increment = ceiling / (VALUE_TICK_COUNT - 1) as f32;

    let mut ticks = Vec::new();
    for i in 0..VALUE_TICK_COUNT {
        let fraction = i as f32 / (VALUE_TICK_COUNT - 1) as f32;
        let position = viewport.to_canvas(VALUE_LABEL_X, fraction);

        let mut label = String::new();
        let _ = write!(label, "{}", (increment * i as f32) as u16);
        let _ = ticks.push(Tick { position, label });
    }
    ticks
}

/// Time-axis ticks for the given span, oldest to newest. Interior ticks
/// are labeled in whole hours ago; the right edge reads "Now".
pub fn time_ticks(viewport: &ChartViewport, hours_span: u32) -> Vec<Tick, TIME_TICK_COUNT> {
    let mut ticks = Vec::new();
    for i in 0..TIME_TICK_COUNT {
        let fraction = i as f32 / (TIME_TICK_COUNT - 1) as f32;
        let position = viewport.to_canvas(fraction, TIME_LABEL_Y);

        let mut label = String::new();
        if i == TIME_TICK_COUNT - 1 {
            let _ = write!(label, "Now");
        } else {
            let hours_ago = hours_span - hours_span * i as u32 / (TIME_TICK_COUNT - 1) as u32;
            let _ = write!(label, "{}", hours_ago);
        }
        let _ = ticks.push(Tick { position, label });
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_viewport() -> ChartViewport {
        ChartViewport::new(Size::new(400, 400), 50, 50)
    }

    #[test]
    fn value_ticks_step_through_sixths_of_the_ceiling() {
        let ticks = value_ticks(&default_viewport(), 1200.0);

        let labels: alloc::vec::Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "200", "400", "600", "800", "1000", "1200"]);

        // Bottom to top on screen: pixel y strictly decreases.
        for pair in ticks.windows(2) {
            assert!(pair[1].position.y < pair[0].position.y);
        }
    }

    #[test]
    fn value_ticks_sit_left_of_the_plot_area() {
        for tick in value_ticks(&default_viewport(), 1200.0).iter() {
            assert!(tick.position.x < 50);
        }
    }

    #[test]
    fn time_ticks_count_down_to_now() {
        let ticks = time_ticks(&default_viewport(), 48);

        let labels: alloc::vec::Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["48", "36", "24", "12", "Now"]);

        // Oldest to newest runs left to right.
        for pair in ticks.windows(2) {
            assert!(pair[1].position.x > pair[0].position.x);
        }
    }

    #[test]
    fn time_ticks_sit_below_the_plot_area() {
        for tick in time_ticks(&default_viewport(), 48).iter() {
            assert!(tick.position.y > 300);
        }
    }

    #[test]
    fn time_ticks_follow_the_configured_span() {
        let ticks = time_ticks(&default_viewport(), 24);
        let labels: alloc::vec::Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["24", "18", "12", "6", "Now"]);
    }
}
