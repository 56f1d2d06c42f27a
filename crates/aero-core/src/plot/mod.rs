//! Chart projection: mapping a time series onto a fixed plotting surface.
//!
//! The viewport turns normalized data-space coordinates into pixel
//! coordinates on the SVG canvas; the tick helpers place the axis labels
//! through the same transform so labels and data always line up.

mod ticks;
mod viewport;

pub use ticks::{MAX_TICK_LABEL_LENGTH, TIME_TICK_COUNT, Tick, VALUE_TICK_COUNT, time_ticks, value_ticks};
pub use viewport::ChartViewport;

use crate::config::{DEFAULT_SCALE_CEILING, ScaleMode};
use viewport::round_to_i32;

/// Chart ceiling in ppm for the given scale policy and observed maximum.
///
/// `Dynamic` rounds the observed maximum up to the next 300 ppm step and
/// falls back to the fixed default while no data exists.
pub fn scale_ceiling(mode: ScaleMode, observed_max: Option<u16>) -> f32 {
    match mode {
        ScaleMode::Fixed(limit) => limit as f32,
        ScaleMode::Dynamic => match observed_max {
            Some(max) => (round_to_i32(max as f32 / 300.0) + 1) as f32 * 300.0,
            None => DEFAULT_SCALE_CEILING as f32,
        },
    }
}
