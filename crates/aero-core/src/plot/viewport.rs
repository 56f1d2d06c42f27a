//! Coordinate transformation between normalized data space and the canvas.

use embedded_graphics::prelude::*;

use crate::config::ChartConfig;

/// Maps normalized data-space coordinates onto a fixed pixel canvas.
///
/// Data space runs `x, y` in `[0, 1]`: `x` is the fraction of the time
/// window elapsed, `y` the fraction of the value range. The left and
/// bottom margins are reserved as a band for axis labels; tick helpers
/// pass slightly negative fractions to land inside that band. Screen Y
/// grows downward, so increasing data `y` maps to a smaller pixel row.
#[derive(Debug, Clone, Copy)]
pub struct ChartViewport {
    size: Size,
    left_margin: u32,
    bottom_margin: u32,
}

impl ChartViewport {
    pub fn new(size: Size, left_margin: u32, bottom_margin: u32) -> Self {
        Self {
            size,
            left_margin,
            bottom_margin,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(
            Size::new(config.width, config.height),
            config.left_margin,
            config.bottom_margin,
        )
    }

    /// Canvas size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Project a normalized data-space point to pixel coordinates.
    pub fn to_canvas(&self, x: f32, y: f32) -> Point {
        let plot_width = self.size.width.saturating_sub(self.left_margin) as f32;
        let plot_height = self.size.height.saturating_sub(self.bottom_margin) as f32;

        let pixel_x = round_to_i32(plot_width * x + self.left_margin as f32);
        let pixel_y = round_to_i32(plot_height * (1.0 - y) - self.bottom_margin as f32);

        Point::new(pixel_x, pixel_y)
    }
}

/// Round to the nearest integer, halves away from zero (`f32::round` is
/// not available in core).
pub(crate) fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
