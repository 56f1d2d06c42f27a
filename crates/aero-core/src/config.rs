use serde::{Deserialize, Serialize};

/// Default chart ceiling in ppm, a round number above the highest expected
/// indoor concentration.
pub const DEFAULT_SCALE_CEILING: u16 = 1200;

/// Vertical scale policy for the chart.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Fixed ceiling in ppm regardless of observed data.
    Fixed(u16),
    /// Ceiling recomputed from the highest observed value, rounded up to
    /// the next 300 ppm step.
    Dynamic,
}

/// Chart rendering configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ChartConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Margin reserved on the left for value labels.
    pub left_margin: u32,
    /// Margin reserved below the plot for time labels.
    pub bottom_margin: u32,
    /// Vertical scale policy.
    pub scale: ScaleMode,
    /// Width of the plotted time span in hours.
    pub hours_span: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            left_margin: 50,
            bottom_margin: 50,
            scale: ScaleMode::Fixed(DEFAULT_SCALE_CEILING),
            hours_span: 48,
        }
    }
}
