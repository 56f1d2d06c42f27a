//! Record types held by the reading and summary stores.

use core::fmt::Display;
use serde::{Deserialize, Serialize};

/// One raw CO2 sample, recorded at the fixed sampling interval.
///
/// Immutable once created: the sampler constructs it, the aggregator and
/// the page renderers only read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Seconds since epoch
    pub time: u32,
    /// CO2 concentration in parts per million
    pub ppm: u16,
}

impl Reading {
    pub fn new(time: u32, ppm: u16) -> Self {
        Self { time, ppm }
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[Reading] time: {}, co2: {} ppm", self.time, self.ppm)
    }
}

/// Aggregate of one fixed-size window of readings.
///
/// `time` is the timestamp of the first reading in the window. The window
/// aggregator guarantees `ppm_min <= ppm_mean <= ppm_max` by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Seconds since epoch of the first reading in the window
    pub time: u32,
    /// Rounded integer mean over the window
    pub ppm_mean: u16,
    /// Minimum concentration seen in the window
    pub ppm_min: u16,
    /// Maximum concentration seen in the window
    pub ppm_max: u16,
}

impl Summary {
    pub fn new(time: u32, ppm_mean: u16, ppm_min: u16, ppm_max: u16) -> Self {
        Self {
            time,
            ppm_mean,
            ppm_min,
            ppm_max,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[Summary] time: {}, mean: {} ppm, min: {} ppm, max: {} ppm",
            self.time, self.ppm_mean, self.ppm_min, self.ppm_max
        )
    }
}
