//! Window aggregation of raw readings into mean/min/max summaries.
//!
//! Windowing is a logical grouping by arrival count, not by wall-clock
//! boundaries: a window closes exactly when `SUMMARY_WINDOW_SIZE` readings
//! have been folded since the previous window closed. Windows are disjoint
//! and contiguous; a partially filled window never emits a summary.

use log::debug;

use super::{Reading, SUMMARY_WINDOW_SIZE, Summary};

/// Channel capacity for pub-sub events
/// Set to 8 to handle bursts without blocking the sampling path
pub const EVENT_CHANNEL_CAPACITY: usize = 8;

/// Number of subscribers that can listen to recorder events
/// - Subscriber 0: rendering/refresh path
/// - Subscriber 1: spare (e.g. a metrics or alerting task)
pub const EVENT_SUBSCRIBERS: usize = 2;

/// Number of publishers (just the recorder)
pub const EVENT_PUBLISHERS: usize = 1;

/// Events published by the recorder to notify subscribers of new data
#[derive(Debug, Clone, Copy)]
pub enum RecorderEvent {
    /// A new raw reading was stored
    Reading(Reading),
    /// A window completed and its summary was stored
    Summary(Summary),
}

/// Folds readings into fixed-size windows and emits one summary per
/// completed window.
///
/// The accumulator is 32 bits wide, enough for
/// `SUMMARY_WINDOW_SIZE * u16::MAX` even though individual readings are
/// 16-bit, so the sum cannot overflow.
pub struct WindowAggregator {
    /// Readings per window; fixed for the lifetime of the aggregator.
    window_size: usize,
    /// Readings folded into the in-progress window.
    count: usize,
    /// Running sum of the in-progress window.
    sum: u32,
    /// Running minimum of the in-progress window.
    min: u16,
    /// Running maximum of the in-progress window.
    max: u16,
    /// Timestamp of the first reading in the in-progress window; anchors
    /// the emitted summary.
    anchor: u32,
}

impl WindowAggregator {
    pub fn new() -> Self {
        Self::with_window_size(SUMMARY_WINDOW_SIZE)
    }

    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            window_size,
            count: 0,
            sum: 0,
            min: u16::MAX,
            max: u16::MIN,
            anchor: 0,
        }
    }

    /// Readings folded into the window currently in progress.
    pub fn pending(&self) -> usize {
        self.count
    }

    /// Fold one reading into the in-progress window.
    ///
    /// Returns the completed summary when this reading closes the window,
    /// `None` otherwise. The emitted mean is the rounded integer average;
    /// it always falls within `[min, max]` because
    /// `window_size * min <= sum <= window_size * max`.
    pub fn fold(&mut self, reading: &Reading) -> Option<Summary> {
        if self.count == 0 {
            self.anchor = reading.time;
        }

        self.sum += reading.ppm as u32;
        self.min = self.min.min(reading.ppm);
        self.max = self.max.max(reading.ppm);
        self.count += 1;

        if self.count < self.window_size {
            return None;
        }

        let mean = ((self.sum + self.count as u32 / 2) / self.count as u32) as u16;
        let summary = Summary::new(self.anchor, mean, self.min, self.max);
        debug!("window closed: {}", summary);

        self.count = 0;
        self.sum = 0;
        self.min = u16::MAX;
        self.max = u16::MIN;

        Some(summary)
    }
}

impl Default for WindowAggregator {
    fn default() -> Self {
        Self::new()
    }
}
