pub mod aggregator;
pub mod records;
pub mod recorder;
pub mod ring_buffer;
pub mod stores;

pub use aggregator::{RecorderEvent, WindowAggregator};
pub use records::{Reading, Summary};
pub use recorder::{EventChannel, EventPublisher, EventSubscriber, Recorder};
pub use ring_buffer::RingBuffer;
pub use stores::{ReadingStore, SummaryStore};

use thiserror_no_std::Error;

/// Interval between raw sensor samples, in seconds.
pub const READING_INTERVAL_SECONDS: u32 = 30;

/// Raw readings retained: one full day at the sampling interval (2880).
pub const READINGS_IN_DAY: usize = (86_400 / READING_INTERVAL_SECONDS) as usize;

/// Raw readings folded into one summary window.
pub const SUMMARY_WINDOW_SIZE: usize = 10;

/// Duration of one summary window in seconds (10 samples at 30 s = 5 minutes).
pub const SUMMARY_WINDOW_SECONDS: u32 = READING_INTERVAL_SECONDS * SUMMARY_WINDOW_SIZE as u32;

/// Summaries retained: seven days of five-minute windows (2016).
pub const SUMMARIES_IN_WEEK: usize = (7 * 86_400 / SUMMARY_WINDOW_SECONDS) as usize;

/// Error types for store access
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Peeked past the number of retained entries
    #[error("offset {offset} out of range (count: {count})")]
    OffsetOutOfRange {
        /// The offending offset
        offset: usize,
        /// Number of entries retained at the time of the call
        count: usize,
    },
}

/// Result type for store access
pub type StorageResult<T> = Result<T, StorageError>;
