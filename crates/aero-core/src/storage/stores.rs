//! Reading and summary stores: thin ownership wrappers over the ring
//! buffers, with the ordered read access the renderers rely on.

use super::ring_buffer::RingBuffer;
use super::{READINGS_IN_DAY, Reading, StorageResult, SUMMARIES_IN_WEEK, Summary};

/// Ring buffer of raw readings covering the most recent day.
///
/// The default capacity holds one full day of samples at the configured
/// interval (86400 / 30 s = 2880). The sampler is the only writer; the
/// aggregator and renderers read by offset, oldest first. No ppm range
/// validation happens here; clamping, if wanted, is the sampler's concern.
pub struct ReadingStore<const N: usize = READINGS_IN_DAY> {
    buffer: RingBuffer<Reading, N>,
}

impl<const N: usize> ReadingStore<N> {
    pub fn new() -> Self {
        Self {
            buffer: RingBuffer::new(),
        }
    }

    /// Construct a reading and append it, dropping the oldest when full.
    pub fn record(&mut self, ppm: u16, time: u32) {
        self.buffer.push(Reading::new(time, ppm));
    }

    /// Number of retained readings.
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Reading at `offset` positions from the oldest (0 = oldest).
    pub fn at(&self, offset: usize) -> StorageResult<Reading> {
        self.buffer.peek(offset)
    }

    /// The newest reading, if any.
    pub fn latest(&self) -> Option<Reading> {
        self.buffer.last()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate retained readings, oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Reading> + '_ {
        self.buffer.iter()
    }
}

impl<const N: usize> Default for ReadingStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ring buffer of per-window summaries covering the long-term horizon.
///
/// The default capacity holds a week of five-minute windows (2016). The
/// window aggregator is the sole writer.
pub struct SummaryStore<const N: usize = SUMMARIES_IN_WEEK> {
    buffer: RingBuffer<Summary, N>,
}

impl<const N: usize> SummaryStore<N> {
    pub fn new() -> Self {
        Self {
            buffer: RingBuffer::new(),
        }
    }

    /// Append a pre-computed summary, dropping the oldest when full.
    pub fn record(&mut self, summary: Summary) {
        self.buffer.push(summary);
    }

    /// Number of retained summaries.
    pub fn count(&self) -> usize {
        self.buffer.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Summary at `offset` positions from the oldest (0 = oldest).
    pub fn at(&self, offset: usize) -> StorageResult<Summary> {
        self.buffer.peek(offset)
    }

    /// The newest summary, if any.
    pub fn latest(&self) -> Option<Summary> {
        self.buffer.last()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate retained summaries, oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Summary> + '_ {
        self.buffer.iter()
    }
}

impl<const N: usize> Default for SummaryStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_then_read_back_round_trips() {
        let mut store = ReadingStore::<16>::new();
        store.record(415, 1_700_000_000);

        let reading = store.at(0).unwrap();
        assert_eq!(reading.time, 1_700_000_000);
        assert_eq!(reading.ppm, 415);
        assert_eq!(store.latest(), Some(reading));
    }

    #[test]
    fn reading_store_bounds_to_capacity() {
        let mut store = ReadingStore::<4>::new();
        for i in 0..10u32 {
            store.record(400 + i as u16, i * 30);
        }

        assert_eq!(store.count(), 4);
        assert!(store.is_full());
        // Entries 6..=9 survive.
        assert_eq!(store.at(0).unwrap().ppm, 406);
        assert_eq!(store.at(3).unwrap().ppm, 409);
        assert!(store.at(4).is_err());
    }

    #[test]
    fn summary_store_keeps_insertion_order() {
        let mut store = SummaryStore::<8>::new();
        store.record(Summary::new(0, 450, 400, 500));
        store.record(Summary::new(300, 460, 410, 510));

        assert_eq!(store.count(), 2);
        assert_eq!(store.at(0).unwrap().time, 0);
        assert_eq!(store.at(1).unwrap().time, 300);
        assert_eq!(store.latest().unwrap().ppm_mean, 460);
    }

    #[test]
    fn default_capacities_cover_a_day_and_a_week() {
        let readings = ReadingStore::<{ crate::storage::READINGS_IN_DAY }>::new();
        let summaries = SummaryStore::<{ crate::storage::SUMMARIES_IN_WEEK }>::new();
        assert_eq!(readings.capacity(), 2880);
        assert_eq!(summaries.capacity(), 2016);
    }
}
