//! Recorder: owns both stores and the aggregation pipeline.
//!
//! The two histories are owned by one explicitly constructed object with
//! process lifetime, handed by reference into the sampling path (mutably)
//! and the rendering path (read-only). There is a single writer; renderers
//! never mutate.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

use super::aggregator::{
    EVENT_CHANNEL_CAPACITY, EVENT_PUBLISHERS, EVENT_SUBSCRIBERS, RecorderEvent, WindowAggregator,
};
use super::{READINGS_IN_DAY, Reading, ReadingStore, SUMMARIES_IN_WEEK, SummaryStore};

/// Pub-sub channel carrying recorder events, sized by the aggregator's
/// channel constants. Declare one `static` and hand its publisher to the
/// recorder.
pub type EventChannel = PubSubChannel<
    CriticalSectionRawMutex,
    RecorderEvent,
    EVENT_CHANNEL_CAPACITY,
    EVENT_SUBSCRIBERS,
    EVENT_PUBLISHERS,
>;

/// Publisher half of the recorder event channel.
pub type EventPublisher<'a> = Publisher<
    'a,
    CriticalSectionRawMutex,
    RecorderEvent,
    EVENT_CHANNEL_CAPACITY,
    EVENT_SUBSCRIBERS,
    EVENT_PUBLISHERS,
>;

/// Subscriber half of the recorder event channel.
pub type EventSubscriber<'a> = Subscriber<
    'a,
    CriticalSectionRawMutex,
    RecorderEvent,
    EVENT_CHANNEL_CAPACITY,
    EVENT_SUBSCRIBERS,
    EVENT_PUBLISHERS,
>;

/// Owns the reading store, the summary store, and the window aggregator
/// that bridges them.
///
/// `record` is the single entry point of the sampling path: it stores the
/// raw reading, folds it into the in-progress window, and stores the
/// summary whenever a window completes. With a publisher attached, every
/// stored reading and summary is also announced on the event channel
/// (non-blocking; the oldest queued event is dropped on overflow).
pub struct Recorder<'a, const R: usize = READINGS_IN_DAY, const S: usize = SUMMARIES_IN_WEEK> {
    readings: ReadingStore<R>,
    summaries: SummaryStore<S>,
    aggregator: WindowAggregator,
    publisher: Option<EventPublisher<'a>>,
}

impl<'a, const R: usize, const S: usize> Recorder<'a, R, S> {
    pub fn new() -> Self {
        Self {
            readings: ReadingStore::new(),
            summaries: SummaryStore::new(),
            aggregator: WindowAggregator::new(),
            publisher: None,
        }
    }

    /// Recorder that announces stored data on an event channel.
    pub fn with_publisher(publisher: EventPublisher<'a>) -> Self {
        Self {
            publisher: Some(publisher),
            ..Self::new()
        }
    }

    /// Store one raw reading and run it through the aggregation pipeline.
    pub fn record(&mut self, ppm: u16, time: u32) {
        let reading = Reading::new(time, ppm);
        self.readings.record(ppm, time);
        if let Some(publisher) = &self.publisher {
            publisher.publish_immediate(RecorderEvent::Reading(reading));
        }

        if let Some(summary) = self.aggregator.fold(&reading) {
            self.summaries.record(summary);
            if let Some(publisher) = &self.publisher {
                publisher.publish_immediate(RecorderEvent::Summary(summary));
            }
        }
    }

    /// Read-only access for the rendering path.
    pub fn readings(&self) -> &ReadingStore<R> {
        &self.readings
    }

    /// Read-only access for the rendering path.
    pub fn summaries(&self) -> &SummaryStore<S> {
        &self.summaries
    }

    /// Readings folded into the window currently in progress.
    pub fn pending_window(&self) -> usize {
        self.aggregator.pending()
    }
}

impl<const R: usize, const S: usize> Default for Recorder<'_, R, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SUMMARY_WINDOW_SIZE;

    #[test]
    fn record_drives_the_aggregation_pipeline() {
        let mut recorder = Recorder::<'_, 64, 16>::new();
        let start = 1_700_000_000;

        for i in 0..25u32 {
            recorder.record(400 + i as u16, start + i * 30);
        }

        assert_eq!(recorder.readings().count(), 25);
        assert_eq!(recorder.summaries().count(), 25 / SUMMARY_WINDOW_SIZE);
        assert_eq!(recorder.pending_window(), 25 % SUMMARY_WINDOW_SIZE);

        let first = recorder.summaries().at(0).unwrap();
        assert_eq!(first.time, start);
        assert_eq!(first.ppm_min, 400);
        assert_eq!(first.ppm_max, 409);

        let second = recorder.summaries().at(1).unwrap();
        assert_eq!(second.time, start + 10 * 30);
        assert_eq!(second.ppm_min, 410);
        assert_eq!(second.ppm_max, 419);
    }

    #[test]
    fn events_are_published_for_readings_and_summaries() {
        static CHANNEL: EventChannel = PubSubChannel::new();

        let publisher = CHANNEL.publisher().unwrap();
        let mut subscriber = CHANNEL.subscriber().unwrap();
        let mut recorder = Recorder::<'_, 64, 16>::with_publisher(publisher);

        let mut readings_seen = 0;
        let mut summaries_seen = 0;
        for i in 0..SUMMARY_WINDOW_SIZE as u32 {
            recorder.record(500, i * 30);
            while let Some(event) = subscriber.try_next_message_pure() {
                match event {
                    RecorderEvent::Reading(_) => readings_seen += 1,
                    RecorderEvent::Summary(summary) => {
                        summaries_seen += 1;
                        assert_eq!(summary.ppm_mean, 500);
                    }
                }
            }
        }

        assert_eq!(readings_seen, SUMMARY_WINDOW_SIZE);
        assert_eq!(summaries_seen, 1);
    }
}
