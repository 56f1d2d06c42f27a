//! Synthetic demo data: fills empty stores with a plausible random walk.
//!
//! Used to exercise the dashboard before any real sampling has happened.
//! Timestamps count backward from "now" so the newest synthetic entry
//! lands at the current time.

use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::storage::{
    READING_INTERVAL_SECONDS, ReadingStore, SUMMARY_WINDOW_SECONDS, Summary, SummaryStore,
};

/// Lowest plausible indoor concentration, ppm.
pub const MIN_PLAUSIBLE_PPM: u16 = 420;

/// Highest plausible indoor concentration, ppm.
pub const MAX_PLAUSIBLE_PPM: u16 = 1200;

/// Largest step of the random walk between neighbouring samples, ppm.
const MAX_STEP_PPM: i32 = 50;

/// Largest min/max spread around a synthetic summary mean, ppm.
const MAX_SPREAD_PPM: u16 = 40;

/// Generates a bounded random walk of plausible CO2 values.
///
/// Deterministic for a given seed.
pub struct SyntheticDataGenerator {
    rng: SmallRng,
    last_ppm: u16,
}

impl SyntheticDataGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            last_ppm: MIN_PLAUSIBLE_PPM,
        }
    }

    /// Next step of the walk, clamped to the plausible range.
    pub fn next_ppm(&mut self) -> u16 {
        let step = self.rng.gen_range(-MAX_STEP_PPM..=MAX_STEP_PPM);
        let next = (i32::from(self.last_ppm) + step)
            .clamp(i32::from(MIN_PLAUSIBLE_PPM), i32::from(MAX_PLAUSIBLE_PPM));
        self.last_ppm = next as u16;
        self.last_ppm
    }

    /// Fill the reading store to capacity, one walk value per sampling
    /// interval, newest entry at `now`.
    pub fn fill_readings<const N: usize>(&mut self, store: &mut ReadingStore<N>, now: u32) {
        store.clear();
        self.last_ppm = MIN_PLAUSIBLE_PPM;

        let start = now.saturating_sub((N as u32 - 1) * READING_INTERVAL_SECONDS);
        for i in 0..N as u32 {
            store.record(self.next_ppm(), start + i * READING_INTERVAL_SECONDS);
        }
    }

    /// Fill the summary store to capacity, one walk value per window
    /// duration, newest entry at `now`.
    pub fn fill_summaries<const N: usize>(&mut self, store: &mut SummaryStore<N>, now: u32) {
        store.clear();
        self.last_ppm = MIN_PLAUSIBLE_PPM;

        let start = now.saturating_sub((N as u32 - 1) * SUMMARY_WINDOW_SECONDS);
        for i in 0..N as u32 {
            let mean = self.next_ppm();
            let max = mean
                .saturating_add(self.rng.gen_range(0..MAX_SPREAD_PPM))
                .min(MAX_PLAUSIBLE_PPM);
            let min = mean
                .saturating_sub(self.rng.gen_range(0..MAX_SPREAD_PPM))
                .max(MIN_PLAUSIBLE_PPM);
            store.record(Summary::new(start + i * SUMMARY_WINDOW_SECONDS, mean, min, max));
        }
    }

    /// Fill both stores, but only when neither holds real data.
    ///
    /// Returns whether anything was written. Use the `fill_*` methods to
    /// overwrite explicitly.
    pub fn populate_if_empty<const R: usize, const S: usize>(
        &mut self,
        readings: &mut ReadingStore<R>,
        summaries: &mut SummaryStore<S>,
        now: u32,
    ) -> bool {
        if !readings.is_empty() || !summaries.is_empty() {
            return false;
        }

        self.fill_readings(readings, now);
        self.fill_summaries(summaries, now);
        info!("stores populated with synthetic data");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u32 = 1_700_000_000;

    #[test]
    fn readings_fill_to_capacity_and_end_at_now() {
        let mut store = ReadingStore::<64>::new();
        let mut generator = SyntheticDataGenerator::new(7);
        generator.fill_readings(&mut store, NOW);

        assert!(store.is_full());
        assert_eq!(store.latest().unwrap().time, NOW);
        assert_eq!(
            store.at(0).unwrap().time,
            NOW - 63 * READING_INTERVAL_SECONDS
        );
    }

    #[test]
    fn readings_are_spaced_by_the_sampling_interval() {
        let mut store = ReadingStore::<32>::new();
        let mut generator = SyntheticDataGenerator::new(7);
        generator.fill_readings(&mut store, NOW);

        let mut previous = None;
        for reading in store.iter() {
            if let Some(last) = previous {
                assert_eq!(reading.time - last, READING_INTERVAL_SECONDS);
            }
            previous = Some(reading.time);
        }
    }

    #[test]
    fn walk_stays_within_the_plausible_range() {
        let mut generator = SyntheticDataGenerator::new(42);
        for _ in 0..10_000 {
            let ppm = generator.next_ppm();
            assert!((MIN_PLAUSIBLE_PPM..=MAX_PLAUSIBLE_PPM).contains(&ppm));
        }
    }

    #[test]
    fn neighbouring_samples_differ_by_at_most_one_step() {
        let mut generator = SyntheticDataGenerator::new(42);
        let mut last = generator.next_ppm();
        for _ in 0..1000 {
            let next = generator.next_ppm();
            assert!((i32::from(next) - i32::from(last)).abs() <= MAX_STEP_PPM);
            last = next;
        }
    }

    #[test]
    fn synthetic_summaries_respect_the_aggregate_invariant() {
        let mut store = SummaryStore::<128>::new();
        let mut generator = SyntheticDataGenerator::new(3);
        generator.fill_summaries(&mut store, NOW);

        assert!(store.is_full());
        for summary in store.iter() {
            assert!(summary.ppm_min <= summary.ppm_mean);
            assert!(summary.ppm_mean <= summary.ppm_max);
            assert!(summary.ppm_min >= MIN_PLAUSIBLE_PPM);
            assert!(summary.ppm_max <= MAX_PLAUSIBLE_PPM);
        }
    }

    #[test]
    fn summaries_are_spaced_by_the_window_duration() {
        let mut store = SummaryStore::<32>::new();
        let mut generator = SyntheticDataGenerator::new(3);
        generator.fill_summaries(&mut store, NOW);

        assert_eq!(store.latest().unwrap().time, NOW);
        assert_eq!(
            store.at(1).unwrap().time - store.at(0).unwrap().time,
            SUMMARY_WINDOW_SECONDS
        );
    }

    #[test]
    fn populate_refuses_to_clobber_real_data() {
        let mut readings = ReadingStore::<32>::new();
        let mut summaries = SummaryStore::<32>::new();
        readings.record(480, NOW);

        let mut generator = SyntheticDataGenerator::new(1);
        assert!(!generator.populate_if_empty(&mut readings, &mut summaries, NOW));
        assert_eq!(readings.count(), 1);
        assert!(summaries.is_empty());
    }

    #[test]
    fn populate_fills_empty_stores() {
        let mut readings = ReadingStore::<32>::new();
        let mut summaries = SummaryStore::<16>::new();

        let mut generator = SyntheticDataGenerator::new(1);
        assert!(generator.populate_if_empty(&mut readings, &mut summaries, NOW));
        assert!(readings.is_full());
        assert!(summaries.is_full());
    }

    #[test]
    fn identical_seeds_reproduce_the_same_walk() {
        let mut a = SyntheticDataGenerator::new(99);
        let mut b = SyntheticDataGenerator::new(99);
        for _ in 0..100 {
            assert_eq!(a.next_ppm(), b.next_ppm());
        }
    }
}
