//! CSV downloads of the stored history.

use alloc::string::String;
use core::fmt::Write;

use crate::storage::{ReadingStore, SummaryStore};

use super::rfc3339;

/// Column header of the summary download.
pub const SUMMARY_CSV_HEADER: &str = "Index,Time,CO2 ppm mean,CO2 ppm min,CO2 ppm max";

/// Column header of the raw download.
pub const RAW_CSV_HEADER: &str = "Index,Time,CO2 ppm";

/// Summary history as CSV, oldest first, RFC 3339 timestamps.
pub fn summary_csv<const N: usize>(summaries: &SummaryStore<N>) -> String {
    let mut out = String::from(SUMMARY_CSV_HEADER);
    out.push('\n');

    for (index, summary) in summaries.iter().enumerate() {
        let _ = write!(
            out,
            "{index},{},{},{},{}\n",
            rfc3339(summary.time),
            summary.ppm_mean,
            summary.ppm_min,
            summary.ppm_max,
        );
    }
    out
}

/// Raw reading history as CSV, oldest first, RFC 3339 timestamps.
pub fn raw_csv<const N: usize>(readings: &ReadingStore<N>) -> String {
    let mut out = String::from(RAW_CSV_HEADER);
    out.push('\n');

    for (index, reading) in readings.iter().enumerate() {
        let _ = write!(out, "{index},{},{}\n", rfc3339(reading.time), reading.ppm);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Summary;
    use alloc::vec::Vec;

    #[test]
    fn summary_csv_has_the_exact_header_and_rows() {
        let mut summaries = SummaryStore::<8>::new();
        summaries.record(Summary::new(1_700_000_000, 450, 400, 500));
        summaries.record(Summary::new(1_700_000_300, 460, 410, 510));

        let csv = summary_csv(&summaries);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Index,Time,CO2 ppm mean,CO2 ppm min,CO2 ppm max");
        assert_eq!(lines[1], "0,2023-11-14T22:13:20+00:00,450,400,500");
        assert_eq!(lines[2], "1,2023-11-14T22:18:20+00:00,460,410,510");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn raw_csv_has_the_exact_header_and_rows() {
        let mut readings = ReadingStore::<8>::new();
        readings.record(415, 1_700_000_000);

        let csv = raw_csv(&readings);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Index,Time,CO2 ppm");
        assert_eq!(lines[1], "0,2023-11-14T22:13:20+00:00,415");
    }

    #[test]
    fn empty_stores_produce_header_only_downloads() {
        assert_eq!(
            summary_csv(&SummaryStore::<8>::new()),
            "Index,Time,CO2 ppm mean,CO2 ppm min,CO2 ppm max\n"
        );
        assert_eq!(raw_csv(&ReadingStore::<8>::new()), "Index,Time,CO2 ppm\n");
    }
}
