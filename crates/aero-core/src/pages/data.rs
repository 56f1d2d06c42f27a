//! HTML table pages for the stored history.

use alloc::string::String;
use core::fmt::Write;

use crate::storage::{ReadingStore, SummaryStore};

use super::{DATA_CSS, PAGE_FOOTER, display_time, make_styled_page};

/// Summary history as an HTML table, oldest first.
pub fn summary_page<const N: usize>(summaries: &SummaryStore<N>) -> String {
    let mut contents = String::from(
        "<h1>CO<sub>2</sub> data (summary)</h1>\
         <p>CO<sub>2</sub> data, Mean/Minimum/Maximum of 10 samples for 5 minute intervals</p>\n\
         <table><tr><th>Index</th><th>Time</th><th>Mean CO2 ppm</th>\
         <th>Min CO2 ppm</th><th>Max CO2 ppm</th></tr>\n",
    );

    for (index, summary) in summaries.iter().enumerate() {
        let _ = write!(
            contents,
            "<tr><td>{index}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            display_time(summary.time),
            summary.ppm_mean,
            summary.ppm_min,
            summary.ppm_max,
        );
    }

    contents.push_str("</table>\n");
    contents.push_str(PAGE_FOOTER);
    make_styled_page("CO2 data", DATA_CSS, &contents)
}

/// Raw reading history as an HTML table, oldest first.
pub fn raw_page<const N: usize>(readings: &ReadingStore<N>) -> String {
    let mut contents = String::from(
        "<h1>CO<sub>2</sub> data (raw)</h1><p>CO<sub>2</sub> data</p>\n\
         <table><tr><th>Index</th><th>Time</th><th>CO2 ppm</th></tr>\n",
    );

    for (index, reading) in readings.iter().enumerate() {
        let _ = write!(
            contents,
            "<tr><td>{index}</td><td>{}</td><td>{}</td></tr>\n",
            display_time(reading.time),
            reading.ppm,
        );
    }

    contents.push_str("</table>\n");
    contents.push_str(PAGE_FOOTER);
    make_styled_page("CO2 data", DATA_CSS, &contents)
}
