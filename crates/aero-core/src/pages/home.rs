//! Home page: the current concentration, averaged over recent readings.

use alloc::string::String;
use core::fmt::Write;

use crate::storage::ReadingStore;

use super::{CURRENT_DATA_CSS, PAGE_FOOTER, make_styled_page};

/// Recent readings averaged for the headline figure (five minutes at the
/// sampling interval).
const HEADLINE_WINDOW: usize = 10;

/// Render the current-CO2 page.
///
/// Shows a warm-up notice while the store is empty, the average of
/// everything collected so far during the first five minutes, and the
/// average of the ten newest readings afterwards.
pub fn home_page<const N: usize>(readings: &ReadingStore<N>) -> String {
    let mut contents = String::from("<h1>Current CO<sub>2</sub></h1><p class=\"reading\">");

    if readings.is_empty() {
        contents.push_str("Still warming up</p>");
    } else if readings.count() < HEADLINE_WINDOW {
        let average = average_of_latest(readings, readings.count());
        let _ = write!(
            contents,
            "{average} ppm</p><p>Since readings began (less than 5 minutes ago).</p>\n"
        );
    } else {
        let average = average_of_latest(readings, HEADLINE_WINDOW);
        let _ = write!(contents, "{average} ppm</p><p>Last 5 minutes</p>\n");
    }

    contents.push_str(PAGE_FOOTER);
    make_styled_page("Current CO2", CURRENT_DATA_CSS, &contents)
}

/// Mean of the `n` newest readings. Callers check the store is non-empty;
/// an average over zero readings is never fabricated here.
fn average_of_latest<const N: usize>(readings: &ReadingStore<N>, n: usize) -> u16 {
    let skip = readings.count() - n;
    let sum: u32 = readings.iter().skip(skip).map(|r| u32::from(r.ppm)).sum();
    (sum / n as u32) as u16
}
