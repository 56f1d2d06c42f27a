//! Desktop demo for the aero-rs CO2 recorder.
//!
//! Exercises aero-core without hardware: replays a day of simulated
//! sampling through the recorder (driving the window aggregator for
//! real), then renders every dashboard page into `./out`. Run with
//! `--synthetic` to fill the stores through the synthetic generator
//! instead of replaying samples.

use std::env;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use aero_core::config::ChartConfig;
use aero_core::pages::{csv, data, graph, home};
use aero_core::storage::{
    EventChannel, READING_INTERVAL_SECONDS, READINGS_IN_DAY, Recorder, RecorderEvent,
    ReadingStore, SummaryStore,
};
use aero_core::synthetic::SyntheticDataGenerator;

/// Directory the rendered dashboard lands in.
const OUT_DIR: &str = "out";

/// Event channel shared by the recorder and the logging subscriber.
static EVENTS: EventChannel = EventChannel::new();

fn main() -> std::io::Result<()> {
    env_logger::init();
    info!("Starting aero-rs simulator");

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as u32;
    let config = ChartConfig::default();
    let out_dir = Path::new(OUT_DIR);

    if env::args().any(|arg| arg == "--synthetic") {
        let mut readings: ReadingStore = ReadingStore::new();
        let mut summaries: SummaryStore = SummaryStore::new();

        let mut generator = SyntheticDataGenerator::new(u64::from(now));
        generator.populate_if_empty(&mut readings, &mut summaries, now);
        info!(
            "synthetic fill: {} readings, {} summaries",
            readings.count(),
            summaries.count()
        );

        render_pages(&readings, &summaries, &config, out_dir)?;
    } else {
        let mut recorder: Recorder = match EVENTS.publisher() {
            Ok(publisher) => Recorder::with_publisher(publisher),
            Err(_) => Recorder::new(),
        };
        let mut subscriber = EVENTS.subscriber().ok();

        // Replay one day of sampling at the real interval, walk-valued.
        let mut generator = SyntheticDataGenerator::new(u64::from(now));
        let start = now - (READINGS_IN_DAY as u32 - 1) * READING_INTERVAL_SECONDS;

        let mut readings_seen = 0u32;
        let mut summaries_seen = 0u32;
        for i in 0..READINGS_IN_DAY as u32 {
            recorder.record(generator.next_ppm(), start + i * READING_INTERVAL_SECONDS);

            if let Some(subscriber) = subscriber.as_mut() {
                while let Some(event) = subscriber.try_next_message_pure() {
                    match event {
                        RecorderEvent::Reading(_) => readings_seen += 1,
                        RecorderEvent::Summary(summary) => {
                            summaries_seen += 1;
                            log::debug!("{summary}");
                        }
                    }
                }
            }
        }

        info!(
            "replayed {} samples ({} reading events, {} summary events)",
            READINGS_IN_DAY, readings_seen, summaries_seen
        );
        render_pages(recorder.readings(), recorder.summaries(), &config, out_dir)?;
    }

    info!("dashboard rendered into ./{OUT_DIR}");
    Ok(())
}

/// Render every dashboard page and download into the output directory.
fn render_pages<const R: usize, const S: usize>(
    readings: &ReadingStore<R>,
    summaries: &SummaryStore<S>,
    config: &ChartConfig,
    out_dir: &Path,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let outputs = [
        ("home.html", home::home_page(readings)),
        ("data.html", data::summary_page(summaries)),
        ("dataraw.html", data::raw_page(readings)),
        ("graph.html", graph::graph_page(summaries, config)),
        ("data.csv", csv::summary_csv(summaries)),
        ("dataraw.csv", csv::raw_csv(readings)),
    ];

    for (name, contents) in outputs {
        fs::write(out_dir.join(name), &contents)?;
        info!("wrote {name} ({} bytes)", contents.len());
    }
    Ok(())
}
