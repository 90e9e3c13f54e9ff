//! Desktop simulator for the caregiver watch face.
//!
//! Plays the part of the watch's view layer: it owns the glucose history,
//! receives synthetic readings every five simulated minutes and re-runs the
//! caregiver-core formatter on a refresh timer, logging what the home screen
//! and the widget would show. A sensor dropout is simulated partway through
//! so both staleness thresholds trip.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run -p caregiver-simulator -- [--mmol]
//! ```
//!
//! `RUST_LOG=trace` also shows the formatter's own output.

use std::collections::VecDeque;
use std::ops::Range;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};

use caregiver_core::format::format_elapsed;
use caregiver_core::{
    DisplayUnit, FormattedReading, GlucoseSample, PresentationConfig, Trend, WidgetEntry,
    format_reading,
};

// ---------------------------------------------------------------------------
// Timing constants
// ---------------------------------------------------------------------------

/// Real time between refresh ticks.
const REFRESH_INTERVAL: Duration = Duration::from_millis(200);

/// Simulated seconds that pass per refresh tick.
const SIMULATED_SECS_PER_TICK: u64 = 30;

/// Interval between sensor readings (simulated seconds).
const READING_INTERVAL_SECS: u64 = 300;

/// Total simulated run time.
const SIMULATED_SPAN_SECS: u64 = 3 * 60 * 60;

/// Simulated window during which the sensor reports nothing.
const DROPOUT_SECS: Range<u64> = 90 * 60..115 * 60;

/// Readings kept in memory (one day at 5 minute spacing).
const MAX_HISTORY: usize = 288;

/// Widget timeline entries generated per new reading.
const WIDGET_TIMELINE_ENTRIES: u64 = 4;

// ---------------------------------------------------------------------------
// Mock data generation
// ---------------------------------------------------------------------------

/// Generates synthetic glucose readings that drift through low, target and
/// high ranges.
struct MockGlucoseGenerator {
    previous: Option<f32>,
}

impl MockGlucoseGenerator {
    fn new() -> Self {
        Self { previous: None }
    }

    /// Reading at `elapsed` simulated seconds into the run.
    fn sample_at(&mut self, start: u64, elapsed: u64) -> GlucoseSample {
        let t = elapsed as f64;

        // 60-190 mg/dL over a slow cycle with a faster wobble
        let mg_dl = (125.0 + 60.0 * (t / 2400.0).sin() + 6.0 * (t / 700.0).cos()) as f32;
        let trend = self.previous.map(|previous| trend_for(mg_dl - previous));
        self.previous = Some(mg_dl);

        GlucoseSample::new(mg_dl, start + elapsed, trend)
    }
}

/// Classify a change over one reading interval, in mg/dL per 5 minutes.
fn trend_for(change: f32) -> Trend {
    match change {
        c if c >= 15.0 => Trend::RisingFast,
        c if c >= 10.0 => Trend::Rising,
        c if c >= 5.0 => Trend::RisingSlow,
        c if c > -5.0 => Trend::Flat,
        c if c > -10.0 => Trend::FallingSlow,
        c if c > -15.0 => Trend::Falling,
        _ => Trend::FallingFast,
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn describe(site: &str, reading: &FormattedReading) -> String {
    let arrow = reading.trend_arrow.map_or("-", |arrow| arrow.id());
    let stale = if reading.stale { " [stale]" } else { "" };
    format!(
        "{site:<6} {:>5} {:<12} {:>6} {:>6}  rgb565={:?}{stale}",
        reading.value_text, arrow, reading.delta_text, reading.elapsed_text, reading.color
    )
}

/// Log the widget timeline the host would schedule after a new reading.
fn log_widget_timeline(history: &[GlucoseSample], now: u64, unit: DisplayUnit) {
    for i in 0..WIDGET_TIMELINE_ENTRIES {
        let entry_date = now + i * READING_INTERVAL_SECS;
        let is_last_entry = i + 1 == WIDGET_TIMELINE_ENTRIES;
        let Some(entry) = WidgetEntry::from_history(history, entry_date, is_last_entry, unit)
        else {
            return;
        };

        debug!(
            "  timeline +{:>2}m: {:<12} {:>4}{}",
            i * READING_INTERVAL_SECS / 60,
            entry.glucose_text(),
            entry.date_text(),
            if entry.is_stale() { " [stale]" } else { "" }
        );
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    let unit = if std::env::args().skip(1).any(|arg| arg == "--mmol") {
        DisplayUnit::MmolL
    } else {
        DisplayUnit::MgDl
    };

    info!("Starting caregiver-watch simulator ({})", unit.label());
    info!(
        "{}s simulated per {:?} tick, readings every {}s, dropout {}..{} min",
        SIMULATED_SECS_PER_TICK,
        REFRESH_INTERVAL,
        READING_INTERVAL_SECS,
        DROPOUT_SECS.start / 60,
        DROPOUT_SECS.end / 60
    );

    let live_config = PresentationConfig::live_view();
    let widget_config = PresentationConfig::widget();

    let start = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut generator = MockGlucoseGenerator::new();
    let mut history: VecDeque<GlucoseSample> = VecDeque::with_capacity(MAX_HISTORY);
    let mut next_reading = 0;
    let mut last_live: Option<FormattedReading> = None;

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    let mut elapsed = 0;
    while elapsed <= SIMULATED_SPAN_SECS {
        let now = start + elapsed;

        // --- Incoming data ------------------------------------------------
        if elapsed >= next_reading {
            next_reading += READING_INTERVAL_SECS;

            if DROPOUT_SECS.contains(&elapsed) {
                warn!("No reading at +{}m (sensor dropout)", elapsed / 60);
            } else {
                let sample = generator.sample_at(start, elapsed);
                if history.len() == MAX_HISTORY {
                    history.pop_front();
                }
                history.push_back(sample);
                log_widget_timeline(history.make_contiguous(), now, unit);
            }

            // The widget host refreshes on schedule whether or not data arrived
            let widget = format_reading(history.make_contiguous(), unit, now, &widget_config);
            info!("{}", describe("widget", &widget));
        }

        // --- Refresh tick -------------------------------------------------
        let live = format_reading(history.make_contiguous(), unit, now, &live_config);
        let became_stale = live.stale
            && !history.is_empty()
            && !last_live.as_ref().is_some_and(|prev| prev.stale);
        if became_stale {
            warn!(
                "Reading is stale after {}",
                format_elapsed(history.back(), now)
            );
        }
        if last_live.as_ref() != Some(&live) {
            debug!("{}", describe("live", &live));
        }
        last_live = Some(live);

        std::thread::sleep(REFRESH_INTERVAL);
        elapsed += SIMULATED_SECS_PER_TICK;
    }

    info!("Simulator exiting after {} readings", history.len());
}
