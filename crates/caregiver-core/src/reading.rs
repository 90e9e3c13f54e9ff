//! Everything the watch face shows for the latest reading, in one bundle

use embedded_graphics::pixelcolor::Rgb565;
use log::trace;

use crate::color::NO_READING_COLOR;
use crate::config::PresentationConfig;
use crate::format::{
    Text, TrendArrow, format_delta, format_elapsed, format_value, is_stale, trend_arrow,
};
use crate::glucose::{DisplayUnit, GlucoseSample, latest};

/// Display strings and color derived from a glucose history
///
/// Recomputed on every refresh; holds no state beyond the call that built it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedReading {
    pub value_text: Text,
    pub delta_text: Text,
    pub elapsed_text: Text,
    pub trend_arrow: Option<TrendArrow>,
    pub color: Rgb565,
    /// The renderer strikes through value, delta and elapsed text when set
    pub stale: bool,
}

/// Format the most recent reading of `history` for one call site
pub fn format_reading(
    history: &[GlucoseSample],
    unit: DisplayUnit,
    now: u64,
    config: &PresentationConfig,
) -> FormattedReading {
    let current = latest(history);

    let color = match current {
        Some(sample) => config.color_policy.color_for_value(sample.mg_dl()),
        None => NO_READING_COLOR,
    };

    let reading = FormattedReading {
        value_text: format_value(current, unit),
        delta_text: format_delta(history, unit, config.zero_delta),
        elapsed_text: format_elapsed(current, now),
        trend_arrow: trend_arrow(current),
        color,
        stale: is_stale(current, now, config.stale_after),
    };

    trace!(
        "Formatted {} {} ({}) elapsed {} stale={}",
        reading.value_text,
        unit.label(),
        reading.delta_text,
        reading.elapsed_text,
        reading.stale
    );

    reading
}
