//! Text formatting for glucose readings
//!
//! Every function here is total: a missing sample or a short history is a
//! normal, displayable state with its own fallback text. Output is written
//! into fixed-capacity strings so the formatting path never allocates.
//!
//! Numbers are rounded half away from zero on scaled integers rather than
//! through float formatting, so the same reading renders the same way on
//! every target.

use core::fmt::Write;
use core::time::Duration;

use heapless::String;

use crate::config::ZeroDelta;
use crate::glucose::{DisplayUnit, GlucoseSample, Trend, latest_pair};

/// Capacity of formatted text fields
pub const TEXT_CAPACITY: usize = 24;

/// A short formatted display string
pub type Text = String<TEXT_CAPACITY>;

/// Value text shown when there is no reading
pub const NO_VALUE_PLACEHOLDER: &str = "??";

/// Elapsed text shown when there is no reading
pub const NO_ELAPSED: &str = "0:00";

/// Arrow glyph for a trend, named by direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendArrow {
    Up,
    UpForward,
    Right,
    DownForward,
    Down,
}

impl TrendArrow {
    pub const fn for_trend(trend: Trend) -> Self {
        match trend {
            Trend::RisingFast | Trend::Rising => Self::Up,
            Trend::RisingSlow => Self::UpForward,
            Trend::Flat => Self::Right,
            Trend::FallingSlow => Self::DownForward,
            Trend::Falling | Trend::FallingFast => Self::Down,
        }
    }

    /// Symbolic identifier the renderer maps to an arrow image
    pub const fn id(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::UpForward => "up-forward",
            Self::Right => "right",
            Self::DownForward => "down-forward",
            Self::Down => "down",
        }
    }
}

fn round_half_away(value: f32) -> i64 {
    if value >= 0.0 {
        (value + 0.5) as i64
    } else {
        (value - 0.5) as i64
    }
}

/// Write `value` with a fixed number of decimals (0 or more)
///
/// The sign is decided after rounding, so small negatives never render as
/// `-0.0`.
fn write_fixed(text: &mut Text, value: f32, decimals: usize, explicit_plus: bool) {
    let scale = 10u64.pow(decimals as u32);
    let scaled = round_half_away(value * scale as f32);
    let sign = if scaled < 0 {
        "-"
    } else if explicit_plus {
        "+"
    } else {
        ""
    };
    let magnitude = scaled.unsigned_abs();

    let _ = if decimals == 0 {
        write!(text, "{}{}", sign, magnitude)
    } else {
        write!(
            text,
            "{}{}.{:0width$}",
            sign,
            magnitude / scale,
            magnitude % scale,
            width = decimals
        )
    };
}

/// Render a sample's value in `unit` with the unit's conventional precision
///
/// mg/dL has no decimals, mmol/L has one. Without a sample this is
/// [`NO_VALUE_PLACEHOLDER`].
pub fn format_value(sample: Option<&GlucoseSample>, unit: DisplayUnit) -> Text {
    let mut text = Text::new();
    match sample {
        Some(sample) if !sample.mg_dl().is_nan() => {
            write_fixed(&mut text, sample.value_in(unit), unit.precision(), false);
        }
        _ => {
            let _ = text.push_str(NO_VALUE_PLACEHOLDER);
        }
    }
    text
}

/// Render a change in display units with one decimal and an explicit sign
///
/// A zero change is rendered or suppressed according to `zero_delta`.
pub fn format_change(change: f32, zero_delta: ZeroDelta) -> Text {
    let mut text = Text::new();
    if change.is_nan() || (change == 0.0 && zero_delta == ZeroDelta::Suppress) {
        return text;
    }
    write_fixed(&mut text, change, 1, true);
    text
}

/// Sample value in `unit` as a scaled integer at the unit's precision
///
/// This is the number [`format_value`] renders, e.g. `55` for 5.5 mmol/L.
fn displayed_scaled(sample: &GlucoseSample, unit: DisplayUnit) -> Option<i64> {
    if sample.mg_dl().is_nan() {
        return None;
    }
    let scale = 10u64.pow(unit.precision() as u32) as f32;
    Some(round_half_away(sample.value_in(unit) * scale))
}

/// Change between the two most recent samples as displayed in `unit`
///
/// Both values are rounded to the unit's precision first, so the change
/// always agrees with the two values shown on screen and an unchanged
/// displayed value gives exactly zero. `None` for a short history or a
/// non-numeric value.
pub fn last_change(history: &[GlucoseSample], unit: DisplayUnit) -> Option<f32> {
    let (prior, latest) = latest_pair(history)?;
    let steps = displayed_scaled(latest, unit)? - displayed_scaled(prior, unit)?;
    let scale = 10u64.pow(unit.precision() as u32) as f32;
    Some(steps as f32 / scale)
}

/// Render the change between the two most recent samples
///
/// Empty when the history holds fewer than two samples.
pub fn format_delta(history: &[GlucoseSample], unit: DisplayUnit, zero_delta: ZeroDelta) -> Text {
    match last_change(history, unit) {
        Some(change) => format_change(change, zero_delta),
        None => Text::new(),
    }
}

/// Render time since the sample as `minutes:SS`
///
/// Without a sample this is [`NO_ELAPSED`].
pub fn format_elapsed(sample: Option<&GlucoseSample>, now: u64) -> Text {
    let mut text = Text::new();
    match sample {
        Some(sample) => {
            let elapsed = sample.elapsed_secs(now);
            let _ = write!(text, "{}:{:02}", elapsed / 60, elapsed % 60);
        }
        None => {
            let _ = text.push_str(NO_ELAPSED);
        }
    }
    text
}

/// Render time since the sample as whole minutes rounded up, e.g. `3m`
///
/// Empty without a sample.
pub fn format_elapsed_minutes(sample: Option<&GlucoseSample>, now: u64) -> Text {
    let mut text = Text::new();
    if let Some(sample) = sample {
        let minutes = sample.elapsed_secs(now).div_ceil(60);
        let _ = write!(text, "{}m", minutes);
    }
    text
}

/// Whether the reading is missing or older than `threshold`
///
/// A reading exactly `threshold` old is still fresh.
pub fn is_stale(sample: Option<&GlucoseSample>, now: u64, threshold: Duration) -> bool {
    match sample {
        Some(sample) => Duration::from_secs(sample.elapsed_secs(now)) > threshold,
        None => true,
    }
}

/// Arrow for the sample's trend, if one is known
pub fn trend_arrow(sample: Option<&GlucoseSample>) -> Option<TrendArrow> {
    sample.and_then(GlucoseSample::trend).map(TrendArrow::for_trend)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000;

    fn sample(mg_dl: f32) -> GlucoseSample {
        GlucoseSample::new(mg_dl, NOW, None)
    }

    fn history(values: &[f32]) -> heapless::Vec<GlucoseSample, 8> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| GlucoseSample::new(v, NOW + i as u64 * 300, None))
            .collect()
    }

    #[test]
    fn test_value_mg_dl_rounds_to_integer() {
        assert_eq!(format_value(Some(&sample(104.0)), DisplayUnit::MgDl).as_str(), "104");
        assert_eq!(format_value(Some(&sample(104.4)), DisplayUnit::MgDl).as_str(), "104");
        assert_eq!(format_value(Some(&sample(104.5)), DisplayUnit::MgDl).as_str(), "105");
        assert_eq!(format_value(Some(&sample(39.6)), DisplayUnit::MgDl).as_str(), "40");
    }

    #[test]
    fn test_value_mmol_one_decimal() {
        assert_eq!(format_value(Some(&sample(180.0)), DisplayUnit::MmolL).as_str(), "10.0");
        assert_eq!(format_value(Some(&sample(100.0)), DisplayUnit::MmolL).as_str(), "5.6");
        assert_eq!(format_value(Some(&sample(54.0)), DisplayUnit::MmolL).as_str(), "3.0");
    }

    #[test]
    fn test_value_placeholder() {
        assert_eq!(format_value(None, DisplayUnit::MgDl).as_str(), "??");
        assert_eq!(format_value(None, DisplayUnit::MmolL).as_str(), "??");
        assert_eq!(format_value(Some(&sample(f32::NAN)), DisplayUnit::MgDl).as_str(), "??");
    }

    #[test]
    fn test_delta_sign() {
        let rising = history(&[100.0, 104.0]);
        assert_eq!(format_delta(&rising, DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "+4.0");

        let falling = history(&[104.0, 100.0]);
        assert_eq!(format_delta(&falling, DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "-4.0");
    }

    #[test]
    fn test_delta_uses_last_two_samples() {
        let values = history(&[60.0, 90.0, 95.0, 93.0]);
        assert_eq!(format_delta(&values, DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "-2.0");
    }

    #[test]
    fn test_delta_short_history() {
        let one = history(&[100.0]);
        assert_eq!(format_delta(&one, DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "");
        assert_eq!(format_delta(&[], DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "");
    }

    #[test]
    fn test_zero_delta_policies() {
        let flat = history(&[120.0, 120.0]);
        assert_eq!(format_delta(&flat, DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "+0.0");
        assert_eq!(format_delta(&flat, DisplayUnit::MgDl, ZeroDelta::Suppress).as_str(), "");
    }

    #[test]
    fn test_delta_in_mmol() {
        let rising = history(&[90.0, 108.0]);
        assert_eq!(format_delta(&rising, DisplayUnit::MmolL, ZeroDelta::Show).as_str(), "+1.0");
    }

    #[test]
    fn test_delta_follows_displayed_values() {
        // 5.4 -> 5.5 mmol/L on screen, though the raw change is under 0.05
        let mmol = history(&[98.1, 98.9]);
        assert_eq!(format_value(mmol.last(), DisplayUnit::MmolL).as_str(), "5.5");
        assert_eq!(format_delta(&mmol, DisplayUnit::MmolL, ZeroDelta::Show).as_str(), "+0.1");

        // Both round to 120, so the change is exactly zero
        let mg_dl = history(&[120.3, 120.1]);
        assert_eq!(last_change(&mg_dl, DisplayUnit::MgDl), Some(0.0));
        assert_eq!(format_delta(&mg_dl, DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "+0.0");
        assert_eq!(format_delta(&mg_dl, DisplayUnit::MgDl, ZeroDelta::Suppress).as_str(), "");

        let half = history(&[100.4, 100.5]);
        assert_eq!(format_delta(&half, DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "+1.0");
    }

    #[test]
    fn test_delta_non_numeric() {
        let values = history(&[100.0, f32::NAN]);
        assert_eq!(last_change(&values, DisplayUnit::MgDl), None);
        assert_eq!(format_delta(&values, DisplayUnit::MgDl, ZeroDelta::Show).as_str(), "");
    }

    #[test]
    fn test_change_never_negative_zero() {
        assert_eq!(format_change(-0.02, ZeroDelta::Show).as_str(), "+0.0");
        // Only an exact zero is suppressed
        assert_eq!(format_change(-0.02, ZeroDelta::Suppress).as_str(), "+0.0");
        assert_eq!(format_change(f32::NAN, ZeroDelta::Show).as_str(), "");
    }

    #[test]
    fn test_elapsed() {
        let reading = sample(100.0);
        assert_eq!(format_elapsed(Some(&reading), NOW + 125).as_str(), "2:05");
        assert_eq!(format_elapsed(Some(&reading), NOW).as_str(), "0:00");
        assert_eq!(format_elapsed(Some(&reading), NOW + 3_601).as_str(), "60:01");
        assert_eq!(format_elapsed(None, NOW).as_str(), "0:00");
    }

    #[test]
    fn test_elapsed_clock_skew() {
        let reading = sample(100.0);
        assert_eq!(format_elapsed(Some(&reading), NOW - 30).as_str(), "0:00");
    }

    #[test]
    fn test_elapsed_minutes_round_up() {
        let reading = sample(100.0);
        assert_eq!(format_elapsed_minutes(Some(&reading), NOW).as_str(), "0m");
        assert_eq!(format_elapsed_minutes(Some(&reading), NOW + 60).as_str(), "1m");
        assert_eq!(format_elapsed_minutes(Some(&reading), NOW + 61).as_str(), "2m");
        assert_eq!(format_elapsed_minutes(None, NOW).as_str(), "");
    }

    #[test]
    fn test_staleness_threshold() {
        let threshold = Duration::from_secs(600);
        let old = GlucoseSample::new(100.0, NOW - 601, None);
        let recent = GlucoseSample::new(100.0, NOW - 599, None);
        let boundary = GlucoseSample::new(100.0, NOW - 600, None);

        assert!(is_stale(Some(&old), NOW, threshold));
        assert!(!is_stale(Some(&recent), NOW, threshold));
        assert!(!is_stale(Some(&boundary), NOW, threshold));
        assert!(is_stale(None, NOW, threshold));
    }

    #[test]
    fn test_trend_arrows() {
        for trend in Trend::ALL {
            let reading = GlucoseSample::new(100.0, NOW, Some(trend));
            let arrow = trend_arrow(Some(&reading)).unwrap();
            assert!(!arrow.id().is_empty());
        }

        let id = |trend| TrendArrow::for_trend(trend).id();
        assert_eq!(id(Trend::RisingFast), "up");
        assert_eq!(id(Trend::Rising), "up");
        assert_eq!(id(Trend::RisingSlow), "up-forward");
        assert_eq!(id(Trend::Flat), "right");
        assert_eq!(id(Trend::FallingSlow), "down-forward");
        assert_eq!(id(Trend::Falling), "down");
        assert_eq!(id(Trend::FallingFast), "down");
    }

    #[test]
    fn test_no_trend_no_arrow() {
        assert_eq!(trend_arrow(Some(&sample(100.0))), None);
        assert_eq!(trend_arrow(None), None);
    }
}
