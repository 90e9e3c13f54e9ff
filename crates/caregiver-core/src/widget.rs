//! Home-screen widget entry
//!
//! A widget timeline is a series of entries rendered ahead of time, each
//! with its own entry date standing in for "now". The widget has its own
//! policies (see [`PresentationConfig::widget`]): zero changes are hidden,
//! staleness starts at 15 minutes and the color scale targets 100 mg/dL.
//! Scheduling the timeline belongs to the widget host.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;

use crate::config::PresentationConfig;
use crate::format::{
    Text, TrendArrow, format_change, format_elapsed_minutes, format_value, is_stale, last_change,
    trend_arrow,
};
use crate::glucose::{DisplayUnit, GlucoseSample, latest};

/// One widget timeline entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetEntry {
    /// When this entry is displayed, in Unix seconds
    pub entry_date: u64,
    pub latest: GlucoseSample,
    /// Change between the prior and latest displayed values, in `unit`
    pub last_change: Option<f32>,
    /// The final entry of a timeline hides its age text
    pub is_last_entry: bool,
    pub unit: DisplayUnit,
}

impl WidgetEntry {
    /// Build an entry from a history, or `None` if the history is empty
    pub fn from_history(
        history: &[GlucoseSample],
        entry_date: u64,
        is_last_entry: bool,
        unit: DisplayUnit,
    ) -> Option<Self> {
        let current = *latest(history)?;
        Some(Self {
            entry_date,
            latest: current,
            last_change: last_change(history, unit),
            is_last_entry,
            unit,
        })
    }

    const fn config() -> PresentationConfig {
        PresentationConfig::widget()
    }

    /// Value alone, e.g. `104`
    pub fn glucose_number_text(&self) -> Text {
        format_value(Some(&self.latest), self.unit)
    }

    /// Signed change, `None` when unknown or exactly zero
    pub fn change_text(&self) -> Option<Text> {
        let change = self.last_change?;
        let text = format_change(change, Self::config().zero_delta);
        (!text.is_empty()).then_some(text)
    }

    /// Value followed by the change when there is one, e.g. `104 +4.0`
    pub fn glucose_text(&self) -> Text {
        let mut text = self.glucose_number_text();
        if let Some(change) = self.change_text() {
            let _ = write!(text, " {}", change);
        }
        text
    }

    /// Age of the reading in whole minutes rounded up, e.g. `3m`
    pub fn date_text(&self) -> Text {
        if self.is_last_entry {
            return Text::new();
        }
        format_elapsed_minutes(Some(&self.latest), self.entry_date)
    }

    pub fn is_stale(&self) -> bool {
        is_stale(
            Some(&self.latest),
            self.entry_date,
            Self::config().stale_after,
        )
    }

    pub fn trend_arrow(&self) -> Option<TrendArrow> {
        trend_arrow(Some(&self.latest))
    }

    pub fn color(&self) -> Rgb565 {
        Self::config()
            .color_policy
            .color_for_value(self.latest.mg_dl())
    }
}
