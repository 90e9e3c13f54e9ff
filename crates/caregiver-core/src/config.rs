//! Per-call-site presentation settings
//!
//! The watch home screen and the home-screen widget disagree on staleness,
//! target level and zero-delta handling. Each site gets its own preset and
//! the two are never merged.

use core::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::color::{ColorPolicy, HueScale};

/// Live view staleness threshold
pub const LIVE_VIEW_STALE_AFTER: Duration = Duration::from_secs(10 * 60);

/// Widget staleness threshold
pub const WIDGET_STALE_AFTER: Duration = Duration::from_secs(15 * 60);

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("hue scale levels must satisfy min < target < max (got {min}/{target}/{max})")]
    InvalidHueScale { min: f32, target: f32, max: f32 },
}

/// How a delta of exactly zero is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroDelta {
    /// Render `+0.0`
    #[default]
    Show,
    /// Render nothing
    Suppress,
}

/// Presentation settings for one call site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub color_policy: ColorPolicy,
    pub stale_after: Duration,
    pub zero_delta: ZeroDelta,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self::live_view()
    }
}

impl PresentationConfig {
    /// Watch home screen: green at 90 mg/dL, stale after 10 minutes, zero
    /// deltas shown
    pub const fn live_view() -> Self {
        Self {
            color_policy: ColorPolicy::Interpolated(HueScale::LIVE_VIEW),
            stale_after: LIVE_VIEW_STALE_AFTER,
            zero_delta: ZeroDelta::Show,
        }
    }

    /// Home-screen widget: green at 100 mg/dL, stale after 15 minutes, zero
    /// deltas hidden
    pub const fn widget() -> Self {
        Self {
            color_policy: ColorPolicy::Interpolated(HueScale::WIDGET),
            stale_after: WIDGET_STALE_AFTER,
            zero_delta: ZeroDelta::Suppress,
        }
    }

    pub fn with_color_policy(mut self, color_policy: ColorPolicy) -> Self {
        self.color_policy = color_policy;
        self
    }

    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }

    pub fn with_zero_delta(mut self, zero_delta: ZeroDelta) -> Self {
        self.zero_delta = zero_delta;
        self
    }

    /// Check settings that may have been loaded from outside
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.color_policy {
            ColorPolicy::Interpolated(scale) => scale.validate(),
            ColorPolicy::Banded => Ok(()),
        }
    }
}
