//! Hue interpolation between glucose control levels

use log::warn;
use serde::{Deserialize, Serialize};

use super::hsb::Hsb;
use crate::config::ConfigError;

/// Hue at and below the urgent low level (0 degrees)
pub const RED_HUE: f32 = 0.0 / 360.0;

/// Hue at the target level (120 degrees)
pub const GREEN_HUE: f32 = 120.0 / 360.0;

/// Hue at and above the urgent high level (270 degrees)
pub const PURPLE_HUE: f32 = 270.0 / 360.0;

/// Urgent low glucose in mg/dL
pub const URGENT_LOW_MG_DL: f32 = 55.0;

/// Urgent high glucose in mg/dL
pub const URGENT_HIGH_MG_DL: f32 = 180.0;

/// Control levels for continuous value coloring, all in mg/dL
///
/// Values at or below `min_level` are red, values at or above `max_level`
/// are purple, and `target_level` is pure green. Between the control levels
/// the hue moves linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueScale {
    min_level: f32,
    target_level: f32,
    max_level: f32,
}

impl HueScale {
    /// Scale used by the watch home screen
    pub const LIVE_VIEW: Self = Self::unchecked(URGENT_LOW_MG_DL, 90.0, URGENT_HIGH_MG_DL);

    /// Scale used by the home-screen widget
    pub const WIDGET: Self = Self::unchecked(URGENT_LOW_MG_DL, 100.0, URGENT_HIGH_MG_DL);

    const fn unchecked(min_level: f32, target_level: f32, max_level: f32) -> Self {
        Self {
            min_level,
            target_level,
            max_level,
        }
    }

    /// Create a scale, requiring `min_level < target_level < max_level`
    pub fn new(min_level: f32, target_level: f32, max_level: f32) -> Result<Self, ConfigError> {
        let scale = Self::unchecked(min_level, target_level, max_level);
        scale.validate()?;
        Ok(scale)
    }

    /// Create a scale with the standard urgent levels and a custom target
    pub fn with_target(target_level: f32) -> Result<Self, ConfigError> {
        Self::new(URGENT_LOW_MG_DL, target_level, URGENT_HIGH_MG_DL)
    }

    /// Check the control level ordering
    ///
    /// Deserialized scales skip the constructor, so callers loading one from
    /// settings should validate it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_level < self.target_level && self.target_level < self.max_level {
            Ok(())
        } else {
            warn!(
                "Rejected hue scale {}/{}/{}",
                self.min_level, self.target_level, self.max_level
            );
            Err(ConfigError::InvalidHueScale {
                min: self.min_level,
                target: self.target_level,
                max: self.max_level,
            })
        }
    }

    pub const fn min_level(&self) -> f32 {
        self.min_level
    }

    pub const fn target_level(&self) -> f32 {
        self.target_level
    }

    pub const fn max_level(&self) -> f32 {
        self.max_level
    }

    /// Hue for a concentration in mg/dL, as a fraction of 360 degrees
    pub fn hue_for(&self, mg_dl: f32) -> f32 {
        if mg_dl.is_nan() || mg_dl <= self.min_level {
            RED_HUE
        } else if mg_dl >= self.max_level {
            PURPLE_HUE
        } else if mg_dl <= self.target_level {
            let ratio = (mg_dl - self.min_level) / (self.target_level - self.min_level);
            RED_HUE + ratio * (GREEN_HUE - RED_HUE)
        } else {
            let ratio = (mg_dl - self.target_level) / (self.max_level - self.target_level);
            GREEN_HUE + ratio * (PURPLE_HUE - GREEN_HUE)
        }
    }

    /// Full color for a concentration in mg/dL
    pub fn hsb_for(&self, mg_dl: f32) -> Hsb {
        Hsb::scale_point(self.hue_for(mg_dl))
    }
}

impl Default for HueScale {
    fn default() -> Self {
        Self::LIVE_VIEW
    }
}
