//! Value coloring for glucose readings
//!
//! Two independent policies exist and callers pick one per site:
//! - [`HueScale`] - continuous hue interpolation red -> green -> purple
//! - [`ColorBand`] - the older fixed palette keyed by 8 concentration bands
//!
//! Both take a concentration in mg/dL regardless of the display unit and
//! produce an [`Rgb565`] ready for the display.
//!
//! # Organization
//!
//! - [`hsb`] - hue/saturation/brightness color and RGB conversion
//! - [`scale`] - hue interpolation between control levels
//! - [`band`] - discrete palette bands

pub mod band;
pub mod hsb;
pub mod scale;

pub use band::ColorBand;
pub use hsb::Hsb;
pub use scale::HueScale;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use serde::{Deserialize, Serialize};

/// Reading color used when there is no sample to color
pub const NO_READING_COLOR: Rgb565 = Rgb565::WHITE;

/// Strategy for turning a glucose concentration into a display color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorPolicy {
    /// Continuous hue interpolation across the scale's control levels
    Interpolated(HueScale),
    /// Fixed palette per concentration band
    Banded,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::Interpolated(HueScale::LIVE_VIEW)
    }
}

impl ColorPolicy {
    /// Color for a concentration in mg/dL
    ///
    /// The value is truncated to whole mg/dL first, so 55.9 colors the same
    /// as 55. Non-numeric input maps to the gray band under either policy.
    pub fn color_for_value(&self, mg_dl: f32) -> Rgb565 {
        if mg_dl.is_nan() {
            return ColorBand::Gray.color();
        }
        let whole = mg_dl as i32 as f32;

        match self {
            Self::Interpolated(scale) => scale.hsb_for(whole).into(),
            Self::Banded => ColorBand::assess(whole).color(),
        }
    }
}
