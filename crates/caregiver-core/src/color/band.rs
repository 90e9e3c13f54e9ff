//! Discrete concentration bands with a fixed palette

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::WebColors;
use serde::{Deserialize, Serialize};

/// Palette band for a glucose concentration
///
/// Bands are half-open in mg/dL: `< 55` red, `55..70` orange, `70..80`
/// yellow, `80..100` green, `100..120` mint, `120..140` blue, `140..180`
/// indigo and `>= 180` purple. Gray is only produced for non-numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorBand {
    Red,
    Orange,
    Yellow,
    Green,
    Mint,
    Blue,
    Indigo,
    Purple,
    Gray,
}

impl ColorBand {
    /// Band for a concentration in mg/dL
    pub fn assess(mg_dl: f32) -> Self {
        if mg_dl.is_nan() {
            Self::Gray
        } else if mg_dl < 55.0 {
            Self::Red
        } else if mg_dl < 70.0 {
            Self::Orange
        } else if mg_dl < 80.0 {
            Self::Yellow
        } else if mg_dl < 100.0 {
            Self::Green
        } else if mg_dl < 120.0 {
            Self::Mint
        } else if mg_dl < 140.0 {
            Self::Blue
        } else if mg_dl < 180.0 {
            Self::Indigo
        } else {
            Self::Purple
        }
    }

    /// Get the display color for this band
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Red => Rgb565::CSS_RED,
            Self::Orange => Rgb565::CSS_ORANGE,
            Self::Yellow => Rgb565::CSS_YELLOW,
            Self::Green => Rgb565::CSS_LIME_GREEN,
            Self::Mint => Rgb565::CSS_MEDIUM_AQUAMARINE,
            Self::Blue => Rgb565::CSS_DODGER_BLUE,
            Self::Indigo => Rgb565::CSS_SLATE_BLUE,
            Self::Purple => Rgb565::CSS_MEDIUM_ORCHID,
            Self::Gray => Rgb565::CSS_GRAY,
        }
    }

    /// Get the display label for this band
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Mint => "Mint",
            Self::Blue => "Blue",
            Self::Indigo => "Indigo",
            Self::Purple => "Purple",
            Self::Gray => "Gray",
        }
    }
}
