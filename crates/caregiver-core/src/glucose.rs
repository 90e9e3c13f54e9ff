//! Glucose readings and display units
//!
//! Samples are produced by the remote data collaborator and only ever
//! borrowed here. A history is a plain slice ordered oldest first, so the
//! most recent reading is always the last element.

use serde::{Deserialize, Serialize};

/// mg/dL per mmol/L, from the molar mass of glucose (180.15588 g/mol)
pub const MG_DL_PER_MMOL_L: f32 = 18.015_588;

/// Short-term direction of glucose change at the time of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    RisingFast,
    Rising,
    RisingSlow,
    Flat,
    FallingSlow,
    Falling,
    FallingFast,
}

impl Trend {
    /// Every trend, fastest rise first
    pub const ALL: [Trend; 7] = [
        Self::RisingFast,
        Self::Rising,
        Self::RisingSlow,
        Self::Flat,
        Self::FallingSlow,
        Self::Falling,
        Self::FallingFast,
    ];
}

/// Unit used to render a glucose value as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayUnit {
    #[default]
    MgDl,
    MmolL,
}

impl DisplayUnit {
    /// Get the unit label for display
    pub const fn label(self) -> &'static str {
        match self {
            Self::MgDl => "mg/dL",
            Self::MmolL => "mmol/L",
        }
    }

    /// Conventional number of decimal places for this unit
    pub const fn precision(self) -> usize {
        match self {
            Self::MgDl => 0,
            Self::MmolL => 1,
        }
    }

    /// Convert a concentration in mg/dL into this unit
    pub fn convert_mg_dl(self, mg_dl: f32) -> f32 {
        match self {
            Self::MgDl => mg_dl,
            Self::MmolL => mg_dl / MG_DL_PER_MMOL_L,
        }
    }
}

/// A single estimated glucose value (EGV)
///
/// The value is always stored in mg/dL regardless of the user's display
/// preference. Timestamps are Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlucoseSample {
    mg_dl: f32,
    timestamp: u64,
    trend: Option<Trend>,
}

impl GlucoseSample {
    pub const fn new(mg_dl: f32, timestamp: u64, trend: Option<Trend>) -> Self {
        Self {
            mg_dl,
            timestamp,
            trend,
        }
    }

    /// Value in mg/dL
    pub const fn mg_dl(&self) -> f32 {
        self.mg_dl
    }

    /// Capture time in Unix seconds
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub const fn trend(&self) -> Option<Trend> {
        self.trend
    }

    /// Value converted into the requested display unit
    pub fn value_in(&self, unit: DisplayUnit) -> f32 {
        unit.convert_mg_dl(self.mg_dl)
    }

    /// Whole seconds between capture and `now`, zero if the sample is from
    /// the future
    pub const fn elapsed_secs(&self, now: u64) -> u64 {
        now.saturating_sub(self.timestamp)
    }
}

/// Most recent sample of a history
pub fn latest(history: &[GlucoseSample]) -> Option<&GlucoseSample> {
    history.last()
}

/// The two most recent samples as `(prior, latest)`
pub fn latest_pair(history: &[GlucoseSample]) -> Option<(&GlucoseSample, &GlucoseSample)> {
    match history {
        [.., prior, latest] => Some((prior, latest)),
        _ => None,
    }
}
