//! Hardware-independent core library for the caregiver watch companion
//!
//! This crate contains the platform-agnostic presentation logic for a remote
//! glucose-monitoring watch face: value, delta and elapsed-time text, trend
//! arrows, staleness and value coloring. Fetching data, settings storage and
//! drawing are owned by the caller.
//!
//! It is `#![no_std]` and allocation-free so it compiles on both embedded
//! wearable targets and desktop hosts (for the simulator and tests). None of
//! the formatting functions read the clock; callers inject "now".

#![no_std]

pub mod color;
pub mod config;
pub mod format;
pub mod glucose;
pub mod reading;
pub mod widget;

pub use color::{ColorBand, ColorPolicy, Hsb, HueScale};
pub use config::{ConfigError, PresentationConfig, ZeroDelta};
pub use format::{Text, TrendArrow};
pub use glucose::{DisplayUnit, GlucoseSample, Trend};
pub use reading::{FormattedReading, format_reading};
pub use widget::WidgetEntry;
