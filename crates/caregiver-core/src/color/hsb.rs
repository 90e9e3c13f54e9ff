//! Hue/saturation/brightness colors
//!
//! Hue is a fraction of a full turn, so 0.0 is red, 1/3 green and 0.75
//! purple. Conversion follows the usual HSB (HSV) sector formula and rounds
//! each channel to the nearest 8-bit value before narrowing to RGB565.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

/// Saturation used for glucose value colors
pub const VALUE_SATURATION: f32 = 0.6;

/// Brightness used for glucose value colors
pub const VALUE_BRIGHTNESS: f32 = 0.9;

/// A color in HSB space, always fully opaque
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue as a fraction of 360 degrees, in [0, 1)
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Color at `hue` with the fixed glucose saturation and brightness
    pub const fn scale_point(hue: f32) -> Self {
        Self::new(hue, VALUE_SATURATION, VALUE_BRIGHTNESS)
    }

    /// Convert to 24-bit RGB
    pub fn to_rgb888(self) -> Rgb888 {
        let mut hue = self.hue % 1.0;
        if hue < 0.0 {
            hue += 1.0;
        }

        let scaled = hue * 6.0;
        let sector = scaled as u32;
        let f = scaled - sector as f32;

        let v = self.brightness;
        let s = self.saturation;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb888::new(channel(r), channel(g), channel(b))
    }
}

/// Unit interval to 8-bit channel; `as` saturates out-of-range values
fn channel(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

impl From<Hsb> for Rgb888 {
    fn from(value: Hsb) -> Self {
        value.to_rgb888()
    }
}

impl From<Hsb> for Rgb565 {
    fn from(value: Hsb) -> Self {
        Rgb565::from(value.to_rgb888())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsb::new(0.0, 1.0, 1.0).to_rgb888(), Rgb888::new(255, 0, 0));
        assert_eq!(
            Hsb::new(1.0 / 3.0, 1.0, 1.0).to_rgb888(),
            Rgb888::new(0, 255, 0)
        );
        assert_eq!(
            Hsb::new(2.0 / 3.0, 1.0, 1.0).to_rgb888(),
            Rgb888::new(0, 0, 255)
        );
    }

    #[test]
    fn test_glucose_reference_colors() {
        // s = 0.6, b = 0.9: max channel 230, min channel 92
        assert_eq!(Hsb::scale_point(0.0).to_rgb888(), Rgb888::new(230, 92, 92));
        assert_eq!(
            Hsb::scale_point(120.0 / 360.0).to_rgb888(),
            Rgb888::new(92, 230, 92)
        );
        assert_eq!(
            Hsb::scale_point(270.0 / 360.0).to_rgb888(),
            Rgb888::new(161, 92, 230)
        );
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(
            Hsb::new(1.0, 1.0, 1.0).to_rgb888(),
            Hsb::new(0.0, 1.0, 1.0).to_rgb888()
        );
        assert_eq!(
            Hsb::new(-0.25, 1.0, 1.0).to_rgb888(),
            Hsb::new(0.75, 1.0, 1.0).to_rgb888()
        );
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(Hsb::new(0.4, 0.0, 0.5).to_rgb888(), Rgb888::new(128, 128, 128));
    }
}
