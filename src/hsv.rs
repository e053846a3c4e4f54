/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::Rgb;

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
/// Represents *HSV* (hue, saturation, value) colorspace, H ∈ [0, 360), S ∈ [0, 1], V ∈ [0, 1]
pub struct Hsv {
    /// Hue in degrees
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Value
    pub v: f32,
}

impl Hsv {
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Hsv {
        Hsv { h, s, v }
    }

    /// Whether hue falls into the reds/yellows [0°, 60°] or the greens/cyans [120°, 180°]
    #[inline]
    pub fn is_red_green(&self) -> bool {
        (self.h >= 0f32 && self.h <= 60f32) || (self.h >= 120f32 && self.h <= 180f32)
    }
}

impl From<Rgb<u8>> for Hsv {
    #[inline]
    fn from(rgb: Rgb<u8>) -> Self {
        let c = rgb.to_rgb_f32();
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let delta = max - min;

        // achromatic colors get hue 0, that counts as red
        let mut hue = 0f32;
        if delta != 0f32 {
            if max == c.r {
                hue = ((c.g - c.b) / delta) % 6f32;
            } else if max == c.g {
                hue = (c.b - c.r) / delta + 2f32;
            } else {
                hue = (c.r - c.g) / delta + 4f32;
            }
        }
        let h = (hue * 60f32 + 360f32) % 360f32;
        let s = if max == 0f32 { 0f32 } else { delta / max };
        Hsv::new(h, s, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn primaries() {
        assert_relative_eq!(Hsv::from(Rgb::new(255, 0, 0)).h, 0f32);
        assert_relative_eq!(Hsv::from(Rgb::new(0, 255, 0)).h, 120f32);
        assert_relative_eq!(Hsv::from(Rgb::new(0, 0, 255)).h, 240f32);
    }

    #[test]
    fn magenta_wraps_to_positive_hue() {
        let hsv = Hsv::from(Rgb::new(255, 0, 128));
        assert!(hsv.h > 300f32 && hsv.h < 360f32);
        assert!(!hsv.is_red_green());
    }

    #[test]
    fn gray_has_no_saturation() {
        let hsv = Hsv::from(Rgb::new(90, 90, 90));
        assert_eq!(hsv.s, 0f32);
        assert_eq!(hsv.h, 0f32);
        assert!(hsv.is_red_green());
        assert_eq!(Hsv::from(Rgb::new(0, 0, 0)).s, 0f32);
    }
}
