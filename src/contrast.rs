/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

//! WCAG 2.x contrast between two colors.

use crate::{CvdResult, PixelBuffer, Rgb};
use tracing::trace;

/// Minimum ratio for AA normal text
pub const WCAG_AA_NORMAL: f64 = 4.5f64;
/// Minimum ratio for AAA normal text
pub const WCAG_AAA_NORMAL: f64 = 7.0f64;
/// Minimum ratio for AA large text
pub const WCAG_AA_LARGE: f64 = 3.0f64;
/// Minimum ratio for AAA large text
pub const WCAG_AAA_LARGE: f64 = 4.5f64;

/// `(lighter + 0.05) / (darker + 0.05)`, order of arguments does not matter
#[inline]
pub fn contrast_ratio(luminance_a: f64, luminance_b: f64) -> f64 {
    let lighter = luminance_a.max(luminance_b);
    let darker = luminance_a.min(luminance_b);
    (lighter + 0.05f64) / (darker + 0.05f64)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    pub foreground: Rgb<u8>,
    pub background: Rgb<u8>,
    pub foreground_luminance: f64,
    pub background_luminance: f64,
    /// Always in [1, 21]
    pub ratio: f64,
    pub aa_pass: bool,
    pub aaa_pass: bool,
    pub aa_large_pass: bool,
    pub aaa_large_pass: bool,
}

/// Contrast of two colors
pub fn check(foreground: Rgb<u8>, background: Rgb<u8>) -> ContrastResult {
    let foreground_luminance = foreground.relative_luminance();
    let background_luminance = background.relative_luminance();
    let ratio = contrast_ratio(foreground_luminance, background_luminance);
    ContrastResult {
        foreground,
        background,
        foreground_luminance,
        background_luminance,
        ratio,
        aa_pass: ratio >= WCAG_AA_NORMAL,
        aaa_pass: ratio >= WCAG_AAA_NORMAL,
        aa_large_pass: ratio >= WCAG_AA_LARGE,
        aaa_large_pass: ratio >= WCAG_AAA_LARGE,
    }
}

/// Contrast of two pixels picked from an image
pub fn check_points(
    buffer: &PixelBuffer,
    foreground: (u32, u32),
    background: (u32, u32),
) -> CvdResult<ContrastResult> {
    let fg = buffer.get_rgb(foreground.0, foreground.1)?;
    let bg = buffer.get_rgb(background.0, background.1)?;
    trace!(fg = %fg.to_hex(), bg = %bg.to_hex(), "check_points");
    Ok(check(fg, bg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CvdError;
    use approx::assert_relative_eq;

    #[test]
    fn black_on_white() {
        let result = check(Rgb::black(), Rgb::white());
        assert_eq!(result.ratio, 21f64);
        assert!(result.aa_pass);
        assert!(result.aaa_pass);
        assert_eq!(result.foreground_luminance, 0f64);
        assert_eq!(result.background_luminance, 1f64);
    }

    #[test]
    fn same_color_is_one() {
        let c = Rgb::new(120, 33, 200);
        assert_relative_eq!(check(c, c).ratio, 1f64);
    }

    #[test]
    fn symmetric() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::white();
        assert_relative_eq!(check(a, b).ratio, check(b, a).ratio);
    }

    #[test]
    fn known_pairs() {
        assert_relative_eq!(check(Rgb::new(0x76, 0x76, 0x76), Rgb::white()).ratio, 4.54, epsilon = 0.01);
        let red = check(Rgb::new(255, 0, 0), Rgb::white());
        assert_relative_eq!(red.ratio, 3.998, epsilon = 0.01);
        assert!(!red.aa_pass);
        assert!(red.aa_large_pass);
        assert!(!red.aaa_large_pass);
    }

    #[test]
    fn ratio_is_bounded() {
        let mut v = 0u32;
        while v <= 255 {
            let c = v as u8;
            for other in [0u8, 64, 128, 200, 255] {
                let ratio = check(Rgb::new(c, 255 - c, c / 3), Rgb::new(other, other, 255 - other)).ratio;
                assert!((1f64..=21f64).contains(&ratio), "ratio {ratio}");
            }
            v += 5;
        }
    }

    #[test]
    fn points_from_buffer() {
        let mut buffer = PixelBuffer::filled(4, 4, [255, 255, 255, 255]);
        buffer.put_pixel(1, 2, [0, 0, 0, 255]);
        let result = check_points(&buffer, (1, 2), (3, 3)).unwrap();
        assert_eq!(result.ratio, 21f64);
        assert_eq!(result.foreground.to_hex(), "#000000");
        assert!(matches!(
            check_points(&buffer, (4, 0), (0, 0)),
            Err(CvdError::OutOfBounds { x: 4, y: 0, .. })
        ));
    }
}
