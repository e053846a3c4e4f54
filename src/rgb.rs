/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::gamma_curves::{relative_luminance, srgb_from_linear, srgb_to_linear};
use crate::hsv::Hsv;
use crate::{CvdError, CvdResult, Matrix3};
use erydanos::Euclidean3DDistance;

/// Straight line distance between two colors
pub trait EuclideanDistance {
    fn euclidean_distance(&self, other: Self) -> f32;
}

#[derive(Debug, PartialOrd, PartialEq, Eq, Hash, Clone, Copy, Default)]
/// Represents any RGB values, Rgb<u8>, Rgb<f32> etc.
pub struct Rgb<T> {
    /// Red component
    pub r: T,
    /// Green component
    pub g: T,
    /// Blue component
    pub b: T,
}

impl<T> Rgb<T> {
    pub fn new(r: T, g: T, b: T) -> Rgb<T> {
        Rgb { r, g, b }
    }
}

impl Rgb<u8> {
    /// Converts gamma corrected sRGB into linear RGB with 0.04045 threshold
    #[inline]
    pub fn to_linear(&self) -> Rgb<f32> {
        self.to_rgb_f32().apply(srgb_to_linear)
    }

    /// Converts linear RGB into gamma corrected sRGB, out of gamut values are clipped
    #[inline]
    pub fn from_linear(linear_rgb: Rgb<f32>) -> Rgb<u8> {
        linear_rgb.apply(srgb_from_linear).to_u8()
    }

    /// Converts rgb to HSV
    #[inline]
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from(*self)
    }

    /// Converts rgb to RGB f32
    #[inline]
    pub fn to_rgb_f32(&self) -> Rgb<f32> {
        const SCALE: f32 = 1f32 / 255f32;
        Rgb::<f32>::new(
            self.r as f32 * SCALE,
            self.g as f32 * SCALE,
            self.b as f32 * SCALE,
        )
    }

    /// WCAG relative luminance
    #[inline]
    pub fn relative_luminance(&self) -> f64 {
        relative_luminance(self.r, self.g, self.b)
    }

    /// Parses `#RRGGBB` or `RRGGBB`
    pub fn from_hex(hex: &str) -> CvdResult<Rgb<u8>> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(CvdError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| CvdError::InvalidHex(hex.to_string()))
        };
        Ok(Rgb::<u8>::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lower case `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[inline]
    pub fn white() -> Rgb<u8> {
        Rgb::<u8>::new(255, 255, 255)
    }

    #[inline]
    pub fn black() -> Rgb<u8> {
        Rgb::<u8>::new(0, 0, 0)
    }
}

impl Rgb<f32> {
    #[inline]
    pub fn apply(&self, gen: fn(f32) -> f32) -> Self {
        Self {
            r: gen(self.r),
            g: gen(self.g),
            b: gen(self.b),
        }
    }

    #[inline]
    pub fn to_u8(&self) -> Rgb<u8> {
        Rgb::<u8>::new(
            (self.r * 255f32).max(0f32).round().min(255f32) as u8,
            (self.g * 255f32).max(0f32).round().min(255f32) as u8,
            (self.b * 255f32).max(0f32).round().min(255f32) as u8,
        )
    }

    /// Multiplies color as column vector by row-major matrix
    #[inline]
    pub fn transform(&self, matrix: &Matrix3) -> Rgb<f32> {
        Rgb::<f32>::new(
            matrix[0][0] * self.r + matrix[0][1] * self.g + matrix[0][2] * self.b,
            matrix[1][0] * self.r + matrix[1][1] * self.g + matrix[1][2] * self.b,
            matrix[2][0] * self.r + matrix[2][1] * self.g + matrix[2][2] * self.b,
        )
    }
}

impl EuclideanDistance for Rgb<u8> {
    fn euclidean_distance(&self, other: Rgb<u8>) -> f32 {
        (self.r as f32 - other.r as f32).hypot3(
            self.g as f32 - other.g as f32,
            self.b as f32 - other.b as f32,
        )
    }
}
