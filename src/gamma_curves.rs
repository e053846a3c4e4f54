/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// sRGB decoding threshold from IEC 61966-2-1, used by the simulation pipeline
pub const SRGB_LINEAR_THRESHOLD: f32 = 0.04045f32;
/// sRGB encoding threshold in linear space
pub const SRGB_GAMMA_THRESHOLD: f32 = 0.0031308f32;
/// Decoding threshold as printed in WCAG 2.x relative luminance definition
pub const WCAG_LINEAR_THRESHOLD: f64 = 0.03928f64;

/// Linearizes normalized sRGB value using 0.04045 threshold
#[inline(always)]
pub fn srgb_to_linear(gamma: f32) -> f32 {
    return if gamma <= SRGB_LINEAR_THRESHOLD {
        gamma * (1f32 / 12.92f32)
    } else {
        ((gamma + 0.055f32) / 1.055f32).powf(2.4f32)
    };
}

/// Gamma encodes linear value, input is clamped to [0, 1] before encoding
#[inline(always)]
pub fn srgb_from_linear(linear: f32) -> f32 {
    let linear = linear.max(0f32).min(1f32);
    return if linear <= SRGB_GAMMA_THRESHOLD {
        linear * 12.92f32
    } else {
        1.055f32 * linear.powf(1.0f32 / 2.4f32) - 0.055f32
    };
}

/// Linearizes normalized value with WCAG 0.03928 threshold.
///
/// Kept apart from [srgb_to_linear]: contrast math must follow the WCAG text verbatim.
#[inline(always)]
pub fn wcag_to_linear(gamma: f64) -> f64 {
    if gamma <= WCAG_LINEAR_THRESHOLD {
        gamma / 12.92f64
    } else {
        ((gamma + 0.055f64) / 1.055f64).powf(2.4f64)
    }
}

/// Converts 8-bit sRGB channel into linear light
#[inline]
pub fn to_linear(channel: u8) -> f32 {
    srgb_to_linear(channel as f32 * (1f32 / 255f32))
}

/// Converts linear light into 8-bit sRGB channel, clamping out of gamut values
#[inline]
pub fn to_srgb(linear: f32) -> u8 {
    (srgb_from_linear(linear) * 255f32).round().max(0f32).min(255f32) as u8
}

/// WCAG relative luminance of 8-bit sRGB color
#[inline]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    const SCALE: f64 = 1f64 / 255f64;
    let r = wcag_to_linear(r as f64 * SCALE);
    let g = wcag_to_linear(g as f64 * SCALE);
    let b = wcag_to_linear(b as f64 * SCALE);
    0.2126f64 * r + 0.7152f64 * g + 0.0722f64 * b
}

/// 8-bit lookup table for sRGB linearization
pub fn srgb_linearization_table() -> [f32; 256] {
    let mut lut_table = [0f32; 256];
    for (i, element) in lut_table.iter_mut().enumerate() {
        *element = srgb_to_linear(i as f32 * (1. / 255.0));
    }
    lut_table
}
