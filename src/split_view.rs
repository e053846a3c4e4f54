/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::{CvdError, CvdResult, PixelBuffer};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use tracing::trace;

/// Look of the comparison divider and its drag handle
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplitStyle {
    /// Width of the outer stroke in pixels
    pub outer_width: u32,
    pub outer_color: [u8; 4],
    /// Width of the inner stroke, drawn over the outer one
    pub inner_width: u32,
    pub inner_color: [u8; 4],
    /// Draw the circular handle at mid height
    pub handle: bool,
    pub handle_radius: f32,
    pub ring_width: f32,
    pub handle_fill: [u8; 4],
    /// Ring and grip bars color
    pub handle_accent: [u8; 4],
    /// Opacity of the drop shadow offset by 2px, 0 disables it
    pub shadow_opacity: f32,
}

impl Default for SplitStyle {
    fn default() -> Self {
        SplitStyle {
            outer_width: 4,
            outer_color: [0, 0, 0, 255],
            inner_width: 2,
            inner_color: [255, 255, 255, 255],
            handle: true,
            handle_radius: 20f32,
            ring_width: 3f32,
            handle_fill: [255, 255, 255, 255],
            handle_accent: [0x37, 0x41, 0x51, 255],
            shadow_opacity: 0.2f32,
        }
    }
}

impl SplitStyle {
    /// Divider only, no handle
    pub fn plain() -> SplitStyle {
        SplitStyle {
            handle: false,
            ..SplitStyle::default()
        }
    }

    /// No overlay at all, bare pixel split
    pub fn hidden() -> SplitStyle {
        SplitStyle {
            outer_width: 0,
            inner_width: 0,
            handle: false,
            ..SplitStyle::default()
        }
    }
}

/// Column where transformed image starts, fraction is clamped to [0, 1] and NaN means half
#[inline]
pub fn split_column(split_fraction: f32, width: u32) -> u32 {
    let fraction = if split_fraction.is_nan() {
        0.5f32
    } else {
        split_fraction.max(0f32).min(1f32)
    };
    (fraction * width as f32).round().min(width as f32) as u32
}

/// Composes slider comparison: columns left of the split come from `original`,
/// the rest from `transformed`, then divider and handle are painted over.
pub fn compose_split(
    original: &PixelBuffer,
    transformed: &PixelBuffer,
    split_fraction: f32,
    style: &SplitStyle,
) -> CvdResult<PixelBuffer> {
    original.ensure_same_dimensions(transformed)?;
    let width = original.width();
    let height = original.height();
    let split_x = split_column(split_fraction, width);
    trace!(width, height, split_x, "compose_split");

    let mut dst = PixelBuffer::new(width, height);
    if dst.is_empty() {
        return Ok(dst);
    }

    let stride = original.stride() as usize;
    let split_offset = split_x as usize * PixelBuffer::CHANNELS;

    let iter;

    #[cfg(feature = "rayon")]
    {
        iter = dst
            .data_mut()
            .par_chunks_exact_mut(stride)
            .zip(original.data().par_chunks_exact(stride))
            .zip(transformed.data().par_chunks_exact(stride));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .data_mut()
            .chunks_exact_mut(stride)
            .zip(original.data().chunks_exact(stride))
            .zip(transformed.data().chunks_exact(stride));
    }

    iter.for_each(|((dst, original), transformed)| {
        dst[..split_offset].copy_from_slice(&original[..split_offset]);
        dst[split_offset..].copy_from_slice(&transformed[split_offset..]);
    });

    draw_divider(&mut dst, split_x, style);
    if style.handle {
        draw_handle(&mut dst, split_x, style);
    }
    Ok(dst)
}

/// Places both images next to each other separated by `gap` transparent columns
pub fn compose_side_by_side(
    original: &PixelBuffer,
    transformed: &PixelBuffer,
    gap: u32,
) -> CvdResult<PixelBuffer> {
    original.ensure_same_dimensions(transformed)?;
    let width = original.width();
    let height = original.height();
    trace!(width, height, gap, "compose_side_by_side");

    let out_width = width
        .checked_mul(2)
        .and_then(|v| v.checked_add(gap))
        .filter(|&v| v <= PixelBuffer::MAX_WIDTH)
        .ok_or(CvdError::DimensionsOverflow {
            width: width as u64 * 2 + gap as u64,
            height: height as u64,
        })?;
    let mut dst = PixelBuffer::new(out_width, height);
    if width == 0 || height == 0 {
        return Ok(dst);
    }
    let src_stride = original.stride() as usize;
    let dst_stride = dst.stride() as usize;
    let right_offset = (width + gap) as usize * PixelBuffer::CHANNELS;

    for ((dst, original), transformed) in dst
        .data_mut()
        .chunks_exact_mut(dst_stride)
        .zip(original.data().chunks_exact(src_stride))
        .zip(transformed.data().chunks_exact(src_stride))
    {
        dst[..src_stride].copy_from_slice(original);
        dst[right_offset..right_offset + src_stride].copy_from_slice(transformed);
    }
    Ok(dst)
}

fn fill_columns(dst: &mut PixelBuffer, from: i64, to: i64, color: [u8; 4]) {
    for y in 0..dst.height() as i64 {
        for x in from..to {
            dst.put_pixel(x, y, color);
        }
    }
}

fn draw_divider(dst: &mut PixelBuffer, split_x: u32, style: &SplitStyle) {
    let center = split_x as i64;
    for (stroke, color) in [
        (style.outer_width, style.outer_color),
        (style.inner_width, style.inner_color),
    ] {
        if stroke == 0 {
            continue;
        }
        let half = stroke as i64 / 2;
        fill_columns(dst, center - half, center - half + stroke as i64, color);
    }
}

#[inline]
fn blend(under: [u8; 4], over: [u8; 4], opacity: f32) -> [u8; 4] {
    let mix = |a: u8, b: u8| (a as f32 * (1f32 - opacity) + b as f32 * opacity).round() as u8;
    [
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
        under[3].max(over[3]),
    ]
}

fn draw_disc<F>(dst: &mut PixelBuffer, cx: f32, cy: f32, radius: f32, mut paint: F)
where
    F: FnMut(&mut PixelBuffer, i64, i64, f32),
{
    let x0 = (cx - radius).floor() as i64;
    let x1 = (cx + radius).ceil() as i64;
    let y0 = (cy - radius).floor() as i64;
    let y1 = (cy + radius).ceil() as i64;
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5f32 - cx;
            let dy = y as f32 + 0.5f32 - cy;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= radius {
                paint(&mut *dst, x, y, distance);
            }
        }
    }
}

fn draw_handle(dst: &mut PixelBuffer, split_x: u32, style: &SplitStyle) {
    let cx = split_x as f32;
    let cy = dst.height() as f32 / 2f32;
    let radius = style.handle_radius;

    if style.shadow_opacity > 0f32 {
        let opacity = style.shadow_opacity.min(1f32);
        draw_disc(dst, cx + 2f32, cy + 2f32, radius, |dst, x, y, _| {
            if x < 0 || y < 0 {
                return;
            }
            if let Some(under) = dst.get_pixel(x as u32, y as u32) {
                dst.put_pixel(x, y, blend(under, [0, 0, 0, 255], opacity));
            }
        });
    }

    let fill = style.handle_fill;
    let accent = style.handle_accent;
    let half_ring = style.ring_width.max(0f32) / 2f32;
    let ring_start = radius - half_ring;
    draw_disc(dst, cx, cy, radius + half_ring, |dst, x, y, distance| {
        let color = if distance > ring_start { accent } else { fill };
        dst.put_pixel(x, y, color);
    });

    // grip: four 2x16 bars every 4px around the split
    let top = cy.round() as i64 - 8;
    for offset in [-6i64, -2, 2, 6] {
        let left = split_x as i64 + offset - 1;
        for y in top..top + 16 {
            for x in left..left + 2 {
                dst.put_pixel(x, y, accent);
            }
        }
    }
}
