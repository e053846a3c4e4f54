/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::gamma_curves::{srgb_linearization_table, to_srgb};
use crate::image::ImageConfiguration;
use crate::severity::{clamp_severity, effective_matrix, is_passthrough};
use crate::{CvdError, CvdResult, CvdVariant, Matrix3, PixelBuffer, Rgb};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};
use tracing::{debug, trace};

#[inline(always)]
fn convert_row<const CHANNELS_CONFIGURATION: u8>(
    src: &[u8],
    dst: &mut [u8],
    lut_table: &[f32; 256],
    matrix: &Matrix3,
) {
    let image_configuration: ImageConfiguration = CHANNELS_CONFIGURATION.into();
    let channels = image_configuration.get_channels_count();
    let r_offset = image_configuration.get_r_channel_offset();
    let g_offset = image_configuration.get_g_channel_offset();
    let b_offset = image_configuration.get_b_channel_offset();
    let a_offset = image_configuration.get_a_channel_offset();

    for (dst_chunk, src_chunk) in dst
        .chunks_exact_mut(channels)
        .zip(src.chunks_exact(channels))
    {
        let linear = Rgb::<f32>::new(
            lut_table[src_chunk[r_offset] as usize],
            lut_table[src_chunk[g_offset] as usize],
            lut_table[src_chunk[b_offset] as usize],
        );
        let simulated = linear.transform(matrix);
        dst_chunk[r_offset] = to_srgb(simulated.r);
        dst_chunk[g_offset] = to_srgb(simulated.g);
        dst_chunk[b_offset] = to_srgb(simulated.b);
        dst_chunk[a_offset] = src_chunk[a_offset];
    }
}

/// Caller guarantees both slices hold `stride * height` bytes and strides cover a row
fn channels_to_cvd<const CHANNELS_CONFIGURATION: u8>(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    variant: CvdVariant,
    severity_percent: f32,
) {
    let image_configuration: ImageConfiguration = CHANNELS_CONFIGURATION.into();
    let row_length = width as usize * image_configuration.get_channels_count();
    if row_length == 0 || height == 0 {
        return;
    }

    let severity = clamp_severity(severity_percent);
    trace!(width, height, %variant, severity, "simulate_cvd");
    if severity != severity_percent {
        debug!(requested = severity_percent, severity, "severity clamped");
    }

    let src = &src[..src_stride as usize * height as usize];
    let dst = &mut dst[..dst_stride as usize * height as usize];

    if is_passthrough(variant, severity) {
        debug!(%variant, severity, "passthrough, copying source");
        for (dst, src) in dst
            .chunks_exact_mut(dst_stride as usize)
            .zip(src.chunks_exact(src_stride as usize))
        {
            dst[..row_length].copy_from_slice(&src[..row_length]);
        }
        return;
    }

    let matrix = effective_matrix(variant, severity);
    let lut_table = srgb_linearization_table();

    let iter;

    #[cfg(feature = "rayon")]
    {
        iter = dst
            .par_chunks_exact_mut(dst_stride as usize)
            .zip(src.par_chunks_exact(src_stride as usize));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst
            .chunks_exact_mut(dst_stride as usize)
            .zip(src.chunks_exact(src_stride as usize));
    }

    iter.for_each(|(dst, src)| {
        convert_row::<CHANNELS_CONFIGURATION>(
            &src[..row_length],
            &mut dst[..row_length],
            &lut_table,
            &matrix,
        );
    });
}

fn check_layout(len: usize, stride: u32, width: u32, height: u32) -> CvdResult<()> {
    let minimum = width as u64 * ImageConfiguration::Rgba.get_channels_count() as u64;
    if (stride as u64) < minimum {
        return Err(CvdError::InvalidStride {
            stride,
            minimum: minimum.min(u32::MAX as u64) as u32,
        });
    }
    let required = stride as usize * height as usize;
    if len < required {
        return Err(CvdError::BufferTooSmall {
            required,
            actual: len,
        });
    }
    Ok(())
}

fn simulate_channels<const CHANNELS_CONFIGURATION: u8>(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    variant: CvdVariant,
    severity_percent: f32,
) -> CvdResult<()> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    check_layout(src.len(), src_stride, width, height)?;
    check_layout(dst.len(), dst_stride, width, height)?;
    channels_to_cvd::<CHANNELS_CONFIGURATION>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        variant,
        severity_percent,
    );
    Ok(())
}

/// This function simulates color vision deficiency on RGBA image, alpha is copied as is.
///
/// Zero severity or [CvdVariant::Normal] copies source bytes verbatim.
///
/// # Arguments
/// * `src` - A slice contains RGBA data
/// * `src_stride` - Bytes per row for src data.
/// * `dst` - A mutable slice to receive simulated RGBA data
/// * `dst_stride` - Bytes per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `variant` - Deficiency to simulate
/// * `severity_percent` - Strength in [0, 100], clamped
pub fn rgba_simulate_cvd(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    variant: CvdVariant,
    severity_percent: f32,
) -> CvdResult<()> {
    simulate_channels::<{ ImageConfiguration::Rgba as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        variant,
        severity_percent,
    )
}

/// This function simulates color vision deficiency on BGRA image, alpha is copied as is.
///
/// # Arguments
/// * `src` - A slice contains BGRA data
/// * `src_stride` - Bytes per row for src data.
/// * `dst` - A mutable slice to receive simulated BGRA data
/// * `dst_stride` - Bytes per row for dst data
/// * `width` - Image width
/// * `height` - Image height
/// * `variant` - Deficiency to simulate
/// * `severity_percent` - Strength in [0, 100], clamped
pub fn bgra_simulate_cvd(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    variant: CvdVariant,
    severity_percent: f32,
) -> CvdResult<()> {
    simulate_channels::<{ ImageConfiguration::Bgra as u8 }>(
        src,
        src_stride,
        dst,
        dst_stride,
        width,
        height,
        variant,
        severity_percent,
    )
}

/// Simulates deficiency into a new buffer of the same size
pub fn simulate_cvd(src: &PixelBuffer, variant: CvdVariant, severity_percent: f32) -> PixelBuffer {
    let mut dst = PixelBuffer::new(src.width(), src.height());
    if src.is_empty() {
        return dst;
    }
    channels_to_cvd::<{ ImageConfiguration::Rgba as u8 }>(
        src.data(),
        src.stride(),
        dst.data_mut(),
        src.stride(),
        src.width(),
        src.height(),
        variant,
        severity_percent,
    );
    dst
}

/// Simulates deficiency into caller provided buffer, sizes must match
pub fn simulate_cvd_into(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    variant: CvdVariant,
    severity_percent: f32,
) -> CvdResult<()> {
    src.ensure_same_dimensions(dst)?;
    if src.is_empty() {
        return Ok(());
    }
    let stride = src.stride();
    channels_to_cvd::<{ ImageConfiguration::Rgba as u8 }>(
        src.data(),
        stride,
        dst.data_mut(),
        stride,
        src.width(),
        src.height(),
        variant,
        severity_percent,
    );
    Ok(())
}

/// Simulates deficiency on a single color
pub fn simulate_color(color: Rgb<u8>, variant: CvdVariant, severity_percent: f32) -> Rgb<u8> {
    let severity = clamp_severity(severity_percent);
    if is_passthrough(variant, severity) {
        return color;
    }
    let matrix = effective_matrix(variant, severity);
    Rgb::<u8>::from_linear(color.to_linear().transform(&matrix))
}
