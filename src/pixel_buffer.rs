/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::{CvdError, CvdResult, Rgb};

/// Owned, tightly packed RGBA8 image in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub const CHANNELS: usize = 4;
    /// Widest image whose row stride still fits `u32`
    pub const MAX_WIDTH: u32 = u32::MAX / Self::CHANNELS as u32;

    /// Creates transparent black image
    ///
    /// # Panics
    /// When `width` exceeds [PixelBuffer::MAX_WIDTH]
    pub fn new(width: u32, height: u32) -> PixelBuffer {
        assert!(width <= Self::MAX_WIDTH, "width {width} exceeds {}", Self::MAX_WIDTH);
        PixelBuffer {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * Self::CHANNELS],
        }
    }

    /// Creates image where every pixel is `rgba`
    ///
    /// # Panics
    /// When `width` exceeds [PixelBuffer::MAX_WIDTH]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
        assert!(width <= Self::MAX_WIDTH, "width {width} exceeds {}", Self::MAX_WIDTH);
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * Self::CHANNELS)
            .collect();
        PixelBuffer {
            width,
            height,
            data,
        }
    }

    /// Wraps decoded RGBA8 samples, `data` must hold exactly `width * height * 4` bytes
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> CvdResult<PixelBuffer> {
        if width > Self::MAX_WIDTH {
            return Err(CvdError::DimensionsOverflow {
                width: width as u64,
                height: height as u64,
            });
        }
        let required = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(Self::CHANNELS));
        if required != Some(data.len()) {
            return Err(CvdError::BufferTooSmall {
                required: required.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, never overflows since width is at most [PixelBuffer::MAX_WIDTH]
    #[inline]
    pub fn stride(&self) -> u32 {
        self.width * Self::CHANNELS as u32
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * Self::CHANNELS)
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let px = &self.data[offset..offset + Self::CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Color part of a pixel, alpha ignored
    pub fn get_rgb(&self, x: u32, y: u32) -> CvdResult<Rgb<u8>> {
        match self.get_pixel(x, y) {
            Some(px) => Ok(Rgb::<u8>::new(px[0], px[1], px[2])),
            None => Err(CvdError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Writes a pixel, coordinates outside of the image are ignored
    pub fn put_pixel(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x > u32::MAX as i64 || y > u32::MAX as i64 {
            return;
        }
        if let Some(offset) = self.offset(x as u32, y as u32) {
            self.data[offset..offset + Self::CHANNELS].copy_from_slice(&rgba);
        }
    }

    /// Fails with [CvdError::InvalidDimensions] unless `other` has the same size
    pub fn ensure_same_dimensions(&self, other: &PixelBuffer) -> CvdResult<()> {
        if self.width != other.width || self.height != other.height {
            return Err(CvdError::InvalidDimensions {
                expected_width: self.width,
                expected_height: self.height,
                width: other.width,
                height: other.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_length_is_validated() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0u8; 16]).is_ok());
        assert_eq!(
            PixelBuffer::from_raw(2, 2, vec![0u8; 15]),
            Err(CvdError::BufferTooSmall {
                required: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn pixel_access() {
        let mut buffer = PixelBuffer::filled(3, 2, [1, 2, 3, 4]);
        assert_eq!(buffer.get_pixel(2, 1), Some([1, 2, 3, 4]));
        buffer.put_pixel(1, 1, [9, 8, 7, 6]);
        buffer.put_pixel(-1, 0, [0, 0, 0, 0]);
        buffer.put_pixel(3, 0, [0, 0, 0, 0]);
        assert_eq!(buffer.get_pixel(1, 1), Some([9, 8, 7, 6]));
        assert_eq!(buffer.get_pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(buffer.get_pixel(3, 0), None);
        assert!(matches!(buffer.get_rgb(0, 2), Err(CvdError::OutOfBounds { .. })));
    }

    #[test]
    fn empty_buffer() {
        let buffer = PixelBuffer::new(0, 10);
        assert!(buffer.is_empty());
        assert!(buffer.data().is_empty());
    }

    #[test]
    fn width_must_fit_row_stride() {
        assert_eq!(
            PixelBuffer::from_raw(1 << 30, 0, vec![]),
            Err(CvdError::DimensionsOverflow {
                width: 1 << 30,
                height: 0
            })
        );
        let widest = PixelBuffer::from_raw(PixelBuffer::MAX_WIDTH, 0, vec![]).unwrap();
        assert!(widest.is_empty());
        assert_eq!(widest.stride(), PixelBuffer::MAX_WIDTH * 4);
    }
}
