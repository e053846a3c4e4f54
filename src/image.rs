/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// Channel order of interleaved 8-bit buffers, alpha is always present
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug)]
pub(crate) enum ImageConfiguration {
    Rgba = 0,
    Bgra = 1,
}

impl ImageConfiguration {
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        4
    }

    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            ImageConfiguration::Rgba => 0,
            ImageConfiguration::Bgra => 2,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            ImageConfiguration::Rgba => 2,
            ImageConfiguration::Bgra => 0,
        }
    }

    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        3
    }
}

impl From<u8> for ImageConfiguration {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => ImageConfiguration::Rgba,
            1 => ImageConfiguration::Bgra,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}
