/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

//! Error types for simulation and analysis.
//!
//! Empty images are not errors, neither are unknown variant names or
//! severities outside of [0, 100]; those are resolved in place.

use thiserror::Error;

/// Failure of a simulation, compositing or analysis call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CvdError {
    /// Buffers that must match in size do not.
    #[error("invalid dimensions: expected {expected_width}x{expected_height}, got {width}x{height}")]
    InvalidDimensions {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    /// Slice is shorter than its stride and height require.
    #[error("buffer too small: {required} bytes required, {actual} provided")]
    BufferTooSmall { required: usize, actual: usize },

    /// Row stride cannot hold a packed row.
    #[error("invalid stride {stride}, at least {minimum} bytes per row expected")]
    InvalidStride { stride: u32, minimum: u32 },

    /// Requested pixel lies outside of the image.
    #[error("point ({x}, {y}) is outside of {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Image row or total size does not fit into addressable memory.
    #[error("image of {width}x{height} is too large")]
    DimensionsOverflow { width: u64, height: u64 },

    /// Color string is not `#RRGGBB`.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result type for simulation and analysis.
pub type CvdResult<T> = Result<T, CvdError>;
