/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

mod accessibility;
mod contrast;
mod cvd_matrices;
mod error;
mod gamma_curves;
mod hsv;
mod image;
mod image_to_cvd;
mod palette;
mod pixel_buffer;
mod rgb;
mod severity;
mod split_view;

pub use accessibility::{
    analyze, analyze_contrast, analyze_diversity, analyze_rgba, grade_for, sample_colors,
    sample_statistics, score_statistics, AccessibilityScore, ContrastStatistics,
    DiversityStatistics, Grade, SampleStatistics, WcagLevel, LOW_CONTRAST_RATIO,
    MAX_CONTRAST_SAMPLES, RECOMMEND_ALTERNATIVE_INDICATORS, RECOMMEND_GOOD,
    RECOMMEND_IMPROVE_CONTRAST, RECOMMEND_RED_GREEN, RECOMMEND_SOME_CONTRAST, TARGET_SAMPLES,
};
pub use contrast::{
    check, check_points, contrast_ratio, ContrastResult, WCAG_AAA_LARGE, WCAG_AAA_NORMAL,
    WCAG_AA_LARGE, WCAG_AA_NORMAL,
};
pub use cvd_matrices::*;
pub use error::{CvdError, CvdResult};
pub use gamma_curves::*;
pub use hsv::Hsv;
pub use image_to_cvd::{
    bgra_simulate_cvd, rgba_simulate_cvd, simulate_color, simulate_cvd, simulate_cvd_into,
};
pub use palette::{
    find_palette, Palette, SimulatedSwatch, Swatch, BOOTSTRAP, HIGH_CONTRAST, MATERIAL_DESIGN,
    PRESET_PALETTES, TAILWIND,
};
pub use pixel_buffer::PixelBuffer;
pub use rgb::{EuclideanDistance, Rgb};
pub use severity::{clamp_severity, effective_matrix, is_passthrough, SeverityLevel};
pub use split_view::{compose_side_by_side, compose_split, split_column, SplitStyle};
