/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

//! Heuristic accessibility score of an image as seen with a given deficiency.
//!
//! Roughly a hundred pixels are sampled, neighbouring samples are compared by
//! WCAG contrast and the hue distribution is checked for red/green reliance.
//! The result is directional feedback, not a formal metric; the only hard
//! guarantee is that the same input always yields the same score.

use crate::contrast::contrast_ratio;
use crate::severity::clamp_severity;
use crate::{CvdError, CvdResult, CvdVariant, PixelBuffer, Rgb};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::fmt::{Display, Formatter};
use tracing::{debug, trace};

/// Samples wanted per image
pub const TARGET_SAMPLES: usize = 100;
/// Only this many leading samples take part in contrast pairs
pub const MAX_CONTRAST_SAMPLES: usize = 50;
/// Pairs below this ratio count as low contrast
pub const LOW_CONTRAST_RATIO: f64 = 3.0f64;

pub const RECOMMEND_IMPROVE_CONTRAST: &str = "Improve color contrast ratios";
pub const RECOMMEND_SOME_CONTRAST: &str = "Some colors may have insufficient contrast";
pub const RECOMMEND_RED_GREEN: &str = "Reduce reliance on red-green color combinations";
pub const RECOMMEND_ALTERNATIVE_INDICATORS: &str =
    "Consider alternative visual indicators beyond color";
pub const RECOMMEND_GOOD: &str = "Good color accessibility detected";

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum WcagLevel {
    Aaa,
    Aa,
    A,
    Fail,
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        })
    }
}

impl Display for WcagLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::A => "A",
            WcagLevel::Fail => "Fail",
        })
    }
}

/// Maps 0..=100 score into letter grade and WCAG tier
pub fn grade_for(score: u8) -> (Grade, WcagLevel) {
    match score {
        90..=u8::MAX => (Grade::A, WcagLevel::Aaa),
        80..=89 => (Grade::B, WcagLevel::Aa),
        70..=79 => (Grade::C, WcagLevel::A),
        60..=69 => (Grade::D, WcagLevel::Fail),
        _ => (Grade::F, WcagLevel::Fail),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityScore {
    /// 0..=100
    pub overall: u8,
    /// Percentage of low contrast sample pairs
    pub contrast_issues: f32,
    /// Percentage of samples with red or green hue
    pub color_dependency: f32,
    pub grade: Grade,
    pub wcag_level: WcagLevel,
    pub recommendations: Vec<String>,
    pub average_contrast: f64,
    pub average_saturation: f32,
    pub color_variety: usize,
    pub sample_count: usize,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContrastStatistics {
    pub average_contrast: f64,
    pub low_contrast_percentage: f32,
    pub total_pairs: usize,
    pub low_contrast_count: usize,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiversityStatistics {
    /// Fraction in [0, 1]
    pub red_green_ratio: f32,
    pub average_saturation: f32,
    /// Distinct colors after quantizing every channel to 8 levels
    pub color_variety: usize,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleStatistics {
    pub contrast: ContrastStatistics,
    pub diversity: DiversityStatistics,
    pub sample_count: usize,
}

/// Picks every `max(1, pixels / 100)`-th pixel of a packed RGBA image
pub fn sample_colors(data: &[u8], width: u32, height: u32) -> Vec<Rgb<u8>> {
    let total_pixels = (width as usize * height as usize).min(data.len() / 4);
    let stride = (total_pixels / TARGET_SAMPLES).max(1);
    (0..total_pixels)
        .step_by(stride)
        .map(|i| {
            let px = &data[i * 4..i * 4 + 3];
            Rgb::<u8>::new(px[0], px[1], px[2])
        })
        .collect()
}

/// Contrast of sequential, non-overlapping pairs among the leading samples
pub fn analyze_contrast(samples: &[Rgb<u8>]) -> ContrastStatistics {
    let leading = &samples[..samples.len().min(MAX_CONTRAST_SAMPLES)];
    let ratios: Vec<f64> = leading
        .chunks_exact(2)
        .map(|pair| contrast_ratio(pair[0].relative_luminance(), pair[1].relative_luminance()))
        .collect();

    let total_pairs = ratios.len();
    let low_contrast_count = ratios.iter().filter(|&&r| r < LOW_CONTRAST_RATIO).count();
    if total_pairs == 0 {
        return ContrastStatistics {
            average_contrast: 1f64,
            low_contrast_percentage: 0f32,
            total_pairs,
            low_contrast_count,
        };
    }
    ContrastStatistics {
        average_contrast: ratios.iter().sum::<f64>() / total_pairs as f64,
        low_contrast_percentage: low_contrast_count as f32 / total_pairs as f32 * 100f32,
        total_pairs,
        low_contrast_count,
    }
}

/// Per worker partial sums, merged once all samples are seen
#[derive(Debug, Copy, Clone, Default)]
struct DiversityPartial {
    red_green: usize,
    /// One bit per quantized (r, g, b) bucket, 8 * 8 * 8 buckets
    buckets: [u64; 8],
}

impl DiversityPartial {
    #[inline]
    fn push(mut self, color: &Rgb<u8>) -> Self {
        if color.to_hsv().is_red_green() {
            self.red_green += 1;
        }
        let key = ((color.r >> 5) as usize) << 6
            | ((color.g >> 5) as usize) << 3
            | (color.b >> 5) as usize;
        self.buckets[key >> 6] |= 1u64 << (key & 63);
        self
    }

    #[inline]
    fn merge(mut self, other: Self) -> Self {
        self.red_green += other.red_green;
        for (dst, src) in self.buckets.iter_mut().zip(other.buckets.iter()) {
            *dst |= *src;
        }
        self
    }

    #[inline]
    fn variety(&self) -> usize {
        self.buckets.iter().map(|v| v.count_ones() as usize).sum()
    }
}

/// Hue distribution and color variety of the samples
pub fn analyze_diversity(samples: &[Rgb<u8>]) -> DiversityStatistics {
    if samples.is_empty() {
        return DiversityStatistics {
            red_green_ratio: 0f32,
            average_saturation: 0f32,
            color_variety: 0,
        };
    }

    let partial;

    #[cfg(feature = "rayon")]
    {
        partial = samples
            .par_iter()
            .fold(DiversityPartial::default, DiversityPartial::push)
            .reduce(DiversityPartial::default, DiversityPartial::merge);
    }
    #[cfg(not(feature = "rayon"))]
    {
        partial = samples
            .iter()
            .fold(DiversityPartial::default(), DiversityPartial::push);
    }

    // summed in sample order so the average does not depend on scheduling
    let saturation_sum: f32 = samples.iter().map(|c| c.to_hsv().s).sum();

    DiversityStatistics {
        red_green_ratio: partial.red_green as f32 / samples.len() as f32,
        average_saturation: saturation_sum / samples.len() as f32,
        color_variety: partial.variety(),
    }
}

/// Collects all statistics the score is derived from
pub fn sample_statistics(data: &[u8], width: u32, height: u32) -> SampleStatistics {
    let samples = sample_colors(data, width, height);
    SampleStatistics {
        contrast: analyze_contrast(&samples),
        diversity: analyze_diversity(&samples),
        sample_count: samples.len(),
    }
}

/// Applies point deductions to the statistics
pub fn score_statistics(
    statistics: &SampleStatistics,
    variant: CvdVariant,
    severity_percent: f32,
) -> AccessibilityScore {
    let severity = clamp_severity(severity_percent);
    let contrast = &statistics.contrast;
    let diversity = &statistics.diversity;

    let mut base_score = 100f32;
    let mut recommendations: Vec<String> = Vec::new();

    if contrast.low_contrast_percentage > 30f32 {
        base_score -= 30f32;
        recommendations.push(RECOMMEND_IMPROVE_CONTRAST.to_string());
    } else if contrast.low_contrast_percentage > 15f32 {
        base_score -= 15f32;
        recommendations.push(RECOMMEND_SOME_CONTRAST.to_string());
    }

    if variant.is_red_green() && diversity.red_green_ratio > 0.6f32 {
        base_score -= (severity * 0.4f32).min(25f32);
        recommendations.push(RECOMMEND_RED_GREEN.to_string());
    }

    if diversity.color_variety > 20 {
        base_score += 5f32;
    }

    if severity > 50f32 && variant != CvdVariant::Normal {
        base_score -= (severity - 50f32) * 0.2f32;
        if severity > 75f32 {
            recommendations.push(RECOMMEND_ALTERNATIVE_INDICATORS.to_string());
        }
    }

    let overall = base_score.max(0f32).min(100f32).round() as u8;
    let (grade, wcag_level) = grade_for(overall);

    if recommendations.is_empty() {
        recommendations.push(RECOMMEND_GOOD.to_string());
    }

    debug!(overall, %grade, %wcag_level, "accessibility score");

    AccessibilityScore {
        overall,
        contrast_issues: contrast.low_contrast_percentage,
        color_dependency: diversity.red_green_ratio * 100f32,
        grade,
        wcag_level,
        recommendations,
        average_contrast: contrast.average_contrast,
        average_saturation: diversity.average_saturation,
        color_variety: diversity.color_variety,
        sample_count: statistics.sample_count,
    }
}

/// Scores an image, usually the simulated one, for given deficiency
pub fn analyze(buffer: &PixelBuffer, variant: CvdVariant, severity_percent: f32) -> AccessibilityScore {
    trace!(
        width = buffer.width(),
        height = buffer.height(),
        %variant,
        severity = severity_percent,
        "analyze"
    );
    let statistics = sample_statistics(buffer.data(), buffer.width(), buffer.height());
    score_statistics(&statistics, variant, severity_percent)
}

/// Same as [analyze] for a raw packed RGBA slice
pub fn analyze_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    variant: CvdVariant,
    severity_percent: f32,
) -> CvdResult<AccessibilityScore> {
    let required = width as usize * height as usize * 4;
    if data.len() < required {
        return Err(CvdError::BufferTooSmall {
            required,
            actual: data.len(),
        });
    }
    let statistics = sample_statistics(data, width, height);
    Ok(score_statistics(&statistics, variant, severity_percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statistics(low_contrast: f32, red_green: f32, variety: usize) -> SampleStatistics {
        SampleStatistics {
            contrast: ContrastStatistics {
                average_contrast: 5f64,
                low_contrast_percentage: low_contrast,
                total_pairs: 25,
                low_contrast_count: 0,
            },
            diversity: DiversityStatistics {
                red_green_ratio: red_green,
                average_saturation: 0.5f32,
                color_variety: variety,
            },
            sample_count: 100,
        }
    }

    #[test]
    fn grades() {
        assert_eq!(grade_for(100), (Grade::A, WcagLevel::Aaa));
        assert_eq!(grade_for(90), (Grade::A, WcagLevel::Aaa));
        assert_eq!(grade_for(89), (Grade::B, WcagLevel::Aa));
        assert_eq!(grade_for(70), (Grade::C, WcagLevel::A));
        assert_eq!(grade_for(60), (Grade::D, WcagLevel::Fail));
        assert_eq!(grade_for(59), (Grade::F, WcagLevel::Fail));
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
    }

    #[test]
    fn clean_image_is_good() {
        let score = score_statistics(&statistics(0f32, 0f32, 5), CvdVariant::Normal, 0f32);
        assert_eq!(score.overall, 100);
        assert_eq!(score.grade, Grade::A);
        assert_eq!(score.recommendations, vec![RECOMMEND_GOOD.to_string()]);
    }

    #[test]
    fn deductions_in_order() {
        let score = score_statistics(&statistics(40f32, 0.8f32, 30), CvdVariant::Protanopia, 100f32);
        // 100 - 30 - 25 + 5 - 10
        assert_eq!(score.overall, 40);
        assert_eq!(score.grade, Grade::F);
        assert_eq!(
            score.recommendations,
            vec![
                RECOMMEND_IMPROVE_CONTRAST.to_string(),
                RECOMMEND_RED_GREEN.to_string(),
                RECOMMEND_ALTERNATIVE_INDICATORS.to_string(),
            ]
        );
        assert_eq!(score.color_dependency, 80f32);
    }

    #[test]
    fn moderate_contrast_and_mild_severity() {
        let score = score_statistics(&statistics(20f32, 0.7f32, 3), CvdVariant::Deuteranopia, 30f32);
        // 100 - 15 - 12
        assert_eq!(score.overall, 73);
        assert_eq!(score.wcag_level, WcagLevel::A);
        assert_eq!(score.recommendations.len(), 2);
    }

    #[test]
    fn red_green_ignored_for_tritanopia() {
        let score = score_statistics(&statistics(0f32, 1f32, 3), CvdVariant::Tritanopia, 60f32);
        // 100 - 2
        assert_eq!(score.overall, 98);
        assert_eq!(score.recommendations, vec![RECOMMEND_GOOD.to_string()]);
    }

    #[test]
    fn more_low_contrast_never_raises_score() {
        let mut previous = u8::MAX;
        for low in [10f32, 15f32, 16f32, 25f32, 30f32, 31f32, 40f32] {
            let score = score_statistics(&statistics(low, 0.2, 10), CvdVariant::Deuteranopia, 80f32);
            assert!(score.overall <= previous);
            previous = score.overall;
        }
    }

    #[test]
    fn out_of_range_severity_is_clamped() {
        let high = score_statistics(&statistics(0f32, 0.9f32, 3), CvdVariant::Protanopia, 500f32);
        let full = score_statistics(&statistics(0f32, 0.9f32, 3), CvdVariant::Protanopia, 100f32);
        assert_eq!(high, full);
    }

    #[test]
    fn sampling_stride() {
        let buffer = PixelBuffer::filled(100, 10, [1, 2, 3, 255]);
        assert_eq!(sample_colors(buffer.data(), 100, 10).len(), 100);
        let buffer = PixelBuffer::filled(15, 10, [1, 2, 3, 255]);
        // 150 pixels, stride 1
        assert_eq!(sample_colors(buffer.data(), 15, 10).len(), 150);
        let buffer = PixelBuffer::filled(250, 1, [1, 2, 3, 255]);
        // stride 2
        assert_eq!(sample_colors(buffer.data(), 250, 1).len(), 125);
    }

    #[test]
    fn contrast_pairs() {
        let samples = vec![
            Rgb::black(),
            Rgb::white(),
            Rgb::new(100, 100, 100),
            Rgb::new(110, 110, 110),
            Rgb::new(5, 5, 5),
        ];
        let stats = analyze_contrast(&samples);
        assert_eq!(stats.total_pairs, 2);
        assert_eq!(stats.low_contrast_count, 1);
        assert_eq!(stats.low_contrast_percentage, 50f32);
        assert_eq!(analyze_contrast(&samples[..1]).low_contrast_percentage, 0f32);
    }

    #[test]
    fn variety_buckets() {
        let samples = vec![
            Rgb::new(0, 0, 0),
            Rgb::new(31, 31, 31),
            Rgb::new(32, 0, 0),
            Rgb::new(255, 255, 255),
        ];
        let stats = analyze_diversity(&samples);
        assert_eq!(stats.color_variety, 3);
        // achromatic samples and dark red all have hue 0
        assert_eq!(stats.red_green_ratio, 1f32);
    }

    #[test]
    fn empty_image() {
        let score = analyze(&PixelBuffer::new(0, 0), CvdVariant::Protanopia, 100f32);
        assert_eq!(score.sample_count, 0);
        assert_eq!(score.contrast_issues, 0f32);
        assert_eq!(score.color_dependency, 0f32);
        assert_eq!(score.overall, 90);
    }

    #[test]
    fn raw_slice_is_checked() {
        assert!(matches!(
            analyze_rgba(&[0u8; 12], 2, 2, CvdVariant::Normal, 0f32),
            Err(CvdError::BufferTooSmall { .. })
        ));
    }
}
