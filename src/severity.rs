/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::cvd_matrices::{CvdVariant, Matrix3, IDENTITY};
use num_traits::clamp;

/// Interpolates between [IDENTITY] and variant base matrix.
///
/// `t = severity_percent / 100` is used as is, values outside of [0, 100]
/// extrapolate. Pipelines clamp with [clamp_severity] before calling this.
pub fn effective_matrix(variant: CvdVariant, severity_percent: f32) -> Matrix3 {
    let base = variant.matrix();
    let t = severity_percent / 100f32;
    let mut matrix = [[0f32; 3]; 3];
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = (1f32 - t) * IDENTITY[i][j] + t * base[i][j];
        }
    }
    matrix
}

/// Severity for which simulation must copy source pixels verbatim
#[inline]
pub fn is_passthrough(variant: CvdVariant, severity_percent: f32) -> bool {
    variant == CvdVariant::Normal || severity_percent == 0f32
}

/// Clamps severity into [0, 100], NaN becomes 0
#[inline]
pub fn clamp_severity(severity_percent: f32) -> f32 {
    if severity_percent.is_nan() {
        return 0f32;
    }
    clamp(severity_percent, 0f32, 100f32)
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum SeverityLevel {
    None,
    Mild,
    Moderate,
    Strong,
    Complete,
}

impl SeverityLevel {
    pub fn from_percent(severity_percent: f32) -> SeverityLevel {
        let severity = clamp_severity(severity_percent);
        if severity == 0f32 {
            SeverityLevel::None
        } else if severity <= 25f32 {
            SeverityLevel::Mild
        } else if severity <= 50f32 {
            SeverityLevel::Moderate
        } else if severity <= 75f32 {
            SeverityLevel::Strong
        } else {
            SeverityLevel::Complete
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            SeverityLevel::None => "Normal Vision",
            SeverityLevel::Mild => "Mild",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Strong => "Strong",
            SeverityLevel::Complete => "Complete",
        }
    }

    /// One line summary of what this level means for given variant
    pub fn describe(&self, variant: CvdVariant) -> String {
        let name = variant.name();
        match self {
            SeverityLevel::None => "No color vision deficiency".to_string(),
            SeverityLevel::Mild => format!("Slight {name} - barely noticeable"),
            SeverityLevel::Moderate => format!("Moderate {name} - noticeable differences"),
            SeverityLevel::Strong => format!("Strong {name} - significant impact"),
            SeverityLevel::Complete => format!("Complete {name} - full dichromacy"),
        }
    }
}
