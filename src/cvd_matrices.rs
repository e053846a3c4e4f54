/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use std::fmt::{Display, Formatter};

/// Row-major 3x3 operator over linear RGB
pub type Matrix3 = [[f32; 3]; 3];

/// Identity transform, normal vision
pub const IDENTITY: Matrix3 = [
    [1f32, 0f32, 0f32],
    [0f32, 1f32, 0f32],
    [0f32, 0f32, 1f32],
];

/// Protanopia, Machado et al. 2009, severity 1.0
pub const PROTANOPIA_MACHADO: Matrix3 = [
    [0.152286f32, 1.052583f32, -0.204868f32],
    [0.114503f32, 0.786281f32, 0.099216f32],
    [-0.003882f32, -0.048116f32, 1.051998f32],
];

/// Deuteranopia, Machado et al. 2009, severity 1.0
pub const DEUTERANOPIA_MACHADO: Matrix3 = [
    [0.367322f32, 0.860646f32, -0.227968f32],
    [0.280085f32, 0.672501f32, 0.047413f32],
    [-0.011820f32, 0.042940f32, 0.968881f32],
];

/// Tritanopia, Machado et al. 2009, severity 1.0
pub const TRITANOPIA_MACHADO: Matrix3 = [
    [1.255528f32, -0.076749f32, -0.178779f32],
    [-0.078411f32, 0.930809f32, -0.052398f32],
    [0.004733f32, 0.691367f32, 0.303900f32],
];

/// Rec.601 luma replicated into every channel
pub const ACHROMATOPSIA_LUMA: Matrix3 = [
    [0.299f32, 0.587f32, 0.114f32],
    [0.299f32, 0.587f32, 0.114f32],
    [0.299f32, 0.587f32, 0.114f32],
];

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum CvdVariant {
    /// Trichromatic vision, nothing is simulated
    #[default]
    Normal,
    /// Missing L cones, red-blind
    Protanopia,
    /// Missing M cones, green-blind
    Deuteranopia,
    /// Missing S cones, blue-blind
    Tritanopia,
    /// No color perception at all
    Achromatopsia,
}

impl CvdVariant {
    pub const ALL: [CvdVariant; 5] = [
        CvdVariant::Normal,
        CvdVariant::Protanopia,
        CvdVariant::Deuteranopia,
        CvdVariant::Tritanopia,
        CvdVariant::Achromatopsia,
    ];

    /// Base transform at full severity
    #[inline]
    pub const fn matrix(&self) -> &'static Matrix3 {
        match self {
            CvdVariant::Normal => &IDENTITY,
            CvdVariant::Protanopia => &PROTANOPIA_MACHADO,
            CvdVariant::Deuteranopia => &DEUTERANOPIA_MACHADO,
            CvdVariant::Tritanopia => &TRITANOPIA_MACHADO,
            CvdVariant::Achromatopsia => &ACHROMATOPSIA_LUMA,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            CvdVariant::Normal => "normal",
            CvdVariant::Protanopia => "protanopia",
            CvdVariant::Deuteranopia => "deuteranopia",
            CvdVariant::Tritanopia => "tritanopia",
            CvdVariant::Achromatopsia => "achromatopsia",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            CvdVariant::Normal => "Normal Vision",
            CvdVariant::Protanopia => "Protanopia",
            CvdVariant::Deuteranopia => "Deuteranopia",
            CvdVariant::Tritanopia => "Tritanopia",
            CvdVariant::Achromatopsia => "Achromatopsia",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            CvdVariant::Normal => "No color vision deficiency",
            CvdVariant::Protanopia => "Red-blind (1% of men)",
            CvdVariant::Deuteranopia => "Green-blind (1% of men)",
            CvdVariant::Tritanopia => "Blue-blind (rare)",
            CvdVariant::Achromatopsia => "Complete color blindness (very rare)",
        }
    }

    /// Red-green deficiencies, the ones penalized for red/green heavy imagery
    #[inline]
    pub const fn is_red_green(&self) -> bool {
        matches!(self, CvdVariant::Protanopia | CvdVariant::Deuteranopia)
    }

    /// Case-insensitive lookup by [CvdVariant::name]
    pub fn from_name(name: &str) -> Option<CvdVariant> {
        let name = name.trim();
        CvdVariant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(name))
    }
}

impl Display for CvdVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Matrix lookup by variant name. Unknown names resolve to [IDENTITY],
/// so a mistyped variant degrades to no simulation.
pub fn matrix_for_name(name: &str) -> &'static Matrix3 {
    match CvdVariant::from_name(name) {
        Some(variant) => variant.matrix(),
        None => {
            tracing::debug!(name, "unknown cvd variant, falling back to identity");
            &IDENTITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(CvdVariant::from_name("Protanopia"), Some(CvdVariant::Protanopia));
        assert_eq!(CvdVariant::from_name(" tritanopia "), Some(CvdVariant::Tritanopia));
        assert_eq!(matrix_for_name("DEUTERANOPIA"), &DEUTERANOPIA_MACHADO);
    }

    #[test]
    fn unknown_name_falls_back_to_identity() {
        assert_eq!(CvdVariant::from_name("tetrachromacy"), None);
        assert_eq!(matrix_for_name("tetrachromacy"), &IDENTITY);
        assert_eq!(matrix_for_name(""), &IDENTITY);
    }

    #[test]
    fn names_are_unique_and_round_trip() {
        for variant in CvdVariant::ALL {
            assert_eq!(CvdVariant::from_name(variant.name()), Some(variant));
            assert_eq!(variant.to_string(), variant.name());
        }
    }

    #[test]
    fn achromatopsia_rows_are_equal() {
        let m = CvdVariant::Achromatopsia.matrix();
        assert_eq!(m[0], m[1]);
        assert_eq!(m[1], m[2]);
    }
}
