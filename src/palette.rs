/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::image_to_cvd::simulate_color;
use crate::{CvdResult, CvdVariant, EuclideanDistance, Rgb};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    /// `#RRGGBB`
    pub hex: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub swatches: &'static [Swatch],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSwatch {
    pub swatch: Swatch,
    pub original: Rgb<u8>,
    pub simulated: Rgb<u8>,
    /// Euclidean distance in 8-bit RGB
    pub distance: f32,
}

impl SimulatedSwatch {
    #[inline]
    pub fn is_changed(&self) -> bool {
        self.original != self.simulated
    }
}

impl Palette {
    /// How every swatch looks with given deficiency
    pub fn simulate(&self, variant: CvdVariant, severity_percent: f32) -> CvdResult<Vec<SimulatedSwatch>> {
        self.swatches
            .iter()
            .map(|swatch| {
                let original = Rgb::<u8>::from_hex(swatch.hex)?;
                let simulated = simulate_color(original, variant, severity_percent);
                Ok(SimulatedSwatch {
                    swatch: *swatch,
                    original,
                    simulated,
                    distance: original.euclidean_distance(simulated),
                })
            })
            .collect()
    }
}

macro_rules! swatch {
    ($name:expr, $hex:expr, $usage:expr) => {
        Swatch {
            name: $name,
            hex: $hex,
            usage: $usage,
        }
    };
}

pub const MATERIAL_DESIGN: Palette = Palette {
    category: "material",
    name: "Material Design",
    description: "Google Material Design color system",
    swatches: &[
        swatch!("Primary", "#6200EE", "Main brand color"),
        swatch!("Primary Variant", "#3700B3", "Darker primary"),
        swatch!("Secondary", "#03DAC6", "Accent color"),
        swatch!("Error", "#B00020", "Error states"),
        swatch!("Warning", "#FF6F00", "Warning states"),
        swatch!("Success", "#00C853", "Success states"),
    ],
};

pub const BOOTSTRAP: Palette = Palette {
    category: "bootstrap",
    name: "Bootstrap 5",
    description: "Bootstrap framework default colors",
    swatches: &[
        swatch!("Primary", "#0D6EFD", "Primary actions"),
        swatch!("Secondary", "#6C757D", "Secondary content"),
        swatch!("Success", "#198754", "Success feedback"),
        swatch!("Danger", "#DC3545", "Destructive actions"),
        swatch!("Warning", "#FFC107", "Warning messages"),
        swatch!("Info", "#0DCAF0", "Informational"),
    ],
};

pub const TAILWIND: Palette = Palette {
    category: "tailwind",
    name: "Tailwind CSS",
    description: "Tailwind CSS default color palette",
    swatches: &[
        swatch!("Blue 600", "#2563EB", "Primary blue"),
        swatch!("Green 600", "#16A34A", "Success green"),
        swatch!("Red 600", "#DC2626", "Error red"),
        swatch!("Yellow 500", "#EAB308", "Warning yellow"),
        swatch!("Purple 600", "#9333EA", "Purple accent"),
        swatch!("Gray 600", "#4B5563", "Neutral gray"),
    ],
};

pub const HIGH_CONTRAST: Palette = Palette {
    category: "accessibility",
    name: "High Contrast",
    description: "WCAG AAA compliant color combinations",
    swatches: &[
        swatch!("Dark Blue", "#003366", "Primary (on white)"),
        swatch!("Dark Green", "#006600", "Success (on white)"),
        swatch!("Dark Red", "#CC0000", "Error (on white)"),
        swatch!("Dark Orange", "#CC6600", "Warning (on white)"),
        swatch!("Purple", "#663399", "Info (on white)"),
        swatch!("Black", "#000000", "Text (on white)"),
    ],
};

pub static PRESET_PALETTES: [Palette; 4] = [MATERIAL_DESIGN, BOOTSTRAP, TAILWIND, HIGH_CONTRAST];

/// Lookup by category key or display name, case-insensitive
pub fn find_palette(name: &str) -> Option<&'static Palette> {
    let name = name.trim();
    PRESET_PALETTES
        .iter()
        .find(|p| p.category.eq_ignore_ascii_case(name) || p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_parse() {
        for palette in PRESET_PALETTES.iter() {
            assert_eq!(palette.swatches.len(), 6);
            let simulated = palette.simulate(CvdVariant::Protanopia, 100f32).unwrap();
            assert_eq!(simulated.len(), 6);
        }
    }

    #[test]
    fn normal_vision_changes_nothing() {
        let simulated = TAILWIND.simulate(CvdVariant::Normal, 100f32).unwrap();
        assert!(simulated.iter().all(|s| !s.is_changed() && s.distance == 0f32));
    }

    #[test]
    fn red_shifts_under_protanopia() {
        let simulated = TAILWIND.simulate(CvdVariant::Protanopia, 100f32).unwrap();
        let red = simulated.iter().find(|s| s.swatch.name == "Red 600").unwrap();
        assert!(red.is_changed());
        assert!(red.distance > 50f32);
        // black stays black for any deficiency
        let black = HIGH_CONTRAST.simulate(CvdVariant::Tritanopia, 100f32).unwrap();
        assert!(!black[5].is_changed());
    }

    #[test]
    fn lookup() {
        assert_eq!(find_palette("bootstrap").map(|p| p.name), Some("Bootstrap 5"));
        assert_eq!(find_palette("high contrast").map(|p| p.category), Some("accessibility"));
        assert!(find_palette("solarized").is_none());
    }
}
