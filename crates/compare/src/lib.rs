#![deny(unsafe_code)]
//! Pairwise presentation matrices for a finished palette.
//!
//! Pure glue over the collaborator's metric primitives: WCAG contrast,
//! channel-space distance, and CIEDE2000, each rounded to integers for
//! display, plus a readable text color pick per palette entry.

use hue_engine_core::{convert, OkLch};
use serde::Serialize;

/// Candidate text colors scored for readability: black, and a lightness
/// far above the sRGB ceiling that clips to white at the boundary.
const TEXT_CANDIDATES: [OkLch; 2] = [
    OkLch {
        l: 0.0,
        c: 0.0,
        h: 0.0,
    },
    OkLch {
        l: 150.0,
        c: 0.0,
        h: 0.0,
    },
];

/// Pairwise metrics for a palette, one row/column per entry, plus the
/// best-contrast text color for each entry.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteComparison {
    /// WCAG contrast ratios, rounded.
    pub contrast: Vec<Vec<u32>>,
    /// Channel-space OKLCH distances, rounded.
    pub difference: Vec<Vec<u32>>,
    /// CIEDE2000 differences, rounded.
    pub delta_e: Vec<Vec<u32>>,
    /// Per-entry readable text pick.
    pub text: Vec<OkLch>,
}

/// Builds the full comparison for a palette. The matrices are indexed
/// `[row][column]` in palette order.
#[must_use]
pub fn compare(palette: &[OkLch]) -> PaletteComparison {
    PaletteComparison {
        contrast: matrix(palette, convert::contrast_ratio),
        difference: matrix(palette, convert::perceptual_distance),
        delta_e: matrix(palette, convert::delta_e),
        text: palette.iter().map(|&c| readable_text(c)).collect(),
    }
}

/// The candidate text color with the higher WCAG contrast against
/// `background`; ties go to the light candidate.
#[must_use]
pub fn readable_text(background: OkLch) -> OkLch {
    let [dark, light] = TEXT_CANDIDATES;
    if convert::contrast_ratio(dark, background) > convert::contrast_ratio(light, background) {
        dark
    } else {
        light
    }
}

fn matrix(palette: &[OkLch], metric: impl Fn(OkLch, OkLch) -> f64) -> Vec<Vec<u32>> {
    palette
        .iter()
        .map(|&a| {
            palette
                .iter()
                .map(|&b| metric(a, b).round().abs() as u32)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_engine_core::convert::parse_color;

    fn sample_palette() -> Vec<OkLch> {
        ["#3366cc", "#cc6633", "#33cc66"]
            .iter()
            .map(|hex| parse_color(hex).unwrap())
            .collect()
    }

    #[test]
    fn matrices_are_square_in_palette_order() {
        let palette = sample_palette();
        let cmp = compare(&palette);
        for m in [&cmp.contrast, &cmp.difference, &cmp.delta_e] {
            assert_eq!(m.len(), palette.len());
            for row in m {
                assert_eq!(row.len(), palette.len());
            }
        }
        assert_eq!(cmp.text.len(), palette.len());
    }

    #[test]
    fn diagonal_is_self_comparison() {
        let cmp = compare(&sample_palette());
        for i in 0..3 {
            assert_eq!(cmp.contrast[i][i], 1, "self contrast rounds to 1");
            assert_eq!(cmp.difference[i][i], 0);
            assert_eq!(cmp.delta_e[i][i], 0);
        }
    }

    #[test]
    fn matrices_are_symmetric() {
        let cmp = compare(&sample_palette());
        for m in [&cmp.contrast, &cmp.difference, &cmp.delta_e] {
            for i in 0..3 {
                for j in 0..3 {
                    assert_eq!(m[i][j], m[j][i], "asymmetry at ({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn dark_background_gets_light_text() {
        let navy = parse_color("#001133").unwrap();
        let pick = readable_text(navy);
        assert!(pick.l > 1.0, "expected the light candidate, got {pick:?}");
    }

    #[test]
    fn light_background_gets_dark_text() {
        let cream = parse_color("#ffffee").unwrap();
        let pick = readable_text(cream);
        assert_eq!(pick.l, 0.0, "expected black, got {pick:?}");
    }

    #[test]
    fn empty_palette_yields_empty_comparison() {
        let cmp = compare(&[]);
        assert!(cmp.contrast.is_empty());
        assert!(cmp.text.is_empty());
    }

    #[test]
    fn comparison_serializes_to_json() {
        let cmp = compare(&sample_palette());
        let json = serde_json::to_string(&cmp).unwrap();
        assert!(json.contains("\"contrast\""));
        assert!(json.contains("\"delta_e\""));
    }
}
