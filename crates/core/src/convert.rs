//! The external color-conversion collaborator boundary.
//!
//! All color-space math is delegated to ecosystem crates and treated as a
//! correct black box: `palette` for the conversion graph, sRGB gamut
//! membership, perceptual mixing, and WCAG contrast; `csscolorparser` for
//! input parsing; `deltae` for CIEDE2000. Nothing in this module (or
//! anywhere else in the workspace) reimplements conversion matrices.

use crate::color::OkLch;
use crate::error::PaletteError;
use palette::color_difference::Wcag21RelativeContrast;
use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{FromColor, IsWithinBounds, Lab, Mix, Oklch, Srgb, Xyz};

/// CIE XYZ with the D65 white point, as produced by the collaborator.
pub type XyzD65 = Xyz<D65, f64>;

/// CIE Lab with the D65 white point.
pub type LabD65 = Lab<D65, f64>;

fn to_palette(c: OkLch) -> Oklch<f64> {
    Oklch::new(c.l, c.c, c.h)
}

fn from_palette(c: Oklch<f64>) -> OkLch {
    OkLch::new(c.l, c.chroma, c.hue.into_positive_degrees())
}

/// Parses a color string into OKLCH.
///
/// Accepts at minimum hexadecimal RGB strings ("#3366cc", "#fff"); the
/// other accepted formats (named colors, `rgb()`, `hsl()`, ...) are
/// whatever the parsing collaborator recognizes.
pub fn parse_color(input: &str) -> Result<OkLch, PaletteError> {
    let parsed = csscolorparser::parse(input)
        .map_err(|e| PaletteError::InvalidColor(format!("{input:?}: {e}")))?;
    let [r, g, b, _alpha] = parsed.to_array();
    let srgb = Srgb::new(f64::from(r), f64::from(g), f64::from(b));
    Ok(from_palette(Oklch::from_color(srgb)))
}

/// Whether the point is displayable in sRGB without clipping.
#[must_use]
pub fn is_in_gamut(c: OkLch) -> bool {
    Srgb::<f64>::from_color_unclamped(to_palette(c)).is_within_bounds()
}

/// Renders the color as a `#rrggbb` hex string, gamut-clipped.
#[must_use]
pub fn oklch_to_hex(c: OkLch) -> String {
    let srgb = Srgb::<f64>::from_color(to_palette(c));
    let bytes: Srgb<u8> = srgb.into_format();
    format!("#{:02x}{:02x}{:02x}", bytes.red, bytes.green, bytes.blue)
}

/// Renders the color as a CSS `oklch()` string.
#[must_use]
pub fn oklch_to_css(c: OkLch) -> String {
    format!("oklch({:.2}% {:.4} {:.2})", c.l * 100.0, c.c, c.h)
}

/// Converts OKLCH to CIE XYZ (D65), unclamped.
#[must_use]
pub fn oklch_to_xyz(c: OkLch) -> XyzD65 {
    XyzD65::from_color_unclamped(to_palette(c))
}

/// Converts CIE XYZ (D65) back to OKLCH.
#[must_use]
pub fn xyz_to_oklch(xyz: XyzD65) -> OkLch {
    from_palette(Oklch::from_color_unclamped(xyz))
}

/// Converts OKLCH to CIE Lab (D65), unclamped.
#[must_use]
pub fn oklch_to_lab(c: OkLch) -> LabD65 {
    LabD65::from_color_unclamped(to_palette(c))
}

/// Converts CIE Lab to CIE XYZ.
#[must_use]
pub fn lab_to_xyz(lab: LabD65) -> XyzD65 {
    XyzD65::from_color_unclamped(lab)
}

/// Converts CIE XYZ to CIE Lab.
#[must_use]
pub fn xyz_to_lab(xyz: XyzD65) -> LabD65 {
    LabD65::from_color_unclamped(xyz)
}

/// Interpolates `a` toward `b` by `factor` in OKLCH.
///
/// Hue follows the shortest perceptual path, which can drift
/// non-monotonically near the 0°/360° wrap.
#[must_use]
pub fn perceptual_mix(a: OkLch, b: OkLch, factor: f64) -> OkLch {
    from_palette(to_palette(a).mix(to_palette(b), factor))
}

/// WCAG 2.1 contrast ratio between two colors, gamut-clipped first.
#[must_use]
pub fn contrast_ratio(a: OkLch, b: OkLch) -> f64 {
    let sa = Srgb::<f64>::from_color(to_palette(a));
    let sb = Srgb::<f64>::from_color(to_palette(b));
    sa.relative_contrast(sb)
}

/// Euclidean distance over the raw L/C/H channel values.
///
/// Hue is taken in degrees and not circularly, so the hue axis
/// dominates for chromatic colors. Deliberately kept channelwise.
#[must_use]
pub fn perceptual_distance(a: OkLch, b: OkLch) -> f64 {
    let dl = a.l - b.l;
    let dc = a.c - b.c;
    let dh = a.h - b.h;
    (dl * dl + dc * dc + dh * dh).sqrt()
}

/// CIEDE2000 color difference.
#[must_use]
pub fn delta_e(a: OkLch, b: OkLch) -> f64 {
    let la = oklch_to_lab(a);
    let lb = oklch_to_lab(b);
    let va = deltae::LabValue {
        l: la.l as f32,
        a: la.a as f32,
        b: la.b as f32,
    };
    let vb = deltae::LabValue {
        l: lb.l as f32,
        a: lb.a as f32,
        b: lb.b as f32,
    };
    f64::from(*deltae::DeltaE::new(va, vb, deltae::DEMethod::DE2000).value())
}
