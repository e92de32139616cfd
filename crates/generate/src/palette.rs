//! Palette generation: per-hue lightness/chroma rescaling against the gamut.
//!
//! The primary color's lightness and chroma are expressed as fractions of
//! the maximum in-gamut values at its own hue; those fractions are then
//! reimposed at every generated hue through a fixed-budget alternating
//! iteration, so each companion color keeps the primary's gamut-relative
//! feel rather than its absolute coordinates.

use hue_engine_core::gamut::{self, FreeAxis, DEFAULT_STEP};
use hue_engine_core::{convert, OkLch, PaletteError};
use hue_engine_harmony::mix::{mix_hue, MixMode};

/// Lightness shift per unit of overshoot.
const OVERSHOOT_LIGHTNESS: f64 = 0.05;
/// Chroma shift per unit of overshoot.
const OVERSHOOT_CHROMA: f64 = 0.02;
/// Refinement passes after the seed pass. A fixed budget, not a
/// convergence test; changing it changes output values.
const REFINE_PASSES: usize = 100;

/// Generates one OKLCH triple per base hue, in the same order.
///
/// `mix_level` in [0, 100] pulls every hue toward the primary's;
/// `overshoot` perturbs the primary signature toward lighter/less
/// saturated (positive) or darker/more saturated (negative) before the
/// gamut fractions are taken. Fails only on an unparsable primary color.
pub fn generate(
    primary_color: &str,
    mix_level: f64,
    base_hues: &[f64],
    overshoot: f64,
    mode: MixMode,
) -> Result<Vec<OkLch>, PaletteError> {
    let primary = convert::parse_color(primary_color)?;
    let p_l = primary.l + OVERSHOOT_LIGHTNESS * overshoot;
    let p_c = primary.c - OVERSHOOT_CHROMA * overshoot;
    let signature = OkLch::new(p_l, p_c, primary.h);

    let l_frac = gamut_fraction(
        p_l,
        gamut::find_max(FreeAxis::Lightness { chroma: p_c }, signature.h, DEFAULT_STEP),
    );
    let c_frac = gamut_fraction(
        p_c,
        gamut::find_max(FreeAxis::Chroma { lightness: p_l }, signature.h, DEFAULT_STEP),
    );

    let factor = mix_level / 100.0;
    let palette = base_hues
        .iter()
        .map(|&base_hue| {
            let h = if mix_level > 0.0 {
                mix_hue(signature, base_hue, mode, factor)
            } else {
                base_hue
            };

            // Seed pass against the signature chroma, then the fixed
            // refinement budget alternating lightness and chroma.
            let mut l = rescale_or(
                l_frac * gamut::find_max(FreeAxis::Lightness { chroma: p_c }, h, DEFAULT_STEP),
                p_l,
            );
            let mut c = rescale_or(
                c_frac * gamut::find_max(FreeAxis::Chroma { lightness: l }, h, DEFAULT_STEP),
                p_c,
            );
            for _ in 0..REFINE_PASSES {
                l = rescale_or(
                    l_frac * gamut::find_max(FreeAxis::Lightness { chroma: c }, h, DEFAULT_STEP),
                    p_l,
                );
                c = rescale_or(
                    c_frac * gamut::find_max(FreeAxis::Chroma { lightness: l }, h, DEFAULT_STEP),
                    p_c,
                );
            }
            OkLch::new(l, c, h)
        })
        .collect();

    Ok(palette)
}

/// The primary value as a fraction of its in-gamut maximum, capped at 1.
///
/// A NaN ratio (0/0 at degenerate hues) is passed through so the rescale
/// fallback engages downstream.
fn gamut_fraction(value: f64, boundary: f64) -> f64 {
    let ratio = value / boundary;
    if ratio.is_nan() {
        ratio
    } else {
        ratio.min(1.0)
    }
}

/// A boundary product of exactly 0 (or NaN) counts as "no boundary
/// found" and substitutes the unscaled primary value.
fn rescale_or(value: f64, fallback: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        fallback
    } else {
        value
    }
}
