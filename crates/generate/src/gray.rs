//! Tinted neutral ramps via Gaussian-weighted lightness sampling.
//!
//! The ramp fixes its hue to the primary's (or its complement), picks
//! eight lightness stops from an inverted-Gaussian cumulative curve
//! biased toward the high end, and derives a small chroma for each stop
//! from the gamut boundaries at that lightness.

use hue_engine_core::color::normalize_hue;
use hue_engine_core::gamut::{self, FreeAxis, DEFAULT_STEP};
use hue_engine_core::{convert, OkLch, PaletteError};

/// Curve segments; the curve yields one more candidate than this and the
/// last (1.0-adjacent) candidate is always discarded.
const CURVE_POINTS: usize = 8;
/// Mean of the inverted-Gaussian weighting, near the top of the range.
const CURVE_MEAN: f64 = 0.99;
/// Spread of the inverted-Gaussian weighting.
const CURVE_SIGMA: f64 = 0.05;
/// Position between the chroma floor and ceiling for each stop's tint.
const CHROMA_BLEND: f64 = 0.33;

/// Generates the eight-stop neutral ramp for a primary color.
///
/// With `complementary` the ramp is tinted by the primary hue's opposite
/// instead of the primary hue itself. Fails only on an unparsable color.
pub fn generate_gray(primary_color: &str, complementary: bool) -> Result<Vec<OkLch>, PaletteError> {
    let primary = convert::parse_color(primary_color)?;
    let hue = normalize_hue(primary.h + if complementary { 180.0 } else { 0.0 });

    let mut samples = gaussian_curve(CURVE_POINTS, CURVE_MEAN, CURVE_SIGMA);
    samples.pop();

    let ramp = samples
        .into_iter()
        .map(|base_l| {
            let c = lerp(
                gamut::find_min(FreeAxis::Chroma { lightness: base_l }, hue, DEFAULT_STEP),
                gamut::find_max(FreeAxis::Chroma { lightness: base_l }, hue, DEFAULT_STEP),
                CHROMA_BLEND,
            );
            let floor = gamut::find_min(FreeAxis::Lightness { chroma: c }, hue, DEFAULT_STEP);
            let ceiling = gamut::find_max(FreeAxis::Lightness { chroma: c }, hue, DEFAULT_STEP);
            let l = base_l.max(floor).min(ceiling);
            OkLch::new(l, c, hue)
        })
        .collect();

    Ok(ramp)
}

/// Monotone lightness curve: inverted-Gaussian weights over `points + 1`
/// evenly spaced values, normalized to a distribution, cumulative-summed,
/// then min-max rescaled back onto [0, 1].
fn gaussian_curve(points: usize, mean: f64, sigma: f64) -> Vec<f64> {
    let weights: Vec<f64> = (0..=points)
        .map(|i| i as f64 / points as f64)
        .map(|x| 1.0 - (-(x - mean).powi(2) / (2.0 * sigma.powi(2))).exp())
        .collect();
    let total: f64 = weights.iter().sum();

    let mut cumulative = Vec::with_capacity(weights.len());
    let mut acc = 0.0;
    for weight in &weights {
        acc += weight / total;
        cumulative.push(acc);
    }

    let min = cumulative.first().copied().unwrap_or(0.0);
    let max = cumulative.last().copied().unwrap_or(1.0);
    cumulative
        .into_iter()
        .map(|v| (v - min) / (max - min))
        .collect()
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
