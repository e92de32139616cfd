//! Blending a candidate hue toward the primary hue.

use hue_engine_core::color::normalize_hue;
use hue_engine_core::{convert, OkLch};

/// How a candidate hue is pulled toward the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixMode {
    /// Interpolate full OKLCH points through the collaborator's perceptual
    /// mix and keep the resulting hue. Follows the shortest perceptual
    /// path, which can drift non-monotonically near the 0°/360° wrap.
    Perceptual,
    /// Pure circular linear interpolation on the hue angle alone.
    Angular,
}

/// Blends `candidate_hue` toward the primary's hue by `factor` in [0, 1].
///
/// The primary's lightness and chroma anchor the perceptual mode; a factor
/// of 0 leaves the candidate unchanged in both modes. The result is in
/// `[0, 360)`.
#[must_use]
pub fn mix_hue(primary: OkLch, candidate_hue: f64, mode: MixMode, factor: f64) -> f64 {
    match mode {
        MixMode::Perceptual => {
            let candidate = OkLch::new(primary.l, primary.c, candidate_hue);
            let anchor = OkLch::new(primary.l, primary.c, primary.h);
            convert::perceptual_mix(candidate, anchor, factor).h
        }
        MixMode::Angular => normalize_hue(
            (candidate_hue - primary.h).rem_euclid(360.0) * (1.0 - factor) + primary.h,
        ),
    }
}
