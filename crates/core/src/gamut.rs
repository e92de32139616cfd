//! Gamut boundary search along a single free OKLCH axis.
//!
//! The search scans one axis (lightness or chroma) over [0, 1] at a fixed
//! hue and returns the first value whose OKLCH point is displayable.
//! Exactly one axis is ever free, so each probe is the scan value on the
//! free axis against the caller's fixed chroma-or-lightness and hue.

use crate::color::OkLch;
use crate::convert;

/// Default scan step for boundary searches.
pub const DEFAULT_STEP: f64 = 0.01;

/// Selects which OKLCH axis a boundary search scans, carrying the fixed
/// value of the other axis. Hue is always fixed separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FreeAxis {
    /// Scan lightness; chroma stays at the given value.
    Lightness { chroma: f64 },
    /// Scan chroma; lightness stays at the given value.
    Chroma { lightness: f64 },
}

impl FreeAxis {
    /// The OKLCH point probed when the scan variable takes value `i`.
    fn probe(self, i: f64, hue: f64) -> OkLch {
        match self {
            FreeAxis::Lightness { chroma } => OkLch::new(i, chroma, hue),
            FreeAxis::Chroma { lightness } => OkLch::new(lightness, i, hue),
        }
    }
}

/// Largest in-gamut value of the free axis, scanning 1.0 down to 0.0.
///
/// Returns 0.0 when no scanned point is displayable (e.g. a chroma no
/// lightness can carry at this hue). Never errors.
#[must_use]
pub fn find_max(axis: FreeAxis, hue: f64, step: f64) -> f64 {
    let mut i = 1.0;
    while i >= 0.0 {
        if convert::is_in_gamut(axis.probe(i, hue)) {
            return i;
        }
        i -= step;
    }
    0.0
}

/// Smallest in-gamut value of the free axis, scanning 0.0 up to 1.0.
///
/// Returns 1.0 when no scanned point is displayable. Never errors.
#[must_use]
pub fn find_min(axis: FreeAxis, hue: f64, step: f64) -> f64 {
    let mut i = 0.0;
    while i <= 1.0 {
        if convert::is_in_gamut(axis.probe(i, hue)) {
            return i;
        }
        i += step;
    }
    1.0
}
