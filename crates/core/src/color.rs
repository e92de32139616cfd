//! The OKLCH color triple, the canonical in-memory representation.
//!
//! Every generator in the workspace speaks OKLCH; conversions to and from
//! hex, CSS, Lab, and XYZ happen only at the boundary in [`crate::convert`].
//! Hue is kept normalized into `[0, 360)` after any arithmetic.

use serde::{Deserialize, Serialize};

/// A color in OKLCH: perceptual lightness `l` in [0, 1], chroma `c >= 0`
/// (unbounded above, practically small), hue `h` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl OkLch {
    /// Creates a triple with the hue normalized into `[0, 360)`.
    #[must_use]
    pub fn new(l: f64, c: f64, h: f64) -> OkLch {
        OkLch {
            l,
            c,
            h: normalize_hue(h),
        }
    }
}

/// Normalizes a hue angle to `[0, 360)` with a non-negative-result modulo.
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

/// Shortest circular distance between two hue angles, in degrees.
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn new_keeps_in_range_hue() {
        let c = OkLch::new(0.5, 0.1, 250.0);
        assert!(approx_eq(c.h, 250.0), "hue changed: {}", c.h);
    }

    #[test]
    fn new_wraps_hue_above_360() {
        let c = OkLch::new(0.5, 0.1, 380.0);
        assert!(approx_eq(c.h, 20.0), "expected 20, got {}", c.h);
    }

    #[test]
    fn new_wraps_negative_hue() {
        let c = OkLch::new(0.5, 0.1, -30.0);
        assert!(approx_eq(c.h, 330.0), "expected 330, got {}", c.h);
    }

    #[test]
    fn hue_distance_is_symmetric() {
        assert!(approx_eq(hue_distance(10.0, 350.0), hue_distance(350.0, 10.0)));
    }

    #[test]
    fn hue_distance_wraps_through_zero() {
        // 350 -> 10 is 20 degrees via 0, not 340 the long way.
        assert!(approx_eq(hue_distance(350.0, 10.0), 20.0));
    }

    #[test]
    fn hue_distance_opposite_hues_is_180() {
        assert!(approx_eq(hue_distance(30.0, 210.0), 180.0));
    }

    #[test]
    fn serde_round_trip() {
        let c = OkLch::new(0.62, 0.11, 145.5);
        let json = serde_json::to_string(&c).unwrap();
        let back: OkLch = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_hue_always_in_range(h in -10_000.0_f64..10_000.0) {
                let n = normalize_hue(h);
                prop_assert!(
                    n >= 0.0 && n < 360.0,
                    "normalize_hue({h}) = {n}, not in [0, 360)"
                );
            }

            #[test]
            fn hue_distance_at_most_180(
                a in 0.0_f64..360.0,
                b in 0.0_f64..360.0,
            ) {
                let d = hue_distance(a, b);
                prop_assert!(
                    (0.0..=180.0).contains(&d),
                    "hue_distance({a}, {b}) = {d}"
                );
            }
        }
    }
}
