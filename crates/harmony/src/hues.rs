//! Companion-hue selection strategies.
//!
//! Each strategy turns a primary hue into a list of candidate hues. The
//! range-snapped strategy filters 30° rotations through eight fixed
//! perceptual bands; the octad strategies use literal offset tables.

use hue_engine_core::color::{hue_distance, normalize_hue};
use hue_engine_core::{convert, PaletteError};

/// A named perceptual band of the hue circle with a preferred center.
///
/// `min > max` denotes a band that wraps through 0°.
#[derive(Debug, Clone, Copy)]
pub struct HueRange {
    pub min: f64,
    pub max: f64,
    pub preferred: f64,
}

/// The eight fixed bands, covering the hue circle with overlaps.
pub const RANGE_HUES: [HueRange; 8] = [
    HueRange { min: 45.0, max: 75.0, preferred: 60.0 },    // orange -> yellow
    HueRange { min: 70.0, max: 120.0, preferred: 105.0 },  // yellow -> lime
    HueRange { min: 110.0, max: 170.0, preferred: 135.0 }, // green
    HueRange { min: 160.0, max: 210.0, preferred: 170.0 }, // cyan / teal
    HueRange { min: 200.0, max: 260.0, preferred: 235.0 }, // blue
    HueRange { min: 250.0, max: 300.0, preferred: 295.0 }, // purple
    HueRange { min: 300.0, max: 10.0, preferred: 350.0 },  // pink -> magenta
    HueRange { min: 10.0, max: 50.0, preferred: 30.0 },    // red -> orange
];

/// The twelve 30° rotations used by the rotation-based strategies.
const ROTATIONS: [f64; 12] = [
    0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
];

/// Offsets for the 30°-phase complementary octad.
const COMPLEMENTARY_OCTAD: [f64; 8] = [0.0, 180.0, 330.0, 30.0, 150.0, 210.0, 90.0, 270.0];

/// Offsets for the 45°-phase split octad.
const SPLIT_OCTAD: [f64; 8] = [0.0, 180.0, 315.0, 45.0, 135.0, 225.0, 90.0, 270.0];

/// How companion hues are derived from the primary hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueStrategy {
    /// 30° rotations snapped to the nearest hue band, one pick per band,
    /// ordered by closeness to the primary hue.
    RangeSnapped,
    /// All twelve 30° rotations, unfiltered, in generation order.
    EvenlyRotated,
    /// Eight fixed offsets pairing each axis with its complement (30° phase).
    ComplementaryOctad,
    /// Eight fixed offsets at a 45° phase.
    SplitOctad,
}

impl HueStrategy {
    /// Maps the raw integer discriminant to a strategy.
    #[must_use]
    pub fn from_index(index: u8) -> Option<HueStrategy> {
        match index {
            0 => Some(HueStrategy::RangeSnapped),
            1 => Some(HueStrategy::EvenlyRotated),
            2 => Some(HueStrategy::ComplementaryOctad),
            3 => Some(HueStrategy::SplitOctad),
            _ => None,
        }
    }

    /// The companion hues for a primary hue, all in `[0, 360)`.
    #[must_use]
    pub fn base_hues(self, primary_hue: f64) -> Vec<f64> {
        match self {
            HueStrategy::RangeSnapped => {
                let candidates = rotations(primary_hue);
                let mut picked = select_closest_hues(&candidates, &RANGE_HUES);
                // Sort key is the plain angular difference, not circular distance.
                picked.sort_by(|a, b| {
                    (a - primary_hue)
                        .abs()
                        .total_cmp(&(b - primary_hue).abs())
                });
                picked
            }
            HueStrategy::EvenlyRotated => rotations(primary_hue),
            HueStrategy::ComplementaryOctad => offsets_from(primary_hue, &COMPLEMENTARY_OCTAD),
            HueStrategy::SplitOctad => offsets_from(primary_hue, &SPLIT_OCTAD),
        }
    }
}

/// Selects companion hues for a primary color string.
///
/// Unknown strategy discriminants yield an empty list, not an error;
/// an unparsable color fails with [`PaletteError::InvalidColor`].
pub fn select_hues(primary_color: &str, strategy: u8) -> Result<Vec<f64>, PaletteError> {
    let primary = convert::parse_color(primary_color)?;
    Ok(match HueStrategy::from_index(strategy) {
        Some(s) => s.base_hues(primary.h),
        None => Vec::new(),
    })
}

fn rotations(primary_hue: f64) -> Vec<f64> {
    ROTATIONS
        .iter()
        .map(|offset| normalize_hue(primary_hue + offset))
        .collect()
}

fn offsets_from(primary_hue: f64, offsets: &[f64]) -> Vec<f64> {
    offsets
        .iter()
        .map(|offset| normalize_hue(primary_hue + offset))
        .collect()
}

fn is_hue_in_range(hue: f64, range: &HueRange) -> bool {
    if range.min <= range.max {
        hue >= range.min && hue <= range.max
    } else {
        hue >= range.min || hue <= range.max
    }
}

/// For each band, the candidate closest to the band's preferred hue;
/// bands with no candidate are dropped. Earlier candidates win ties.
fn select_closest_hues(hues: &[f64], ranges: &[HueRange]) -> Vec<f64> {
    ranges
        .iter()
        .filter_map(|range| {
            hues.iter()
                .copied()
                .filter(|&h| is_hue_in_range(h, range))
                .reduce(|closest, hue| {
                    if hue_distance(hue, range.preferred) < hue_distance(closest, range.preferred)
                    {
                        hue
                    } else {
                        closest
                    }
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_engine_core::convert;

    const PRIMARY: &str = "#3366cc";

    #[test]
    fn range_snapped_covers_every_band_for_blue() {
        // 30° rotations of any hue land in every 30°-wide-or-wider band,
        // so all eight bands contribute a pick.
        let hues = select_hues(PRIMARY, 0).unwrap();
        assert_eq!(hues.len(), 8, "got {hues:?}");
        for range in &RANGE_HUES {
            assert!(
                hues.iter().any(|&h| is_hue_in_range(h, range)),
                "no pick in band [{}, {}]: {hues:?}",
                range.min,
                range.max
            );
        }
    }

    #[test]
    fn range_snapped_orange_band_pick_is_a_rotation() {
        let primary = convert::parse_color(PRIMARY).unwrap();
        let hues = select_hues(PRIMARY, 0).unwrap();
        let orange = &RANGE_HUES[0];
        let pick = hues
            .iter()
            .copied()
            .find(|&h| is_hue_in_range(h, orange))
            .expect("orange band has a rotated candidate for blue");
        // The pick must be one of the 30° rotations of the primary hue.
        let offset = normalize_hue(pick - primary.h);
        assert!(
            (offset / 30.0 - (offset / 30.0).round()).abs() < 1e-9,
            "pick {pick} is not a 30° rotation of {}",
            primary.h
        );
    }

    #[test]
    fn range_snapped_sorts_by_plain_angular_difference() {
        let primary = convert::parse_color(PRIMARY).unwrap();
        let hues = select_hues(PRIMARY, 0).unwrap();
        let diffs: Vec<f64> = hues.iter().map(|h| (h - primary.h).abs()).collect();
        for pair in diffs.windows(2) {
            assert!(pair[0] <= pair[1] + 1e-9, "not sorted: {diffs:?}");
        }
    }

    #[test]
    fn evenly_rotated_returns_all_twelve() {
        let primary = convert::parse_color(PRIMARY).unwrap();
        let hues = select_hues(PRIMARY, 1).unwrap();
        assert_eq!(hues.len(), 12);
        assert!((hues[0] - primary.h).abs() < 1e-9, "first hue is the primary");
        assert!(
            (hue_distance(hues[6], primary.h) - 180.0).abs() < 1e-9,
            "seventh hue is the complement"
        );
    }

    #[test]
    fn complementary_octad_has_eight_with_complement_second() {
        let primary = convert::parse_color(PRIMARY).unwrap();
        let hues = select_hues(PRIMARY, 2).unwrap();
        assert_eq!(hues.len(), 8);
        assert!((hues[0] - primary.h).abs() < 1e-9);
        assert!((hues[1] - normalize_hue(primary.h + 180.0)).abs() < 1e-9);
    }

    #[test]
    fn split_octad_has_eight_with_45_degree_phase() {
        let primary = convert::parse_color(PRIMARY).unwrap();
        let hues = select_hues(PRIMARY, 3).unwrap();
        assert_eq!(hues.len(), 8);
        assert!((hues[3] - normalize_hue(primary.h + 45.0)).abs() < 1e-9);
    }

    #[test]
    fn unknown_strategy_yields_empty_list() {
        let hues = select_hues(PRIMARY, 7).unwrap();
        assert!(hues.is_empty());
    }

    #[test]
    fn invalid_primary_fails() {
        assert!(select_hues("#gg0000", 0).is_err());
    }

    #[test]
    fn wrapped_band_matches_across_zero() {
        let band = HueRange {
            min: 300.0,
            max: 10.0,
            preferred: 350.0,
        };
        assert!(is_hue_in_range(305.0, &band));
        assert!(is_hue_in_range(5.0, &band));
        assert!(!is_hue_in_range(200.0, &band));
    }

    #[test]
    fn closest_pick_prefers_band_center() {
        // Candidates 82 and 112 both sit in [70, 120]; 112 is closer to 105.
        let picks = select_closest_hues(
            &[82.0, 112.0],
            &[HueRange {
                min: 70.0,
                max: 120.0,
                preferred: 105.0,
            }],
        );
        assert_eq!(picks, vec![112.0]);
    }

    #[test]
    fn empty_band_is_dropped() {
        let picks = select_closest_hues(
            &[200.0],
            &[HueRange {
                min: 45.0,
                max: 75.0,
                preferred: 60.0,
            }],
        );
        assert!(picks.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn all_strategies_emit_normalized_hues(
                r in 0u8..=255,
                g in 0u8..=255,
                b in 0u8..=255,
                strategy in 0u8..=3,
            ) {
                let hex = format!("#{r:02x}{g:02x}{b:02x}");
                let hues = select_hues(&hex, strategy).unwrap();
                for h in hues {
                    prop_assert!(
                        (0.0..360.0).contains(&h),
                        "hue {h} out of range for {hex} strategy {strategy}"
                    );
                }
            }

            #[test]
            fn range_snapped_never_exceeds_band_count(hue in 0.0_f64..360.0) {
                let picks = HueStrategy::RangeSnapped.base_hues(hue);
                prop_assert!(picks.len() <= RANGE_HUES.len());
            }
        }
    }
}
