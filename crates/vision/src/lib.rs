#![deny(unsafe_code)]
//! Dichromatic color vision simulation.
//!
//! A dichromat cannot distinguish colors along the confusion lines of the
//! missing cone type. The simulation projects a color's chromaticity onto
//! the deficiency's confusion line in CIE xyY space, rebuilds XYZ holding
//! luminance fixed, and blends toward the projection by severity.

use hue_engine_core::convert::{self, XyzD65};
use hue_engine_core::{OkLch, PaletteError};

/// A dichromatic color vision deficiency. "No deficiency" is expressed
/// as `Option<Deficiency>::None` at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deficiency {
    /// Missing long-wavelength (red) cones.
    Protanope,
    /// Missing medium-wavelength (green) cones.
    Deuteranope,
    /// Missing short-wavelength (blue) cones.
    Tritanope,
}

/// Confusion geometry for one deficiency: the viewer's confusion point
/// `(x, y)` and the line `y = m·x + yint` of confused chromaticities.
struct Confusion {
    x: f64,
    y: f64,
    m: f64,
    yint: f64,
}

impl Deficiency {
    fn confusion(self) -> Confusion {
        match self {
            Deficiency::Protanope => Confusion {
                x: 0.7465,
                y: 0.2535,
                m: 1.273463,
                yint: -0.073894,
            },
            Deficiency::Deuteranope => Confusion {
                x: 1.4,
                y: -0.4,
                m: 0.968437,
                yint: 0.003331,
            },
            Deficiency::Tritanope => Confusion {
                x: 0.1748,
                y: 0.0,
                m: 0.062921,
                yint: 0.292119,
            },
        }
    }

    /// The lowercase name used in error messages and CLI output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Deficiency::Protanope => "protanope",
            Deficiency::Deuteranope => "deuteranope",
            Deficiency::Tritanope => "tritanope",
        }
    }
}

/// Slopes and chromaticities closer to degenerate than this are rejected.
const PROJECTION_EPSILON: f64 = 1e-12;

/// Computes the color a dichromatic viewer perceives.
///
/// `severity` in [0, 1] blends between the original and the fully
/// projected color; `None` deficiency or zero severity return the input
/// unchanged. A degenerate projection (the viewer line parallel to the
/// confusion line, or a zero-`y` deviate chromaticity) fails with
/// [`PaletteError::DegenerateProjection`] rather than propagating NaN.
pub fn simulate(
    color: OkLch,
    deficiency: Option<Deficiency>,
    severity: f64,
) -> Result<OkLch, PaletteError> {
    let Some(deficiency) = deficiency else {
        return Ok(color);
    };
    if severity <= 0.0 {
        return Ok(color);
    }
    let severity = severity.min(1.0);

    let xyz = convert::oklch_to_xyz(color);
    let sum = xyz.x + xyz.y + xyz.z;
    if sum == 0.0 {
        // Pure black has no chromaticity; every viewer sees it the same.
        return Ok(color);
    }
    let cx = xyz.x / sum;
    let cy = xyz.y / sum;

    let conf = deficiency.confusion();
    let slope = (cy - conf.y) / (cx - conf.x);
    let denom = slope - conf.m;
    if !denom.is_finite() || denom.abs() < PROJECTION_EPSILON {
        return Err(degenerate(deficiency, "viewer line parallel to confusion line"));
    }

    let yint = cy - cx * slope;
    let deviate_x = (conf.yint - yint) / denom;
    let deviate_y = slope * deviate_x + yint;
    if !deviate_y.is_finite() || deviate_y.abs() < PROJECTION_EPSILON {
        return Err(degenerate(deficiency, "projected chromaticity has zero y"));
    }

    let projected_x = deviate_x * xyz.y / deviate_y;
    let projected_z = (1.0 - deviate_x - deviate_y) * xyz.y / deviate_y;

    let out_x = xyz.x + severity * (projected_x - xyz.x);
    let out_z = xyz.z + severity * (projected_z - xyz.z);
    Ok(convert::xyz_to_oklch(XyzD65::new(out_x, xyz.y, out_z)))
}

fn degenerate(deficiency: Deficiency, reason: &str) -> PaletteError {
    PaletteError::DegenerateProjection {
        deficiency: deficiency.name().to_string(),
        reason: reason.to_string(),
    }
}
