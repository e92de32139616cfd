//! Error types for the hue-engine core.

use thiserror::Error;

/// Errors produced by palette operations.
///
/// Gamut boundary searches never error: a scan that finds no displayable
/// value degrades to its documented boundary default instead, so every
/// hue/lightness combination yields some result.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color string could not be parsed by the color collaborator.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The confusion-line projection in a color vision simulation had no
    /// usable intersection (parallel lines or a zero-`y` chromaticity).
    #[error("degenerate confusion-line projection for {deficiency}: {reason}")]
    DegenerateProjection { deficiency: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_includes_input() {
        let err = PaletteError::InvalidColor("\"#zzz\" is not a color".into());
        let msg = format!("{err}");
        assert!(msg.contains("#zzz"), "missing input in: {msg}");
    }

    #[test]
    fn degenerate_projection_includes_deficiency_and_reason() {
        let err = PaletteError::DegenerateProjection {
            deficiency: "protanope".into(),
            reason: "parallel lines".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("protanope"), "missing deficiency in: {msg}");
        assert!(msg.contains("parallel"), "missing reason in: {msg}");
    }

    #[test]
    fn palette_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaletteError>();
    }

    #[test]
    fn palette_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<PaletteError>();
    }
}
