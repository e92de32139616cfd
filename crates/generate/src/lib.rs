#![deny(unsafe_code)]
//! Palette generation for the hue-engine.
//!
//! Turns a primary color and a hue list into a palette of OKLCH triples,
//! each rescaled to match the primary's gamut-relative lightness/chroma
//! signature, and produces tinted neutral ramps from the same machinery.

pub mod gray;
pub mod palette;

pub use gray::generate_gray;
pub use palette::generate;
