#![deny(unsafe_code)]
//! Hue harmony for the hue-engine: choosing companion hues for a primary
//! color and blending candidates back toward it.

pub mod hues;
pub mod mix;

pub use hues::{select_hues, HueRange, HueStrategy, RANGE_HUES};
pub use mix::{mix_hue, MixMode};
