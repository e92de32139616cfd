#![deny(unsafe_code)]
//! Core types for the hue-engine palette system.
//!
//! Provides the canonical `OkLch` triple, the `PaletteError` taxonomy, the
//! external color-conversion collaborator boundary (`convert`), and the
//! gamut boundary solver (`gamut`) that every generator builds on.

pub mod color;
pub mod convert;
pub mod error;
pub mod gamut;

pub use color::OkLch;
pub use error::PaletteError;
pub use gamut::{find_max, find_min, FreeAxis, DEFAULT_STEP};
