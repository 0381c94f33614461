//! The color value type and its components.
//!
//! - [`Color`]: a single color with alpha, in either color space
//! - [`Components`]: the tagged [`Hsl`] / [`Husl`] triple a color holds
//! - [`ColorComponents`]: the flat `{h, s, l, a, perceptual}` view, also used for serialization
//! - [`ColorSpace`]: standard or perceptual

mod components;
mod value;

pub use components::{ColorComponents, ColorSpace, Components, Hsl, Husl};
pub use value::Color;

/// Alpha used when none is given.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Decimal places kept for alpha in `rgba()` output.
pub const ALPHA_DECIMALS: u32 = 2;
