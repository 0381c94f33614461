//! Color-space conversions used by the `carto-color` value type.
//!
//! Two conversion families are provided, both passing through RGB:
//!
//! - [`standard`]: HSL ↔ RGB ↔ hex, with saturation and lightness as `[0, 1]` fractions
//! - [`perceptual`]: HUSL ↔ RGB ↔ hex, with saturation and lightness on HUSL's native `[0, 100]` scale
//!
//! [`parse_rgb`] reads rendered color text (`#rrggbb`, `rgb()`, `rgba()`)
//! back into an [`Rgb`] triplet.
//!
//! # Example
//!
//! ```rust
//! use carto_color_space::{parse_rgb, perceptual, standard};
//!
//! let rgb = standard::hsl_to_rgb(0.0, 1.0, 0.5);
//! assert_eq!(rgb.to_hex(), "#ff0000");
//!
//! let [r, g, b] = rgb.normalized();
//! let (h, s, l) = perceptual::rgb_to_husl(r, g, b);
//! assert_eq!(perceptual::husl_to_hex(h, s, l), "#ff0000");
//!
//! assert_eq!(parse_rgb("#ff0000").unwrap().rounded(), [255, 0, 0]);
//! ```

mod parse;
pub mod perceptual;
mod rgb;
pub mod standard;

pub use parse::{parse_rgb, ParseColorError};
pub use rgb::Rgb;
