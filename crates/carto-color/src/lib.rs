//! # carto-color - Color values for stylesheet compilers
//!
//! A [`Color`] holds a hue/saturation/lightness triple plus alpha, in either
//! standard HSL or the perceptually uniform HUSL space. It renders to the
//! text downstream renderers expect (`#rrggbb`, or `rgba(...)` when
//! translucent) and supports per-channel arithmetic with other colors.
//!
//! ## Color spaces
//!
//! Components are stored as a tagged [`Components`] value, so HSL and HUSL
//! triples cannot be mixed by accident. Converting between the two always
//! goes through RGB:
//!
//! ```rust
//! use carto_color::Color;
//!
//! let red = Color::hsl(0.0, 1.0, 0.5);
//! let perceptual = red.to_perceptual();
//! assert!(perceptual.is_perceptual());
//! assert_eq!(perceptual.to_string(), "#ff0000");
//! ```
//!
//! ## Arithmetic
//!
//! [`Color::operate`] applies an [`Op`] to each RGB channel independently and
//! returns a color in the receiver's space with the receiver's alpha. The
//! other operand can be anything that converts into a [`ColorLike`]:
//!
//! ```rust
//! use carto_color::{Color, Dimension, Op};
//!
//! let gray = Color::hsl(0.0, 0.0, 0.5);
//! let darker = gray.operate(Op::Sub, Dimension::new(51.0)).unwrap();
//! assert_eq!(darker.to_string(), "#4d4d4d");
//! ```
//!
//! ## Modules
//!
//! - [`color`]: the value type and its components
//! - [`functions`]: stylesheet color functions (`lighten`, `mix`, ...)
//! - [`node`]: expression values and color coercion
//! - [`operate`]: scalar operators

pub mod color;
mod error;
pub mod functions;
pub mod node;
pub mod operate;
mod util;

pub use carto_color_space::{ParseColorError, Rgb};
pub use color::{
    Color, ColorComponents, ColorSpace, Components, Hsl, Husl, ALPHA_DECIMALS, DEFAULT_ALPHA,
};
pub use error::ColorError;
pub use node::{ColorLike, Dimension, ToColor, Value};
pub use operate::{operate, Op};
pub use util::round;
